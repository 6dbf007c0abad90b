//! Keyword option matching.

use tracing::trace;

use crate::grammar::KeywordOption;

use super::config::MatchMode;

/// Outcome of comparing one token against a keyword node's options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeywordMatch {
    Found(usize),
    Unknown,
    Ambiguous,
}

pub(crate) fn match_keyword(options: &[KeywordOption], token: &str, mode: MatchMode) -> KeywordMatch {
    match mode {
        MatchMode::Exact => options
            .iter()
            .position(|option| option.name() == token)
            .map_or(KeywordMatch::Unknown, KeywordMatch::Found),
        MatchMode::Prefix => {
            let mut matches = options
                .iter()
                .enumerate()
                .filter(|(_, option)| option.name().starts_with(token))
                .map(|(index, _)| index);
            let first = matches.next();
            let extra = matches.count();
            trace!(token, candidates = first.map_or(0, |_| extra + 1), "prefix match");
            match (first, extra) {
                (Some(index), 0) => KeywordMatch::Found(index),
                (Some(_), _) => KeywordMatch::Ambiguous,
                (None, _) => KeywordMatch::Unknown,
            }
        }
    }
}
