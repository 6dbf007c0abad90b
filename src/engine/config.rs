/// How keyword tokens are compared with option names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchMode {
    /// Case-sensitive full equality; the first equal option wins.
    Exact,
    /// The token may be any prefix of exactly one option name.
    #[default]
    Prefix,
}

/// Engine-wide parsing behaviour.
///
/// The default accepts unambiguous keyword prefixes, allows Action nodes and
/// leaves trailing tokens for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EngineConfig {
    pub match_mode: MatchMode,
    /// When false, reaching an Action node is an invocation error.
    pub allow_actions: bool,
    /// When true, tokens left after the grammar ends are an error.
    pub reject_trailing: bool,
}

impl EngineConfig {
    /// Exact keyword matching without Action nodes.
    pub fn exact() -> Self {
        Self {
            match_mode: MatchMode::Exact,
            allow_actions: false,
            reject_trailing: false,
        }
    }

    /// Prefix keyword matching with Action nodes.
    pub fn prefix() -> Self {
        Self {
            match_mode: MatchMode::Prefix,
            allow_actions: true,
            reject_trailing: false,
        }
    }

    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }

    pub fn with_actions(mut self, allow_actions: bool) -> Self {
        self.allow_actions = allow_actions;
        self
    }

    pub fn with_reject_trailing(mut self, reject_trailing: bool) -> Self {
        self.reject_trailing = reject_trailing;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::prefix()
    }
}
