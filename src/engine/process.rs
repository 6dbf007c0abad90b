//! The consumption loop.

use tracing::{debug, trace};

use crate::base::NodeId;
use crate::grammar::{Grammar, Node, NodeKind};

use super::config::EngineConfig;
use super::errors::{ParseError, ParseErrorKind};
use super::keyword::{KeywordMatch, match_keyword};
use super::literal::parse_integer;
use super::resolve::resolve_next;
use super::trail::{Trail, Walk};
use super::values::{Value, Values};

/// Walks token streams against grammars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engine {
    config: EngineConfig,
}

/// A successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    root: NodeId,
    start: usize,
    next: usize,
    values: Values,
}

impl Parsed {
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn values(&self) -> &Values {
        &self.values
    }

    pub fn into_values(self) -> Values {
        self.values
    }

    pub fn value(&self, id: NodeId) -> Option<&Value> {
        self.values.get(id)
    }

    /// Number of tokens consumed.
    pub fn consumed(&self) -> usize {
        self.next - self.start
    }

    /// Index of the last token consumed, if any was.
    pub fn last_index(&self) -> Option<usize> {
        (self.next > self.start).then(|| self.next - 1)
    }

    /// Index of the first token not consumed; where a following grammar
    /// should start.
    pub fn next_index(&self) -> usize {
        self.next
    }

    pub fn trail<'a, C>(&'a self, grammar: &'a Grammar<C>) -> Trail<'a, C> {
        Trail::new(grammar, &self.values, self.root)
    }

    /// The path taken, from the root.
    pub fn walk<'a, C>(&'a self, grammar: &'a Grammar<C>) -> Walk<'a, C> {
        self.trail(grammar).walk()
    }
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Consume `tokens[start..]` against the grammar beginning at `root`.
    ///
    /// Each String, Integer and Keyword node takes one token; Action nodes
    /// take none. After a node is accepted its callback runs with a trail
    /// rooted at `root` and with `ctx`. The walk ends when the last node on
    /// the chosen path has been accepted; tokens after that are left alone
    /// unless [`EngineConfig::reject_trailing`] is set.
    pub fn process<C, S>(
        &self,
        grammar: &Grammar<C>,
        root: NodeId,
        tokens: &[S],
        start: usize,
        ctx: &mut C,
    ) -> Result<Parsed, ParseError>
    where
        S: AsRef<str>,
    {
        debug!(%root, start, tokens = tokens.len(), "processing arguments");

        if !grammar.contains(root) {
            return Err(ParseError::invalid_invocation(
                format!("start node {root} is not part of the grammar"),
                start,
            ));
        }
        if start > tokens.len() {
            return Err(ParseError::invalid_invocation(
                format!(
                    "start offset {start} is past the end of {} arguments",
                    tokens.len()
                ),
                start,
            ));
        }

        let mut values = Values::new();
        let mut position = start;
        let mut current = root;

        loop {
            let Some(node) = grammar.node(current) else {
                return Err(ParseError::invalid_invocation(
                    format!("node {current} is not part of the grammar"),
                    position,
                )
                .with_partial(values));
            };

            let at = position;
            let value = match self.accept(node, tokens.get(at).map(|token| token.as_ref())) {
                Ok(value) => value,
                Err(kind) => {
                    debug!(node = %current, position = at, error = %kind, "argument rejected");
                    return Err(ParseError::new(kind, at)
                        .at_node(current)
                        .with_partial(values));
                }
            };
            if node.kind().consumes_token() {
                position += 1;
            }
            trace!(node = %current, position = at, %value, "accepted");
            values.record(current, value);

            if let Some(callback) = node.callback() {
                let trail = Trail::new(grammar, &values, root);
                if let Err(message) = callback(&trail, &mut *ctx) {
                    debug!(node = %current, position = at, %message, "callback failed");
                    let message = if message.is_empty() {
                        format!("Callback for <{}> failed.", node_label(node))
                    } else {
                        message
                    };
                    return Err(ParseError::new(ParseErrorKind::CallbackFailed(message), at)
                        .at_node(current)
                        .with_partial(values));
                }
            }

            match resolve_next(grammar, &values, current) {
                Some(next) => current = next,
                None => break,
            }
        }

        if self.config.reject_trailing && position < tokens.len() {
            return Err(
                ParseError::new(ParseErrorKind::UnusedArguments(tokens.len() - position), position)
                    .with_partial(values),
            );
        }

        debug!(%root, consumed = position - start, "arguments processed");
        Ok(Parsed {
            root,
            start,
            next: position,
            values,
        })
    }

    /// Type check and convert the token for one node.
    fn accept<C>(&self, node: &Node<C>, token: Option<&str>) -> Result<Value, ParseErrorKind> {
        let token = match node.kind() {
            NodeKind::Action if self.config.allow_actions => return Ok(Value::Action),
            NodeKind::Action => {
                return Err(ParseErrorKind::InvalidInvocation(
                    "action nodes are disabled in this engine configuration".into(),
                ));
            }
            _ => token.ok_or(ParseErrorKind::MissingArguments)?,
        };

        match node.kind() {
            NodeKind::String => Ok(Value::String(token.to_owned())),
            NodeKind::Integer { range } => {
                let value = parse_integer(token)
                    .ok_or_else(|| ParseErrorKind::InvalidInteger(token.to_owned()))?;
                if let Some(range) = range {
                    if !range.contains(value) {
                        return Err(ParseErrorKind::OutOfRange {
                            value,
                            min: range.min,
                            max: range.max,
                        });
                    }
                }
                Ok(Value::Integer {
                    raw: token.to_owned(),
                    value,
                })
            }
            NodeKind::Keyword { options } => {
                match match_keyword(options, token, self.config.match_mode) {
                    KeywordMatch::Found(index) => Ok(Value::Keyword {
                        raw: token.to_owned(),
                        value: options[index].value(),
                        index,
                    }),
                    KeywordMatch::Unknown => Err(ParseErrorKind::UnknownKeyword(token.to_owned())),
                    KeywordMatch::Ambiguous => {
                        Err(ParseErrorKind::AmbiguousKeyword(token.to_owned()))
                    }
                }
            }
            NodeKind::Action => Ok(Value::Action),
        }
    }
}

fn node_label<C>(node: &Node<C>) -> &str {
    node.name().unwrap_or(node.kind().label())
}
