//! Usage text rendering
//!
//! Two views of the same grammar, neither of which looks at parsed values:
//!
//! - [`param_names`]: one placeholder per node on the unconditional chain
//!   (`next` pointers only), e.g. `<temp:integer> <units> `
//! - [`explain`]: an indented description of every documented or keyword
//!   node, descending into keyword branches
//!
//! [`Usage`] combines both into a block with a program name header.
//!
//! Rendering follows references without cycle detection; grammars built
//! through [`GrammarBuilder`](crate::grammar::GrammarBuilder) only point
//! backwards, so every branch ends.

use std::fmt;

use crate::base::NodeId;
use crate::grammar::{Grammar, KeywordOption, Node, NodeKind};

const INDENT: &str = "  ";

/// Nodes reached from `start` by following `next` only.
fn chain<'a, C>(
    grammar: &'a Grammar<C>,
    start: Option<NodeId>,
) -> impl Iterator<Item = &'a Node<C>> + 'a {
    std::iter::successors(start.and_then(|id| grammar.node(id)), move |node| {
        node.next().and_then(|id| grammar.node(id))
    })
}

/// Compact placeholder list for the unconditional chain from `start`.
///
/// Every placeholder is followed by one space; Action nodes contribute
/// nothing.
pub fn param_names<C>(grammar: &Grammar<C>, start: NodeId) -> String {
    let mut out = String::new();
    for node in chain(grammar, Some(start)) {
        if let Some(placeholder) = placeholder(node) {
            out.push_str(&placeholder);
            out.push(' ');
        }
    }
    out
}

fn placeholder<C>(node: &Node<C>) -> Option<String> {
    let labelled = |what: &str| match node.name() {
        Some(name) => format!("<{name}:{what}>"),
        None => format!("<{what}>"),
    };
    match node.kind() {
        NodeKind::String => Some(labelled("string")),
        NodeKind::Integer { range: Some(range) } => Some(labelled(&range.to_string())),
        NodeKind::Integer { range: None } => Some(labelled("integer")),
        NodeKind::Keyword { .. } => Some(format!("<{}>", node.name().unwrap_or("keyword"))),
        NodeKind::Action => None,
    }
}

/// Detailed explanation of the chain from `start`, indented one level.
pub fn explain<C>(grammar: &Grammar<C>, start: NodeId) -> String {
    let mut out = String::new();
    write_explanation(&mut out, grammar, Some(start), 1);
    out
}

fn write_explanation<C>(out: &mut String, grammar: &Grammar<C>, start: Option<NodeId>, depth: usize) {
    for node in chain(grammar, start) {
        let options = match node.kind() {
            NodeKind::Keyword { options } => Some(options),
            _ if node.description().is_some() => None,
            _ => continue,
        };

        let mut line = heading(node);
        if let Some(description) = node.description() {
            line.push(' ');
            line.push_str(description);
        }
        let Some(options) = options else {
            push_line(out, depth, &line);
            continue;
        };

        if options.is_empty() {
            push_line(out, depth, &line);
            continue;
        }
        line.push_str(" One of:");
        push_line(out, depth, &line);

        if options.iter().all(|option| option.branch_target().is_none()) {
            let names: Vec<&str> = options.iter().map(KeywordOption::name).collect();
            push_line(out, depth + 1, &names.join(" "));
            continue;
        }

        for option in options {
            let mut entry = option.name().to_owned();
            if let Some(branch) = option.branch_target() {
                entry.push(' ');
                entry.push_str(&param_names(grammar, branch));
            }
            push_line(out, depth + 1, &entry);
            write_explanation(out, grammar, option.branch_target(), depth + 2);
        }
    }
}

/// `<name>:` with ranges spelled out and kind-derived default names.
fn heading<C>(node: &Node<C>) -> String {
    match (node.range(), node.name()) {
        (Some(range), Some(name)) => format!("<{name}:{range}>:"),
        (Some(range), None) => format!("<{range}>:"),
        (None, name) => format!("<{}>:", name.unwrap_or(node.kind().label())),
    }
}

fn push_line(out: &mut String, depth: usize, text: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(text.trim_end());
    out.push('\n');
}

/// Full usage block for one grammar entry point.
///
/// ```text
/// tempmon <oper>
/// Where:
///   <oper>: Temperature monitor operation. One of:
///     on
///     ...
/// ```
pub struct Usage<'a, C> {
    grammar: &'a Grammar<C>,
    start: NodeId,
    program: Option<&'a str>,
}

impl<'a, C> Usage<'a, C> {
    pub fn new(grammar: &'a Grammar<C>, start: NodeId) -> Self {
        Self {
            grammar,
            start,
            program: None,
        }
    }

    /// Text printed before the parameter list, usually the program or flag
    /// name.
    pub fn program(mut self, program: &'a str) -> Self {
        self.program = Some(program);
        self
    }
}

impl<C> fmt::Display for Usage<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = param_names(self.grammar, self.start);
        match self.program {
            Some(program) => writeln!(f, "{}", format!("{program} {names}").trim_end())?,
            None => writeln!(f, "{}", names.trim_end())?,
        }

        let explanation = explain(self.grammar, self.start);
        if !explanation.is_empty() {
            writeln!(f, "Where:")?;
            f.write_str(&explanation)?;
        }
        Ok(())
    }
}
