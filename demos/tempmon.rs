//! Demo front end: each leading flag selects a grammar, which then consumes
//! the tokens after it.
//!
//! ```text
//! cargo run --example tempmon -- --tempmon fan 72 kelvin --percent 50
//! RUST_LOG=paramtree=trace cargo run --example tempmon -- -t range 10 30 c
//! ```

#[allow(dead_code)]
#[path = "tempmon_grammar.rs"]
mod tempmon;

use std::process::ExitCode;

use paramtree::{Engine, Grammar, GrammarBuilder, Node, NodeId, Usage, Value};
use tracing_subscriber::EnvFilter;

use tempmon::Log;

struct Entry {
    short: &'static str,
    long: &'static str,
    grammar: Grammar<Log>,
    root: NodeId,
}

impl Entry {
    fn single(short: &'static str, long: &'static str, node: Node<Log>) -> Self {
        let mut builder = GrammarBuilder::new();
        let root = builder.add(node);
        Self {
            short,
            long,
            grammar: builder.build(),
            root,
        }
    }

    fn matches(&self, flag: &str) -> bool {
        flag == self.short || flag == self.long
    }
}

fn int_at(trail: &paramtree::Trail<'_, Log>, n: usize) -> Result<i64, String> {
    trail
        .nth_value(n)
        .and_then(Value::as_int)
        .ok_or_else(|| format!("no integer at {n}"))
}

fn entries() -> Vec<Entry> {
    let tempmon = tempmon::build();
    let mut entries = vec![Entry {
        short: "-t",
        long: "--tempmon",
        grammar: tempmon.grammar,
        root: tempmon.root,
    }];

    entries.push(Entry::single(
        "-i",
        "--int",
        Node::integer()
            .with_name("int")
            .with_description("Integer to test.")
            .with_callback(|trail, log: &mut Log| {
                log.push(format!("Int action for: {}.", int_at(trail, 0)?));
                Ok(())
            }),
    ));

    let mut builder = GrammarBuilder::<Log>::new();
    let second = builder.add(
        Node::integer()
            .with_name("int2")
            .with_description("Second integer to test.")
            .with_callback(|trail, log: &mut Log| {
                let (first, second) = (int_at(trail, 0)?, int_at(trail, 1)?);
                log.push(format!("Intint action for: {first} {second}."));
                Ok(())
            }),
    );
    let first = builder.add(
        Node::integer()
            .with_name("int1")
            .with_description("First integer to test.")
            .then(second),
    );
    entries.push(Entry {
        short: "-I",
        long: "--intint",
        grammar: builder.build(),
        root: first,
    });

    entries.push(Entry::single(
        "-p",
        "--percent",
        Node::int_range(0, 100)
            .with_name("percent")
            .with_description("Percent to test.")
            .with_callback(|trail, log: &mut Log| {
                log.push(format!("Percent action for: {}.", int_at(trail, 0)?));
                Ok(())
            }),
    ));

    entries.push(Entry::single(
        "-s",
        "--string",
        Node::string()
            .with_name("string")
            .with_description("String to test.")
            .with_callback(|trail, log: &mut Log| {
                let text = trail.nth_value(0).and_then(Value::raw).unwrap_or_default();
                log.push(format!("String action for: {text}."));
                Ok(())
            }),
    ));

    entries
}

fn print_usage(program: &str, entries: &[Entry]) {
    println!("{program} <options> [<options> ...]");
    println!("Where <options> are:");
    for entry in entries {
        let flags = format!("  [{} | {}]", entry.short, entry.long);
        println!("{}", Usage::new(&entry.grammar, entry.root).program(&flags));
    }
    println!("  [-? | --help]: Print this message.");
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("tempmon");
    let entries = entries();
    let engine = Engine::default();

    let mut index = 1;
    while index < args.len() {
        let flag = args[index].as_str();
        if flag == "-?" || flag == "--help" {
            print_usage(program, &entries);
            index += 1;
            continue;
        }
        let Some(entry) = entries.iter().find(|entry| entry.matches(flag)) else {
            println!("Unrecognized option: {flag}\n");
            print_usage(program, &entries);
            return ExitCode::FAILURE;
        };

        let mut log = Log::new();
        match engine.process(&entry.grammar, entry.root, &args, index + 1, &mut log) {
            Ok(parsed) => {
                for line in &log {
                    println!("{line}");
                }
                for step in parsed.walk(&entry.grammar) {
                    if let Some(value) = step.value {
                        println!("{value}");
                    }
                }
                index = parsed.next_index();
            }
            Err(err) => {
                println!("Incorrect {flag} parameters: {err}");
                print_usage(program, &entries);
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
