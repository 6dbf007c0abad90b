//! The temperature monitor grammar, shared by the demo and the integration
//! tests.
//!
//! ```text
//! <oper>
//!   on | off
//!   fan    <temp:integer> <units>
//!   heater <temp:integer> <units>
//!   range  <temp:integer> <temp:integer> <units>
//!   alarm  <level>
//! ```
//!
//! Callbacks append a line describing the request to the `Vec<String>`
//! context.

use paramtree::{Grammar, GrammarBuilder, KeywordOption, Node, NodeId, Trail, Value};

pub type Log = Vec<String>;

pub const KELVIN: i64 = 0;
pub const CELCIUS: i64 = 1;
pub const FARENHEIT: i64 = 2;

pub const OPER_ON: i64 = 0;
pub const OPER_OFF: i64 = 1;
pub const OPER_FAN: i64 = 2;
pub const OPER_HEATER: i64 = 3;
pub const OPER_RANGE: i64 = 4;
pub const OPER_ALARM: i64 = 5;

pub struct Tempmon {
    pub grammar: Grammar<Log>,
    pub root: NodeId,
    pub fan_temp: NodeId,
    pub fan_units: NodeId,
}

fn units_options() -> [KeywordOption; 3] {
    [
        KeywordOption::new("kelvin", KELVIN),
        KeywordOption::new("celcius", CELCIUS),
        KeywordOption::new("farenheit", FARENHEIT),
    ]
}

fn units<'a>(trail: &Trail<'a, Log>, n: usize) -> Result<(&'a str, i64), String> {
    let value = trail.nth_value(n).ok_or("units not recorded")?;
    match value {
        Value::Keyword { raw, value, .. } => Ok((raw.as_str(), *value)),
        other => Err(format!("expected units, found {other}")),
    }
}

fn temperature(trail: &Trail<'_, Log>, n: usize) -> Result<i64, String> {
    trail
        .nth_value(n)
        .and_then(Value::as_int)
        .ok_or_else(|| "temperature not recorded".to_owned())
}

pub fn build() -> Tempmon {
    let mut g = GrammarBuilder::<Log>::new();

    let on = g.add(Node::action(|_, log: &mut Log| {
        log.push("Set temperature monitoring ON.".into());
        Ok(())
    }));
    let off = g.add(Node::action(|_, log: &mut Log| {
        log.push("Set temperature monitoring OFF.".into());
        Ok(())
    }));

    let fan_units = g.add(
        Node::keyword(units_options())
            .with_name("units")
            .with_description("Temperature units.")
            .with_callback(|trail, log: &mut Log| {
                let temp = temperature(trail, 1)?;
                let (name, units) = units(trail, 2)?;
                log.push(format!(
                    "Set fan on at or above {temp} degrees {name} ({units})."
                ));
                Ok(())
            }),
    );
    let fan_temp = g.add(
        Node::integer()
            .with_name("temp")
            .with_description("High temperature to activate.")
            .then(fan_units),
    );

    let heater_units = g.add(
        Node::keyword(units_options())
            .with_name("units")
            .with_description("Temperature units.")
            .with_callback(|trail, log: &mut Log| {
                let temp = temperature(trail, 1)?;
                let (name, units) = units(trail, 2)?;
                log.push(format!(
                    "Set heater on at or below {temp} degrees {name} ({units})."
                ));
                Ok(())
            }),
    );
    let heater_temp = g.add(
        Node::integer()
            .with_name("temp")
            .with_description("Low temperature to activate.")
            .then(heater_units),
    );

    let range_units = g.add(
        Node::keyword(units_options())
            .with_name("units")
            .with_description("Temperature units.")
            .with_callback(|trail, log: &mut Log| {
                let min = temperature(trail, 1)?;
                let max = temperature(trail, 2)?;
                if min > max {
                    return Err(format!("Minimum {min} is above maximum {max}."));
                }
                let (name, units) = units(trail, 3)?;
                log.push(format!(
                    "Signal alarm below {min} or above {max} degrees {name} ({units})."
                ));
                Ok(())
            }),
    );
    let range_max = g.add(
        Node::integer()
            .with_name("temp")
            .with_description("Maximum temperature to trigger alarm.")
            .then(range_units),
    );
    let range_min = g.add(
        Node::integer()
            .with_name("temp")
            .with_description("Minimum temperature to trigger alarm.")
            .then(range_max),
    );

    let level = g.add(
        Node::keyword([
            KeywordOption::new("low", 0),
            KeywordOption::new("medium", 1),
            KeywordOption::new("high", 2),
        ])
        .with_name("level")
        .with_description("Alarm level when temperature exceeds range.")
        .with_callback(|trail, log: &mut Log| {
            let level = trail.nth_value(1).ok_or("level not recorded")?;
            if let Value::Keyword { raw, value, .. } = level {
                log.push(format!("Set alarm level to {raw} ({value})."));
            }
            Ok(())
        }),
    );

    let root = g.add(
        Node::keyword([
            KeywordOption::new("on", OPER_ON).branch(on),
            KeywordOption::new("off", OPER_OFF).branch(off),
            KeywordOption::new("fan", OPER_FAN).branch(fan_temp),
            KeywordOption::new("heater", OPER_HEATER).branch(heater_temp),
            KeywordOption::new("range", OPER_RANGE).branch(range_min),
            KeywordOption::new("alarm", OPER_ALARM).branch(level),
        ])
        .with_name("oper")
        .with_description("Temperature monitor operation."),
    );

    Tempmon {
        grammar: g.build(),
        root,
        fan_temp,
        fan_units,
    }
}
