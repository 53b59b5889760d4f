//! Mouse input scripts
//!
//! One command per line:
//! ```text
//! # comment
//! click left
//! wait 100
//! double
//! set double-click false
//! status
//! ```

use anyhow::{bail, Context, Result};
use pauseclick_core::MouseButton;
use std::time::Duration;

/// A single script command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    Press(MouseButton),
    Release(MouseButton),
    /// Press followed by release
    Click(MouseButton),
    /// Left press carrying the host's double click signal, then release
    Double,
    Wait(Duration),
    Set { key: String, value: String },
    Unset(String),
    Status,
}

/// Parse one line; blank lines and comments yield `None`
pub fn parse_line(line: &str) -> Result<Option<ScriptCommand>> {
    let line = match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    };
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };

    let command = match verb {
        "press" => ScriptCommand::Press(button_arg(words.next())?),
        "release" => ScriptCommand::Release(button_arg(words.next())?),
        "click" => ScriptCommand::Click(button_arg(words.next())?),
        "double" => ScriptCommand::Double,
        "wait" => {
            let ms = words.next().context("wait needs a duration in milliseconds")?;
            let ms: u64 = ms
                .parse()
                .with_context(|| format!("Invalid duration: {}", ms))?;
            ScriptCommand::Wait(Duration::from_millis(ms))
        }
        "set" => {
            let key = words.next().context("set needs a key")?;
            let value = words.next().context("set needs a value")?;
            ScriptCommand::Set {
                key: key.to_string(),
                value: value.to_string(),
            }
        }
        "unset" => ScriptCommand::Unset(words.next().context("unset needs a key")?.to_string()),
        "status" => ScriptCommand::Status,
        other => bail!("Unknown command: {}", other),
    };

    if let Some(extra) = words.next() {
        bail!("Unexpected argument: {}", extra);
    }

    Ok(Some(command))
}

fn button_arg(word: Option<&str>) -> Result<MouseButton> {
    let word = word.context("Missing mouse button")?;
    Ok(word.parse()?)
}
