use std::io::{self, Write};

use tracing_subscriber::filter::LevelFilter;

use super::logger::{self, parse_level};
use super::ProtocolError;

/// Session settings adjustable with `setoption`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    pub show_board: bool,
    pub log_level: LevelFilter,
    pub show_legal: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions::new(logger::DEFAULT_LEVEL)
    }
}

impl SessionOptions {
    #[must_use]
    pub fn new(log_level: LevelFilter) -> Self {
        SessionOptions {
            show_board: false,
            log_level,
            show_legal: false,
        }
    }

    /// Write the option table.
    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "option name Show Board type check default {}",
            self.show_board
        )?;
        writeln!(
            out,
            "option name Log Level type combo default {} var off var error var warn var info var debug var trace",
            self.log_level.to_string().to_ascii_lowercase()
        )?;
        writeln!(
            out,
            "option name Show Legal type check default {}",
            self.show_legal
        )
    }

    /// Apply one option. Names are matched case-insensitively.
    ///
    /// # Errors
    /// [`ProtocolError::UnknownOption`] for an unrecognised name and
    /// [`ProtocolError::InvalidOptionValue`] when the value does not fit.
    pub fn apply_setoption(&mut self, name: &str, value: Option<&str>) -> Result<(), ProtocolError> {
        let invalid = || ProtocolError::InvalidOptionValue {
            name: name.to_string(),
            value: value.unwrap_or_default().to_string(),
        };
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "show board" => self.show_board = parse_bool(value).ok_or_else(invalid)?,
            "show legal" => self.show_legal = parse_bool(value).ok_or_else(invalid)?,
            "log level" => {
                let level = value.and_then(parse_level).ok_or_else(invalid)?;
                self.log_level = level;
                logger::set_level(level);
            }
            _ => return Err(ProtocolError::UnknownOption(name.to_string())),
        }
        Ok(())
    }
}

fn parse_bool(value: Option<&str>) -> Option<bool> {
    match value?.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" => Some(true),
        "false" | "0" | "off" => Some(false),
        _ => None,
    }
}

/// Split `setoption name <N...> value <V...>` into name and optional value.
#[must_use]
pub fn parse_setoption(parts: &[&str]) -> Option<(String, Option<String>)> {
    if parts.first() != Some(&"setoption") {
        return None;
    }

    let mut name_parts: Vec<&str> = Vec::new();
    let mut value_parts: Vec<&str> = Vec::new();
    let mut in_value = false;
    let mut seen_name = false;

    for part in parts.iter().skip(1) {
        match *part {
            "name" if !seen_name => seen_name = true,
            "value" if seen_name && !in_value => in_value = true,
            _ if in_value => value_parts.push(part),
            _ if seen_name => name_parts.push(part),
            _ => {}
        }
    }

    if name_parts.is_empty() {
        return None;
    }

    let value = (!value_parts.is_empty()).then(|| value_parts.join(" "));
    Some((name_parts.join(" "), value))
}
