// crates/dnsfsd-convert-core/src/rule.rs
//
// dnsfsd rule lines: `<op>;<flag>;<value>`.
// op   = e (equals) | c (contains) | r (regexp)
// flag = "" (block) | "w..." (whitelist)

use std::fmt;

use crate::error::{ConvertError, Result};

const WHITELIST_CHAR: char = 'w';

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    Equals,
    Contains,
    Regexp,
}

impl Opcode {
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Opcode::Equals => "e",
            Opcode::Contains => "c",
            Opcode::Regexp => "r",
        }
    }

    pub fn from_prefix(s: &str) -> Option<Self> {
        match s {
            "e" => Some(Opcode::Equals),
            "c" => Some(Opcode::Contains),
            "r" => Some(Opcode::Regexp),
            _ => None,
        }
    }
}

/// One dnsfsd rule. Converters only ever produce `Equals` rules.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rule {
    pub opcode: Opcode,
    pub whitelist: bool,
    pub value: String,
}

impl Rule {
    pub fn new(opcode: Opcode, whitelist: bool, value: impl Into<String>) -> Self {
        Self {
            opcode,
            whitelist,
            value: value.into(),
        }
    }

    /// `e;;<value>`
    pub fn block(value: impl Into<String>) -> Self {
        Self::new(Opcode::Equals, false, value)
    }

    /// `e;w;<value>`
    pub fn allow(value: impl Into<String>) -> Self {
        Self::new(Opcode::Equals, true, value)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = if self.whitelist { "w" } else { "" };
        write!(f, "{};{};{}", self.opcode.as_str(), flag, self.value)
    }
}

/// Parse one line the way the dnsfsd daemon reads its rule files.
///
/// Blank and `#` comment lines yield `Ok(None)`. The value part may itself
/// contain `;` since only the first two separators are significant.
///
/// Surrounding spaces of the whole line are trimmed, so a rule whose value
/// ends in a space (`e;;x `) comes back with that space removed. The daemon
/// reads it the same way.
pub fn parse_rule_line(text: &str) -> Result<Option<Rule>> {
    let text = text.trim_end_matches('\n').trim_matches(' ');

    if text.starts_with('#') {
        return Ok(None);
    }
    if text.is_empty() {
        return Ok(None);
    }

    let split: Vec<&str> = text.splitn(3, ';').collect();
    let (whitelist, value) = match split.as_slice() {
        [_, flag, value] => (flag.starts_with(WHITELIST_CHAR), *value),
        [_, value] => (false, *value),
        _ => {
            return Err(ConvertError::RuleFormat(format!(
                "could not parse rule '{text}' as it is in an invalid format"
            )))
        }
    };

    let opcode = Opcode::from_prefix(split[0]).ok_or_else(|| {
        ConvertError::RuleFormat(format!(
            "could not parse rule '{text}' as opcode `{}` is unknown",
            split[0]
        ))
    })?;

    Ok(Some(Rule::new(opcode, whitelist, value)))
}
