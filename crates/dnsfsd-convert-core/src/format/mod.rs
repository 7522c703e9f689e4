// crates/dnsfsd-convert-core/src/format/mod.rs

pub mod adblock;
pub mod dnscrypt_proxy;
pub mod hostfile;

use std::fmt;
use std::str::FromStr;

use crate::error::ConvertError;
use crate::rule::Rule;

/// Upstream list formats that can be converted to dnsfsd rules.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    Adblock,
    DnscryptProxy,
    Hostfile,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Adblock, Format::DnscryptProxy, Format::Hostfile];

    pub fn name(self) -> &'static str {
        match self {
            Format::Adblock => "adblock",
            Format::DnscryptProxy => "dnscrypt-proxy",
            Format::Hostfile => "hostfile",
        }
    }

    /// Name of the standalone filter binary for this format.
    pub fn bin_name(self) -> &'static str {
        match self {
            Format::Adblock => "dnsfsd-adblock",
            Format::DnscryptProxy => "dnsfsd-dnscrypt-proxy",
            Format::Hostfile => "dnsfsd-hostfile",
        }
    }

    /// The two comment lines written ahead of any converted rule.
    pub fn header(self) -> [&'static str; 2] {
        match self {
            Format::Adblock => [
                "# Converted from adblock plus 2.0 to dnsfsd",
                "# Script usage: dnsfsd-adblock < original.txt > converted.txt",
            ],
            Format::DnscryptProxy => [
                "# Converted from dnscrypt-proxy to dnsfsd",
                "# Script usage: dnsfsd-dnscrypt-proxy < original.txt > converted.txt",
            ],
            Format::Hostfile => [
                "# Converted hostfile to dnsfsd",
                "# Script usage: dnsfsd-hostfile < original.txt > converted.txt",
            ],
        }
    }

    /// Line classifier. Expects a line already passed through [`normalize_line`].
    pub fn skip_line(self, line: &str) -> bool {
        match self {
            Format::Adblock => adblock::skip_line(line),
            Format::DnscryptProxy => dnscrypt_proxy::skip_line(line),
            Format::Hostfile => hostfile::skip_line(line),
        }
    }

    /// Line transformer for a line the classifier accepted. `None` only for
    /// hostfile lines rejected by its own pair checks.
    pub fn convert(self, line: &str) -> Option<Rule> {
        match self {
            Format::Adblock => Some(adblock::convert(line)),
            Format::DnscryptProxy => Some(dnscrypt_proxy::convert(line)),
            Format::Hostfile => hostfile::convert(line),
        }
    }

    /// Classify then transform one raw input line.
    pub fn convert_line(self, raw: &str) -> Option<Rule> {
        let line = normalize_line(raw);
        if self.skip_line(line) {
            return None;
        }
        self.convert(line)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| ConvertError::UnknownFormat(s.to_string()))
    }
}

/// Drop the line terminator and surrounding whitespace.
pub fn normalize_line(raw: &str) -> &str {
    raw.trim_end_matches('\n').trim()
}
