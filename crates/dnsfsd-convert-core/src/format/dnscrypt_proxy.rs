// crates/dnsfsd-convert-core/src/format/dnscrypt_proxy.rs

use crate::rule::Rule;

pub fn skip_line(line: &str) -> bool {
    line.trim().is_empty() || line.starts_with('#')
}

/// The line is taken verbatim; dnscrypt-proxy wildcards are not interpreted.
pub fn convert(line: &str) -> Rule {
    Rule::block(line)
}
