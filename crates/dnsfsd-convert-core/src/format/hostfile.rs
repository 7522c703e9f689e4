// crates/dnsfsd-convert-core/src/format/hostfile.rs
//
// Blocking hostfiles: `<directive> <domain>`, one space apart.
// `0.0.0.0` blocks. Any other directive is read as "resolve normally" and
// becomes a whitelist entry, apart from the `localhost 127.0.0.1` default.

use crate::rule::Rule;

pub const BLOCK_DIRECTIVE: &str = "0.0.0.0";

pub fn skip_line(line: &str) -> bool {
    line.trim().is_empty() || line.starts_with('#')
}

pub fn convert(line: &str) -> Option<Rule> {
    let parts: Vec<&str> = line.split(' ').collect();
    let [directive, domain] = parts.as_slice() else {
        return None;
    };

    if *directive == "localhost" && *domain == "127.0.0.1" {
        return None;
    }

    if *directive == BLOCK_DIRECTIVE {
        Some(Rule::block(*domain))
    } else {
        Some(Rule::allow(*domain))
    }
}
