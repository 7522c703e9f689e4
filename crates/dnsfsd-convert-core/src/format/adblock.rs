// crates/dnsfsd-convert-core/src/format/adblock.rs
//
// Adblock Plus 2.0 lists. Only two rule shapes are understood:
//   |address|   exact address
//   ||domain^   domain (and subdomains)
// Everything else (cosmetic, exception, options) is dropped.

use crate::rule::Rule;

pub fn skip_line(line: &str) -> bool {
    if line.trim().is_empty() {
        return true;
    }

    let exact = line.starts_with('|') && line.ends_with('|');
    let domain = line.starts_with("||") && line.ends_with('^');
    !(exact || domain)
}

pub fn convert(line: &str) -> Rule {
    if line.starts_with("||") {
        return Rule::block(strip_anchors(line, 2));
    }
    Rule::block(strip_anchors(line, 1))
}

/// Drop `lead` leading bytes and the final byte. Both are ASCII anchors, so
/// the cut always lands on a char boundary. Degenerate lines (`|`, `||`)
/// collapse to an empty value.
fn strip_anchors(line: &str, lead: usize) -> &str {
    let end = line.len().saturating_sub(1);
    if end <= lead {
        return "";
    }
    &line[lead..end]
}
