// crates/dnsfsd-convert-cli/src/lib.rs

pub mod cmd;
pub mod logging;
