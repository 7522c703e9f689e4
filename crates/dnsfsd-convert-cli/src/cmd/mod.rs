// crates/dnsfsd-convert-cli/src/cmd/mod.rs

pub mod convert;
