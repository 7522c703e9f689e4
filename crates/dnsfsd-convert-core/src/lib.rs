pub mod error;
pub mod guard;
pub mod pipeline;
pub mod rule;

pub mod format;

pub use crate::error::{ConvertError, Result};
pub use crate::format::Format;
pub use crate::pipeline::{convert_stream, Summary};
pub use crate::rule::{parse_rule_line, Opcode, Rule};
