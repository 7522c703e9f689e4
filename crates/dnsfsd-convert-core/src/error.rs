use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvertError>;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("no data piped in to script")]
    NoInput,

    #[error("unknown input format: {0}")]
    UnknownFormat(String),

    #[error("rule format error: {0}")]
    RuleFormat(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
