use thiserror::Error;

/// Reasons a single feedback file cannot be graded.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("Feedback has {found} lines, trailer needs at least {needed}")]
    TooShort { needed: usize, found: usize },

    #[error("Missing ':' in trailer line {line:?}")]
    MissingColon { line: String },

    #[error("Invalid number {value:?} in trailer line {line:?}")]
    InvalidNumber { line: String, value: String },

    #[error("No 'N of M' score line found")]
    MissingTotal,

    #[error("Cannot decode identifiers from file name {0:?}")]
    InvalidFileName(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("Invalid file pattern: {0}")]
    Glob(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<glob::PatternError> for Error {
    fn from(e: glob::PatternError) -> Self {
        Error::Glob(e.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParseError(e.message().to_string())
    }
}
