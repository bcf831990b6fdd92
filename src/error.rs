use crate::parser;

/// Crate Error type
#[derive(Debug)]
pub enum Error {
    Pest(Box<pest::error::Error<parser::Rule>>),
    /// Notation the parser recognizes but refuses, e.g. negative dice pools
    Unsupported(String),
    /// Malformed or empty notation, carries the offending input
    Parse(String),
    /// Invalid direct dice construction
    Dice(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pest(e) => write!(f, "{e}"),
            Self::Unsupported(e) => write!(f, "unsupported notation: {e}"),
            Self::Parse(e) => write!(f, "parse error: {e}"),
            Self::Dice(e) => write!(f, "invalid dice: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<pest::error::Error<parser::Rule>> for Error {
    fn from(value: pest::error::Error<parser::Rule>) -> Self {
        Self::Pest(Box::new(value))
    }
}

/// Crate Result type
pub type Result<T> = std::result::Result<T, Error>;
