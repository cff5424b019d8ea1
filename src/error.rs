use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    InvalidData(String),
    InvalidConfig(String),
    /// A weight matrix, instance or dataset disagrees with the layer it feeds.
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
    /// Integer node tag outside `0..=4`.
    InvalidNodeKind {
        code: i32,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidData(msg) => write!(f, "invalid data: {msg}"),
            Error::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Error::DimensionMismatch {
                what,
                expected,
                actual,
            } => write!(
                f,
                "dimension mismatch: {what} has len {actual}, expected {expected}"
            ),
            Error::InvalidNodeKind { code } => {
                write!(f, "invalid node kind {code}, expected 0..=4")
            }
        }
    }
}

impl std::error::Error for Error {}
