use std::{error::Error, fmt, io};

/// The crate's result type.
pub type Result<T> = std::result::Result<T, GenErr>;

/// Matrix generation failures.
#[derive(Debug)]
pub enum GenErr {
    /// Displayed as the underlying failure, with no extra context.
    Io(io::Error),
    InvalidConfig(String),
    InvalidDistribution(String),
    SizeMismatch { got: usize, expected: usize },
}

impl fmt::Display for GenErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenErr::Io(e) => write!(f, "{e}"),
            GenErr::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            GenErr::InvalidDistribution(msg) => write!(f, "invalid distribution: {msg}"),
            GenErr::SizeMismatch { got, expected } => {
                write!(f, "size mismatch: got {got} bytes, expected {expected}")
            }
        }
    }
}

impl Error for GenErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GenErr::Io(e) => e.source(),
            _ => None,
        }
    }
}

impl From<io::Error> for GenErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}
