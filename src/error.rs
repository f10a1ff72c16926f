//! Crate-level error types.

use std::fmt;

/// Errors produced by the swivel crate.
///
/// The rotation controller itself is infallible — numerically
/// degenerate input is handled as a silent no-op — so errors only arise
/// at the options file boundary.
#[derive(Debug)]
pub enum SwivelError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for SwivelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for SwivelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for SwivelError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
