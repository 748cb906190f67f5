//! Math error types

use std::fmt;

/// Error type for checked vector operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// A divisor (scalar, component, or magnitude) was zero
    DivisionByZero {
        /// Name of the operation that rejected the divisor
        operation: &'static str,
    },
    /// Text could not be parsed into a vector
    Parse(String),
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::DivisionByZero { operation } => {
                write!(f, "Division by zero in {}", operation)
            }
            MathError::Parse(msg) => write!(f, "Vector parse error: {}", msg),
        }
    }
}

impl std::error::Error for MathError {}

impl From<String> for MathError {
    fn from(msg: String) -> Self {
        MathError::Parse(msg)
    }
}

impl From<&str> for MathError {
    fn from(msg: &str) -> Self {
        MathError::Parse(msg.to_string())
    }
}
