// error.rs - Library error type

use thiserror::Error;

/// Coarse error classes exposed to whatever transport sits on top of the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or uncoercible input
    Input,
    /// Unknown sample identifier
    NotFound,
    /// Unrecoverable failure for a single request
    Internal,
}

/// Main error type for motifdist operations
#[derive(Error, Debug)]
pub enum MotifError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Invalid value '{value}' for field '{field}' at row {row}: {message}")]
    InvalidField {
        row: usize,
        field: String,
        value: String,
        message: String,
    },

    #[error("Sample ID not found: {identifier}")]
    NotFound { identifier: String },

    #[error("Computation error: {message}")]
    Computation { message: String },

    #[error("Output error: {message}")]
    Output { message: String },
}

impl MotifError {
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn invalid_field<S: Into<String>>(row: usize, field: S, value: S, message: S) -> Self {
        Self::InvalidField {
            row,
            field: field.into(),
            value: value.into(),
            message: message.into(),
        }
    }

    pub fn not_found<S: Into<String>>(identifier: S) -> Self {
        Self::NotFound {
            identifier: identifier.into(),
        }
    }

    pub fn computation<S: Into<String>>(message: S) -> Self {
        Self::Computation {
            message: message.into(),
        }
    }

    pub fn output<S: Into<String>>(message: S) -> Self {
        Self::Output {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            MotifError::InvalidInput { .. } | MotifError::InvalidField { .. } => ErrorKind::Input,
            MotifError::NotFound { .. } => ErrorKind::NotFound,
            MotifError::Computation { .. } | MotifError::Output { .. } => ErrorKind::Internal,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

pub type Result<T> = std::result::Result<T, MotifError>;
