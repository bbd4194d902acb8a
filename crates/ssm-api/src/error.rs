//! Error types for SSM client operations

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classified service fault codes.
///
/// These are the error codes calling code is expected to branch on. Any
/// other failure is reported as [`SsmError::Unclassified`] and can only be
/// told apart by its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// The session target exists but its agent cannot be reached
    TargetNotConnected,
    /// The referenced session (or other resource) does not exist
    DoesNotExistException,
    /// The command id is malformed or unknown to the service
    InvalidCommandId,
}

impl ErrorCode {
    /// Wire name of the code, as reported by the service
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TargetNotConnected => "TargetNotConnected",
            Self::DoesNotExistException => "DoesNotExistException",
            Self::InvalidCommandId => "InvalidCommandId",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for SSM client operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SsmError {
    /// Service fault carrying a discoverable code
    #[error("{code}: {message}")]
    Service {
        /// Fault code
        code: ErrorCode,
        /// Human-readable message
        message: String,
    },

    /// Any other failure, distinguished only by its message
    #[error("{0}")]
    Unclassified(String),

    /// The request itself is inconsistent (a caller bug)
    #[error("validation error: {0}")]
    Validation(String),

    /// No fixture is registered for the given key (strict test doubles only)
    #[error("no {operation} fixture registered for {key:?}")]
    UnknownFixture {
        /// Operation that was called
        operation: &'static str,
        /// Identifier that had no fixture
        key: String,
    },
}

impl SsmError {
    /// Build a classified service fault
    pub fn service(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Service {
            code,
            message: message.into(),
        }
    }

    /// Fault code, if this is a classified service fault
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Service { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Check whether this error carries the given fault code
    pub fn is_code(&self, code: ErrorCode) -> bool {
        self.code() == Some(code)
    }
}

/// An operation failed but still produced an output.
///
/// Callers must inspect the error independently of the output: the output
/// being present says nothing about whether the call succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error}")]
pub struct PartialOutputError<T: fmt::Debug> {
    /// Output returned alongside the failure
    pub output: T,
    /// The failure itself
    #[source]
    pub error: SsmError,
}

impl<T: fmt::Debug> PartialOutputError<T> {
    /// Fault code of the inner error
    pub fn code(&self) -> Option<ErrorCode> {
        self.error.code()
    }

    /// Split into output and error
    pub fn into_parts(self) -> (T, SsmError) {
        (self.output, self.error)
    }
}
