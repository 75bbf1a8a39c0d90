// ⚠️ Error Taxonomy - every fallible exercise returns one of these
// Sessions turn them into a message + re-prompt; nothing here is fatal.

use thiserror::Error;

// ============================================================================
// ERROR KIND
// ============================================================================

/// Coarse category of a failure, used as a structured logging field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Non-numeric text where a number was expected
    InvalidNumericInput,
    /// Number or token outside the allowed domain (negative n, unknown unit, ...)
    InvalidDomainValue,
    /// Wrong shape of input (not a list, mixed list)
    InvalidType,
    /// Registration / login rule violated
    BusinessRule,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidNumericInput => "INPUT_NOT_NUMERIC",
            ErrorKind::InvalidDomainValue => "INPUT_OUT_OF_DOMAIN",
            ErrorKind::InvalidType => "INPUT_WRONG_TYPE",
            ErrorKind::BusinessRule => "AUTH_RULE_VIOLATION",
        }
    }
}

// ============================================================================
// LAB ERROR
// ============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LabError {
    #[error("'{input}' is not a valid number")]
    InvalidNumber { input: String },

    #[error("{0}")]
    InvalidValue(String),

    #[error("{0}")]
    InvalidUnit(String),

    #[error("{0}")]
    InvalidType(String),
}

impl LabError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LabError::InvalidNumber { .. } => ErrorKind::InvalidNumericInput,
            LabError::InvalidValue(_) | LabError::InvalidUnit(_) => ErrorKind::InvalidDomainValue,
            LabError::InvalidType(_) => ErrorKind::InvalidType,
        }
    }

    /// Shorthand for a failed numeric parse of `input`
    pub fn not_a_number(input: impl Into<String>) -> Self {
        LabError::InvalidNumber { input: input.into() }
    }
}

pub type LabResult<T> = Result<T, LabError>;

// ============================================================================
// AUTH ERROR
// ============================================================================

/// Business-rule violations from the credential store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Username already exists!")]
    DuplicateUsername,

    #[error("Username must be at least {min} characters long!")]
    UsernameTooShort { min: usize },

    #[error("Password must be at least {min} characters long!")]
    PasswordTooShort { min: usize },

    #[error("Passwords do not match!")]
    PasswordMismatch,

    #[error("Username not found!")]
    UnknownUsername,

    #[error("Incorrect password!")]
    WrongPassword,
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::BusinessRule
    }
}
