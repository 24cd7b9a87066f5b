//! Error handling for texcanon
//!
//! Canonicalization is best effort and never fails on its own: a skipped
//! stage is reported as a [`NormalizeWarning`]. The strict entry points turn
//! the relevant warnings into a [`NormalizeError`].

use std::fmt;

/// Normalization error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// Delimiters do not nest after literal-brace normalization
    Unbalanced { input: String },
    /// Invalid input
    InvalidInput { message: String },
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeError::Unbalanced { input } => {
                write!(f, "Unbalanced delimiters in '{}'", input)
            }
            NormalizeError::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
        }
    }
}

impl std::error::Error for NormalizeError {}

/// Result type for normalization operations
pub type NormalizeResult<T> = Result<T, NormalizeError>;

// Convenience constructors for errors
impl NormalizeError {
    pub fn unbalanced(input: impl Into<String>) -> Self {
        NormalizeError::Unbalanced {
            input: input.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        NormalizeError::InvalidInput {
            message: message.into(),
        }
    }
}

/// Normalization warnings (non-fatal issues)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeWarning {
    /// Stage 1 was skipped because the delimiters do not nest
    Unbalanced,
    /// A bounded pass stopped at its ceiling while still making progress
    PassLimitReached { pass: &'static str, limit: usize },
}

impl fmt::Display for NormalizeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeWarning::Unbalanced => {
                write!(f, "Warning: unbalanced delimiters, structural cleanup skipped")
            }
            NormalizeWarning::PassLimitReached { pass, limit } => {
                write!(f, "Warning: {} stopped after {} passes", pass, limit)
            }
        }
    }
}

/// Normalization output with optional warnings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeOutput {
    /// The canonical text
    pub content: String,
    /// Any warnings generated along the way
    pub warnings: Vec<NormalizeWarning>,
}

impl NormalizeOutput {
    pub fn new(content: String) -> Self {
        Self {
            content,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(content: String, warnings: Vec<NormalizeWarning>) -> Self {
        Self { content, warnings }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Whether the structural cleanup was skipped for imbalance
    pub fn is_unbalanced(&self) -> bool {
        self.warnings.contains(&NormalizeWarning::Unbalanced)
    }
}
