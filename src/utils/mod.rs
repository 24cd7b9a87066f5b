//! Utility modules
//!
//! This module contains error, warning and output types.

pub mod error;

// Re-export commonly used items
pub use error::{NormalizeError, NormalizeOutput, NormalizeResult, NormalizeWarning};
