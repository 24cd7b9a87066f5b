//! # texcanon
//!
//! Canonicalize loosely formatted LaTeX math answers for a symbolic parser.
//!
//! ## Features
//!
//! - **Structural Cleanup**: balance checking, `\boxed` unwrapping, redundant
//!   brace stripping, right-hand-side extraction
//! - **Notation Canonicalization**: styling command removal, operator name
//!   fixes, shorthand fractions, exponent fractions, vector notation
//! - **No Parse Tree**: every pass is a bounded text rewrite over brace
//!   positions
//! - **WASM Support**: Compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ```rust
//! use texcanon::{normalize, preprocess_structure};
//!
//! assert_eq!(preprocess_structure(r"\boxed{x=5}"), "5");
//! assert_eq!(normalize(r"\boxed{E = \dfrac12 m v^2}."), r"\frac{1}{2} m v^2");
//! ```
//!
//! ### Reports and strict mode
//!
//! ```rust
//! use texcanon::{normalize_with_report, try_normalize, NormalizeOptions};
//!
//! let output = normalize_with_report("{x=5", &NormalizeOptions::default());
//! assert!(output.is_unbalanced());
//!
//! assert!(try_normalize("{x=5").is_err());
//! ```

/// Core normalization modules
pub mod core;

/// Data layer - static rewrite tables
pub mod data;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core functions and types
pub use crate::core::{
    canonicalize_notation, convert_with, preprocess_structure, BoxedMode, ConversionConfig,
    ExpressionParser, NormalizationConfig, NormalizeOptions, Normalizer,
};

// Re-export scanning primitives
pub use crate::core::{extract_scope, find_first_unescaped_brace, is_balanced, resolve_command, Scope};

// Re-export utilities
pub use utils::error::{NormalizeError, NormalizeOutput, NormalizeResult, NormalizeWarning};

/// Normalize LaTeX math into canonical form
///
/// # Arguments
/// * `input` - Free-form LaTeX answer text
///
/// # Returns
/// Canonical text. Unbalanced input skips the structural stage.
pub fn normalize(input: &str) -> String {
    Normalizer::new().normalize(input)
}

/// Normalize LaTeX math with custom options
pub fn normalize_with_options(input: &str, options: &NormalizeOptions) -> String {
    Normalizer::with_options(*options).normalize(input)
}

/// Normalize and collect the warnings raised along the way
pub fn normalize_with_report(input: &str, options: &NormalizeOptions) -> NormalizeOutput {
    let mut normalizer = Normalizer::with_options(*options);
    let content = normalizer.normalize(input);
    NormalizeOutput::with_warnings(content, normalizer.take_warnings())
}

/// Normalize, failing instead of passing unbalanced input through
pub fn try_normalize(input: &str) -> NormalizeResult<String> {
    let output = normalize_with_report(input, &NormalizeOptions::default());
    if output.is_unbalanced() {
        return Err(NormalizeError::unbalanced(input));
    }
    Ok(output.content)
}
