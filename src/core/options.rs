//! Options and configuration records
//!
//! - `NormalizeOptions`: knobs of the two preprocessing stages
//! - `ConversionConfig`, `NormalizationConfig`: records handed unchanged to
//!   the downstream symbolic parser

use crate::utils::error::NormalizeError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Preprocessing Options
// =============================================================================

/// Options for the preprocessing pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NormalizeOptions {
    /// Unwrap `\boxed{...}` before any brace stripping
    /// Default: true
    pub extract_boxed: bool,

    /// Drop all non-ASCII characters before the balance check
    /// Default: false
    pub strip_non_ascii: bool,

    /// Fold Unicode operators (`±`, `×`, `≤`, ...) to LaTeX commands before
    /// relation trimming and again before the literal tables run
    /// Default: false
    pub fold_unicode_symbols: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            extract_boxed: true,
            strip_non_ascii: false,
            fold_unicode_symbols: false,
        }
    }
}

impl NormalizeOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Only the literal tables, no Unicode folding
    pub fn faithful() -> Self {
        Self {
            fold_unicode_symbols: false,
            ..Self::default()
        }
    }

    /// Read Unicode operators as their LaTeX commands (`x ≈ 3` → `3`)
    pub fn unicode_aware() -> Self {
        Self {
            fold_unicode_symbols: true,
            ..Self::default()
        }
    }

    /// Strip non-ASCII text (units in Cyrillic, stray CJK punctuation, ...)
    pub fn ascii_only() -> Self {
        Self {
            strip_non_ascii: true,
            fold_unicode_symbols: false,
            ..Self::default()
        }
    }
}

// =============================================================================
// Downstream Parser Configuration
// =============================================================================

/// How the downstream parser treats `\boxed` groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BoxedMode {
    /// Use every boxed group
    #[default]
    All,
    /// Use the last boxed group only
    Last,
    /// Ignore boxed groups
    None,
}

impl BoxedMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoxedMode::All => "all",
            BoxedMode::Last => "last",
            BoxedMode::None => "none",
        }
    }
}

impl fmt::Display for BoxedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoxedMode {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(BoxedMode::All),
            "last" => Ok(BoxedMode::Last),
            "none" => Ok(BoxedMode::None),
            other => Err(NormalizeError::invalid(format!(
                "unknown boxed mode '{}' (expected all, last or none)",
                other
            ))),
        }
    }
}

/// Interpretation toggles of the downstream parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConversionConfig {
    /// Read `2 \frac{1}{2}` as `2 + 1/2` instead of `2 * 1/2`
    pub interpret_as_mixed_fractions: bool,
    /// Read `k=1` as the assignment `1`
    pub interpret_simple_eq_as_assignment: bool,
    /// Read `x \in \{1,2\}` as `x = \{1,2\}`
    pub interpret_contains_as_eq: bool,
    /// Lowercase all symbols
    pub lowercase_symbols: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            interpret_as_mixed_fractions: false,
            interpret_simple_eq_as_assignment: false,
            interpret_contains_as_eq: true,
            lowercase_symbols: false,
        }
    }
}

/// Normalization toggles of the downstream parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NormalizationConfig {
    /// Basic command replacements (`\mathrm`, `\displaystyle`, ...)
    pub basic_latex: bool,
    /// Remove units and their variations
    pub units: bool,
    /// Fix malformed operators (`\sqrt2`, `\frac12`, ...)
    pub malformed_operators: bool,
    /// Small formatting fixes (spaces, dots, ...)
    pub nits: bool,
    /// Boxed group extraction
    pub boxed: BoxedMode,
    /// Equation splitting and approximations
    pub equations: bool,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            basic_latex: true,
            units: false,
            malformed_operators: true,
            nits: true,
            boxed: BoxedMode::All,
            equations: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_defaults() {
        let opts = NormalizeOptions::default();
        assert!(opts.extract_boxed);
        assert!(!opts.strip_non_ascii);
        assert!(!opts.fold_unicode_symbols);
        assert_eq!(NormalizeOptions::new(), opts);
    }

    #[test]
    fn test_presets() {
        assert!(!NormalizeOptions::faithful().fold_unicode_symbols);
        assert!(NormalizeOptions::faithful().extract_boxed);
        assert_eq!(NormalizeOptions::faithful(), NormalizeOptions::default());
        assert!(NormalizeOptions::unicode_aware().fold_unicode_symbols);

        let ascii = NormalizeOptions::ascii_only();
        assert!(ascii.strip_non_ascii);
        assert!(!ascii.fold_unicode_symbols);
    }

    #[test]
    fn test_conversion_defaults() {
        let config = ConversionConfig::default();
        assert!(!config.interpret_as_mixed_fractions);
        assert!(!config.interpret_simple_eq_as_assignment);
        assert!(config.interpret_contains_as_eq);
        assert!(!config.lowercase_symbols);
    }

    #[test]
    fn test_normalization_defaults() {
        let config = NormalizationConfig::default();
        assert!(config.basic_latex);
        assert!(!config.units);
        assert!(config.malformed_operators);
        assert!(config.nits);
        assert_eq!(config.boxed, BoxedMode::All);
        assert_eq!(config.boxed.to_string(), "all");
        assert!(!config.equations);
    }

    #[test]
    fn test_boxed_mode_from_str() {
        assert_eq!("all".parse::<BoxedMode>(), Ok(BoxedMode::All));
        assert_eq!(" Last ".parse::<BoxedMode>(), Ok(BoxedMode::Last));
        assert_eq!("none".parse::<BoxedMode>(), Ok(BoxedMode::None));

        let err = "first".parse::<BoxedMode>().unwrap_err();
        assert!(err.to_string().contains("first"));
    }
}
