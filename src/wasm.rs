//! WASM bindings for texcanon
//!
//! This module provides JavaScript-accessible functions for LaTeX
//! canonicalization.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

/// Normalization options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct NormalizeJsOptions {
    /// Unwrap `\boxed{...}` groups
    #[serde(default = "default_true", rename = "extractBoxed")]
    pub extract_boxed: bool,
    /// Drop non-ASCII characters first
    #[serde(default, rename = "stripNonAscii")]
    pub strip_non_ascii: bool,
    /// Fold Unicode operators to LaTeX commands
    #[serde(default, rename = "foldUnicodeSymbols")]
    pub fold_unicode_symbols: bool,
}

#[cfg(feature = "wasm")]
impl Default for NormalizeJsOptions {
    fn default() -> Self {
        Self {
            extract_boxed: true,
            strip_non_ascii: false,
            fold_unicode_symbols: false,
        }
    }
}

#[cfg(feature = "wasm")]
impl From<NormalizeJsOptions> for crate::NormalizeOptions {
    fn from(opts: NormalizeJsOptions) -> Self {
        Self {
            extract_boxed: opts.extract_boxed,
            strip_non_ascii: opts.strip_non_ascii,
            fold_unicode_symbols: opts.fold_unicode_symbols,
        }
    }
}

#[cfg(feature = "wasm")]
fn default_true() -> bool {
    true
}

/// Normalization result with additional metadata
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct NormalizeJsResult {
    /// The canonical output
    pub output: String,
    /// Whether the structural stage ran
    pub balanced: bool,
    /// Warnings raised during normalization
    pub warnings: Vec<String>,
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Normalize LaTeX math with default options
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "normalizeLatex")]
pub fn normalize_latex_wasm(input: &str) -> String {
    crate::normalize(input)
}

/// Run the structural stage only
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "preprocessStructure")]
pub fn preprocess_structure_wasm(input: &str) -> String {
    crate::preprocess_structure(input)
}

/// Run the notation stage only
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "canonicalizeNotation")]
pub fn canonicalize_notation_wasm(input: &str) -> String {
    crate::canonicalize_notation(input)
}

/// Check delimiter balance
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "isBalanced")]
pub fn is_balanced_wasm(input: &str) -> bool {
    crate::is_balanced(input)
}

/// Normalize LaTeX math with options, returning output and warnings
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "normalizeLatexWithOptions")]
pub fn normalize_latex_with_options_wasm(input: &str, options: JsValue) -> JsValue {
    let opts: NormalizeJsOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();
    let report = crate::normalize_with_report(input, &opts.into());

    let result = NormalizeJsResult {
        balanced: !report.is_unbalanced(),
        warnings: report.warnings.iter().map(ToString::to_string).collect(),
        output: report.content,
    };

    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Default configuration records for the downstream parser
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "defaultParserConfig")]
pub fn default_parser_config_wasm() -> JsValue {
    let config = ParserConfigJs {
        normalization: crate::NormalizationConfig::default(),
        conversion: crate::ConversionConfig::default(),
    };
    serde_wasm_bindgen::to_value(&config).unwrap_or(JsValue::NULL)
}

/// Both configuration records in one object
#[cfg(feature = "wasm")]
#[derive(Serialize)]
pub struct ParserConfigJs {
    pub normalization: crate::NormalizationConfig,
    pub conversion: crate::ConversionConfig,
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
