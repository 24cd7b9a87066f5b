//! Ordered rewrite tables for notation canonicalization
//!
//! Order matters in every table below: later entries can match text produced
//! by earlier ones (`_e` → `_{e}` must run before `e_` → `\bar{e}_`), so they
//! are slices, not maps.

// ============================================================================
// Command Tables
// ============================================================================

/// Commands deleted together with their braced argument
pub const DELETED_COMMANDS: &[&str] = &["\\begin", "\\end"];

/// Styling commands unwrapped in place, keeping their argument
pub const UNWRAPPED_COMMANDS: &[&str] = &[
    "\\text",
    "\\mathbf",
    "\\mathrm",
    "\\pmb",
    "\\hat",
    "\\overline",
    "\\boldsymbol",
];

// ============================================================================
// Literal Tables
// ============================================================================

/// Literal substrings deleted outright: spacing, stray punctuation,
/// delimiter sizing and display-mode markers
pub const COSMETIC_DELETIONS: &[&str] = &[
    "\\,",
    "$",
    ",",
    "`",
    "latex",
    "\\left",
    "\\right",
    "\\text",
    "\\mathrm",
    "\\Bigr",
    "\\Bigl",
    "\n",
    "\\]",
    "\\[",
    "\\Big",
    "\\bigl",
    "\\bigr",
    "\\biggl",
    "\\biggr",
    "\\displaystyle",
    "\\boldsymbol",
    "\\infty",
];

/// Literal replacements applied in sequence
pub const LITERAL_REPLACEMENTS: &[(&str, &str)] = &[
    // Operator names the parser knows as commands
    ("\\operatorname{asin}", "\\asin"),
    ("\\operatorname{sech}", "\\sech"),
    ("\\operatorname{acos}", "\\acos"),
    ("\\operatorname{sinh}", "\\sinh"),
    ("\\dfrac", "\\frac"),
    ("\\tfrac", "\\frac"),
    ("\\Exp", "\\exp"),
    // Symbols that would otherwise be read as operators or constants
    ("\\times", "\\bar{times}"),
    ("\\partial", "\\bar{partial}"),
    ("\\perp", "\\bar{perp}"),
    ("\\epsilon", "\\varepsilon"),
    ("\\varOmega", "\\Omega"),
    ("I", "\\bar{I}"),
    ("_e", "_{e}"),
    ("e_", "\\bar{e}_"),
    ("E_", "\\bar{E}_"),
    // Sign conventions
    ("\\pm", "+"),
    ("\\mp", "-"),
    ("{+}", "{p}"),
    ("{-}", "{m}"),
    ("_+", "_p"),
    ("_-", "_m"),
    ("±", "+"),
    ("∓", "-"),
];

/// Relation signs in priority order for trailing-content extraction
pub const RELATION_SIGNS: &[&str] = &["=", "\\approx", "\\ge", "\\le", "\\geq", "\\leq", "<", ">"];

/// Delete every entry of [`COSMETIC_DELETIONS`] from `s`.
pub fn apply_cosmetic_deletions(s: &str) -> String {
    COSMETIC_DELETIONS
        .iter()
        .fold(s.to_string(), |acc, pattern| acc.replace(pattern, ""))
}

/// Apply [`LITERAL_REPLACEMENTS`] to `s` in table order.
pub fn apply_literal_replacements(s: &str) -> String {
    LITERAL_REPLACEMENTS
        .iter()
        .fold(s.to_string(), |acc, (from, to)| acc.replace(from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosmetic_deletions() {
        assert_eq!(apply_cosmetic_deletions(r"\left(1,2\right)"), "(12)");
        assert_eq!(apply_cosmetic_deletions(r"$\displaystyle x\,y$"), " xy");
        assert_eq!(apply_cosmetic_deletions("a\nb"), "ab");
    }

    #[test]
    fn test_sizing_prefixes_are_ordered() {
        // `\Bigr` and `\Bigl` go before the shorter `\Big`
        assert_eq!(apply_cosmetic_deletions(r"\Bigl(x\Bigr)"), "(x)");
        assert_eq!(apply_cosmetic_deletions(r"\Big(x\Big)"), "(x)");
    }

    #[test]
    fn test_operator_names() {
        assert_eq!(
            apply_literal_replacements(r"\operatorname{sech}(x)+\dfrac{1}{2}"),
            r"\sech(x)+\frac{1}{2}"
        );
    }

    #[test]
    fn test_disambiguation() {
        assert_eq!(apply_literal_replacements(r"a\times b"), r"a\bar{times} b");
        assert_eq!(apply_literal_replacements("I_0"), r"\bar{I}_0");
        assert_eq!(apply_literal_replacements("E_k"), r"\bar{E}_k");
    }

    #[test]
    fn test_subscript_e_runs_before_e_subscript() {
        assert_eq!(apply_literal_replacements("m_e"), "m_{e}");
        assert_eq!(apply_literal_replacements("e_1"), r"\bar{e}_1");
    }

    #[test]
    fn test_signs() {
        assert_eq!(apply_literal_replacements(r"1\pm 2"), "1+ 2");
        assert_eq!(apply_literal_replacements("1±2∓3"), "1+2-3");
        assert_eq!(apply_literal_replacements("q_+ q_-"), "q_p q_m");
        assert_eq!(apply_literal_replacements("x^{+}"), "x^{p}");
    }
}
