//! Two-stage normalization pipeline
//!
//! - Stage 1 (`preprocess_structure`): brace balance check, `\boxed`
//!   unwrapping, outer brace stripping, relation trimming
//! - Stage 2 (`canonicalize_notation`): command stripping, literal tables,
//!   fraction and vector canonicalization
//!
//! # Example
//!
//! ```rust
//! use texcanon::core::pipeline::Normalizer;
//!
//! let mut normalizer = Normalizer::new();
//! assert_eq!(normalizer.normalize(r"\boxed{x=\dfrac12}"), r"\frac{1}{2}");
//! assert!(normalizer.warnings().is_empty());
//! ```

use super::braces::{strip_overall_brace, strip_overall_braces};
use super::fraction::{convert_latex_fractions, promote_until_stable, MAX_EXPONENT_FRACTION_PASSES};
use super::options::NormalizeOptions;
use super::relation::extract_after_last_relation;
use super::rewrite::remove_command;
use super::scanner::{escape_literal_braces, is_balanced};
use super::vector::{brace_bare_vec_argument, flatten_bar_inside_vec, move_vec_subscript_out};
use crate::data::{
    apply_cosmetic_deletions, apply_literal_replacements, fold_unicode_symbols, strip_non_ascii,
    DELETED_COMMANDS, UNWRAPPED_COMMANDS,
};
use crate::utils::error::NormalizeWarning;

/// Safety ceiling for outer brace stripping before relation trimming
pub const MAX_LEADING_BRACE_PASSES: usize = 10;

/// Safety ceiling for outer brace stripping after relation trimming
pub const MAX_TRAILING_BRACE_PASSES: usize = 19;

/// Stateful runner for the two preprocessing stages.
///
/// The only state carried between calls is the list of warnings, which
/// accumulates until [`Normalizer::take_warnings`] is called.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    options: NormalizeOptions,
    warnings: Vec<NormalizeWarning>,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: NormalizeOptions) -> Self {
        Self {
            options,
            warnings: Vec::new(),
        }
    }

    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// Warnings collected so far
    pub fn warnings(&self) -> &[NormalizeWarning] {
        &self.warnings
    }

    /// Drain the collected warnings
    pub fn take_warnings(&mut self) -> Vec<NormalizeWarning> {
        std::mem::take(&mut self.warnings)
    }

    /// Run both stages.
    pub fn normalize(&mut self, input: &str) -> String {
        let structural = self.preprocess_structure(input);
        self.canonicalize_notation(&structural)
    }

    /// Stage 1: structural cleanup.
    ///
    /// Returns `input` unchanged when the delimiters do not nest once escaped
    /// literal braces have been turned into parentheses. With Unicode folding
    /// on, `≈`, `≤` and `≥` are folded first so relation trimming sees them.
    pub fn preprocess_structure(&mut self, input: &str) -> String {
        let mut source = if self.options.strip_non_ascii {
            strip_non_ascii(input)
        } else {
            input.to_string()
        };
        if self.options.fold_unicode_symbols {
            source = fold_unicode_symbols(&source);
        }

        let escaped = escape_literal_braces(&source);
        if !is_balanced(&escaped) {
            tracing::debug!(input, "unbalanced delimiters, skipping structural cleanup");
            self.warnings.push(NormalizeWarning::Unbalanced);
            return input.to_string();
        }

        let unboxed = if self.options.extract_boxed {
            remove_command(&escaped, "\\boxed", true)
        } else {
            escaped
        };

        let mut current =
            self.strip_braces(&unboxed, MAX_LEADING_BRACE_PASSES, "leading brace stripping");

        if let Some(pos) = current.find("\\quad") {
            current.truncate(pos);
        }

        let trimmed = extract_after_last_relation(&current);
        let result =
            self.strip_braces(&trimmed, MAX_TRAILING_BRACE_PASSES, "trailing brace stripping");

        tracing::debug!(input, output = result.as_str(), "structural cleanup done");
        result
    }

    /// Stage 2: notation canonicalization.
    pub fn canonicalize_notation(&mut self, input: &str) -> String {
        let mut s = if self.options.fold_unicode_symbols {
            fold_unicode_symbols(input)
        } else {
            input.to_string()
        };

        for command in DELETED_COMMANDS {
            s = remove_command(&s, command, false);
        }
        for command in UNWRAPPED_COMMANDS {
            s = remove_command(&s, command, true);
        }

        s = apply_cosmetic_deletions(&s);
        s = apply_literal_replacements(&s);

        s = convert_latex_fractions(&s);
        s = flatten_bar_inside_vec(&s);
        s = move_vec_subscript_out(&s);
        s = brace_bare_vec_argument(&s);

        let (mut s, converged) = promote_until_stable(&s);
        if !converged {
            self.limit_reached("exponent fraction promotion", MAX_EXPONENT_FRACTION_PASSES);
        }

        if s.ends_with('.') {
            s.pop();
        }

        tracing::debug!(input, output = s.as_str(), "notation canonicalization done");
        s
    }

    fn strip_braces(&mut self, s: &str, max_passes: usize, pass: &'static str) -> String {
        let (result, stripped) = strip_overall_braces(s, max_passes);
        if stripped == max_passes && strip_overall_brace(&result).1 {
            self.limit_reached(pass, max_passes);
        }
        result
    }

    fn limit_reached(&mut self, pass: &'static str, limit: usize) {
        tracing::warn!(pass, limit, "pass stopped at its ceiling");
        self.warnings
            .push(NormalizeWarning::PassLimitReached { pass, limit });
    }
}

// =============================================================================
// Free Functions
// =============================================================================

/// Stage 1 with default options
pub fn preprocess_structure(input: &str) -> String {
    Normalizer::new().preprocess_structure(input)
}

/// Stage 2 with default options
pub fn canonicalize_notation(input: &str) -> String {
    Normalizer::new().canonicalize_notation(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage1_boxed_equation() {
        assert_eq!(preprocess_structure(r"\boxed{x=5}"), "5");
    }

    #[test]
    fn test_stage1_unbalanced_unchanged() {
        let mut normalizer = Normalizer::new();
        assert_eq!(normalizer.preprocess_structure("{x=5"), "{x=5");
        assert_eq!(normalizer.warnings(), &[NormalizeWarning::Unbalanced]);
    }

    #[test]
    fn test_stage1_unbalanced_keeps_escaped_braces() {
        // The original text comes back, not the parenthesized form
        assert_eq!(preprocess_structure(r"\{x=5\}]"), r"\{x=5\}]");
    }

    #[test]
    fn test_stage1_escaped_braces_become_parens() {
        assert_eq!(preprocess_structure(r"S=\{1,2\}"), "(1,2)");
    }

    #[test]
    fn test_stage1_outer_braces() {
        assert_eq!(preprocess_structure("{{x+1}}"), "x+1");
        assert_eq!(preprocess_structure(r"\boxed{{y = {3}}}"), "3");
    }

    #[test]
    fn test_stage1_quad_truncates() {
        assert_eq!(preprocess_structure(r"x=5\quad\text{m}"), "5");
        assert_eq!(preprocess_structure(r"v = 2 \quad (v>0)"), "2");
    }

    #[test]
    fn test_stage1_without_boxed_extraction() {
        let mut normalizer = Normalizer::with_options(NormalizeOptions {
            extract_boxed: false,
            ..NormalizeOptions::default()
        });
        assert_eq!(normalizer.preprocess_structure(r"\boxed{7}"), r"\boxed{7}");
    }

    #[test]
    fn test_stage1_strip_non_ascii() {
        let mut normalizer = Normalizer::with_options(NormalizeOptions::ascii_only());
        assert_eq!(normalizer.preprocess_structure("t = 5 с"), "5");
    }

    #[test]
    fn test_stage1_folded_relations_are_trimmed() {
        let mut normalizer = Normalizer::with_options(NormalizeOptions::unicode_aware());
        assert_eq!(normalizer.preprocess_structure("x ≈ 3"), "3");
        assert_eq!(normalizer.preprocess_structure("x ≥ 3"), "3");
        assert_eq!(normalizer.preprocess_structure("0 ≤ t"), "t");

        assert_eq!(preprocess_structure("x ≈ 3"), "x ≈ 3");
    }

    #[test]
    fn test_stage1_shorthand_fraction_argument_kept() {
        assert_eq!(preprocess_structure(r"\frac1{2}"), r"\frac1{2}");
        assert_eq!(preprocess_structure(r"\sqrt2{x}"), r"\sqrt2{x}");
    }

    #[test]
    fn test_stage1_leading_ceiling() {
        let nested = format!("{}7{}", "{".repeat(12), "}".repeat(12));
        let mut normalizer = Normalizer::new();
        assert_eq!(normalizer.preprocess_structure(&nested), "7");
        assert_eq!(
            normalizer.warnings(),
            &[NormalizeWarning::PassLimitReached {
                pass: "leading brace stripping",
                limit: MAX_LEADING_BRACE_PASSES,
            }]
        );
    }

    #[test]
    fn test_stage2_text_and_period() {
        let out = canonicalize_notation(r"\text{Answer: } 3.");
        assert_eq!(out, "Answer:  3");
        assert!(!out.contains(r"\text"));
        assert!(!out.ends_with('.'));
    }

    #[test]
    fn test_stage2_empty_input() {
        assert_eq!(canonicalize_notation(""), "");
        assert_eq!(canonicalize_notation("."), "");
    }

    #[test]
    fn test_stage2_only_one_period() {
        assert_eq!(canonicalize_notation("3.."), "3.");
    }

    #[test]
    fn test_stage2_environment_markers() {
        assert_eq!(
            canonicalize_notation(r"\begin{pmatrix}1\\2\end{pmatrix}"),
            r"1\\2"
        );
    }

    #[test]
    fn test_stage2_styling_commands() {
        assert_eq!(
            canonicalize_notation(r"\mathbf{F}=m\hat{a}"),
            "F=ma"
        );
        assert_eq!(canonicalize_notation(r"\overline{AB}"), "AB");
    }

    #[test]
    fn test_stage2_fractions_and_exponents() {
        assert_eq!(canonicalize_notation(r"x^\dfrac12"), r"x^{\frac{1}{2}}");
        assert_eq!(canonicalize_notation(r"\tfrac\pi4"), r"\frac{\pi}{4}");
    }

    #[test]
    fn test_stage2_vectors() {
        assert_eq!(canonicalize_notation(r"\vec{a_{1}}"), r"\vec{a}_{1}");
        assert_eq!(canonicalize_notation(r"\vec{\bar{v}}"), r"\vec{v}");
        assert_eq!(canonicalize_notation(r"\vec F"), r"\vec{F}");
    }

    #[test]
    fn test_stage2_unicode_left_alone_by_default() {
        assert_eq!(canonicalize_notation("a·b"), "a·b");
        assert_eq!(canonicalize_notation("a×b"), "a×b");
        // `±` is in the literal table itself
        assert_eq!(canonicalize_notation("3±0.1"), "3+0.1");
    }

    #[test]
    fn test_stage2_unicode_folding() {
        let mut normalizer = Normalizer::with_options(NormalizeOptions::unicode_aware());
        assert_eq!(normalizer.canonicalize_notation("a×b"), r"a\bar{times} b");
        assert_eq!(normalizer.canonicalize_notation("a·b"), r"a\cdot b");
    }

    #[test]
    fn test_stage2_promotion_ceiling() {
        let input = r"x^\frac{1}{2}".repeat(MAX_EXPONENT_FRACTION_PASSES + 1);
        let mut normalizer = Normalizer::new();
        normalizer.canonicalize_notation(&input);
        assert_eq!(
            normalizer.take_warnings(),
            vec![NormalizeWarning::PassLimitReached {
                pass: "exponent fraction promotion",
                limit: MAX_EXPONENT_FRACTION_PASSES,
            }]
        );
        assert!(normalizer.warnings().is_empty());
    }

    #[test]
    fn test_normalize_shorthand_fraction_with_braced_denominator() {
        let mut normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize(r"x = \frac1{2}"), r"\frac{1}{2}");
    }

    #[test]
    fn test_normalize_both_stages() {
        let mut normalizer = Normalizer::new();
        assert_eq!(
            normalizer.normalize(r"The answer is $\boxed{v = \frac{\sqrt{2}}{2}}$."),
            r"\frac{\sqrt{2}}{2}"
        );
    }
}
