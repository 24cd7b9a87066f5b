//! Vector notation canonicalization
//!
//! The downstream parser understands `\vec{a}` and `\vec{a}_{i}`, but not
//! `\vec a`, `\vec{a_{i}}` or a `\bar` nested inside the vector argument.

use super::rewrite::remove_command;
use super::scanner::{find_all, matching_brace_unescaped};
use lazy_static::lazy_static;
use regex::Regex;

const VEC_OPEN: &str = "\\vec{";

lazy_static! {
    /// `\vec{X_{Y}}` with brace-free X and Y
    static ref VEC_SUBSCRIPT_RE: Regex =
        Regex::new(r"\\vec\{([^{}]+)_\{([^{}]+)\}\}").unwrap();

    /// `\vec` followed by an unbraced token: letters, Greek letters or one command
    static ref VEC_BARE_RE: Regex =
        Regex::new(r"\\vec(\s*)(\\?[a-zA-Zα-ωΑ-Ω]+)").unwrap();
}

/// Unwrap every `\bar` inside `\vec{...}` arguments.
///
/// Occurrence positions are looked up again after every splice, so each
/// rewrite sees the current buffer.
///
/// ```rust
/// use texcanon::core::vector::flatten_bar_inside_vec;
///
/// assert_eq!(flatten_bar_inside_vec(r"\vec{\bar{F}}"), r"\vec{F}");
/// ```
pub fn flatten_bar_inside_vec(s: &str) -> String {
    let mut result = s.to_string();
    let count = find_all(&result, VEC_OPEN).len();

    for nth in 0..count {
        let Some(&pos) = find_all(&result, VEC_OPEN).get(nth) else {
            break;
        };
        let open = pos + VEC_OPEN.len() - 1;
        let close = matching_brace_unescaped(&result, open).unwrap_or(result.len());

        let inner = &result[open + 1..close];
        if !inner.contains("\\bar") {
            continue;
        }
        let flattened = remove_command(inner, "\\bar", true);
        tracing::trace!(inner, flattened = flattened.as_str(), "flattening bar inside vec");

        result = format!("{}{}{}", &result[..=open], flattened, &result[close..]);
    }

    result
}

/// Move a subscript out of a vector argument: `\vec{a_{b}}` → `\vec{a}_{b}`.
pub fn move_vec_subscript_out(s: &str) -> String {
    VEC_SUBSCRIPT_RE
        .replace_all(s, r"\vec{${1}}_{${2}}")
        .into_owned()
}

/// Brace a bare vector argument: `\vec a` → `\vec{a}`, `\vec\Gamma` → `\vec{\Gamma}`.
pub fn brace_bare_vec_argument(s: &str) -> String {
    VEC_BARE_RE.replace_all(s, r"\vec{${2}}").into_owned()
}
