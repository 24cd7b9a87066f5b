//! Fraction canonicalization
//!
//! - `\frac12`, `\frac\alpha2`, `\frac{a}b` become fully braced fractions
//! - `x^\frac{1}{2}` gets its whole fraction wrapped into one exponent group

use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// Safety ceiling for [`promote_exponent_fractions`]
pub const MAX_EXPONENT_FRACTION_PASSES: usize = 100;

lazy_static! {
    /// `\frac` followed by two single tokens: a command, a digit, a letter
    /// or a brace group without nested braces
    static ref SHORTHAND_FRAC_RE: Regex = Regex::new(
        r"\\frac(\\[a-zA-Z]+|\d|[a-zA-Z]|\{[^{}]*\})(\\[a-zA-Z]+|\d|[a-zA-Z]|\{[^{}]*\})"
    )
    .unwrap();
}

fn brace_token(token: &str) -> String {
    if token.starts_with('{') && token.ends_with('}') {
        token.to_string()
    } else {
        format!("{{{}}}", token)
    }
}

/// Brace the numerator and denominator of shorthand fractions.
///
/// This is a single non-overlapping pass. A shorthand fraction nested in
/// another unbraced fraction is only normalized as far as one pass reaches.
///
/// ```rust
/// use texcanon::core::fraction::convert_latex_fractions;
///
/// assert_eq!(convert_latex_fractions(r"\frac\alpha2"), r"\frac{\alpha}{2}");
/// assert_eq!(convert_latex_fractions(r"\frac{1}{2}"), r"\frac{1}{2}");
/// ```
pub fn convert_latex_fractions(s: &str) -> String {
    SHORTHAND_FRAC_RE
        .replace_all(s, |caps: &Captures| {
            format!(
                "\\frac{}{}",
                brace_token(&caps[1]),
                brace_token(&caps[2])
            )
        })
        .into_owned()
}

/// Wrap the first bare `^\frac` construct in an extra brace pair.
fn promote_once(s: &str) -> Option<String> {
    let frac = s.find("^\\frac")? + 1;

    // Walk to the closing brace of the second argument group
    let mut depth: i64 = 0;
    let mut groups = 0;
    let mut end = s.len();
    for (i, b) in s.bytes().enumerate().skip(frac) {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    groups += 1;
                    if groups == 2 {
                        end = i;
                        break;
                    }
                }
            }
            _ => {}
        }
    }

    Some(format!("{}{{{}}}{}", &s[..frac], &s[frac..end], &s[end..]))
}

/// Turn `^\frac{a}{b}` into `^{\frac{a}{b}}` until nothing changes.
///
/// Expects fractions to be braced already (see [`convert_latex_fractions`]).
/// When the second argument never closes, the wrapper is closed at the end of
/// the input.
pub fn promote_exponent_fractions(s: &str) -> String {
    let (result, converged) = promote_until_stable(s);
    if !converged {
        tracing::warn!(
            limit = MAX_EXPONENT_FRACTION_PASSES,
            "exponent fraction promotion hit its pass limit"
        );
    }
    result
}

/// Run [`promote_once`] at most [`MAX_EXPONENT_FRACTION_PASSES`] times.
///
/// The flag is false when the last allowed pass still changed the text.
pub(crate) fn promote_until_stable(s: &str) -> (String, bool) {
    let mut current = s.to_string();

    for _ in 0..MAX_EXPONENT_FRACTION_PASSES {
        match promote_once(&current) {
            Some(next) if next != current => current = next,
            _ => return (current, true),
        }
    }

    (current, false)
}
