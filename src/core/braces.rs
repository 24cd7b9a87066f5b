//! Redundant brace removal
//!
//! An outer brace is a `{...}` group that is not a command argument and that
//! no later `}` follows, e.g. `{x+1}` or `{{5}}`. Answers copied out of
//! `\boxed{...}` or equation environments often carry several of them.

use super::command::resolve_command;
use super::scanner::find_first_unescaped_brace;
use super::scope::extract_scope;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `{base}_{sub}` where base is one character or one command
    static ref BRACED_SUBSCRIPT_BASE_RE: Regex =
        Regex::new(r"\{(\\[a-zA-Z]+|\\.|[^{}\\])\}_\{([^}]+)\}").unwrap();
}

/// Strip one redundant outer brace group.
///
/// Returns the new text and whether anything was stripped. Text before the
/// first brace is dropped together with the braces when the group is
/// stripped.
///
/// ```rust
/// use texcanon::core::braces::strip_overall_brace;
///
/// assert_eq!(strip_overall_brace("{x+1}"), ("x+1".to_string(), true));
/// assert_eq!(strip_overall_brace(r"\sqrt{2}"), (r"\sqrt{2}".to_string(), false));
/// ```
pub fn strip_overall_brace(s: &str) -> (String, bool) {
    let Some(open) = find_first_unescaped_brace(s) else {
        return (s.to_string(), false);
    };

    // A command argument is never redundant
    if resolve_command(s, open).is_some() {
        return (s.to_string(), false);
    }

    match extract_scope(s, open) {
        Some(scope) if !s[scope.end()..].contains('}') => (scope.content.to_string(), true),
        _ => (s.to_string(), false),
    }
}

/// Apply [`strip_overall_brace`] until it stops stripping or `max_passes`
/// passes have run.
///
/// Returns the text and the number of successful strips.
pub fn strip_overall_braces(s: &str, max_passes: usize) -> (String, usize) {
    let mut current = s.to_string();
    let mut stripped = 0;

    while stripped < max_passes {
        let (next, changed) = strip_overall_brace(&current);
        if !changed {
            break;
        }
        current = next;
        stripped += 1;
    }

    (current, stripped)
}

/// Drop braces around a single-token subscript base: `{\theta}_{0}` → `\theta_{0}`.
pub fn strip_subscript_base_braces(s: &str) -> String {
    BRACED_SUBSCRIPT_BASE_RE
        .replace_all(s, "${1}_{${2}}")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_plain_group() {
        assert_eq!(strip_overall_brace("{x+1}"), ("x+1".to_string(), true));
        assert_eq!(strip_overall_brace("{{5}}"), ("{5}".to_string(), true));
    }

    #[test]
    fn test_no_brace() {
        assert_eq!(strip_overall_brace("x+1"), ("x+1".to_string(), false));
        assert_eq!(strip_overall_brace(""), (String::new(), false));
    }

    #[test]
    fn test_command_argument_kept() {
        assert_eq!(
            strip_overall_brace(r"\frac{1}{2}"),
            (r"\frac{1}{2}".to_string(), false)
        );
        assert_eq!(strip_overall_brace("x^{2}"), ("x^{2}".to_string(), false));
    }

    #[test]
    fn test_later_brace_blocks_strip() {
        assert_eq!(
            strip_overall_brace("{a}_{b}"),
            ("{a}_{b}".to_string(), false)
        );
    }

    #[test]
    fn test_trailing_text_without_brace() {
        // Everything outside the group is dropped
        assert_eq!(strip_overall_brace("{a}+b"), ("a".to_string(), true));
        assert_eq!(strip_overall_brace("y{a}"), ("a".to_string(), true));
    }

    #[test]
    fn test_unclosed_group() {
        assert_eq!(strip_overall_brace("{a"), ("{a".to_string(), false));
    }

    #[test]
    fn test_repeated_strip() {
        assert_eq!(strip_overall_braces("{{{7}}}", 10), ("7".to_string(), 3));
        assert_eq!(strip_overall_braces("{{{7}}}", 2), ("{7}".to_string(), 2));
        assert_eq!(strip_overall_braces("7", 10), ("7".to_string(), 0));
    }

    #[test]
    fn test_subscript_base() {
        assert_eq!(strip_subscript_base_braces("{a}_{xyz}"), "a_{xyz}");
        assert_eq!(strip_subscript_base_braces(r"{\theta}_{0}"), r"\theta_{0}");
        assert_eq!(strip_subscript_base_braces("{ab}_{0}"), "{ab}_{0}");
    }
}
