//! Escape-aware scope extraction
//!
//! A scope is the text strictly between an unescaped `{` and the unescaped
//! `}` that closes it. Escaped characters (`\{`, `\}`, `\\`, ...) belong to
//! the content but never change the nesting depth.

/// A balanced brace group found in a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scope<'a> {
    /// Position of the opening `{`
    pub open: usize,
    /// Position of the matching `}`
    pub close: usize,
    /// Text between the two braces
    pub content: &'a str,
}

impl Scope<'_> {
    /// Position just past the closing brace
    pub fn end(&self) -> usize {
        self.close + 1
    }
}

/// Extract the scope opened by the brace at `open`.
///
/// Scanning starts right after `open`; the character at `open` itself is
/// assumed to be the opening brace and is not inspected. Returns `None` when
/// the end of the input is reached before the scope closes.
///
/// ```rust
/// use texcanon::core::scope::extract_scope;
///
/// let scope = extract_scope("{a{b}c}", 0).unwrap();
/// assert_eq!(scope.content, "a{b}c");
/// assert_eq!(scope.close, 6);
/// ```
pub fn extract_scope(s: &str, open: usize) -> Option<Scope<'_>> {
    let start = open.checked_add(1)?;
    if !s.is_char_boundary(start) {
        return None;
    }

    let mut escaped = false;
    let mut depth: usize = 0;

    for (i, b) in s.bytes().enumerate().skip(start) {
        if escaped {
            escaped = false;
            continue;
        }
        match b {
            b'\\' => escaped = true,
            b'{' => depth += 1,
            b'}' if depth == 0 => {
                return Some(Scope {
                    open,
                    close: i,
                    content: &s[start..i],
                });
            }
            b'}' => depth -= 1,
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_scope() {
        let scope = extract_scope("{abc}", 0).unwrap();
        assert_eq!(scope.content, "abc");
        assert_eq!(scope.close, 4);
        assert_eq!(scope.end(), 5);
    }

    #[test]
    fn test_nested_scope() {
        let scope = extract_scope("{a{b}c}", 0).unwrap();
        assert_eq!(scope.content, "a{b}c");
        assert_eq!(scope.close, 6);
    }

    #[test]
    fn test_scope_inside_command() {
        let s = r"\sqrt{x+1}+2";
        let scope = extract_scope(s, 5).unwrap();
        assert_eq!(scope.content, "x+1");
        assert_eq!(scope.close, 9);
    }

    #[test]
    fn test_escaped_brace_is_content() {
        let scope = extract_scope(r"{a\}b}", 0).unwrap();
        assert_eq!(scope.content, r"a\}b");
        assert_eq!(scope.close, 5);

        let scope = extract_scope(r"{\{}", 0).unwrap();
        assert_eq!(scope.content, r"\{");
    }

    #[test]
    fn test_escaped_backslash_then_brace() {
        // `\\` is one escaped backslash, so the following `}` closes the scope
        let scope = extract_scope(r"{a\\}b}", 0).unwrap();
        assert_eq!(scope.content, r"a\\");
        assert_eq!(scope.close, 4);
    }

    #[test]
    fn test_unclosed_scope() {
        assert_eq!(extract_scope("{abc", 0), None);
        assert_eq!(extract_scope("{a{b}", 0), None);
        assert_eq!(extract_scope("", 0), None);
        assert_eq!(extract_scope("{", 3), None);
    }

    #[test]
    fn test_open_inside_multibyte_char() {
        assert_eq!(extract_scope("é}", 0), None);
        assert_eq!(extract_scope("é{a}", 2).map(|scope| scope.content), Some("a"));
    }

    #[test]
    fn test_reextract_from_close_finds_nothing() {
        for s in ["{abc}", "{a{b}c}", r"{x\}y}"] {
            let scope = extract_scope(s, 0).unwrap();
            assert_eq!(extract_scope(s, scope.close), None, "input: {}", s);
        }
    }
}
