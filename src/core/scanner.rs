//! Scanner primitives
//!
//! Low-level character scans shared by every rewrite pass:
//! - delimiter balance checking over `(`, `[` and `{`
//! - locating the first `{` that is not escaped by a backslash
//! - literal-brace normalization and occurrence listing
//!
//! Positions are byte offsets. Every structural character the scanners react
//! to is ASCII, so a returned position always sits on a `char` boundary.

/// Maximum number of positions returned by [`find_all`]
pub const MAX_OCCURRENCES: usize = 100;

/// Check whether `(`, `[` and `{` are properly nested and closed.
///
/// Escapes are not honored here. Callers must turn escaped literal braces
/// into something non-structural first (see [`escape_literal_braces`]).
///
/// ```rust
/// use texcanon::core::scanner::is_balanced;
///
/// assert!(is_balanced("{[()]}"));
/// assert!(!is_balanced("{[(])}"));
/// ```
pub fn is_balanced(s: &str) -> bool {
    let mut stack: Vec<u8> = Vec::new();

    for b in s.bytes() {
        match b {
            b'(' | b'[' | b'{' => stack.push(b),
            b')' | b']' | b'}' => {
                let expected = match b {
                    b')' => b'(',
                    b']' => b'[',
                    _ => b'{',
                };
                if stack.pop() != Some(expected) {
                    return false;
                }
            }
            _ => {}
        }
    }

    stack.is_empty()
}

/// Find the first `{` that is not preceded by an unescaped backslash.
pub fn find_first_unescaped_brace(s: &str) -> Option<usize> {
    let mut escaped = false;

    for (i, b) in s.bytes().enumerate() {
        if b == b'\\' && !escaped {
            escaped = true;
            continue;
        }
        if b == b'{' && !escaped {
            return Some(i);
        }
        escaped = false;
    }

    None
}

/// Replace escaped literal braces (`\{`, `\}`) with parentheses so that they
/// no longer take part in structural scans.
pub fn escape_literal_braces(s: &str) -> String {
    s.replace("\\{", "(").replace("\\}", ")")
}

/// List the start positions of `needle` in `s`, overlapping matches included.
///
/// The listing stops after [`MAX_OCCURRENCES`] hits.
pub fn find_all(s: &str, needle: &str) -> Vec<usize> {
    let mut positions = Vec::new();
    if needle.is_empty() {
        return positions;
    }

    let mut start = 0;
    while positions.len() < MAX_OCCURRENCES {
        let Some(offset) = s.get(start..).and_then(|rest| rest.find(needle)) else {
            break;
        };
        let pos = start + offset;
        positions.push(pos);
        // Step over one full char so the next search starts on a boundary
        start = pos + s[pos..].chars().next().map_or(1, char::len_utf8);
    }

    positions
}

/// Find the `}` matching the `{` at `open` by plain depth counting.
///
/// Escapes are ignored on purpose: command rewriting and the vector and
/// exponent passes count raw braces. Returns `None` when the group never
/// closes.
pub(crate) fn matching_brace_unescaped(s: &str, open: usize) -> Option<usize> {
    let mut depth: i64 = 0;

    for (i, b) in s.bytes().enumerate().skip(open) {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }

    None
}
