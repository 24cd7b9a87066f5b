//! Trailing-content extraction after relation signs
//!
//! Answers such as `x = 5` or `v \approx 3.2` are reduced to the right-hand
//! side of their last relation. The scan is textual: a relation nested in a
//! command argument counts like a top-level one.

use crate::data::RELATION_SIGNS;

/// Return the trimmed text after the last occurrence of the highest
/// priority relation sign present in `s`.
///
/// Signs are tried in [`RELATION_SIGNS`] order; the first sign that occurs
/// anywhere wins. A command sign swallows the letters that continue it, so a
/// `\ge` match inside `\geq` cuts after the whole `\geq`. Without any sign the
/// trimmed input is returned.
///
/// ```rust
/// use texcanon::core::relation::extract_after_last_relation;
///
/// assert_eq!(extract_after_last_relation("y = 2x = 4"), "4");
/// assert_eq!(extract_after_last_relation(r"v \approx 3.2"), "3.2");
/// ```
pub fn extract_after_last_relation(s: &str) -> String {
    for sign in RELATION_SIGNS {
        let Some(pos) = s.rfind(sign) else {
            continue;
        };

        let mut end = pos + sign.len();
        if sign.starts_with('\\') {
            end += s[end..]
                .bytes()
                .take_while(u8::is_ascii_alphabetic)
                .count();
        }

        tracing::trace!(sign, pos, "cutting after relation");
        return s[end..].trim().to_string();
    }

    s.trim().to_string()
}
