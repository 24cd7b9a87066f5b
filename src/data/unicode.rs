//! Unicode operator folding
//!
//! Free-form answers often contain Unicode operators instead of LaTeX
//! commands. They are folded to the command spelling so that the literal
//! tables see one form only.

use phf::phf_map;

/// Unicode operator to LaTeX command mapping
pub static UNICODE_SYMBOLS: phf::Map<char, &'static str> = phf_map! {
    '±' => "\\pm",
    '∓' => "\\mp",
    '×' => "\\times",
    '·' => "\\cdot",
    '⋅' => "\\cdot",
    '−' => "-",
    '≤' => "\\le",
    '≥' => "\\ge",
    '≠' => "\\neq",
    '≈' => "\\approx",
};

/// Get the LaTeX spelling of a Unicode operator, if known
#[inline]
pub fn lookup_unicode_symbol(c: char) -> Option<&'static str> {
    UNICODE_SYMBOLS.get(&c).copied()
}

/// Replace every known Unicode operator in `s` with its LaTeX spelling.
///
/// A command spelling is followed by a space when the next character is a
/// letter, so `a×b` becomes `a\times b` rather than `a\timesb`.
pub fn fold_unicode_symbols(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match lookup_unicode_symbol(c) {
            Some(latex) => {
                result.push_str(latex);
                let needs_space = latex.starts_with('\\')
                    && chars.peek().is_some_and(|next| next.is_ascii_alphabetic());
                if needs_space {
                    result.push(' ');
                }
            }
            None => result.push(c),
        }
    }

    result
}

/// Drop every non-ASCII character from `s`.
pub fn strip_non_ascii(s: &str) -> String {
    s.chars().filter(char::is_ascii).collect()
}
