//! Command removal and unwrapping
//!
//! `remove_command` deletes every occurrence of a command together with its
//! braced argument, or unwraps it (keeping the argument text in place).
//!
//! Occurrences are found through a [`CommandMatcher`]. The default
//! [`SubstringMatcher`] is a plain substring search, so `\hat` also matches
//! the head of `\hatch`. [`TokenMatcher`] refuses matches that continue with
//! another letter.
//!
//! Argument braces are counted without escape handling: `\text{a\}b}` closes
//! at the escaped brace.

use super::scanner::matching_brace_unescaped;

/// Locates command occurrences in a buffer
pub trait CommandMatcher {
    /// Position of the first occurrence of `name` in `s`, if any
    fn find(&self, s: &str, name: &str) -> Option<usize>;
}

/// Plain substring search
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl CommandMatcher for SubstringMatcher {
    fn find(&self, s: &str, name: &str) -> Option<usize> {
        s.find(name)
    }
}

/// Substring search that skips matches followed by an ASCII letter
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenMatcher;

impl CommandMatcher for TokenMatcher {
    fn find(&self, s: &str, name: &str) -> Option<usize> {
        let ends_with_letter = name.bytes().last().is_some_and(|b| b.is_ascii_alphabetic());

        s.match_indices(name)
            .map(|(pos, _)| pos)
            .find(|&pos| {
                !ends_with_letter
                    || !s.as_bytes()
                        .get(pos + name.len())
                        .is_some_and(u8::is_ascii_alphabetic)
            })
    }
}

/// Remove every occurrence of `name` from `s` using substring matching.
///
/// When the command is directly followed by `{`, its argument is deleted as
/// well, or kept in place without the braces when `keep_inside` is set. A
/// command without a braced argument is deleted on its own.
///
/// ```rust
/// use texcanon::core::rewrite::remove_command;
///
/// assert_eq!(remove_command(r"\text{m}+\text{s}", r"\text", true), "m+s");
/// assert_eq!(remove_command(r"\begin{cases}x", r"\begin", false), "x");
/// ```
pub fn remove_command(s: &str, name: &str, keep_inside: bool) -> String {
    remove_command_with(s, name, keep_inside, &SubstringMatcher)
}

/// Same as [`remove_command`], with a custom occurrence matcher.
pub fn remove_command_with<M: CommandMatcher + ?Sized>(
    s: &str,
    name: &str,
    keep_inside: bool,
    matcher: &M,
) -> String {
    let mut result = s.to_string();
    if name.is_empty() {
        return result;
    }

    // Every pass deletes at least `name`, so the loop ends
    while let Some(pos) = matcher.find(&result, name) {
        result = remove_at(&result, pos, name.len(), keep_inside);
    }

    result
}

/// Remove the single occurrence of a command of length `len` at `pos`.
fn remove_at(s: &str, pos: usize, len: usize, keep_inside: bool) -> String {
    let arg_open = pos + len;

    if s.as_bytes().get(arg_open) != Some(&b'{') {
        tracing::trace!(command = &s[pos..arg_open], "dropping bare command");
        return format!("{}{}", &s[..pos], &s[arg_open..]);
    }

    // An argument that never closes runs to the end of the buffer
    let arg_close = matching_brace_unescaped(s, arg_open).unwrap_or(s.len());
    let tail = s.get(arg_close + 1..).unwrap_or("");

    tracing::trace!(
        command = &s[pos..arg_open],
        keep_inside,
        "removing command with argument"
    );

    if keep_inside {
        format!("{}{}{}", &s[..pos], &s[arg_open + 1..arg_close], tail)
    } else {
        format!("{}{}", &s[..pos], tail)
    }
}
