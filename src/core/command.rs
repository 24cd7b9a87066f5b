//! Backward command resolution
//!
//! Given the position of a `{`, walk backwards to find out what owns the
//! brace group: a named command (`\sqrt{...}`, `\frac[..]{...}`), a
//! superscript/subscript marker (`^{...}`, `_{...}`), or nothing at all.

use super::scanner::find_first_unescaped_brace;
use std::fmt;

/// What a brace group is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandToken<'a> {
    /// `^` or `_`
    Script(char),
    /// Backslash-prefixed command name, e.g. `\sqrt` or `\frac1`
    Named(&'a str),
}

impl CommandToken<'_> {
    pub fn is_script(&self) -> bool {
        matches!(self, CommandToken::Script(_))
    }
}

impl fmt::Display for CommandToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandToken::Script(c) => write!(f, "{}", c),
            CommandToken::Named(name) => write!(f, "{}", name),
        }
    }
}

/// Resolve the command that owns the brace at `brace_pos`.
///
/// Spaces and tabs between the command and its brace are skipped, and so is
/// one or more optional `[...]` argument groups. Returns `None` for a bare
/// group such as the outer braces in `{x+1}`.
///
/// The character right before the brace ends the name even when it is not a
/// letter, so `\frac1{2}` belongs to `\frac1`.
///
/// ```rust
/// use texcanon::core::command::{resolve_command, CommandToken};
///
/// assert_eq!(resolve_command(r"\sqrt[3]{x}", 8), Some(CommandToken::Named(r"\sqrt")));
/// assert_eq!(resolve_command("x^{2}", 2), Some(CommandToken::Script('^')));
/// assert_eq!(resolve_command(r"\frac1{2}", 6), Some(CommandToken::Named(r"\frac1")));
/// assert_eq!(resolve_command("{x}", 0), None);
/// ```
pub fn resolve_command(s: &str, brace_pos: usize) -> Option<CommandToken<'_>> {
    let head = s.get(..brace_pos)?;
    let mut parameter_mode = false;
    let mut stop = None;

    for (i, c) in head.char_indices().rev() {
        if parameter_mode {
            if c == '[' {
                parameter_mode = false;
            }
            continue;
        }
        match c {
            '^' | '_' => return Some(CommandToken::Script(c)),
            ' ' | '\t' | '[' => {}
            ']' => parameter_mode = true,
            _ => {
                stop = Some((i, c));
                break;
            }
        }
    }

    let (last, c) = stop?;
    if c == '\\' {
        return None;
    }

    let name_start = head[..last]
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_alphabetic())
        .last()
        .map_or(last, |(i, _)| i);

    if !head[..name_start].ends_with('\\') {
        return None;
    }

    Some(CommandToken::Named(
        &head[name_start - 1..last + c.len_utf8()],
    ))
}

/// Resolve the owner of the first unescaped brace in `s`.
pub fn first_brace_command(s: &str) -> Option<CommandToken<'_>> {
    let pos = find_first_unescaped_brace(s)?;
    resolve_command(s, pos)
}
