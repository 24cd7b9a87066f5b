//! Core normalization modules
//!
//! Leaf to root:
//! - `scanner`: balance checks and escape-aware brace search
//! - `scope`: balanced brace group extraction
//! - `command`: backward command resolution from a brace
//! - `rewrite`: command deletion and unwrapping
//! - `fraction`, `vector`, `braces`, `relation`: canonicalization passes
//! - `pipeline`: the two preprocessing stages
//! - `options`, `parser`: configuration records and the downstream parser seam

pub mod braces;
pub mod command;
pub mod fraction;
pub mod options;
pub mod parser;
pub mod pipeline;
pub mod relation;
pub mod rewrite;
pub mod scanner;
pub mod scope;
pub mod vector;

// Re-export main types and functions
pub use command::{first_brace_command, resolve_command, CommandToken};
pub use options::{BoxedMode, ConversionConfig, NormalizationConfig, NormalizeOptions};
pub use parser::{convert_with, ExpressionParser};
pub use pipeline::{
    canonicalize_notation, preprocess_structure, Normalizer, MAX_LEADING_BRACE_PASSES,
    MAX_TRAILING_BRACE_PASSES,
};
pub use rewrite::{remove_command, remove_command_with, CommandMatcher, SubstringMatcher, TokenMatcher};
pub use scanner::{find_first_unescaped_brace, is_balanced};
pub use scope::{extract_scope, Scope};
