//! Data layer - Static tables
//!
//! This module contains the static data used by the canonicalization passes:
//! - Ordered command and literal rewrite tables
//! - Relation signs for trailing-content extraction
//! - Unicode operator folding

pub mod tables;
pub mod unicode;

// Re-export commonly used items
pub use tables::{
    apply_cosmetic_deletions, apply_literal_replacements, COSMETIC_DELETIONS, DELETED_COMMANDS,
    LITERAL_REPLACEMENTS, RELATION_SIGNS, UNWRAPPED_COMMANDS,
};
pub use unicode::{fold_unicode_symbols, lookup_unicode_symbol, strip_non_ascii, UNICODE_SYMBOLS};
