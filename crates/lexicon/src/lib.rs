//! `listwise-lexicon`: vocabulary tables for the item parser.
//!
//! Pure data: lookups only. Tables are loaded from TOML so a vocabulary can
//! be extended or replaced without touching the parser.

pub mod error;
pub mod lexicon;

pub use error::LexiconError;
pub use lexicon::{Lexicon, BUILTIN_PT_BR};
