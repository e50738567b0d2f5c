//! Markup tokenizer for bookmark files.
//!
//! # Scope
//!
//! Bookmark exports are tag soup: `<DT>`, `<DD>` and `<p>` are never closed,
//! there is no `<html>` root, and browsers disagree on attribute casing. This
//! crate turns such input into a flat, document-ordered stream of events
//! (start tag with attributes, end tag, character, end-of-file) without ever
//! failing. It implements:
//! - Data, tag, attribute, comment and DOCTYPE tokenization
//! - Named and numeric character references
//! - ASCII lowercasing of tag and attribute names
//!
//! # Not Implemented
//!
//! - Tree construction; nesting is never validated
//! - RCDATA, RAWTEXT and script data states
//! - The full named character reference table

/// Tokenizer for converting input into tokens.
pub mod tokenizer;

pub use tokenizer::{Attribute, MarkupTokenizer, ParseErrorKind, Token, TokenizerIssue, tokenize};
