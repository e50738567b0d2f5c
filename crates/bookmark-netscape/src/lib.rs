//! Netscape Bookmark File parser and formatter.
//!
//! # Scope
//!
//! The Netscape Bookmark File is the interchange format every browser
//! exports: a loosely HTML document of nested `<DL>` lists where `<H3>`
//! names a folder, `<A>` is a bookmark and `<DD>` carries its description.
//! This crate implements:
//! - [`parse`]: a tolerant streaming state machine over the
//!   [`bookmark_markup`] token stream, producing [`Bookmark`]s with their
//!   folder paths
//! - [`format`]: the inverse, writing the same non-well-formed dialect and
//!   only opening and closing the folders that differ between consecutive
//!   bookmarks
//! - [`SchemeFilter`]: an opt-in post-processing step that keeps only web
//!   URLs
//!
//! `parse(format(bookmarks))` reproduces `bookmarks` for any well-formed
//! input.
//!
//! # Not Implemented
//!
//! - Folder metadata (`ADD_DATE` on `<H3>`, personal toolbar flags)
//! - Separators (`<HR>`) and feed bookmarks; they are skipped on parse

/// Anchor attributes recognized by the parser and written by the formatter.
pub mod attribute;
/// The bookmark record.
pub mod bookmark;
/// Formatter error types.
pub mod error;
/// Markup escaping.
pub mod escape;
/// URL scheme filtering.
pub mod filter;
/// Bookmark list to Netscape markup.
pub mod formatter;
/// Netscape markup to bookmark list.
pub mod parser;
/// Second-resolution timestamps.
pub mod timestamp;

pub use attribute::AnchorAttribute;
pub use bookmark::Bookmark;
pub use error::FormatError;
pub use filter::SchemeFilter;
pub use formatter::{FormatOptions, format, format_with_options};
pub use parser::{BookmarkParser, ParseIssue, ParseOptions, ParseState, parse, parse_with_options};
pub use timestamp::Timestamp;
