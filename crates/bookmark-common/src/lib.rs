//! Common utilities for the bookmark file tools.
//!
//! This crate provides shared infrastructure used by the tokenizer, the
//! bookmark parser, and the command-line tool:
//! - **Warning System** - colored, deduplicated terminal output for
//!   recoverable problems in the input

pub mod warning;
