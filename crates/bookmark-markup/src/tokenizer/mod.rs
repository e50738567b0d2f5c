//! Tokenizer module.
//!
//! Follows the shape of [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//! of the WHATWG HTML Living Standard, restricted to the states bookmark
//! files need.

/// Character reference states per § 13.2.5.72 - § 13.2.5.80.
pub mod character_reference;
/// Helper methods for tokenizer state transitions.
pub mod helpers;
/// Named character reference lookup table.
pub mod named_character_references;
/// Tokenizer state machine implementation.
pub mod state_machine;
/// Token types produced by the tokenizer.
pub mod token;

pub use state_machine::{MarkupTokenizer, ParseErrorKind, TokenizerIssue, TokenizerState};
pub use token::{Attribute, Token};

/// Tokenize `input` to completion and return the token stream, which always
/// ends with [`Token::EndOfFile`].
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokenizer = MarkupTokenizer::new(input);
    tokenizer.run();
    tokenizer.into_tokens()
}
