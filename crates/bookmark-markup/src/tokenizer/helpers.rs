//! Helper functions for the markup tokenizer.
//!
//! [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//!
//! - State transitions ("Switch to", "Reconsume in")
//! - Input handling ("Consume the next input character")
//! - Token emission ("Emit the current token")
//! - EOF recovery shared by the tag, comment and DOCTYPE states
//! - Parse error reporting

use bookmark_common::warning::warn_once;

use super::state_machine::{MarkupTokenizer, ParseErrorKind, TokenizerIssue, TokenizerState};
use super::token::Token;

// =============================================================================
// State Transition Helpers
// =============================================================================

impl MarkupTokenizer {
    /// "Switch to the X state"
    ///
    /// The next character is consumed on the next iteration of the main loop.
    pub(super) const fn switch_to(&mut self, new_state: TokenizerState) {
        self.state = new_state;
    }

    /// "Reconsume in the X state"
    ///
    /// The current character is processed again in the new state.
    pub(super) const fn reconsume_in(&mut self, new_state: TokenizerState) {
        self.reconsume = true;
        self.state = new_state;
    }

    /// Takes the return state set before entering a character reference.
    /// Falls back to the data state if none was set.
    pub(super) fn take_return_state(&mut self) -> TokenizerState {
        self.return_state.take().unwrap_or(TokenizerState::Data)
    }
}

// =============================================================================
// Input/Character Helpers
// =============================================================================

impl MarkupTokenizer {
    /// "Consume the next input character"
    ///
    /// Returns None once the input is exhausted.
    pub(super) fn consume(&mut self) -> Option<char> {
        let c = self.input[self.current_pos..].chars().next()?;
        self.current_pos += c.len_utf8();
        Some(c)
    }

    /// Peek at the codepoint `offset` characters past the current position
    /// without consuming it.
    pub(super) fn peek_codepoint(&self, offset: usize) -> Option<char> {
        self.input[self.current_pos..].chars().nth(offset)
    }

    /// "If the next few characters are..."
    pub(super) fn next_few_characters_are(&self, target: &str) -> bool {
        self.input[self.current_pos..].starts_with(target)
    }

    /// "ASCII case-insensitive match for the word 'DOCTYPE'"
    pub(super) fn next_few_characters_are_case_insensitive(&self, target: &str) -> bool {
        self.input[self.current_pos..]
            .get(..target.len())
            .is_some_and(|next| next.eq_ignore_ascii_case(target))
    }

    /// Consume the given ASCII string from the input.
    /// Caller must have already verified the characters are present.
    pub(super) const fn consume_string(&mut self, target: &str) {
        self.current_pos += target.len();
    }

    /// [§ 12.1.4 ASCII whitespace](https://infra.spec.whatwg.org/#ascii-whitespace)
    ///
    /// CR is absent because newlines are normalized before tokenization.
    pub(super) const fn is_whitespace_char(input_char: char) -> bool {
        matches!(input_char, ' ' | '\t' | '\n' | '\x0C')
    }
}

// =============================================================================
// Token Emission Helpers
// =============================================================================

impl MarkupTokenizer {
    /// Apply `f` to the token under construction, if any.
    pub(super) fn with_current_token(&mut self, f: impl FnOnce(&mut Token)) {
        if let Some(token) = self.current_token.as_mut() {
            f(token);
        }
    }

    /// "Emit the current token"
    pub(super) fn emit_token(&mut self) {
        if let Some(mut token) = self.current_token.take() {
            if token.remove_duplicate_attributes() {
                self.log_parse_error(ParseErrorKind::DuplicateAttribute);
            }
            self.token_stream.push(token);
        }
    }

    /// "Emit the current input character as a character token."
    pub(super) fn emit_character_token(&mut self, c: char) {
        self.token_stream.push(Token::Character { data: c });
    }

    /// "Emit an end-of-file token."
    pub(super) fn emit_eof_token(&mut self) {
        self.token_stream.push(Token::EndOfFile);
        self.at_eof = true;
    }
}

// =============================================================================
// EOF Recovery
// =============================================================================

impl MarkupTokenizer {
    /// "EOF - This is an eof-in-tag parse error. Emit an end-of-file token."
    ///
    /// The unfinished tag is dropped.
    pub(super) fn eof_in_tag(&mut self) {
        self.log_parse_error(ParseErrorKind::EofInTag);
        self.current_token = None;
        self.emit_eof_token();
    }

    /// "EOF - This is an eof-in-comment parse error. Emit the current comment
    /// token. Emit an end-of-file token."
    pub(super) fn eof_in_comment(&mut self) {
        self.log_parse_error(ParseErrorKind::EofInComment);
        self.emit_token();
        self.emit_eof_token();
    }

    /// "EOF - This is an eof-in-doctype parse error. Emit the current DOCTYPE
    /// token. Emit an end-of-file token."
    pub(super) fn eof_in_doctype(&mut self) {
        self.log_parse_error(ParseErrorKind::EofInDoctype);
        self.emit_token();
        self.emit_eof_token();
    }
}

// =============================================================================
// Error Handling
// =============================================================================

impl MarkupTokenizer {
    /// [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors)
    ///
    /// Records the error and reports it once per kind through the shared
    /// warning system. Parse errors are never fatal.
    pub(super) fn log_parse_error(&mut self, kind: ParseErrorKind) {
        self.issues.push(TokenizerIssue {
            kind,
            position: self.current_pos,
        });
        warn_once("Markup Tokenizer", &kind.to_string());
    }
}
