//! Character reference states for the markup tokenizer.
//!
//! [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
//!
//! Bookmark titles and URLs routinely carry `&amp;`, `&#39;` and friends.
//! Named references are matched against a reduced table; numeric references
//! are fully supported.

use super::named_character_references::lookup_entity;
use super::state_machine::{MarkupTokenizer, ParseErrorKind, TokenizerState};

/// [§ 13.2.5.80 Numeric character reference end state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state)
///
/// Windows-1252 replacements for code points 0x80..=0x9F. Entries of zero
/// have no replacement.
const C1_REPLACEMENTS: [u32; 32] = [
    0x20AC, 0, 0x201A, 0x0192, 0x201E, 0x2026, 0x2020, 0x2021, 0x02C6, 0x2030, 0x0160, 0x2039,
    0x0152, 0, 0x017D, 0, 0, 0x2018, 0x2019, 0x201C, 0x201D, 0x2022, 0x2013, 0x2014, 0x02DC,
    0x2122, 0x0161, 0x203A, 0x0153, 0, 0x017E, 0x0178,
];

impl MarkupTokenizer {
    /// "consumed as part of an attribute"
    pub(super) const fn is_consumed_as_part_of_attribute(&self) -> bool {
        matches!(
            self.return_state,
            Some(
                TokenizerState::AttributeValueDoubleQuoted
                    | TokenizerState::AttributeValueSingleQuoted
                    | TokenizerState::AttributeValueUnquoted
            )
        )
    }

    /// "Flush code points consumed as a character reference"
    ///
    /// "If the character reference was consumed as part of an attribute, then
    /// append each character to the current attribute's value. Otherwise, emit
    /// each character as a character token."
    pub(super) fn flush_code_points_consumed_as_character_reference(&mut self) {
        let buffer = std::mem::take(&mut self.temporary_buffer);
        if self.is_consumed_as_part_of_attribute() {
            self.with_current_token(|token| {
                for c in buffer.chars() {
                    token.append_to_current_attribute_value(c);
                }
            });
        } else {
            for c in buffer.chars() {
                self.emit_character_token(c);
            }
        }
    }

    /// [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
    pub(super) fn handle_character_reference_state(&mut self) {
        // "Set the temporary buffer to the empty string. Append a U+0026
        // AMPERSAND (&) character to the temporary buffer."
        self.temporary_buffer.clear();
        self.temporary_buffer.push('&');

        match self.current_input_character {
            Some(c) if c.is_ascii_alphanumeric() => {
                self.reconsume_in(TokenizerState::NamedCharacterReference);
            }
            Some('#') => {
                self.temporary_buffer.push('#');
                self.switch_to(TokenizerState::NumericCharacterReference);
            }
            // "Flush code points consumed as a character reference. Reconsume
            // in the return state."
            _ => {
                self.flush_code_points_consumed_as_character_reference();
                let return_state = self.take_return_state();
                self.reconsume_in(return_state);
            }
        }
    }

    /// [§ 13.2.5.73 Named character reference state](https://html.spec.whatwg.org/multipage/parsing.html#named-character-reference-state)
    ///
    /// Entered by reconsuming the first alphanumeric. The whole run of
    /// alphanumerics (plus a closing `;`) is consumed up front, then the
    /// longest prefix found in the table wins. Anything consumed past the
    /// match is passed through as-is, which matches what the ambiguous
    /// ampersand state would have produced.
    pub(super) fn handle_named_character_reference_state(&mut self) {
        if let Some(c) = self.current_input_character {
            self.temporary_buffer.push(c);
        }
        while let Some(c) = self.peek_codepoint(0).filter(char::is_ascii_alphanumeric) {
            let _ = self.consume();
            self.temporary_buffer.push(c);
        }
        if self.peek_codepoint(0) == Some(';') {
            let _ = self.consume();
            self.temporary_buffer.push(';');
        }

        // Buffer is '&' followed by ASCII, so every index is a char boundary.
        let longest_match = (2..=self.temporary_buffer.len())
            .rev()
            .find_map(|end| lookup_entity(&self.temporary_buffer[1..end]).map(|r| (end, r)));

        let Some((match_end, replacement)) = longest_match else {
            // "Otherwise: Flush code points consumed as a character reference.
            // Switch to the ambiguous ampersand state."
            if self.temporary_buffer.ends_with(';') {
                self.log_parse_error(ParseErrorKind::UnknownNamedCharacterReference);
            }
            self.flush_and_return();
            return;
        };

        let ends_with_semicolon = self.temporary_buffer[..match_end].ends_with(';');
        let next_char = self.temporary_buffer[match_end..]
            .chars()
            .next()
            .or_else(|| self.peek_codepoint(0));

        // "If the character reference was consumed as part of an attribute, and
        // the last character matched is not a U+003B SEMICOLON character (;),
        // and the next input character is either a U+003D EQUALS SIGN
        // character (=) or an ASCII alphanumeric, then, for historical reasons,
        // flush code points consumed as a character reference and switch to
        // the return state."
        if self.is_consumed_as_part_of_attribute()
            && !ends_with_semicolon
            && next_char.is_some_and(|c| c == '=' || c.is_ascii_alphanumeric())
        {
            self.flush_and_return();
            return;
        }

        if !ends_with_semicolon {
            self.log_parse_error(ParseErrorKind::MissingSemicolonAfterCharacterReference);
        }

        let trailing = self.temporary_buffer.split_off(match_end);
        self.temporary_buffer.clear();
        self.temporary_buffer.push_str(replacement);
        self.temporary_buffer.push_str(&trailing);
        self.flush_and_return();
    }

    /// Flush the temporary buffer and switch to the return state. Used once
    /// the named reference has consumed everything it looks at.
    fn flush_and_return(&mut self) {
        self.flush_code_points_consumed_as_character_reference();
        let return_state = self.take_return_state();
        self.switch_to(return_state);
    }

    /// [§ 13.2.5.75 Numeric character reference state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-state)
    pub(super) fn handle_numeric_character_reference_state(&mut self) {
        // "Set the character reference code to zero (0)."
        self.character_reference_code = 0;

        match self.current_input_character {
            Some(c @ ('x' | 'X')) => {
                self.temporary_buffer.push(c);
                self.switch_to(TokenizerState::HexadecimalCharacterReferenceStart);
            }
            _ => self.reconsume_in(TokenizerState::DecimalCharacterReferenceStart),
        }
    }

    /// [§ 13.2.5.76 Hexadecimal character reference start state](https://html.spec.whatwg.org/multipage/parsing.html#hexadecimal-character-reference-start-state)
    pub(super) fn handle_hexadecimal_character_reference_start_state(&mut self) {
        match self.current_input_character {
            Some(c) if c.is_ascii_hexdigit() => {
                self.reconsume_in(TokenizerState::HexadecimalCharacterReference);
            }
            _ => self.absence_of_digits(),
        }
    }

    /// [§ 13.2.5.77 Decimal character reference start state](https://html.spec.whatwg.org/multipage/parsing.html#decimal-character-reference-start-state)
    pub(super) fn handle_decimal_character_reference_start_state(&mut self) {
        match self.current_input_character {
            Some(c) if c.is_ascii_digit() => {
                self.reconsume_in(TokenizerState::DecimalCharacterReference);
            }
            _ => self.absence_of_digits(),
        }
    }

    /// "This is an absence-of-digits-in-numeric-character-reference parse
    /// error. Flush code points consumed as a character reference. Reconsume
    /// in the return state."
    fn absence_of_digits(&mut self) {
        self.log_parse_error(ParseErrorKind::AbsenceOfDigitsInNumericCharacterReference);
        self.flush_code_points_consumed_as_character_reference();
        let return_state = self.take_return_state();
        self.reconsume_in(return_state);
    }

    /// [§ 13.2.5.78 Hexadecimal character reference state](https://html.spec.whatwg.org/multipage/parsing.html#hexadecimal-character-reference-state)
    pub(super) fn handle_hexadecimal_character_reference_state(&mut self) {
        self.accumulate_digit(16);
    }

    /// [§ 13.2.5.79 Decimal character reference state](https://html.spec.whatwg.org/multipage/parsing.html#decimal-character-reference-state)
    pub(super) fn handle_decimal_character_reference_state(&mut self) {
        self.accumulate_digit(10);
    }

    /// Shared body of the hexadecimal and decimal reference states.
    fn accumulate_digit(&mut self, radix: u32) {
        match self.current_input_character {
            Some(c) if c.is_digit(radix) => {
                let digit = c.to_digit(radix).unwrap_or(0);
                // Saturate rather than wrap; anything past U+10FFFF is
                // replaced at the end anyway.
                self.character_reference_code = self
                    .character_reference_code
                    .saturating_mul(radix)
                    .saturating_add(digit);
            }
            Some(';') => {
                self.finish_numeric_character_reference();
                let return_state = self.take_return_state();
                self.switch_to(return_state);
            }
            _ => {
                self.log_parse_error(ParseErrorKind::MissingSemicolonAfterCharacterReference);
                self.finish_numeric_character_reference();
                let return_state = self.take_return_state();
                self.reconsume_in(return_state);
            }
        }
    }

    /// [§ 13.2.5.80 Numeric character reference end state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state)
    ///
    /// Checks the accumulated code, then flushes the resulting character.
    fn finish_numeric_character_reference(&mut self) {
        let code = self.character_reference_code;
        let code = if code == 0 {
            self.log_parse_error(ParseErrorKind::NullCharacterReference);
            0xFFFD
        } else if code > 0x0010_FFFF {
            self.log_parse_error(ParseErrorKind::CharacterReferenceOutsideUnicodeRange);
            0xFFFD
        } else if (0xD800..=0xDFFF).contains(&code) {
            self.log_parse_error(ParseErrorKind::SurrogateCharacterReference);
            0xFFFD
        } else if (0x80..=0x9F).contains(&code) {
            self.log_parse_error(ParseErrorKind::ControlCharacterReference);
            usize::try_from(code - 0x80)
                .ok()
                .and_then(|index| C1_REPLACEMENTS.get(index).copied())
                .filter(|&replacement| replacement != 0)
                .unwrap_or(code)
        } else {
            code
        };

        self.temporary_buffer.clear();
        self.temporary_buffer
            .push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
        self.flush_code_points_consumed_as_character_reference();
    }
}
