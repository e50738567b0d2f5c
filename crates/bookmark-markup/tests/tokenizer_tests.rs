//! Integration tests for the markup tokenizer.

use bookmark_markup::{MarkupTokenizer, ParseErrorKind, Token, tokenize};

/// Helper to collect the character tokens of a stream into a string
fn text_of(tokens: &[Token]) -> String {
    tokens
        .iter()
        .filter_map(|token| match token {
            Token::Character { data } => Some(*data),
            _ => None,
        })
        .collect()
}

/// Helper to tokenize a string and return the recorded error kinds
fn issue_kinds(input: &str) -> Vec<ParseErrorKind> {
    let mut tokenizer = MarkupTokenizer::new(input);
    tokenizer.run();
    tokenizer.issues().iter().map(|issue| issue.kind).collect()
}

#[test]
fn test_plain_text() {
    let tokens = tokenize("Hello");
    assert_eq!(tokens.len(), 6); // 5 chars + EOF
    assert!(matches!(tokens[0], Token::Character { data: 'H' }));
    assert!(matches!(tokens[4], Token::Character { data: 'o' }));
    assert!(matches!(tokens[5], Token::EndOfFile));
}

#[test]
fn test_empty_input_yields_only_eof() {
    let tokens = tokenize("");
    assert_eq!(tokens, vec![Token::EndOfFile]);
}

#[test]
fn test_netscape_doctype() {
    let tokens = tokenize("<!DOCTYPE NETSCAPE-Bookmark-file-1>");
    assert_eq!(tokens.len(), 2);
    match &tokens[0] {
        Token::Doctype { name } => {
            assert_eq!(name.as_deref(), Some("netscape-bookmark-file-1"));
        }
        _ => panic!("Expected DOCTYPE token"),
    }
}

#[test]
fn test_anchor_with_uppercase_attributes() {
    let tokens = tokenize(r#"<A HREF="https://example.com/" ADD_DATE="1500000000">Example</A>"#);
    match &tokens[0] {
        Token::StartTag {
            name,
            self_closing,
            attributes,
        } => {
            assert_eq!(name, "a");
            assert!(!self_closing);
            assert_eq!(attributes.len(), 2);
            assert_eq!(attributes[0].name, "href");
            assert_eq!(attributes[0].value, "https://example.com/");
            assert_eq!(attributes[1].name, "add_date");
            assert_eq!(attributes[1].value, "1500000000");
        }
        _ => panic!("Expected StartTag token"),
    }
    assert_eq!(text_of(&tokens), "Example");
    assert!(matches!(&tokens[8], Token::EndTag { name } if name == "a"));
    assert!(tokens[9].is_eof());
}

#[test]
fn test_attribute_lookup_helper() {
    let tokens = tokenize("<a href='single' tags=unquoted empty>");
    assert_eq!(tokens[0].attribute("href"), Some("single"));
    assert_eq!(tokens[0].attribute("tags"), Some("unquoted"));
    assert_eq!(tokens[0].attribute("empty"), Some(""));
    assert_eq!(tokens[0].attribute("icon"), None);
}

#[test]
fn test_end_tag_is_lowercased() {
    let tokens = tokenize("</DL>");
    assert!(matches!(&tokens[0], Token::EndTag { name } if name == "dl"));
}

#[test]
fn test_self_closing_tag() {
    let tokens = tokenize("<br/>");
    match &tokens[0] {
        Token::StartTag {
            name, self_closing, ..
        } => {
            assert_eq!(name, "br");
            assert!(self_closing);
        }
        _ => panic!("Expected self-closing StartTag token"),
    }
}

#[test]
fn test_comment() {
    let tokens = tokenize("<!-- This is an automatically generated file. -->");
    assert_eq!(tokens.len(), 2);
    assert!(
        matches!(&tokens[0], Token::Comment { data } if data == " This is an automatically generated file. ")
    );
}

#[test]
fn test_comment_with_dashes_inside() {
    let tokens = tokenize("<!-- a-b--c -->");
    assert!(matches!(&tokens[0], Token::Comment { data } if data == " a-b--c "));
}

#[test]
fn test_bogus_comment_from_processing_instruction() {
    let tokens = tokenize("<?xml version=\"1.0\"?>x");
    assert!(matches!(&tokens[0], Token::Comment { data } if data.starts_with("?xml")));
    assert_eq!(text_of(&tokens), "x");
}

#[test]
fn test_stray_less_than_is_text() {
    let tokens = tokenize("a < b");
    assert_eq!(text_of(&tokens), "a < b");
    assert_eq!(
        issue_kinds("a < b"),
        vec![ParseErrorKind::InvalidFirstCharacterOfTagName]
    );
}

#[test]
fn test_crlf_is_normalized() {
    let tokens = tokenize("a\r\nb\rc");
    assert_eq!(text_of(&tokens), "a\nb\nc");
}

#[test]
fn test_named_character_references_in_text() {
    let tokens = tokenize("Tom &amp; Jerry &lt;3 &quot;hi&quot; &copy; &hellip;");
    assert_eq!(text_of(&tokens), "Tom & Jerry <3 \"hi\" \u{A9} \u{2026}");
}

#[test]
fn test_legacy_reference_without_semicolon() {
    let input = "fish &amp chips";
    assert_eq!(text_of(&tokenize(input)), "fish & chips");
    assert_eq!(
        issue_kinds(input),
        vec![ParseErrorKind::MissingSemicolonAfterCharacterReference]
    );
}

#[test]
fn test_unknown_named_reference_is_literal() {
    let input = "&notanentity; and &zz";
    assert_eq!(text_of(&tokenize(input)), input);
    assert_eq!(
        issue_kinds(input),
        vec![ParseErrorKind::UnknownNamedCharacterReference]
    );
}

#[test]
fn test_numeric_character_references() {
    let tokens = tokenize("it&#39;s &#x27;quoted&#X27; &#65");
    assert_eq!(text_of(&tokens), "it's 'quoted' A");
}

#[test]
fn test_numeric_reference_edge_cases() {
    // NUL, out of range, surrogate, and a windows-1252 C1 remap
    let tokens = tokenize("&#0;&#99999999999;&#xD800;&#128;");
    assert_eq!(text_of(&tokens), "\u{FFFD}\u{FFFD}\u{FFFD}\u{20AC}");
    assert_eq!(
        issue_kinds("&#0;&#99999999999;&#xD800;&#128;"),
        vec![
            ParseErrorKind::NullCharacterReference,
            ParseErrorKind::CharacterReferenceOutsideUnicodeRange,
            ParseErrorKind::SurrogateCharacterReference,
            ParseErrorKind::ControlCharacterReference,
        ]
    );
}

#[test]
fn test_numeric_reference_without_digits() {
    let tokens = tokenize("&#; &#x;");
    assert_eq!(text_of(&tokens), "&#; &#x;");
}

#[test]
fn test_bare_ampersand() {
    let tokens = tokenize("a & b &");
    assert_eq!(text_of(&tokens), "a & b &");
}

#[test]
fn test_references_in_attribute_values() {
    let tokens = tokenize(r#"<a href="https://e.com/?a=1&amp;b=2" tags="x&#44;y">"#);
    assert_eq!(tokens[0].attribute("href"), Some("https://e.com/?a=1&b=2"));
    assert_eq!(tokens[0].attribute("tags"), Some("x,y"));
}

#[test]
fn test_historical_attribute_reference_left_alone() {
    // "&copy=" and "&lt2" must survive in query strings
    let tokens = tokenize(r#"<a href="https://e.com/?x=1&copy=2&lt2">"#);
    assert_eq!(
        tokens[0].attribute("href"),
        Some("https://e.com/?x=1&copy=2&lt2")
    );
}

#[test]
fn test_duplicate_attribute_keeps_first() {
    let input = r#"<a HREF="first" href="second">"#;
    let tokens = tokenize(input);
    match &tokens[0] {
        Token::StartTag { attributes, .. } => {
            assert_eq!(attributes.len(), 1);
            assert_eq!(attributes[0].value, "first");
        }
        _ => panic!("Expected StartTag token"),
    }
    assert_eq!(issue_kinds(input), vec![ParseErrorKind::DuplicateAttribute]);
}

#[test]
fn test_eof_inside_tag_drops_the_tag() {
    let input = r#"text<a href="unterminated"#;
    let tokens = tokenize(input);
    assert_eq!(text_of(&tokens), "text");
    assert!(tokens.last().is_some_and(Token::is_eof));
    assert!(
        !tokens
            .iter()
            .any(|token| matches!(token, Token::StartTag { .. }))
    );
    assert_eq!(issue_kinds(input), vec![ParseErrorKind::EofInTag]);
}

#[test]
fn test_eof_inside_comment_emits_comment() {
    let tokens = tokenize("<!-- never closed");
    assert!(matches!(&tokens[0], Token::Comment { data } if data == " never closed"));
    assert!(tokens[1].is_eof());
}

#[test]
fn test_missing_whitespace_between_attributes() {
    let input = r#"<a href="x"add_date="5">"#;
    let tokens = tokenize(input);
    assert_eq!(tokens[0].attribute("add_date"), Some("5"));
    assert_eq!(
        issue_kinds(input),
        vec![ParseErrorKind::MissingWhitespaceBetweenAttributes]
    );
}

#[test]
fn test_issue_positions_are_byte_offsets() {
    let mut tokenizer = MarkupTokenizer::new("ab <3");
    tokenizer.run();
    let issues = tokenizer.issues();
    assert_eq!(issues.len(), 1);
    // Reported after consuming the character following '<'
    assert_eq!(issues[0].position, 5);
}

#[test]
fn test_non_ascii_text_passes_through() {
    let tokens = tokenize("<H3>Café ☕ 書籤</H3>");
    assert_eq!(text_of(&tokens), "Café ☕ 書籤");
}

#[test]
fn test_netscape_document_shape() {
    let input = "<!DOCTYPE NETSCAPE-Bookmark-file-1>\n\
                 <DL><p>\n\
                 <DT><H3>Folder</H3>\n\
                 <DL><p>\n\
                 <DT><A HREF=\"https://a.example/\">A</A>\n\
                 <DD>About A\n\
                 </DL><p>\n\
                 </DL>\n";
    let tags: Vec<String> = tokenize(input)
        .iter()
        .filter_map(|token| match token {
            Token::StartTag { name, .. } => Some(name.clone()),
            Token::EndTag { name } => Some(format!("/{name}")),
            _ => None,
        })
        .collect();
    assert_eq!(
        tags,
        vec![
            "dl", "p", "dt", "h3", "/h3", "dl", "p", "dt", "a", "/a", "dd", "/dl", "p", "/dl"
        ]
    );
}

#[test]
fn test_parse_error_kind_display() {
    assert_eq!(
        ParseErrorKind::MissingSemicolonAfterCharacterReference.to_string(),
        "missing-semicolon-after-character-reference"
    );
}
