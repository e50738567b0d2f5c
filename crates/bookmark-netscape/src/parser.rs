use std::str::FromStr;

use strum_macros::{Display, EnumString};

use bookmark_common::warning::warn_once;
use bookmark_markup::{Attribute, Token, tokenize};

use crate::attribute::AnchorAttribute;
use crate::bookmark::Bookmark;
use crate::filter::SchemeFilter;
use crate::timestamp::Timestamp;

/// What the parser is collecting text for.
///
/// At most one element is open at a time; any start or end tag closes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum ParseState {
    /// Between elements. Text is ignored.
    #[default]
    Idle,
    /// Inside `<A>`: text becomes the bookmark name.
    InBookmark,
    /// Inside `<H3>`: text becomes a folder name.
    InFolderHeading,
    /// After `<DD>`: text becomes the last bookmark's description.
    InDescription,
}

/// Elements with meaning in a bookmark file. Tag names arrive lowercased
/// from the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
enum Element {
    A,
    H3,
    Dd,
    Dl,
}

/// A structural anomaly the parser absorbed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// What was wrong and how it was handled.
    pub message: String,
    /// Index into the token stream where it was encountered.
    pub token_index: usize,
}

/// Options for [`parse_with_options`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Applied to the parsed list before it is returned.
    pub scheme_filter: SchemeFilter,
}

impl ParseOptions {
    /// Set the scheme filter.
    #[must_use]
    pub const fn with_scheme_filter(mut self, scheme_filter: SchemeFilter) -> Self {
        self.scheme_filter = scheme_filter;
        self
    }
}

/// Builds bookmarks from a token stream.
///
/// A single pass over the tokens with a stack of open folder names: `<H3>`
/// text pushes a name, `</DL>` pops one. Each `<A>` captures a copy of the
/// stack as its folder path. The parser never fails; unexpected structure
/// is skipped and recorded as a [`ParseIssue`].
pub struct BookmarkParser {
    tokens: Vec<Token>,
    token_index: usize,

    state: ParseState,
    /// Text collected since the current element opened.
    text: String,
    /// Open folder names, root first.
    folders: Vec<String>,
    /// `<DL>` opens minus closes, to tell a stray `</DL>` from the root's.
    open_lists: usize,
    /// The anchor being built while in [`ParseState::InBookmark`]. `None`
    /// for an anchor that will be skipped.
    current: Option<Bookmark>,
    /// Index of the bookmark a `<DD>` would describe: the last one appended,
    /// unless an anchor has been skipped since.
    description_target: Option<usize>,

    bookmarks: Vec<Bookmark>,
    issues: Vec<ParseIssue>,
}

impl BookmarkParser {
    /// Create a parser over a token stream.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            token_index: 0,
            state: ParseState::Idle,
            text: String::new(),
            folders: Vec::new(),
            open_lists: 0,
            current: None,
            description_target: None,
            bookmarks: Vec::new(),
            issues: Vec::new(),
        }
    }

    /// Run the parser and return the bookmarks in document order.
    #[must_use]
    pub fn run(self) -> Vec<Bookmark> {
        self.run_with_issues().0
    }

    /// Run the parser and return both the bookmarks and any issues.
    #[must_use]
    pub fn run_with_issues(mut self) -> (Vec<Bookmark>, Vec<ParseIssue>) {
        let tokens = std::mem::take(&mut self.tokens);
        for (index, token) in tokens.iter().enumerate() {
            self.token_index = index;
            self.process_token(token);
        }
        // A stream without an end-of-file token still ends here.
        self.finalize();
        (self.bookmarks, self.issues)
    }

    fn process_token(&mut self, token: &Token) {
        match token {
            Token::StartTag {
                name, attributes, ..
            } => {
                self.finalize();
                match Element::from_str(name) {
                    Ok(Element::A) => self.start_bookmark(attributes),
                    Ok(Element::H3) => self.state = ParseState::InFolderHeading,
                    Ok(Element::Dd) => self.state = ParseState::InDescription,
                    Ok(Element::Dl) => self.open_lists += 1,
                    Err(_) => {}
                }
            }
            Token::EndTag { name } => {
                self.finalize();
                if Element::from_str(name) == Ok(Element::Dl) {
                    self.close_folder();
                }
            }
            Token::Character { data } => {
                if self.state != ParseState::Idle {
                    self.text.push(*data);
                }
            }
            Token::EndOfFile => self.finalize(),
            Token::Comment { .. } | Token::Doctype { .. } => {}
        }
    }

    /// Start of `<A>`: read the mapped attributes into a new bookmark.
    fn start_bookmark(&mut self, attributes: &[Attribute]) {
        self.state = ParseState::InBookmark;

        let mut href = None;
        let mut add_date = None;
        let mut last_modified = None;
        let mut icon = None;
        let mut icon_uri = None;
        let mut tags = None;
        for attribute in attributes {
            let Ok(known) = AnchorAttribute::from_str(&attribute.name) else {
                continue;
            };
            let value = Some(attribute.value.as_str());
            match known {
                AnchorAttribute::Href => href = value,
                AnchorAttribute::AddDate => add_date = value,
                AnchorAttribute::LastModified => last_modified = value,
                AnchorAttribute::Icon => icon = value,
                AnchorAttribute::IconUri => icon_uri = value,
                AnchorAttribute::Tags => tags = value,
            }
        }

        let Some(url) = href.filter(|url| !url.is_empty()) else {
            self.parse_warning("anchor without HREF skipped");
            self.current = None;
            self.description_target = None;
            return;
        };

        let created_at = add_date.map(Timestamp::parse_lenient);
        let updated_at = last_modified.map(Timestamp::parse_lenient).or(created_at);
        self.current = Some(Bookmark {
            url: url.to_string(),
            name: String::new(),
            created_at,
            updated_at,
            icon: icon.or(icon_uri).map(str::to_string),
            folders: self.folders.clone(),
            tags: tags.map(split_tags),
            description: None,
        });
    }

    /// `</DL>`: leave the innermost folder.
    fn close_folder(&mut self) {
        if self.open_lists == 0 {
            self.parse_warning("unmatched </DL> ignored");
        } else {
            self.open_lists -= 1;
        }
        // Lists without a heading (the root) have nothing to pop.
        let _ = self.folders.pop();
    }

    /// Close whatever element is open and store its text.
    fn finalize(&mut self) {
        let text = std::mem::take(&mut self.text);
        let text = text.trim();

        match std::mem::take(&mut self.state) {
            ParseState::Idle => {}
            ParseState::InBookmark => {
                if let Some(mut bookmark) = self.current.take() {
                    text.clone_into(&mut bookmark.name);
                    self.description_target = Some(self.bookmarks.len());
                    self.bookmarks.push(bookmark);
                }
            }
            ParseState::InFolderHeading => {
                if text.is_empty() {
                    self.parse_warning("folder heading without a name");
                }
                self.folders.push(text.to_string());
            }
            ParseState::InDescription => {
                if !text.is_empty()
                    && let Some(bookmark) = self
                        .description_target
                        .and_then(|index| self.bookmarks.get_mut(index))
                {
                    bookmark.description = Some(text.to_string());
                }
            }
        }
    }

    /// Record an absorbed anomaly and report it once.
    fn parse_warning(&mut self, message: &str) {
        warn_once("Bookmark Parser", message);
        self.issues.push(ParseIssue {
            message: message.to_string(),
            token_index: self.token_index,
        });
    }
}

/// `TAGS="a, b,c"` to `["a", "b", "c"]`.
///
/// Inner empty entries are kept (`"a,,b"` is `["a", "", "b"]`); trailing
/// empty entries are dropped, so `""` is an empty list.
fn split_tags(value: &str) -> Vec<String> {
    let mut parts: Vec<&str> = value.split(',').collect();
    while parts.last().is_some_and(|part| part.is_empty()) {
        let _ = parts.pop();
    }
    parts.into_iter().map(|tag| tag.trim().to_string()).collect()
}

/// Parse a Netscape bookmark file, keeping every bookmark.
#[must_use]
pub fn parse(input: &str) -> Vec<Bookmark> {
    parse_with_options(input, ParseOptions::default())
}

/// Parse a Netscape bookmark file, then apply `options`.
#[must_use]
pub fn parse_with_options(input: &str, options: ParseOptions) -> Vec<Bookmark> {
    let bookmarks = BookmarkParser::new(tokenize(input)).run();
    options.scheme_filter.apply(bookmarks)
}
