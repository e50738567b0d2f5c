use std::fmt;

/// An attribute on a start or end tag token.
///
/// Names are ASCII-lowercased by the tokenizer; values have character
/// references already decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Lowercased attribute name, e.g. `add_date`.
    pub name: String,
    /// Decoded attribute value. Empty for valueless attributes.
    pub value: String,
}

impl Attribute {
    /// Create a new attribute with the given name and value.
    #[must_use]
    pub const fn new(name: String, value: String) -> Self {
        Self { name, value }
    }
}

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// "The output of the tokenization step is a series of zero or more of the
/// following tokens: DOCTYPE, start tag, end tag, comment, character,
/// end-of-file."
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `<!DOCTYPE NETSCAPE-Bookmark-file-1>`. Public and system identifiers
    /// are skipped.
    Doctype {
        /// Lowercased DOCTYPE name, if one was given.
        name: Option<String>,
    },

    /// A start tag such as `<A HREF="...">`.
    StartTag {
        /// Lowercased tag name.
        name: String,
        /// Whether the tag ended in `/>`.
        self_closing: bool,
        /// Attributes in source order, duplicates removed.
        attributes: Vec<Attribute>,
    },

    /// An end tag such as `</DL>`. Attributes on end tags are dropped.
    EndTag {
        /// Lowercased tag name.
        name: String,
    },

    /// `<!-- ... -->`, including bogus comments like `<?xml ...>`.
    Comment {
        /// Text between the delimiters.
        data: String,
    },

    /// A single character of text.
    Character {
        /// The decoded character.
        data: char,
    },

    /// End-of-file token signals the end of input.
    EndOfFile,
}

impl Token {
    /// A DOCTYPE token with its name marked as missing.
    #[must_use]
    pub const fn new_doctype() -> Self {
        Self::Doctype { name: None }
    }

    /// A start tag token with an empty name, unset self-closing flag and no
    /// attributes.
    #[must_use]
    pub const fn new_start_tag() -> Self {
        Self::StartTag {
            name: String::new(),
            self_closing: false,
            attributes: Vec::new(),
        }
    }

    /// An end tag token with an empty name.
    #[must_use]
    pub const fn new_end_tag() -> Self {
        Self::EndTag {
            name: String::new(),
        }
    }

    /// A comment token with empty data.
    #[must_use]
    pub const fn new_comment() -> Self {
        Self::Comment {
            data: String::new(),
        }
    }

    /// Returns true if this is an end-of-file token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::EndOfFile)
    }

    /// Returns the value of the named attribute on a start tag.
    ///
    /// `name` must be lowercase.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        match self {
            Self::StartTag { attributes, .. } => attributes
                .iter()
                .find(|attr| attr.name == name)
                .map(|attr| attr.value.as_str()),
            _ => None,
        }
    }

    // Mutation helpers for the tokenizer. Each is a no-op on a token of the
    // wrong kind, which can only happen through a tokenizer bug.

    pub(super) fn append_to_doctype_name(&mut self, c: char) {
        if let Self::Doctype { name } = self {
            name.get_or_insert_with(String::new).push(c);
        }
    }

    pub(super) fn append_to_tag_name(&mut self, c: char) {
        if let Self::StartTag { name, .. } | Self::EndTag { name } = self {
            name.push(c);
        }
    }

    pub(super) fn set_self_closing(&mut self) {
        if let Self::StartTag { self_closing, .. } = self {
            *self_closing = true;
        }
    }

    pub(super) fn append_to_comment(&mut self, c: char) {
        if let Self::Comment { data } = self {
            data.push(c);
        }
    }

    pub(super) fn start_new_attribute(&mut self) {
        if let Self::StartTag { attributes, .. } = self {
            attributes.push(Attribute::new(String::new(), String::new()));
        }
    }

    pub(super) fn append_to_current_attribute_name(&mut self, c: char) {
        if let Self::StartTag { attributes, .. } = self
            && let Some(attr) = attributes.last_mut()
        {
            attr.name.push(c);
        }
    }

    pub(super) fn append_to_current_attribute_value(&mut self, c: char) {
        if let Self::StartTag { attributes, .. } = self
            && let Some(attr) = attributes.last_mut()
        {
            attr.value.push(c);
        }
    }

    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    ///
    /// "if there is already an attribute on the token with the exact same
    /// name, then this is a duplicate-attribute parse error and the new
    /// attribute must be removed from the token."
    ///
    /// Applied once when the tag is emitted so the value of a dropped
    /// attribute never lands on its predecessor. Returns true if anything was
    /// removed.
    pub(super) fn remove_duplicate_attributes(&mut self) -> bool {
        let Self::StartTag { attributes, .. } = self else {
            return false;
        };
        let before = attributes.len();
        let mut seen: Vec<String> = Vec::with_capacity(before);
        attributes.retain(|attr| {
            if seen.contains(&attr.name) {
                false
            } else {
                seen.push(attr.name.clone());
                true
            }
        });
        attributes.len() != before
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Doctype { name } => {
                write!(f, "DOCTYPE")?;
                if let Some(n) = name {
                    write!(f, " {n}")?;
                }
                Ok(())
            }
            Self::StartTag {
                name,
                self_closing,
                attributes,
            } => {
                write!(f, "<{name}")?;
                for attr in attributes {
                    write!(f, " {}=\"{}\"", attr.name, attr.value)?;
                }
                if *self_closing {
                    write!(f, " /")?;
                }
                write!(f, ">")
            }
            Self::EndTag { name } => write!(f, "</{name}>"),
            Self::Comment { data } => write!(f, "<!--{data}-->"),
            Self::Character { data } => {
                // Show whitespace characters explicitly
                match data {
                    '\n' => write!(f, "Character(\\n)"),
                    '\t' => write!(f, "Character(\\t)"),
                    ' ' => write!(f, "Character(SPACE)"),
                    c => write!(f, "Character({c})"),
                }
            }
            Self::EndOfFile => write!(f, "EOF"),
        }
    }
}
