use strum_macros::{EnumString, IntoStaticStr};

/// The attributes of `<A>` that map onto [`Bookmark`](crate::Bookmark)
/// fields.
///
/// Parsing is ASCII case-insensitive (`href`, `HREF` and `Href` are the
/// same attribute); the canonical uppercase spelling is what the formatter
/// writes. Any other attribute is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
pub enum AnchorAttribute {
    /// The bookmark URL.
    #[strum(serialize = "HREF")]
    Href,
    /// Creation time in epoch seconds.
    #[strum(serialize = "ADD_DATE")]
    AddDate,
    /// Modification time in epoch seconds.
    #[strum(serialize = "LAST_MODIFIED")]
    LastModified,
    /// Favicon, usually a `data:` URI in Firefox exports.
    #[strum(serialize = "ICON")]
    Icon,
    /// Favicon URL.
    #[strum(serialize = "ICON_URI")]
    IconUri,
    /// Comma-separated tags (Delicious, Pinboard).
    #[strum(serialize = "TAGS")]
    Tags,
}

impl AnchorAttribute {
    /// The uppercase name written in markup.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }
}
