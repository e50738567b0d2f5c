use strum_macros::Display;

use crate::bookmark::Bookmark;

/// Which bookmarks survive parsing, by URL scheme.
///
/// Browser exports include `javascript:` bookmarklets, `place:` smart
/// folders and `file:` links alongside web pages. Filtering runs after the
/// parser has produced its full list and never changes folder paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum SchemeFilter {
    /// Keep every bookmark.
    #[default]
    Any,
    /// Keep only `http:` and `https:` URLs, compared case-insensitively.
    HttpOnly,
}

impl SchemeFilter {
    /// Whether a bookmark with this URL is kept.
    #[must_use]
    pub fn accepts(self, bookmark: &Bookmark) -> bool {
        match self {
            Self::Any => true,
            Self::HttpOnly => bookmark.has_scheme("http") || bookmark.has_scheme("https"),
        }
    }

    /// Drop the bookmarks this filter rejects, keeping the rest in order.
    #[must_use]
    pub fn apply(self, mut bookmarks: Vec<Bookmark>) -> Vec<Bookmark> {
        bookmarks.retain(|bookmark| self.accepts(bookmark));
        bookmarks
    }
}
