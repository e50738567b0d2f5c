use serde::{Deserialize, Serialize};

use crate::timestamp::Timestamp;

/// A single bookmark and the folder path it lives under.
///
/// Equality compares every field, including the order of `folders` and
/// `tags`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    /// The anchor target. Never empty for a parsed bookmark.
    pub url: String,

    /// Display text of the anchor.
    #[serde(default)]
    pub name: String,

    /// `ADD_DATE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,

    /// `LAST_MODIFIED`, falling back to `ADD_DATE` on parse.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,

    /// A favicon, either a remote URL or a `data:` URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Folder names from the root down. Empty at top level.
    #[serde(default)]
    pub folders: Vec<String>,

    /// Comma-separated `TAGS`, trimmed. `None` when the attribute is
    /// absent, which is distinct from an empty list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Text of the `<DD>` following the anchor. Never blank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Bookmark {
    /// A bookmark with the given URL, an empty name, no folders and every
    /// optional field absent.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: String::new(),
            created_at: None,
            updated_at: None,
            icon: None,
            folders: Vec::new(),
            tags: None,
            description: None,
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the creation time.
    #[must_use]
    pub const fn with_created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Set the modification time.
    #[must_use]
    pub const fn with_updated_at(mut self, updated_at: Timestamp) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// Set the icon.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the folder path, root first.
    #[must_use]
    pub fn with_folders<I, S>(mut self, folders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.folders = folders.into_iter().map(Into::into).collect();
        self
    }

    /// Set the tags.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Set the description. Blank text leaves it absent.
    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        let description = description.trim();
        self.description = (!description.is_empty()).then(|| description.to_string());
        self
    }

    /// Whether the URL uses the given scheme, compared ASCII
    /// case-insensitively.
    #[must_use]
    pub fn has_scheme(&self, scheme: &str) -> bool {
        self.url
            .split_once(':')
            .is_some_and(|(found, _)| found.eq_ignore_ascii_case(scheme))
    }
}
