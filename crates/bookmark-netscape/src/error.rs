use thiserror::Error;

/// A bookmark the formatter refuses to write.
///
/// Both cases would produce markup that parses back to something else.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The bookmark has an empty URL.
    #[error("bookmark {index} has an empty url")]
    EmptyUrl {
        /// Position of the bookmark in the input slice.
        index: usize,
    },

    /// One of the bookmark's folder names is empty.
    #[error("bookmark {index} has an empty folder name at depth {depth}")]
    EmptyFolderName {
        /// Position of the bookmark in the input slice.
        index: usize,
        /// Position of the empty name in the bookmark's folder path.
        depth: usize,
    },
}
