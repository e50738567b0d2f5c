//! Writes bookmarks back out as a Netscape Bookmark File.
//!
//! The output mirrors what browsers export: `<DT>`, `<DD>` and `<p>` are
//! never closed and there is no `<html>` root. Consecutive bookmarks that
//! share a folder prefix share the enclosing `<DL>`s, so a list sorted by
//! folder comes out as a properly nested tree.

use crate::attribute::AnchorAttribute;
use crate::bookmark::Bookmark;
use crate::error::FormatError;
use crate::escape::encode;

/// Fixed preamble. Browsers check the DOCTYPE before importing.
const HEADER: &str = "<!DOCTYPE NETSCAPE-Bookmark-file-1>
<!-- This is an automatically generated file.
     It will be read and overwritten.
     DO NOT EDIT! -->
<META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">
<TITLE>Bookmarks</TITLE>
<H1>Bookmarks</H1>
";

/// Options for [`format_with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Spaces per nesting level. Zero writes every line flush left.
    pub indent: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { indent: 4 }
    }
}

impl FormatOptions {
    /// Set the indentation width.
    #[must_use]
    pub const fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

/// The position of the first folder where `open` and `target` differ.
///
/// If one path is a prefix of the other this is the length of the shorter
/// one; paths with no common prefix diverge at 0.
///
/// # Example
/// ```ignore
/// divergence_index(&["A", "B"], &["A", "C"])  // 1
/// divergence_index(&["A", "B"], &["A"])       // 1
/// divergence_index(&["A"], &["B"])            // 0
/// ```
#[must_use]
pub fn divergence_index<S: AsRef<str>, T: AsRef<str>>(open: &[S], target: &[T]) -> usize {
    open.iter()
        .zip(target)
        .position(|(a, b)| a.as_ref() != b.as_ref())
        .unwrap_or_else(|| open.len().min(target.len()))
}

/// Accumulates markup while tracking which folders are open.
struct Writer<'a> {
    out: String,
    indent: usize,
    /// Open folders, root first. Borrowed from the bookmarks being written.
    open: Vec<&'a str>,
}

impl<'a> Writer<'a> {
    fn new(options: FormatOptions) -> Self {
        let mut writer = Self {
            out: String::from(HEADER),
            indent: options.indent,
            open: Vec::new(),
        };
        writer.line(0, "<DL><p>");
        writer
    }

    /// Write one line at the given nesting depth.
    fn line(&mut self, depth: usize, text: &str) {
        for _ in 0..depth * self.indent {
            self.out.push(' ');
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    /// Close and open folders so exactly `target` is open.
    fn adjust_folders(&mut self, target: &'a [String]) {
        let diverge = divergence_index(&self.open, target);
        while self.open.len() > diverge {
            self.close_folder();
        }
        for name in &target[diverge..] {
            self.open_folder(name);
        }
    }

    fn open_folder(&mut self, name: &'a str) {
        let depth = self.open.len() + 1;
        self.line(depth, &format!("<DT><H3>{}</H3>", encode(name)));
        self.line(depth, "<DL><p>");
        self.open.push(name);
    }

    fn close_folder(&mut self) {
        let depth = self.open.len();
        let _ = self.open.pop();
        self.line(depth, "</DL><p>");
    }

    fn write_bookmark(&mut self, bookmark: &Bookmark) {
        let mut anchor = String::from("<DT><A");
        let mut attribute = |name: AnchorAttribute, value: &str| {
            anchor.push(' ');
            anchor.push_str(name.name());
            anchor.push_str("=\"");
            anchor.push_str(&encode(value));
            anchor.push('"');
        };

        attribute(AnchorAttribute::Href, &bookmark.url);
        if let Some(created_at) = bookmark.created_at {
            attribute(AnchorAttribute::AddDate, &created_at.to_string());
        }
        if let Some(updated_at) = bookmark.updated_at {
            attribute(AnchorAttribute::LastModified, &updated_at.to_string());
        }
        if let Some(tags) = &bookmark.tags {
            attribute(AnchorAttribute::Tags, &tags.join(","));
        }
        if let Some(icon) = &bookmark.icon {
            let name = if icon.starts_with("data:") {
                AnchorAttribute::IconUri
            } else {
                AnchorAttribute::Icon
            };
            attribute(name, icon);
        }

        anchor.push('>');
        anchor.push_str(&encode(&bookmark.name));
        anchor.push_str("</A>");

        let depth = self.open.len() + 1;
        self.line(depth, &anchor);
        if let Some(description) = bookmark.description.as_deref().filter(|d| !d.is_empty()) {
            self.line(depth, &format!("<DD>{}", encode(description)));
        }
    }

    /// Close every open folder and the root list.
    fn finish(mut self) -> String {
        while !self.open.is_empty() {
            self.close_folder();
        }
        self.line(0, "</DL>");
        self.out
    }
}

/// Reject bookmarks that would not survive a round trip.
fn validate(index: usize, bookmark: &Bookmark) -> Result<(), FormatError> {
    if bookmark.url.is_empty() {
        return Err(FormatError::EmptyUrl { index });
    }
    if let Some(depth) = bookmark.folders.iter().position(String::is_empty) {
        return Err(FormatError::EmptyFolderName { index, depth });
    }
    Ok(())
}

/// Format bookmarks as a Netscape Bookmark File with default options.
///
/// # Errors
///
/// Returns a [`FormatError`] naming the first bookmark with an empty URL or
/// an empty folder name.
pub fn format(bookmarks: &[Bookmark]) -> Result<String, FormatError> {
    format_with_options(bookmarks, FormatOptions::default())
}

/// Format bookmarks as a Netscape Bookmark File.
///
/// # Errors
///
/// Returns a [`FormatError`] naming the first bookmark with an empty URL or
/// an empty folder name. Nothing is written in that case.
pub fn format_with_options(
    bookmarks: &[Bookmark],
    options: FormatOptions,
) -> Result<String, FormatError> {
    let mut writer = Writer::new(options);
    for (index, bookmark) in bookmarks.iter().enumerate() {
        validate(index, bookmark)?;
        writer.adjust_folders(&bookmark.folders);
        writer.write_bookmark(bookmark);
    }
    Ok(writer.finish())
}
