//! Integration tests for the Netscape bookmark formatter.

use bookmark_netscape::{
    Bookmark, FormatError, FormatOptions, Timestamp, format, format_with_options, parse,
};

const HEADER: &str = "<!DOCTYPE NETSCAPE-Bookmark-file-1>
<!-- This is an automatically generated file.
     It will be read and overwritten.
     DO NOT EDIT! -->
<META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">
<TITLE>Bookmarks</TITLE>
<H1>Bookmarks</H1>
";

/// Helper to format and then parse back
fn assert_round_trips(bookmarks: &[Bookmark]) {
    let html = format(bookmarks).unwrap();
    assert_eq!(parse(&html), bookmarks, "Formatter produced:\n{html}");
}

fn numbered(n: usize, folders: &[&str]) -> Bookmark {
    Bookmark::new(format!("http://e.com/{n}"))
        .with_name(n.to_string())
        .with_folders(folders.iter().copied())
}

#[test]
fn test_doctype_is_first_line() {
    let html = format(&[]).unwrap();
    assert_eq!(html.lines().next(), Some("<!DOCTYPE NETSCAPE-Bookmark-file-1>"));
}

#[test]
fn test_empty_list_is_preamble_and_closed_root() {
    let html = format(&[]).unwrap();
    assert_eq!(html, format!("{HEADER}<DL><p>\n</DL>\n"));
}

#[test]
fn test_attributes_in_fixed_order() {
    let bookmark = Bookmark::new("http://example.com/")
        .with_name("Example")
        .with_icon("http://example.com/favicon.ico")
        .with_tags(["one", "two"])
        .with_updated_at(Timestamp::from_secs(20))
        .with_created_at(Timestamp::from_secs(10))
        .with_description("About");
    let html = format(&[bookmark]).unwrap();
    assert_eq!(
        html,
        format!(
            "{HEADER}<DL><p>
    <DT><A HREF=\"http://example.com/\" ADD_DATE=\"10\" LAST_MODIFIED=\"20\" TAGS=\"one,two\" ICON=\"http://example.com/favicon.ico\">Example</A>
    <DD>About
</DL>
"
        )
    );
}

#[test]
fn test_data_icon_is_written_as_icon_uri() {
    let bookmark = Bookmark::new("http://example.com/").with_icon("data:image/png;base64,iVBOR=");
    let html = format(&[bookmark]).unwrap();
    assert!(html.contains(r#"ICON_URI="data:image/png;base64,iVBOR=""#));
    assert!(!html.contains(" ICON=\""));
}

#[test]
fn test_text_and_attributes_are_escaped() {
    let bookmark = Bookmark::new("http://e.com/?a=1&b=\"2\"")
        .with_name("<Tom & Jerry's>")
        .with_folders(["R&D"]);
    let html = format(&[bookmark]).unwrap();
    assert!(html.contains(r#"HREF="http://e.com/?a=1&amp;b=&quot;2&quot;""#));
    assert!(html.contains(">&lt;Tom &amp; Jerry&apos;s&gt;</A>"));
    assert!(html.contains("<H3>R&amp;D</H3>"));
}

#[test]
fn test_empty_description_is_not_written() {
    let mut bookmark = Bookmark::new("http://example.com/");
    bookmark.description = Some(String::new());
    let html = format(&[bookmark]).unwrap();
    assert!(!html.contains("<DD>"));
}

#[test]
fn test_folder_grouping_only_touches_diverging_suffix() {
    let bookmarks = [
        numbered(1, &["F1", "F2"]),
        numbered(2, &["F1"]),
        numbered(3, &["F2"]),
        numbered(4, &["F2", "F3"]),
    ];
    let html = format(&bookmarks).unwrap();
    assert_eq!(
        html,
        format!(
            "{HEADER}<DL><p>
    <DT><H3>F1</H3>
    <DL><p>
        <DT><H3>F2</H3>
        <DL><p>
            <DT><A HREF=\"http://e.com/1\">1</A>
        </DL><p>
        <DT><A HREF=\"http://e.com/2\">2</A>
    </DL><p>
    <DT><H3>F2</H3>
    <DL><p>
        <DT><A HREF=\"http://e.com/3\">3</A>
        <DT><H3>F3</H3>
        <DL><p>
            <DT><A HREF=\"http://e.com/4\">4</A>
        </DL><p>
    </DL><p>
</DL>
"
        )
    );
    assert_round_trips(&bookmarks);
}

#[test]
fn test_no_common_prefix_closes_all_then_opens_all() {
    let bookmarks = [numbered(1, &["A", "B"]), numbered(2, &["C", "D"])];
    let html = format_with_options(&bookmarks, FormatOptions::default().with_indent(0)).unwrap();
    assert_eq!(
        html,
        format!(
            "{HEADER}<DL><p>
<DT><H3>A</H3>
<DL><p>
<DT><H3>B</H3>
<DL><p>
<DT><A HREF=\"http://e.com/1\">1</A>
</DL><p>
</DL><p>
<DT><H3>C</H3>
<DL><p>
<DT><H3>D</H3>
<DL><p>
<DT><A HREF=\"http://e.com/2\">2</A>
</DL><p>
</DL><p>
</DL>
"
        )
    );
    assert_round_trips(&bookmarks);
}

#[test]
fn test_same_name_at_different_depth_is_reopened() {
    // ["A"] then ["B", "A"]: "A" matches by name but not by position
    let bookmarks = [numbered(1, &["A"]), numbered(2, &["B", "A"])];
    let html = format(&bookmarks).unwrap();
    assert_eq!(html.matches("<H3>A</H3>").count(), 2);
    assert_round_trips(&bookmarks);
}

#[test]
fn test_returning_to_root_closes_folders() {
    let bookmarks = [numbered(1, &["A", "B"]), numbered(2, &[])];
    let html = format(&bookmarks).unwrap();
    assert_eq!(html.matches("</DL><p>").count(), 2);
    assert_round_trips(&bookmarks);
}

#[test]
fn test_indent_width() {
    let bookmarks = [numbered(1, &["A"])];
    let html = format_with_options(&bookmarks, FormatOptions::default().with_indent(2)).unwrap();
    assert!(html.contains("\n  <DT><H3>A</H3>\n  <DL><p>\n    <DT><A "));

    let flat = format_with_options(&bookmarks, FormatOptions::default().with_indent(0)).unwrap();
    assert!(flat.lines().all(|line| !line.starts_with(' ') || line.starts_with("     ")));
    assert_eq!(parse(&flat), parse(&html));
}

#[test]
fn test_empty_url_is_rejected() {
    let bookmarks = [numbered(1, &[]), Bookmark::new("")];
    assert_eq!(format(&bookmarks), Err(FormatError::EmptyUrl { index: 1 }));
}

#[test]
fn test_empty_folder_name_is_rejected() {
    let bookmarks = [numbered(1, &["Ok", ""])];
    let err = format(&bookmarks).unwrap_err();
    assert_eq!(err, FormatError::EmptyFolderName { index: 0, depth: 1 });
    assert_eq!(
        err.to_string(),
        "bookmark 0 has an empty folder name at depth 1"
    );
}

#[test]
fn test_round_trips_url_only() {
    assert_round_trips(&[Bookmark::new("http://example.com")]);
}

#[test]
fn test_round_trips_name() {
    assert_round_trips(&[Bookmark::new("http://example.com").with_name("Example")]);
}

#[test]
fn test_round_trips_timestamps() {
    assert_round_trips(&[Bookmark::new("http://example.com")
        .with_created_at(Timestamp::from_secs(1_444_432_395))
        .with_updated_at(Timestamp::from_secs(1_444_432_396))]);
}

#[test]
fn test_round_trips_icon_url() {
    assert_round_trips(&[
        Bookmark::new("http://example.com").with_icon("http://example.com/icon.ico")
    ]);
}

#[test]
fn test_round_trips_icon_data_uri() {
    assert_round_trips(&[
        Bookmark::new("http://example.com").with_icon("data:image/png;base64,iVBOR=")
    ]);
}

#[test]
fn test_round_trips_tags() {
    assert_round_trips(&[Bookmark::new("http://example.com").with_tags(["one", "two"])]);
    assert_round_trips(&[Bookmark::new("http://example.com").with_tags(Vec::<String>::new())]);
}

#[test]
fn test_round_trips_empty_inner_tag() {
    let bookmarks = [Bookmark::new("http://e.com/").with_tags(["a", "", "b"])];
    let html = format(&bookmarks).unwrap();
    assert!(html.contains(r#"TAGS="a,,b""#));
    assert_round_trips(&bookmarks);
}

#[test]
fn test_round_trips_description() {
    assert_round_trips(&[Bookmark::new("http://example.com").with_description("DESCRIPTION")]);
}

#[test]
fn test_round_trips_folders() {
    assert_round_trips(&[Bookmark::new("http://example.com").with_folders(["Folder 1"])]);
    assert_round_trips(&[
        Bookmark::new("http://example.com").with_folders(["Folder 1", "Folder 2"])
    ]);
}

#[test]
fn test_round_trips_special_characters() {
    assert_round_trips(&[Bookmark::new("http://e.com/?q=a&b='c'<d>")
        .with_name("Rock & Roll \"Live\" <2024>")
        .with_folders(["Tom & Jerry's", "<Ünïcödé> 書籤"])
        .with_tags(["a&b", "c<d"])
        .with_description("It's <b>bold</b> & \"quoted\"")]);
}
