//! Browser-export-shaped samples shared by the integration tests.

/// Chrome: folder attributes on `<H3>`, a data-URI `ICON`, a bookmarklet.
pub const CHROME_EXPORT: &str = r#"<!DOCTYPE NETSCAPE-Bookmark-file-1>
<!-- This is an automatically generated file.
     It will be read and overwritten.
     DO NOT EDIT! -->
<META HTTP-EQUIV="Content-Type" CONTENT="text/html; charset=UTF-8">
<TITLE>Bookmarks</TITLE>
<H1>Bookmarks</H1>
<DL><p>
    <DT><H3 ADD_DATE="1444432368" LAST_MODIFIED="1444432441" PERSONAL_TOOLBAR_FOLDER="true">Bookmarks bar</H3>
    <DL><p>
        <DT><A HREF="https://www.rust-lang.org/" ADD_DATE="1444432395" ICON="data:image/png;base64,iVBORw0KGgo=">Rust</A>
        <DT><H3 ADD_DATE="1444432400" LAST_MODIFIED="1444432410">Docs</H3>
        <DL><p>
            <DT><A HREF="https://doc.rust-lang.org/std/" ADD_DATE="1444432401">std - Rust</A>
        </DL><p>
    </DL><p>
    <DT><A HREF="javascript:alert(1)" ADD_DATE="1444432500">Bookmarklet</A>
</DL><p>
"#;

/// Firefox: `ICON_URI` alongside `ICON`, `<HR>` separators, a folder
/// description, tags, references and a `place:` query.
pub const FIREFOX_EXPORT: &str = r#"<!DOCTYPE NETSCAPE-Bookmark-file-1>
<!-- This is an automatically generated file.
     It will be read and overwritten.
     DO NOT EDIT! -->
<META HTTP-EQUIV="Content-Type" CONTENT="text/html; charset=UTF-8">
<meta http-equiv="Content-Security-Policy"
      content="default-src 'self'; script-src 'none'; img-src data: *; object-src 'none'"></meta>
<TITLE>Bookmarks</TITLE>
<H1>Bookmarks Menu</H1>

<DL><p>
    <DT><H3 ADD_DATE="1444432300" LAST_MODIFIED="1444432310">Mozilla Firefox</H3>
    <DD>Links collected by the browser
    <DL><p>
        <DT><A HREF="https://www.mozilla.org/en-US/firefox/central/" ADD_DATE="1444432395" LAST_MODIFIED="1444432396" ICON_URI="https://www.mozilla.org/favicon.ico" ICON="data:image/png;base64,AAAA">Getting Started</A>
        <HR>
        <DT><A HREF="https://blog.example/post?id=1&amp;lang=en" ADD_DATE="1444432397" TAGS="rust, parsing" SHORTCUTURL="blog">Rock &amp; Roll &#39;Parsing&#39;</A>
        <DD>A post about parsers &lt;3
    </DL><p>
    <DT><A HREF="place:sort=8&amp;maxResults=10">Recent Tags</A>
</DL>
"#;

/// Delicious: no folders, `TAGS` on every bookmark, one of them empty.
pub const DELICIOUS_EXPORT: &str = r#"<!DOCTYPE NETSCAPE-Bookmark-file-1>
<META HTTP-EQUIV="Content-Type" CONTENT="text/html; charset=UTF-8">
<!-- This is an automatically generated file.
It will be read and overwritten.
Do Not Edit! -->
<TITLE>Bookmarks</TITLE>
<H1>Bookmarks</H1>
<DL><p><DT><A HREF="http://www.example.com/" ADD_DATE="1267473410" PRIVATE="0" TAGS="reference,web">Example</A>
<DD>An example site
<DT><A HREF="http://ruby-doc.org/" ADD_DATE="1267473420" PRIVATE="1" TAGS="">Ruby Docs</A>
</DL><p>
"#;
