//! Bookmarks CLI
//!
//! Inspect, convert and normalize Netscape bookmark files.
//!
//! - `bookmarks parse FILE`: list bookmarks by folder, or dump them as JSON
//! - `bookmarks format FILE`: JSON array of bookmarks to bookmark file
//! - `bookmarks normalize FILE`: parse and re-format a bookmark file

use std::fs;
use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use bookmark_common::warning::set_warnings_enabled;
use bookmark_markup::{MarkupTokenizer, Token};
use bookmark_netscape::{
    Bookmark, BookmarkParser, FormatOptions, ParseOptions, SchemeFilter, format_with_options,
    parse_with_options,
};
use clap::{Args, Parser, Subcommand};
use owo_colors::OwoColorize;

/// Bookmarks: a tolerant Netscape bookmark file parser and formatter
#[derive(Parser, Debug)]
#[command(name = "bookmarks")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r"EXAMPLES:
    # List the bookmarks in a browser export
    bookmarks parse bookmarks.html

    # Export web bookmarks as JSON
    bookmarks parse --http-only --json bookmarks.html > bookmarks.json

    # Show the token stream the parser sees
    bookmarks parse --tokens bookmarks.html

    # Write a bookmark file from JSON read on stdin
    cat bookmarks.json | bookmarks format -

    # Rewrite a messy export with two-space indentation
    bookmarks normalize --indent 2 bookmarks.html
")]
struct Cli {
    /// Do not print warnings about recovered input
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the bookmarks in a bookmark file
    Parse(ParseArgs),
    /// Write a JSON array of bookmarks as a bookmark file
    Format(FormatArgs),
    /// Parse a bookmark file and write it back out
    ///
    /// Fails if the file contains a folder with an empty name (`<H3></H3>`),
    /// since such a folder cannot be written back.
    Normalize(NormalizeArgs),
}

#[derive(Args, Debug)]
struct ParseArgs {
    /// Bookmark file to read, or - for stdin
    #[arg(value_name = "FILE|-")]
    path: String,

    /// Keep only http and https bookmarks
    #[arg(long)]
    http_only: bool,

    /// Print the bookmarks as JSON
    #[arg(long, conflicts_with = "tokens")]
    json: bool,

    /// Print the token stream instead of bookmarks
    #[arg(long)]
    tokens: bool,
}

#[derive(Args, Debug)]
struct FormatArgs {
    /// JSON file to read, or - for stdin
    #[arg(value_name = "FILE|-")]
    path: String,

    /// Spaces per nesting level
    #[arg(long, default_value = "4")]
    indent: usize,
}

#[derive(Args, Debug)]
struct NormalizeArgs {
    /// Bookmark file to read, or - for stdin
    #[arg(value_name = "FILE|-")]
    path: String,

    /// Keep only http and https bookmarks
    #[arg(long)]
    http_only: bool,

    /// Spaces per nesting level
    #[arg(long, default_value = "4")]
    indent: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.quiet {
        set_warnings_enabled(false);
    }

    match &cli.command {
        Command::Parse(args) => run_parse(args),
        Command::Format(args) => run_format(args),
        Command::Normalize(args) => run_normalize(args),
    }
}

/// Read a file, or stdin for `-`
fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut input = String::new();
        let _ = io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read standard input")?;
        Ok(input)
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))
    }
}

const fn scheme_filter(http_only: bool) -> SchemeFilter {
    if http_only {
        SchemeFilter::HttpOnly
    } else {
        SchemeFilter::Any
    }
}

fn run_parse(args: &ParseArgs) -> Result<()> {
    let input = read_input(&args.path)?;
    let mut tokenizer = MarkupTokenizer::new(&input);
    tokenizer.run();

    let tokenizer_issues: Vec<String> = tokenizer
        .issues()
        .iter()
        .map(|issue| format!("{} at byte {}", issue.kind, issue.position))
        .collect();
    let tokens = tokenizer.into_tokens();

    if args.tokens {
        print_tokens(&tokens);
        return Ok(());
    }

    let (bookmarks, parse_issues) = BookmarkParser::new(tokens).run_with_issues();
    let bookmarks = scheme_filter(args.http_only).apply(bookmarks);

    if args.json {
        let json =
            serde_json::to_string_pretty(&bookmarks).context("Failed to serialize bookmarks")?;
        println!("{json}");
        return Ok(());
    }

    print_bookmarks(&bookmarks);

    if !tokenizer_issues.is_empty() || !parse_issues.is_empty() {
        println!("\n=== Parse Issues ===");
        for issue in &tokenizer_issues {
            println!("  - {issue}");
        }
        for issue in &parse_issues {
            println!("  - {} at token {}", issue.message, issue.token_index);
        }
    }

    Ok(())
}

fn run_format(args: &FormatArgs) -> Result<()> {
    let input = read_input(&args.path)?;
    let bookmarks: Vec<Bookmark> = serde_json::from_str(&input)
        .with_context(|| format!("Failed to read bookmarks JSON from {}", args.path))?;
    write_markup(&bookmarks, args.indent)
}

fn run_normalize(args: &NormalizeArgs) -> Result<()> {
    let input = read_input(&args.path)?;
    let options = ParseOptions::default().with_scheme_filter(scheme_filter(args.http_only));
    let bookmarks = parse_with_options(&input, options);
    write_markup(&bookmarks, args.indent)
}

fn write_markup(bookmarks: &[Bookmark], indent: usize) -> Result<()> {
    let html = format_with_options(bookmarks, FormatOptions::default().with_indent(indent))
        .context("Cannot write these bookmarks as a bookmark file")?;
    io::stdout()
        .lock()
        .write_all(html.as_bytes())
        .context("Failed to write output")
}

/// Print tokens one per line, merging runs of characters into one text line
fn print_tokens(tokens: &[Token]) {
    let mut text = String::new();
    for token in tokens {
        if let Token::Character { data } = token {
            text.push(*data);
            continue;
        }
        flush_text(&mut text);
        println!("{}", token.to_string().cyan());
    }
    flush_text(&mut text);
}

fn flush_text(text: &mut String) {
    if !text.is_empty() {
        println!("Text({text:?})");
        text.clear();
    }
}

/// Print bookmarks grouped under a heading for each run of equal folder paths
fn print_bookmarks(bookmarks: &[Bookmark]) {
    let mut current: Option<&[String]> = None;
    for bookmark in bookmarks {
        if current != Some(bookmark.folders.as_slice()) {
            let path = if bookmark.folders.is_empty() {
                "(root)".to_string()
            } else {
                bookmark.folders.join(" / ")
            };
            println!("{}", path.bold().blue());
            current = Some(bookmark.folders.as_slice());
        }

        let name = if bookmark.name.is_empty() {
            "(untitled)"
        } else {
            bookmark.name.as_str()
        };
        println!("  {} {}", name.bold(), bookmark.url.dimmed());

        let mut details = Vec::new();
        if let Some(tags) = bookmark.tags.as_ref().filter(|tags| !tags.is_empty()) {
            details.push(format!("tags: {}", tags.join(", ")));
        }
        if let Some(created_at) = bookmark.created_at {
            details.push(format!("added: {created_at}"));
        }
        if let Some(updated_at) = bookmark.updated_at {
            details.push(format!("modified: {updated_at}"));
        }
        if !details.is_empty() {
            println!("    {}", details.join("  "));
        }
        if let Some(description) = &bookmark.description {
            println!("    {}", description.italic());
        }
    }

    println!("\n{} bookmarks", bookmarks.len());
}
