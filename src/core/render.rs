//! Line renderer
//!
//! Re-tokenizes the opening lines of the content and writes them with each
//! word colored by frequency. Punctuation collapses to a single space while
//! pure whitespace is kept verbatim.
//!
//! Tokenization here is independent of the counter's word pattern: a line is
//! split on runs of non-word characters and both sides of every split are
//! kept.

use once_cell::sync::Lazy;
use regex::Regex;
use std::io::{self, Write};

use crate::core::colorizer::color_word;
use crate::core::model::WordCounts;

/// Maximum number of lines rendered
pub const MAX_LINES: usize = 15;

/// A maximal run of non-word characters
pub static NON_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]+").expect("Invalid NON_WORD_RE regex"));

/// One piece of a split line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Run of word characters
    Word(&'a str),
    /// Run of non-word characters between words
    Gap(&'a str),
}

/// Split a line into alternating word and gap tokens, in order.
///
/// Concatenating the tokens gives back the line.
pub fn tokenize_line(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for m in NON_WORD_RE.find_iter(line) {
        if m.start() > last {
            tokens.push(Token::Word(&line[last..m.start()]));
        }
        tokens.push(Token::Gap(m.as_str()));
        last = m.end();
    }

    if last < line.len() {
        tokens.push(Token::Word(&line[last..]));
    }

    tokens
}

/// The lines that get rendered: at most `MAX_LINES` `\n`-separated segments.
///
/// Empty content has no lines.
pub fn leading_lines(content: &str) -> impl Iterator<Item = &str> {
    let take = if content.is_empty() { 0 } else { MAX_LINES };
    content.split('\n').take(take)
}

/// Characters a gap may hold and still pass through untouched: Unicode
/// `White_Space` minus U+0085 (NEL), plus U+FEFF so a leading BOM survives.
fn is_gap_whitespace(c: char) -> bool {
    match c {
        '\u{85}' => false,
        '\u{FEFF}' => true,
        _ => c.is_whitespace(),
    }
}

fn render_token(token: Token<'_>, word_counts: &WordCounts, colorize: bool, out: &mut String) {
    match token {
        Token::Gap(gap) if gap.chars().all(is_gap_whitespace) => out.push_str(gap),
        Token::Gap(_) => out.push(' '),
        Token::Word(word) => {
            if colorize {
                let count = word_counts
                    .get(&word.to_ascii_lowercase())
                    .copied()
                    .unwrap_or(0);
                out.push_str(&color_word(word, count).to_string());
            } else {
                out.push_str(word);
            }
        }
    }
}

/// Render a single line
pub fn render_line(line: &str, word_counts: &WordCounts, colorize: bool) -> String {
    let mut out = String::with_capacity(line.len());
    for token in tokenize_line(line) {
        render_token(token, word_counts, colorize, &mut out);
    }
    out
}

/// Write the rendered opening lines, one per line, returning how many were written
pub fn write_colored_lines<W: Write>(
    mut writer: W,
    content: &str,
    word_counts: &WordCounts,
    colorize: bool,
) -> io::Result<usize> {
    let mut written = 0;
    for line in leading_lines(content) {
        writeln!(writer, "{}", render_line(line, word_counts, colorize))?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}

/// Print the rendered opening lines to stdout
pub fn print_colored_lines(content: &str, word_counts: &WordCounts) -> io::Result<()> {
    let stdout = io::stdout();
    write_colored_lines(stdout.lock(), content, word_counts, true).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::counter::get_word_counts;

    fn render_plain(content: &str) -> String {
        let counts = get_word_counts(content);
        let mut buf = Vec::new();
        write_colored_lines(&mut buf, content, &counts, false).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_tokenize_line() {
        assert_eq!(
            tokenize_line("Hello world. Hello!"),
            vec![
                Token::Word("Hello"),
                Token::Gap(" "),
                Token::Word("world"),
                Token::Gap(". "),
                Token::Word("Hello"),
                Token::Gap("!"),
            ]
        );
        assert!(tokenize_line("").is_empty());
        assert_eq!(tokenize_line("  -x"), vec![Token::Gap("  -"), Token::Word("x")]);
    }

    #[test]
    fn test_punctuation_collapses() {
        let counts = get_word_counts("Hello world. Hello!");
        assert_eq!(render_line("Hello world. Hello!", &counts, false), "Hello world Hello ");
    }

    #[test]
    fn test_whitespace_preserved() {
        let counts = WordCounts::new();
        assert_eq!(render_line("   ", &counts, false), "   ");
        assert_eq!(render_line("\tindented  twice", &counts, false), "\tindented  twice");
        assert_eq!(render_line("a\r", &counts, false), "a\r");
    }

    #[test]
    fn test_byte_order_mark_is_whitespace() {
        let counts = WordCounts::new();
        assert_eq!(render_line("\u{FEFF}When in", &counts, false), "\u{FEFF}When in");
    }

    #[test]
    fn test_next_line_char_collapses() {
        let counts = WordCounts::new();
        assert_eq!(render_line("a\u{85}b", &counts, false), "a b");
    }

    #[test]
    fn test_is_gap_whitespace() {
        assert!(is_gap_whitespace(' '));
        assert!(is_gap_whitespace('\t'));
        assert!(is_gap_whitespace('\u{A0}'));
        assert!(is_gap_whitespace('\u{3000}'));
        assert!(is_gap_whitespace('\u{FEFF}'));
        assert!(!is_gap_whitespace('\u{85}'));
        assert!(!is_gap_whitespace('-'));
    }

    #[test]
    fn test_non_ascii_letters_collapse() {
        let counts = WordCounts::new();
        assert_eq!(render_line("café", &counts, false), "caf ");
    }

    #[test]
    fn test_render_colored_words() {
        colored::control::set_override(true);

        let counts = get_word_counts("Hello world. Hello!");
        assert_eq!(
            render_line("Hello world. Hello!", &counts, true),
            "\x1b[32mHello\x1b[0m \x1b[34mworld\x1b[0m \x1b[32mHello\x1b[0m "
        );
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        colored::control::set_override(true);

        let mut counts = WordCounts::new();
        counts.insert("people".to_string(), 1);
        assert_eq!(render_line("PEOPLE", &counts, true), "\x1b[34mPEOPLE\x1b[0m");
        assert_eq!(render_line("unknown", &counts, true), "\x1b[31munknown\x1b[0m");
    }

    #[test]
    fn test_at_most_fifteen_lines() {
        let content = (1..=20)
            .map(|i| format!("line {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let output = render_plain(&content);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), MAX_LINES);
        assert_eq!(lines[0], "line 1");
        assert_eq!(lines[14], "line 15");
        assert!(!output.contains("line 16"));
    }

    #[test]
    fn test_fewer_lines_than_limit() {
        let mut buf = Vec::new();
        let counts = get_word_counts("a\nb\nc");
        let written = write_colored_lines(&mut buf, "a\nb\nc", &counts, false).unwrap();
        assert_eq!(written, 3);
        assert_eq!(String::from_utf8(buf).unwrap(), "a\nb\nc\n");
    }

    #[test]
    fn test_trailing_newline_gives_empty_line() {
        assert_eq!(render_plain("a\nb\n"), "a\nb\n\n");
    }

    #[test]
    fn test_empty_content_renders_nothing() {
        let mut buf = Vec::new();
        let written = write_colored_lines(&mut buf, "", &WordCounts::new(), false).unwrap();
        assert_eq!(written, 0);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_whitespace_only_content() {
        assert!(get_word_counts("   ").is_empty());
        assert_eq!(render_plain("   "), "   \n");
    }
}
