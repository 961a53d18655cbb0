//! Line preprocessing for PSL files.
//!
//! Every input line is trimmed of line-ending noise and surrounding
//! whitespace before any other check looks at it, then classified as
//! blank, comment or rule.

use nom::{IResult, bytes::complete::tag};

/// A single line of PSL input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Line number (1-based).
    pub number: usize,
    /// The line without its trailing `\r`/`\n` characters.
    pub raw: &'a str,
    /// The line with surrounding whitespace removed.
    pub text: &'a str,
}

/// What a preprocessed line contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Nothing but whitespace.
    Blank,
    /// A `//` comment, possibly a section marker. Holds the whole line.
    Comment(&'a str),
    /// Anything else is a suffix rule.
    Rule(&'a str),
}

impl<'a> Line<'a> {
    /// Preprocesses a raw input line.
    pub fn new(number: usize, raw: &'a str) -> Self {
        let raw = raw.trim_end_matches(['\r', '\n']);
        Self {
            number,
            raw,
            text: raw.trim_matches(is_line_space),
        }
    }

    /// Returns true if trimming removed leading or trailing whitespace.
    pub fn has_surrounding_whitespace(&self) -> bool {
        self.raw != self.text
    }

    /// Classifies the trimmed line.
    pub fn kind(&self) -> LineKind<'a> {
        classify(self.text)
    }
}

/// Classifies an already trimmed line.
pub fn classify(text: &str) -> LineKind<'_> {
    if text.is_empty() {
        LineKind::Blank
    } else if comment_marker(text).is_ok() {
        LineKind::Comment(text)
    } else {
        LineKind::Rule(text)
    }
}

/// Characters trimmed from both ends of a line.
///
/// Unicode whitespace plus the ASCII separators `\x1c` to `\x1f`, which
/// PSL tooling has always treated as whitespace too.
pub fn is_line_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Splits text into lines at `\n`, `\r\n` and lone `\r`.
///
/// A final line ending does not start another line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split_terminator('\n').flat_map(split_carriage_returns)
}

/// Splits a chunk that contains no `\n` at lone carriage returns.
///
/// A single trailing `\r` is the first half of a `\r\n` ending and does
/// not start another line.
pub fn split_carriage_returns(chunk: &str) -> std::str::Split<'_, char> {
    chunk.strip_suffix('\r').unwrap_or(chunk).split('\r')
}

fn comment_marker(input: &str) -> IResult<&str, &str> {
    tag("//")(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_line_endings() {
        let line = Line::new(1, "example.com\r\n");
        assert_eq!(line.raw, "example.com");
        assert_eq!(line.text, "example.com");
        assert!(!line.has_surrounding_whitespace());
    }

    #[test]
    fn detects_leading_whitespace() {
        let line = Line::new(3, " foo.bar");
        assert!(line.has_surrounding_whitespace());
        assert_eq!(line.text, "foo.bar");
        assert_eq!(line.kind(), LineKind::Rule("foo.bar"));
    }

    #[test]
    fn detects_trailing_tab() {
        let line = Line::new(3, "foo.bar\t\n");
        assert!(line.has_surrounding_whitespace());
        assert_eq!(line.raw, "foo.bar\t");
    }

    #[test]
    fn whitespace_only_is_blank() {
        let line = Line::new(1, "   \r\n");
        assert_eq!(line.kind(), LineKind::Blank);
        assert!(line.has_surrounding_whitespace());
    }

    #[test]
    fn empty_is_blank_without_warning() {
        let line = Line::new(1, "\n");
        assert_eq!(line.kind(), LineKind::Blank);
        assert!(!line.has_surrounding_whitespace());
    }

    #[test]
    fn comment_lines() {
        assert_eq!(
            classify("// ===BEGIN ICANN DOMAINS==="),
            LineKind::Comment("// ===BEGIN ICANN DOMAINS===")
        );
        assert_eq!(classify("//no space"), LineKind::Comment("//no space"));
    }

    #[test]
    fn information_separators_are_trimmed() {
        let line = Line::new(5, "\x1ccom\x1f");
        assert!(line.has_surrounding_whitespace());
        assert_eq!(line.text, "com");
        assert!(is_line_space('\u{3000}'));
        assert!(!is_line_space('\x1b'));
    }

    #[test]
    fn splits_every_line_ending() {
        let lines: Vec<&str> = split_lines("a\nb\r\nc\rd\n\ne").collect();
        assert_eq!(lines, vec!["a", "b", "c", "d", "", "e"]);
    }

    #[test]
    fn final_line_ending_adds_no_line() {
        assert_eq!(split_lines("a\n").collect::<Vec<_>>(), vec!["a"]);
        assert_eq!(split_lines("a\r").collect::<Vec<_>>(), vec!["a"]);
        assert_eq!(split_lines("a\r\n").collect::<Vec<_>>(), vec!["a"]);
        assert_eq!(split_lines("").count(), 0);
        assert_eq!(split_lines("\n").collect::<Vec<_>>(), vec![""]);
    }

    #[test]
    fn carriage_return_chunks() {
        assert_eq!(split_carriage_returns("").collect::<Vec<_>>(), vec![""]);
        assert_eq!(split_carriage_returns("a\r\r").collect::<Vec<_>>(), vec!["a", ""]);
    }

    #[test]
    fn single_slash_is_a_rule() {
        assert_eq!(classify("/foo"), LineKind::Rule("/foo"));
    }
}
