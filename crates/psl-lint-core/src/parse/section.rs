//! Section markers.
//!
//! A PSL file is split into an ICANN and a private section, each opened
//! and closed by an exact comment line such as
//! `// ===BEGIN ICANN DOMAINS===`.

use nom::{
    IResult, Parser,
    bytes::complete::tag,
    character::complete::anychar,
};
use std::fmt;

/// Opens the ICANN section.
pub const BEGIN_ICANN: &str = "// ===BEGIN ICANN DOMAINS===";
/// Closes the ICANN section.
pub const END_ICANN: &str = "// ===END ICANN DOMAINS===";
/// Opens the private section.
pub const BEGIN_PRIVATE: &str = "// ===BEGIN PRIVATE DOMAINS===";
/// Closes the private section.
pub const END_PRIVATE: &str = "// ===END PRIVATE DOMAINS===";

/// The administrative section a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    /// Outside of any section.
    #[default]
    None,
    /// Between the ICANN begin and end markers.
    Icann,
    /// Between the private begin and end markers.
    Private,
}

impl Section {
    /// Returns true for the ICANN and private sections.
    pub fn is_open(self) -> bool {
        self != Section::None
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::None => "none",
            Section::Icann => "ICANN",
            Section::Private => "PRIVATE",
        };
        f.write_str(name)
    }
}

/// A comment line that looks like a section boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `// ===BEGIN...`; `Section::None` when the section is unknown.
    Begin(Section),
    /// `// ===END...`; `Section::None` when the section is unknown.
    End(Section),
}

/// Recognizes section markers in a trimmed comment line.
///
/// Exact marker lines map to their section. Any other comment whose text
/// after `//` and one further character starts with `===BEGIN` or `===END`
/// is a marker for an unknown section. Plain comments return `None`.
pub fn parse_marker(comment: &str) -> Option<Marker> {
    match comment {
        BEGIN_ICANN => Some(Marker::Begin(Section::Icann)),
        BEGIN_PRIVATE => Some(Marker::Begin(Section::Private)),
        END_ICANN => Some(Marker::End(Section::Icann)),
        END_PRIVATE => Some(Marker::End(Section::Private)),
        _ if marker_keyword("===BEGIN", comment).is_ok() => Some(Marker::Begin(Section::None)),
        _ if marker_keyword("===END", comment).is_ok() => Some(Marker::End(Section::None)),
        _ => None,
    }
}

fn marker_keyword<'a>(keyword: &'static str, input: &'a str) -> IResult<&'a str, &'a str> {
    (tag("//"), anychar, tag(keyword))
        .map(|(_, _, keyword)| keyword)
        .parse(input)
}
