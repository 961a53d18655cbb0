//! Section tracking.

use super::error::LintIssue;
use crate::parse::{Marker, Section, parse_marker};
use log::debug;

/// The three-state machine behind section markers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionTracker {
    current: Section,
}

impl SectionTracker {
    /// Creates a tracker outside of any section.
    pub fn new() -> Self {
        Self::default()
    }

    /// The section currently open.
    pub fn current(&self) -> Section {
        self.current
    }

    /// Feeds a comment line to the state machine.
    ///
    /// Plain comments are ignored. A marker that does not fit the current
    /// state is returned as an issue and leaves the state unchanged.
    pub fn on_comment(&mut self, comment: &str) -> Result<(), LintIssue> {
        let Some(marker) = parse_marker(comment) else {
            return Ok(());
        };

        match (self.current, marker) {
            (Section::None, Marker::Begin(Section::None)) => Err(LintIssue::UnknownSectionBegin),
            (Section::None, Marker::Begin(section)) => {
                debug!("Entering {section} section");
                self.current = section;
                Ok(())
            }
            (Section::None, Marker::End(_)) => Err(LintIssue::EndWithoutBegin),
            (open, Marker::Begin(_)) => Err(LintIssue::UnexpectedSectionBegin { open }),
            (open, Marker::End(section)) if section == open => {
                debug!("Leaving {open} section");
                self.current = Section::None;
                Ok(())
            }
            (open, Marker::End(_)) => Err(LintIssue::UnexpectedSectionEnd { open }),
        }
    }
}
