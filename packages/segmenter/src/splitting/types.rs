//! Types for the segmentation system.

use serde::{Deserialize, Serialize};

use super::markup::normalize_input;
use crate::types::{RawReport, SectionSet};

/// A header title and the body text that follows it.
///
/// Produced while scanning for explicit headers; never outlives a parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderBlock {
    /// Header title with markers and enumeration stripped.
    pub header: String,

    /// Body text up to the next header, trimmed.
    pub body: String,
}

impl HeaderBlock {
    /// Create a new header block.
    #[must_use]
    pub fn new(header: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            body: body.into(),
        }
    }
}

/// The fallback tier that produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Explicit header extraction.
    Headers,

    /// Keyword-driven line scanning.
    LineScan,

    /// Whole text assigned to the health section.
    WholeText,

    /// Nothing to segment (empty or whitespace-only input).
    Empty,
}

impl Stage {
    /// Get the string value used in logs and serialized records.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Headers => "headers",
            Self::LineScan => "line_scan",
            Self::WholeText => "whole_text",
            Self::Empty => "empty",
        }
    }
}

/// Sections together with the tier that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    /// The four-way split.
    pub sections: SectionSet,

    /// Which tier produced `sections`.
    pub stage: Stage,
}

/// Context shared by all tiers for a single report.
///
/// Holds the untouched input next to the normalized text so each tier can
/// pick what it needs without normalizing again.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// The report exactly as received.
    pub raw: RawReport<'a>,

    /// Line endings unified and outer code fence removed.
    pub normalized: String,
}

impl<'a> ReportContext<'a> {
    /// Create a context for one report.
    #[must_use]
    pub fn new(raw: RawReport<'a>) -> Self {
        Self {
            raw,
            normalized: normalize_input(raw.as_str()),
        }
    }
}
