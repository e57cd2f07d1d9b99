//! Output generation for segmented reports.

mod text;
mod writer;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Result, SegmenterError};
use crate::types::SectionSet;

pub use text::{render_text, wrap_text, EMPTY_SECTION};
pub use writer::{save_output, to_json, to_yaml};

/// Output format for the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Titled, wrapped plain text.
    #[default]
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    /// Serialize a structured value. Plain text is only defined for a
    /// [`SectionSet`], so [`OutputFormat::Text`] is rejected here.
    pub fn serialize<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            Self::Json => to_json(value),
            Self::Yaml => to_yaml(value),
            Self::Text => Err(SegmenterError::InvalidFormat(self.as_str().to_string())),
        }
    }

    /// Render a section set in this format.
    pub fn render_sections(&self, sections: &SectionSet, width: usize) -> Result<String> {
        match self {
            Self::Text => Ok(render_text(sections, width)),
            _ => self.serialize(sections),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = SegmenterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(SegmenterError::InvalidFormat(s.to_string())),
        }
    }
}
