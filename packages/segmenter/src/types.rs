//! Core data types for the segmenter.
//!
//! These types describe the single input handed over by the text generation
//! service and the fixed four-section output consumed by the presentation
//! and storage layers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SegmenterError;

/// Unstructured advisory text as produced by the generation service.
///
/// No grammar is assumed: headers may be present, reworded or missing,
/// line endings may be mixed and the text may be plain prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawReport<'a>(&'a str);

impl<'a> RawReport<'a> {
    /// Wrap a borrowed report.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self(text)
    }

    /// The text exactly as received.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// The text with surrounding whitespace removed.
    #[must_use]
    pub fn trimmed(&self) -> &'a str {
        self.0.trim()
    }
}

impl<'a> From<&'a str> for RawReport<'a> {
    fn from(text: &'a str) -> Self {
        Self(text)
    }
}

impl<'a> From<&'a String> for RawReport<'a> {
    fn from(text: &'a String) -> Self {
        Self(text.as_str())
    }
}

/// The four fixed output categories.
///
/// This set is closed: content that fits none of the categories is kept
/// under [`SectionLabel::Health`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionLabel {
    /// Maternal health guidance. Also the default bucket.
    Health,

    /// Nutrition and diet guidance.
    Nutrition,

    /// Physical activity and exercise guidance.
    Activity,

    /// Fetal development guidance.
    FetalDevelopment,
}

impl SectionLabel {
    /// All labels in classification order.
    ///
    /// The order decides ties when a line mentions several categories.
    pub const ALL: [SectionLabel; 4] = [
        Self::Health,
        Self::Nutrition,
        Self::Activity,
        Self::FetalDevelopment,
    ];

    /// Get the stable key used in serialized output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Nutrition => "nutrition",
            Self::Activity => "activity",
            Self::FetalDevelopment => "fetalDevelopment",
        }
    }

    /// Get the human readable tab title.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Health => "Health",
            Self::Nutrition => "Nutrition",
            Self::Activity => "Physical Activity",
            Self::FetalDevelopment => "Fetal Development",
        }
    }
}

impl fmt::Display for SectionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionLabel {
    type Err = SegmenterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "health" => Ok(Self::Health),
            "nutrition" => Ok(Self::Nutrition),
            "activity" => Ok(Self::Activity),
            "fetaldevelopment" | "fetal_development" | "fetal-development" => {
                Ok(Self::FetalDevelopment)
            }
            _ => Err(SegmenterError::InvalidLabel(s.to_string())),
        }
    }
}

/// The complete four-way split of a report.
///
/// Every label always has an entry. Entries are stored trimmed, so two sets
/// compare equal exactly when their four trimmed texts are equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "SectionSetRepr")]
pub struct SectionSet {
    health: String,
    nutrition: String,
    activity: String,
    fetal_development: String,
}

/// Deserialization shape; missing fields read as empty and values are trimmed.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SectionSetRepr {
    health: String,
    nutrition: String,
    activity: String,
    fetal_development: String,
}

impl From<SectionSetRepr> for SectionSet {
    fn from(repr: SectionSetRepr) -> Self {
        Self::from_parts(
            &repr.health,
            &repr.nutrition,
            &repr.activity,
            &repr.fetal_development,
        )
    }
}

impl SectionSet {
    /// Create a set with all four sections empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set from the four texts in canonical order.
    #[must_use]
    pub fn from_parts(health: &str, nutrition: &str, activity: &str, fetal_development: &str) -> Self {
        Self {
            health: health.trim().to_string(),
            nutrition: nutrition.trim().to_string(),
            activity: activity.trim().to_string(),
            fetal_development: fetal_development.trim().to_string(),
        }
    }

    /// Replace the text of one section. The text is stored trimmed.
    pub fn set(&mut self, label: SectionLabel, text: &str) {
        *self.slot_mut(label) = text.trim().to_string();
    }

    /// Append text to one section, separated by a blank line from what is
    /// already there.
    pub fn append(&mut self, label: SectionLabel, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        let slot = self.slot_mut(label);
        if !slot.is_empty() {
            slot.push_str("\n\n");
        }
        slot.push_str(text);
    }

    /// Builder variant of [`SectionSet::set`].
    #[must_use]
    pub fn with(mut self, label: SectionLabel, text: &str) -> Self {
        self.set(label, text);
        self
    }

    /// Get the text of one section.
    #[must_use]
    pub fn get(&self, label: SectionLabel) -> &str {
        match label {
            SectionLabel::Health => &self.health,
            SectionLabel::Nutrition => &self.nutrition,
            SectionLabel::Activity => &self.activity,
            SectionLabel::FetalDevelopment => &self.fetal_development,
        }
    }

    /// Health guidance.
    #[must_use]
    pub fn health(&self) -> &str {
        &self.health
    }

    /// Nutrition guidance.
    #[must_use]
    pub fn nutrition(&self) -> &str {
        &self.nutrition
    }

    /// Physical activity guidance.
    #[must_use]
    pub fn activity(&self) -> &str {
        &self.activity
    }

    /// Fetal development guidance.
    #[must_use]
    pub fn fetal_development(&self) -> &str {
        &self.fetal_development
    }

    /// Iterate over all four sections in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionLabel, &str)> + '_ {
        SectionLabel::ALL.into_iter().map(|label| (label, self.get(label)))
    }

    /// Labels whose section has content.
    #[must_use]
    pub fn populated(&self) -> Vec<SectionLabel> {
        self.iter()
            .filter(|(_, text)| !text.is_empty())
            .map(|(label, _)| label)
            .collect()
    }

    /// Check whether all four sections are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, text)| text.is_empty())
    }

    fn slot_mut(&mut self, label: SectionLabel) -> &mut String {
        match label {
            SectionLabel::Health => &mut self.health,
            SectionLabel::Nutrition => &mut self.nutrition,
            SectionLabel::Activity => &mut self.activity,
            SectionLabel::FetalDevelopment => &mut self.fetal_development,
        }
    }
}
