//! Segmenter that runs the fallback tiers in order.

use std::sync::LazyLock;

use super::config::{create_header_keywords, create_line_keywords};
use super::strategy::{HeaderStrategy, LineScanStrategy, SegmentStrategy, WholeTextStrategy};
use super::types::{ReportContext, Segmentation, Stage};
use crate::config::SegmenterConfig;
use crate::types::{RawReport, SectionSet};

static DEFAULT_SEGMENTER: LazyLock<Segmenter> = LazyLock::new(Segmenter::new);

/// Engine that splits an advisory report into four sections.
///
/// Tiers are tried in order and the first one that produces content wins:
/// explicit headers, then keyword line scanning, then the whole text under
/// health. Segmentation is total: every input, including the empty string,
/// yields a [`SectionSet`].
///
/// # Example
///
/// ```
/// use advisory_segmenter::Segmenter;
///
/// let segmenter = Segmenter::new();
/// let sections = segmenter.segment("### Nutrition\nEat more fiber.");
/// assert_eq!(sections.nutrition(), "Eat more fiber.");
/// assert_eq!(sections.health(), "");
/// ```
pub struct Segmenter {
    config: SegmenterConfig,
    tiers: Vec<Box<dyn SegmentStrategy>>,
}

impl Segmenter {
    /// Create a segmenter with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SegmenterConfig::default())
    }

    /// Create a segmenter with the standard three tiers.
    #[must_use]
    pub fn with_config(config: SegmenterConfig) -> Self {
        let tiers: Vec<Box<dyn SegmentStrategy>> = vec![
            Box::new(HeaderStrategy::new(create_header_keywords(), &config)),
            Box::new(LineScanStrategy::new(create_line_keywords())),
            Box::new(WholeTextStrategy),
        ];
        Self::with_tiers(config, tiers)
    }

    /// Create a segmenter with a custom tier list.
    #[must_use]
    pub fn with_tiers(config: SegmenterConfig, tiers: Vec<Box<dyn SegmentStrategy>>) -> Self {
        Self { config, tiers }
    }

    /// The configuration this segmenter was built with.
    #[must_use]
    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Split a report into its four sections.
    pub fn segment<'a>(&self, raw: impl Into<RawReport<'a>>) -> SectionSet {
        self.segment_detailed(raw).sections
    }

    /// Split a report and report which tier produced the result.
    pub fn segment_detailed<'a>(&self, raw: impl Into<RawReport<'a>>) -> Segmentation {
        let context = ReportContext::new(raw.into());

        for tier in &self.tiers {
            let stage = tier.stage();
            if let Some(sections) = tier.segment(&context) {
                tracing::debug!(
                    stage = stage.as_str(),
                    populated = ?sections.populated(),
                    "Segmented report"
                );
                return Segmentation { sections, stage };
            }
            tracing::debug!(stage = stage.as_str(), "Tier produced no sections, falling back");
        }

        Segmentation {
            sections: SectionSet::new(),
            stage: Stage::Empty,
        }
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a report with the default segmenter.
///
/// # Example
///
/// ```
/// use advisory_segmenter::segment;
///
/// let sections = segment("### 1. Maternal Health\nRest well.\n### 2. Nutrition Guidelines\nEat more fiber.");
/// assert_eq!(sections.health(), "Rest well.");
/// assert_eq!(sections.nutrition(), "Eat more fiber.");
/// assert_eq!(sections.activity(), "");
/// assert_eq!(sections.fetal_development(), "");
/// ```
pub fn segment(raw: &str) -> SectionSet {
    DEFAULT_SEGMENTER.segment(raw)
}
