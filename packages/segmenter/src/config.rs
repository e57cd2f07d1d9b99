//! Configuration constants, runtime settings and validation for the segmenter.

use std::str::FromStr;

use crate::error::{Result, SegmenterError};

/// Default text wrap width for the plain-text renderer.
pub const DEFAULT_WRAP_WIDTH: usize = 80;

/// Smallest accepted wrap width.
///
/// Narrower columns turn section titles and bullets into one word per line.
pub const MIN_WRAP_WIDTH: usize = 20;

/// Largest accepted wrap width.
pub const MAX_WRAP_WIDTH: usize = 400;

/// Deepest markdown heading level recognized as a section header.
pub const MAX_HEADING_LEVEL: usize = 6;

/// Characters that, on their own, make a line pure markup noise.
pub const MARKUP_CHARS: &[char] = &['#', '*', '-', '_', '=', '>', '~', '`', '|'];

/// Environment variable selecting the preamble policy.
pub const ENV_PREAMBLE: &str = "SEGMENTER_PREAMBLE";

/// Environment variable toggling bold-line headings.
pub const ENV_BOLD_HEADINGS: &str = "SEGMENTER_BOLD_HEADINGS";

/// Environment variable overriding the wrap width.
pub const ENV_WRAP_WIDTH: &str = "SEGMENTER_WRAP_WIDTH";

/// What to do with text that appears before the first recognized header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreamblePolicy {
    /// Drop the preamble. Generated reports usually open with a greeting.
    #[default]
    Discard,

    /// Prepend the preamble to the health section.
    MergeIntoHealth,
}

impl PreamblePolicy {
    /// Get the string value used on the command line and in the environment.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Discard => "discard",
            Self::MergeIntoHealth => "health",
        }
    }
}

impl FromStr for PreamblePolicy {
    type Err = SegmenterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "discard" | "drop" => Ok(Self::Discard),
            "health" | "merge" => Ok(Self::MergeIntoHealth),
            _ => Err(SegmenterError::InvalidConfig {
                key: ENV_PREAMBLE.to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Runtime settings for a [`Segmenter`](crate::splitting::Segmenter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmenterConfig {
    /// Handling of text before the first header.
    pub preamble: PreamblePolicy,

    /// Treat whole-line bold text (`**Nutrition**`) as a header.
    pub bold_headings: bool,

    /// Column width used by the plain-text renderer.
    pub wrap_width: usize,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            preamble: PreamblePolicy::Discard,
            bold_headings: true,
            wrap_width: DEFAULT_WRAP_WIDTH,
        }
    }
}

impl SegmenterConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset variables keep their defaults; set but malformed variables are
    /// reported as [`SegmenterError::InvalidConfig`].
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_PREAMBLE) {
            config.preamble = value.parse()?;
        }

        if let Some(value) = lookup(ENV_BOLD_HEADINGS) {
            config.bold_headings = parse_flag(ENV_BOLD_HEADINGS, &value)?;
        }

        if let Some(value) = lookup(ENV_WRAP_WIDTH) {
            let width = value
                .trim()
                .parse::<usize>()
                .map_err(|_| SegmenterError::InvalidConfig {
                    key: ENV_WRAP_WIDTH.to_string(),
                    value: value.clone(),
                })?;
            config.wrap_width = validate_wrap_width(width)?;
        }

        Ok(config)
    }

    /// Create a config builder.
    #[must_use]
    pub fn builder() -> SegmenterConfigBuilder {
        SegmenterConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for constructing a [`SegmenterConfig`].
#[derive(Debug, Clone)]
pub struct SegmenterConfigBuilder {
    config: SegmenterConfig,
}

impl SegmenterConfigBuilder {
    #[must_use]
    pub fn preamble(mut self, preamble: PreamblePolicy) -> Self {
        self.config.preamble = preamble;
        self
    }

    #[must_use]
    pub fn bold_headings(mut self, enabled: bool) -> Self {
        self.config.bold_headings = enabled;
        self
    }

    #[must_use]
    pub fn wrap_width(mut self, width: usize) -> Self {
        self.config.wrap_width = width;
        self
    }

    /// Finish the builder, validating the wrap width.
    pub fn build(self) -> Result<SegmenterConfig> {
        validate_wrap_width(self.config.wrap_width)?;
        Ok(self.config)
    }
}

/// Validate a wrap width.
///
/// # Examples
/// ```
/// use advisory_segmenter::config::validate_wrap_width;
///
/// assert_eq!(validate_wrap_width(80).unwrap(), 80);
/// assert!(validate_wrap_width(5).is_err());
/// ```
pub fn validate_wrap_width(width: usize) -> Result<usize> {
    if (MIN_WRAP_WIDTH..=MAX_WRAP_WIDTH).contains(&width) {
        Ok(width)
    } else {
        Err(SegmenterError::InvalidConfig {
            key: "wrap width".to_string(),
            value: width.to_string(),
        })
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(SegmenterError::InvalidConfig {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
