//! Persistence envelope for one segmented report.
//!
//! The segmenter does not store anything itself. A storage collaborator
//! receives an [`AdvisoryRecord`] holding the raw text, the four sections and
//! whatever caller parameters (age, timeframe, diet preference) were used to
//! request the report.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SegmenterError};
use crate::splitting::{Segmenter, Stage};
use crate::types::SectionSet;

/// Opaque caller parameters, passed through untouched.
pub type Params = BTreeMap<String, serde_json::Value>;

/// A segmented report ready to be persisted.
///
/// Keys are camelCase throughout, matching the nested section keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryRecord {
    /// The report exactly as received.
    pub raw: String,

    /// The four-way split of `raw`.
    pub sections: SectionSet,

    /// Caller parameters used to request the report.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: Params,

    /// Which tier produced `sections`.
    pub stage: Stage,

    /// When the report was segmented.
    pub created_at: DateTime<Utc>,
}

impl AdvisoryRecord {
    /// Segment a report and wrap it in a record timestamped now.
    pub fn from_report(raw: &str, params: Params, segmenter: &Segmenter) -> Self {
        let segmentation = segmenter.segment_detailed(raw);
        tracing::debug!(
            stage = segmentation.stage.as_str(),
            params = params.len(),
            "Built advisory record"
        );

        Self {
            raw: raw.to_string(),
            sections: segmentation.sections,
            params,
            stage: segmentation.stage,
            created_at: Utc::now(),
        }
    }
}

/// Parse a `key=value` parameter.
///
/// The value is read as JSON when it parses (`29`, `true`, `["a","b"]`) and
/// kept as a plain string otherwise.
///
/// # Examples
/// ```
/// use advisory_segmenter::record::parse_param;
/// use serde_json::json;
///
/// assert_eq!(parse_param("age=29").unwrap(), ("age".to_string(), json!(29)));
/// assert_eq!(parse_param("diet=vegetarian").unwrap(), ("diet".to_string(), json!("vegetarian")));
/// assert!(parse_param("age").is_err());
/// ```
pub fn parse_param(input: &str) -> Result<(String, serde_json::Value)> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| SegmenterError::InvalidParam(input.to_string()))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(SegmenterError::InvalidParam(input.to_string()));
    }

    let value = value.trim();
    let value = serde_json::from_str(value)
        .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));

    Ok((key.to_string(), value))
}

/// Parse a list of `key=value` parameters. Later keys replace earlier ones.
pub fn parse_params<I, S>(inputs: I) -> Result<Params>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    inputs
        .into_iter()
        .map(|input| parse_param(input.as_ref()))
        .collect()
}
