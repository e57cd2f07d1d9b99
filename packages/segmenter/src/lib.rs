//! Advisory Segmenter - Split generated pregnancy guidance into four sections.
//!
//! A text-generation service answers with one unstructured advisory report.
//! This crate splits it into the fixed categories shown as tabs by the
//! presentation layer: maternal health, nutrition, physical activity and
//! fetal development.
//!
//! # Example
//!
//! ```
//! use advisory_segmenter::segment;
//!
//! let report = "### 1. Maternal Health\nRest well.\n### 2. Nutrition Guidelines\nEat more fiber.";
//! let sections = segment(report);
//!
//! assert_eq!(sections.health(), "Rest well.");
//! assert_eq!(sections.nutrition(), "Eat more fiber.");
//! assert_eq!(sections.activity(), "");
//! ```
//!
//! # Architecture
//!
//! The segmenter is organized into several modules:
//!
//! - [`config`]: Configuration constants, runtime settings and validation
//! - [`types`]: Core data types (RawReport, SectionLabel, SectionSet)
//! - [`error`]: Error types and Result alias
//! - [`splitting`]: Three-tier segmentation engine and keyword registries
//! - [`record`]: Persistence envelope with caller parameters
//! - [`output`]: Text, JSON and YAML output
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod record;
pub mod splitting;
pub mod types;

// Re-export main functions
pub use splitting::{segment, Segmenter};

// Re-export commonly used items
pub use config::{PreamblePolicy, SegmenterConfig};
pub use error::{Result, SegmenterError};
pub use record::AdvisoryRecord;
pub use splitting::{Segmentation, Stage};
pub use types::{RawReport, SectionLabel, SectionSet};
