//! Report segmentation with a three-tier fallback.
//!
//! A report is split by explicit headers when it has recognizable ones,
//! otherwise by scanning lines for category keywords, otherwise kept whole
//! under health. The keyword tables are ordered registries, so adding a
//! synonym is a one-line change in [`create_header_keywords`] or
//! [`create_line_keywords`].

mod config;
mod engine;
mod markup;
mod registry;
mod strategy;
mod types;

pub use config::{create_header_keywords, create_line_keywords};
pub use engine::{segment, Segmenter};
pub use markup::{fold, normalize_input};
pub use registry::{KeywordRegistry, KeywordRule};
pub use strategy::{HeaderStrategy, LineScanStrategy, SegmentStrategy, WholeTextStrategy};
pub use types::{HeaderBlock, ReportContext, Segmentation, Stage};
