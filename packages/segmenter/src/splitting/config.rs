//! Keyword tables for the four advisory sections.

use super::registry::{KeywordRegistry, KeywordRule};
use crate::types::SectionLabel;

/// Create the registry used to classify header titles.
///
/// Rules are registered in the fixed order Health → Nutrition → Activity →
/// FetalDevelopment; the first match wins:
///
/// ```text
/// health             maternal | health
/// nutrition          nutrition | diet
/// activity           physical | activity | exercise
/// fetalDevelopment   fetal | baby | development
/// ```
#[must_use]
pub fn create_header_keywords() -> KeywordRegistry {
    let mut registry = KeywordRegistry::new();

    registry.register(KeywordRule::new(SectionLabel::Health).with_keywords(["maternal", "health"]));
    registry.register(KeywordRule::new(SectionLabel::Nutrition).with_keywords(["nutrition", "diet"]));
    registry.register(
        KeywordRule::new(SectionLabel::Activity).with_keywords(["physical", "activity", "exercise"]),
    );
    registry.register(
        KeywordRule::new(SectionLabel::FetalDevelopment)
            .with_keywords(["fetal", "baby", "development"]),
    );

    registry
}

/// Create the registry used to classify individual body lines.
///
/// Prose lines are noisier than titles, so two rules are stricter than
/// their header counterparts: "unhealthy" does not count as health, and a
/// bare "development" ("skill development") does not count as fetal.
///
/// ```text
/// health             maternal | health        ("unhealthy" ignored)
/// nutrition          nutrition | diet
/// activity           physical | activity | exercise
/// fetalDevelopment   fetal | baby
/// ```
#[must_use]
pub fn create_line_keywords() -> KeywordRegistry {
    let mut registry = KeywordRegistry::new();

    registry.register(
        KeywordRule::new(SectionLabel::Health)
            .with_keywords(["maternal", "health"])
            .with_masked(["unhealthy"]),
    );
    registry.register(KeywordRule::new(SectionLabel::Nutrition).with_keywords(["nutrition", "diet"]));
    registry.register(
        KeywordRule::new(SectionLabel::Activity).with_keywords(["physical", "activity", "exercise"]),
    );
    registry.register(
        KeywordRule::new(SectionLabel::FetalDevelopment)
            .with_keywords(["fetal", "baby"]),
    );

    registry
}
