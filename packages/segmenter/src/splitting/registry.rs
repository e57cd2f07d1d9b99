//! Ordered keyword registry for section classification.

use std::borrow::Cow;

use super::markup::fold;
use crate::types::SectionLabel;

/// Declarative keyword rule for one section label.
///
/// Keywords are matched as lowercase substrings against NFKC-folded text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    /// Label assigned when the rule matches.
    pub label: SectionLabel,

    /// Any one of these substrings matches.
    pub keywords: Vec<String>,

    /// Substrings blanked out before matching (e.g. "unhealthy" for the
    /// health rule).
    pub masked: Vec<String>,
}

impl KeywordRule {
    /// Create a rule without keywords; it matches nothing until extended.
    #[must_use]
    pub fn new(label: SectionLabel) -> Self {
        Self {
            label,
            keywords: Vec::new(),
            masked: Vec::new(),
        }
    }

    /// Set the single keywords.
    #[must_use]
    pub fn with_keywords(mut self, keywords: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.keywords = keywords.into_iter().map(|k| Into::<String>::into(k).to_lowercase()).collect();
        self
    }

    /// Set the masked substrings.
    #[must_use]
    pub fn with_masked(mut self, masked: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.masked = masked.into_iter().map(|m| Into::<String>::into(m).to_lowercase()).collect();
        self
    }

    /// Check the rule against already folded text.
    #[must_use]
    pub fn matches(&self, folded: &str) -> bool {
        let mut text = Cow::Borrowed(folded);
        for masked in &self.masked {
            if text.contains(masked.as_str()) {
                text = Cow::Owned(text.replace(masked.as_str(), " "));
            }
        }

        self.keywords.iter().any(|k| text.contains(k.as_str()))
    }
}

/// Registry of keyword rules, evaluated in registration order.
///
/// Order is significant: the first matching rule wins, which is how a line
/// mentioning both "diet" and "exercise" ends up under nutrition.
#[derive(Debug, Clone, Default)]
pub struct KeywordRegistry {
    rules: Vec<KeywordRule>,
}

impl KeywordRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule after all previously registered rules.
    pub fn register(&mut self, rule: KeywordRule) {
        self.rules.push(rule);
    }

    /// Rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// Classify free text. Returns `None` when no rule matches.
    #[must_use]
    pub fn classify(&self, text: &str) -> Option<SectionLabel> {
        let folded = fold(text.trim());
        self.rules
            .iter()
            .find(|rule| rule.matches(&folded))
            .map(|rule| rule.label)
    }
}
