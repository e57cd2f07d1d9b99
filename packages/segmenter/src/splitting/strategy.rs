//! Segmentation strategies, one per fallback tier.

use super::markup::{is_fence, is_heading_like, is_markup_noise, parse_heading, trim_body};
use super::registry::KeywordRegistry;
use super::types::{HeaderBlock, ReportContext, Stage};
use crate::config::{PreamblePolicy, SegmenterConfig};
use crate::types::{SectionLabel, SectionSet};

/// Trait for a segmentation tier.
///
/// A tier either produces a section set or declines with `None`, handing
/// the report to the next tier.
pub trait SegmentStrategy: Send + Sync {
    /// The tier this strategy implements.
    fn stage(&self) -> Stage;

    /// Attempt to segment the report.
    fn segment(&self, context: &ReportContext<'_>) -> Option<SectionSet>;
}

/// Tier one: split on explicit headers and classify each header title.
///
/// Bodies are assigned by header title only. When two headers map to the
/// same label the later body replaces the earlier one.
pub struct HeaderStrategy {
    keywords: KeywordRegistry,
    bold_headings: bool,
    preamble: PreamblePolicy,
}

impl HeaderStrategy {
    /// Create a header strategy.
    #[must_use]
    pub fn new(keywords: KeywordRegistry, config: &SegmenterConfig) -> Self {
        Self {
            keywords,
            bold_headings: config.bold_headings,
            preamble: config.preamble,
        }
    }

    /// Split text into the preamble and a sequence of header blocks.
    ///
    /// Lines inside code fences are never treated as headers. Bold lines
    /// only count as headers in reports without any `#` heading; otherwise
    /// they are emphasis inside a section.
    #[must_use]
    pub fn split_blocks(&self, text: &str) -> (String, Vec<HeaderBlock>) {
        let bold_headings = self.bold_headings && !has_atx_heading(text);
        let mut preamble: Vec<&str> = Vec::new();
        let mut blocks = Vec::new();
        let mut current: Option<(String, Vec<&str>)> = None;
        let mut in_fence = false;

        for line in text.lines() {
            let heading = if is_fence(line) {
                in_fence = !in_fence;
                None
            } else if in_fence {
                None
            } else {
                parse_heading(line, bold_headings)
            };

            if let Some(title) = heading {
                if let Some((header, body)) = current.take() {
                    blocks.push(HeaderBlock::new(header, trim_body(&body)));
                }
                current = Some((title, Vec::new()));
            } else if let Some((_, body)) = current.as_mut() {
                body.push(line);
            } else {
                preamble.push(line);
            }
        }

        if let Some((header, body)) = current {
            blocks.push(HeaderBlock::new(header, trim_body(&body)));
        }

        (trim_body(&preamble), blocks)
    }
}

/// Whether any line outside code fences is a `#` heading.
fn has_atx_heading(text: &str) -> bool {
    let mut in_fence = false;
    text.lines().any(|line| {
        if is_fence(line) {
            in_fence = !in_fence;
            false
        } else {
            !in_fence && parse_heading(line, false).is_some()
        }
    })
}

impl SegmentStrategy for HeaderStrategy {
    fn stage(&self) -> Stage {
        Stage::Headers
    }

    fn segment(&self, context: &ReportContext<'_>) -> Option<SectionSet> {
        let (preamble, blocks) = self.split_blocks(&context.normalized);
        let mut sections = SectionSet::new();

        for block in &blocks {
            match self.keywords.classify(&block.header) {
                Some(label) => sections.set(label, &block.body),
                None => tracing::trace!(
                    header = %block.header,
                    "Header matches no section, dropping block"
                ),
            }
        }

        if sections.is_empty() {
            return None;
        }

        if self.preamble == PreamblePolicy::MergeIntoHealth && !preamble.is_empty() {
            let health = if sections.health().is_empty() {
                preamble
            } else {
                format!("{preamble}\n\n{}", sections.health())
            };
            sections.set(SectionLabel::Health, &health);
        }

        Some(sections)
    }
}

/// Tier two: walk the lines with a current-label cursor, switching sections
/// whenever a line names a different category.
pub struct LineScanStrategy {
    keywords: KeywordRegistry,
}

/// Accumulator threaded through the line fold.
struct ScanState<'t> {
    current: SectionLabel,
    buffer: Vec<&'t str>,
    sections: SectionSet,
    matched: bool,
}

impl<'t> ScanState<'t> {
    fn new() -> Self {
        Self {
            current: SectionLabel::Health,
            buffer: Vec::new(),
            sections: SectionSet::new(),
            matched: false,
        }
    }

    /// Move buffered lines into the current label's section.
    ///
    /// A revisited section keeps its earlier text; the new text is appended.
    fn flush(mut self) -> Self {
        let body = trim_body(&self.buffer);
        self.sections.append(self.current, &body);
        self.buffer.clear();
        self
    }
}

impl LineScanStrategy {
    /// Create a line scan strategy.
    #[must_use]
    pub fn new(keywords: KeywordRegistry) -> Self {
        Self { keywords }
    }

    /// Advance the scan by one line.
    ///
    /// Heading-like lines (`#` prefix or bold wrap) that name a category
    /// open that section and are left out of its body. Prose lines are
    /// always kept, including ones ending in a colon.
    fn step<'t>(&self, mut state: ScanState<'t>, line: &'t str) -> ScanState<'t> {
        if is_markup_noise(line) {
            return state;
        }

        let Some(label) = self.keywords.classify(line) else {
            state.buffer.push(line);
            return state;
        };

        state.matched = true;
        if label != state.current {
            state = state.flush();
            state.current = label;
        }
        if !is_heading_like(line) {
            state.buffer.push(line);
        }
        state
    }
}

impl SegmentStrategy for LineScanStrategy {
    fn stage(&self) -> Stage {
        Stage::LineScan
    }

    fn segment(&self, context: &ReportContext<'_>) -> Option<SectionSet> {
        let state = context
            .normalized
            .lines()
            .fold(ScanState::new(), |state, line| self.step(state, line))
            .flush();

        // Without any keyword line the whole-text tier keeps the input intact.
        if state.matched && !state.sections.is_empty() {
            Some(state.sections)
        } else {
            None
        }
    }
}

/// Tier three: keep the entire trimmed input under health.
pub struct WholeTextStrategy;

impl SegmentStrategy for WholeTextStrategy {
    fn stage(&self) -> Stage {
        Stage::WholeText
    }

    fn segment(&self, context: &ReportContext<'_>) -> Option<SectionSet> {
        let text = context.raw.trimmed();
        if text.is_empty() {
            return None;
        }
        Some(SectionSet::new().with(SectionLabel::Health, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splitting::config::{create_header_keywords, create_line_keywords};
    use crate::types::RawReport;
    use pretty_assertions::assert_eq;

    fn header_strategy() -> HeaderStrategy {
        HeaderStrategy::new(create_header_keywords(), &SegmenterConfig::default())
    }

    fn context(text: &str) -> ReportContext<'_> {
        ReportContext::new(RawReport::new(text))
    }

    #[test]
    fn test_split_blocks() {
        let (preamble, blocks) =
            header_strategy().split_blocks("Hello!\n\n### Health\nRest.\n\n## Diet\n\nEat.\n");

        assert_eq!(preamble, "Hello!");
        assert_eq!(
            blocks,
            vec![HeaderBlock::new("Health", "Rest."), HeaderBlock::new("Diet", "Eat.")]
        );
    }

    #[test]
    fn test_split_blocks_ignores_headings_in_fences() {
        let (_, blocks) =
            header_strategy().split_blocks("### Health\n```\n# not a header\n```\nRest.");

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].body, "```\n# not a header\n```\nRest.");
    }

    #[test]
    fn test_header_strategy_assigns_bodies() {
        let sections = header_strategy()
            .segment(&context("### Maternal Health\nRest.\n### Exercise\nWalk."))
            .unwrap();

        assert_eq!(sections, SectionSet::from_parts("Rest.", "", "Walk.", ""));
    }

    #[test]
    fn test_header_strategy_declines_unknown_headers() {
        assert_eq!(header_strategy().segment(&context("### Random Notes\nSome text.")), None);
    }

    #[test]
    fn test_header_strategy_declines_empty_bodies() {
        assert_eq!(header_strategy().segment(&context("### Nutrition\n\n### Health\n")), None);
    }

    #[test]
    fn test_header_strategy_last_write_wins() {
        let sections = header_strategy()
            .segment(&context("### Health Tips\nFirst.\n### Health Tips\nSecond."))
            .unwrap();

        assert_eq!(sections.health(), "Second.");
    }

    #[test]
    fn test_header_strategy_preamble_merge() {
        let config = SegmenterConfig::builder()
            .preamble(PreamblePolicy::MergeIntoHealth)
            .build()
            .unwrap();
        let strategy = HeaderStrategy::new(create_header_keywords(), &config);

        let sections = strategy
            .segment(&context("Congratulations!\n### Health\nRest.\n### Diet\nEat."))
            .unwrap();
        assert_eq!(sections.health(), "Congratulations!\n\nRest.");

        let sections = strategy
            .segment(&context("Congratulations!\n### Diet\nEat."))
            .unwrap();
        assert_eq!(sections.health(), "Congratulations!");
    }

    #[test]
    fn test_header_strategy_bold_headings_toggle() {
        let text = "**Nutrition**\nEat fiber.";
        assert!(header_strategy().segment(&context(text)).is_some());

        let config = SegmenterConfig::builder().bold_headings(false).build().unwrap();
        let strategy = HeaderStrategy::new(create_header_keywords(), &config);
        assert_eq!(strategy.segment(&context(text)), None);
    }

    #[test]
    fn test_bold_lines_are_emphasis_when_hash_headings_present() {
        let text = "### Maternal Health\nRest well.\n### Nutrition\nEat fiber.\n\
                    **Stay hydrated for your health.**\nDrink water.";

        let sections = header_strategy().segment(&context(text)).unwrap();
        assert_eq!(
            sections,
            SectionSet::from_parts(
                "Rest well.",
                "Eat fiber.\n**Stay hydrated for your health.**\nDrink water.",
                "",
                ""
            )
        );
    }

    #[test]
    fn test_has_atx_heading_ignores_fences() {
        assert!(has_atx_heading("Intro\n## Diet\nEat."));
        assert!(!has_atx_heading("**Diet**\n```\n# comment\n```"));
    }

    #[test]
    fn test_line_scan_switches_sections() {
        let strategy = LineScanStrategy::new(create_line_keywords());
        let text = "Sleep eight hours.\nNutrition matters:\nEat fiber.\nExercise gently each day.\nStretch.";

        let sections = strategy.segment(&context(text)).unwrap();
        assert_eq!(
            sections,
            SectionSet::from_parts(
                "Sleep eight hours.",
                "Nutrition matters:\nEat fiber.",
                "Exercise gently each day.\nStretch.",
                ""
            )
        );
    }

    #[test]
    fn test_line_scan_skips_markup_noise() {
        let strategy = LineScanStrategy::new(create_line_keywords());
        let text = "Eat a balanced diet.\n---\n***\nDrink water.";

        let sections = strategy.segment(&context(text)).unwrap();
        assert_eq!(sections.nutrition(), "Eat a balanced diet.\nDrink water.");
    }

    #[test]
    fn test_line_scan_appends_revisited_section() {
        let strategy = LineScanStrategy::new(create_line_keywords());
        let text = "Diet: eat greens.\nExercise daily.\nAnother diet tip: less sugar.";

        let sections = strategy.segment(&context(text)).unwrap();
        assert_eq!(sections.nutrition(), "Diet: eat greens.\n\nAnother diet tip: less sugar.");
        assert_eq!(sections.activity(), "Exercise daily.");
    }

    #[test]
    fn test_line_scan_declines_without_keywords() {
        let strategy = LineScanStrategy::new(create_line_keywords());
        assert_eq!(strategy.segment(&context("Drink water.\nSleep well.")), None);
    }

    #[test]
    fn test_line_scan_drops_markup_headings() {
        let strategy = LineScanStrategy::new(create_line_keywords());
        let text = "Rest often.\n**Diet**\nEat fiber.\n#### Exercise\nWalk.";

        let sections = strategy.segment(&context(text)).unwrap();
        assert_eq!(sections, SectionSet::from_parts("Rest often.", "Eat fiber.", "Walk.", ""));
    }

    #[test]
    fn test_line_scan_keeps_colon_prose() {
        let strategy = LineScanStrategy::new(create_line_keywords());
        let text = "Rest often.\nHere are some diet tips for you:\nEat fiber.";

        let sections = strategy.segment(&context(text)).unwrap();
        assert_eq!(sections.health(), "Rest often.");
        assert_eq!(sections.nutrition(), "Here are some diet tips for you:\nEat fiber.");
    }

    #[test]
    fn test_line_scan_declines_when_only_headings_match() {
        let strategy = LineScanStrategy::new(create_line_keywords());
        assert_eq!(strategy.segment(&context("**Nutrition:**")), None);
    }

    #[test]
    fn test_whole_text_strategy() {
        let sections = WholeTextStrategy.segment(&context("  Just prose.  ")).unwrap();
        assert_eq!(sections, SectionSet::from_parts("Just prose.", "", "", ""));
        assert_eq!(WholeTextStrategy.segment(&context(" \n\t ")), None);
    }

    #[test]
    fn test_whole_text_uses_raw_input() {
        let sections = WholeTextStrategy.segment(&context("a\r\nb")).unwrap();
        assert_eq!(sections.health(), "a\r\nb");
    }
}
