use crate::config::ReadabilityConfig;
use crate::engine::context::CheckerContext;
use crate::types::{Priority, Rule, Suggestion};

use super::utils::list_titles;
use super::Checker;

pub struct LongSectionChecker {
    max_section_lines: usize,
}

impl LongSectionChecker {
    pub fn new(config: &ReadabilityConfig) -> Self {
        Self {
            max_section_lines: config.max_section_lines,
        }
    }
}

impl Checker for LongSectionChecker {
    fn check(&self, ctx: &CheckerContext) -> Vec<Suggestion> {
        let long: Vec<&str> = ctx
            .parsed
            .sections
            .iter()
            // Content is newline-terminated, so `lines()` counts body lines
            // exactly; a `split('\n')` count would add a phantom empty line.
            .filter(|s| s.content.lines().count() > self.max_section_lines)
            .map(|s| s.title.as_str())
            .collect();
        if long.is_empty() {
            return Vec::new();
        }

        vec![Suggestion::tip(
            Rule::LongSection,
            Priority::Low,
            "Break up long sections",
            format!(
                "{} {} more than {} lines.",
                list_titles(long.iter().copied()),
                if long.len() == 1 { "has" } else { "have" },
                self.max_section_lines
            ),
        )
        .with_suggestion("Split long sections into focused subsections with their own headings")]
    }
}

pub struct EmptySectionChecker {
    min_section_chars: usize,
}

impl EmptySectionChecker {
    pub fn new(config: &ReadabilityConfig) -> Self {
        Self {
            min_section_chars: config.min_section_chars,
        }
    }
}

impl Checker for EmptySectionChecker {
    fn check(&self, ctx: &CheckerContext) -> Vec<Suggestion> {
        let empty: Vec<&str> = ctx
            .parsed
            .sections
            .iter()
            .filter(|s| s.content.trim().chars().count() < self.min_section_chars)
            .map(|s| s.title.as_str())
            .collect();
        if empty.is_empty() {
            return Vec::new();
        }

        vec![Suggestion::tip(
            Rule::EmptySection,
            Priority::Medium,
            "Fill in empty sections",
            format!(
                "{} {} little or no content.",
                list_titles(empty.iter().copied()),
                if empty.len() == 1 { "has" } else { "have" }
            ),
        )
        .with_suggestion("Add concrete guidance to these sections or remove them")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_section(title: &str, lines: usize) -> String {
        let body: String = (0..lines).map(|i| format!("- point {i}\n")).collect();
        format!("## {title}\n{body}")
    }

    #[test]
    fn test_long_section_fires_once() {
        let text = format!("{}{}", long_section("Alpha", 51), long_section("Beta", 60));
        let ctx = CheckerContext::build(&text);
        let result = LongSectionChecker::new(&ReadabilityConfig::default()).check(&ctx);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].message, "\"Alpha\", \"Beta\" have more than 50 lines.");
    }

    #[test]
    fn test_section_at_limit_ok() {
        // 50 body lines plus the blank line before end of input.
        let text = long_section("Alpha", 49);
        let ctx = CheckerContext::build(&text);
        assert!(LongSectionChecker::new(&ReadabilityConfig::default())
            .check(&ctx)
            .is_empty());
    }

    #[test]
    fn test_long_section_boundary_counts_body_lines() {
        let checker = LongSectionChecker::new(&ReadabilityConfig::default());

        let at_limit = format!("{}## Next\nMore text here.\n", long_section("Alpha", 50));
        let ctx = CheckerContext::build(&at_limit);
        assert_eq!(ctx.parsed.sections[0].content.lines().count(), 50);
        assert_eq!(ctx.parsed.sections[0].content.split('\n').count(), 51);
        assert!(checker.check(&ctx).is_empty());

        let over = format!("{}## Next\nMore text here.\n", long_section("Alpha", 51));
        let result = checker.check(&CheckerContext::build(&over));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].message, "\"Alpha\" has more than 50 lines.");
    }

    #[test]
    fn test_empty_section_fires() {
        let ctx = CheckerContext::build("# Title\n## Setup\nRun `pnpm install` first.\n## Notes\nTBD\n");
        let result = EmptySectionChecker::new(&ReadabilityConfig::default()).check(&ctx);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].priority, Priority::Medium);
        assert_eq!(result[0].message, "\"Title\", \"Notes\" have little or no content.");
    }

    #[test]
    fn test_code_only_section_counts_as_empty() {
        let ctx = CheckerContext::build("## Build\n```\ncargo build --release\n```\n");
        let result = EmptySectionChecker::new(&ReadabilityConfig::default()).check(&ctx);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_no_sections_no_suggestions() {
        let ctx = CheckerContext::build("plain text only");
        let config = ReadabilityConfig::default();
        assert!(EmptySectionChecker::new(&config).check(&ctx).is_empty());
        assert!(LongSectionChecker::new(&config).check(&ctx).is_empty());
    }
}
