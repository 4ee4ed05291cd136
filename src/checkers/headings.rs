use crate::engine::context::CheckerContext;
use crate::types::{Priority, Rule, Suggestion, SuggestionKind};

use super::Checker;

pub struct NoHeadingsChecker;

impl Checker for NoHeadingsChecker {
    fn check(&self, ctx: &CheckerContext) -> Vec<Suggestion> {
        if !ctx.parsed.sections.is_empty() {
            return Vec::new();
        }

        vec![Suggestion::tip(
            Rule::NoHeadings,
            Priority::High,
            "Add section headings",
            "The file has no Markdown headings. Headings let agents jump straight to \
             the guidance relevant to their task.",
        )
        .with_suggestion("Organize the content under headings such as Setup, Testing and Code Style")
        .with_example("## Setup\n\n## Testing\n\n## Code Style")]
    }
}

pub struct MultipleH1Checker;

impl Checker for MultipleH1Checker {
    fn check(&self, ctx: &CheckerContext) -> Vec<Suggestion> {
        let h1_count = ctx.parsed.h1_count();
        if h1_count <= 1 {
            return Vec::new();
        }

        vec![Suggestion::new(
            Rule::MultipleH1,
            SuggestionKind::Info,
            Priority::Low,
            "Multiple top-level headings",
            format!(
                "Found {h1_count} level-1 headings. A single H1 title with H2 sections \
                 gives the document a clearer hierarchy."
            ),
        )
        .with_suggestion("Keep one `#` title and demote the others to `##`")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_headings_fires() {
        let ctx = CheckerContext::build("just some text\nand more\n");
        let result = NoHeadingsChecker.check(&ctx);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].priority, Priority::High);
        assert!(result[0].example.is_some());
    }

    #[test]
    fn test_fenced_heading_does_not_count() {
        let ctx = CheckerContext::build("```\n# inside\n```\n");
        assert_eq!(NoHeadingsChecker.check(&ctx).len(), 1);
    }

    #[test]
    fn test_headings_present() {
        let ctx = CheckerContext::build("## Only an H2\n");
        assert!(NoHeadingsChecker.check(&ctx).is_empty());
    }

    #[test]
    fn test_single_h1_ok() {
        let ctx = CheckerContext::build("# Title\n## A\n## B\n");
        assert!(MultipleH1Checker.check(&ctx).is_empty());
    }

    #[test]
    fn test_multiple_h1_is_info() {
        let ctx = CheckerContext::build("# One\ntext\n# Two\ntext\n");
        let result = MultipleH1Checker.check(&ctx);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].kind, SuggestionKind::Info);
        assert_eq!(result[0].priority, Priority::Low);
        assert!(result[0].message.contains('2'));
    }
}
