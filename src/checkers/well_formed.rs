use crate::engine::context::CheckerContext;
use crate::types::{Priority, Rule, Suggestion, SuggestionKind};

use super::utils::extract_commands;
use super::Checker;

pub const MIN_LINES: usize = 10;
pub const MAX_LINES: usize = 150;
const MIN_SECTIONS: usize = 3;
const MIN_ESSENTIAL_TOPICS: usize = 2;

/// Positive feedback for a compact document that covers the essentials.
pub struct WellFormedChecker;

impl Checker for WellFormedChecker {
    fn check(&self, ctx: &CheckerContext) -> Vec<Suggestion> {
        let parsed = &ctx.parsed;
        let good_length = (MIN_LINES..=MAX_LINES).contains(&parsed.line_count);
        let has_commands =
            !parsed.code_blocks.is_empty() || !extract_commands(ctx.raw).is_empty();

        if !good_length
            || parsed.sections.len() < MIN_SECTIONS
            || !has_commands
            || ctx.keywords.essential_count() < MIN_ESSENTIAL_TOPICS
        {
            return Vec::new();
        }

        vec![Suggestion::new(
            Rule::WellFormed,
            SuggestionKind::Success,
            Priority::High,
            "Well-structured file",
            "Concise, organized into sections, with runnable commands and the essential \
             topics covered.",
        )]
    }
}
