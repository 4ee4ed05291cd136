use crate::config::LengthConfig;
use crate::engine::context::CheckerContext;
use crate::types::{Priority, Rule, Suggestion};

use super::Checker;

pub struct LengthChecker {
    warn_lines: usize,
    max_lines: usize,
    min_lines: usize,
}

impl LengthChecker {
    pub fn new(config: &LengthConfig) -> Self {
        Self {
            warn_lines: config.warn_lines,
            max_lines: config.max_lines,
            min_lines: config.min_lines,
        }
    }
}

impl Checker for LengthChecker {
    fn check(&self, ctx: &CheckerContext) -> Vec<Suggestion> {
        let line_count = ctx.parsed.line_count;
        let mut out = Vec::new();

        if line_count > self.max_lines {
            out.push(
                Suggestion::tip(
                    Rule::LengthTooLong,
                    Priority::Medium,
                    "File is quite long",
                    format!(
                        "The file has {line_count} lines (over {}). Long instruction files \
                         dilute the guidance agents actually follow.",
                        self.max_lines
                    ),
                )
                .with_suggestion(
                    "Move detailed reference material into separate docs and link to them",
                ),
            );
        } else if line_count > self.warn_lines {
            out.push(
                Suggestion::tip(
                    Rule::LengthGettingLong,
                    Priority::Low,
                    "File is getting long",
                    format!(
                        "The file has {line_count} lines. Keep it under {} so the \
                         essentials stay easy to find.",
                        self.warn_lines
                    ),
                )
                .with_suggestion("Trim sections that repeat what the code already shows"),
            );
        }

        if line_count < self.min_lines {
            out.push(
                Suggestion::tip(
                    Rule::MinimumContent,
                    Priority::Medium,
                    "Add more content",
                    format!(
                        "The file has only {line_count} lines. Agents need enough context \
                         to work on the project."
                    ),
                )
                .with_suggestion(
                    "Describe how to set up, build and test the project, and the conventions to follow",
                ),
            );
        }

        out
    }
}
