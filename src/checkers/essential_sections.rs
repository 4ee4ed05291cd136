use crate::engine::context::CheckerContext;
use crate::types::{Priority, Rule, Suggestion};

use super::Checker;

/// Flags the setup, testing and code-style topics when no section mentions them.
pub struct EssentialSectionsChecker;

impl Checker for EssentialSectionsChecker {
    fn check(&self, ctx: &CheckerContext) -> Vec<Suggestion> {
        let kw = &ctx.keywords;
        let mut out = Vec::new();

        if !kw.has_setup {
            out.push(
                Suggestion::tip(
                    Rule::MissingSetup,
                    Priority::High,
                    "Add setup instructions",
                    "No setup or installation guidance found. Agents need to know how to \
                     install dependencies and prepare the environment.",
                )
                .with_suggestion("Add a Setup section with the exact install commands")
                .with_example("## Setup\n- Install dependencies: `pnpm install`\n- Start dev server: `pnpm dev`"),
            );
        }

        if !kw.has_testing {
            out.push(
                Suggestion::tip(
                    Rule::MissingTesting,
                    Priority::Medium,
                    "Add testing instructions",
                    "No testing guidance found. Agents verify their changes more reliably \
                     when they know how to run the tests.",
                )
                .with_suggestion("Add a Testing section with the test commands")
                .with_example("## Testing\n- Run all tests: `pnpm test`\n- Run a single file: `pnpm test path/to/file`"),
            );
        }

        if !kw.has_code_style {
            out.push(
                Suggestion::tip(
                    Rule::MissingCodeStyle,
                    Priority::Low,
                    "Describe code style",
                    "No code style or conventions found. Without them, agents fall back to \
                     their own defaults.",
                )
                .with_suggestion("List formatting, naming and linting conventions")
                .with_example("## Code Style\n- TypeScript strict mode\n- Run `pnpm lint` before committing"),
            );
        }

        out
    }
}
