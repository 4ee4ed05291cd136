use crate::config::InlineCommandsConfig;
use crate::engine::context::CheckerContext;
use crate::types::{Priority, Rule, Suggestion};

use super::utils::extract_commands;
use super::Checker;

pub struct InlineCommandsChecker {
    max_inline: usize,
}

impl InlineCommandsChecker {
    pub fn new(config: &InlineCommandsConfig) -> Self {
        Self {
            max_inline: config.max_inline,
        }
    }
}

impl Checker for InlineCommandsChecker {
    fn check(&self, ctx: &CheckerContext) -> Vec<Suggestion> {
        if !ctx.parsed.code_blocks.is_empty() {
            return Vec::new();
        }

        let count = extract_commands(ctx.raw).len();
        if count <= self.max_inline {
            return Vec::new();
        }

        vec![Suggestion::tip(
            Rule::InlineCommands,
            Priority::Low,
            "Group commands into code blocks",
            format!(
                "Found {count} inline commands and no code blocks. Fenced blocks are \
                 easier for agents to copy and run verbatim."
            ),
        )
        .with_suggestion("Collect related commands into fenced ```bash blocks")
        .with_example("```bash\npnpm install\npnpm test\n```")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_check(text: &str) -> Vec<Suggestion> {
        let ctx = CheckerContext::build(text);
        InlineCommandsChecker::new(&InlineCommandsConfig::default()).check(&ctx)
    }

    const SIX_COMMANDS: &str = "# Commands\n\
        - `npm install`\n- `npm test`\n- `npm run build`\n\
        - `npm run dev`\n- `npm start`\n- `git status`\n";

    #[test]
    fn test_many_inline_commands_fire() {
        let result = run_check(SIX_COMMANDS);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].priority, Priority::Low);
        assert!(result[0].message.contains('6'));
    }

    #[test]
    fn test_five_commands_ok() {
        let text = SIX_COMMANDS.replace("- `git status`\n", "");
        assert!(run_check(&text).is_empty());
    }

    #[test]
    fn test_code_block_suppresses() {
        let text = format!("{SIX_COMMANDS}```bash\nnpm ci\n```\n");
        assert!(run_check(&text).is_empty());
    }
}
