use regex::Regex;
use std::sync::LazyLock;

use crate::engine::context::CheckerContext;
use crate::types::{Priority, Rule, Suggestion};

use super::utils::has_version_specificity;
use super::Checker;

struct Tool {
    name: &'static str,
    mention: Regex,
    versioned: Regex,
}

fn tool(name: &'static str, pattern: &str) -> Tool {
    Tool {
        name,
        mention: Regex::new(&format!(r"(?i)\b{pattern}\b")).unwrap(),
        versioned: Regex::new(&format!(r"(?i)\b{pattern}\s*v?\d")).unwrap(),
    }
}

static TOOLS: LazyLock<Vec<Tool>> = LazyLock::new(|| {
    vec![
        tool("React", "react"),
        tool("Node.js", r"node(?:\.js)?"),
        tool("Python", "python"),
        tool("TypeScript", "typescript"),
        tool("Next.js", r"next\.js"),
    ]
});

/// Flags well-known runtimes and frameworks named without a version.
///
/// Only fires when the document carries no version-like token anywhere, so a
/// single `Node 20` elsewhere silences it for every tool.
pub struct ToolVersionChecker;

impl Checker for ToolVersionChecker {
    fn check(&self, ctx: &CheckerContext) -> Vec<Suggestion> {
        if has_version_specificity(ctx.raw) {
            return Vec::new();
        }

        let unversioned: Vec<&str> = TOOLS
            .iter()
            .filter(|t| t.mention.is_match(ctx.raw) && !t.versioned.is_match(ctx.raw))
            .map(|t| t.name)
            .collect();
        if unversioned.is_empty() {
            return Vec::new();
        }

        vec![Suggestion::tip(
            Rule::ToolWithoutVersion,
            Priority::Low,
            "Specify tool versions",
            format!(
                "{} mentioned without a version. Versions keep agents from suggesting \
                 APIs your project can't use.",
                unversioned.join(", ")
            ),
        )
        .with_suggestion("State the versions you target")
        .with_example("- Node.js 20\n- React 18\n- TypeScript 5.4")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_check(text: &str) -> Vec<Suggestion> {
        ToolVersionChecker.check(&CheckerContext::build(text))
    }

    #[test]
    fn test_unversioned_tools_fire() {
        let result = run_check("# Stack\nWe use React and TypeScript.\n");
        assert_eq!(result.len(), 1);
        assert!(result[0].message.starts_with("React, TypeScript"));
    }

    #[test]
    fn test_any_version_token_silences() {
        assert!(run_check("# Stack\nReact with Node 20.\n").is_empty());
        assert!(run_check("# Stack\nReact.\n## Step 1\n").is_empty());
    }

    #[test]
    fn test_adjacent_version_counts_per_tool() {
        // No spaced version token anywhere, so each tool is judged on its own.
        let text = "# Stack\nWe use React and Node.js18.\n";
        assert!(!has_version_specificity(text));
        let result = run_check(text);
        assert_eq!(result.len(), 1);
        assert!(result[0].message.starts_with("React mentioned"));
        assert!(!result[0].message.contains("Node.js"));
    }

    #[test]
    fn test_glued_version_is_not_a_mention() {
        let result = run_check("# Stack\nReact and Python3.\n");
        assert!(result[0].message.starts_with("React mentioned"));
        assert!(!result[0].message.contains("Python"));
    }

    #[test]
    fn test_no_tools_mentioned() {
        assert!(run_check("# Stack\nPlain Rust crate.\n").is_empty());
    }

    #[test]
    fn test_word_boundaries() {
        assert!(run_check("# Layout\nSee node_modules and reactive streams.\n").is_empty());
        let result = run_check("# Stack\nBuilt on Node.js and Next.js\n");
        assert!(result[0].message.starts_with("Node.js, Next.js"));
    }
}
