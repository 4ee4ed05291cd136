pub mod context;
pub mod scanner;
pub mod score;
mod suppress;

use anyhow::Result;
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::PathBuf;

use crate::checkers;
use crate::config::Config;
use crate::types::{FileReport, Priority, Rule, Suggestion, ValidationResult};
use context::CheckerContext;

pub const SUMMARY_EMPTY: &str = "Start writing your instruction file to see suggestions.";

/// Validate with the default rule configuration. Every rule runs;
/// `agentscore-disable` comments are not honored here.
pub fn validate(content: &str) -> ValidationResult {
    evaluate(content, &Config::default(), false)
}

/// Configured run used by the CLI: disabled rules are skipped and
/// `agentscore-disable` comments in the document drop the rules they name.
pub fn validate_with(content: &str, config: &Config) -> ValidationResult {
    evaluate(content, config, true)
}

/// Parse once, run every enabled checker once, then sort, score and summarize.
/// Total over any input string.
fn evaluate(content: &str, config: &Config, inline_suppression: bool) -> ValidationResult {
    if content.trim().is_empty() {
        return get_started();
    }

    let ctx = CheckerContext::build(content);
    let disabled = if inline_suppression {
        suppress::disabled_rules(content)
    } else {
        HashSet::new()
    };

    let mut suggestions: Vec<Suggestion> = checkers::all_checkers(config)
        .iter()
        .flat_map(|checker| checker.check(&ctx))
        .filter(|s| !disabled.contains(&s.rule))
        .collect();

    // Stable: equal priorities keep catalogue order.
    suggestions.sort_by_key(|s| s.priority);

    let score = score::compute(&suggestions, &ctx.parsed);
    let summary = score::summarize(&suggestions, score).to_string();

    tracing::debug!(
        lines = ctx.parsed.line_count,
        sections = ctx.parsed.sections.len(),
        code_blocks = ctx.parsed.code_blocks.len(),
        suggestions = suggestions.len(),
        suppressed = disabled.len(),
        score,
        "validated document"
    );

    ValidationResult {
        suggestions,
        score,
        summary,
    }
}

/// Validate every target: directories are scanned for instruction files,
/// plain paths are taken as-is. Files are read and validated in parallel;
/// unreadable ones are logged and skipped.
pub fn run(targets: &[PathBuf], config: &Config) -> Result<Vec<FileReport>> {
    let mut paths = Vec::new();
    for target in targets {
        if target.is_dir() {
            let found = scanner::scan(target, config);
            if found.is_empty() {
                anyhow::bail!("No instruction files found in {}", target.display());
            }
            paths.extend(found);
        } else {
            paths.push(target.clone());
        }
    }

    let reports: Vec<FileReport> = paths
        .par_iter()
        .filter_map(|p| match std::fs::read_to_string(p) {
            Ok(content) => Some(FileReport {
                file: p.clone(),
                result: validate_with(&content, config),
            }),
            Err(e) => {
                tracing::warn!("skipping {}: {e}", p.display());
                None
            }
        })
        .collect();

    if reports.is_empty() {
        anyhow::bail!("None of the given files could be read");
    }

    Ok(reports)
}

fn get_started() -> ValidationResult {
    ValidationResult {
        suggestions: vec![Suggestion::tip(
            Rule::GetStarted,
            Priority::High,
            "Get started",
            "Write or paste your AGENTS.md content to get feedback on its structure \
             and coverage.",
        )
        .with_suggestion("Begin with a title, then add Setup, Testing and Code Style sections")
        .with_example("# My Project\n\n## Setup\n- Install: `pnpm install`\n\n## Testing\n- Run: `pnpm test`")],
        score: 0,
        summary: SUMMARY_EMPTY.to_string(),
    }
}
