use owo_colors::OwoColorize;
use std::path::Path;

use crate::types::{FileReport, Priority, Suggestion, SuggestionKind};

pub fn render(reports: &[FileReport], project_root: &Path) {
    for report in reports {
        render_one(report, project_root);
    }
    println!();
}

fn score_label(score: u8) -> String {
    let text = format!("{score}/100");
    match score {
        80..=100 => text.green().bold().to_string(),
        40..=79 => text.yellow().bold().to_string(),
        _ => text.red().bold().to_string(),
    }
}

fn icon(s: &Suggestion) -> String {
    match (s.kind, s.priority) {
        (SuggestionKind::Success, _) => "\u{2713}".green().to_string(),
        (SuggestionKind::Info, _) => "\u{2139}".blue().to_string(),
        (SuggestionKind::Tip, Priority::High) => "\u{2717}".red().to_string(),
        (SuggestionKind::Tip, Priority::Medium) => "\u{26a0}".yellow().to_string(),
        (SuggestionKind::Tip, Priority::Low) => "\u{2022}".blue().to_string(),
    }
}

fn render_one(report: &FileReport, project_root: &Path) {
    let result = &report.result;
    let file = super::relative_path(&report.file, project_root);

    println!();
    println!("  {}", "\u{2501}".repeat(50).dimmed());
    println!("  {}  score {}", file.bold(), score_label(result.score));
    println!("  {}", result.summary);
    println!("  {}", "\u{2501}".repeat(50).dimmed());

    for s in &result.suggestions {
        println!();
        println!(
            "  {} {} {}",
            icon(s),
            s.title.bold(),
            format!("({}, {})", s.priority, s.rule).dimmed()
        );
        println!("    {}", s.message);
        if let Some(suggestion) = &s.suggestion {
            println!("    {} {suggestion}", "\u{2192}".dimmed());
        }
        if let Some(example) = &s.example {
            for line in example.lines() {
                println!("      {}", line.dimmed());
            }
        }
    }
}
