use serde::Serialize;
use std::path::Path;

use crate::types::{FileReport, Suggestion};

#[derive(Serialize)]
struct JsonOutput<'a> {
    files: Vec<JsonFile<'a>>,
}

#[derive(Serialize)]
struct JsonFile<'a> {
    file: String,
    score: u8,
    summary: &'a str,
    suggestions: &'a [Suggestion],
}

fn build_output<'a>(reports: &'a [FileReport], project_root: &Path) -> JsonOutput<'a> {
    let files = reports
        .iter()
        .map(|r| JsonFile {
            file: super::relative_path(&r.file, project_root),
            score: r.result.score,
            summary: &r.result.summary,
            suggestions: &r.result.suggestions,
        })
        .collect();

    JsonOutput { files }
}

pub fn render(reports: &[FileReport], project_root: &Path) {
    let output = build_output(reports, project_root);
    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{json}"),
        Err(e) => tracing::error!("failed to serialize report: {e}"),
    }
}
