use std::path::Path;

use crate::types::{FileReport, Priority};

/// Workflow annotations. Never `::error`, so a check step stays green.
pub fn render(reports: &[FileReport], project_root: &Path) {
    for report in reports {
        let rel = super::relative_path(&report.file, project_root);

        for s in report.result.suggestions.iter().filter(|s| !s.is_success()) {
            let level = match s.priority {
                Priority::High => "warning",
                Priority::Medium | Priority::Low => "notice",
            };

            println!(
                "::{level} file={rel},title={rule}::{title}: {message}",
                rule = s.rule,
                title = s.title,
                message = s.message,
            );
        }
    }
}
