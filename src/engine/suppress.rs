use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::parser::non_code_lines;
use crate::types::Rule;

static SUPPRESS_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!--\s*agentscore-disable\s+([\w\s-]+?)\s*-->").unwrap());

/// Rules switched off by `<!-- agentscore-disable <rule>... -->` comments
/// outside code fences. Unknown rule ids are ignored.
pub fn disabled_rules(text: &str) -> HashSet<Rule> {
    non_code_lines(text)
        .flat_map(|(_, line)| SUPPRESS_COMMENT.captures_iter(line))
        .flat_map(|caps| {
            caps.get(1)
                .map(|m| m.as_str())
                .unwrap_or_default()
                .split_whitespace()
                .filter_map(Rule::from_id)
                .collect::<Vec<_>>()
        })
        .filter(|rule| *rule != Rule::GetStarted)
        .collect()
}
