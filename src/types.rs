use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Display category of a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Tip,
    Info,
    Success,
}

impl std::fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            SuggestionKind::Tip => "tip",
            SuggestionKind::Info => "info",
            SuggestionKind::Success => "success",
        })
    }
}

/// Ordered so that `High < Medium < Low`: sorting ascending puts the most
/// urgent suggestions first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    /// Points subtracted from the score for a non-success suggestion.
    pub const fn deduction(self) -> i32 {
        match self {
            Priority::High => 15,
            Priority::Medium => 8,
            Priority::Low => 3,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    GetStarted,
    LengthTooLong,
    LengthGettingLong,
    MinimumContent,
    NoHeadings,
    MissingSetup,
    MissingTesting,
    MissingCodeStyle,
    InlineCommands,
    ToolWithoutVersion,
    MultipleH1,
    LongSection,
    EmptySection,
    WellFormed,
}

impl Rule {
    pub const ALL: &'static [Rule] = &[
        Rule::GetStarted,
        Rule::LengthTooLong,
        Rule::LengthGettingLong,
        Rule::MinimumContent,
        Rule::NoHeadings,
        Rule::MissingSetup,
        Rule::MissingTesting,
        Rule::MissingCodeStyle,
        Rule::InlineCommands,
        Rule::ToolWithoutVersion,
        Rule::MultipleH1,
        Rule::LongSection,
        Rule::EmptySection,
        Rule::WellFormed,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Rule::GetStarted => "get-started",
            Rule::LengthTooLong => "length-too-long",
            Rule::LengthGettingLong => "length-getting-long",
            Rule::MinimumContent => "minimum-content",
            Rule::NoHeadings => "no-headings",
            Rule::MissingSetup => "missing-setup",
            Rule::MissingTesting => "missing-testing",
            Rule::MissingCodeStyle => "missing-code-style",
            Rule::InlineCommands => "inline-commands",
            Rule::ToolWithoutVersion => "tool-without-version",
            Rule::MultipleH1 => "multiple-h1",
            Rule::LongSection => "long-section",
            Rule::EmptySection => "empty-section",
            Rule::WellFormed => "well-formed",
        }
    }

    pub fn from_id(id: &str) -> Option<Rule> {
        Rule::ALL.iter().copied().find(|r| r.id() == id)
    }
}

impl Serialize for Rule {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// One unit of advisory feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub rule: Rule,
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub title: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    pub priority: Priority,
}

impl Suggestion {
    pub fn new(
        rule: Rule,
        kind: SuggestionKind,
        priority: Priority,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule,
            kind,
            title: title.into(),
            message: message.into(),
            suggestion: None,
            example: None,
            priority,
        }
    }

    pub fn tip(
        rule: Rule,
        priority: Priority,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(rule, SuggestionKind::Tip, priority, title, message)
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    #[must_use]
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    pub fn is_success(&self) -> bool {
        self.kind == SuggestionKind::Success
    }
}

/// Outcome of one validation run. Always built fresh from the input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub suggestions: Vec<Suggestion>,
    pub score: u8,
    pub summary: String,
}

impl ValidationResult {
    pub fn count_by_priority(&self, priority: Priority) -> usize {
        self.suggestions
            .iter()
            .filter(|s| !s.is_success() && s.priority == priority)
            .count()
    }

    pub fn has_success(&self) -> bool {
        self.suggestions.iter().any(Suggestion::is_success)
    }
}

/// Validation outcome for one file handled by the command-line front end.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub file: PathBuf,
    pub result: ValidationResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_suggestion(kind: SuggestionKind, priority: Priority) -> Suggestion {
        Suggestion::new(Rule::EmptySection, kind, priority, "title", "message")
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::High < Priority::Medium);
        assert!(Priority::Medium < Priority::Low);
        assert_eq!(Priority::High.rank(), 0);
        assert_eq!(Priority::Medium.rank(), 1);
        assert_eq!(Priority::Low.rank(), 2);
    }

    #[test]
    fn test_priority_deductions() {
        assert_eq!(Priority::High.deduction(), 15);
        assert_eq!(Priority::Medium.deduction(), 8);
        assert_eq!(Priority::Low.deduction(), 3);
    }

    #[test]
    fn test_rule_ids_round_trip() {
        for rule in Rule::ALL {
            assert_eq!(Rule::from_id(rule.id()), Some(*rule));
        }
        assert_eq!(Rule::from_id("no-such-rule"), None);
    }

    #[test]
    fn test_suggestion_serialization() {
        let s = make_suggestion(SuggestionKind::Tip, Priority::High)
            .with_suggestion("do this")
            .with_example("like so");
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["rule"], "empty-section");
        assert_eq!(json["type"], "tip");
        assert_eq!(json["priority"], "high");
        assert_eq!(json["suggestion"], "do this");
        assert_eq!(json["example"], "like so");
    }

    #[test]
    fn test_optional_fields_omitted() {
        let s = make_suggestion(SuggestionKind::Info, Priority::Low);
        let json = serde_json::to_value(&s).unwrap();
        assert!(json.get("suggestion").is_none());
        assert!(json.get("example").is_none());
    }

    #[test]
    fn test_count_by_priority_ignores_success() {
        let result = ValidationResult {
            suggestions: vec![
                make_suggestion(SuggestionKind::Success, Priority::High),
                make_suggestion(SuggestionKind::Tip, Priority::High),
                make_suggestion(SuggestionKind::Tip, Priority::Low),
            ],
            score: 90,
            summary: String::new(),
        };
        assert_eq!(result.count_by_priority(Priority::High), 1);
        assert_eq!(result.count_by_priority(Priority::Low), 1);
        assert_eq!(result.count_by_priority(Priority::Medium), 0);
        assert!(result.has_success());
    }

    #[test]
    fn test_display() {
        assert_eq!(Priority::Medium.to_string(), "medium");
        assert_eq!(SuggestionKind::Success.to_string(), "success");
        assert_eq!(Rule::MultipleH1.to_string(), "multiple-h1");
    }
}
