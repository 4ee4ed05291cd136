use crate::checkers::well_formed;
use crate::parser::types::ParsedMarkdown;
use crate::types::{Priority, Suggestion};

const MAX_SCORE: i32 = 100;
const BONUS: i32 = 5;
const MIN_SECTIONS_FOR_BONUS: usize = 3;

pub const SUMMARY_WELL_FORMED: &str =
    "Excellent! Your instruction file is well-structured and covers the essentials.";
pub const SUMMARY_LOOKS_GOOD: &str = "Looks good! A few tweaks could make it even better.";
pub const SUMMARY_GOOD_BASICS: &str =
    "Good basics in place. Work through the suggestions below to improve it.";
pub const SUMMARY_NEEDS_WORK: &str =
    "Needs some work. Focus on the high-priority suggestions first.";
pub const SUMMARY_HIGH_PRIORITY: &str =
    "Start by addressing the high-priority suggestions below.";
pub const SUMMARY_ADD_CONTENT: &str =
    "Add more content to give agents the context they need.";

/// Deductions for every non-success suggestion (floored at zero), then
/// structural bonuses, capped at 100.
pub fn compute(suggestions: &[Suggestion], parsed: &ParsedMarkdown) -> u8 {
    let deductions: i32 = suggestions
        .iter()
        .filter(|s| !s.is_success())
        .map(|s| s.priority.deduction())
        .sum();
    let mut score = (MAX_SCORE - deductions).max(0);

    if parsed.sections.len() >= MIN_SECTIONS_FOR_BONUS {
        score += BONUS;
    }
    if !parsed.code_blocks.is_empty() {
        score += BONUS;
    }
    if (well_formed::MIN_LINES..=well_formed::MAX_LINES).contains(&parsed.line_count) {
        score += BONUS;
    }

    // Bounded to 0..=100 above.
    score.min(MAX_SCORE) as u8
}

/// First matching verdict wins.
pub fn summarize(suggestions: &[Suggestion], score: u8) -> &'static str {
    if suggestions.iter().any(Suggestion::is_success) {
        SUMMARY_WELL_FORMED
    } else if score >= 80 {
        SUMMARY_LOOKS_GOOD
    } else if score >= 60 {
        SUMMARY_GOOD_BASICS
    } else if score >= 40 {
        SUMMARY_NEEDS_WORK
    } else if suggestions
        .iter()
        .any(|s| !s.is_success() && s.priority == Priority::High)
    {
        SUMMARY_HIGH_PRIORITY
    } else {
        SUMMARY_ADD_CONTENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::types::{CodeBlock, Section};
    use crate::types::{Rule, SuggestionKind};

    fn tip(priority: Priority) -> Suggestion {
        Suggestion::tip(Rule::EmptySection, priority, "t", "m")
    }

    fn success() -> Suggestion {
        Suggestion::new(Rule::WellFormed, SuggestionKind::Success, Priority::High, "t", "m")
    }

    fn parsed(sections: usize, code_blocks: usize, line_count: usize) -> ParsedMarkdown {
        ParsedMarkdown {
            sections: (0..sections)
                .map(|i| Section {
                    title: format!("S{i}"),
                    level: 2,
                    line: i + 1,
                    content: String::new(),
                })
                .collect(),
            headings: vec![],
            code_blocks: (0..code_blocks)
                .map(|i| CodeBlock {
                    language: "text".into(),
                    code: String::new(),
                    line: i + 1,
                })
                .collect(),
            line_count,
            character_count: 0,
        }
    }

    #[test]
    fn test_deductions_per_priority() {
        let bare = parsed(0, 0, 1);
        assert_eq!(compute(&[tip(Priority::High)], &bare), 85);
        assert_eq!(compute(&[tip(Priority::Medium)], &bare), 92);
        assert_eq!(compute(&[tip(Priority::Low)], &bare), 97);
    }

    #[test]
    fn test_success_not_deducted() {
        assert_eq!(compute(&[success()], &parsed(0, 0, 1)), 100);
    }

    #[test]
    fn test_floor_then_bonuses() {
        let many = vec![tip(Priority::High); 8];
        assert_eq!(compute(&many, &parsed(0, 0, 1)), 0);
        // Bonuses are added after flooring, so a floored score can recover.
        assert_eq!(compute(&many, &parsed(3, 1, 20)), 15);
    }

    #[test]
    fn test_bonuses_capped() {
        assert_eq!(compute(&[], &parsed(5, 2, 50)), 100);
        assert_eq!(compute(&[tip(Priority::Low)], &parsed(5, 2, 50)), 100);
        assert_eq!(compute(&[tip(Priority::Medium)], &parsed(5, 2, 50)), 100);
        assert_eq!(compute(&[tip(Priority::High)], &parsed(5, 2, 50)), 100);
        assert_eq!(
            compute(&[tip(Priority::High), tip(Priority::Low)], &parsed(5, 2, 50)),
            97
        );
    }

    #[test]
    fn test_length_bonus_window() {
        assert_eq!(compute(&[tip(Priority::High)], &parsed(0, 0, 9)), 85);
        assert_eq!(compute(&[tip(Priority::High)], &parsed(0, 0, 10)), 90);
        assert_eq!(compute(&[tip(Priority::High)], &parsed(0, 0, 150)), 90);
        assert_eq!(compute(&[tip(Priority::High)], &parsed(0, 0, 151)), 85);
    }

    #[test]
    fn test_summary_thresholds() {
        assert_eq!(summarize(&[success()], 10), SUMMARY_WELL_FORMED);
        assert_eq!(summarize(&[], 80), SUMMARY_LOOKS_GOOD);
        assert_eq!(summarize(&[], 79), SUMMARY_GOOD_BASICS);
        assert_eq!(summarize(&[], 60), SUMMARY_GOOD_BASICS);
        assert_eq!(summarize(&[], 40), SUMMARY_NEEDS_WORK);
        assert_eq!(summarize(&[tip(Priority::High)], 39), SUMMARY_HIGH_PRIORITY);
        assert_eq!(summarize(&[tip(Priority::Low)], 39), SUMMARY_ADD_CONTENT);
    }
}
