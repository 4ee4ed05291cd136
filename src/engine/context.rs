use crate::checkers::utils::{detect_section_keywords, sections_text, SectionKeywords};
use crate::parser::types::ParsedMarkdown;

/// Everything a checker may look at for one document.
pub struct CheckerContext<'a> {
    pub raw: &'a str,
    pub parsed: ParsedMarkdown,
    /// Topic scan over section titles and bodies, shared by several rules.
    pub keywords: SectionKeywords,
}

impl<'a> CheckerContext<'a> {
    pub fn build(raw: &'a str) -> Self {
        let parsed = crate::parser::parse(raw);
        let keywords = detect_section_keywords(&sections_text(&parsed.sections));
        Self {
            raw,
            parsed,
            keywords,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_come_from_sections_only() {
        // Text before the first heading belongs to no section.
        let ctx = CheckerContext::build("Install everything first.\n\n# Overview\nA tool.\n");
        assert!(!ctx.keywords.has_setup);
        assert_eq!(ctx.parsed.sections.len(), 1);
    }

    #[test]
    fn test_keywords_include_titles() {
        let ctx = CheckerContext::build("# Testing\n\nnothing else\n");
        assert!(ctx.keywords.has_testing);
    }
}
