use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::parser::types::Section;

static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`\n]+)`").unwrap());

/// Word, whitespace, then a version number such as `18`, `v20.1` or `3.12.0`.
static VERSION_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z]+\s+v?\d+(?:\.\d+)*\b").unwrap());

const TOOL_PREFIXES: &[&str] = &[
    "npm ", "pnpm ", "yarn ", "bun ", "git ", "docker ", "make ",
];

const COMMAND_WORDS: &[&str] = &["test", "build", "dev", "start"];

fn keyword_regex(words: &str) -> Regex {
    Regex::new(&format!(r"(?i)\b(?:{words})\b")).unwrap()
}

static SETUP_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    keyword_regex(r"setup|set\s+up|install|installation|dependencies|requirements|prerequisites|getting\s+started|dev\s+environment")
});
static TESTING_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    keyword_regex(r"test|tests|testing|jest|vitest|pytest|mocha|cypress|playwright|coverage")
});
static CODE_STYLE_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    keyword_regex(r"style|code\s+style|conventions?|lint|linting|eslint|prettier|formatting|naming")
});
static ARCHITECTURE_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    keyword_regex(r"architecture|project\s+structure|structure|directory|directories|folders?|modules?|organization")
});
static SECURITY_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    keyword_regex(r"security|secrets?|credentials|api\s+keys?|authentication|auth|permissions|vulnerabilit(?:y|ies)")
});
static GIT_WORKFLOW_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    keyword_regex(r"git|commits?|branch(?:es)?|pull\s+requests?|PRs?|merge|rebase|workflow")
});

/// Topics an instruction file is expected to cover.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SectionKeywords {
    pub has_setup: bool,
    pub has_testing: bool,
    pub has_code_style: bool,
    pub has_architecture: bool,
    pub has_security: bool,
    pub has_git_workflow: bool,
}

impl SectionKeywords {
    /// How many of setup, testing and code style are present.
    pub fn essential_count(&self) -> usize {
        [self.has_setup, self.has_testing, self.has_code_style]
            .iter()
            .filter(|&&b| b)
            .count()
    }
}

/// Inline backtick spans that look like shell commands, in order of appearance.
pub fn extract_commands(text: &str) -> Vec<String> {
    INLINE_CODE
        .captures_iter(text)
        .map(|cap| cap[1].to_string())
        .filter(|span| is_command(span))
        .collect()
}

fn is_command(span: &str) -> bool {
    span.contains(' ')
        || TOOL_PREFIXES.iter().any(|p| span.starts_with(p))
        || COMMAND_WORDS.iter().any(|w| span.contains(w))
}

/// True if anything in the text looks like `<word> <version>`.
pub fn has_version_specificity(text: &str) -> bool {
    VERSION_MENTION.is_match(text)
}

pub fn detect_section_keywords(text: &str) -> SectionKeywords {
    SectionKeywords {
        has_setup: SETUP_WORDS.is_match(text),
        has_testing: TESTING_WORDS.is_match(text),
        has_code_style: CODE_STYLE_WORDS.is_match(text),
        has_architecture: ARCHITECTURE_WORDS.is_match(text),
        has_security: SECURITY_WORDS.is_match(text),
        has_git_workflow: GIT_WORKFLOW_WORDS.is_match(text),
    }
}

/// Section titles and bodies joined into one searchable string.
pub fn sections_text(sections: &[Section]) -> String {
    let mut buf = String::new();
    for section in sections {
        buf.push_str(&section.title);
        buf.push('\n');
        buf.push_str(&section.content);
        buf.push('\n');
    }
    buf
}

/// Render up to three section titles, then "and N more".
pub fn list_titles<'a>(titles: impl IntoIterator<Item = &'a str>) -> String {
    const SHOWN: usize = 3;
    let titles: Vec<&str> = titles.into_iter().collect();
    let mut out = titles
        .iter()
        .take(SHOWN)
        .map(|t| format!("\"{t}\""))
        .collect::<Vec<_>>()
        .join(", ");
    if titles.len() > SHOWN {
        out.push_str(&format!(" and {} more", titles.len() - SHOWN));
    }
    out
}
