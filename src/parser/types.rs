use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub text: String,
    pub level: u8,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
    /// Fence label, `"text"` when the opening fence has none.
    pub language: String,
    /// Every line between the fences, each with its trailing newline.
    pub code: String,
    /// Line of the opening fence.
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    pub level: u8,
    pub line: usize,
    pub content: String,
}

/// Immutable structural snapshot of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedMarkdown {
    pub sections: Vec<Section>,
    pub headings: Vec<Heading>,
    pub code_blocks: Vec<CodeBlock>,
    pub line_count: usize,
    pub character_count: usize,
}

impl ParsedMarkdown {
    pub fn h1_count(&self) -> usize {
        self.headings.iter().filter(|h| h.level == 1).count()
    }
}
