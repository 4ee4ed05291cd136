pub mod types;

use regex::Regex;
use std::sync::LazyLock;

pub use types::{CodeBlock, Heading, ParsedMarkdown, Section};

static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").unwrap());

const FENCE: &str = "```";

fn is_fence(line: &str) -> bool {
    line.trim().starts_with(FENCE)
}

/// Iterate over lines outside fenced code blocks, yielding `(zero_based_index, line)` pairs.
/// Fence markers themselves are skipped.
pub(crate) fn non_code_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut in_code_block = false;
    text.split('\n').enumerate().filter_map(move |(i, line)| {
        if is_fence(line) {
            in_code_block = !in_code_block;
            return None;
        }
        if in_code_block {
            return None;
        }
        Some((i, line))
    })
}

/// Returns `(level, text)` if the line is an ATX heading with non-empty text.
fn match_heading(line: &str) -> Option<(u8, &str)> {
    let caps = HEADING.captures(line)?;
    let text = caps.get(2)?.as_str().trim();
    if text.is_empty() {
        return None;
    }
    // The regex caps the marker at six characters.
    let level = caps[1].len() as u8;
    Some((level, text))
}

/// Parse raw text into headings, sections and fenced code blocks.
///
/// Single forward pass with one bit of state (inside or outside a fence).
/// Never fails: any input yields a valid, possibly empty, result. A code
/// block whose closing fence never appears is dropped.
pub fn parse(text: &str) -> ParsedMarkdown {
    let mut headings = Vec::new();
    let mut sections = Vec::new();
    let mut code_blocks = Vec::new();

    let mut current_section: Option<Section> = None;
    let mut current_block: Option<CodeBlock> = None;
    let mut line_count = 0;

    for (i, line) in text.split('\n').enumerate() {
        let line_num = i + 1;
        line_count += 1;

        if is_fence(line) {
            match current_block.take() {
                Some(block) => code_blocks.push(block),
                None => {
                    let label = line.trim()[FENCE.len()..].trim();
                    current_block = Some(CodeBlock {
                        language: if label.is_empty() {
                            "text".to_string()
                        } else {
                            label.to_string()
                        },
                        code: String::new(),
                        line: line_num,
                    });
                }
            }
            continue;
        }

        if let Some(block) = current_block.as_mut() {
            block.code.push_str(line);
            block.code.push('\n');
            continue;
        }

        if let Some((level, title)) = match_heading(line) {
            headings.push(Heading {
                text: title.to_string(),
                level,
                line: line_num,
            });
            if let Some(done) = current_section.replace(Section {
                title: title.to_string(),
                level,
                line: line_num,
                content: String::new(),
            }) {
                sections.push(done);
            }
        } else if let Some(section) = current_section.as_mut() {
            section.content.push_str(line);
            section.content.push('\n');
        }
    }

    sections.extend(current_section);

    ParsedMarkdown {
        sections,
        headings,
        code_blocks,
        line_count,
        character_count: text.chars().count(),
    }
}
