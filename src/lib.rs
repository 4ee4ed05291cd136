//! Advisory quality scoring for AI agent instruction files (AGENTS.md,
//! CLAUDE.md and friends).
//!
//! [`validate`] parses a document, runs a fixed catalogue of heuristic rules
//! over it, and returns a score with prioritized suggestions. It is a pure
//! function of its input and never fails.

pub mod checkers;
pub mod cli;
pub mod config;
pub mod engine;
pub mod parser;
pub mod types;

pub use checkers::utils::{
    detect_section_keywords, extract_commands, has_version_specificity, SectionKeywords,
};
pub use engine::{validate, validate_with};
pub use parser::{parse, ParsedMarkdown};
pub use types::{Priority, Rule, Suggestion, SuggestionKind, ValidationResult};
