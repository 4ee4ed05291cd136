use crate::types::Rule;

pub const AVAILABLE_RULES: &[(Rule, &str)] = &[
    (Rule::GetStarted, "Shown instead of any other rule for empty input"),
    (Rule::LengthTooLong, "File exceeds 200 lines"),
    (Rule::LengthGettingLong, "File is between 151 and 200 lines"),
    (Rule::MinimumContent, "File has fewer than 5 lines"),
    (Rule::NoHeadings, "File has no Markdown headings"),
    (Rule::MissingSetup, "No section mentions setup or installation"),
    (Rule::MissingTesting, "No section mentions testing"),
    (Rule::MissingCodeStyle, "No section mentions code style or conventions"),
    (Rule::InlineCommands, "Many inline commands and no code blocks"),
    (Rule::ToolWithoutVersion, "Well-known tools named without versions"),
    (Rule::MultipleH1, "More than one level-1 heading"),
    (Rule::LongSection, "A section runs past 50 lines"),
    (Rule::EmptySection, "A section has little or no content"),
    (Rule::WellFormed, "Positive feedback for a concise, complete file"),
];

pub fn list_rules() -> String {
    use std::fmt::Write;
    let mut out = String::from("Available rules:\n\n");
    for (rule, desc) in AVAILABLE_RULES {
        let _ = writeln!(out, "  {:<24} {desc}", rule.id());
    }
    out.push_str("\nRun `agentscore explain <rule>` for details.");
    out
}

pub fn explain(rule: &str) -> Option<&'static str> {
    match Rule::from_id(rule)? {
        Rule::GetStarted => Some(
            "get-started: Returned alone, with score 0, when the input is empty or whitespace.\n\
             \n\
             No other rule runs on an empty document.\n\
             \n\
             Priority: high",
        ),
        Rule::LengthTooLong => Some(
            "length-too-long: Flags files longer than 200 lines.\n\
             \n\
             Agents read the whole file into context on every task. Past a few hundred lines the\n\
             important instructions compete with reference material, and agents start missing\n\
             them. Move detail into linked docs and keep the root file focused.\n\
             \n\
             Priority: medium\n\
             Config: [rules.length] (max_lines)",
        ),
        Rule::LengthGettingLong => Some(
            "length-getting-long: Flags files between 151 and 200 lines.\n\
             \n\
             An early nudge before the file becomes too long to stay effective.\n\
             \n\
             Priority: low\n\
             Config: [rules.length] (warn_lines)",
        ),
        Rule::MinimumContent => Some(
            "minimum-content: Flags files with fewer than 5 lines.\n\
             \n\
             A stub gives agents nothing to work with. At minimum describe setup, testing and\n\
             the conventions to follow.\n\
             \n\
             Priority: medium\n\
             Config: [rules.length] (min_lines)",
        ),
        Rule::NoHeadings => Some(
            "no-headings: Flags files without any Markdown heading.\n\
             \n\
             Headings are how agents locate the part of the file relevant to the current task.\n\
             Headings inside fenced code blocks do not count.\n\
             \n\
             Priority: high\n\
             Config: [rules.no_headings]",
        ),
        Rule::MissingSetup => Some(
            "missing-setup: No section title or body mentions setup vocabulary\n\
             (setup, install, dependencies, requirements, getting started, dev environment).\n\
             \n\
             Without setup steps agents guess at package managers and environment variables.\n\
             \n\
             Priority: high\n\
             Config: [rules.essential_sections]",
        ),
        Rule::MissingTesting => Some(
            "missing-testing: No section mentions testing (test, testing, jest, pytest, ...).\n\
             \n\
             Agents that know how to run the tests verify their own changes.\n\
             \n\
             Priority: medium\n\
             Config: [rules.essential_sections]",
        ),
        Rule::MissingCodeStyle => Some(
            "missing-code-style: No section mentions style (style, conventions, lint, prettier, ...).\n\
             \n\
             Without stated conventions agents fall back to their own defaults, which rarely\n\
             match the codebase.\n\
             \n\
             Priority: low\n\
             Config: [rules.essential_sections]",
        ),
        Rule::InlineCommands => Some(
            "inline-commands: More than 5 inline commands and no fenced code block.\n\
             \n\
             An inline span counts as a command when it contains a space, starts with a known\n\
             tool (npm, pnpm, yarn, bun, git, docker, make), or contains test, build, dev or\n\
             start. Fenced blocks are easier to copy and run verbatim.\n\
             \n\
             Priority: low\n\
             Config: [rules.inline_commands] (max_inline)",
        ),
        Rule::ToolWithoutVersion => Some(
            "tool-without-version: React, Node.js, Python, TypeScript or Next.js is named\n\
             without a version.\n\
             \n\
             Only fires when the file contains no version-like token at all (a word followed\n\
             by a number such as `Node 20`), so one explicit version anywhere silences it.\n\
             \n\
             Priority: low\n\
             Config: [rules.tool_version]",
        ),
        Rule::MultipleH1 => Some(
            "multiple-h1: More than one level-1 heading.\n\
             \n\
             One title with level-2 sections gives a clearer hierarchy.\n\
             \n\
             Priority: low (informational)\n\
             Config: [rules.multiple_h1]",
        ),
        Rule::LongSection => Some(
            "long-section: A section's body runs past 50 lines.\n\
             \n\
             Long sections bury the one instruction an agent needs. Split them into\n\
             subsections with their own headings.\n\
             \n\
             Priority: low\n\
             Config: [rules.readability] (max_section_lines)",
        ),
        Rule::EmptySection => Some(
            "empty-section: A section's body is under 10 characters once trimmed.\n\
             \n\
             Empty headings promise guidance that is not there. Code blocks do not count\n\
             toward the body.\n\
             \n\
             Priority: medium\n\
             Config: [rules.readability] (min_section_chars)",
        ),
        Rule::WellFormed => Some(
            "well-formed: Positive feedback, reported when the file is 10 to 150 lines, has at\n\
             least 3 sections, includes commands or code blocks, and covers at least two of\n\
             setup, testing and code style.\n\
             \n\
             Success suggestions never lower the score.\n\
             \n\
             Config: [rules.well_formed]",
        ),
    }
}
