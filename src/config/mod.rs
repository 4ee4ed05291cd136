use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_FILE: &str = ".agentscorerc.toml";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub include: Vec<String>,
    pub ignore: Vec<String>,
    pub rules: RulesConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub length: LengthConfig,
    pub no_headings: ToggleConfig,
    pub essential_sections: ToggleConfig,
    pub inline_commands: InlineCommandsConfig,
    pub tool_version: ToggleConfig,
    pub multiple_h1: ToggleConfig,
    pub readability: ReadabilityConfig,
    pub well_formed: ToggleConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ToggleConfig {
    pub enabled: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LengthConfig {
    pub enabled: bool,
    pub warn_lines: usize,
    pub max_lines: usize,
    pub min_lines: usize,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct InlineCommandsConfig {
    pub enabled: bool,
    pub max_inline: usize,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ReadabilityConfig {
    pub enabled: bool,
    pub max_section_lines: usize,
    pub min_section_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            include: vec![
                "CLAUDE.md".into(),
                "AGENTS.md".into(),
                ".claude/**".into(),
                ".github/copilot-instructions.md".into(),
            ],
            ignore: vec!["node_modules".into(), ".git".into(), "target".into()],
            rules: RulesConfig::default(),
        }
    }
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for LengthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            warn_lines: 150,
            max_lines: 200,
            min_lines: 5,
        }
    }
}

impl Default for InlineCommandsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_inline: 5,
        }
    }
}

impl Default for ReadabilityConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_section_lines: 50,
            min_section_chars: 10,
        }
    }
}

impl Config {
    pub fn load(config_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let path = config_path.map(Path::to_path_buf).or_else(|| {
            let default = project_root.join(CONFIG_FILE);
            default.exists().then_some(default)
        });

        match path {
            Some(path) => {
                let content = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                toml::from_str(&content).map_err(|e| anyhow::anyhow!("Config parse error: {e}"))
            }
            None => Ok(Config::default()),
        }
    }

    pub const fn default_toml() -> &'static str {
        r#"# agentscore configuration

# Which files `agentscore check <dir>` picks up (glob patterns, case-insensitive).
include = ["CLAUDE.md", "AGENTS.md", ".claude/**", ".github/copilot-instructions.md"]

# Directories to ignore when scanning
ignore = ["node_modules", ".git", "target"]

[rules.length]
enabled = true
warn_lines = 150
max_lines = 200
min_lines = 5

[rules.no_headings]
enabled = true

# missing-setup, missing-testing, missing-code-style
[rules.essential_sections]
enabled = true

[rules.inline_commands]
enabled = true
max_inline = 5

[rules.tool_version]
enabled = true

[rules.multiple_h1]
enabled = true

# long-section, empty-section
[rules.readability]
enabled = true
max_section_lines = 50
min_section_chars = 10

[rules.well_formed]
enabled = true

# Individual rules can also be switched off inside a document:
# <!-- agentscore-disable tool-without-version multiple-h1 -->
"#
    }
}
