pub mod essential_sections;
pub mod headings;
pub mod inline_commands;
pub mod length;
pub mod readability;
pub mod tool_version;
pub mod utils;
pub mod well_formed;

use crate::config::Config;
use crate::engine::context::CheckerContext;
use crate::types::Suggestion;

pub trait Checker: Send + Sync {
    fn check(&self, ctx: &CheckerContext) -> Vec<Suggestion>;
}

/// Enabled checkers in catalogue order. The engine's stable sort keeps this
/// order among suggestions of equal priority.
pub fn all_checkers(config: &Config) -> Vec<Box<dyn Checker>> {
    let rules = &config.rules;
    let mut checkers: Vec<Box<dyn Checker>> = Vec::new();

    if rules.length.enabled {
        checkers.push(Box::new(length::LengthChecker::new(&rules.length)));
    }
    if rules.no_headings.enabled {
        checkers.push(Box::new(headings::NoHeadingsChecker));
    }
    if rules.essential_sections.enabled {
        checkers.push(Box::new(essential_sections::EssentialSectionsChecker));
    }
    if rules.inline_commands.enabled {
        checkers.push(Box::new(inline_commands::InlineCommandsChecker::new(
            &rules.inline_commands,
        )));
    }
    if rules.tool_version.enabled {
        checkers.push(Box::new(tool_version::ToolVersionChecker));
    }
    if rules.multiple_h1.enabled {
        checkers.push(Box::new(headings::MultipleH1Checker));
    }
    if rules.readability.enabled {
        checkers.push(Box::new(readability::LongSectionChecker::new(
            &rules.readability,
        )));
        checkers.push(Box::new(readability::EmptySectionChecker::new(
            &rules.readability,
        )));
    }
    if rules.well_formed.enabled {
        checkers.push(Box::new(well_formed::WellFormedChecker));
    }

    checkers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_enables_everything() {
        assert_eq!(all_checkers(&Config::default()).len(), 9);
    }

    #[test]
    fn test_disabled_checkers_skipped() {
        let config: Config = toml::from_str(
            r#"
[rules.readability]
enabled = false

[rules.well_formed]
enabled = false
"#,
        )
        .unwrap();
        assert_eq!(all_checkers(&config).len(), 6);
    }
}
