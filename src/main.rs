use agentscore::cli::{Cli, Commands};
use agentscore::config::{Config, CONFIG_FILE};
use agentscore::engine;
use agentscore::types::FileReport;
use anyhow::{Context, Result};

use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            paths,
            format,
            config,
        } => {
            let cwd = std::env::current_dir()?;
            let project_root = match paths.as_slice() {
                [dir] if dir.is_dir() => dir.canonicalize().unwrap_or_else(|_| dir.clone()),
                _ => cwd,
            };
            let cfg = Config::load(config.as_deref(), &project_root)?;

            let reports = if paths.iter().any(|p| p == Path::new("-")) {
                if paths.len() > 1 {
                    anyhow::bail!("`-` cannot be combined with other paths");
                }
                vec![check_stdin(&cfg)?]
            } else {
                let targets: Vec<PathBuf> = paths
                    .iter()
                    .map(|p| p.canonicalize().unwrap_or_else(|_| p.clone()))
                    .collect();
                engine::run(&targets, &cfg)?
            };

            agentscore::cli::output::render(&reports, &project_root, format);
        }
        Commands::Init => {
            let path = std::env::current_dir()?.join(CONFIG_FILE);
            if path.exists() {
                eprintln!("{CONFIG_FILE} already exists");
                std::process::exit(1);
            }
            std::fs::write(&path, Config::default_toml())?;
            println!("Created {CONFIG_FILE}");
        }
        Commands::Explain { rule: None } => {
            println!("{}", agentscore::cli::explain::list_rules());
        }
        Commands::Explain { rule: Some(rule) } => {
            use agentscore::cli::explain::{explain, list_rules};
            match explain(&rule) {
                Some(text) => println!("{text}"),
                None => {
                    eprintln!("Unknown rule: {rule}\n");
                    eprintln!("{}", list_rules());
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn check_stdin(config: &Config) -> Result<FileReport> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read stdin")?;
    Ok(FileReport {
        file: PathBuf::from("<stdin>"),
        result: engine::validate_with(&content, config),
    })
}
