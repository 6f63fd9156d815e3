//! `depbro` — collect declared project dependencies and report them to a DepBro registry.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load registry config ([`config::load_config`]).
//! 3. Read the build definition ([`source::gradle`]).
//! 4. Build the scope and group filters ([`filter`]).
//! 5. Collect the deduplicated coordinate set ([`collector`]).
//! 6. Print it ([`report::console`]) or POST it to the registry
//!    ([`report::registry`]).

mod cli;
mod collector;
mod config;
mod filter;
mod models;
mod report;
mod source;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use cli::{Cli, Command, ProjectArgs};
use collector::DependencyCollector;
use config::{load_config, Config};
use filter::{ConfigurationFilter, DependencyFilter};
use report::registry::Outcome;
use source::gradle::GradleSource;
use source::ProjectSource;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Display { project } => {
            let path = resolve_path(&project.path);
            let config = load_config(&path, project.config.as_deref())?;
            let (_, coordinates) = collect_coordinates(&path, &project, &config)?;
            report::console::render(&coordinates);
        }
        Command::Register { project, url, quiet } => {
            let path = resolve_path(&project.path);
            let config = load_config(&path, project.config.as_deref())?;
            let (source, coordinates) = collect_coordinates(&path, &project, &config)?;

            if !quiet {
                eprintln!(
                    "  {} {} dependencies collected from {}",
                    "→".cyan(),
                    coordinates.len(),
                    source.project().name
                );
            }

            let base_url = url.as_deref().unwrap_or(&config.url);
            let outcome =
                report::registry::register(&coordinates, base_url, source.project()).await?;

            match &outcome {
                Outcome::Registered => println!("{}", outcome.to_string().green()),
                Outcome::Rejected { .. } => println!("{}", outcome.to_string().red()),
            }
        }
    }

    Ok(())
}

fn resolve_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

/// Read the build definition and run the collection pipeline over it.
fn collect_coordinates(
    path: &Path,
    project: &ProjectArgs,
    config: &Config,
) -> Result<(GradleSource, BTreeSet<String>)> {
    let source = GradleSource::load(path)?;

    let configuration_filter = ConfigurationFilter::from_names(&project.scopes);
    let dependency_filter = DependencyFilter::from_patterns(&config.deps.included_group_regexes)?;

    let collector = DependencyCollector::new(configuration_filter, dependency_filter);
    let coordinates = collector.collect(&source);

    Ok((source, coordinates))
}
