use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "depbro",
    about = "Collect declared project dependencies and report them to a DepBro registry",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the collected dependency coordinates, one per line
    Display {
        #[command(flatten)]
        project: ProjectArgs,
    },
    /// Register the collected dependency coordinates with a DepBro registry
    Register {
        #[command(flatten)]
        project: ProjectArgs,

        /// Registry base URL (overrides the configured url)
        #[arg(long, value_name = "URL")]
        url: Option<String>,

        /// Only print the registration outcome line
        #[arg(short, long)]
        quiet: bool,
    },
}

#[derive(Args, Debug)]
pub struct ProjectArgs {
    /// Project path containing the build definition
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Config file [default: ./.depbro/config.toml, fallback ~/.config/depbro/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Restrict collection to a named configuration scope (repeatable)
    #[arg(long = "scope", value_name = "NAME")]
    pub scopes: Vec<String>,
}
