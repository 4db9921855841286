//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Trailhead - Project scaffolding from placeholder-token templates.
#[derive(Debug, Parser)]
#[command(name = "trailhead")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress per-file output, keep warnings and the summary
    #[arg(short, long, global = true, conflicts_with = "silent")]
    pub quiet: bool,

    /// Suppress all output except errors
    #[arg(long, global = true)]
    pub silent: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project from a template
    New(NewArgs),

    /// List available templates
    List,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `new` command.
#[derive(Debug, Clone, clap::Args)]
pub struct NewArgs {
    /// Name of the project to create
    pub project_name: String,

    /// Template to instantiate
    #[arg(short, long, default_value = "default")]
    pub template: String,

    /// Use defaults, no prompts
    #[arg(long)]
    pub no_interaction: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn new_parses_name_and_defaults() {
        let cli = Cli::try_parse_from(["trailhead", "new", "dummy"]).unwrap();
        match cli.command {
            Commands::New(args) => {
                assert_eq!(args.project_name, "dummy");
                assert_eq!(args.template, "default");
                assert!(!args.no_interaction);
            }
            other => panic!("expected New, got {:?}", other),
        }
    }

    #[test]
    fn new_accepts_template_and_no_interaction() {
        let cli = Cli::try_parse_from([
            "trailhead",
            "new",
            "dummy",
            "--template",
            "webapp",
            "--no-interaction",
        ])
        .unwrap();
        match cli.command {
            Commands::New(args) => {
                assert_eq!(args.template, "webapp");
                assert!(args.no_interaction);
            }
            other => panic!("expected New, got {:?}", other),
        }
    }

    #[test]
    fn quiet_conflicts_with_silent() {
        let result = Cli::try_parse_from(["trailhead", "--quiet", "--silent", "list"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["trailhead", "new", "dummy", "--quiet"]).unwrap();
        assert!(cli.quiet);
    }

    #[test]
    fn subcommand_is_required() {
        let result = Cli::try_parse_from(["trailhead"]);
        assert!(result.is_err());
    }
}
