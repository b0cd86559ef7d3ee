//! CLI structure and argument parsing for `pagegen`.
//!
//! The CLI follows a command-subcommand pattern: `type-page` and `link-pages`
//! read one docs-gen record from standard input and publish pages for it;
//! `wait` is the CI helper that suspends for a duration and sets a workflow
//! output.
//!
//! ```bash
//! docs-gen emit Queue | pagegen type-page
//! docs-gen emit Queue | pagegen link-pages --skip-completions
//! pagegen wait 2500
//! ```

use clap::{Parser, Subcommand};

/// Main CLI structure for the `pagegen` command.
#[derive(Parser, Clone, Debug)]
#[command(name = "pagegen")]
#[command(version)]
#[command(about = "pagegen - Generate documentation pages from docs-gen records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

/// Available subcommands for the `pagegen` CLI.
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Publish a type page for the record on standard input
    #[command(visible_alias = "type")]
    TypePage {
        /// Target database id (defaults to TYPES_DATABASE_ID)
        #[arg(long, value_name = "ID")]
        database_id: Option<String>,
    },

    /// Publish one link page per link of the record on standard input
    #[command(visible_alias = "links")]
    LinkPages {
        /// Target database id (defaults to LINKS_DATABASE_ID)
        #[arg(long, value_name = "ID")]
        database_id: Option<String>,
        /// Skip completion calls and leave the generated sections empty
        #[arg(long)]
        skip_completions: bool,
    },

    /// Wait for a number of milliseconds, then set the `time` output
    Wait {
        /// How long to wait, in milliseconds
        milliseconds: u64,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_type_page() {
        let cli = Cli::try_parse_from(["pagegen", "type-page"]).unwrap();
        match cli.command {
            Commands::TypePage { database_id } => assert!(database_id.is_none()),
            other => panic!("Expected TypePage, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_type_alias_and_database_override() {
        let cli = Cli::try_parse_from(["pagegen", "type", "--database-id", "db-123"]).unwrap();
        match cli.command {
            Commands::TypePage { database_id } => {
                assert_eq!(database_id.as_deref(), Some("db-123"));
            },
            other => panic!("Expected TypePage, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_link_pages_skip_completions() {
        let cli = Cli::try_parse_from(["pagegen", "links", "--skip-completions"]).unwrap();
        match cli.command {
            Commands::LinkPages {
                skip_completions, ..
            } => assert!(skip_completions),
            other => panic!("Expected LinkPages, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_wait() {
        let cli = Cli::try_parse_from(["pagegen", "wait", "2500"]).unwrap();
        match cli.command {
            Commands::Wait { milliseconds } => assert_eq!(milliseconds, 2500),
            other => panic!("Expected Wait, got {other:?}"),
        }
    }

    #[test]
    fn test_wait_rejects_non_numeric_input() {
        assert!(Cli::try_parse_from(["pagegen", "wait", "soon"]).is_err());
    }
}
