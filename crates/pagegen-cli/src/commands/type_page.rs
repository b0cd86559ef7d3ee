//! Type-page command implementation.

use anyhow::Result;
use colored::Colorize;
use indicatif::ProgressBar;
use pagegen_core::{CompletionClient, Config, PageStore, PublishOutcome, publish_type_page};

use super::{create_spinner, read_record};

/// Publish a type page for the record on standard input.
pub async fn execute(database_id: Option<String>, quiet: bool) -> Result<()> {
    let config = Config::from_env()?;
    let database_id = database_id.unwrap_or_else(|| config.types_database_id.clone());

    let record = read_record().await?;

    let store = PageStore::new(&config)?;
    let completions = CompletionClient::new(&config)?;

    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        create_spinner(&format!("Publishing {}...", record.type_name))
    };

    let outcome = publish_type_page(&store, &completions, &database_id, &record).await;
    pb.finish_and_clear();

    match outcome? {
        PublishOutcome::Created => {
            if !quiet {
                println!("{} {} created", "✓".green(), record.type_name.green());
            }
        },
        PublishOutcome::AlreadyExists => {
            if !quiet {
                println!("{} (page already exists)", record.type_name);
            }
        },
    }

    Ok(())
}
