//! Link-pages command implementation.

use anyhow::Result;
use colored::Colorize;
use indicatif::ProgressBar;
use pagegen_core::{CompletionClient, Config, PageStore, PublishOutcome, publish_link_pages};

use super::{create_spinner, read_record};

/// Publish one link page per link of the record on standard input.
pub async fn execute(
    database_id: Option<String>,
    skip_completions: bool,
    quiet: bool,
) -> Result<()> {
    let config = Config::from_env()?;
    let database_id = database_id.unwrap_or_else(|| config.links_database_id.clone());

    let record = read_record().await?;

    let store = PageStore::new(&config)?;
    let completions = if skip_completions {
        None
    } else {
        Some(CompletionClient::new(&config)?)
    };

    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        create_spinner(&format!(
            "Publishing {} link page(s) for {}...",
            record.links.len(),
            record.type_name
        ))
    };

    let outcomes = publish_link_pages(&store, completions.as_ref(), &database_id, &record).await;
    pb.finish_and_clear();

    let mut created_count = 0;
    let mut skipped_count = 0;
    for (heading, outcome) in outcomes? {
        match outcome {
            PublishOutcome::Created => {
                created_count += 1;
                if !quiet {
                    println!("{} {} created", "✓".green(), heading.green());
                }
            },
            PublishOutcome::AlreadyExists => {
                skipped_count += 1;
                if !quiet {
                    println!("{heading} (page already exists)");
                }
            },
        }
    }

    if !quiet {
        println!("\nSummary: {created_count} created, {skipped_count} existing");
    }
    Ok(())
}
