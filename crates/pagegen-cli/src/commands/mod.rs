//! Command implementations for the pagegen CLI.
//!
//! Each command lives in its own submodule. The two publishing commands
//! share the stdin record reader and spinner helper defined here.

mod link_pages;
mod type_page;
mod wait;

pub use link_pages::execute as publish_links;
pub use type_page::execute as publish_type;
pub use wait::execute as wait;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use pagegen_core::DocRecord;
use tokio::io::AsyncReadExt;

/// Read one docs-gen record from standard input (to end-of-stream).
pub(crate) async fn read_record() -> Result<DocRecord> {
    let mut input = String::new();
    tokio::io::stdin().read_to_string(&mut input).await?;
    Ok(DocRecord::from_json(&input)?)
}

pub(crate) fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb
}
