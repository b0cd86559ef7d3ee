//! Wait command implementation (CI action stub).
//!
//! Suspends for the requested number of milliseconds, then emits annotations
//! and a `time` output the way the surrounding CI workflow expects. Any API
//! keys present in the environment are masked before the output is set.

use anyhow::Result;
use chrono::Utc;
use pagegen_core::config::{ENV_COMPLETION_API_KEY, ENV_PAGE_STORE_API_KEY};
use std::time::Duration;

use crate::utils::actions;

/// Wait for `milliseconds`, then set the `time` output.
pub async fn execute(milliseconds: u64) -> Result<()> {
    actions::info(&format!("Waiting {milliseconds} milliseconds ..."));
    wait(Duration::from_millis(milliseconds)).await;

    actions::debug(&now_string());
    actions::info("Output to the actions build log");
    actions::notice("This is a message that will also emit an annotation");

    for key in [ENV_COMPLETION_API_KEY, ENV_PAGE_STORE_API_KEY] {
        if let Ok(value) = std::env::var(key) {
            if !value.is_empty() {
                actions::add_mask(&value);
            }
        }
    }

    actions::set_output("time", &now_string())?;
    Ok(())
}

/// Suspend the task for the given duration.
async fn wait(duration: Duration) {
    tokio::time::sleep(duration).await;
}

fn now_string() -> String {
    Utc::now().to_rfc2822()
}
