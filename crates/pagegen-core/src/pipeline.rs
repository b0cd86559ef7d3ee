//! Publishing pipelines.
//!
//! Both pipelines follow the same sequential check-then-create flow: query
//! the page database for the candidate title, skip when a match exists,
//! otherwise collect completions and submit the page. The existence check is
//! best effort and not atomic against concurrent writers; running two
//! publishers for the same record can still create duplicates.

use crate::completion::CompletionClient;
use crate::document::{
    LINK_TITLE_PROPERTY, TYPE_TITLE_PROPERTY, link_page_properties, type_page_properties,
};
use crate::pages::PageStore;
use crate::prompt::{link_prompts, type_prompts};
use crate::record::DocRecord;
use crate::Result;
use tracing::info;

/// Result of publishing one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// No page with the candidate title existed; one was created.
    Created,
    /// A page with the candidate title already exists; creation was skipped.
    AlreadyExists,
}

/// Publish the type page for `record` into `database_id`.
///
/// Runs the full flow: existence check on the record's type, six completion
/// calls (failures keep their slots), page creation.
///
/// # Errors
///
/// Page-database failures propagate. Completion failures do not.
pub async fn publish_type_page(
    store: &PageStore,
    completions: &CompletionClient,
    database_id: &str,
    record: &DocRecord,
) -> Result<PublishOutcome> {
    if store
        .page_exists(database_id, TYPE_TITLE_PROPERTY, &record.type_name)
        .await?
    {
        info!(title = %record.type_name, "Page already exists");
        return Ok(PublishOutcome::AlreadyExists);
    }

    let prompts = type_prompts(record);
    let slots = completions.complete_batch(&prompts).await;
    let properties = type_page_properties(record, &slots);
    store.create_page(database_id, &properties).await?;
    Ok(PublishOutcome::Created)
}

/// Publish one link page per entry in the record's link list.
///
/// Links are processed strictly in order, each through a full existence
/// check / completion / create cycle before the next begins. Passing `None`
/// for `completions` skips the completion calls and leaves the generated
/// sections empty.
///
/// # Errors
///
/// Page-database failures propagate immediately, aborting the remaining
/// links.
pub async fn publish_link_pages(
    store: &PageStore,
    completions: Option<&CompletionClient>,
    database_id: &str,
    record: &DocRecord,
) -> Result<Vec<(String, PublishOutcome)>> {
    let mut outcomes = Vec::with_capacity(record.links.len());

    for link in &record.links {
        let ctx = record.link_context(link);
        if store
            .page_exists(database_id, LINK_TITLE_PROPERTY, &ctx.heading)
            .await?
        {
            info!(title = %ctx.heading, "Page already exists");
            outcomes.push((ctx.heading, PublishOutcome::AlreadyExists));
            continue;
        }

        let slots = match completions {
            Some(client) => {
                let prompts = link_prompts(record, link);
                client.complete_batch(&prompts).await
            },
            None => Vec::new(),
        };

        let properties = link_page_properties(record, &ctx, &slots);
        store.create_page(database_id, &properties).await?;
        outcomes.push((ctx.heading, PublishOutcome::Created));
    }

    Ok(outcomes)
}
