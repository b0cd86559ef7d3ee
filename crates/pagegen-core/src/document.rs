//! Page payload construction.
//!
//! Maps a record plus a response batch to the destination property names the
//! database schema expects. Response slots are consumed by fixed position;
//! a failed or absent slot, like any absent source field, produces an empty
//! string rather than an error.

use crate::completion::CompletionSlot;
use crate::pages::{PageProperties, PropertyValue};
use crate::record::{DocRecord, LinkContext};

/// Title property of a type page; also the existence-check filter property.
pub const TYPE_TITLE_PROPERTY: &str = "type";
/// Title property of a link page; also the existence-check filter property.
pub const LINK_TITLE_PROPERTY: &str = "Link";

/// Destination properties for the type-page response slots, in prompt order.
const TYPE_SECTIONS: [&str; 6] = [
    "What is",
    "Features",
    "Best practices",
    "Common problems",
    "Security Considerations",
    "Keywords",
];

/// Destination properties for the link-page response slots, in prompt order.
const LINK_SECTIONS: [&str; 3] = ["Description", "Keywords", "Common issues"];

fn slot_text<'a>(slots: &'a [CompletionSlot], index: usize) -> &'a str {
    slots.get(index).and_then(CompletionSlot::text).unwrap_or("")
}

/// Build the property map for a type page.
///
/// The record's type is the title; descriptive fields come straight from the
/// record, and the six generated sections from the response slots.
#[must_use]
pub fn type_page_properties(record: &DocRecord, slots: &[CompletionSlot]) -> PageProperties {
    let mut properties = PageProperties::new();
    properties.insert(
        TYPE_TITLE_PROPERTY.to_string(),
        PropertyValue::title(&record.type_name),
    );
    properties.insert(
        "descriptiveType".to_string(),
        PropertyValue::rich_text(&record.descriptive_type),
    );
    properties.insert(
        "getDescription".to_string(),
        PropertyValue::rich_text(&record.get_description),
    );
    properties.insert(
        "listDescription".to_string(),
        PropertyValue::rich_text(&record.list_description),
    );
    properties.insert(
        "searchDescription".to_string(),
        PropertyValue::rich_text(&record.search_description),
    );
    properties.insert("group".to_string(), PropertyValue::rich_text(&record.group));
    properties.insert(
        "links".to_string(),
        PropertyValue::rich_text(record.links_display()),
    );
    for (index, section) in TYPE_SECTIONS.iter().enumerate() {
        properties.insert(
            (*section).to_string(),
            PropertyValue::rich_text(slot_text(slots, index)),
        );
    }
    properties
}

/// Build the property map for one link page.
///
/// The heading is the title; the three generated sections are optional and
/// empty whenever completions were skipped or failed.
#[must_use]
pub fn link_page_properties(
    record: &DocRecord,
    ctx: &LinkContext,
    slots: &[CompletionSlot],
) -> PageProperties {
    let mut properties = PageProperties::new();
    properties.insert(
        LINK_TITLE_PROPERTY.to_string(),
        PropertyValue::title(&ctx.heading),
    );
    properties.insert(
        "descriptiveType".to_string(),
        PropertyValue::rich_text(&record.descriptive_type),
    );
    properties.insert(
        "type".to_string(),
        PropertyValue::rich_text(&record.type_name),
    );
    properties.insert("group".to_string(), PropertyValue::rich_text(&record.group));
    properties.insert("links".to_string(), PropertyValue::rich_text(&ctx.linked));
    properties.insert("Slug".to_string(), PropertyValue::rich_text(&ctx.slug));
    properties.insert(
        "Combined".to_string(),
        PropertyValue::rich_text(&ctx.combined),
    );
    for (index, section) in LINK_SECTIONS.iter().enumerate() {
        properties.insert(
            (*section).to_string(),
            PropertyValue::rich_text(slot_text(slots, index)),
        );
    }
    properties
}
