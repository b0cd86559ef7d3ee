//! Input record types and the display strings derived from them.
//!
//! A [`DocRecord`] is produced by upstream docs-gen tooling and arrives as a
//! single JSON document on standard input. Fields the upstream tool omitted
//! deserialize to empty values rather than failing; only malformed JSON is an
//! error. Link pages consume the same record shape, so one struct serves both
//! pipelines.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// One documentation subject as emitted by docs-gen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocRecord {
    /// Unique key and page title for the type pipeline.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Human description of the subject, e.g. "a FIFO data structure".
    pub descriptive_type: String,
    /// Upstream description of the subject's get operation.
    pub get_description: String,
    /// Upstream description of the subject's list operation.
    pub list_description: String,
    /// Upstream description of the subject's search operation.
    pub search_description: String,
    /// Grouping the subject belongs to, e.g. "data structures".
    pub group: String,
    /// Related subjects, in upstream order.
    pub links: Vec<String>,
}

impl DocRecord {
    /// Parse a record from raw standard-input bytes.
    ///
    /// The input is trimmed before parsing; anything that is not a single
    /// valid JSON object is an [`Error::Parse`].
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input.trim()).map_err(|e| Error::Parse(e.to_string()))
    }

    /// Subject phrase appended to every prompt: `{descriptiveType} in {group} ?`.
    #[must_use]
    pub fn subject(&self) -> String {
        format!("{} in {} ?", self.descriptive_type, self.group)
    }

    /// Display string for the `links` property of a type page.
    ///
    /// One `' {type} -> {link} ' ; ` entry per link, newline separated.
    #[must_use]
    pub fn links_display(&self) -> String {
        self.links
            .iter()
            .map(|link| format!("' {} -> {} ' ; ", self.type_name, link))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Derived strings for the link page pairing this record with `link`.
    #[must_use]
    pub fn link_context(&self, link: &str) -> LinkContext {
        LinkContext {
            heading: format!("{} -> {}", self.type_name, link),
            slug: format!("{}&{}", self.type_name, link),
            combined: format!("{} and {}", self.type_name, link),
            linked: link.to_string(),
        }
    }
}

/// Display strings for one link page.
///
/// The heading doubles as the page title and as the candidate for the
/// existence check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkContext {
    /// Page title: `{type} -> {link}`.
    pub heading: String,
    /// URL-ish identifier: `{type}&{link}`.
    pub slug: String,
    /// Prose pairing used in prompts: `{type} and {link}`.
    pub combined: String,
    /// The linked subject on its own.
    pub linked: String,
}
