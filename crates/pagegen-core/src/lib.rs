//! # pagegen-core
//!
//! Core functionality for pagegen - generation of documentation pages in a
//! Notion database, with descriptive sections filled in by a text-completion
//! service.
//!
//! The crate turns a docs-gen record (read from standard input by the CLI)
//! into a set of prompts, collects completions for them, and upserts the
//! result as a page. Two pipelines exist: one for "type" pages and one for
//! "link" pages describing the relationship between two types.
//!
//! ## Architecture
//!
//! - **Configuration**: explicit [`Config`] value threaded into every client
//! - **Records**: [`DocRecord`] and its derived display strings
//! - **Prompts**: deterministic, fixed-order prompt batches
//! - **Clients**: [`CompletionClient`] and [`PageStore`], both `reqwest` based
//! - **Pipelines**: sequential check-then-create orchestration
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, Error>`]. Per-prompt completion failures
//! are deliberately swallowed into [`CompletionSlot::Failed`] so that response
//! batches stay positionally aligned with their prompt batches; page-store
//! failures always propagate.

/// Completion service client and response slots
pub mod completion;
/// Environment-derived configuration
pub mod config;
/// Page payload construction
pub mod document;
/// Error types and result aliases
pub mod error;
/// Page-database wire types and client
pub mod pages;
/// Publishing pipelines
pub mod pipeline;
/// Prompt batch construction
pub mod prompt;
/// Input record types and derived strings
pub mod record;

pub use completion::{CompletionClient, CompletionParams, CompletionSlot};
pub use config::Config;
pub use error::{Error, Result};
pub use pages::{PageProperties, PageStore, PropertyValue};
pub use pipeline::{PublishOutcome, publish_link_pages, publish_type_page};
pub use record::{DocRecord, LinkContext};
