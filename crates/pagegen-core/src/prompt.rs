//! Prompt batch construction.
//!
//! Every prompt is the fixed style preamble, a fixed task phrase, and the
//! record's subject, in that order. Batch order is significant: the page
//! builder maps response slots back to destination properties by position.

use crate::record::DocRecord;

/// Style preamble prepended to every prompt to steer the completion voice.
pub const STYLE_PREAMBLE: &str = "You are an expert technical copywriter who can rewrite content in your own voice and style. You have a informative tone of voice. You have a Academic writing style. Please intersperse short and long sentences. Utilize industry terminology to enhance the originality of the content so that it is not clear that it is written by AI. Please format the content in a professional format. Do not self reference. Do not explain what you are doing. Do not try to define what the items are. Assume the reader is a expert in the field of computing.";

/// Task phrases for the type pipeline, in destination-property order.
pub const TYPE_TASKS: [&str; 6] = [
    "what is",
    "Using bullet points where possible. What are the main features of",
    "Using bullet points where possible. What are some best practices when using",
    "Using bullet points where possible. What are some common issues when using",
    "Using bullet points where possible. What are some important security considerations when using",
    "Using bullet points where possible. Give me a list and a one sentence description of all keywords commonly used in relation to",
];

/// Task phrases for the link pipeline, in destination-property order.
pub const LINK_TASKS: [&str; 3] = [
    "What is the link between",
    "Using bullet points where possible. Give me a list and a one sentence description of all keywords commonly used in relation to",
    "What are some common issues between",
];

/// Build the prompt batch for a type page: exactly [`TYPE_TASKS`] prompts,
/// each ending in the record's subject phrase.
#[must_use]
pub fn type_prompts(record: &DocRecord) -> Vec<String> {
    let subject = record.subject();
    TYPE_TASKS
        .iter()
        .map(|task| format!("{STYLE_PREAMBLE} {task} {subject}"))
        .collect()
}

/// Build the prompt batch for one link page: exactly [`LINK_TASKS`] prompts
/// over the combined pair, scoped to the record's group.
#[must_use]
pub fn link_prompts(record: &DocRecord, link: &str) -> Vec<String> {
    let combined = record.link_context(link).combined;
    LINK_TASKS
        .iter()
        .map(|task| format!("{STYLE_PREAMBLE} {task} {combined} in {} ?", record.group))
        .collect()
}
