//! Search orchestration - one prompt, one completion call, one parse.

use tracing::debug;

use crate::error::Result;
use crate::pipeline::fields::parse_block;
use crate::pipeline::prompt::{format_search_prompt, SYSTEM_PROMPT};
use crate::pipeline::sections::split_sections;
use crate::traits::completion::Completion;
use crate::types::LocalResource;

/// Parse completion prose into an ordered list of resources.
///
/// Pure and deterministic: identical prose always yields an identical
/// sequence. Blocks that cannot supply a title and description are
/// dropped silently; a badly-formatted response degrades to fewer
/// resources, never to an error. No deduplication, no sorting, no
/// limit on count.
pub fn parse_resources(content: &str) -> Vec<LocalResource> {
    let sections = split_sections(content);
    let resources: Vec<LocalResource> = sections
        .iter()
        .filter_map(|section| parse_block(section))
        .collect();

    debug!(
        sections = sections.len(),
        resources = resources.len(),
        "parsed completion prose"
    );

    resources
}

/// Location-driven resource search over a completion provider.
///
/// Holds no state between calls: each search is one prompt, one
/// completion round-trip, and one pass of the parsing pipeline.
/// Dropping the returned future cancels the in-flight call.
pub struct ResourceSearch<C> {
    completion: C,
}

impl<C: Completion> ResourceSearch<C> {
    /// Create a search over the given completion provider.
    pub fn new(completion: C) -> Self {
        Self { completion }
    }

    /// Find local support resources for a location.
    ///
    /// The caller is expected to reject empty or whitespace-only
    /// locations before calling. A successful completion that yields
    /// zero parseable resources returns an empty list, not an error.
    pub async fn search(&self, location: &str) -> Result<Vec<LocalResource>> {
        let prompt = format_search_prompt(location);
        let content = self.completion.complete(SYSTEM_PROMPT, &prompt).await?;
        Ok(parse_resources(&content))
    }
}
