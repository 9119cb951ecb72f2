//! Local Support Resource Extraction Library
//!
//! Turns a free-form AI answer about local maternal and child support
//! services into an ordered list of typed, addressable resources.
//!
//! # Design
//!
//! A single forward pipeline with no retained state: build a prompt
//! from a location, call the hosted completion service (the only I/O),
//! then split the prose into blocks, extract fields per block, and
//! classify each resource by keyword. The parsing stages are heuristic
//! by design - ambiguous blocks degrade to fewer or less-complete
//! resources, never to an error.
//!
//! # Usage
//!
//! ```rust,ignore
//! use resources::{ResourceSearch, testing::MockCompletion};
//!
//! let mock = MockCompletion::new()
//!     .with_response("1. Sunshine Daycare\nChildcare for 0-5 year olds");
//! let search = ResourceSearch::new(mock);
//!
//! let found = search.search("Melbourne").await?;
//! assert_eq!(found[0].title, "Sunshine Daycare");
//! ```
//!
//! # Modules
//!
//! - [`traits`] - The [`Completion`] provider seam
//! - [`types`] - [`LocalResource`] and its category enum
//! - [`pipeline`] - Prompting, splitting, extraction, classification
//! - [`testing`] - Mock implementations for testing

pub mod error;
pub mod pipeline;
pub mod testing;
pub mod traits;
pub mod types;

#[cfg(feature = "perplexity")]
pub mod ai;

// Re-export core types at crate root
pub use error::{ResourceError, Result};
pub use traits::completion::Completion;
pub use types::{LocalResource, ResourceType};

// Re-export pipeline components
pub use pipeline::{
    classify_resource_type, format_search_prompt, parse_block, parse_resources, split_sections,
    ResourceSearch, SEARCH_PROMPT, SYSTEM_PROMPT,
};

// Re-export testing utilities
pub use testing::{MockCompletion, MockFailure};

#[cfg(feature = "perplexity")]
pub use ai::Perplexity;
