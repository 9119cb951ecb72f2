//! Resource extraction pipeline - the core of the library.
//!
//! Data flows strictly forward, with no state retained between calls:
//!
//! 1. Prompt construction from a location
//! 2. Completion call (the only I/O, behind the [`Completion`] trait)
//! 3. Section split into candidate blocks
//! 4. Per-block field extraction
//! 5. Keyword classification
//! 6. Ordered assembly
//!
//! [`Completion`]: crate::traits::completion::Completion

pub mod classify;
pub mod fields;
pub mod prompt;
pub mod search;
pub mod sections;

pub use classify::classify_resource_type;
pub use fields::{extract_labeled_text, extract_phone, extract_website, parse_block};
pub use prompt::{format_search_prompt, SEARCH_PROMPT, SYSTEM_PROMPT};
pub use search::{parse_resources, ResourceSearch};
pub use sections::split_sections;
