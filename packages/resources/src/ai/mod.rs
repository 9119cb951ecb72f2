//! Completion provider implementations.

pub mod perplexity;

pub use perplexity::Perplexity;
