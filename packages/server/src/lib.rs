//! Mum's Space API server.
//!
//! A thin HTTP façade over the local resource search pipeline. The
//! server owns request validation and error-to-status mapping; all
//! search semantics live in the `resources` crate.

pub mod config;
pub mod server;

pub use config::Config;
