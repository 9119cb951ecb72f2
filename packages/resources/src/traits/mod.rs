//! Core trait abstractions for the resource search library.
//!
//! The single seam is the completion provider: everything downstream of
//! it is pure string transformation.

pub mod completion;
