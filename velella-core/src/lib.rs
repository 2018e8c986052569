//! Shared primitives and traits for the Velella codon analysis workspace.
//!
//! `velella-core` provides the foundation the other Velella crates build on:
//!
//! - **Error types** — [`VelellaError`] and [`Result`] for structured error handling
//! - **Traits** — Core abstractions like [`Sequence`], [`Scored`], [`Annotated`]

pub mod error;
pub mod traits;

pub use error::{Result, VelellaError};
pub use traits::*;
