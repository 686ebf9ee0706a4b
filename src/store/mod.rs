//! Anchor store module
//!
//! This module contains the non-rendering clock variant: a reactive store
//! that publishes snapshots to a host UI, driven by a background tick
//! source that carries no time data of its own.

pub mod anchor_store;
pub(crate) mod tick;

// Re-export main types
pub use anchor_store::{AnchorStore, StoreOptions};
