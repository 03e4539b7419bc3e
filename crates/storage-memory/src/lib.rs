//! In-memory storage implementation for Onyx.
//!
//! Implements the repository traits defined in `onyx-core` over plain
//! `RwLock`-guarded vectors shared through a [`MemoryStore`]. Every
//! operation is scoped to an owner id: reads return only the owner's
//! records, deletes silently skip records belonging to someone else, and
//! a missing owner is rejected with `Error::Unauthorized` before any
//! data is touched.
//!
//! This crate is the only storage backend Onyx ships; the engines in
//! `onyx-core` are storage-agnostic and work with the traits alone.

mod store;


mod assets;
mod envelopes;
mod flows;
mod liabilities;
mod objectives;

pub use assets::AssetRepository;
pub use envelopes::EnvelopeRepository;
pub use flows::FlowRepository;
pub use liabilities::LiabilityRepository;
pub use objectives::ObjectiveRepository;
pub use store::MemoryStore;

// Re-export from onyx-core for convenience
pub use onyx_core::errors::{Error, Result};
