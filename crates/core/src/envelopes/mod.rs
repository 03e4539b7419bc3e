//! Envelopes module - domain models and traits.

mod envelopes_model;
mod envelopes_traits;

pub use envelopes_model::{Envelope, EnvelopeBucket, EnvelopeKind, EnvelopePreset, NewEnvelope};
pub use envelopes_traits::EnvelopeRepositoryTrait;
