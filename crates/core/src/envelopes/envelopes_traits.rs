use crate::envelopes::envelopes_model::{Envelope, NewEnvelope};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for envelope repository operations, scoped to an owner.
#[async_trait]
pub trait EnvelopeRepositoryTrait: Send + Sync {
    fn list(&self, owner_id: &str) -> Result<Vec<Envelope>>;
    async fn create(&self, owner_id: &str, new_envelope: NewEnvelope) -> Result<Envelope>;
    async fn delete(&self, owner_id: &str, envelope_id: &str) -> Result<usize>;
}
