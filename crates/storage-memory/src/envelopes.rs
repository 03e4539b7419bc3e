use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use onyx_core::envelopes::{Envelope, EnvelopeRepositoryTrait, NewEnvelope};
use onyx_core::errors::Result;

use crate::store::{delete_row, insert_row, list_rows, MemoryStore};

pub struct EnvelopeRepository {
    store: Arc<MemoryStore>,
}

impl EnvelopeRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        EnvelopeRepository { store }
    }
}

#[async_trait]
impl EnvelopeRepositoryTrait for EnvelopeRepository {
    fn list(&self, owner_id: &str) -> Result<Vec<Envelope>> {
        list_rows(&self.store.envelopes, owner_id)
    }

    async fn create(&self, owner_id: &str, new_envelope: NewEnvelope) -> Result<Envelope> {
        let id = Uuid::new_v4().to_string();
        let envelope = Envelope {
            id: id.clone(),
            name: new_envelope.name,
            kind: new_envelope.kind,
            yield_rate: new_envelope.yield_rate,
        };
        insert_row(&self.store.envelopes, owner_id, id, envelope)
    }

    async fn delete(&self, owner_id: &str, envelope_id: &str) -> Result<usize> {
        delete_row(&self.store.envelopes, owner_id, envelope_id)
    }
}
