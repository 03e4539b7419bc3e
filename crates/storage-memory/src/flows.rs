use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use onyx_core::errors::Result;
use onyx_core::flows::{FlowItem, FlowRepositoryTrait, NewFlowItem};

use crate::store::{delete_row, insert_row, list_rows, MemoryStore};

pub struct FlowRepository {
    store: Arc<MemoryStore>,
}

impl FlowRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        FlowRepository { store }
    }
}

#[async_trait]
impl FlowRepositoryTrait for FlowRepository {
    fn list(&self, owner_id: &str) -> Result<Vec<FlowItem>> {
        list_rows(&self.store.flows, owner_id)
    }

    async fn create(&self, owner_id: &str, new_flow: NewFlowItem) -> Result<FlowItem> {
        let id = Uuid::new_v4().to_string();
        let flow = FlowItem {
            id: id.clone(),
            name: new_flow.name,
            amount: new_flow.amount,
            direction: new_flow.direction,
            group: new_flow.group,
        };
        insert_row(&self.store.flows, owner_id, id, flow)
    }

    async fn delete(&self, owner_id: &str, flow_id: &str) -> Result<usize> {
        delete_row(&self.store.flows, owner_id, flow_id)
    }
}
