use crate::errors::Result;
use crate::flows::flows_model::{FlowItem, NewFlowItem};
use async_trait::async_trait;

/// Trait for flow repository operations, scoped to an owner.
///
/// Incomes and expenses live in a single collection tagged by direction;
/// callers partition as needed.
#[async_trait]
pub trait FlowRepositoryTrait: Send + Sync {
    fn list(&self, owner_id: &str) -> Result<Vec<FlowItem>>;
    async fn create(&self, owner_id: &str, new_flow: NewFlowItem) -> Result<FlowItem>;
    async fn delete(&self, owner_id: &str, flow_id: &str) -> Result<usize>;
}
