use crate::errors::Result;
use crate::liabilities::liabilities_model::{Liability, NewLiability};
use async_trait::async_trait;

/// Trait for liability repository operations, scoped to an owner.
#[async_trait]
pub trait LiabilityRepositoryTrait: Send + Sync {
    fn list(&self, owner_id: &str) -> Result<Vec<Liability>>;
    async fn create(&self, owner_id: &str, new_liability: NewLiability) -> Result<Liability>;
    async fn delete(&self, owner_id: &str, liability_id: &str) -> Result<usize>;
}
