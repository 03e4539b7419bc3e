use crate::errors::Result;
use crate::objectives::objectives_model::{NewObjective, Objective, ObjectiveProgress};
use async_trait::async_trait;

/// Trait for objective repository operations, scoped to an owner.
#[async_trait]
pub trait ObjectiveRepositoryTrait: Send + Sync {
    fn list(&self, owner_id: &str) -> Result<Vec<Objective>>;
    async fn create(&self, owner_id: &str, new_objective: NewObjective) -> Result<Objective>;
    async fn delete(&self, owner_id: &str, objective_id: &str) -> Result<usize>;
}

/// Trait for objective service operations.
pub trait ObjectiveServiceTrait: Send + Sync {
    fn get_objectives(&self, owner_id: &str) -> Result<Vec<Objective>>;
    fn get_progress(&self, owner_id: &str, objective_id: &str) -> Result<ObjectiveProgress>;
    fn get_all_progress(&self, owner_id: &str) -> Result<Vec<ObjectiveProgress>>;
}
