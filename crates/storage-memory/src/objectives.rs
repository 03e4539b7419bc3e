use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use onyx_core::errors::Result;
use onyx_core::objectives::{NewObjective, Objective, ObjectiveRepositoryTrait};

use crate::store::{delete_row, insert_row, list_rows, MemoryStore};

pub struct ObjectiveRepository {
    store: Arc<MemoryStore>,
}

impl ObjectiveRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        ObjectiveRepository { store }
    }
}

#[async_trait]
impl ObjectiveRepositoryTrait for ObjectiveRepository {
    fn list(&self, owner_id: &str) -> Result<Vec<Objective>> {
        list_rows(&self.store.objectives, owner_id)
    }

    async fn create(&self, owner_id: &str, new_objective: NewObjective) -> Result<Objective> {
        let id = Uuid::new_v4().to_string();
        let objective = Objective {
            id: id.clone(),
            name: new_objective.name,
            target_amount: new_objective.target_amount,
            linked_ids: new_objective.linked_ids,
        };
        insert_row(&self.store.objectives, owner_id, id, objective)
    }

    async fn delete(&self, owner_id: &str, objective_id: &str) -> Result<usize> {
        delete_row(&self.store.objectives, owner_id, objective_id)
    }
}
