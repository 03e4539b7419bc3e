use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use onyx_core::errors::Result;
use onyx_core::liabilities::{Liability, LiabilityRepositoryTrait, NewLiability};

use crate::store::{delete_row, insert_row, list_rows, MemoryStore};

pub struct LiabilityRepository {
    store: Arc<MemoryStore>,
}

impl LiabilityRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        LiabilityRepository { store }
    }
}

#[async_trait]
impl LiabilityRepositoryTrait for LiabilityRepository {
    fn list(&self, owner_id: &str) -> Result<Vec<Liability>> {
        list_rows(&self.store.liabilities, owner_id)
    }

    async fn create(&self, owner_id: &str, new_liability: NewLiability) -> Result<Liability> {
        let id = Uuid::new_v4().to_string();
        let liability = Liability {
            id: id.clone(),
            name: new_liability.name,
            amount_remaining: new_liability.amount_remaining,
            monthly_payment: new_liability.monthly_payment,
            rate: new_liability.rate,
            start_date: new_liability.start_date,
            end_date: new_liability.end_date,
        };
        insert_row(&self.store.liabilities, owner_id, id, liability)
    }

    async fn delete(&self, owner_id: &str, liability_id: &str) -> Result<usize> {
        delete_row(&self.store.liabilities, owner_id, liability_id)
    }
}
