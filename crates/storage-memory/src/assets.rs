use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use onyx_core::assets::{Asset, AssetRepositoryTrait, NewAsset};
use onyx_core::errors::Result;

use crate::store::{delete_row, insert_row, list_rows, MemoryStore};

pub struct AssetRepository {
    store: Arc<MemoryStore>,
}

impl AssetRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        AssetRepository { store }
    }
}

#[async_trait]
impl AssetRepositoryTrait for AssetRepository {
    fn list(&self, owner_id: &str) -> Result<Vec<Asset>> {
        list_rows(&self.store.assets, owner_id)
    }

    async fn create(&self, owner_id: &str, new_asset: NewAsset) -> Result<Asset> {
        let id = Uuid::new_v4().to_string();
        let asset = Asset {
            id: id.clone(),
            envelope_id: new_asset.envelope_id,
            name: new_asset.name,
            category: new_asset.category,
            amount: new_asset.amount,
            buy_price: new_asset.buy_price,
            unit_price: new_asset.unit_price,
        };
        insert_row(&self.store.assets, owner_id, id, asset)
    }

    async fn delete(&self, owner_id: &str, asset_id: &str) -> Result<usize> {
        delete_row(&self.store.assets, owner_id, asset_id)
    }
}
