use crate::assets::assets_model::{Asset, NewAsset};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for asset repository operations, scoped to an owner.
#[async_trait]
pub trait AssetRepositoryTrait: Send + Sync {
    fn list(&self, owner_id: &str) -> Result<Vec<Asset>>;
    async fn create(&self, owner_id: &str, new_asset: NewAsset) -> Result<Asset>;
    async fn delete(&self, owner_id: &str, asset_id: &str) -> Result<usize>;
}
