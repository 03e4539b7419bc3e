//! Assets module - domain models and traits.

mod assets_model;
mod assets_traits;

pub use assets_model::{Asset, NewAsset};
pub use assets_traits::AssetRepositoryTrait;
