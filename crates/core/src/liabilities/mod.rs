//! Liabilities module - domain models and traits.

mod liabilities_model;
mod liabilities_traits;

pub use liabilities_model::{Liability, NewLiability};
pub use liabilities_traits::LiabilityRepositoryTrait;
