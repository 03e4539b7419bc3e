//! Flows module - recurring monthly incomes and expenses.

mod flows_model;
mod flows_traits;

pub use flows_model::{FlowDirection, FlowItem, NewFlowItem};
pub use flows_traits::FlowRepositoryTrait;
