//! Objectives module - savings goals and the goal-progress resolver.

mod objectives_model;
mod objectives_service;
mod objectives_traits;

pub use objectives_model::{
    LinkKind, LinkedValue, NewObjective, Objective, ObjectiveProgress,
};
pub use objectives_service::{resolve_linked_value, resolve_progress, ObjectiveService};
pub use objectives_traits::{ObjectiveRepositoryTrait, ObjectiveServiceTrait};
