//! Goal-progress resolution.
//!
//! Resolves an objective's linked ids against the current envelope and
//! asset collections. An id referring to an envelope is worth the sum of
//! that envelope's assets; an id referring to an asset is worth that
//! asset's value; anything else resolves to `Unknown` with value zero so
//! that a stale link never fails the computation.

use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::assets::{Asset, AssetRepositoryTrait};
use crate::envelopes::{Envelope, EnvelopeRepositoryTrait};
use crate::errors::{Error, Result};

use super::objectives_model::{LinkKind, LinkedValue, Objective, ObjectiveProgress};
use super::objectives_traits::{ObjectiveRepositoryTrait, ObjectiveServiceTrait};

/// Resolves a single linked id to its current monetary value.
pub fn resolve_linked_value(id: &str, envelopes: &[Envelope], assets: &[Asset]) -> LinkedValue {
    if let Some(envelope) = envelopes.iter().find(|e| e.id == id) {
        let value = assets
            .iter()
            .filter(|a| a.envelope_id == envelope.id)
            .map(Asset::market_value)
            .sum();
        return LinkedValue {
            id: id.to_string(),
            name: envelope.name.clone(),
            kind: LinkKind::Envelope,
            value,
        };
    }

    if let Some(asset) = assets.iter().find(|a| a.id == id) {
        return LinkedValue {
            id: id.to_string(),
            name: asset.name.clone(),
            kind: LinkKind::Asset,
            value: asset.market_value(),
        };
    }

    LinkedValue {
        id: id.to_string(),
        name: "Inconnu".to_string(),
        kind: LinkKind::Unknown,
        value: Decimal::ZERO,
    }
}

/// Resolves an objective's full progress from snapshot collections.
pub fn resolve_progress(
    objective: &Objective,
    envelopes: &[Envelope],
    assets: &[Asset],
) -> ObjectiveProgress {
    let breakdown: Vec<LinkedValue> = objective
        .linked_ids
        .iter()
        .map(|id| resolve_linked_value(id, envelopes, assets))
        .collect();

    let current_value: Decimal = breakdown.iter().map(|l| l.value).sum();

    // A non-positive target has no meaningful ratio; report 0%.
    let percent = if objective.target_amount <= Decimal::ZERO {
        Decimal::ZERO
    } else {
        (current_value / objective.target_amount * dec!(100)).min(dec!(100))
    };

    ObjectiveProgress {
        objective_id: objective.id.clone(),
        current_value,
        percent,
        breakdown,
    }
}

/// Service resolving objective progress through the repository traits.
pub struct ObjectiveService {
    objective_repository: Arc<dyn ObjectiveRepositoryTrait>,
    envelope_repository: Arc<dyn EnvelopeRepositoryTrait>,
    asset_repository: Arc<dyn AssetRepositoryTrait>,
}

impl ObjectiveService {
    pub fn new(
        objective_repository: Arc<dyn ObjectiveRepositoryTrait>,
        envelope_repository: Arc<dyn EnvelopeRepositoryTrait>,
        asset_repository: Arc<dyn AssetRepositoryTrait>,
    ) -> Self {
        Self {
            objective_repository,
            envelope_repository,
            asset_repository,
        }
    }
}

impl ObjectiveServiceTrait for ObjectiveService {
    fn get_objectives(&self, owner_id: &str) -> Result<Vec<Objective>> {
        self.objective_repository.list(owner_id)
    }

    fn get_progress(&self, owner_id: &str, objective_id: &str) -> Result<ObjectiveProgress> {
        let objectives = self.objective_repository.list(owner_id)?;
        let objective = objectives
            .iter()
            .find(|o| o.id == objective_id)
            .ok_or_else(|| Error::Repository(format!("Objective {} not found", objective_id)))?;

        let envelopes = self.envelope_repository.list(owner_id)?;
        let assets = self.asset_repository.list(owner_id)?;
        debug!(
            "Resolving progress for objective {} over {} linked ids",
            objective.id,
            objective.linked_ids.len()
        );
        Ok(resolve_progress(objective, &envelopes, &assets))
    }

    fn get_all_progress(&self, owner_id: &str) -> Result<Vec<ObjectiveProgress>> {
        let objectives = self.objective_repository.list(owner_id)?;
        let envelopes = self.envelope_repository.list(owner_id)?;
        let assets = self.asset_repository.list(owner_id)?;

        Ok(objectives
            .iter()
            .map(|o| resolve_progress(o, &envelopes, &assets))
            .collect())
    }
}
