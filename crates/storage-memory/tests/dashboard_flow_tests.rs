//! End-to-end tests: mutations through the repositories, analytics
//! through the core services.

use std::sync::Arc;

use rust_decimal_macros::dec;

use onyx_core::assets::{AssetRepositoryTrait, NewAsset};
use onyx_core::envelopes::{EnvelopeKind, EnvelopeRepositoryTrait, NewEnvelope};
use onyx_core::flows::{FlowDirection, FlowRepositoryTrait, NewFlowItem};
use onyx_core::objectives::{
    LinkKind, NewObjective, ObjectiveRepositoryTrait, ObjectiveService, ObjectiveServiceTrait,
};
use onyx_core::stats::{StatsService, StatsServiceTrait};
use onyx_storage_memory::{
    AssetRepository, EnvelopeRepository, FlowRepository, LiabilityRepository, MemoryStore,
    ObjectiveRepository,
};

const OWNER: &str = "user-1";

#[tokio::test]
async fn stats_reflect_stored_records() {
    let store = Arc::new(MemoryStore::new());
    let envelopes = Arc::new(EnvelopeRepository::new(store.clone()));
    let assets = Arc::new(AssetRepository::new(store.clone()));
    let liabilities = Arc::new(LiabilityRepository::new(store.clone()));
    let flows = Arc::new(FlowRepository::new(store.clone()));

    let livret = envelopes
        .create(OWNER, NewEnvelope::with_preset_yield("Livret A", EnvelopeKind::Livret))
        .await
        .unwrap();

    assets
        .create(
            OWNER,
            NewAsset {
                envelope_id: livret.id.clone(),
                name: "Livret A".to_string(),
                category: "Livret".to_string(),
                amount: dec!(10),
                buy_price: dec!(80),
                unit_price: dec!(100),
            },
        )
        .await
        .unwrap();

    flows
        .create(
            OWNER,
            NewFlowItem {
                name: "Loyer".to_string(),
                amount: dec!(200),
                direction: FlowDirection::Expense,
                group: None,
            },
        )
        .await
        .unwrap();

    let service = StatsService::new(envelopes, assets, liabilities, flows);
    let stats = service.global_stats(OWNER).unwrap();

    assert_eq!(stats.gross_assets, dec!(1000));
    assert_eq!(stats.annual_interest, dec!(30));
    assert_eq!(stats.liquid_cash, dec!(1000));
    assert_eq!(stats.runway_months, dec!(5));
    assert_eq!(stats.net_wealth, dec!(1000));
}

#[tokio::test]
async fn objective_progress_follows_adds_and_deletes() {
    let store = Arc::new(MemoryStore::new());
    let envelopes = Arc::new(EnvelopeRepository::new(store.clone()));
    let assets = Arc::new(AssetRepository::new(store.clone()));
    let objectives = Arc::new(ObjectiveRepository::new(store.clone()));

    let pea = envelopes
        .create(OWNER, NewEnvelope::with_preset_yield("Mon PEA", EnvelopeKind::Pea))
        .await
        .unwrap();

    let asset = assets
        .create(
            OWNER,
            NewAsset {
                envelope_id: pea.id.clone(),
                name: "CW8".to_string(),
                category: "Actions".to_string(),
                amount: dec!(10),
                buy_price: dec!(400),
                unit_price: dec!(500),
            },
        )
        .await
        .unwrap();

    let objective = objectives
        .create(
            OWNER,
            NewObjective {
                name: "Apport".to_string(),
                target_amount: dec!(10000),
                linked_ids: vec![pea.id.clone()],
            },
        )
        .await
        .unwrap();

    let service = ObjectiveService::new(objectives, envelopes.clone(), assets.clone());

    let progress = service.get_progress(OWNER, &objective.id).unwrap();
    assert_eq!(progress.current_value, dec!(5000));
    assert_eq!(progress.percent, dec!(50));
    assert_eq!(progress.breakdown[0].kind, LinkKind::Envelope);

    // Deleting the asset empties the envelope; the link stays resolvable
    assets.delete(OWNER, &asset.id).await.unwrap();
    let progress = service.get_progress(OWNER, &objective.id).unwrap();
    assert_eq!(progress.current_value, dec!(0));
    assert_eq!(progress.breakdown[0].kind, LinkKind::Envelope);

    // Deleting the envelope itself leaves a stale link resolving to zero
    envelopes.delete(OWNER, &pea.id).await.unwrap();
    let progress = service.get_progress(OWNER, &objective.id).unwrap();
    assert_eq!(progress.current_value, dec!(0));
    assert_eq!(progress.breakdown[0].kind, LinkKind::Unknown);
}
