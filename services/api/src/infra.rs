use intime::config::StoreConfig;
use intime::store::{
    seed::seed_snapshot, AppStore, JsonFilePersistence, MemoryPersistence, SnapshotPersistence,
    StoreError, StoreHandle,
};
use intime::workflows::submissions::{SimulatedLatency, SubmissionAction, SubmissionService};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Open the seeded store, backed by the snapshot file when one is configured.
pub(crate) fn build_store(config: &StoreConfig) -> Result<StoreHandle, StoreError> {
    let persistence: Arc<dyn SnapshotPersistence> = match &config.state_path {
        Some(path) => {
            info!(path = %path.display(), "persisting application state to file");
            Arc::new(JsonFilePersistence::new(path))
        }
        None => Arc::new(MemoryPersistence::default()),
    };

    Ok(AppStore::open(seed_snapshot(), persistence)?.into_handle())
}

pub(crate) fn submission_service(config: &StoreConfig) -> Result<SubmissionService, StoreError> {
    let store = build_store(config)?;
    Ok(SubmissionService::new(
        store,
        SimulatedLatency::new(config.simulated_latency),
    ))
}

/// Seeded in-memory service with no simulated delay, for demos and one-shot commands.
pub(crate) fn ephemeral_service() -> SubmissionService {
    SubmissionService::new(AppStore::seeded().into_handle(), SimulatedLatency::none())
}

pub(crate) fn parse_action(label: &str, note: Option<String>) -> Result<SubmissionAction, String> {
    SubmissionAction::from_label(label, note).ok_or_else(|| {
        format!(
            "unknown action '{label}'; expected one of screen, mark_ready, submit_to_client, \
             request_interview, client_rejected, advance_round, make_offer, reject, \
             confirm_placement"
        )
    })
}
