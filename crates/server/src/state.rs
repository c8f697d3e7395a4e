use crate::config::ServerConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use query::QueryEngine;
use records::{load_or_empty, LoadError, RecordSet, RecordStore};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Dataset currently being served (swapped atomically on reload)
    pub store: Arc<RecordStore>,

    /// Prometheus render handle, present when the recorder was installed
    pub metrics: Option<PrometheusHandle>,
}

impl ServerState {
    /// Create server state, loading the configured dataset.
    ///
    /// A dataset that cannot be read or parsed is logged and replaced by an
    /// empty one; startup never fails because of it.
    pub fn new(config: ServerConfig) -> Self {
        let records = load_or_empty(&config.dataset_path);
        Self::with_records(config, records)
    }

    /// Create server state over an already-built record set
    pub fn with_records(config: ServerConfig, records: RecordSet) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(RecordStore::new(records)),
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    /// Query engine over the current snapshot
    pub fn engine(&self) -> QueryEngine {
        QueryEngine::from_store(&self.store)
    }

    /// Re-read the configured dataset; on failure the current one stays.
    pub fn reload(&self) -> Result<usize, LoadError> {
        self.store.reload_from(&self.config.dataset_path)
    }
}
