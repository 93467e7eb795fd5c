// positivador-core/src/application/health.rs

use std::time::{Duration, Instant};
use tracing::{debug, error, instrument};

use crate::error::PositivadorError;
use crate::ports::store::Store;

#[derive(Debug, Clone)]
pub struct HealthReport {
    pub engine: String,
    pub latency: Duration,
}

/// Probes the store with a trivial query and times the round-trip.
#[instrument(skip(store), fields(engine = store.engine_name()))]
pub async fn check_health(store: &dyn Store) -> Result<HealthReport, PositivadorError> {
    let start = Instant::now();
    let result = store.ping().await;
    let latency = start.elapsed();

    match result {
        Ok(()) => {
            debug!("Store answered in {:.2?}", latency);
            Ok(HealthReport {
                engine: store.engine_name().to_string(),
                latency,
            })
        }
        Err(e) => {
            error!("Store probe failed after {:.2?}: {}", latency, e);
            Err(e)
        }
    }
}
