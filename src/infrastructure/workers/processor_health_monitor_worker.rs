use std::sync::Arc;

use log::{info, warn};
use time::OffsetDateTime;
use tokio::task::JoinHandle;
use tokio::time::{Duration, MissedTickBehavior, interval};

use crate::domain::health_probe::HealthProbe;
use crate::domain::health_status::HealthObservation;
use crate::infrastructure::routing::health_cache::{
	HealthCacheWriter, HealthSlotWriter,
};

const MIN_PROBE_INTERVAL: Duration = Duration::from_millis(1);

/// Starts one probing loop per processor. The loops share nothing but the
/// probe, so a slow or unreachable processor never holds back the other.
pub fn spawn_processor_health_monitor<P: HealthProbe>(
	probe: P,
	writer: HealthCacheWriter,
	probe_interval: Duration,
) -> Vec<JoinHandle<()>> {
	let probe = Arc::new(probe);

	writer
		.into_slots()
		.into_iter()
		.map(|slot| {
			tokio::spawn(processor_health_monitor_worker(
				probe.clone(),
				slot,
				probe_interval,
			))
		})
		.collect()
}

pub async fn processor_health_monitor_worker<P: HealthProbe>(
	probe: Arc<P>,
	slot: HealthSlotWriter,
	probe_interval: Duration,
) {
	let mut ticker = interval(probe_interval.max(MIN_PROBE_INTERVAL));
	ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

	loop {
		ticker.tick().await;
		refresh_processor_health(probe.as_ref(), &slot).await;
	}
}

/// Probes the slot's processor once and records the outcome. A failed probe
/// still overwrites the entry, marking the processor as failing.
pub async fn refresh_processor_health<P: HealthProbe + ?Sized>(
	probe: &P,
	slot: &HealthSlotWriter,
) -> HealthObservation {
	let processor = slot.processor();

	let observation = match probe.probe(processor).await {
		Ok(observation) => {
			info!(
				"Updated health for {processor}: failing={}, min_response_time={}",
				observation.failing, observation.min_response_time_ms
			);
			observation
		}
		Err(e) => {
			warn!("Failed to perform health check for {processor}: {e}");
			HealthObservation::unknown()
		}
	};

	slot.record(observation, OffsetDateTime::now_utc());
	observation
}
