use crate::domain::health_status::HealthObservation;
use crate::domain::payment_processor::ProcessorId;

/// Healthy beats failing, then lower latency wins. Ties, and the case where
/// both are failing, go to the primary processor: the payment is still
/// attempted and the forwarder reports the outcome.
pub fn select_processor(
	primary: &HealthObservation,
	secondary: &HealthObservation,
) -> ProcessorId {
	match (primary.is_healthy(), secondary.is_healthy()) {
		(true, true) => {
			if primary.min_response_time_ms <= secondary.min_response_time_ms {
				ProcessorId::Primary
			} else {
				ProcessorId::Secondary
			}
		}
		(true, false) => ProcessorId::Primary,
		(false, true) => ProcessorId::Secondary,
		(false, false) => ProcessorId::Primary,
	}
}
