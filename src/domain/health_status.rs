use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthObservation {
	pub failing:              bool,
	pub min_response_time_ms: u64,
}

impl HealthObservation {
	pub fn healthy(min_response_time_ms: u64) -> Self {
		Self {
			failing: false,
			min_response_time_ms,
		}
	}

	/// The observation of a processor nothing is known about, or whose last
	/// probe failed. It never wins a selection against real data.
	pub fn unknown() -> Self {
		Self {
			failing:              true,
			min_response_time_ms: u64::MAX,
		}
	}

	pub fn is_healthy(&self) -> bool {
		!self.failing
	}
}

impl Default for HealthObservation {
	fn default() -> Self {
		Self::unknown()
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthCacheEntry {
	pub observation: HealthObservation,
	pub recorded_at: OffsetDateTime,
}

impl Default for HealthCacheEntry {
	fn default() -> Self {
		Self {
			observation: HealthObservation::unknown(),
			recorded_at: OffsetDateTime::UNIX_EPOCH,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_observation_is_failing_with_max_latency() {
		let observation = HealthObservation::default();
		assert!(observation.failing);
		assert_eq!(observation.min_response_time_ms, u64::MAX);
		assert!(!observation.is_healthy());
	}

	#[test]
	fn test_default_entry_is_recorded_at_epoch() {
		let entry = HealthCacheEntry::default();
		assert_eq!(entry.observation, HealthObservation::unknown());
		assert_eq!(entry.recorded_at, OffsetDateTime::UNIX_EPOCH);
	}
}
