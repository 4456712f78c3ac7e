use std::sync::{Arc, PoisonError, RwLock};

use time::OffsetDateTime;

use crate::domain::health_status::{HealthCacheEntry, HealthObservation};
use crate::domain::payment_processor::ProcessorId;

#[derive(Default)]
struct Slots {
	primary:   RwLock<HealthCacheEntry>,
	secondary: RwLock<HealthCacheEntry>,
}

impl Slots {
	fn slot(&self, processor: ProcessorId) -> &RwLock<HealthCacheEntry> {
		match processor {
			ProcessorId::Primary => &self.primary,
			ProcessorId::Secondary => &self.secondary,
		}
	}

	fn read(&self, processor: ProcessorId) -> HealthCacheEntry {
		// Entries are plain `Copy` data, a poisoned lock still holds a whole one.
		*self
			.slot(processor)
			.read()
			.unwrap_or_else(PoisonError::into_inner)
	}

	fn write(&self, processor: ProcessorId, entry: HealthCacheEntry) {
		*self
			.slot(processor)
			.write()
			.unwrap_or_else(PoisonError::into_inner) = entry;
	}
}

#[derive(Clone)]
pub struct HealthCache {
	slots: Arc<Slots>,
}

pub struct HealthCacheWriter {
	slots: Arc<Slots>,
}

pub struct HealthSlotWriter {
	processor: ProcessorId,
	slots:     Arc<Slots>,
}

impl HealthCache {
	pub fn with_writer() -> (HealthCache, HealthCacheWriter) {
		let slots = Arc::new(Slots::default());
		(
			HealthCache {
				slots: slots.clone(),
			},
			HealthCacheWriter { slots },
		)
	}

	pub fn get(&self, processor: ProcessorId) -> HealthObservation {
		self.slots.read(processor).observation
	}

	pub fn entry(&self, processor: ProcessorId) -> HealthCacheEntry {
		self.slots.read(processor)
	}
}

impl HealthCacheWriter {
	pub fn set(
		&self,
		processor: ProcessorId,
		observation: HealthObservation,
		recorded_at: OffsetDateTime,
	) {
		self.slots.write(processor, HealthCacheEntry {
			observation,
			recorded_at,
		});
	}

	/// Splits the writer so that each processor's probe loop can only touch its
	/// own entry.
	pub fn into_slots(self) -> [HealthSlotWriter; 2] {
		ProcessorId::ALL.map(|processor| HealthSlotWriter {
			processor,
			slots: self.slots.clone(),
		})
	}
}

impl HealthSlotWriter {
	pub fn processor(&self) -> ProcessorId {
		self.processor
	}

	pub fn record(&self, observation: HealthObservation, recorded_at: OffsetDateTime) {
		self.slots.write(self.processor, HealthCacheEntry {
			observation,
			recorded_at,
		});
	}
}
