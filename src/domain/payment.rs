use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::payment_processor::ProcessorId;

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
	pub correlation_id: Uuid,
	pub amount:         f64,
	pub requested_at:   OffsetDateTime,
}

impl PaymentRequest {
	pub fn new(correlation_id: Uuid, amount: f64) -> Self {
		Self {
			correlation_id,
			amount,
			requested_at: OffsetDateTime::now_utc(),
		}
	}
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Payment {
	pub correlation_id: Uuid,
	pub amount:         f64,
	pub processed_by:   ProcessorId,
	#[serde(with = "time::serde::rfc3339")]
	pub processed_at:   OffsetDateTime,
}

impl Payment {
	pub fn processed(request: &PaymentRequest, processed_by: ProcessorId) -> Self {
		Self {
			correlation_id: request.correlation_id,
			amount: request.amount,
			processed_by,
			processed_at: OffsetDateTime::now_utc(),
		}
	}
}
