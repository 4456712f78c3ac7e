use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::payment_processor::ProcessorId;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PaymentRequest {
	#[serde(rename = "correlationId")]
	pub correlation_id: Uuid,
	pub amount:         f64,
}

impl PaymentRequest {
	pub fn has_valid_amount(&self) -> bool {
		self.amount.is_finite() && self.amount >= 0.0
	}
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PaymentResponse {
	#[serde(rename = "correlationId")]
	pub correlation_id: Uuid,
	pub processor:      ProcessorId,
	pub message:        Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PaymentsSummaryFilter {
	#[serde(with = "time::serde::rfc3339::option", default)]
	pub from: Option<OffsetDateTime>,
	#[serde(with = "time::serde::rfc3339::option", default)]
	pub to:   Option<OffsetDateTime>,
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct MessageResponse {
	pub message: String,
}
