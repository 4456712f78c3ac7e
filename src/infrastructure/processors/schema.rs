use serde::{Deserialize, Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};
use uuid::Uuid;

use crate::domain::health_status::HealthObservation;
use crate::domain::payment::PaymentRequest;

/// `2025-07-15T12:34:56.789+00:00`
#[rustfmt::skip]
const REQUESTED_AT_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
	"[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3][offset_hour sign:mandatory]:[offset_minute]"
);

pub fn format_requested_at(
	requested_at: OffsetDateTime,
) -> Result<String, time::error::Format> {
	requested_at
		.to_offset(UtcOffset::UTC)
		.format(REQUESTED_AT_FORMAT)
}

fn serialize_requested_at<S>(
	requested_at: &OffsetDateTime,
	serializer: S,
) -> Result<S::Ok, S::Error>
where
	S: Serializer,
{
	let formatted =
		format_requested_at(*requested_at).map_err(serde::ser::Error::custom)?;
	serializer.serialize_str(&formatted)
}

#[derive(Debug, Serialize)]
pub struct ProcessorPaymentRequest {
	#[serde(rename = "correlationId")]
	pub correlation_id: Uuid,
	pub amount:         f64,
	#[serde(rename = "requestedAt", serialize_with = "serialize_requested_at")]
	pub requested_at:   OffsetDateTime,
}

impl From<&PaymentRequest> for ProcessorPaymentRequest {
	fn from(payment: &PaymentRequest) -> Self {
		Self {
			correlation_id: payment.correlation_id,
			amount:         payment.amount,
			requested_at:   payment.requested_at,
		}
	}
}

#[derive(Debug, Deserialize, Default)]
pub struct ProcessorPaymentResponse {
	#[serde(default)]
	pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HealthCheckResponse {
	pub failing:           bool,
	#[serde(rename = "minResponseTime")]
	pub min_response_time: u64,
}

impl From<HealthCheckResponse> for HealthObservation {
	fn from(response: HealthCheckResponse) -> Self {
		HealthObservation {
			failing:              response.failing,
			min_response_time_ms: response.min_response_time,
		}
	}
}
