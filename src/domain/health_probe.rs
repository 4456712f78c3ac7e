use async_trait::async_trait;
use derive_more::derive::{Display, Error};

use crate::domain::health_status::HealthObservation;
use crate::domain::payment_processor::ProcessorId;

#[derive(Debug, Display, Error, Clone, PartialEq)]
pub enum ProbeError {
	#[display("No health endpoint configured for processor {processor}")]
	UnknownProcessor { processor: ProcessorId },
	#[display("Health check timed out")]
	Timeout,
	#[display("Health endpoint unreachable: {reason}")]
	Unreachable { reason: String },
	#[display("Health endpoint answered with status {status}")]
	UnexpectedStatus { status: u16 },
	#[display("Health endpoint answered with a malformed body: {reason}")]
	MalformedBody { reason: String },
}

#[async_trait]
pub trait HealthProbe: Send + Sync + 'static {
	async fn probe(
		&self,
		processor: ProcessorId,
	) -> Result<HealthObservation, ProbeError>;
}
