use std::sync::Arc;

use async_trait::async_trait;
use derive_more::derive::{Display, Error};

use crate::domain::payment::PaymentRequest;
use crate::domain::payment_processor::ProcessorId;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ForwardAck {
	pub message: Option<String>,
}

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum UnavailableCause {
	#[display("timed out")]
	Timeout,
	#[display("connection failed: {_0}")]
	Connection(String),
	#[display("server error {_0}")]
	ServerError(u16),
	#[display("unexpected status {_0}")]
	UnexpectedStatus(u16),
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ForwardError {
	#[display("Invalid payment processor: {processor}")]
	InvalidProcessor { processor: String },
	#[display("Payment rejected by the processor with status {status}")]
	ClientRejected { status: u16 },
	#[display("Payment processor unavailable: {cause}")]
	ProcessorUnavailable { cause: UnavailableCause },
}

impl ForwardError {
	pub fn is_retryable(&self) -> bool {
		matches!(self, ForwardError::ProcessorUnavailable { .. })
	}
}

pub type ForwardResult = Result<ForwardAck, ForwardError>;

#[async_trait]
pub trait PaymentForwarder: Send + Sync + 'static {
	async fn forward(
		&self,
		processor: ProcessorId,
		payment: &PaymentRequest,
	) -> ForwardResult;
}

#[async_trait]
impl<T: PaymentForwarder + ?Sized> PaymentForwarder for Arc<T> {
	async fn forward(
		&self,
		processor: ProcessorId,
		payment: &PaymentRequest,
	) -> ForwardResult {
		self.as_ref().forward(processor, payment).await
	}
}
