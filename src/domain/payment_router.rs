use async_trait::async_trait;

use crate::domain::forwarder::ForwardResult;
use crate::domain::payment::PaymentRequest;
use crate::domain::payment_processor::ProcessorId;

#[derive(Debug, Clone, PartialEq)]
pub struct RoutingOutcome {
	pub processor: ProcessorId,
	pub result:    ForwardResult,
}

impl RoutingOutcome {
	pub fn is_delivered(&self) -> bool {
		self.result.is_ok()
	}
}

#[async_trait]
pub trait PaymentRouter: Send + Sync + 'static {
	async fn route(&self, payment: &PaymentRequest) -> RoutingOutcome;
}
