use async_trait::async_trait;
use log::debug;

use crate::domain::forwarder::PaymentForwarder;
use crate::domain::payment::PaymentRequest;
use crate::domain::payment_processor::ProcessorId;
use crate::domain::payment_router::{PaymentRouter, RoutingOutcome};
use crate::domain::processor_selector::select_processor;
use crate::infrastructure::routing::health_cache::HealthCache;

/// Picks a processor from the cached health observations and forwards the
/// payment to it. One selection and one forwarding per payment; retries are
/// the forwarder's business.
#[derive(Clone)]
pub struct HealthAwarePaymentRouter<F: PaymentForwarder> {
	health_cache: HealthCache,
	forwarder:    F,
}

impl<F: PaymentForwarder> HealthAwarePaymentRouter<F> {
	pub fn new(health_cache: HealthCache, forwarder: F) -> Self {
		Self {
			health_cache,
			forwarder,
		}
	}

	pub fn select(&self) -> ProcessorId {
		select_processor(
			&self.health_cache.get(ProcessorId::Primary),
			&self.health_cache.get(ProcessorId::Secondary),
		)
	}
}

#[async_trait]
impl<F: PaymentForwarder> PaymentRouter for HealthAwarePaymentRouter<F> {
	async fn route(&self, payment: &PaymentRequest) -> RoutingOutcome {
		let processor = self.select();
		debug!(
			"Forwarding payment {} to {processor} processor",
			payment.correlation_id
		);

		let result = self.forwarder.forward(processor, payment).await;

		RoutingOutcome { processor, result }
	}
}
