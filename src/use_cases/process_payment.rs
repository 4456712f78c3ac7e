use std::sync::Arc;

use log::{error, info};

use crate::domain::forwarder::ForwardError;
use crate::domain::payment::{Payment, PaymentRequest};
use crate::domain::payment_router::{PaymentRouter, RoutingOutcome};
use crate::domain::repository::PaymentRepository;
use crate::use_cases::dto::{CreatePaymentCommand, ProcessedPayment};

pub struct ProcessPaymentUseCase<P: PaymentRouter, R: PaymentRepository> {
	router:       Arc<P>,
	payment_repo: R,
}

impl<P: PaymentRouter, R: PaymentRepository + Clone> Clone
	for ProcessPaymentUseCase<P, R>
{
	fn clone(&self) -> Self {
		Self {
			router:       self.router.clone(),
			payment_repo: self.payment_repo.clone(),
		}
	}
}

impl<P: PaymentRouter, R: PaymentRepository + Clone> ProcessPaymentUseCase<P, R> {
	pub fn new(router: Arc<P>, payment_repo: R) -> Self {
		Self {
			router,
			payment_repo,
		}
	}

	/// Routes the payment and, once a processor accepted it, records it in the
	/// background. Recording is detached from the caller, so a caller going
	/// away after delivery does not lose the record.
	pub async fn execute(
		&self,
		command: CreatePaymentCommand,
	) -> Result<ProcessedPayment, ForwardError> {
		let request = PaymentRequest::new(command.correlation_id, command.amount);

		let RoutingOutcome { processor, result } = self.router.route(&request).await;
		let ack = result?;

		let payment = Payment::processed(&request, processor);
		let payment_repo = self.payment_repo.clone();
		tokio::spawn(async move {
			let correlation_id = payment.correlation_id;
			match payment_repo.save(payment).await {
				Ok(()) => info!("Payment {correlation_id} recorded for {processor}"),
				Err(e) => error!("Failed to record payment {correlation_id}: {e}"),
			}
		});

		Ok(ProcessedPayment {
			correlation_id: request.correlation_id,
			processor,
			message: ack.message,
		})
	}
}
