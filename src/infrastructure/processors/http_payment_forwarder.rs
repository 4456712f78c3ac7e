use std::time::Duration;

use async_trait::async_trait;
use log::{error, info, warn};
use reqwest::Client;
use tokio::time::timeout;

use crate::domain::forwarder::{
	ForwardAck, ForwardError, ForwardResult, PaymentForwarder, UnavailableCause,
};
use crate::domain::payment::PaymentRequest;
use crate::domain::payment_processor::ProcessorId;
use crate::infrastructure::processors::endpoints::ProcessorEndpoints;
use crate::infrastructure::processors::schema::{
	ProcessorPaymentRequest, ProcessorPaymentResponse,
};

pub const MAX_ATTEMPTS: u32 = 2;

/// Every attempt must get an answer within its own deadline. Timeouts,
/// connection failures and 5xx answers are retried once; 4xx answers are
/// final. Reading the body of a 2xx answer is bounded separately and never
/// causes a retry.
#[derive(Clone)]
pub struct HttpPaymentForwarder {
	http_client:     Client,
	endpoints:       ProcessorEndpoints,
	attempt_timeout: Duration,
}

impl HttpPaymentForwarder {
	pub fn new(
		http_client: Client,
		endpoints: ProcessorEndpoints,
		attempt_timeout: Duration,
	) -> Self {
		Self {
			http_client,
			endpoints,
			attempt_timeout,
		}
	}

	async fn attempt(
		&self,
		payments_url: &str,
		body: &ProcessorPaymentRequest,
	) -> ForwardResult {
		let send = self.http_client.post(payments_url).json(body).send();
		let resp = match timeout(self.attempt_timeout, send).await {
			Ok(sent) => sent.map_err(|e| {
				let cause = if e.is_timeout() {
					UnavailableCause::Timeout
				} else {
					UnavailableCause::Connection(e.to_string())
				};
				ForwardError::ProcessorUnavailable { cause }
			})?,
			Err(_elapsed) => {
				return Err(ForwardError::ProcessorUnavailable {
					cause: UnavailableCause::Timeout,
				});
			}
		};

		let status = resp.status();

		if status.is_success() {
			// The processor has taken the payment once it answered 2xx, so a
			// slow or unreadable body is still a delivery.
			let message = match timeout(
				self.attempt_timeout,
				resp.json::<ProcessorPaymentResponse>(),
			)
			.await
			{
				Ok(Ok(ack)) => ack.message,
				Ok(Err(e)) => {
					warn!(
						"Could not read acknowledgement for {}: {e}",
						body.correlation_id
					);
					None
				}
				Err(_elapsed) => {
					warn!(
						"Acknowledgement for {} did not arrive in time",
						body.correlation_id
					);
					None
				}
			};
			return Ok(ForwardAck { message });
		}

		if status.is_client_error() {
			return Err(ForwardError::ClientRejected {
				status: status.as_u16(),
			});
		}

		let cause = if status.is_server_error() {
			UnavailableCause::ServerError(status.as_u16())
		} else {
			UnavailableCause::UnexpectedStatus(status.as_u16())
		};
		Err(ForwardError::ProcessorUnavailable { cause })
	}
}

#[async_trait]
impl PaymentForwarder for HttpPaymentForwarder {
	async fn forward(
		&self,
		processor: ProcessorId,
		payment: &PaymentRequest,
	) -> ForwardResult {
		let Some(payments_url) = self.endpoints.payments_url(processor) else {
			error!("No payments endpoint configured for processor {processor}");
			return Err(ForwardError::InvalidProcessor {
				processor: processor.to_string(),
			});
		};

		let body = ProcessorPaymentRequest::from(payment);
		let mut attempt = 1;

		loop {
			let result = self.attempt(&payments_url, &body).await;

			match result {
				Ok(ack) => {
					info!(
						"Payment {} processed by {processor} processor.",
						payment.correlation_id
					);
					return Ok(ack);
				}
				Err(e) if e.is_retryable() && attempt < MAX_ATTEMPTS => {
					warn!(
						"{processor} processor failed for {}: {e}. Attempt \
						 {attempt}/{MAX_ATTEMPTS}",
						payment.correlation_id
					);
					attempt += 1;
				}
				Err(e) => {
					error!(
						"Payment {} could not be processed by {processor} processor \
						 after {attempt} attempt(s): {e}",
						payment.correlation_id
					);
					return Err(e);
				}
			}
		}
	}
}
