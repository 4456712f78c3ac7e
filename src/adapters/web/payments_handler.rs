use actix_web::{HttpResponse, web};
use log::{info, warn};

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::{PaymentRequest, PaymentResponse};
use crate::domain::payment_router::PaymentRouter;
use crate::domain::repository::PaymentRepository;
use crate::use_cases::dto::CreatePaymentCommand;
use crate::use_cases::process_payment::ProcessPaymentUseCase;

pub async fn payments<P, R>(
	payload: web::Json<PaymentRequest>,
	process_payment_use_case: web::Data<ProcessPaymentUseCase<P, R>>,
) -> Result<HttpResponse, ApiError>
where
	P: PaymentRouter,
	R: PaymentRepository + Clone,
{
	if !payload.has_valid_amount() {
		warn!(
			"Rejecting payment {} with invalid amount {}",
			payload.correlation_id, payload.amount
		);
		return Err(ApiError::BadClientDataError);
	}

	let command = CreatePaymentCommand {
		correlation_id: payload.correlation_id,
		amount:         payload.amount,
	};

	match process_payment_use_case.execute(command).await {
		Ok(processed) => {
			info!(
				"Payment {} processed by {}",
				processed.correlation_id, processed.processor
			);
			Ok(HttpResponse::Accepted().json(PaymentResponse {
				correlation_id: processed.correlation_id,
				processor:      processed.processor,
				message:        processed.message,
			}))
		}
		Err(e) => {
			warn!("Error processing payment {}: {e}", payload.correlation_id);
			Err(ApiError::from(e))
		}
	}
}
