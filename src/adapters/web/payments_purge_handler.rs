use actix_web::{HttpResponse, web};
use log::{error, info};

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::MessageResponse;
use crate::domain::repository::PaymentRepository;
use crate::use_cases::purge_payments::PurgePaymentsUseCase;

pub async fn payments_purge<R: PaymentRepository>(
	purge_use_case: web::Data<PurgePaymentsUseCase<R>>,
) -> Result<HttpResponse, ApiError> {
	info!("Received request to purge payments");
	match purge_use_case.execute().await {
		Ok(()) => {
			info!("Payments purged successfully");
			Ok(HttpResponse::Ok().json(MessageResponse {
				message: "All payments purged.".to_string(),
			}))
		}
		Err(e) => {
			error!("Failed to purge payments: {e}");
			Err(ApiError::from(e))
		}
	}
}
