use actix_web::{HttpResponse, web};
use log::error;

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::PaymentsSummaryFilter;
use crate::domain::repository::PaymentRepository;
use crate::use_cases::dto::GetPaymentSummaryQuery;
use crate::use_cases::get_payment_summary::GetPaymentSummaryUseCase;

pub async fn payments_summary<R: PaymentRepository>(
	filter: web::Query<PaymentsSummaryFilter>,
	get_payment_summary_use_case: web::Data<GetPaymentSummaryUseCase<R>>,
) -> Result<HttpResponse, ApiError> {
	let query = GetPaymentSummaryQuery {
		from: filter.from,
		to:   filter.to,
	};

	match get_payment_summary_use_case.execute(query).await {
		Ok(summary) => Ok(HttpResponse::Ok().json(summary)),
		Err(e) => {
			error!("Error getting payment summary: {e}");
			Err(ApiError::from(e))
		}
	}
}
