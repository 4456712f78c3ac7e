use actix_web::web;
use log::warn;

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::payments_handler::payments;
use crate::adapters::web::payments_purge_handler::payments_purge;
use crate::adapters::web::payments_summary_handler::payments_summary;
use crate::domain::payment_router::PaymentRouter;
use crate::domain::repository::PaymentRepository;

/// Registers the gateway endpoints. The use cases are expected as app data.
/// Malformed bodies and query strings are answered with the JSON error body.
pub fn configure<P, R>(cfg: &mut web::ServiceConfig)
where
	P: PaymentRouter,
	R: PaymentRepository + Clone,
{
	cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
		warn!("Invalid payment body: {err}");
		ApiError::BadClientDataError.into()
	}))
	.app_data(web::QueryConfig::default().error_handler(|err, _req| {
		warn!("Invalid summary filter: {err}");
		ApiError::BadClientDataError.into()
	}))
	.service(web::resource("/payments").route(web::post().to(payments::<P, R>)))
	.service(
		web::resource("/payments-summary")
			.route(web::get().to(payments_summary::<R>)),
	)
	.service(
		web::resource("/purge-payments")
			.route(web::post().to(payments_purge::<R>)),
	);
}
