use std::io;
use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use log::{info, warn};
use reqwest::Client;

use crate::adapters::web::routes::configure;
use crate::domain::payment_router::PaymentRouter;
use crate::domain::repository::PaymentRepository;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::persistence::in_memory_payment_repository::InMemoryPaymentRepository;
use crate::infrastructure::persistence::redis_payment_repository::RedisPaymentRepository;
use crate::infrastructure::processors::endpoints::ProcessorEndpoints;
use crate::infrastructure::processors::http_health_probe::HttpHealthProbe;
use crate::infrastructure::processors::http_payment_forwarder::HttpPaymentForwarder;
use crate::infrastructure::routing::health_aware_payment_router::HealthAwarePaymentRouter;
use crate::infrastructure::routing::health_cache::HealthCache;
use crate::infrastructure::workers::processor_health_monitor_worker::spawn_processor_health_monitor;
use crate::use_cases::get_payment_summary::GetPaymentSummaryUseCase;
use crate::use_cases::process_payment::ProcessPaymentUseCase;
use crate::use_cases::purge_payments::PurgePaymentsUseCase;

pub mod adapters;
pub mod domain;
pub mod infrastructure;
pub mod use_cases;

pub async fn run(config: Arc<Config>) -> io::Result<()> {
	let http_client = Client::new();
	let endpoints = ProcessorEndpoints::new(
		&config.default_payment_processor_url,
		&config.fallback_payment_processor_url,
	);

	let (health_cache, health_cache_writer) = HealthCache::with_writer();

	info!("Starting processor health monitor...");
	spawn_processor_health_monitor(
		HttpHealthProbe::new(
			http_client.clone(),
			endpoints.clone(),
			config.health_check_timeout(),
		),
		health_cache_writer,
		config.health_check_interval(),
	);

	let router = Arc::new(HealthAwarePaymentRouter::new(
		health_cache,
		HttpPaymentForwarder::new(http_client, endpoints, config.payment_timeout()),
	));

	match config.redis_url.as_deref() {
		Some(redis_url) => {
			let redis_client =
				redis::Client::open(redis_url).map_err(io::Error::other)?;
			serve(&config, router, RedisPaymentRepository::new(redis_client)).await
		}
		None => {
			warn!("No Redis configured, payments are kept in memory");
			serve(&config, router, InMemoryPaymentRepository::new()).await
		}
	}
}

async fn serve<P, R>(config: &Config, router: Arc<P>, repository: R) -> io::Result<()>
where
	P: PaymentRouter,
	R: PaymentRepository + Clone,
{
	let process_payment_use_case =
		web::Data::new(ProcessPaymentUseCase::new(router, repository.clone()));
	let get_payment_summary_use_case =
		web::Data::new(GetPaymentSummaryUseCase::new(repository.clone()));
	let purge_payments_use_case =
		web::Data::new(PurgePaymentsUseCase::new(repository));

	info!(
		"Starting Actix-Web server on 0.0.0.0:{}...",
		config.server_port
	);
	HttpServer::new(move || {
		App::new()
			.app_data(process_payment_use_case.clone())
			.app_data(get_payment_summary_use_case.clone())
			.app_data(purge_payments_use_case.clone())
			.configure(configure::<P, R>)
	})
	.keep_alive(config.server_keepalive())
	.bind(("0.0.0.0", config.server_port))?
	.run()
	.await
}
