use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
	pub default_payment_processor_url:  String,
	pub fallback_payment_processor_url: String,
	/// Payments are kept in memory when unset.
	pub redis_url:                      Option<String>,
	pub server_port:                    u16,
	pub server_keepalive:               u64,
	pub health_check_interval_ms:       u64,
	pub health_check_timeout_ms:        u64,
	pub payment_timeout_ms:             u64,
}

impl Config {
	pub fn load() -> Result<Self, config::ConfigError> {
		Self::load_from(config::Environment::with_prefix("APP"))
	}

	pub fn load_from(
		environment: config::Environment,
	) -> Result<Self, config::ConfigError> {
		let config_builder = config::Config::builder()
			.set_default("server_port", 9999)?
			.set_default("server_keepalive", 75)?
			.set_default("health_check_interval_ms", 5000)?
			.set_default("health_check_timeout_ms", 2000)?
			.set_default("payment_timeout_ms", 2000)?
			.add_source(environment)
			.build()?;

		config_builder.try_deserialize()
	}

	pub fn health_check_interval(&self) -> Duration {
		Duration::from_millis(self.health_check_interval_ms)
	}

	pub fn health_check_timeout(&self) -> Duration {
		Duration::from_millis(self.health_check_timeout_ms)
	}

	pub fn payment_timeout(&self) -> Duration {
		Duration::from_millis(self.payment_timeout_ms)
	}

	pub fn server_keepalive(&self) -> Duration {
		Duration::from_secs(self.server_keepalive)
	}
}
