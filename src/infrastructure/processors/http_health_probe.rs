use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::domain::health_probe::{HealthProbe, ProbeError};
use crate::domain::health_status::HealthObservation;
use crate::domain::payment_processor::ProcessorId;
use crate::infrastructure::processors::endpoints::ProcessorEndpoints;
use crate::infrastructure::processors::schema::HealthCheckResponse;

#[derive(Clone)]
pub struct HttpHealthProbe {
	http_client: Client,
	endpoints:   ProcessorEndpoints,
	timeout:     Duration,
}

impl HttpHealthProbe {
	pub fn new(
		http_client: Client,
		endpoints: ProcessorEndpoints,
		timeout: Duration,
	) -> Self {
		Self {
			http_client,
			endpoints,
			timeout,
		}
	}
}

#[async_trait]
impl HealthProbe for HttpHealthProbe {
	async fn probe(
		&self,
		processor: ProcessorId,
	) -> Result<HealthObservation, ProbeError> {
		let health_url = self
			.endpoints
			.health_url(processor)
			.ok_or(ProbeError::UnknownProcessor { processor })?;

		let resp = self
			.http_client
			.get(&health_url)
			.timeout(self.timeout)
			.send()
			.await
			.map_err(|e| {
				if e.is_timeout() {
					ProbeError::Timeout
				} else {
					ProbeError::Unreachable {
						reason: e.to_string(),
					}
				}
			})?;

		if !resp.status().is_success() {
			return Err(ProbeError::UnexpectedStatus {
				status: resp.status().as_u16(),
			});
		}

		let health = resp.json::<HealthCheckResponse>().await.map_err(|e| {
			if e.is_timeout() {
				ProbeError::Timeout
			} else {
				ProbeError::MalformedBody {
					reason: e.to_string(),
				}
			}
		})?;

		debug!(
			"{processor} processor health: failing={}, min_response_time={}",
			health.failing, health.min_response_time
		);

		Ok(health.into())
	}
}
