use std::collections::HashMap;

use crate::domain::payment_processor::ProcessorId;

#[derive(Debug, Clone, Default)]
pub struct ProcessorEndpoints {
	urls: HashMap<ProcessorId, String>,
}

impl ProcessorEndpoints {
	pub fn new(default_url: &str, fallback_url: &str) -> Self {
		Self::default()
			.with(ProcessorId::Primary, default_url)
			.with(ProcessorId::Secondary, fallback_url)
	}

	pub fn with(mut self, processor: ProcessorId, base_url: &str) -> Self {
		self.urls
			.insert(processor, base_url.trim_end_matches('/').to_string());
		self
	}

	pub fn base_url(&self, processor: ProcessorId) -> Option<&str> {
		self.urls.get(&processor).map(String::as_str)
	}

	pub fn payments_url(&self, processor: ProcessorId) -> Option<String> {
		self.base_url(processor).map(|url| format!("{url}/payments"))
	}

	pub fn health_url(&self, processor: ProcessorId) -> Option<String> {
		self.base_url(processor)
			.map(|url| format!("{url}/payments/service-health"))
	}
}
