use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::forwarder::ForwardError;

/// `Primary` is reported as `default` and `Secondary` as `fallback`, the names
/// used by the payments summary contract.
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum ProcessorId {
	#[serde(rename = "default")]
	Primary,
	#[serde(rename = "fallback")]
	Secondary,
}

impl ProcessorId {
	pub const ALL: [ProcessorId; 2] = [ProcessorId::Primary, ProcessorId::Secondary];

	pub fn as_str(&self) -> &'static str {
		match self {
			ProcessorId::Primary => "default",
			ProcessorId::Secondary => "fallback",
		}
	}
}

impl fmt::Display for ProcessorId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ProcessorId {
	type Err = ForwardError;

	fn from_str(name: &str) -> Result<Self, Self::Err> {
		match name.to_ascii_lowercase().as_str() {
			"default" | "primary" => Ok(ProcessorId::Primary),
			"fallback" | "secondary" => Ok(ProcessorId::Secondary),
			_ => Err(ForwardError::InvalidProcessor {
				processor: name.to_string(),
			}),
		}
	}
}
