//! Tracing setup. Logs go to stderr so stdout carries only command output.

use anyhow::{anyhow, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Tracing configuration
#[derive(Debug, Clone)]
pub struct TracingConfig {
	pub level: String,
	pub json_format: bool,
}

impl TracingConfig {
	pub fn new(level: impl Into<String>) -> Self {
		Self {
			level: level.into(),
			json_format: false,
		}
	}

	pub fn with_json_format(mut self, json: bool) -> Self {
		self.json_format = json;
		self
	}
}

/// Initialize tracing. `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing(config: &TracingConfig) -> Result<()> {
	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

	let registry = tracing_subscriber::registry().with(env_filter);

	let result = if config.json_format {
		registry
			.with(
				tracing_subscriber::fmt::layer()
					.json()
					.with_writer(std::io::stderr),
			)
			.try_init()
	} else {
		registry
			.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
			.try_init()
	};

	result.map_err(|e| anyhow!("Failed to initialize tracing: {}", e))
}
