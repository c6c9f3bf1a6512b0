//! Configuration loading for the deployment resolver.

pub mod defaults;
pub mod loader;
pub mod registry;
pub mod secrets;
pub mod serde_helpers;
pub mod types;

pub use loader::{load_config, ConfigLoader};
pub use registry::FactoryRegistry;
pub use secrets::Secrets;
pub use types::*;

use deploy_types::DeployError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("File not found: {0}")]
	FileNotFound(String),

	#[error("Parse error: {0}")]
	ParseError(String),

	#[error("Validation error: {0}")]
	ValidationError(String),

	#[error("IO error: {0}")]
	IoError(#[from] std::io::Error),

	#[error(transparent)]
	Deploy(#[from] DeployError),
}
