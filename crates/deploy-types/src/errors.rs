//! Error types for configuration resolution.

use crate::chains::Chain;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DeployError>;

/// Failures raised while resolving a network bundle.
///
/// All of these are startup conditions. Nothing here is retried; a caller that
/// receives one of them must abort before touching any chain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeployError {
	#[error("Unknown chain: {0}")]
	UnknownChain(String),

	#[error("Could not find {secret} in env, unable to configure network {network}")]
	MissingSecret { secret: String, network: String },

	#[error("Explorer config for chain {} ({chain}) has no API key entry", .chain.id())]
	IntegrityViolation { chain: Chain },

	#[error("Malformed singleton factory record for chain {} ({chain}): {reason}", .chain.id())]
	MalformedFactoryRecord { chain: Chain, reason: String },

	#[error("Invalid endpoint '{url}' for network {chain}: {reason}")]
	InvalidEndpoint {
		chain: Chain,
		url: String,
		reason: String,
	},
}
