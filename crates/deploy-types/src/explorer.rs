//! Block-explorer verification types.

use serde::{Deserialize, Serialize};

/// Custom explorer endpoints for a chain the verification tool cannot
/// discover on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerConfig {
	/// Verification API base URL
	pub api_url: String,
	/// Human-facing explorer URL
	pub browser_url: String,
}

/// Where the API key for an explorer comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum ApiKeySource {
	/// The `ETHERSCAN_API_KEY` secret.
	Etherscan,
	/// A fixed value. Empty when the explorer needs no key.
	Literal { value: String },
}

impl ApiKeySource {
	/// Placeholder entry for explorers that accept unauthenticated requests.
	pub fn placeholder() -> Self {
		Self::Literal {
			value: String::new(),
		}
	}
}

/// Explorer wiring attached to a resolved network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerSettings {
	pub api_key: String,
	#[serde(rename = "apiURL")]
	pub api_url: String,
	#[serde(rename = "browserURL")]
	pub browser_url: String,
}
