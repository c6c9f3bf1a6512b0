//! Resolved per-network configuration handed to the deployment tool.

use crate::explorer::ExplorerSettings;
use crate::factory::DeterministicDeployment;
use serde::Serialize;
use std::fmt;

const REDACTED: &str = "<redacted>";

/// RPC target for a network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "url", rename_all = "snake_case")]
pub enum RpcEndpoint {
	Remote(String),
	/// No remote endpoint; the deployment tool runs its own chain.
	InProcess,
}

impl RpcEndpoint {
	pub fn as_url(&self) -> Option<&str> {
		match self {
			RpcEndpoint::Remote(url) => Some(url),
			RpcEndpoint::InProcess => None,
		}
	}
}

impl fmt::Display for RpcEndpoint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			RpcEndpoint::Remote(url) => f.write_str(url),
			RpcEndpoint::InProcess => f.write_str("in-process"),
		}
	}
}

/// Signing accounts shared by every remote network.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Accounts {
	PrivateKeys(Vec<String>),
	Mnemonic { mnemonic: String },
}

impl Accounts {
	fn redacted(&self) -> Self {
		match self {
			Accounts::PrivateKeys(keys) => {
				Accounts::PrivateKeys(keys.iter().map(|_| REDACTED.to_string()).collect())
			}
			Accounts::Mnemonic { .. } => Accounts::Mnemonic {
				mnemonic: REDACTED.to_string(),
			},
		}
	}
}

impl fmt::Debug for Accounts {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Accounts::PrivateKeys(keys) => write!(f, "PrivateKeys({} keys)", keys.len()),
			Accounts::Mnemonic { .. } => f.write_str("Mnemonic(..)"),
		}
	}
}

/// Settings for the in-process chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalChainSettings {
	pub allow_unlimited_contract_size: bool,
	pub block_gas_limit: u64,
	pub gas: u64,
}

impl Default for LocalChainSettings {
	fn default() -> Self {
		Self {
			allow_unlimited_contract_size: true,
			block_gas_limit: 100_000_000,
			gas: 100_000_000,
		}
	}
}

/// Complete configuration for one network. Built fresh on every resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedNetworkConfig {
	pub name: String,
	/// Absent for the custom network, whose node reports its own id
	#[serde(skip_serializing_if = "Option::is_none")]
	pub chain_id: Option<u64>,
	pub rpc_url: RpcEndpoint,
	pub accounts: Accounts,
	pub timeout_ms: u64,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub explorer: Option<ExplorerSettings>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub local: Option<LocalChainSettings>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub deterministic_deployment: Option<DeterministicDeployment>,
}

impl ResolvedNetworkConfig {
	/// Copy safe to print: account secrets and explorer key are masked.
	///
	/// RPC URLs are masked too when they carry a provider key in the path.
	pub fn redacted(&self, provider_key: Option<&str>) -> Self {
		let mut copy = self.clone();
		copy.accounts = self.accounts.redacted();
		if let Some(explorer) = copy.explorer.as_mut() {
			if !explorer.api_key.is_empty() {
				explorer.api_key = REDACTED.to_string();
			}
		}
		if let (RpcEndpoint::Remote(url), Some(key)) = (&mut copy.rpc_url, provider_key) {
			if !key.is_empty() {
				*url = url.replace(key, REDACTED);
			}
		}
		copy
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> ResolvedNetworkConfig {
		ResolvedNetworkConfig {
			name: "polygon".to_string(),
			chain_id: Some(137),
			rpc_url: RpcEndpoint::Remote("https://polygon-mainnet.infura.io/v3/secret".to_string()),
			accounts: Accounts::PrivateKeys(vec!["0xabc".to_string()]),
			timeout_ms: 20_000,
			explorer: Some(ExplorerSettings {
				api_key: "etherscan-key".to_string(),
				api_url: "https://api.example.com".to_string(),
				browser_url: "https://example.com".to_string(),
			}),
			local: None,
			deterministic_deployment: None,
		}
	}

	#[test]
	fn test_redacted_masks_secrets() {
		let redacted = sample().redacted(Some("secret"));
		assert_eq!(
			redacted.accounts,
			Accounts::PrivateKeys(vec![REDACTED.to_string()])
		);
		assert_eq!(redacted.explorer.unwrap().api_key, REDACTED);
		assert_eq!(
			redacted.rpc_url.as_url(),
			Some("https://polygon-mainnet.infura.io/v3/<redacted>")
		);
	}

	#[test]
	fn test_accounts_debug_hides_keys() {
		let accounts = Accounts::Mnemonic {
			mnemonic: "candy maple".to_string(),
		};
		assert!(!format!("{:?}", accounts).contains("candy"));
	}

	#[test]
	fn test_serialization_shape() {
		let value = serde_json::to_value(sample()).unwrap();
		assert_eq!(value["chainId"], 137);
		assert_eq!(value["timeoutMs"], 20_000);
		assert_eq!(value["rpcUrl"]["kind"], "remote");
		assert!(value.get("local").is_none());

		let in_process = serde_json::to_value(RpcEndpoint::InProcess).unwrap();
		assert_eq!(in_process["kind"], "in_process");
	}
}
