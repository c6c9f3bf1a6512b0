//! Configuration types for the deployment resolver.

use crate::defaults;
use crate::serde_helpers::{deserialize_chain_map, serialize_chain_map};
use deploy_types::{ApiKeySource, Chain, ExplorerConfig, SingletonFactoryRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Complete deployment configuration.
///
/// Constructed once at process entry and passed by reference to the
/// resolvers. Every section falls back to the built-in tables when omitted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DeployConfig {
	/// Managed RPC provider settings
	pub provider: ProviderConfig,
	/// RPC candidates by chain
	#[serde(
		deserialize_with = "deserialize_chain_map",
		serialize_with = "serialize_chain_map"
	)]
	pub endpoints: BTreeMap<Chain, EndpointCandidates>,
	/// Per-chain RPC URLs that replace endpoint resolution for that chain only
	#[serde(
		deserialize_with = "deserialize_chain_map",
		serialize_with = "serialize_chain_map"
	)]
	pub rpc_overrides: BTreeMap<Chain, String>,
	/// Node serving the extra `custom` network; never used for named chains
	#[serde(skip_serializing_if = "Option::is_none")]
	pub custom_rpc: Option<String>,
	/// Request timeout applied to networks without an override
	pub default_timeout_ms: u64,
	/// Per-chain request timeouts
	#[serde(
		deserialize_with = "deserialize_chain_map",
		serialize_with = "serialize_chain_map"
	)]
	pub timeouts: BTreeMap<Chain, u64>,
	/// Block explorer verification tables
	pub explorer: ExplorerTables,
	/// Deterministic deployment settings
	pub deterministic: DeterministicConfig,
}

/// Managed RPC provider settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProviderConfig {
	/// Base URL with a `{network}` placeholder; the provider key is appended.
	pub url_template: String,
}

/// RPC endpoint candidates for one chain.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct EndpointCandidates {
	/// Provider network name; present only when the managed provider serves this chain
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub managed_network: Option<String>,
	/// Public endpoints in priority order
	#[serde(default)]
	pub fallbacks: Vec<String>,
}

/// Explorer configuration and the API keys that go with it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExplorerTables {
	/// Explorers the verification tool cannot discover on its own
	#[serde(
		deserialize_with = "deserialize_chain_map",
		serialize_with = "serialize_chain_map"
	)]
	pub custom_chains: BTreeMap<Chain, ExplorerConfig>,
	/// API key source for each custom explorer
	#[serde(
		deserialize_with = "deserialize_chain_map",
		serialize_with = "serialize_chain_map"
	)]
	pub api_keys: BTreeMap<Chain, ApiKeySource>,
}

/// Deterministic deployment settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DeterministicConfig {
	/// Attach factory records to resolved networks
	pub enabled: bool,
	/// Directory of `<chain_id>/deployment.json` factory artifacts
	#[serde(skip_serializing_if = "Option::is_none")]
	pub registry_dir: Option<PathBuf>,
	/// Local factory table
	pub profile: FactoryProfile,
}

/// A named table of factory records with an optional pinned network.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FactoryProfile {
	pub name: String,
	/// When set, this network's record wins over the external registry
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub active_network: Option<Chain>,
	#[serde(
		default,
		deserialize_with = "deserialize_chain_map",
		serialize_with = "serialize_chain_map"
	)]
	pub factories: BTreeMap<Chain, SingletonFactoryRecord>,
}

impl DeployConfig {
	/// Endpoint candidates for a chain, empty when the chain has none.
	pub fn endpoints_for(&self, chain: Chain) -> EndpointCandidates {
		self.endpoints
			.get(&chain)
			.cloned()
			.unwrap_or_else(|| defaults::endpoints(chain))
	}

	pub fn timeout_for(&self, chain: Chain) -> u64 {
		self.timeouts
			.get(&chain)
			.copied()
			.unwrap_or(self.default_timeout_ms)
	}

	/// Fills chains missing from partial tables with their built-in entries.
	pub fn fill_defaults(&mut self) {
		for chain in Chain::all() {
			self.endpoints
				.entry(*chain)
				.or_insert_with(|| defaults::endpoints(*chain));
		}
	}
}

impl Default for DeployConfig {
	fn default() -> Self {
		Self {
			provider: ProviderConfig::default(),
			endpoints: Chain::all()
				.iter()
				.map(|chain| (*chain, defaults::endpoints(*chain)))
				.collect(),
			rpc_overrides: BTreeMap::new(),
			custom_rpc: None,
			default_timeout_ms: defaults::DEFAULT_TIMEOUT_MS,
			timeouts: defaults::timeouts(),
			explorer: ExplorerTables::default(),
			deterministic: DeterministicConfig::default(),
		}
	}
}

impl Default for ProviderConfig {
	fn default() -> Self {
		Self {
			url_template: defaults::PROVIDER_URL_TEMPLATE.to_string(),
		}
	}
}

impl Default for ExplorerTables {
	fn default() -> Self {
		Self {
			custom_chains: defaults::custom_explorers(),
			api_keys: defaults::explorer_api_keys(),
		}
	}
}

impl Default for DeterministicConfig {
	fn default() -> Self {
		Self {
			enabled: false,
			registry_dir: None,
			profile: defaults::safe_singleton_profile(),
		}
	}
}
