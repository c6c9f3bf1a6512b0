//! Resolves a network name into the configuration bundle a deployment tool
//! needs: RPC endpoint, signing accounts, explorer verification wiring and,
//! when enabled, the singleton factory used for deterministic addresses.
//!
//! [`NetworkResolver::new`] runs the explorer integrity check before
//! returning, so holding a resolver means the tables are consistent.
//! Resolution itself is pure and can be shared across threads.

pub mod endpoint;
pub mod explorer;
pub mod factory;

pub use endpoint::{mask_url, provider_base_url, resolve_rpc_url};
pub use explorer::{resolve_explorer, verify_explorer_integrity};
pub use factory::{deterministic_deployment, resolve_factory};

use deploy_config::loader::NODE_URL_VAR;
use deploy_config::{DeployConfig, FactoryRegistry, Secrets};
use deploy_types::{
	Chain, DeployError, DeterministicDeployment, ExplorerSettings, LocalChainSettings,
	ResolvedNetworkConfig, Result, RpcEndpoint, SingletonFactoryRecord,
};
use tracing::{debug, info};

/// Name of the extra network served by the `NODE_URL` node.
pub const CUSTOM_NETWORK: &str = "custom";

/// Resolver over a validated configuration.
#[derive(Debug, Clone)]
pub struct NetworkResolver {
	config: DeployConfig,
	secrets: Secrets,
	registry: FactoryRegistry,
}

impl NetworkResolver {
	/// Builds a resolver, failing if any custom explorer lacks an API key entry.
	pub fn new(config: DeployConfig, secrets: Secrets, registry: FactoryRegistry) -> Result<Self> {
		verify_explorer_integrity(&config.explorer.custom_chains, &config.explorer.api_keys)?;

		info!(
			"Resolver ready: {} custom explorers, {} registry factories, deterministic deployment {}",
			config.explorer.custom_chains.len(),
			registry.len(),
			if config.deterministic.enabled { "on" } else { "off" }
		);

		Ok(Self {
			config,
			secrets,
			registry,
		})
	}

	pub fn config(&self) -> &DeployConfig {
		&self.config
	}

	pub fn secrets(&self) -> &Secrets {
		&self.secrets
	}

	/// Resolves a network by name, alias or decimal chain id, or the
	/// [`CUSTOM_NETWORK`].
	pub fn resolve(&self, network: &str) -> Result<ResolvedNetworkConfig> {
		if network.trim() == CUSTOM_NETWORK {
			return self.resolve_custom();
		}
		self.resolve_chain(Chain::lookup(network)?)
	}

	/// Bundle for the node given by `NODE_URL`. It has no chain id, explorer
	/// or factory record of its own.
	pub fn resolve_custom(&self) -> Result<ResolvedNetworkConfig> {
		let url = self
			.config
			.custom_rpc
			.clone()
			.ok_or_else(|| DeployError::MissingSecret {
				secret: NODE_URL_VAR.to_string(),
				network: CUSTOM_NETWORK.to_string(),
			})?;
		debug!("Resolving {} network", CUSTOM_NETWORK);

		Ok(ResolvedNetworkConfig {
			name: CUSTOM_NETWORK.to_string(),
			chain_id: None,
			rpc_url: RpcEndpoint::Remote(url),
			accounts: self.secrets.accounts(),
			timeout_ms: self.config.default_timeout_ms,
			explorer: None,
			local: None,
			deterministic_deployment: None,
		})
	}

	/// Resolves the full bundle for `chain`. No partial results: any missing
	/// piece fails the whole resolution.
	pub fn resolve_chain(&self, chain: Chain) -> Result<ResolvedNetworkConfig> {
		debug!("Resolving network {} ({})", chain, chain.id());

		let rpc_url = self.resolve_rpc_url(chain)?;
		let explorer = self.resolve_explorer(chain)?;
		let deterministic_deployment = if self.config.deterministic.enabled {
			self.deterministic_deployment(chain)?
		} else {
			None
		};
		let local = matches!(rpc_url, RpcEndpoint::InProcess).then(LocalChainSettings::default);

		Ok(ResolvedNetworkConfig {
			name: chain.name().to_string(),
			chain_id: Some(chain.id()),
			rpc_url,
			accounts: self.secrets.accounts(),
			timeout_ms: self.config.timeout_for(chain),
			explorer,
			local,
			deterministic_deployment,
		})
	}

	/// Resolves every requested network up front so a run aborts before any
	/// chain interaction if one of them is incomplete.
	pub fn preflight<S: AsRef<str>>(&self, networks: &[S]) -> Result<Vec<ResolvedNetworkConfig>> {
		networks
			.iter()
			.map(|network| self.resolve(network.as_ref()))
			.collect()
	}

	/// Copy of `resolved` safe to print. On top of
	/// [`ResolvedNetworkConfig::redacted`], RPC URLs supplied by the operator
	/// lose their credentials, path and query.
	pub fn redact(&self, resolved: &ResolvedNetworkConfig) -> ResolvedNetworkConfig {
		let mut copy = resolved.redacted(self.secrets.provider_key.as_deref());
		if let (RpcEndpoint::Remote(original), RpcEndpoint::Remote(url)) =
			(&resolved.rpc_url, &mut copy.rpc_url)
		{
			if self.is_operator_url(original) {
				*url = mask_url(original);
			}
		}
		copy
	}

	fn is_operator_url(&self, url: &str) -> bool {
		self.config.custom_rpc.as_deref() == Some(url)
			|| self.config.rpc_overrides.values().any(|o| o == url)
	}

	pub fn resolve_rpc_url(&self, chain: Chain) -> Result<RpcEndpoint> {
		resolve_rpc_url(&self.config, &self.secrets, chain)
	}

	pub fn resolve_explorer(&self, chain: Chain) -> Result<Option<ExplorerSettings>> {
		resolve_explorer(&self.config.explorer, &self.secrets, chain)
	}

	pub fn resolve_factory(&self, chain: Chain) -> Result<Option<SingletonFactoryRecord>> {
		resolve_factory(&self.config.deterministic.profile, &self.registry, chain)
	}

	pub fn deterministic_deployment(&self, chain: Chain) -> Result<Option<DeterministicDeployment>> {
		deterministic_deployment(&self.config.deterministic.profile, &self.registry, chain)
	}
}
