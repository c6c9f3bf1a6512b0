//! Block explorer verification wiring.

use deploy_config::secrets::ETHERSCAN_API_KEY_VAR;
use deploy_config::{ExplorerTables, Secrets};
use deploy_types::{ApiKeySource, Chain, DeployError, ExplorerConfig, ExplorerSettings, Result};
use std::collections::BTreeMap;

/// Checks that every chain with a custom explorer also has an API key entry.
///
/// Reports the lowest chain id missing a key. Must pass before any network
/// is resolved.
pub fn verify_explorer_integrity(
	explorers: &BTreeMap<Chain, ExplorerConfig>,
	api_keys: &BTreeMap<Chain, ApiKeySource>,
) -> Result<()> {
	let mut chains: Vec<Chain> = explorers.keys().copied().collect();
	chains.sort_by_key(|chain| chain.id());

	match chains.into_iter().find(|chain| !api_keys.contains_key(chain)) {
		Some(chain) => Err(DeployError::IntegrityViolation { chain }),
		None => Ok(()),
	}
}

/// Explorer settings for `chain`, or `None` when the verification tool's
/// built-in explorers cover it.
pub fn resolve_explorer(
	tables: &ExplorerTables,
	secrets: &Secrets,
	chain: Chain,
) -> Result<Option<ExplorerSettings>> {
	let Some(explorer) = tables.custom_chains.get(&chain) else {
		return Ok(None);
	};

	let api_key = match tables.api_keys.get(&chain) {
		Some(ApiKeySource::Literal { value }) => value.clone(),
		Some(ApiKeySource::Etherscan) => {
			secrets
				.etherscan_api_key
				.clone()
				.ok_or_else(|| DeployError::MissingSecret {
					secret: ETHERSCAN_API_KEY_VAR.to_string(),
					network: chain.to_string(),
				})?
		}
		None => return Err(DeployError::IntegrityViolation { chain }),
	};

	Ok(Some(ExplorerSettings {
		api_key,
		api_url: explorer.api_url.clone(),
		browser_url: explorer.browser_url.clone(),
	}))
}
