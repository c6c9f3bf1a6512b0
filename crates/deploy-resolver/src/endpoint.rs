//! RPC endpoint selection.

use deploy_config::secrets::PROVIDER_KEY_VAR;
use deploy_config::{DeployConfig, Secrets};
use deploy_types::{Chain, DeployError, Result, RpcEndpoint};
use tracing::debug;
use url::Url;

/// Managed provider URL for a provider network, without the key.
pub fn provider_base_url(template: &str, network: &str) -> String {
	template.replace("{network}", network)
}

/// Picks the RPC endpoint for `chain`.
///
/// The in-process chain always gets the placeholder. Remote chains try their
/// own entry in `rpc_overrides`, then the managed provider (when it serves the chain and
/// a key is configured), then the first public fallback. A remote chain with
/// none of these is a configuration error.
pub fn resolve_rpc_url(config: &DeployConfig, secrets: &Secrets, chain: Chain) -> Result<RpcEndpoint> {
	if chain.is_in_process() {
		return Ok(RpcEndpoint::InProcess);
	}

	if let Some(url) = config.rpc_overrides.get(&chain) {
		debug!("Using RPC override for network {}", chain);
		return Ok(RpcEndpoint::Remote(url.clone()));
	}

	let candidates = config.endpoints_for(chain);

	if let (Some(network), Some(key)) = (&candidates.managed_network, &secrets.provider_key) {
		debug!("Using managed provider for network {}", chain);
		let base = provider_base_url(&config.provider.url_template, network);
		return Ok(RpcEndpoint::Remote(format!("{}{}", base, key)));
	}

	if let Some(url) = candidates.fallbacks.first() {
		debug!("Using public endpoint for network {}", chain);
		return Ok(RpcEndpoint::Remote(url.clone()));
	}

	if candidates.managed_network.is_some() {
		return Err(DeployError::MissingSecret {
			secret: PROVIDER_KEY_VAR.to_string(),
			network: chain.to_string(),
		});
	}

	Err(DeployError::InvalidEndpoint {
		chain,
		url: String::new(),
		reason: "no RPC endpoint configured".to_string(),
	})
}

/// Strips credentials, path and query from an RPC URL for display.
///
/// URLs that carry none of these are returned unchanged.
pub fn mask_url(raw: &str) -> String {
	let Ok(mut url) = Url::parse(raw) else {
		return "<redacted>".to_string();
	};

	let carries_secret = !url.username().is_empty()
		|| url.password().is_some()
		|| url.path() != "/"
		|| url.query().is_some();
	if !carries_secret {
		return raw.to_string();
	}

	let _ = url.set_username("");
	let _ = url.set_password(None);
	url.set_path("redacted");
	url.set_query(None);
	url.set_fragment(None);
	url.to_string()
}
