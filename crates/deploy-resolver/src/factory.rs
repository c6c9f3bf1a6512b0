//! Singleton factory lookup for deterministic deployment.

use deploy_config::{FactoryProfile, FactoryRegistry};
use deploy_types::{Chain, DeployError, DeterministicDeployment, Result, SingletonFactoryRecord};
use tracing::{debug, warn};

/// Finds the factory record for `chain`.
///
/// The profile's active network, when it is the requested chain, takes
/// precedence over the external registry. Returns `None` when neither source
/// knows the chain; deterministic addressing is then skipped. Any record that
/// is returned has passed [`SingletonFactoryRecord::validate`].
pub fn resolve_factory(
	profile: &FactoryProfile,
	registry: &FactoryRegistry,
	chain: Chain,
) -> Result<Option<SingletonFactoryRecord>> {
	let record = match profile.active_network {
		Some(active) if active == chain => {
			debug!("Using factory record from profile '{}' for {}", profile.name, chain);
			let record = profile.factories.get(&active).ok_or_else(|| {
				DeployError::MalformedFactoryRecord {
					chain,
					reason: format!("no record in profile '{}'", profile.name),
				}
			})?;
			Some(record)
		}
		active => {
			if let Some(active) = active {
				warn!(
					"Profile '{}' is pinned to {}, using registry record for {}",
					profile.name, active, chain
				);
			}
			registry.get(chain)
		}
	};

	match record {
		Some(record) => {
			record.validate(chain)?;
			Ok(Some(record.clone()))
		}
		None => {
			debug!("No singleton factory record for {}", chain);
			Ok(None)
		}
	}
}

/// Funding and broadcast data for deploying the factory on `chain`.
pub fn deterministic_deployment(
	profile: &FactoryProfile,
	registry: &FactoryRegistry,
	chain: Chain,
) -> Result<Option<DeterministicDeployment>> {
	Ok(resolve_factory(profile, registry, chain)?.map(|record| record.deterministic_deployment()))
}
