use anyhow::{Context, Result};
use clap::Parser;
use deploy_config::{load_config, ConfigLoader, DeployConfig, FactoryRegistry, Secrets};
use deploy_resolver::NetworkResolver;
use deploy_types::{all_chains, Chain};
use serde::Serialize;
use tracing::info;

mod cli;
mod logging;

use cli::{Args, Command};
use logging::TracingConfig;

fn main() -> Result<()> {
	// Seed the environment from .env before clap reads env-backed flags
	dotenv::dotenv().ok();

	let args = Args::parse();

	logging::init_tracing(&TracingConfig::new(&args.log_level).with_json_format(args.json_logs))?;

	match &args.command {
		Command::Chains => print_json(&all_chains()),
		Command::Resolve {
			network,
			reveal_secrets,
		} => {
			let resolver = build_resolver(&args)?;
			let resolved = resolver
				.resolve(network)
				.with_context(|| format!("Failed to resolve network {}", network))?;

			if *reveal_secrets {
				print_json(&resolved)
			} else {
				print_json(&resolver.redact(&resolved))
			}
		}
		Command::Factory { network } => {
			let resolver = build_resolver(&args)?;
			let chain = Chain::lookup(network)?;
			let deployment = resolver
				.deterministic_deployment(chain)
				.with_context(|| format!("Failed to resolve singleton factory for {}", chain))?;

			if deployment.is_none() {
				info!("No singleton factory known for {}, deployment will not be deterministic", chain);
			}
			print_json(&deployment)
		}
		Command::Validate { networks } => {
			let resolver = build_resolver(&args)?;
			let resolved = resolver
				.preflight(networks.as_slice())
				.context("Preflight failed")?;
			info!("Configuration is valid");
			for network in resolved.iter().map(|network| resolver.redact(network)) {
				match network.chain_id {
					Some(id) => info!("  {} ({}): {}", network.name, id, network.rpc_url),
					None => info!("  {}: {}", network.name, network.rpc_url),
				}
			}
			Ok(())
		}
	}
}

/// Loads configuration, secrets and the factory registry, then runs the
/// explorer integrity gate.
fn build_resolver(args: &Args) -> Result<NetworkResolver> {
	let mut config = match &args.config {
		Some(path) => ConfigLoader::from_env_and_file(Some(path.as_path())),
		None => load_config(),
	}
	.context("Failed to load configuration")?;

	if let Some(dir) = &args.factory_registry {
		config.deterministic.registry_dir = Some(dir.clone());
	}

	let registry = load_registry(&config)?;
	let secrets = Secrets::from_env();

	let resolver =
		NetworkResolver::new(config, secrets, registry).context("Configuration integrity check failed")?;
	Ok(resolver)
}

fn load_registry(config: &DeployConfig) -> Result<FactoryRegistry> {
	match &config.deterministic.registry_dir {
		Some(dir) => FactoryRegistry::from_dir(dir)
			.with_context(|| format!("Failed to load factory registry from {:?}", dir)),
		None => Ok(FactoryRegistry::new()),
	}
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(value)?);
	Ok(())
}
