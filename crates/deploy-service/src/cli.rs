//! Command-line interface definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "safe-deploy")]
#[command(about = "Resolve multi-chain deployment and verification configuration", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
	/// Path to configuration file (defaults to DEPLOY_CONFIG_FILE or ./deploy.toml)
	#[arg(short, long)]
	pub config: Option<PathBuf>,

	/// Directory of `<chain_id>/deployment.json` singleton factory artifacts
	#[arg(long)]
	pub factory_registry: Option<PathBuf>,

	/// Log level (trace, debug, info, warn, error)
	#[arg(short, long, env = "DEPLOY_LOG_LEVEL", default_value = "info")]
	pub log_level: String,

	/// Emit logs as JSON
	#[arg(long)]
	pub json_logs: bool,

	/// Subcommand to execute
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Print the resolved configuration for a network
	#[command(about = "Resolve RPC, accounts, explorer and factory settings for a network")]
	Resolve {
		/// Network name, alias, chain id, or `custom` for the NODE_URL node
		network: String,

		/// Print private keys, mnemonic and API keys instead of masking them
		#[arg(long)]
		reveal_secrets: bool,
	},

	/// Print the deterministic deployment data for a network
	#[command(about = "Show the singleton factory funding and transaction for a network")]
	Factory {
		/// Network name, alias or chain id
		network: String,
	},

	/// List supported chains
	Chains,

	/// Check configuration integrity and, optionally, that networks resolve
	#[command(about = "Validate configuration and resolve the given networks")]
	Validate {
		/// Networks that must resolve completely
		#[arg(short, long = "network")]
		networks: Vec<String>,
	},
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_resolve() {
		let args = Args::try_parse_from(["safe-deploy", "resolve", "opbnb-mainnet"]).unwrap();
		assert_eq!(args.log_level, "info");
		match args.command {
			Command::Resolve {
				network,
				reveal_secrets,
			} => {
				assert_eq!(network, "opbnb-mainnet");
				assert!(!reveal_secrets);
			}
			other => panic!("unexpected command {:?}", other),
		}
	}

	#[test]
	fn test_parse_validate_networks() {
		let args = Args::try_parse_from([
			"safe-deploy",
			"--json-logs",
			"validate",
			"--network",
			"opbnb",
			"-n",
			"204",
		])
		.unwrap();
		assert!(args.json_logs);
		match args.command {
			Command::Validate { networks } => assert_eq!(networks, vec!["opbnb", "204"]),
			other => panic!("unexpected command {:?}", other),
		}
	}

	#[test]
	fn test_command_required() {
		assert!(Args::try_parse_from(["safe-deploy"]).is_err());
	}
}
