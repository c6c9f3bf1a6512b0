//! Secrets read once from the process environment.

use deploy_types::Accounts;
use std::fmt;

pub const PROVIDER_KEY_VAR: &str = "INFURA_KEY";
pub const ETHERSCAN_API_KEY_VAR: &str = "ETHERSCAN_API_KEY";
pub const PRIVATE_KEY_VAR: &str = "PK";
pub const MNEMONIC_VAR: &str = "MNEMONIC";

/// Well-known development mnemonic used when neither `PK` nor `MNEMONIC` is set.
pub const DEFAULT_MNEMONIC: &str =
	"candy maple cake sugar pudding cream honey rich smooth crumble sweet treat";

/// Every secret the resolvers may need. Empty values count as absent.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Secrets {
	/// Managed RPC provider key
	pub provider_key: Option<String>,
	/// Explorer verification key
	pub etherscan_api_key: Option<String>,
	/// Deployer private key
	pub private_key: Option<String>,
	/// Deployer mnemonic
	pub mnemonic: Option<String>,
}

impl Secrets {
	pub fn from_env() -> Self {
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	/// Builds secrets from an arbitrary name lookup.
	pub fn from_lookup<F>(lookup: F) -> Self
	where
		F: Fn(&str) -> Option<String>,
	{
		let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
		Self {
			provider_key: read(PROVIDER_KEY_VAR),
			etherscan_api_key: read(ETHERSCAN_API_KEY_VAR),
			private_key: read(PRIVATE_KEY_VAR),
			mnemonic: read(MNEMONIC_VAR),
		}
	}

	/// A private key takes precedence over a mnemonic.
	pub fn accounts(&self) -> Accounts {
		match (&self.private_key, &self.mnemonic) {
			(Some(key), _) => Accounts::PrivateKeys(vec![key.clone()]),
			(None, Some(mnemonic)) => Accounts::Mnemonic {
				mnemonic: mnemonic.clone(),
			},
			(None, None) => Accounts::Mnemonic {
				mnemonic: DEFAULT_MNEMONIC.to_string(),
			},
		}
	}
}

impl fmt::Debug for Secrets {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Secrets")
			.field("provider_key", &self.provider_key.is_some())
			.field("etherscan_api_key", &self.etherscan_api_key.is_some())
			.field("private_key", &self.private_key.is_some())
			.field("mnemonic", &self.mnemonic.is_some())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;

	fn lookup(vars: &[(&str, &str)]) -> Secrets {
		let vars: HashMap<String, String> = vars
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();
		Secrets::from_lookup(|name| vars.get(name).cloned())
	}

	#[test]
	fn test_empty_values_are_absent() {
		let secrets = lookup(&[("INFURA_KEY", ""), ("ETHERSCAN_API_KEY", "  ")]);
		assert!(secrets.provider_key.is_none());
		assert!(secrets.etherscan_api_key.is_none());
	}

	#[test]
	fn test_private_key_wins_over_mnemonic() {
		let secrets = lookup(&[("PK", "0xabc"), ("MNEMONIC", "test test")]);
		assert_eq!(
			secrets.accounts(),
			Accounts::PrivateKeys(vec!["0xabc".to_string()])
		);
	}

	#[test]
	fn test_default_mnemonic() {
		assert_eq!(
			Secrets::default().accounts(),
			Accounts::Mnemonic {
				mnemonic: DEFAULT_MNEMONIC.to_string()
			}
		);
	}

	#[test]
	fn test_debug_hides_values() {
		let secrets = lookup(&[("INFURA_KEY", "super-secret")]);
		let debug = format!("{:?}", secrets);
		assert!(!debug.contains("super-secret"));
		assert!(debug.contains("provider_key: true"));
	}
}
