//! Chain registry.
//!
//! The set of supported networks is closed: every table in the configuration
//! is keyed by [`Chain`]. Listing, naming, parsing and id conversion are all
//! derived from the enum itself, so adding a network means adding a variant
//! (with `serialize` aliases for legacy keys) and then satisfying every
//! exhaustive `match` that the compiler points at.

use crate::errors::{DeployError, Result};
use num_enum::TryFromPrimitiveError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use strum::{IntoEnumIterator, VariantArray};

/// A supported EVM network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(strum::IntoStaticStr)] // Chain::name
#[derive(strum::VariantArray)] // Chain::all
#[derive(strum::EnumString)] // FromStr over names and aliases
#[derive(strum::EnumIter)] // Chain::iter
#[derive(strum::EnumCount)] // Chain::COUNT
#[derive(num_enum::TryFromPrimitive)] // TryFrom<u64>
#[strum(serialize_all = "kebab-case")]
#[repr(u64)]
pub enum Chain {
	Hardhat = 31337,
	Mainnet = 1,
	#[strum(to_string = "xdai", serialize = "gnosis")]
	Xdai = 100,
	Ewc = 246,
	Rinkeby = 4,
	Goerli = 5,
	Kovan = 42,
	Polygon = 137,
	Volta = 73799,
	Bsc = 56,
	Arbitrum = 42161,
	#[strum(to_string = "fantom-testnet", serialize = "fantomTestnet")]
	FantomTestnet = 4002,
	#[strum(to_string = "hedera-testnet", serialize = "hederaTestnet")]
	HederaTestnet = 296,
	#[strum(to_string = "hedera-mainnet", serialize = "hederaMainnet")]
	HederaMainnet = 295,
	#[strum(to_string = "opbnb-mainnet", serialize = "opbnb")]
	OpbnbMainnet = 204,
	#[strum(to_string = "horizen-gobi", serialize = "horizenGobi")]
	HorizenGobi = 1663,
	#[strum(to_string = "horizen-mainnet", serialize = "horizenMainnet", serialize = "horizen-eon")]
	HorizenMainnet = 7332,
}

/// A chain id paired with its network name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChainRecord {
	pub chain_id: u64,
	pub name: &'static str,
}

impl Chain {
	/// All supported chains in declaration order.
	pub fn all() -> &'static [Chain] {
		Self::VARIANTS
	}

	/// Numeric EIP-155 chain id.
	pub const fn id(self) -> u64 {
		self as u64
	}

	/// Network slug used as the key of a resolved configuration bundle.
	pub fn name(self) -> &'static str {
		self.into()
	}

	/// Whether this network runs inside the deployment tool instead of behind
	/// a remote RPC endpoint.
	pub const fn is_in_process(self) -> bool {
		matches!(self, Chain::Hardhat)
	}

	/// Looks a network up by decimal chain id, name or legacy alias.
	pub fn lookup(network: &str) -> Result<Self> {
		let network = network.trim();
		match network.parse::<u64>() {
			Ok(id) => Ok(Chain::try_from(id)?),
			Err(_) => id_of(network),
		}
	}

	pub fn record(self) -> ChainRecord {
		ChainRecord {
			chain_id: self.id(),
			name: self.name(),
		}
	}
}

/// Ordered list of every chain record.
pub fn all_chains() -> Vec<ChainRecord> {
	Chain::iter().map(Chain::record).collect()
}

/// Network name of a chain.
pub fn name_of(chain: Chain) -> &'static str {
	chain.name()
}

/// Chain for a network name or alias.
pub fn id_of(name: &str) -> Result<Chain> {
	name.parse().map_err(|_| DeployError::UnknownChain(name.to_string()))
}

impl From<TryFromPrimitiveError<Chain>> for DeployError {
	fn from(err: TryFromPrimitiveError<Chain>) -> Self {
		DeployError::UnknownChain(err.number.to_string())
	}
}

impl From<Chain> for u64 {
	fn from(chain: Chain) -> Self {
		chain.id()
	}
}

impl fmt::Display for Chain {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl Serialize for Chain {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		serializer.serialize_u64(self.id())
	}
}

impl<'de> Deserialize<'de> for Chain {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		struct ChainVisitor;

		impl de::Visitor<'_> for ChainVisitor {
			type Value = Chain;

			fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str("a chain id or network name")
			}

			fn visit_u64<E: de::Error>(self, id: u64) -> std::result::Result<Chain, E> {
				Chain::try_from(id).map_err(|e| E::custom(DeployError::from(e)))
			}

			fn visit_i64<E: de::Error>(self, id: i64) -> std::result::Result<Chain, E> {
				u64::try_from(id)
					.map_err(|_| E::custom(format!("Invalid chain ID: {}", id)))
					.and_then(|id| self.visit_u64(id))
			}

			fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<Chain, E> {
				Chain::lookup(value).map_err(E::custom)
			}
		}

		deserializer.deserialize_any(ChainVisitor)
	}
}
