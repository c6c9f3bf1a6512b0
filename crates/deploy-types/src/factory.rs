//! Singleton factory records for deterministic deployment.

use crate::chains::Chain;
use crate::errors::{DeployError, Result};
use alloy_primitives::{Address, Bytes, U256};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A pre-signed transaction that deploys the singleton factory to `address`
/// when broadcast from a funded `signer_address`.
///
/// Field names follow the `deployment.json` artifacts shipped with the
/// singleton factory package, so registry files deserialize directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingletonFactoryRecord {
	#[serde(
		alias = "gas_price",
		deserialize_with = "deserialize_amount",
		serialize_with = "serialize_amount"
	)]
	pub gas_price: u128,
	#[serde(alias = "gas_limit")]
	pub gas_limit: u64,
	#[serde(alias = "signer_address")]
	pub signer_address: Address,
	/// Raw signed deployment transaction
	pub transaction: Bytes,
	/// Address the factory lands at
	pub address: Address,
}

impl SingletonFactoryRecord {
	/// Amount the signer must hold before the transaction is broadcast.
	pub fn funding(&self) -> U256 {
		// u64 * u128 always fits in 256 bits.
		U256::from(self.gas_limit) * U256::from(self.gas_price)
	}

	/// Rejects records that cannot produce a deterministic deployment.
	pub fn validate(&self, chain: Chain) -> Result<()> {
		let malformed = |reason: &str| DeployError::MalformedFactoryRecord {
			chain,
			reason: reason.to_string(),
		};

		if self.transaction.is_empty() {
			return Err(malformed("empty deployment transaction"));
		}
		if self.gas_limit == 0 {
			return Err(malformed("gas limit is zero"));
		}
		if self.gas_price == 0 {
			return Err(malformed("gas price is zero"));
		}
		if self.signer_address.is_zero() {
			return Err(malformed("signer address is zero"));
		}
		if self.address.is_zero() {
			return Err(malformed("factory address is zero"));
		}
		Ok(())
	}

	pub fn deterministic_deployment(&self) -> DeterministicDeployment {
		DeterministicDeployment {
			factory: self.address,
			deployer: self.signer_address,
			funding: self.funding(),
			signed_tx: self.transaction.clone(),
		}
	}
}

/// What the deployment tool needs to pre-fund the deployer and broadcast the
/// factory transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeterministicDeployment {
	pub factory: Address,
	pub deployer: Address,
	/// Wei, rendered as a decimal string
	#[serde(serialize_with = "serialize_decimal")]
	pub funding: U256,
	pub signed_tx: Bytes,
}

fn serialize_decimal<S: Serializer>(value: &U256, serializer: S) -> std::result::Result<S::Ok, S::Error> {
	serializer.serialize_str(&value.to_string())
}

fn serialize_amount<S: Serializer>(value: &u128, serializer: S) -> std::result::Result<S::Ok, S::Error> {
	serializer.serialize_str(&value.to_string())
}

/// Accepts an integer or a decimal string, since TOML integers stop at i64.
fn deserialize_amount<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<u128, D::Error> {
	struct AmountVisitor;

	impl de::Visitor<'_> for AmountVisitor {
		type Value = u128;

		fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
			f.write_str("a non-negative integer or decimal string")
		}

		fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<u128, E> {
			Ok(value.into())
		}

		fn visit_u128<E: de::Error>(self, value: u128) -> std::result::Result<u128, E> {
			Ok(value)
		}

		fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<u128, E> {
			u128::try_from(value).map_err(|_| E::custom(format!("negative amount: {}", value)))
		}

		fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<u128, E> {
			value
				.trim()
				.parse()
				.map_err(|e| E::custom(format!("invalid amount '{}': {}", value, e)))
		}
	}

	deserializer.deserialize_any(AmountVisitor)
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::address;
	use rand::Rng;

	fn record(gas_price: u128, gas_limit: u64) -> SingletonFactoryRecord {
		SingletonFactoryRecord {
			gas_price,
			gas_limit,
			signer_address: address!("E1CB04A0fA36DdD16a06ea828007E35e1a3cBC37"),
			transaction: Bytes::from_static(&[0xf8, 0xa2, 0x80]),
			address: address!("914d7Fec6aaC8cd542e72Bca78B30650d45643d7"),
		}
	}

	#[test]
	fn test_funding_small_values() {
		assert_eq!(record(10, 95383).funding(), U256::from(953_830u64));
	}

	#[test]
	fn test_funding_exceeds_float_precision() {
		// 2^53 + 1 is not representable as f64
		let funding = record(9_007_199_254_740_993, 1).funding();
		assert_eq!(funding.to_string(), "9007199254740993");

		let funding = record(2_200_000_000_000, 100_000).funding();
		assert_eq!(funding.to_string(), "220000000000000000");
	}

	#[test]
	fn test_funding_is_exact_for_random_large_values() {
		let mut rng = rand::thread_rng();
		for _ in 0..1_000 {
			let gas_price: u128 = rng.gen();
			let gas_limit: u64 = rng.gen_range(1..=u64::MAX);
			let funding = record(gas_price, gas_limit).funding();

			assert_eq!(funding % U256::from(gas_limit), U256::ZERO);
			assert_eq!(funding / U256::from(gas_limit), U256::from(gas_price));
			if let Some(expected) = gas_price.checked_mul(u128::from(gas_limit)) {
				assert_eq!(funding, U256::from(expected));
			}
		}
	}

	#[test]
	fn test_validate_rejects_incomplete_records() {
		let chain = Chain::OpbnbMainnet;
		assert!(record(10, 95383).validate(chain).is_ok());

		let mut empty_tx = record(10, 95383);
		empty_tx.transaction = Bytes::new();
		assert!(matches!(
			empty_tx.validate(chain),
			Err(DeployError::MalformedFactoryRecord { chain: Chain::OpbnbMainnet, .. })
		));

		assert!(record(0, 95383).validate(chain).is_err());
		assert!(record(10, 0).validate(chain).is_err());

		let mut zero_signer = record(10, 95383);
		zero_signer.signer_address = Address::ZERO;
		assert!(zero_signer.validate(chain).is_err());
	}

	#[test]
	fn test_deserialize_registry_artifact() {
		let json = r#"{
			"gasPrice": 100000000000,
			"gasLimit": 100000,
			"signerAddress": "0xE1CB04A0fA36DdD16a06ea828007E35e1a3cBC37",
			"transaction": "0xf8a78085",
			"address": "0x914d7Fec6aaC8cd542e72Bca78B30650d45643d7"
		}"#;
		let parsed: SingletonFactoryRecord = serde_json::from_str(json).unwrap();
		assert_eq!(parsed.gas_price, 100_000_000_000);
		assert_eq!(parsed.gas_limit, 100_000);
		assert_eq!(parsed.transaction.len(), 4);
	}

	#[test]
	fn test_deterministic_deployment_json() {
		let deployment = record(10, 95383).deterministic_deployment();
		let value = serde_json::to_value(&deployment).unwrap();
		assert_eq!(value["funding"], "953830");
		assert_eq!(value["signedTx"], "0xf8a280");
		assert_eq!(
			value["factory"].as_str().unwrap().to_lowercase(),
			"0x914d7fec6aac8cd542e72bca78b30650d45643d7"
		);
	}
}
