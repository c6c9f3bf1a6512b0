//! Serde helpers for chain-keyed configuration tables

use deploy_types::Chain;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Custom deserializer for BTreeMap<Chain, T> that accepts chain ids or network names as keys
pub fn deserialize_chain_map<'de, D, T>(deserializer: D) -> Result<BTreeMap<Chain, T>, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de>,
{
	let map = BTreeMap::<ChainKey, T>::deserialize(deserializer)?;

	Ok(map.into_iter().map(|(k, v)| (k.0, v)).collect())
}

/// Custom serializer for BTreeMap<Chain, T> that writes chain ids as string keys
pub fn serialize_chain_map<S, T>(map: &BTreeMap<Chain, T>, serializer: S) -> Result<S::Ok, S::Error>
where
	S: Serializer,
	T: Serialize,
{
	let string_map: BTreeMap<String, &T> =
		map.iter().map(|(k, v)| (k.id().to_string(), v)).collect();

	string_map.serialize(serializer)
}

/// Map key that reports unknown chains by their raw key.
#[derive(PartialEq, Eq, PartialOrd, Ord)]
struct ChainKey(Chain);

impl<'de> Deserialize<'de> for ChainKey {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		Chain::deserialize(deserializer)
			.map(ChainKey)
			.map_err(|e| serde::de::Error::custom(format!("Invalid chain ID: {}", e)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde::Deserialize;

	#[derive(Debug, Deserialize, Serialize)]
	struct TestStruct {
		#[serde(
			deserialize_with = "deserialize_chain_map",
			serialize_with = "serialize_chain_map"
		)]
		timeouts: BTreeMap<Chain, u64>,
	}

	#[test]
	fn test_deserialize_chain_map() {
		let toml = r#"
            [timeouts]
            204 = 1000
            hedera-mainnet = 120000
        "#;

		let result: TestStruct = toml::from_str(toml).unwrap();
		assert_eq!(result.timeouts.get(&Chain::OpbnbMainnet), Some(&1000));
		assert_eq!(result.timeouts.get(&Chain::HederaMainnet), Some(&120000));
	}

	#[test]
	fn test_deserialize_rejects_unknown_chain() {
		let toml = r#"
            [timeouts]
            999999 = 1000
        "#;

		let err = toml::from_str::<TestStruct>(toml).unwrap_err();
		assert!(err.to_string().contains("Invalid chain ID"));
	}

	#[test]
	fn test_serialize_chain_map() {
		let timeouts = BTreeMap::from([(Chain::OpbnbMainnet, 1000), (Chain::Arbitrum, 2000)]);
		let test_struct = TestStruct { timeouts };

		let toml = toml::to_string(&test_struct).unwrap();

		// Verify the TOML contains the expected string keys
		assert!(toml.contains("204 = 1000"));
		assert!(toml.contains("42161 = 2000"));

		// Verify round-trip works
		let parsed: TestStruct = toml::from_str(&toml).unwrap();
		assert_eq!(parsed.timeouts.get(&Chain::OpbnbMainnet), Some(&1000));
		assert_eq!(parsed.timeouts.get(&Chain::Arbitrum), Some(&2000));
	}

	#[test]
	fn test_json_keys() {
		let json = r#"{ "timeouts": { "295": 120000, "opbnb": 5 } }"#;
		let result: TestStruct = serde_json::from_str(json).unwrap();
		assert_eq!(result.timeouts.get(&Chain::HederaMainnet), Some(&120000));
		assert_eq!(result.timeouts.get(&Chain::OpbnbMainnet), Some(&5));
	}
}
