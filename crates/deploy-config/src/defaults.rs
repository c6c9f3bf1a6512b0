//! Built-in per-chain tables.

use crate::types::{EndpointCandidates, FactoryProfile};
use deploy_types::{
	address, bytes, ApiKeySource, Chain, ExplorerConfig, SingletonFactoryRecord,
};
use std::collections::BTreeMap;

pub const PROVIDER_URL_TEMPLATE: &str = "https://{network}.infura.io/v3/";

pub const DEFAULT_TIMEOUT_MS: u64 = 20_000;

pub const DEFAULT_PROFILE_NAME: &str = "safe-singleton";

fn managed(network: &str) -> EndpointCandidates {
	EndpointCandidates {
		managed_network: Some(network.to_string()),
		fallbacks: vec![],
	}
}

fn public(url: &str) -> EndpointCandidates {
	EndpointCandidates {
		managed_network: None,
		fallbacks: vec![url.to_string()],
	}
}

/// Built-in RPC candidates for a chain.
pub fn endpoints(chain: Chain) -> EndpointCandidates {
	match chain {
		Chain::Hardhat => EndpointCandidates::default(),
		Chain::Mainnet => managed("mainnet"),
		Chain::Rinkeby => managed("rinkeby"),
		Chain::Goerli => managed("goerli"),
		Chain::Kovan => managed("kovan"),
		Chain::Polygon => managed("polygon-mainnet"),
		Chain::Xdai => public("https://xdai.poanetwork.dev"),
		Chain::Ewc => public("https://rpc.energyweb.org"),
		Chain::Volta => public("https://volta-rpc.energyweb.org"),
		Chain::Bsc => public("https://bsc-dataseed.binance.org/"),
		Chain::Arbitrum => public("https://arb1.arbitrum.io/rpc"),
		Chain::FantomTestnet => public("https://rpc.testnet.fantom.network/"),
		Chain::HederaTestnet => public("https://testnet.hashio.io/api"),
		Chain::HederaMainnet => public("https://mainnet.hashio.io/api"),
		Chain::OpbnbMainnet => public("https://opbnb.publicnode.com"),
		Chain::HorizenGobi => public("https://gobi-rpc.horizenlabs.io/ethv1"),
		Chain::HorizenMainnet => public("https://rpc.ankr.com/horizen_eon"),
	}
}

/// Chains whose request timeout differs from [`DEFAULT_TIMEOUT_MS`].
pub fn timeouts() -> BTreeMap<Chain, u64> {
	BTreeMap::from([(Chain::HederaMainnet, 120_000)])
}

pub fn custom_explorers() -> BTreeMap<Chain, ExplorerConfig> {
	BTreeMap::from([(
		Chain::OpbnbMainnet,
		ExplorerConfig {
			api_url: "https://api-opbnb.bscscan.com/api".to_string(),
			browser_url: "https://opbnb.bscscan.com/".to_string(),
		},
	)])
}

pub fn explorer_api_keys() -> BTreeMap<Chain, ApiKeySource> {
	BTreeMap::from([(Chain::OpbnbMainnet, ApiKeySource::Etherscan)])
}

/// Factory records for chains the public singleton registry does not cover,
/// pinned to opBNB.
pub fn safe_singleton_profile() -> FactoryProfile {
	FactoryProfile {
		name: DEFAULT_PROFILE_NAME.to_string(),
		active_network: Some(Chain::OpbnbMainnet),
		factories: BTreeMap::from([
			(Chain::HorizenGobi, SingletonFactoryRecord {
				gas_price: 20_000_000_000,
				gas_limit: 95_383,
				signer_address: address!("E1CB04A0fA36DdD16a06ea828007E35e1a3cBC37"),
				transaction: bytes!("f8a7808504a817c800830174978080b853604580600e600039806000f350fe7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe03601600081602082378035828234f58015156039578182fd5b8082525050506014600cf3820d22a084ff7eceb3f2c5cc6f4a47bb3bfe91bd777b4a58f9b96a58f23838142830214aa00756107df56ba531041782af89a89c018d96d4cad20d7bee0f05b75cc3778e1b"),
				address: address!("914d7Fec6aaC8cd542e72Bca78B30650d45643d7"),
			}),
			(Chain::HorizenMainnet, SingletonFactoryRecord {
				gas_price: 500_000_000_000,
				gas_limit: 95_383,
				signer_address: address!("E1CB04A0fA36DdD16a06ea828007E35e1a3cBC37"),
				transaction: bytes!("f8a78085746a528800830174978080b853604580600e600039806000f350fe7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe03601600081602082378035828234f58015156039578182fd5b8082525050506014600cf382396ba06efa20cb1594f958a7976ed88c97ba7bb8304cee81a3102e2e9948b7d45cee7ea0482fa4b926a2920effd569a50757589cee03509631397c6f14970896a66614c8"),
				address: address!("914d7Fec6aaC8cd542e72Bca78B30650d45643d7"),
			}),
			(Chain::HederaTestnet, SingletonFactoryRecord {
				gas_price: 2_200_000_000_000,
				gas_limit: 100_000,
				signer_address: address!("13D65d7fA66A2970eE8862ba8633D064B43Bf091"),
				transaction: bytes!("f8a8808602003a37f000830186a08080b853604580600e600039806000f350fe7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe03601600081602082378035828234f58015156039578182fd5b8082525050506014600cf3820273a02c2dc95853f2d9809a846eb31ce58e2061c20f3699ebbf1f641c4e2a818f6940a078feaec02b382bb4e0b610dba69f8643a6f6b1f1dec60e0d7ff079b568438472"),
				address: address!("Afb3D5C0cd6a610F87365ce1BF8Eb6A0AA985988"),
			}),
			(Chain::OpbnbMainnet, SingletonFactoryRecord {
				gas_price: 10,
				gas_limit: 95_383,
				signer_address: address!("E1CB04A0fA36DdD16a06ea828007E35e1a3cBC37"),
				transaction: bytes!("f8a2800a830174978080b853604580600e600039806000f350fe7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe03601600081602082378035828234f58015156039578182fd5b8082525050506014600cf38201bca0321c2231ac15b3a45c6e7cca4f6686706ebe4d926fae78c3cb9f2d354d874731a05c4a31c24a88d43af57c77f1020c933e51091f0cd30fd59c40af9a5a5a290c89"),
				address: address!("914d7Fec6aaC8cd542e72Bca78B30650d45643d7"),
			}),
			(Chain::HederaMainnet, SingletonFactoryRecord {
				gas_price: 1_160_000_000_000,
				gas_limit: 86_279,
				signer_address: address!("C30220fc19e2db669eaa3fa042C07b28F0c10737"),
				transaction: bytes!("f8a88086010e15635000830151078080b853604580600e600039806000f350fe7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe03601600081602082378035828234f58015156039578182fd5b8082525050506014600cf3820272a0cbb4ed8ba208385a8cc9e58f1ddee69eda8cf94b86b85748b17c5b45a626f7c1a033cda078898e9c13e4ef123173d0f8dd24bf7416b4c291768a0a3b170d9c8fda"),
				address: address!("BF60A8e623D4E776F6FFA94d8bB7Ef7c22E057A1"),
			}),
		]),
	}
}
