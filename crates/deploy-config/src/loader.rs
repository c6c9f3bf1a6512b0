//! Configuration loading from files and environment.

use crate::types::*;
use crate::ConfigError;
use deploy_types::Chain;
use std::path::Path;
use tracing::{debug, info};
use url::Url;

pub const CONFIG_FILE_VAR: &str = "DEPLOY_CONFIG_FILE";
pub const NODE_URL_VAR: &str = "NODE_URL";
pub const DETERMINISTIC_VAR: &str = "CUSTOM_DETERMINISTIC_DEPLOYMENT";
pub const FACTORY_REGISTRY_VAR: &str = "FACTORY_REGISTRY_DIR";

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
	/// Load configuration from file
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<DeployConfig, ConfigError> {
		let config = Self::read_file(path.as_ref())?;
		Self::validate_config(&config)?;
		Ok(config)
	}

	/// Parses a config file and fills in built-in entries, without validating.
	fn read_file(path: &Path) -> Result<DeployConfig, ConfigError> {
		info!("Loading configuration from {:?}", path);

		if !path.exists() {
			return Err(ConfigError::FileNotFound(format!("{:?}", path)));
		}
		let contents = std::fs::read_to_string(path)?;

		let mut config = match path.extension().and_then(|s| s.to_str()) {
			Some("toml") => Self::from_toml(&contents)?,
			Some("json") => Self::from_json(&contents)?,
			Some("yaml") | Some("yml") => Self::from_yaml(&contents)?,
			_ => {
				return Err(ConfigError::ParseError(format!(
					"Unsupported config format: {:?}",
					path
				)))
			}
		};

		config.fill_defaults();
		Ok(config)
	}

	/// Load from TOML string
	pub fn from_toml(contents: &str) -> Result<DeployConfig, ConfigError> {
		toml::from_str(contents)
			.map_err(|e| ConfigError::ParseError(format!("Failed to parse TOML: {}", e)))
	}

	/// Load from JSON string
	pub fn from_json(contents: &str) -> Result<DeployConfig, ConfigError> {
		serde_json::from_str(contents)
			.map_err(|e| ConfigError::ParseError(format!("Failed to parse JSON: {}", e)))
	}

	/// Load from YAML string
	pub fn from_yaml(contents: &str) -> Result<DeployConfig, ConfigError> {
		serde_yaml::from_str(contents)
			.map_err(|e| ConfigError::ParseError(format!("Failed to parse YAML: {}", e)))
	}

	/// Load from environment variables with optional file override
	pub fn from_env_and_file(file_path: Option<&Path>) -> Result<DeployConfig, ConfigError> {
		Self::from_lookup_and_file(file_path, |name| std::env::var(name).ok())
	}

	/// Same as [`ConfigLoader::from_env_and_file`] with an injectable variable lookup.
	pub fn from_lookup_and_file<F>(file_path: Option<&Path>, lookup: F) -> Result<DeployConfig, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		// Start with default config; validation runs once, after the overrides
		let mut config = if let Some(path) = file_path {
			Self::read_file(path)?
		} else {
			DeployConfig::default()
		};

		// Override with environment variables
		Self::apply_env_overrides(&mut config, lookup);

		Self::validate_config(&config)?;
		Ok(config)
	}

	/// Apply environment variable overrides
	fn apply_env_overrides<F>(config: &mut DeployConfig, lookup: F)
	where
		F: Fn(&str) -> Option<String>,
	{
		let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

		if let Some(url) = read(NODE_URL_VAR) {
			debug!("Enabling custom network from environment");
			config.custom_rpc = Some(url);
		}

		if let Some(flag) = read(DETERMINISTIC_VAR) {
			debug!("Deterministic deployment set to '{}' from environment", flag);
			config.deterministic.enabled = flag == "true";
		}

		if let Some(dir) = read(FACTORY_REGISTRY_VAR) {
			debug!("Overriding factory registry directory from environment");
			config.deterministic.registry_dir = Some(dir.into());
		}
	}

	/// Validate configuration
	pub fn validate_config(config: &DeployConfig) -> Result<(), ConfigError> {
		if !config.provider.url_template.contains("{network}") {
			return Err(ConfigError::ValidationError(format!(
				"Provider URL template '{}' has no {{network}} placeholder",
				config.provider.url_template
			)));
		}

		if config.default_timeout_ms == 0 {
			return Err(ConfigError::ValidationError(
				"Default timeout must be greater than zero".to_string(),
			));
		}

		for (chain, candidates) in &config.endpoints {
			for url in &candidates.fallbacks {
				check_url(*chain, url)?;
			}
		}

		for (chain, explorer) in &config.explorer.custom_chains {
			check_url(*chain, &explorer.api_url)?;
			check_url(*chain, &explorer.browser_url)?;
		}

		for (chain, url) in &config.rpc_overrides {
			check_url(*chain, url)?;
		}

		if let Some(url) = &config.custom_rpc {
			Url::parse(url).map_err(|e| {
				ConfigError::ValidationError(format!("Invalid custom network URL '{}': {}", url, e))
			})?;
		}

		if let Some(chain) = config.deterministic.profile.active_network {
			if !config.deterministic.profile.factories.contains_key(&chain) {
				return Err(ConfigError::ValidationError(format!(
					"Active network {} has no record in factory profile '{}'",
					chain, config.deterministic.profile.name
				)));
			}
		}

		Ok(())
	}
}

fn check_url(chain: Chain, url: &str) -> Result<(), ConfigError> {
	Url::parse(url).map_err(|e| {
		ConfigError::ValidationError(format!(
			"Invalid URL '{}' for network {}: {}",
			url, chain, e
		))
	})?;
	Ok(())
}

/// Load configuration from standard locations
pub fn load_config() -> Result<DeployConfig, ConfigError> {
	// Check for config file in order:
	// 1. Environment variable DEPLOY_CONFIG_FILE
	// 2. ./deploy.toml
	// 3. ./config/deploy.toml
	// 4. Default config with env overrides

	if let Ok(path) = std::env::var(CONFIG_FILE_VAR) {
		return ConfigLoader::from_env_and_file(Some(Path::new(&path)));
	}

	let paths = ["./deploy.toml", "./config/deploy.toml"];

	for path in &paths {
		if Path::new(path).exists() {
			return ConfigLoader::from_env_and_file(Some(Path::new(path)));
		}
	}

	ConfigLoader::from_env_and_file(None)
}

#[cfg(test)]
mod tests {
	use super::*;
	use deploy_types::ApiKeySource;
	use std::collections::HashMap;

	fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let map: HashMap<String, String> = pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();
		move |name| map.get(name).cloned()
	}

	#[test]
	fn test_empty_toml_is_default() {
		let mut config = ConfigLoader::from_toml("").unwrap();
		config.fill_defaults();
		assert_eq!(config, DeployConfig::default());
	}

	#[test]
	fn test_toml_parsing() {
		let toml = r#"
default_timeout_ms = 30000

[provider]
url_template = "https://{network}.example.io/v3/"

[endpoints.56]
fallbacks = ["https://bsc-1.example.com", "https://bsc-2.example.com"]

[endpoints.polygon]
managed_network = "polygon-mainnet"
fallbacks = ["https://polygon.example.com"]

[timeouts]
opbnb-mainnet = 60000

[explorer.custom_chains.204]
api_url = "https://api-opbnb.bscscan.com/api"
browser_url = "https://opbnb.bscscan.com/"

[explorer.custom_chains.295]
api_url = "https://server-verify.hashscan.io"
browser_url = "https://hashscan.io/mainnet"

[explorer.api_keys.204]
source = "etherscan"

[explorer.api_keys.295]
source = "literal"
value = ""

[deterministic]
enabled = true

[deterministic.profile]
name = "test-profile"
active_network = 204

[deterministic.profile.factories.204]
gas_price = 10
gas_limit = 95383
signer_address = "0xE1CB04A0fA36DdD16a06ea828007E35e1a3cBC37"
transaction = "0xf8a2800a83"
address = "0x914d7Fec6aaC8cd542e72Bca78B30650d45643d7"
"#;

		let mut config = ConfigLoader::from_toml(toml).unwrap();
		config.fill_defaults();
		ConfigLoader::validate_config(&config).unwrap();

		assert_eq!(config.default_timeout_ms, 30_000);
		assert_eq!(config.timeout_for(Chain::OpbnbMainnet), 60_000);
		assert_eq!(config.endpoints_for(Chain::Bsc).fallbacks.len(), 2);
		assert_eq!(
			config.endpoints_for(Chain::Polygon).managed_network.as_deref(),
			Some("polygon-mainnet")
		);
		// Chains not listed keep their built-in candidates
		assert_eq!(
			config.endpoints_for(Chain::OpbnbMainnet).fallbacks,
			vec!["https://opbnb.publicnode.com".to_string()]
		);
		assert_eq!(config.explorer.custom_chains.len(), 2);
		assert_eq!(
			config.explorer.api_keys.get(&Chain::HederaMainnet),
			Some(&ApiKeySource::placeholder())
		);
		assert!(config.deterministic.enabled);
		assert_eq!(config.deterministic.profile.name, "test-profile");
		let record = &config.deterministic.profile.factories[&Chain::OpbnbMainnet];
		assert_eq!(record.gas_price, 10);
		assert_eq!(record.gas_limit, 95_383);
	}

	#[test]
	fn test_json_parsing() {
		let json = r#"{
            "default_timeout_ms": 25000,
            "explorer": {
                "custom_chains": {},
                "api_keys": {}
            }
        }"#;

		let config = ConfigLoader::from_json(json).unwrap();
		assert_eq!(config.default_timeout_ms, 25_000);
		assert!(config.explorer.custom_chains.is_empty());
	}

	#[test]
	fn test_yaml_parsing() {
		let yaml = r#"
default_timeout_ms: 15000
endpoints:
  204:
    fallbacks:
      - https://opbnb.example.com
  bsc:
    fallbacks:
      - https://bsc.example.com
timeouts:
  295: 90000
  hederaTestnet: 60000
rpc_overrides:
  1: https://eth.example.com/v2/key
"#;

		let mut config = ConfigLoader::from_yaml(yaml).unwrap();
		config.fill_defaults();
		ConfigLoader::validate_config(&config).unwrap();

		assert_eq!(config.default_timeout_ms, 15_000);
		assert_eq!(
			config.endpoints_for(Chain::OpbnbMainnet).fallbacks,
			vec!["https://opbnb.example.com".to_string()]
		);
		assert_eq!(
			config.endpoints_for(Chain::Bsc).fallbacks,
			vec!["https://bsc.example.com".to_string()]
		);
		assert_eq!(config.timeout_for(Chain::HederaMainnet), 90_000);
		assert_eq!(config.timeout_for(Chain::HederaTestnet), 60_000);
		assert_eq!(
			config.rpc_overrides.get(&Chain::Mainnet).map(String::as_str),
			Some("https://eth.example.com/v2/key")
		);
	}

	#[test]
	fn test_yaml_unknown_numeric_key_fails() {
		let yaml = "endpoints:\n  8453:\n    fallbacks: []\n";
		let err = ConfigLoader::from_yaml(yaml).unwrap_err();
		assert!(err.to_string().contains("Invalid chain ID"));
	}

	#[test]
	fn test_unknown_chain_key_fails() {
		let toml = r#"
[endpoints.8453]
fallbacks = ["https://base.example.com"]
"#;
		let result = ConfigLoader::from_toml(toml);
		assert!(matches!(result, Err(ConfigError::ParseError(_))));
	}

	#[test]
	fn test_env_overrides() {
		let config = ConfigLoader::from_lookup_and_file(
			None,
			vars(&[
				("NODE_URL", "http://localhost:8545"),
				("CUSTOM_DETERMINISTIC_DEPLOYMENT", "true"),
			]),
		)
		.unwrap();

		assert_eq!(config.custom_rpc.as_deref(), Some("http://localhost:8545"));
		assert!(config.rpc_overrides.is_empty());
		assert!(config.deterministic.enabled);

		let config =
			ConfigLoader::from_lookup_and_file(None, vars(&[("CUSTOM_DETERMINISTIC_DEPLOYMENT", "yes")]))
				.unwrap();
		assert!(!config.deterministic.enabled);
	}

	#[test]
	fn test_env_overrides_validated_with_file() {
		let temp = tempfile::tempdir().unwrap();
		let path = temp.path().join("deploy.toml");
		std::fs::write(&path, "default_timeout_ms = 45000\n").unwrap();

		let config = ConfigLoader::from_lookup_and_file(
			Some(path.as_path()),
			vars(&[("NODE_URL", "http://localhost:8545")]),
		)
		.unwrap();
		assert_eq!(config.default_timeout_ms, 45_000);
		assert_eq!(config.custom_rpc.as_deref(), Some("http://localhost:8545"));

		let err = ConfigLoader::from_lookup_and_file(
			Some(path.as_path()),
			vars(&[("NODE_URL", "not a url")]),
		)
		.unwrap_err();
		assert!(err.to_string().contains("Invalid custom network URL"));
	}

	#[test]
	fn test_validation_rejects_bad_urls() {
		let mut config = DeployConfig::default();
		config.endpoints.insert(
			Chain::Bsc,
			EndpointCandidates {
				managed_network: None,
				fallbacks: vec!["not a url".to_string()],
			},
		);

		let result = ConfigLoader::validate_config(&config);
		assert!(result
			.unwrap_err()
			.to_string()
			.contains("Invalid URL 'not a url' for network bsc"));
	}

	#[test]
	fn test_validation_rejects_template_without_placeholder() {
		let mut config = DeployConfig::default();
		config.provider.url_template = "https://mainnet.infura.io/v3/".to_string();
		assert!(ConfigLoader::validate_config(&config).is_err());
	}

	#[test]
	fn test_validation_rejects_unpinned_active_network() {
		let mut config = DeployConfig::default();
		config.deterministic.profile.active_network = Some(Chain::Arbitrum);
		let err = ConfigLoader::validate_config(&config).unwrap_err();
		assert!(err.to_string().contains("Active network arbitrum"));
	}

	#[test]
	fn test_from_file() {
		let temp = tempfile::tempdir().unwrap();
		let path = temp.path().join("deploy.toml");
		std::fs::write(&path, "default_timeout_ms = 45000\n").unwrap();

		let config = ConfigLoader::from_file(&path).unwrap();
		assert_eq!(config.default_timeout_ms, 45_000);
		assert_eq!(config.endpoints.len(), Chain::all().len());

		let missing = ConfigLoader::from_file(temp.path().join("missing.toml"));
		assert!(matches!(missing, Err(ConfigError::FileNotFound(_))));

		let yaml_path = temp.path().join("deploy.yml");
		std::fs::write(&yaml_path, "timeouts:\n  204: 5000\n").unwrap();
		let config = ConfigLoader::from_file(&yaml_path).unwrap();
		assert_eq!(config.timeout_for(Chain::OpbnbMainnet), 5_000);

		let unsupported = temp.path().join("deploy.ini");
		std::fs::write(&unsupported, "").unwrap();
		assert!(matches!(
			ConfigLoader::from_file(&unsupported),
			Err(ConfigError::ParseError(_))
		));
	}
}
