//! External singleton factory registry.
//!
//! The singleton factory package publishes one pre-signed deployment per
//! chain as `<dir>/<chain_id>/deployment.json`. The whole directory is read
//! once at startup; lookups afterwards are plain map reads.

use crate::ConfigError;
use deploy_types::{Chain, SingletonFactoryRecord};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

const ARTIFACT_FILE: &str = "deployment.json";

/// Factory records keyed by chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactoryRegistry {
	records: BTreeMap<Chain, SingletonFactoryRecord>,
}

impl FactoryRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_records(records: impl IntoIterator<Item = (Chain, SingletonFactoryRecord)>) -> Self {
		Self {
			records: records.into_iter().collect(),
		}
	}

	/// Loads every artifact under `dir`.
	///
	/// Directories that are not numeric chain ids, or whose chain id is not a
	/// supported chain, are skipped.
	pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, ConfigError> {
		let dir = dir.as_ref();
		info!("Loading singleton factory registry from {:?}", dir);

		if !dir.is_dir() {
			return Err(ConfigError::FileNotFound(format!(
				"Factory registry directory not found: {:?}",
				dir
			)));
		}

		let mut records = BTreeMap::new();
		for entry in std::fs::read_dir(dir)? {
			let entry = entry?;
			let file_name = entry.file_name();
			let Some(id) = file_name.to_str().and_then(|name| name.parse::<u64>().ok()) else {
				continue;
			};
			let Ok(chain) = Chain::try_from(id) else {
				debug!("Skipping factory artifact for unsupported chain {}", id);
				continue;
			};

			let artifact = entry.path().join(ARTIFACT_FILE);
			if !artifact.is_file() {
				debug!("No {} for chain {}", ARTIFACT_FILE, chain);
				continue;
			}

			let contents = std::fs::read_to_string(&artifact)?;
			let record: SingletonFactoryRecord = serde_json::from_str(&contents).map_err(|e| {
				ConfigError::ParseError(format!("Failed to parse {:?}: {}", artifact, e))
			})?;
			records.insert(chain, record);
		}

		info!("Loaded {} singleton factory records", records.len());
		Ok(Self { records })
	}

	pub fn get(&self, chain: Chain) -> Option<&SingletonFactoryRecord> {
		self.records.get(&chain)
	}

	pub fn chains(&self) -> impl Iterator<Item = Chain> + '_ {
		self.records.keys().copied()
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}
}
