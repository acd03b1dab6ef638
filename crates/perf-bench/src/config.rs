use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use super::error::BenchError;
use super::{NUM_ENTITIES, NUM_ITER_ELEMENTS, REPETITIONS};

/// Dataset sizes and repetition count for the bench binaries.
///
/// Every field falls back to its compile-time constant when neither the file
/// nor the environment sets it.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct BenchConfig {
    pub entities: usize,
    pub iter_elements: usize,
    pub repetitions: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            entities: NUM_ENTITIES,
            iter_elements: NUM_ITER_ELEMENTS,
            repetitions: REPETITIONS,
        }
    }
}

impl BenchConfig {
    fn validate(self) -> Result<Self, BenchError> {
        let zero_field = [
            ("entities", self.entities),
            ("iter_elements", self.iter_elements),
            ("repetitions", self.repetitions),
        ]
        .into_iter()
        .find(|(_, v)| *v == 0);

        match zero_field {
            Some((name, _)) => Err(BenchError::InvalidConfig(format!(
                "`{}` must be greater than zero",
                name
            ))),
            None => Ok(self),
        }
    }
}

/// Loads `crates/perf-bench/Bench.toml` (relative to the working directory)
/// and `BENCH_*` environment overrides.
pub fn load_config() -> Result<BenchConfig, BenchError> {
    let base_path = env::current_dir().map_err(|e| {
        BenchError::ConfigLoadError(format!("Failed to determine current directory: {}", e))
    })?;

    let config_file_path: PathBuf = base_path
        .join("crates")
        .join("perf-bench")
        .join("Bench.toml");

    load_config_from(&config_file_path)
}

/// Loads configuration from `path` if it exists, then applies `BENCH_*`
/// environment variables on top.
pub fn load_config_from(path: &Path) -> Result<BenchConfig, BenchError> {
    if path.exists() {
        tracing::debug!(path = %path.display(), "Reading bench config file");
    } else {
        tracing::debug!(path = %path.display(), "No bench config file, using defaults");
    }

    let s = ConfigLoader::builder()
        .add_source(File::from(path).required(false))
        .add_source(Environment::with_prefix("BENCH").try_parsing(true))
        .build()
        .map_err(|e| BenchError::ConfigLoadError(e.to_string()))?;

    let bench_config: BenchConfig = s
        .try_deserialize()
        .map_err(|e| BenchError::ConfigLoadError(format!("Failed to deserialize config: {}", e)))?;

    bench_config.validate()
}

#[cfg(test)]
mod config_tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("Bench.toml")).unwrap();
        assert_eq!(config, BenchConfig::default());
        assert_eq!(config.entities, NUM_ENTITIES);
    }

    #[test]
    fn test_file_overrides_some_fields() {
        let file = write_config("entities = 64\nrepetitions = 3\n");
        let config = load_config_from(file.path()).unwrap();
        assert_eq!(config.entities, 64);
        assert_eq!(config.repetitions, 3);
        assert_eq!(config.iter_elements, NUM_ITER_ELEMENTS);
    }

    #[test]
    fn test_zero_size_rejected() {
        let file = write_config("iter_elements = 0\n");
        let err = load_config_from(file.path()).unwrap_err();
        assert!(matches!(err, BenchError::InvalidConfig(msg) if msg.contains("iter_elements")));
    }

    #[test]
    fn test_malformed_value_rejected() {
        let file = write_config("entities = \"many\"\n");
        assert!(matches!(
            load_config_from(file.path()),
            Err(BenchError::ConfigLoadError(_))
        ));
    }
}
