//! Test data resolution
//!
//! Maps a test id to a concrete dataset through the static test mapping
//! table (`test_mapping.json`), loading data files through an explicit
//! per-session [`DataCache`].

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;

use crate::common::{Error, Result};
use crate::data::DataRecord;

/// Name of the static test mapping file inside the data directory
const TEST_MAPPING_FILE: &str = "test_mapping.json";

/// One entry of the test mapping table: test id → (data file, dataset)
#[derive(Debug, Clone, Deserialize)]
pub struct TestMappingEntry {
    /// Data file name, relative to the data directory
    pub data_file: String,
    /// Dataset name inside the data file
    pub dataset: String,
    /// Optional description of the test case
    #[serde(default)]
    pub description: Option<String>,
}

/// Per-session cache of parsed data files
///
/// Scope is one test session: create it at setup, pass it by reference
/// into the resolver, drop it at teardown. The first access per file
/// parses and caches the full file; later accesses reuse the parse.
/// Content is deterministic, so nothing here needs locking.
#[derive(Debug, Default)]
pub struct DataCache {
    files: HashMap<PathBuf, Arc<serde_json::Value>>,
    loads: u64,
}

impl DataCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of file parses performed so far
    ///
    /// Two resolutions against the same file must leave this at 1.
    pub fn file_loads(&self) -> u64 {
        self.loads
    }

    /// Fetch the parsed content of a data file, parsing on first access
    fn get_or_load(&mut self, path: &Path) -> Result<Arc<serde_json::Value>> {
        if let Some(parsed) = self.files.get(path) {
            tracing::debug!(path = %path.display(), "data file cache hit");
            return Ok(Arc::clone(parsed));
        }

        let content = std::fs::read_to_string(path).map_err(|_| Error::DataFileNotFound {
            path: path.display().to_string(),
        })?;
        let parsed: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| Error::DataFileParse {
                path: path.display().to_string(),
                error: e.to_string(),
            })?;
        if !parsed.is_object() {
            return Err(Error::DataFileParse {
                path: path.display().to_string(),
                error: "top level must be an object of named datasets".to_string(),
            });
        }

        self.loads += 1;
        tracing::debug!(path = %path.display(), "parsed and cached data file");

        let parsed = Arc::new(parsed);
        self.files.insert(path.to_path_buf(), Arc::clone(&parsed));
        Ok(parsed)
    }
}

/// Resolves test ids to datasets
#[derive(Debug)]
pub struct TestDataResolver {
    data_dir: PathBuf,
    mapping: HashMap<String, TestMappingEntry>,
}

impl TestDataResolver {
    /// Load the test mapping table from `<data_dir>/test_mapping.json`
    ///
    /// Keys starting with `_` are mapping-file comments and are skipped.
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        let mapping_path = data_dir.join(TEST_MAPPING_FILE);

        let content =
            std::fs::read_to_string(&mapping_path).map_err(|_| Error::DataFileNotFound {
                path: mapping_path.display().to_string(),
            })?;
        let raw: HashMap<String, serde_json::Value> =
            serde_json::from_str(&content).map_err(|e| Error::DataFileParse {
                path: mapping_path.display().to_string(),
                error: e.to_string(),
            })?;

        let mut mapping = HashMap::new();
        for (test_id, value) in raw {
            if test_id.starts_with('_') {
                continue;
            }
            let entry: TestMappingEntry =
                serde_json::from_value(value).map_err(|e| Error::DataFileParse {
                    path: mapping_path.display().to_string(),
                    error: format!("entry '{test_id}': {e}"),
                })?;
            mapping.insert(test_id, entry);
        }

        tracing::info!(
            tests = mapping.len(),
            path = %mapping_path.display(),
            "loaded test mapping"
        );

        Ok(Self { data_dir, mapping })
    }

    /// Resolve a test id to its dataset
    pub fn resolve(&self, cache: &mut DataCache, test_id: &str) -> Result<DataRecord> {
        let entry = self
            .mapping
            .get(test_id)
            .ok_or_else(|| Error::UnknownTestId(test_id.to_string()))?;

        let path = self.data_dir.join(&entry.data_file);
        let parsed = cache.get_or_load(&path)?;

        let dataset = parsed.get(&entry.dataset).ok_or_else(|| {
            let available: Vec<&str> = parsed
                .as_object()
                .map(|o| o.keys().map(String::as_str).collect())
                .unwrap_or_default();
            Error::unknown_dataset(&entry.data_file, &entry.dataset, &available)
        })?;

        let record: DataRecord =
            serde_json::from_value(dataset.clone()).map_err(|e| Error::DataFileParse {
                path: path.display().to_string(),
                error: format!("dataset '{}': {e}", entry.dataset),
            })?;

        tracing::debug!(test_id, dataset = %entry.dataset, fields = record.len(), "resolved test data");
        Ok(record)
    }

    /// Look up the mapping entry for a test id
    pub fn entry(&self, test_id: &str) -> Option<&TestMappingEntry> {
        self.mapping.get(test_id)
    }

    /// All mapped test ids, sorted
    pub fn test_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.mapping.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Names of the datasets a data file contains
    pub fn datasets_in(&self, cache: &mut DataCache, file_name: &str) -> Result<Vec<String>> {
        let path = self.data_dir.join(file_name);
        let parsed = cache.get_or_load(&path)?;
        let mut names: Vec<String> = parsed
            .as_object()
            .map(|o| o.keys().cloned().collect())
            .unwrap_or_default();
        names.sort_unstable();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(TEST_MAPPING_FILE),
            r#"{
                "_comment": "map test ids to data files and datasets",
                "signup_valid": { "data_file": "signup.json", "dataset": "valid" },
                "signup_minimal": { "data_file": "signup.json", "dataset": "minimal" },
                "signup_missing": { "data_file": "signup.json", "dataset": "nope" },
                "broken_file": { "data_file": "missing.json", "dataset": "any" }
            }"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("signup.json"),
            r#"{
                "valid": { "username": "bob", "terms": true },
                "minimal": { "username": "eve" }
            }"#,
        )
        .unwrap();
        dir
    }

    #[test]
    fn resolves_a_mapped_test_id() {
        let dir = fixture_dir();
        let resolver = TestDataResolver::new(dir.path()).unwrap();
        let mut cache = DataCache::new();

        let record = resolver.resolve(&mut cache, "signup_valid").unwrap();
        assert_eq!(record.get("username").unwrap().to_text(), "bob");
        assert!(record.get("terms").unwrap().is_truthy());
    }

    #[test]
    fn unknown_test_id_is_reported() {
        let dir = fixture_dir();
        let resolver = TestDataResolver::new(dir.path()).unwrap();
        let mut cache = DataCache::new();

        let err = resolver.resolve(&mut cache, "does_not_exist").unwrap_err();
        assert!(matches!(err, Error::UnknownTestId(id) if id == "does_not_exist"));
    }

    #[test]
    fn same_file_is_parsed_exactly_once() {
        let dir = fixture_dir();
        let resolver = TestDataResolver::new(dir.path()).unwrap();
        let mut cache = DataCache::new();

        resolver.resolve(&mut cache, "signup_valid").unwrap();
        resolver.resolve(&mut cache, "signup_minimal").unwrap();
        assert_eq!(cache.file_loads(), 1);
    }

    #[test]
    fn unknown_dataset_names_file_and_available_sets() {
        let dir = fixture_dir();
        let resolver = TestDataResolver::new(dir.path()).unwrap();
        let mut cache = DataCache::new();

        let err = resolver.resolve(&mut cache, "signup_missing").unwrap_err();
        match err {
            Error::UnknownDataset { file, dataset, available } => {
                assert_eq!(file, "signup.json");
                assert_eq!(dataset, "nope");
                assert!(available.contains("valid"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_data_file_is_reported() {
        let dir = fixture_dir();
        let resolver = TestDataResolver::new(dir.path()).unwrap();
        let mut cache = DataCache::new();

        let err = resolver.resolve(&mut cache, "broken_file").unwrap_err();
        assert!(matches!(err, Error::DataFileNotFound { .. }));
    }

    #[test]
    fn malformed_data_file_is_a_parse_error() {
        let dir = fixture_dir();
        std::fs::write(dir.path().join("signup.json"), "{ not json").unwrap();

        let resolver = TestDataResolver::new(dir.path()).unwrap();
        let mut cache = DataCache::new();
        let err = resolver.resolve(&mut cache, "signup_valid").unwrap_err();
        assert!(matches!(err, Error::DataFileParse { .. }));
    }

    #[test]
    fn comment_keys_are_not_test_ids() {
        let dir = fixture_dir();
        let resolver = TestDataResolver::new(dir.path()).unwrap();
        assert!(!resolver.test_ids().contains(&"_comment"));
        assert!(resolver.test_ids().contains(&"signup_valid"));
    }

    #[test]
    fn lists_datasets_in_a_file() {
        let dir = fixture_dir();
        let resolver = TestDataResolver::new(dir.path()).unwrap();
        let mut cache = DataCache::new();

        let datasets = resolver.datasets_in(&mut cache, "signup.json").unwrap();
        assert_eq!(datasets, vec!["minimal".to_string(), "valid".to_string()]);
    }
}
