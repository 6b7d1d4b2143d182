use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::catalog::{CatalogError, HeaderCatalog};
use crate::parser::sections::FlushPolicy;

const DEFAULT_FILE: &str = "insight";
const ENV_PREFIX: &str = "INSIGHT";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid settings: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// JSON catalog replacing the built-in header table.
    pub catalog_path: Option<PathBuf>,
    pub flush_policy: FlushPolicy,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: None,
            flush_policy: FlushPolicy::default(),
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// Defaults, then `./insight.{toml,json,yaml}` if present, then `INSIGHT_*` env vars.
    pub fn load() -> Result<Self, SettingsError> {
        Self::build(File::with_name(DEFAULT_FILE).required(false))
    }

    /// Same layering with an explicit settings file, which must exist.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        Self::build(File::from(path).required(true))
    }

    fn build<S>(file: S) -> Result<Self, SettingsError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let settings = Config::builder()
            .set_default("flush_policy", "non_empty")?
            .set_default("log_filter", "info")?
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    pub fn catalog(&self) -> Result<HeaderCatalog, SettingsError> {
        match &self.catalog_path {
            Some(path) => {
                let catalog = HeaderCatalog::from_json_file(path)?;
                info!(path = %path.display(), headers = catalog.len(), "loaded header catalog");
                Ok(catalog)
            }
            None => Ok(HeaderCatalog::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn toml_file(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn file_overrides_defaults() {
        let file = toml_file("flush_policy = \"always\"\nlog_filter = \"debug\"\n");
        let s = Settings::load_from(file.path()).unwrap();
        assert_eq!(s.flush_policy, FlushPolicy::Always);
        assert_eq!(s.log_filter, "debug");
        assert!(s.catalog_path.is_none());
    }

    #[test]
    fn empty_file_gives_defaults() {
        let file = toml_file("");
        let s = Settings::load_from(file.path()).unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let file = toml_file("flush_policy = \"sometimes\"\n");
        assert!(matches!(
            Settings::load_from(file.path()),
            Err(SettingsError::Config(_))
        ));
    }

    #[test]
    fn missing_catalog_file_is_an_error() {
        let s = Settings {
            catalog_path: Some(PathBuf::from("does/not/exist.json")),
            ..Settings::default()
        };
        assert!(matches!(
            s.catalog(),
            Err(SettingsError::Catalog(CatalogError::Io { .. }))
        ));
    }

    #[test]
    fn builtin_catalog_by_default() {
        let catalog = Settings::default().catalog().unwrap();
        assert_eq!(catalog, HeaderCatalog::default());
    }
}
