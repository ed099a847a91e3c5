use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::{BaseDirs, ProjectDirs};
use once_cell::sync::Lazy;

use crate::catalog::Catalog;

static CATALOG_FILE_NAME: &str = "catalog.json";
static LOG_FILE_NAME: &str = "folio.log";
static ENV_DATA_DIR: &str = "FOLIO_DATA_DIR";
static ENV_CATALOG: &str = "FOLIO_CATALOG";

static PROJECT_DIRS: Lazy<Option<ProjectDirs>> =
    Lazy::new(|| ProjectDirs::from("dev", "projectography", "folio"));

/// Where the catalog comes from once configuration is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Builtin,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    data_dir: PathBuf,
    catalog: CatalogSource,
    log_path: PathBuf,
}

impl AppConfig {
    /// Resolve the data directory and catalog from the given overrides,
    /// environment variables and platform defaults.
    pub fn discover(
        data_dir_override: Option<PathBuf>,
        catalog_override: Option<PathBuf>,
    ) -> Result<Self> {
        let data_dir = resolve_data_dir(data_dir_override)?;
        if !data_dir.exists() {
            fs::create_dir_all(&data_dir).with_context(|| {
                format!("Failed to create data directory at {}", data_dir.display())
            })?;
        }
        let catalog_override =
            catalog_override.or_else(|| env::var(ENV_CATALOG).ok().map(PathBuf::from));
        Ok(Self::from_data_dir(data_dir, catalog_override))
    }

    /// Build a config rooted at an already-resolved data directory.
    pub fn from_data_dir(data_dir: PathBuf, catalog_override: Option<PathBuf>) -> Self {
        let catalog = match catalog_override {
            Some(path) => CatalogSource::File(path),
            None => {
                let candidate = data_dir.join(CATALOG_FILE_NAME);
                if candidate.is_file() {
                    CatalogSource::File(candidate)
                } else {
                    CatalogSource::Builtin
                }
            }
        };
        let log_path = data_dir.join(LOG_FILE_NAME);
        Self {
            data_dir,
            catalog,
            log_path,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn catalog_source(&self) -> &CatalogSource {
        &self.catalog
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            CatalogSource::File(path) => Catalog::load(path)
                .with_context(|| format!("Failed to load catalog from {}", path.display())),
            CatalogSource::Builtin => {
                tracing::info!("using built-in sample catalog");
                Catalog::builtin().context("Built-in catalog is invalid")
            }
        }
    }
}

fn resolve_data_dir(data_dir_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = data_dir_override {
        return Ok(dir);
    }

    if let Ok(env_dir) = env::var(ENV_DATA_DIR) {
        return Ok(PathBuf::from(env_dir));
    }

    if let Some(project) = &*PROJECT_DIRS {
        return Ok(project.data_dir().to_path_buf());
    }

    if let Some(base) = BaseDirs::new() {
        return Ok(base.home_dir().join(".projectography"));
    }

    Ok(env::current_dir()?.join(".projectography"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn empty_data_dir_falls_back_to_builtin_catalog() {
        let dir = tempdir().expect("temp dir");
        let config = AppConfig::from_data_dir(dir.path().to_path_buf(), None);
        assert_eq!(config.catalog_source(), &CatalogSource::Builtin);
        assert_eq!(config.log_path(), dir.path().join("folio.log"));
        assert_eq!(config.load_catalog().expect("builtin").len(), 3);
    }

    #[test]
    fn catalog_in_data_dir_is_picked_up() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("catalog.json");
        fs::write(&path, r#"{"projects":[{"id":"only","title":"Only"}]}"#).unwrap();

        let config = AppConfig::from_data_dir(dir.path().to_path_buf(), None);
        assert_eq!(config.catalog_source(), &CatalogSource::File(path));
        assert_eq!(config.load_catalog().expect("file catalog").len(), 1);
    }

    #[test]
    fn explicit_catalog_wins_and_reports_missing_file() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("catalog.json"), r#"{"projects":[]}"#).unwrap();
        let missing = dir.path().join("elsewhere.json");

        let config = AppConfig::from_data_dir(dir.path().to_path_buf(), Some(missing.clone()));
        assert_eq!(config.catalog_source(), &CatalogSource::File(missing));
        let err = config.load_catalog().unwrap_err();
        assert!(err.to_string().contains("elsewhere.json"));
    }

    #[test]
    fn discover_creates_override_dir() {
        let dir = tempdir().expect("temp dir");
        let nested = dir.path().join("a").join("b");
        let config = AppConfig::discover(Some(nested.clone()), None).expect("discover");
        assert!(nested.is_dir());
        assert_eq!(config.data_dir(), nested.as_path());
    }
}
