//! Read-only project catalog: the dataset every view queries.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::model::{MediumFilter, MediumMeta, Project};

static BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate project id '{0}' in catalog")]
    DuplicateId(String),
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
    projects: Vec<Project>,
    #[serde(default)]
    mediums: BTreeMap<String, MediumMeta>,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Vec<Project>,
    mediums: BTreeMap<String, MediumMeta>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate project ids.
    pub fn new(
        projects: Vec<Project>,
        mediums: BTreeMap<String, MediumMeta>,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for project in &projects {
            if !seen.insert(project.id.as_str()) {
                return Err(CatalogError::DuplicateId(project.id.clone()));
            }
        }
        let catalog = Self { projects, mediums };
        for medium in catalog.mediums_without_meta() {
            tracing::warn!(medium, "no metadata for medium");
        }
        Ok(catalog)
    }

    /// The sample portfolio bundled with the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let parsed: RawCatalog = serde_json::from_str(raw)?;
        Self::new(parsed.projects, parsed.mediums)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            projects = catalog.projects.len(),
            mediums = catalog.mediums.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Look up a project by id; stale or unknown ids yield `None`.
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn medium_meta(&self, medium: &str) -> Option<&MediumMeta> {
        self.mediums.get(medium)
    }

    /// Metadata for `medium`, or an entry with empty narrative fields when the
    /// catalog has none.
    pub fn medium_or_empty(&self, medium: &str) -> MediumMeta {
        match self.medium_meta(medium) {
            Some(meta) => meta.clone(),
            None => MediumMeta::untitled(medium),
        }
    }

    /// Mediums used by some project but missing from the metadata map.
    pub fn mediums_without_meta(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.projects
            .iter()
            .map(|project| project.medium.as_str())
            .filter(|medium| !self.mediums.contains_key(*medium) && seen.insert(*medium))
            .collect()
    }

    /// Distinct medium names in order of first appearance.
    pub fn mediums(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.projects
            .iter()
            .filter(|project| seen.insert(project.medium.as_str()))
            .map(|project| project.medium.clone())
            .collect()
    }

    pub fn projects_with_medium(&self, medium: &str) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|project| project.medium == medium)
            .collect()
    }

    /// Options for the medium filter picker: the catch-all sentinel first.
    pub fn medium_filter_options(&self) -> Vec<MediumFilter> {
        let mut options = vec![MediumFilter::All];
        options.extend(self.mediums().into_iter().map(MediumFilter::Only));
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn builtin_catalog_has_sample_projects() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.mediums(),
            vec![
                "Motion Graphics".to_string(),
                "Print Media".to_string(),
                "3D Installation".to_string()
            ]
        );
        let neon = catalog.project("001").expect("project 001");
        assert_eq!(neon.title, "NEON VELOCITY");
        assert_eq!(neon.credits[0].role, "Creative Director");
        assert_eq!(neon.credits[2].name, "LFO Studio");
    }

    #[test]
    fn builtin_catalog_covers_every_medium() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.mediums_without_meta().is_empty());
    }

    #[test]
    fn unknown_id_is_absent() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.project("999").is_none());
    }

    #[test]
    fn missing_medium_metadata_degrades_to_empty_narrative() {
        let catalog = Catalog::builtin().unwrap();
        let meta = catalog.medium_or_empty("Sound Art");
        assert_eq!(meta.title, "Sound Art");
        assert_eq!(meta.approach, "");
        assert_eq!(meta.description, "");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let raw = r#"{"projects":[{"id":"a","title":"One"},{"id":"a","title":"Two"}]}"#;
        let err = Catalog::from_json_str(raw).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn load_reads_file_and_reports_missing_path() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{"projects":[{{"id":"p1","title":"Solo","medium":"Zine"}}]}}"#
        )
        .unwrap();
        let catalog = Catalog::load(file.path()).expect("load catalog");
        assert_eq!(catalog.projects_with_medium("Zine").len(), 1);
        assert!(catalog.medium_meta("Zine").is_none());
        assert_eq!(catalog.mediums_without_meta(), vec!["Zine"]);

        let missing = file.path().with_extension("missing");
        let err = Catalog::load(&missing).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }

    #[test]
    fn filter_options_start_with_sentinel() {
        let catalog = Catalog::builtin().unwrap();
        let options = catalog.medium_filter_options();
        assert_eq!(options.len(), 4);
        assert_eq!(options[0], MediumFilter::All);
        assert_eq!(options[1], MediumFilter::Only("Motion Graphics".into()));
    }
}
