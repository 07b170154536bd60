use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

use super::{catalog, Catalog, CatalogError, PortfolioStats, Project};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Catalog failed validation: {0}")]
    Invalid(#[from] CatalogError),
    #[error("Couldn't write catalog export: {0}")]
    Io(#[from] std::io::Error),
    #[error("Couldn't serialize catalog: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct CatalogExport<'a> {
    projects: &'a [Project],
    stats: &'a PortfolioStats,
}

impl Catalog {
    /// Validate and write the catalog, with its curated stats, as pretty JSON.
    /// Nothing is written when validation fails. Returns the number of projects written.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<usize, ExportError> {
        self.validate()?;

        let stats = PortfolioStats::curated(self);
        let export = CatalogExport {
            projects: self.all(),
            stats: &stats,
        };
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        serde_json::to_writer_pretty(&mut writer, &export)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        log::info!(
            "wrote {} projects to {}",
            export.projects.len(),
            path.as_ref().display()
        );
        Ok(export.projects.len())
    }
}

pub fn write_catalog_json(path: impl AsRef<Path>) -> Result<usize, ExportError> {
    catalog().write_json(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::{all_projects, portfolio_stats, test_project, Category};

    #[test]
    fn test_write_catalog_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.json");

        let written = write_catalog_json(&path).unwrap();
        assert_eq!(written, all_projects().len());

        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        let projects = value["projects"].as_array().unwrap();
        assert_eq!(projects.len(), written);
        assert_eq!(projects[0]["id"], all_projects()[0].id.as_str());
        assert_eq!(value["stats"]["totalProjects"], written);
        assert_eq!(value["stats"]["categories"]["Game"], 1);
        let stats: PortfolioStats = serde_json::from_value(value["stats"].clone()).unwrap();
        assert_eq!(&stats, portfolio_stats());

        let round_trip: Vec<Project> = serde_json::from_value(value["projects"].clone()).unwrap();
        assert_eq!(round_trip, all_projects());
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("projects.json");
        assert!(matches!(
            write_catalog_json(&path),
            Err(ExportError::Io(_))
        ));
    }

    #[test]
    fn test_invalid_catalog_is_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.json");
        let catalog = Catalog::from_parts(
            vec![test_project("tfe", Category::TuiApplication)],
            vec![test_project("tfe", Category::TuiApplication)],
            vec![],
            vec![],
            vec![],
        );

        assert!(matches!(
            catalog.write_json(&path),
            Err(ExportError::Invalid(CatalogError::DuplicateId(ref id))) if id == "tfe"
        ));
        assert!(!path.exists());
    }
}
