mod parser;

use crate::workflows::outreach::domain::{Formation, Prospect, Template};
use std::io::Read;
use std::path::Path;

/// Import failure surfaced at the file/CSV boundary. Missing cells are never
/// errors; rows without their required key are skipped instead.
#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Reads the semicolon-delimited catalog exports (prospects, formations,
/// outreach templates) into the domain types the engine scores.
pub struct CatalogImporter;

impl CatalogImporter {
    pub fn prospects_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<Prospect>, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::prospects_from_reader(file)
    }

    pub fn prospects_from_reader<R: Read>(reader: R) -> Result<Vec<Prospect>, CatalogImportError> {
        Ok(parser::parse_prospects(reader)?)
    }

    pub fn formations_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<Formation>, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::formations_from_reader(file)
    }

    pub fn formations_from_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<Formation>, CatalogImportError> {
        Ok(parser::parse_formations(reader)?)
    }

    pub fn templates_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<Template>, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::templates_from_reader(file)
    }

    pub fn templates_from_reader<R: Read>(reader: R) -> Result<Vec<Template>, CatalogImportError> {
        Ok(parser::parse_templates(reader)?)
    }
}
