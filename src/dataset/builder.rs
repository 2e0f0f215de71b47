//! Document Store Builder.
//!
//! Walks an ordered list of (file, category) pairs, normalizes every
//! data row, assigns global sequential ids, and writes the result as
//! newline-delimited JSON. The build is best-effort: a missing or
//! undecodable file is logged and skipped, never fatal to the run.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::document::Document;
use super::{encoding, normalizer, DatasetError};

/// One input unit: a raw CSV file and the category label its rows
/// belong to.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub category: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, category: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            category: category.into(),
        }
    }
}

/// Outcome of one build run.
#[derive(Debug, Default)]
pub struct BuildSummary {
    /// All documents, ids `1..=N` in file-then-row order.
    pub documents: Vec<Document>,
    /// Per-category counts, only for files that processed cleanly.
    pub counts: BTreeMap<String, usize>,
}

pub struct DocumentStoreBuilder {
    encoding_label: String,
}

impl DocumentStoreBuilder {
    /// `encoding_label` is the declared encoding of every input file
    /// (the raw Red List CSVs are Shift_JIS).
    pub fn new(encoding_label: impl Into<String>) -> Self {
        Self {
            encoding_label: encoding_label.into(),
        }
    }

    /// Build the full document set from the listed files, in order.
    ///
    /// Deterministic: identical inputs in identical order yield
    /// identical ids and content. Ids only advance for files that
    /// processed cleanly, so a skipped file never shifts the rest.
    pub fn build(&self, sources: &[SourceFile]) -> BuildSummary {
        let mut summary = BuildSummary::default();

        for source in sources {
            if !source.path.exists() {
                tracing::warn!("input file not found, skipping: {}", source.path.display());
                continue;
            }

            tracing::info!("processing {} ({})", source.category, source.path.display());
            let start_id = summary.documents.len() + 1;
            match self.build_file(source, start_id) {
                Ok(documents) => {
                    *summary.counts.entry(source.category.clone()).or_insert(0) += documents.len();
                    summary.documents.extend(documents);
                }
                Err(err) => {
                    tracing::warn!("failed to process {}: {}", source.path.display(), err);
                }
            }
        }

        summary
    }

    fn build_file(&self, source: &SourceFile, start_id: usize) -> Result<Vec<Document>, DatasetError> {
        let bytes = fs::read(&source.path)?;
        let text = encoding::decode(&bytes, &self.encoding_label)?;

        // First row is the header, as in the published CSVs.
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut documents = Vec::new();
        for record in reader.records() {
            let record = record?;
            let fields: Vec<&str> = record.iter().collect();
            if fields.is_empty() {
                continue;
            }

            let mut document = normalizer::normalize(&fields, &source.category);
            document.id = (start_id + documents.len()).to_string();
            documents.push(document);
        }

        Ok(documents)
    }
}

/// Serialize documents as newline-delimited JSON, one object per line,
/// UTF-8, no trailing metadata.
pub fn write_jsonl(documents: &[Document], path: &Path) -> Result<(), DatasetError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = fs::File::create(path)?;
    for document in documents {
        let line = serde_json::to_string(document)?;
        writeln!(file, "{}", line)?;
    }

    Ok(())
}
