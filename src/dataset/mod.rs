//! Offline document preparation pipeline.
//!
//! This module provides:
//! - `encoding`: byte-level encoding detection and declared-encoding decode
//! - `normalizer`: one raw CSV row plus a category label → a [`Document`]
//! - `builder`: whole-dataset builds and the JSONL store writer

use thiserror::Error;

pub mod builder;
pub mod document;
pub mod encoding;
pub mod normalizer;

pub use builder::{BuildSummary, DocumentStoreBuilder, SourceFile};
pub use document::Document;

/// Failures during the offline build. Each maps to one skipped unit of
/// work (a file, never the run).
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unknown encoding label: {0}")]
    UnknownEncoding(String),
    #[error("undecodable bytes for encoding {0}")]
    Decode(String),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
