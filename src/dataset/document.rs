use serde::{Deserialize, Serialize};

/// A normalized, citable unit of retrievable text built from one source
/// record. Documents are immutable once built; the store is rebuilt
/// wholesale, never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Sequential identifier, 1-based, stringified, assigned at build time.
    pub id: String,
    /// Display title: `"{japanese_name} ({scientific_name})"`.
    pub title: String,
    /// Multi-line structured text rendered from the other fields.
    pub content: String,
    /// Taxonomic category label the source file belongs to.
    pub category: String,
    /// Conservation-status code (CR, VU, NT, ...).
    pub rank: String,
    /// Source citation URL.
    pub url: String,
    pub scientific_name: String,
    pub japanese_name: String,
    pub family: String,
}
