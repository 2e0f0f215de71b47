use serde::{Deserialize, Serialize};

/// One ranked hit from the hosted search index. `score` is the external
/// ranker's relevance number; it is never recomputed locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedDocument {
    pub content: String,
    pub title: String,
    pub url: String,
    pub score: f64,
}
