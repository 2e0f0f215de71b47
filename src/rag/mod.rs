//! Retrieval-augmented generation pipeline.
//!
//! This module provides:
//! - `prompt`: pure assembly of the grounded two-message prompt
//! - `orchestrator`: the per-request retrieve → assemble → generate sequence

pub mod orchestrator;
pub mod prompt;

pub use orchestrator::{ChatAnswer, ChatOrchestrator, Source};
