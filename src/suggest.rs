//! Image name suggestion engine
//!
//! Maps registry search results to annotated completion candidates, with an
//! instant seed-list fast path for the empty query.

mod candidate;
mod engine;

pub use candidate::{CandidateKind, CompletionCandidate};
pub use engine::SuggestionEngine;
