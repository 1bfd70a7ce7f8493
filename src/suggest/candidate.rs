//! Completion candidates and their display annotations

use serde::Serialize;

use crate::registry::HubSearchResult;

/// Completion kind marker for editor integrations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateKind {
    /// Plain value completion
    Value,
}

/// One annotated image name suggestion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionCandidate {
    /// Image name shown in the completion list
    pub label: String,
    pub kind: CandidateKind,
    /// Badge and star annotation, e.g. "[Official] 1300 stars"
    pub detail: String,
    /// Text inserted when the candidate is accepted
    pub insert_text: String,
    /// Image description
    pub documentation: String,
}

impl CompletionCandidate {
    pub fn from_result(image: &HubSearchResult) -> Self {
        Self {
            label: image.name.clone(),
            kind: CandidateKind::Value,
            detail: detail(image),
            insert_text: image.name.clone(),
            documentation: image.description.clone(),
        }
    }
}

impl From<&HubSearchResult> for CompletionCandidate {
    fn from(image: &HubSearchResult) -> Self {
        Self::from_result(image)
    }
}

/// Highest-priority badge for an image.
///
/// A result can carry several flags, but only one badge is shown:
/// Automated wins over Trusted wins over Official.
fn badge(image: &HubSearchResult) -> Option<&'static str> {
    if image.is_automated {
        Some("Automated")
    } else if image.is_trusted {
        Some("Trusted")
    } else if image.is_official {
        Some("Official")
    } else {
        None
    }
}

/// Badge followed by the star annotation.
///
/// The star annotation starts with its own separating space, so a badge-less
/// starred result renders with a leading space.
fn detail(image: &HubSearchResult) -> String {
    let badge = badge(image).map(|b| format!("[{b}]")).unwrap_or_default();
    let stars = match image.star_count {
        0 => String::new(),
        1 => " 1 star".to_string(),
        n => format!(" {n} stars"),
    };
    format!("{badge}{stars}")
}

#[cfg(test)]
#[path = "candidate_tests.rs"]
mod candidate_tests;
