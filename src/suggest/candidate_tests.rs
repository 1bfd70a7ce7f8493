//! Tests for candidate mapping and display annotations

use super::*;

fn image(
    automated: bool,
    trusted: bool,
    official: bool,
    star_count: u64,
) -> crate::registry::HubSearchResult {
    crate::registry::HubSearchResult {
        name: "redis".to_string(),
        is_automated: automated,
        is_trusted: trusted,
        is_official: official,
        star_count,
        description: "Redis is an open source key-value store.".to_string(),
    }
}

#[test]
fn automated_badge_wins_over_all_others() {
    // All three flags set: only the highest-priority badge is shown.
    let candidate = CompletionCandidate::from_result(&image(true, true, true, 2));
    assert_eq!(candidate.detail, "[Automated] 2 stars");
}

#[test]
fn trusted_badge_wins_over_official() {
    let candidate = CompletionCandidate::from_result(&image(false, true, true, 0));
    assert_eq!(candidate.detail, "[Trusted]");
}

#[test]
fn official_badge_is_the_fallback() {
    let candidate = CompletionCandidate::from_result(&image(false, false, true, 830));
    assert_eq!(candidate.detail, "[Official] 830 stars");
}

#[test]
fn single_star_is_singular() {
    let candidate = CompletionCandidate::from_result(&image(false, false, true, 1));
    assert_eq!(candidate.detail, "[Official] 1 star");
}

#[test]
fn zero_stars_means_no_star_suffix() {
    let candidate = CompletionCandidate::from_result(&image(false, false, true, 0));
    assert_eq!(candidate.detail, "[Official]");
}

#[test]
fn no_flags_and_no_stars_means_empty_detail() {
    let candidate = CompletionCandidate::from_result(&image(false, false, false, 0));
    assert_eq!(candidate.detail, "");
}

#[test]
fn badge_less_starred_result_keeps_the_separating_space() {
    let candidate = CompletionCandidate::from_result(&image(false, false, false, 3));
    assert_eq!(candidate.detail, " 3 stars");
}

#[test]
fn candidate_mirrors_the_result() {
    let candidate = CompletionCandidate::from_result(&image(false, false, true, 830));

    assert_eq!(candidate.label, "redis");
    assert_eq!(candidate.insert_text, "redis");
    assert_eq!(candidate.kind, CandidateKind::Value);
    assert_eq!(
        candidate.documentation,
        "Redis is an open source key-value store."
    );
}
