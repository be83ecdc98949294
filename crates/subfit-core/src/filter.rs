use crate::models::Candidate;

/// Title markers of hearing-impaired releases.
const HEARING_IMPAIRED_MARKERS: &[&str] = &["hearing", "sdh"];

/// Drop candidates whose title advertises a hearing-impaired track.
pub fn exclude_hearing_impaired(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let before = candidates.len();
    let filtered: Vec<Candidate> = candidates
        .into_iter()
        .filter(|c| {
            let title = c.title.to_lowercase();
            !HEARING_IMPAIRED_MARKERS.iter().any(|m| title.contains(m))
        })
        .collect();

    if filtered.len() != before {
        tracing::debug!(
            before,
            after = filtered.len(),
            "hearing-impaired releases filtered out"
        );
    }
    filtered
}
