use std::cmp::Reverse;

use crate::config::MatchConfig;
use crate::detect;
use crate::models::{Candidate, ScoredCandidate};
use crate::score;

/// How many ranked entries the diagnostic log lists.
const LOG_TOP_N: usize = 3;
/// Log lines truncate titles to this many characters.
const LOG_TITLE_CHARS: usize = 60;

/// Score and order candidates against the playing file.
///
/// Every candidate is scored against the basename of `reference_path`, then
/// sorted descending by score. The sort is stable: equal-score candidates
/// keep their input order. Returns new annotated records; the inputs are
/// consumed, not mutated in place.
pub fn rank(
    candidates: Vec<Candidate>,
    reference_path: &str,
    config: &MatchConfig,
) -> Vec<ScoredCandidate> {
    let reference = detect::basename(reference_path);

    let mut scored: Vec<ScoredCandidate> = candidates
        .into_iter()
        .map(|candidate| {
            let result = score::score(&candidate.title, reference, config);
            ScoredCandidate {
                candidate,
                match_score: result.score,
                match_details: result.details,
            }
        })
        .collect();

    scored.sort_by_key(|entry| Reverse(entry.match_score));

    for (i, entry) in scored.iter().take(LOG_TOP_N).enumerate() {
        tracing::debug!(
            rank = i + 1,
            score = entry.match_score,
            title = %truncate(&entry.candidate.title, LOG_TITLE_CHARS),
            "ranked candidate"
        );
    }

    scored
}

impl ScoredCandidate {
    /// Plain-text listing label: one badge per fired signal, then the title,
    /// optionally prefixed with the signed score.
    pub fn label(&self, show_score: bool) -> String {
        let details = &self.match_details;
        let mut badges: Vec<String> = Vec::new();

        if details.episode_match == Some(true) {
            badges.push("[EP]".into());
        }
        match details.resolution_match {
            Some(true) => {
                let res = details.video_resolution.as_deref().unwrap_or("RES");
                badges.push(format!("[{}]", res.to_uppercase()));
            }
            Some(false) => badges.push("[!RES]".into()),
            None => {}
        }
        if details.source_match == Some(true) {
            badges.push("[SRC]".into());
        }
        if details.group_match == Some(true) {
            badges.push("[GRP]".into());
        }
        if details.priority_translator == Some(true) {
            badges.push("[*]".into());
        }

        let label = if badges.is_empty() {
            self.candidate.title.clone()
        } else {
            format!("{} {}", badges.join(" "), self.candidate.title)
        };

        if show_score {
            format!("[{:+}] {}", self.match_score, label)
        } else {
            label
        }
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
