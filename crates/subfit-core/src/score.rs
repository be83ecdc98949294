use crate::config::MatchConfig;
use crate::detect;
use crate::models::{MatchDetails, MatchScore};

// ── Signal weights ──────────────────────────────────────────────

const EPISODE_MATCH: i32 = 100;
const EPISODE_MISMATCH: i32 = -50;
const RESOLUTION_MATCH: i32 = 40;
const RESOLUTION_MISMATCH: i32 = -30;
const SOURCE_MATCH: i32 = 50;
const SOURCE_MISMATCH: i32 = -20;
const GROUP_MATCH: i32 = 30;
const SIMILARITY_WEIGHT: f64 = 20.0;
const PRIORITY_BONUS: i32 = 15;

/// Score one candidate release name against the playing file's name.
///
/// Every signal is evaluated independently and accumulated additively; no
/// signal short-circuits another. Comparison is case-insensitive. The
/// function is total: any pair of strings produces a score, and identical
/// inputs always produce identical output.
pub fn score(candidate_name: &str, reference_name: &str, config: &MatchConfig) -> MatchScore {
    let sub = candidate_name.to_lowercase();
    let video = reference_name.to_lowercase();

    let mut score = 0;
    let mut details = MatchDetails::default();

    // Episode identity. Skipped entirely unless both names carry a marker.
    if let (Some(sub_ep), Some(video_ep)) =
        (detect::episode_pair(&sub), detect::episode_pair(&video))
    {
        if sub_ep == video_ep {
            score += EPISODE_MATCH;
            details.episode_match = Some(true);
        } else {
            score += EPISODE_MISMATCH;
            details.episode_match = Some(false);
        }
    }

    // Resolution identity, config-gated. The detected classes are always
    // recorded when the signal is enabled; the delta only applies when both
    // sides were detected.
    if config.resolution {
        let video_res = detect::resolution(&video);
        let sub_res = detect::resolution(&sub);

        if let (Some(v), Some(s)) = (video_res, sub_res) {
            if v == s {
                score += RESOLUTION_MATCH;
                details.resolution_match = Some(true);
            } else {
                score += RESOLUTION_MISMATCH;
                details.resolution_match = Some(false);
            }
        }
        details.video_resolution =
            Some(video_res.map_or_else(|| "unknown".into(), |r| r.to_string()));
        details.sub_resolution = Some(sub_res.map_or_else(|| "unknown".into(), |r| r.to_string()));
    }

    // Source identity. A mismatch costs points but records no key.
    match (detect::source(&video), detect::source(&sub)) {
        (Some(v), Some(s)) if v == s => {
            score += SOURCE_MATCH;
            details.source_match = Some(true);
        }
        (Some(_), Some(_)) => score += SOURCE_MISMATCH,
        _ => {}
    }

    // Release group. Only an exact pairing counts; no key on mismatch.
    if let (Some(v), Some(s)) = (detect::release_group(&video), detect::release_group(&sub)) {
        if v == s {
            score += GROUP_MATCH;
            details.group_match = Some(true);
        }
    }

    // General similarity over the extension-stripped base names.
    let similarity =
        strsim::normalized_levenshtein(strip_last_extension(&video), strip_last_extension(&sub));
    score += (similarity * SIMILARITY_WEIGHT) as i32;
    details.similarity = similarity;

    // Priority translator/source bonus.
    if detect::has_priority_token(&sub) {
        score += PRIORITY_BONUS;
        details.priority_translator = Some(true);
    }

    MatchScore { score, details }
}

fn strip_last_extension(name: &str) -> &str {
    name.rsplit_once('.').map_or(name, |(base, _)| base)
}
