use std::io::{Cursor, Read};

use crate::config::{MatchConfig, MultiFilePolicy};
use crate::detect;
use crate::error::SubfitError;
use crate::score;

/// Sentinel below any reachable match score.
const BEST_MATCH_FLOOR: i32 = -999;

/// One member of a downloaded subtitle package, fully materialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub name: String,
    pub data: Vec<u8>,
}

/// Synchronous "present these options, return the chosen index" capability
/// supplied by the host UI. Used only by the manual policy.
pub trait SelectionPrompt {
    /// Returns the chosen index, or `None` when the prompt was dismissed.
    fn select(&self, options: &[String]) -> Option<usize>;
}

/// Enumerate an in-memory zip package into named entries.
///
/// Directories are skipped; entries come back sorted by name ascending,
/// which is the tie-break baseline for every resolution policy.
pub fn read_entries(bytes: &[u8]) -> Result<Vec<ArchiveEntry>, SubfitError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut entries = Vec::with_capacity(archive.len());

    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        if file.is_dir() {
            continue;
        }
        let mut data = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut data)?;
        entries.push(ArchiveEntry {
            name: file.name().to_string(),
            data,
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Pick one subtitle file out of a multi-entry package.
///
/// Entries are filtered to subtitle extensions and sorted by filename before
/// the policy applies. A single qualifying entry is returned directly under
/// every policy, without scoring or prompting. Fails with
/// `NoSubtitleEntries` when nothing qualifies, or `SelectionCancelled` when
/// the manual prompt is dismissed.
pub fn resolve<'a>(
    entries: &'a [ArchiveEntry],
    reference_name: &str,
    policy: MultiFilePolicy,
    config: &MatchConfig,
    prompt: &dyn SelectionPrompt,
) -> Result<&'a ArchiveEntry, SubfitError> {
    let mut subtitles: Vec<&ArchiveEntry> = entries
        .iter()
        .filter(|e| detect::is_subtitle_file(&e.name))
        .collect();

    if subtitles.is_empty() {
        return Err(SubfitError::NoSubtitleEntries);
    }
    subtitles.sort_by(|a, b| a.name.cmp(&b.name));

    if subtitles.len() == 1 {
        return Ok(subtitles[0]);
    }

    match policy {
        MultiFilePolicy::Manual => {
            let options: Vec<String> = subtitles
                .iter()
                .map(|e| detect::basename(&e.name).to_string())
                .collect();
            let chosen = prompt
                .select(&options)
                .ok_or(SubfitError::SelectionCancelled)?;
            subtitles
                .get(chosen)
                .copied()
                .ok_or(SubfitError::SelectionCancelled)
        }
        MultiFilePolicy::First => Ok(subtitles[0]),
        MultiFilePolicy::BestMatch => {
            let mut best = subtitles[0];
            let mut best_score = BEST_MATCH_FLOOR;

            // Strictly-greater keeps the first-seen entry on ties, and loop
            // order is sorted order.
            for &entry in &subtitles {
                let result = score::score(detect::basename(&entry.name), reference_name, config);
                if result.score > best_score {
                    best_score = result.score;
                    best = entry;
                }
            }

            tracing::debug!(
                file = detect::basename(&best.name),
                score = best_score,
                "best-match subtitle selected"
            );
            Ok(best)
        }
    }
}
