use std::sync::LazyLock;

use phf::phf_set;
use regex::Regex;

// ── Regex patterns (compiled once) ──────────────────────────────

/// Season/episode marker: `s5e5`, `s05e05`, `S05E5`, ...
static RE_EPISODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"s(\d+)e(\d+)").unwrap());

/// Trailing scene release group: `-GROUP` with an optional extension suffix.
static RE_RELEASE_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-([a-z0-9]+)(?:\.[a-z0-9]+)?$").unwrap());

/// Subtitle formats the archive resolver recognizes.
pub const SUBTITLE_EXTENSIONS: &[&str] = &[".srt", ".ass"];

/// Tokens marking high-trust retail/streaming releases.
static PRIORITY_TOKENS: phf::Set<&'static str> = phf_set! {
    "subrip",
    "retail",
    "netflix",
    "hbo",
    "amazon",
};

/// Video resolution class detected in a release name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    R2160p,
    R1080p,
    R720p,
    R480p,
}

impl Resolution {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::R2160p => "2160p",
            Self::R1080p => "1080p",
            Self::R720p => "720p",
            Self::R480p => "480p",
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Release source class detected in a release name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Bluray,
    Web,
    Hdtv,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bluray => write!(f, "bluray"),
            Self::Web => write!(f, "web"),
            Self::Hdtv => write!(f, "hdtv"),
        }
    }
}

/// Keyword lists per source, checked in priority order: bluray > web > hdtv.
const SOURCE_KEYWORDS: &[(Source, &[&str])] = &[
    (Source::Bluray, &["bluray", "bdrip", "brrip", "remux"]),
    (Source::Web, &["web-dl", "webrip", "webdl", "amzn", "nf", "netflix"]),
    (Source::Hdtv, &["hdtv", "pdtv"]),
];

/// Extract a `(season, episode)` pair from a release name.
///
/// Numbers are compared as integers, so `s5e5` and `s05e05` yield the same
/// pair. Returns `None` when the name carries no marker.
pub fn episode_pair(name: &str) -> Option<(u32, u32)> {
    let name = name.to_lowercase();
    let caps = RE_EPISODE.captures(&name)?;
    let season = caps[1].parse().ok()?;
    let episode = caps[2].parse().ok()?;
    Some((season, episode))
}

/// Classify the video resolution named in a release, most specific first.
///
/// A token only counts when isolated: not preceded by a letter and not
/// followed by a letter or digit, so `1080p` inside a longer digit run is
/// never matched.
pub fn resolution(name: &str) -> Option<Resolution> {
    let name = name.to_lowercase();
    for token in ["2160p", "4320p", "4k", "uhd"] {
        if has_isolated_token(&name, token) {
            return Some(Resolution::R2160p);
        }
    }
    for token in ["1080p", "1080i", "fhd"] {
        if has_isolated_token(&name, token) {
            return Some(Resolution::R1080p);
        }
    }
    if has_isolated_token(&name, "720p") {
        return Some(Resolution::R720p);
    }
    if has_isolated_token(&name, "480p") {
        return Some(Resolution::R480p);
    }
    None
}

fn has_isolated_token(name: &str, token: &str) -> bool {
    for (start, _) in name.match_indices(token) {
        let before_ok = name[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_ascii_alphabetic());
        let after_ok = name[start + token.len()..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_ascii_alphanumeric());
        if before_ok && after_ok {
            return true;
        }
    }
    false
}

/// Classify the release source by keyword membership.
///
/// When keywords from several categories appear, the highest-priority
/// category wins (bluray > web > hdtv).
pub fn source(name: &str) -> Option<Source> {
    let name = name.to_lowercase();
    for (source, keywords) in SOURCE_KEYWORDS {
        if keywords.iter().any(|k| name.contains(k)) {
            return Some(*source);
        }
    }
    None
}

/// Extract the trailing release-group token, lowercased.
///
/// Names without the scene `-GROUP` convention yield `None`; the signal is
/// skipped, never an error.
pub fn release_group(name: &str) -> Option<String> {
    let name = name.to_lowercase();
    RE_RELEASE_GROUP
        .captures(&name)
        .map(|caps| caps[1].to_string())
}

/// Whether a candidate name advertises a high-trust translator or source.
pub fn has_priority_token(name: &str) -> bool {
    let name = name.to_lowercase();
    PRIORITY_TOKENS.iter().any(|token| name.contains(token))
}

/// Whether an archive member name ends in a recognized subtitle extension.
pub fn is_subtitle_file(name: &str) -> bool {
    let name = name.to_lowercase();
    SUBTITLE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Final path component of a (possibly slash-separated) entry name.
pub(crate) fn basename(path: &str) -> &str {
    std::path::Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_episode_pair_ignores_zero_padding() {
        assert_eq!(episode_pair("Show.S05E05.mkv"), Some((5, 5)));
        assert_eq!(episode_pair("show.s5e5.mkv"), Some((5, 5)));
        assert_eq!(episode_pair("show.s5e05.mkv"), Some((5, 5)));
        assert_eq!(episode_pair("Show.1x05.mkv"), None);
    }

    #[test]
    fn test_resolution_classes() {
        assert_eq!(
            resolution("The.Show.S01E01.1080p.WEB-DL"),
            Some(Resolution::R1080p)
        );
        assert_eq!(resolution("Movie.2160p.Remux"), Some(Resolution::R2160p));
        assert_eq!(resolution("Movie.4k.hdr"), Some(Resolution::R2160p));
        assert_eq!(resolution("Movie UHD BluRay"), Some(Resolution::R2160p));
        assert_eq!(resolution("show.1080i.hdtv"), Some(Resolution::R1080p));
        assert_eq!(resolution("show.FHD.webrip"), Some(Resolution::R1080p));
        assert_eq!(resolution("show.720p.hdtv"), Some(Resolution::R720p));
        assert_eq!(resolution("old.show.480p"), Some(Resolution::R480p));
        assert_eq!(resolution("plain.name.mkv"), None);
    }

    #[test]
    fn test_resolution_requires_isolated_token() {
        // Digit runs that merely contain a resolution substring don't count.
        assert_eq!(resolution("file.4108090p0.mkv"), None);
        // A following letter disqualifies the token.
        assert_eq!(resolution("file.720px.mkv"), None);
        // A preceding letter disqualifies the token.
        assert_eq!(resolution("file.x4k.mkv"), None);
    }

    #[test]
    fn test_source_keywords() {
        assert_eq!(source("Show.BDRip.x264"), Some(Source::Bluray));
        assert_eq!(source("Show.WEB-DL.DDP5.1"), Some(Source::Web));
        assert_eq!(source("Show.AMZN.WEBRip"), Some(Source::Web));
        assert_eq!(source("Show.HDTV.x264"), Some(Source::Hdtv));
        assert_eq!(source("Show.PDTV.XviD"), Some(Source::Hdtv));
        assert_eq!(source("Show.CAM"), None);
    }

    #[test]
    fn test_source_priority_on_overlap() {
        // Both webrip and hdtv present: the higher-priority category wins.
        assert_eq!(source("Show.WEBRip.from.HDTV.master"), Some(Source::Web));
        assert_eq!(source("Show.BluRay.vs.WEBRip"), Some(Source::Bluray));
    }

    #[test]
    fn test_release_group() {
        assert_eq!(
            release_group("Show.S01E01.1080p.WEB-DL-NTb.mkv"),
            Some("ntb".into())
        );
        assert_eq!(
            release_group("show.s01e01.720p-flux"),
            Some("flux".into())
        );
        assert_eq!(release_group("Show S01E01 plain name"), None);
    }

    #[test]
    fn test_priority_tokens() {
        assert!(has_priority_token("Show.S01E01.NF.WEB-DL.Retail"));
        assert!(has_priority_token("Movie 2020 Netflix subrip"));
        assert!(!has_priority_token("Show.S01E01.720p.HDTV"));
    }

    #[test]
    fn test_subtitle_extensions() {
        assert!(is_subtitle_file("episode.srt"));
        assert!(is_subtitle_file("Episode.ASS"));
        assert!(!is_subtitle_file("readme.txt"));
        assert!(!is_subtitle_file("episode.srt.bak"));
    }

    #[test]
    fn test_basename() {
        assert_eq!(basename("dir/sub/file.srt"), "file.srt");
        assert_eq!(basename("file.srt"), "file.srt");
    }
}
