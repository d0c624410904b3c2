//! Playlist construction from a directory tree

use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use super::format::Format;
use super::model::Playlist;
use super::track::{Track, UNKNOWN_SECS};
use crate::config::Config;
use crate::utils::normalize_name;

/// Build a playlist from the audio files under `folder` (recursively).
///
/// The playlist is named after the folder's base name with the format's
/// canonical extension, titles come from the normalizer, durations are
/// unknown, and tracks are ordered by the uppercase form of their path
/// for a locale-independent, case-insensitive ordering. Nothing is
/// written to disk; saving is the caller's decision.
pub fn build(folder: &Path, format: Format, config: &Config) -> Playlist {
    let stem = folder
        .file_name()
        .unwrap_or(folder.as_os_str())
        .to_string_lossy();
    let mut playlist = Playlist::new(format!("{stem}.{}", format.extension()));

    let mut tracks: Vec<Track> = Vec::new();
    for entry in WalkDir::new(folder).into_iter().filter_map(Result::ok) {
        let path = entry.path();
        if path.is_file() && config.is_audio(path) {
            let filename = path.to_string_lossy().into_owned();
            let title = normalize_name(&filename);
            tracks.push(Track::new(title, filename, UNKNOWN_SECS));
        }
    }
    tracks.sort_by(|a, b| a.filename.to_uppercase().cmp(&b.filename.to_uppercase()));

    debug!(
        "Built {} tracks from {} into {}",
        tracks.len(),
        folder.display(),
        playlist.filename().display()
    );
    playlist.set_tracks(tracks);
    playlist
}
