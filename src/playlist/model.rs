//! The playlist aggregate
//!
//! A `Playlist` owns an ordered track list and the name of its backing
//! file. The filename's extension selects the codec for both loading and
//! saving. Persistence is write-through: every mutator that changes state
//! saves before returning, so a successful mutation is always observable
//! on disk. If the save itself fails the in-memory change has already
//! happened and memory is ahead of disk; the error tells the caller so.

use std::fs;
use std::ops::Index;
use std::path::{Path, PathBuf};
use std::slice;

use tracing::debug;

use super::error::PlaylistError;
use super::format::Format;
use super::track::Track;
use crate::utils::humanized_duration;

#[derive(Debug, Clone)]
pub struct Playlist {
    filename: PathBuf,
    tracks: Vec<Track>,
}

impl Playlist {
    /// Create an empty playlist targeting `filename` without touching the
    /// filesystem.
    pub fn new(filename: impl Into<PathBuf>) -> Self {
        Self {
            filename: filename.into(),
            tracks: Vec::new(),
        }
    }

    /// Create a playlist targeting `filename`, loading it when the file
    /// already exists.
    pub fn open(filename: impl Into<PathBuf>) -> Result<Self, PlaylistError> {
        let mut playlist = Self::new(filename);
        if playlist.filename.exists() {
            playlist.load()?;
        }
        Ok(playlist)
    }

    pub fn filename(&self) -> &Path {
        &self.filename
    }

    fn format(&self) -> Result<Format, PlaylistError> {
        Format::from_path(&self.filename)
            .ok_or_else(|| PlaylistError::UnrecognizedFormat(self.filename.display().to_string()))
    }

    /// Replace the track list with the contents of the backing file.
    ///
    /// The new list is built in full before it replaces the old one, so a
    /// decode failure leaves the in-memory state untouched.
    pub fn load(&mut self) -> Result<(), PlaylistError> {
        let format = self.format()?;
        let text = fs::read_to_string(&self.filename)?;
        let tracks = format.decode(&text)?;
        debug!(
            "Loaded {} tracks from {}",
            tracks.len(),
            self.filename.display()
        );
        self.tracks = tracks;
        Ok(())
    }

    /// Retarget the playlist at `filename`, then load it.
    ///
    /// The filename changes even when loading fails, matching `save_as`.
    pub fn load_from(&mut self, filename: impl Into<PathBuf>) -> Result<(), PlaylistError> {
        self.filename = filename.into();
        self.load()
    }

    /// Write the track list to the backing file.
    pub fn save(&self) -> Result<(), PlaylistError> {
        let format = self.format()?;
        let text = format.encode(&self.tracks)?;
        fs::write(&self.filename, text)?;
        debug!(
            "Saved {} tracks to {}",
            self.tracks.len(),
            self.filename.display()
        );
        Ok(())
    }

    /// Retarget the playlist at `filename`, then save it.
    pub fn save_as(&mut self, filename: impl Into<PathBuf>) -> Result<(), PlaylistError> {
        self.filename = filename.into();
        self.save()
    }

    /// Append a track and save.
    pub fn push(&mut self, track: Track) -> Result<(), PlaylistError> {
        self.tracks.push(track);
        self.save()
    }

    /// Replace the track at `index` and save; replacing a track with an
    /// equal value is a no-op that does not save.
    ///
    /// Panics when `index` is out of range.
    pub fn set(&mut self, index: usize, track: Track) -> Result<(), PlaylistError> {
        if self.tracks[index] == track {
            return Ok(());
        }
        self.tracks[index] = track;
        self.save()
    }

    /// Insert a track at `index` and save.
    ///
    /// Panics when `index > len`.
    pub fn insert(&mut self, index: usize, track: Track) -> Result<(), PlaylistError> {
        self.tracks.insert(index, track);
        self.save()
    }

    /// Remove and return the track at `index`, saving the shortened list.
    ///
    /// Panics when `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Result<Track, PlaylistError> {
        let track = self.tracks.remove(index);
        self.save()?;
        Ok(track)
    }

    /// Drop every track and save the now-empty playlist.
    pub fn clear(&mut self) -> Result<(), PlaylistError> {
        self.tracks.clear();
        self.save()
    }

    /// Swap the track at `index` with its predecessor and save. Returns
    /// `false` without mutating or saving when already first.
    pub fn move_up(&mut self, index: usize) -> Result<bool, PlaylistError> {
        if index > 0 {
            return self.swap(index, index - 1);
        }
        Ok(false)
    }

    /// Swap the track at `index` with its successor and save. Returns
    /// `false` without mutating or saving when already last.
    pub fn move_down(&mut self, index: usize) -> Result<bool, PlaylistError> {
        if index + 1 < self.tracks.len() {
            return self.swap(index, index + 1);
        }
        Ok(false)
    }

    fn swap(&mut self, a: usize, b: usize) -> Result<bool, PlaylistError> {
        self.tracks.swap(a, b);
        self.save()?;
        Ok(true)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn iter(&self) -> slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    /// Sum of the known track durations in seconds; unknown durations
    /// contribute nothing.
    pub fn length(&self) -> i64 {
        self.tracks
            .iter()
            .filter(|t| t.has_duration())
            .map(|t| t.secs)
            .sum()
    }

    /// Compact rendering of the playlist's total length.
    ///
    /// Tracks with unknown durations make the total a lower bound
    /// ("at least …"), or "unknown length" when nothing is known at all.
    pub fn humanized_length(&self) -> String {
        let missing = self.tracks.iter().any(|t| !t.has_duration());
        let secs = self.length();
        if missing {
            if secs == 0 {
                return "unknown length".to_string();
            }
            return format!("at least {}", humanized_duration(secs));
        }
        humanized_duration(secs)
    }

    pub(crate) fn set_tracks(&mut self, tracks: Vec<Track>) {
        self.tracks = tracks;
    }
}

impl Index<usize> for Playlist {
    type Output = Track;

    fn index(&self, index: usize) -> &Track {
        &self.tracks[index]
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a Track;
    type IntoIter = slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}
