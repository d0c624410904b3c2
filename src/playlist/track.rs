//! The immutable track value

/// Sentinel for a duration that has not been measured.
///
/// Codecs normalize a stored duration of `0` to this value: a zero-second
/// track is indistinguishable from one that was never measured.
pub const UNKNOWN_SECS: i64 = -1;

/// One playable item in a playlist.
///
/// A plain value with structural equality. Edits replace the whole track in
/// the owning [`Playlist`](super::Playlist) rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Display title
    pub title: String,
    /// Path to the media file (not checked for existence)
    pub filename: String,
    /// Duration in whole seconds; any value `<= 0` means unknown
    pub secs: i64,
}

impl Track {
    pub fn new(title: impl Into<String>, filename: impl Into<String>, secs: i64) -> Self {
        Self {
            title: title.into(),
            filename: filename.into(),
            secs,
        }
    }

    /// A track is valid only when both its title and filename are non-empty.
    ///
    /// Invalid tracks must never be persisted; codecs drop or reject them.
    pub fn is_valid(&self) -> bool {
        !self.title.is_empty() && !self.filename.is_empty()
    }

    /// Whether the duration is known.
    pub fn has_duration(&self) -> bool {
        self.secs > 0
    }
}
