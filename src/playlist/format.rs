//! Playlist format identification and codec dispatch

use std::path::Path;

use super::error::PlaylistError;
use super::track::Track;
use super::{m3u, pls, xspf};

/// The closed set of supported on-disk playlist formats.
///
/// A format is selected purely by filename extension; there is no content
/// sniffing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    M3u,
    Pls,
    Xspf,
}

impl Format {
    /// Select a format from a path's extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        Self::from_name(ext)
    }

    /// Select a format from a user-supplied name such as `m3u`, `.PLS`
    /// or `xspf`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "m3u" => Some(Format::M3u),
            "pls" => Some(Format::Pls),
            "xspf" => Some(Format::Xspf),
            _ => None,
        }
    }

    /// The canonical lowercase extension, without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::M3u => "m3u",
            Format::Pls => "pls",
            Format::Xspf => "xspf",
        }
    }

    /// Decode playlist text into an ordered track list.
    pub fn decode(&self, text: &str) -> Result<Vec<Track>, PlaylistError> {
        match self {
            Format::M3u => m3u::decode(text),
            Format::Pls => pls::decode(text),
            Format::Xspf => xspf::decode(text),
        }
    }

    /// Encode an ordered track list as playlist text.
    pub fn encode(&self, tracks: &[Track]) -> Result<String, PlaylistError> {
        match self {
            Format::M3u => Ok(m3u::encode(tracks)),
            Format::Pls => Ok(pls::encode(tracks)),
            Format::Xspf => xspf::encode(tracks),
        }
    }
}

/// Whether the path's extension names one of the supported formats.
pub fn is_playlist(path: &Path) -> bool {
    Format::from_path(path).is_some()
}
