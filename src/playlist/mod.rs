//! Playlist persistence engine
//!
//! An ordered collection of track references backed by one on-disk file in
//! one of three formats (M3U, PLS, XSPF), selected by filename extension.
//! Codecs are stateless, pure text transformers; the [`Playlist`]
//! aggregate owns its tracks and persists every change write-through.

pub mod builder;
mod error;
mod format;
mod m3u;
mod model;
mod pls;
mod track;
mod xspf;

pub use error::PlaylistError;
pub use format::{Format, is_playlist};
pub use model::Playlist;
pub use track::{Track, UNKNOWN_SECS};
