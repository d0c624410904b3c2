//! tracklist - build, convert and inspect audio playlists
//!
//! The engine lives in [`playlist`]: a track/playlist data model, one
//! codec per on-disk format (M3U, PLS, XSPF) and a directory-scanning
//! builder. [`config`] carries user preferences and [`utils`] the pure
//! helpers for titles and durations. The command-line surface sits on top
//! in the binary.

pub mod config;
pub mod playlist;
pub mod utils;
