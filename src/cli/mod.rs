//! CLI module for tracklist

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

#[derive(Parser, Debug)]
#[command(name = "tracklist", about = "Build, convert and inspect audio playlists")]
#[command(version, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a playlist from the audio files in a folder and its subfolders
    ///
    /// With two arguments the first is the target format (m3u, pls, xspf)
    /// and the second the folder; with one argument the folder is scanned
    /// using the configured default format. The playlist is written to the
    /// current directory as <folder-name>.<format>.
    #[command(visible_alias = "b")]
    Build {
        /// Target format, or the folder when no second argument is given
        #[arg(value_name = "FORMAT_OR_FOLDER")]
        first: String,

        /// Folder to scan
        #[arg(value_name = "FOLDER")]
        folder: Option<String>,
    },

    /// Convert playlists to another format under the same stem
    #[command(visible_alias = "c")]
    Convert {
        /// Target format (m3u, pls, xspf)
        #[arg(value_name = "FORMAT")]
        format: String,

        /// Playlists to convert
        #[arg(value_name = "PLAYLIST", required = true)]
        playlists: Vec<PathBuf>,
    },

    /// Report the track count and total length of playlists
    #[command(visible_alias = "i")]
    Info {
        /// Playlists to inspect
        #[arg(value_name = "PLAYLIST", required = true)]
        playlists: Vec<PathBuf>,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}
