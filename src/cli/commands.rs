//! CLI command handlers

use anyhow::{Context, Result, anyhow};
use clap::CommandFactory;
use clap_complete::generate;
use std::io;
use std::path::{Path, PathBuf};

use tracklist::config::Config;
use tracklist::playlist::{Format, Playlist, PlaylistError, builder, is_playlist};

fn parse_format(name: &str) -> Result<Format> {
    Format::from_name(name)
        .ok_or_else(|| anyhow!("unknown playlist format {name:?} (expected m3u, pls or xspf)"))
}

/// Handle the `build` command
pub fn build(first: String, folder: Option<String>, config: &Config) -> Result<()> {
    let (format, folder) = match folder {
        Some(folder) => (parse_format(&first)?, folder),
        None => (config.default_format(), first),
    };
    let folder = folder.trim_end_matches(['/', '\\']);

    let playlist = builder::build(Path::new(folder), format, config);
    playlist
        .save()
        .with_context(|| format!("failed to write {}", playlist.filename().display()))?;
    println!("wrote {}", playlist.filename().display());
    Ok(())
}

/// Handle the `convert` command
///
/// Inputs that are not playlists, or already match the target format, are
/// skipped with a message. A failure on one input never stops the batch.
pub fn convert(format_name: &str, playlists: &[PathBuf]) -> Result<()> {
    let format = parse_format(format_name)?;

    for path in playlists {
        match Format::from_path(path) {
            None => println!("ignoring {}: unknown format", path.display()),
            Some(current) if current == format => {
                println!("skipping {}: already in target format", path.display());
            }
            Some(_) => match convert_one(path, format) {
                Ok(target) => println!("wrote {}", target.display()),
                Err(err) => eprintln!("can't convert {}: {err}", path.display()),
            },
        }
    }
    Ok(())
}

fn convert_one(path: &Path, format: Format) -> Result<PathBuf, PlaylistError> {
    let mut playlist = Playlist::new(path);
    playlist.load()?;
    let target = path.with_extension(format.extension());
    playlist.save_as(&target)?;
    Ok(target)
}

/// Handle the `info` command
///
/// Non-playlist inputs are skipped; parse and I/O failures are reported
/// on stderr so one bad file does not abort the batch.
pub fn info(playlists: &[PathBuf]) -> Result<()> {
    for path in playlists {
        if !is_playlist(path) {
            continue;
        }
        let mut playlist = Playlist::new(path);
        if let Err(err) = playlist.load() {
            eprintln!("can't read {}: {err}", path.display());
            continue;
        }
        match playlist.iter().find(|t| !Path::new(&t.filename).is_file()) {
            Some(track) => println!(
                "playlist {} has missing track: {}",
                path.display(),
                track.filename
            ),
            None => println!(
                "{:>5} tracks taking {}: {}",
                group_thousands(playlist.len()),
                playlist.humanized_length(),
                path.display()
            ),
        }
    }
    Ok(())
}

/// Comma-grouped decimal rendering, e.g. `1234` becomes `"1,234"`.
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Handle the `completion` command
pub fn completion(shell: clap_complete::Shell) {
    let mut cmd = super::Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(42), "42");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234), "1,234");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_group_thousands_pads_to_column_width() {
        assert_eq!(format!("{:>5}", group_thousands(3)), "    3");
        assert_eq!(format!("{:>5}", group_thousands(1234)), "1,234");
    }
}
