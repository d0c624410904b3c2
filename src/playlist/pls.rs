//! PLS codec
//!
//! Grammar:
//!
//! ```text
//! PLS      ::= '[playlist]' ENTRY+ NUMBEROF? VERSION?
//! ENTRY    ::= 'File' digits '=' FILENAME
//!              'Title' digits '=' TITLE
//!              'Length' digits '=' -?digits
//! NUMBEROF ::= 'NumberOfEntries' '=' digits
//! VERSION  ::= 'Version' '=' digits
//! ```
//!
//! Keys are order-independent and grouped by their trailing index; tracks
//! are assembled in ascending index order. Decoding is deliberately
//! tolerant: lines that match nothing are skipped rather than rejected, so
//! partially-written or foreign files still yield their complete entries.
//! (The M3U codec is strict; the asymmetry is long-standing observable
//! behavior.)

use std::collections::BTreeMap;
use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::error::PlaylistError;
use super::track::{Track, UNKNOWN_SECS};

pub const HEADER: &str = "[playlist]";
const NUM_ENTRIES: &str = "NumberOfEntries";
const VERSION: &str = "Version";

static ITEM_RX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(File|Title|Length)(\d+)|NumberOfEntries|Version)\s*=\s*(.*)$")
        .expect("hard-coded PLS key pattern")
});

pub fn decode(text: &str) -> Result<Vec<Track>, PlaylistError> {
    let mut filenames: BTreeMap<u64, String> = BTreeMap::new();
    let mut titles: BTreeMap<u64, String> = BTreeMap::new();
    let mut lengths: BTreeMap<u64, i64> = BTreeMap::new();

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() || line == HEADER {
            continue;
        }
        let Some(caps) = ITEM_RX.captures(line) else {
            debug!("skipping unrecognized PLS line: {line:?}");
            continue;
        };
        let (Some(key), Some(index)) = (caps.get(1), caps.get(2)) else {
            continue; // NumberOfEntries / Version summaries
        };
        let Ok(index) = index.as_str().parse::<u64>() else {
            continue;
        };
        let value = caps.get(3).map_or("", |m| m.as_str());
        match key.as_str() {
            "File" => {
                filenames.insert(index, value.to_string());
            }
            "Title" => {
                titles.insert(index, value.to_string());
            }
            "Length" => {
                let secs = value.parse::<i64>().unwrap_or(UNKNOWN_SECS);
                lengths.insert(index, if secs == 0 { UNKNOWN_SECS } else { secs });
            }
            _ => {}
        }
    }

    // Ascending index order, not file order. An index missing either its
    // filename or its title is dropped without complaint.
    let mut tracks = Vec::with_capacity(filenames.len());
    for (index, filename) in &filenames {
        let Some(title) = titles.get(index) else {
            continue;
        };
        let secs = lengths.get(index).copied().unwrap_or(UNKNOWN_SECS);
        if !filename.is_empty() && !title.is_empty() {
            tracks.push(Track::new(title, filename, secs));
        }
    }
    Ok(tracks)
}

pub fn encode(tracks: &[Track]) -> String {
    let mut out = format!("{HEADER}\n\n");
    for (i, track) in tracks.iter().enumerate() {
        let i = i + 1;
        let _ = write!(
            out,
            "File{i}={}\nTitle{i}={}\nLength{i}={}\n\n",
            track.filename, track.title, track.secs
        );
    }
    let _ = write!(out, "{NUM_ENTRIES}={}\n{VERSION}=2\n", tracks.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "[playlist]\n\n\
        File1=/home/mark/music/Amelie/01-J_y_suis_jamais_all.mp3\n\
        Title1=J'y suis jamais allé\nLength1=-1\n\n\
        NumberOfEntries=1\nVersion=2\n";

    #[test]
    fn test_decode_sample() {
        let tracks = decode(SAMPLE).unwrap();
        assert_eq!(
            tracks,
            vec![Track::new(
                "J'y suis jamais allé",
                "/home/mark/music/Amelie/01-J_y_suis_jamais_all.mp3",
                -1
            )]
        );
    }

    #[test]
    fn test_decode_drops_incomplete_index_groups() {
        let text = "[playlist]\nFile1=/a.mp3\nTitle1=A\nLength1=10\nFile2=/b.mp3\n";
        let tracks = decode(text).unwrap();
        assert_eq!(tracks, vec![Track::new("A", "/a.mp3", 10)]);
    }

    #[test]
    fn test_decode_skips_garbage_lines() {
        let text = "[playlist]\nnot a key at all\nFile1=/a.mp3\n???\nTitle1=A\n";
        let tracks = decode(text).unwrap();
        assert_eq!(tracks.len(), 1);
    }

    #[test]
    fn test_decode_assembles_in_ascending_index_order() {
        let text = "File2=/b.mp3\nTitle2=B\nFile1=/a.mp3\nTitle1=A\nFile10=/j.mp3\nTitle10=J\n";
        let tracks = decode(text).unwrap();
        let titles: Vec<&str> = tracks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "J"]);
    }

    #[test]
    fn test_decode_normalizes_lengths() {
        let text = "File1=/a.mp3\nTitle1=A\nLength1=0\n\
                    File2=/b.mp3\nTitle2=B\nLength2=garbage\n\
                    File3=/c.mp3\nTitle3=C\n";
        let tracks = decode(text).unwrap();
        assert_eq!(tracks[0].secs, UNKNOWN_SECS);
        assert_eq!(tracks[1].secs, UNKNOWN_SECS);
        assert_eq!(tracks[2].secs, UNKNOWN_SECS);
    }

    #[test]
    fn test_decode_tolerates_spaced_assignments() {
        let tracks = decode("File1 = /a.mp3\nTitle1 =A\nLength1= 5\n").unwrap();
        assert_eq!(tracks, vec![Track::new("A", "/a.mp3", 5)]);
    }

    #[test]
    fn test_encode_sample() {
        let tracks = vec![Track::new("A", "/a.mp3", 10), Track::new("B", "/b.mp3", -1)];
        assert_eq!(
            encode(&tracks),
            "[playlist]\n\n\
             File1=/a.mp3\nTitle1=A\nLength1=10\n\n\
             File2=/b.mp3\nTitle2=B\nLength2=-1\n\n\
             NumberOfEntries=2\nVersion=2\n"
        );
    }

    #[test]
    fn test_round_trip_of_sequential_writes() {
        let tracks = vec![
            Track::new("First", "/m/1.mp3", 90),
            Track::new("Second", "/m/2.mp3", UNKNOWN_SECS),
            Track::new("Third", "/m/3.mp3", 3601),
        ];
        assert_eq!(decode(&encode(&tracks)).unwrap(), tracks);
    }

    #[test]
    fn test_encode_is_idempotent_through_decode() {
        let once = encode(&decode(SAMPLE).unwrap());
        let twice = encode(&decode(&once).unwrap());
        assert_eq!(once, twice);
    }
}
