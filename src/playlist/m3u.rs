//! Extended M3U codec
//!
//! Grammar:
//!
//! ```text
//! M3U      ::= '#EXTM3U' ENTRY+
//! ENTRY    ::= INFO FILENAME
//! INFO     ::= '#EXTINF:' SECONDS ',' TITLE
//! SECONDS  ::= -?digits
//! TITLE    ::= .+
//! FILENAME ::= .+
//! ```
//!
//! Blank lines are ignored everywhere. Decoding is strict: structural
//! problems raise [`PlaylistError::Parse`] with a 1-based line number.

use std::fmt::Write;

use super::error::PlaylistError;
use super::track::{Track, UNKNOWN_SECS};

pub const EXTM3U: &str = "#EXTM3U";
pub const EXTINF: &str = "#EXTINF:";

enum Want {
    Header,
    Info,
    // Carries the pending entry and the info line's number for error
    // reporting against that line.
    Filename {
        secs: i64,
        title: String,
        info_line: usize,
    },
}

pub fn decode(text: &str) -> Result<Vec<Track>, PlaylistError> {
    let mut tracks = Vec::new();
    let mut state = Want::Header;

    for (lino, raw) in text.lines().enumerate() {
        let lino = lino + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        state = match state {
            Want::Header => {
                if line != EXTM3U {
                    return Err(PlaylistError::parse(
                        lino,
                        format!("invalid M3U header: {line:?}"),
                    ));
                }
                Want::Info
            }
            Want::Info => {
                let Some(rest) = line.strip_prefix(EXTINF) else {
                    return Err(PlaylistError::parse(
                        lino,
                        format!("invalid {EXTINF} line: {line:?}"),
                    ));
                };
                let Some((secs, title)) = rest.split_once(',') else {
                    return Err(PlaylistError::parse(
                        lino,
                        format!("invalid {EXTINF} line: {line:?}"),
                    ));
                };
                let secs: i64 = secs.trim().parse().map_err(|_| {
                    PlaylistError::parse(lino, format!("invalid {EXTINF} seconds: {line:?}"))
                })?;
                Want::Filename {
                    secs: if secs == 0 { UNKNOWN_SECS } else { secs },
                    title: title.trim().to_string(),
                    info_line: lino,
                }
            }
            Want::Filename {
                secs,
                title,
                info_line,
            } => {
                if line.starts_with(EXTINF) {
                    return Err(PlaylistError::parse(
                        lino,
                        format!("unexpected {EXTINF} line: {line:?}"),
                    ));
                }
                if title.is_empty() {
                    return Err(PlaylistError::parse(info_line, "missing title"));
                }
                tracks.push(Track::new(title, line, secs));
                Want::Info
            }
        };
    }
    // An info line with no following filename at end of input is dropped.
    Ok(tracks)
}

pub fn encode(tracks: &[Track]) -> String {
    let mut out = format!("{EXTM3U}\n\n");
    for track in tracks {
        // Writing to a String cannot fail.
        let _ = write!(
            out,
            "{EXTINF}{},{}\n{}\n\n",
            track.secs, track.title, track.filename
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "#EXTM3U\n\n\
        #EXTINF:-1,You and I\n/home/mark/music/Queen/05-You_and_I.mp3\n\n\
        #EXTINF:271,Hey Jude\n/home/mark/music/Beatles/Hey_Jude.mp3\n\n";

    #[test]
    fn test_decode_sample() {
        let tracks = decode(SAMPLE).unwrap();
        assert_eq!(
            tracks,
            vec![
                Track::new("You and I", "/home/mark/music/Queen/05-You_and_I.mp3", -1),
                Track::new("Hey Jude", "/home/mark/music/Beatles/Hey_Jude.mp3", 271),
            ]
        );
    }

    #[test]
    fn test_decode_normalizes_zero_seconds() {
        let tracks = decode("#EXTM3U\n#EXTINF:0,A\n/a.mp3\n").unwrap();
        assert_eq!(tracks[0].secs, UNKNOWN_SECS);
    }

    #[test]
    fn test_decode_rejects_bad_header() {
        let err = decode("#WRONG\n#EXTINF:1,A\n/a.mp3\n").unwrap_err();
        match err {
            PlaylistError::Parse { line, message } => {
                assert_eq!(line, 1);
                assert!(message.contains("invalid M3U header"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_decode_missing_title_points_at_info_line() {
        // The info line is line 3; the error must reference it, not the
        // filename line.
        let err = decode("#EXTM3U\n\n#EXTINF:-1,\n/x.mp3\n").unwrap_err();
        match err {
            PlaylistError::Parse { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("missing title"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_decode_rejects_consecutive_info_lines() {
        let err = decode("#EXTM3U\n#EXTINF:1,A\n#EXTINF:2,B\n/b.mp3\n").unwrap_err();
        match err {
            PlaylistError::Parse { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("unexpected"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_decode_rejects_missing_info_line() {
        let err = decode("#EXTM3U\n/a.mp3\n").unwrap_err();
        match err {
            PlaylistError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_decode_rejects_unparsable_seconds() {
        assert!(decode("#EXTM3U\n#EXTINF:abc,A\n/a.mp3\n").is_err());
    }

    #[test]
    fn test_round_trip_preserves_order_and_values() {
        let tracks = vec![
            Track::new("B Side", "/m/b.mp3", UNKNOWN_SECS),
            Track::new("A Side", "/m/a.mp3", 200),
        ];
        assert_eq!(decode(&encode(&tracks)).unwrap(), tracks);
    }

    #[test]
    fn test_encode_is_idempotent_through_decode() {
        let once = encode(&decode(SAMPLE).unwrap());
        let twice = encode(&decode(&once).unwrap());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_input_decodes_to_no_tracks() {
        assert!(decode("").unwrap().is_empty());
        assert!(decode("#EXTM3U\n").unwrap().is_empty());
    }
}
