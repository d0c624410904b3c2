//! XSPF codec
//!
//! Encoding serializes a serde-mapped document tree with quick-xml. Decoding
//! walks the document with a namespace-resolving reader, so tracks are honored
//! whether the XSPF namespace is the default one or bound to a prefix; a
//! document whose tracks live in a foreign namespace decodes to no tracks
//! rather than an error. Locations carry a literal `file://` scheme on disk,
//! durations are stored in milliseconds and only written when known.

use quick_xml::NsReader;
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use serde::Serialize;

use super::error::PlaylistError;
use super::track::{Track, UNKNOWN_SECS};

pub const NAMESPACE: &str = "http://xspf.org/ns/0/";
pub const FILE_SCHEME: &str = "file://";

const XML_DECL: &str = "<?xml version='1.0' encoding='utf-8'?>\n";

#[derive(Debug, Serialize)]
#[serde(rename = "playlist")]
struct XspfPlaylist {
    #[serde(rename = "@version")]
    version: String,
    #[serde(rename = "@xmlns")]
    xmlns: String,
    #[serde(rename = "trackList")]
    track_list: XspfTrackList,
}

#[derive(Debug, Serialize)]
struct XspfTrackList {
    #[serde(rename = "track")]
    tracks: Vec<XspfTrack>,
}

#[derive(Debug, Serialize)]
struct XspfTrack {
    location: String,
    title: String,
    /// Milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<i64>,
}

#[derive(Clone, Copy)]
enum Field {
    Location,
    Title,
    Duration,
}

fn in_xspf(resolution: &ResolveResult) -> bool {
    matches!(resolution, ResolveResult::Bound(Namespace(ns)) if *ns == NAMESPACE.as_bytes())
}

pub fn decode(text: &str) -> Result<Vec<Track>, PlaylistError> {
    let mut reader = NsReader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut tracks = Vec::new();
    let mut in_track = false;
    let mut field: Option<Field> = None;
    let mut location: Option<String> = None;
    let mut title: Option<String> = None;
    let mut secs: Option<i64> = None;

    loop {
        let (resolution, event) = reader.read_resolved_event()?;
        match event {
            Event::Start(start) => {
                if !in_xspf(&resolution) {
                    field = None;
                    continue;
                }
                match start.local_name().as_ref() {
                    b"track" => {
                        in_track = true;
                        field = None;
                        location = None;
                        title = None;
                        secs = None;
                    }
                    b"location" if in_track => field = Some(Field::Location),
                    b"title" if in_track => field = Some(Field::Title),
                    b"duration" if in_track => field = Some(Field::Duration),
                    _ => field = None,
                }
            }
            Event::Text(content) => {
                if in_track && field.is_some() {
                    let value = content
                        .decode()
                        .map_err(quick_xml::Error::Encoding)?
                        .into_owned();
                    match field {
                        Some(Field::Location) => location = Some(value),
                        Some(Field::Title) => title = Some(value),
                        Some(Field::Duration) => {
                            secs = value.trim().parse::<i64>().ok().map(|ms| ms / 1000);
                        }
                        None => {}
                    }
                }
            }
            Event::End(end) => {
                if in_xspf(&resolution) && end.local_name().as_ref() == b"track" {
                    in_track = false;
                    if let (Some(location), Some(title)) = (location.take(), title.take()) {
                        let filename = location.strip_prefix(FILE_SCHEME).unwrap_or(&location);
                        if !filename.is_empty() && !title.is_empty() {
                            tracks.push(Track::new(
                                title,
                                filename,
                                secs.take().unwrap_or(UNKNOWN_SECS),
                            ));
                        }
                    }
                }
                field = None;
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(tracks)
}

pub fn encode(tracks: &[Track]) -> Result<String, PlaylistError> {
    let doc = XspfPlaylist {
        version: "1".to_string(),
        xmlns: NAMESPACE.to_string(),
        track_list: XspfTrackList {
            tracks: tracks
                .iter()
                .map(|track| XspfTrack {
                    location: format!("{FILE_SCHEME}{}", track.filename),
                    title: track.title.clone(),
                    duration: track.has_duration().then(|| track.secs * 1000),
                })
                .collect(),
        },
    };
    let body = quick_xml::se::to_string(&doc)?;
    Ok(format!("{XML_DECL}{body}"))
}
