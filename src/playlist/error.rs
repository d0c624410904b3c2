//! Playlist engine error taxonomy

use thiserror::Error;

/// Errors raised by playlist loading, saving and parsing.
#[derive(Debug, Error)]
pub enum PlaylistError {
    /// The filename's extension maps to none of the known formats.
    #[error("can't load or save unrecognized playlist format: {0}")]
    UnrecognizedFormat(String),

    /// Structurally invalid content in a line-oriented format.
    ///
    /// `line` is 1-based and points at the offending line (or, for a
    /// missing title, at the info line that introduced the entry).
    #[error("{line}: {message}")]
    Parse { line: usize, message: String },

    /// The XSPF document could not be parsed.
    #[error("invalid XSPF document: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The XSPF document could not be serialized.
    #[error("can't encode XSPF document: {0}")]
    XmlEncode(#[from] quick_xml::se::SeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PlaylistError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
