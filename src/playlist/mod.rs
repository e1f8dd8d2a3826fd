//! Playlist data model — the validated output of the transformer.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// A validated playlist. Always holds at least one track.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Playlist {
    pub title: String,
    pub tracks: Vec<Track>,
}

/// One playable entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Track {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    pub source: Source,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Duration>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
}

/// Where a track can be played from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// An `http` or `https` URL.
    Url(String),
    /// A path relative to the generated page.
    Path(String),
}

impl Source {
    /// The reference as written, for use in `href`/`src` attributes.
    pub fn as_str(&self) -> &str {
        match self {
            Source::Url(s) | Source::Path(s) => s,
        }
    }
}

/// A track length in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub struct Duration(u64);

impl Duration {
    pub fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }
}

/// Canonical `M:SS` form.
impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl From<Duration> for String {
    fn from(d: Duration) -> Self {
        d.to_string()
    }
}
