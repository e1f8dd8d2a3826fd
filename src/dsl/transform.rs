//! Semantic analysis — validates the parse tree and builds a [`Playlist`].
//!
//! Every track and every field is checked even after an error is found,
//! so one run reports all problems in the document. The error list belongs
//! to a single [`transform`] call.

use std::collections::{BTreeSet, HashMap};

use log::debug;

use crate::playlist::{Playlist, Track};

use super::ast::*;
use super::duration::parse_duration;
use super::error::SemanticError;
use super::source::parse_source;

/// Validate a parsed document and assemble the playlist.
///
/// Returns every semantic error found, in document order, if any.
pub fn transform(document: &Document) -> Result<Playlist, Vec<SemanticError>> {
    Transformer::new().run(document)
}

struct Transformer {
    errors: Vec<SemanticError>,
    /// (title, artist) → index of the first track that used it.
    seen: HashMap<(String, Option<String>), usize>,
}

/// The fields of one track block, after duplicate detection.
#[derive(Default)]
struct TrackFields<'a> {
    title: Option<&'a Field>,
    artist: Option<&'a Field>,
    source: Option<&'a Field>,
    duration: Option<&'a Field>,
    tags: Option<&'a Field>,
}

impl Transformer {
    fn new() -> Self {
        Self {
            errors: Vec::new(),
            seen: HashMap::new(),
        }
    }

    fn run(mut self, document: &Document) -> Result<Playlist, Vec<SemanticError>> {
        let block = &document.playlist;
        let mut title_field: Option<&Field> = None;
        let mut tracks = Vec::new();
        let mut track_count = 0;

        for item in &block.items {
            match item {
                PlaylistItem::Title(field) => {
                    if title_field.is_some() {
                        self.duplicate_field(None, field);
                    } else {
                        title_field = Some(field);
                    }
                }
                PlaylistItem::Track(track) => {
                    track_count += 1;
                    if let Some(t) = self.visit_track(track_count, track) {
                        tracks.push(t);
                    }
                }
            }
        }

        let title = match title_field {
            Some(field) => self.required_text(None, field, "title"),
            None => {
                self.errors.push(SemanticError::playlist(
                    "missing playlist title",
                    block.span.line,
                    block.span.col,
                ));
                None
            }
        };

        if track_count == 0 {
            self.errors.push(SemanticError::playlist(
                "playlist must contain at least one track",
                block.span.line,
                block.span.col,
            ));
        }

        if !self.errors.is_empty() {
            debug!("transform found {} semantic error(s)", self.errors.len());
            return Err(self.errors);
        }

        match title {
            Some(title) => Ok(Playlist { title, tracks }),
            None => Err(self.errors),
        }
    }

    fn visit_track(&mut self, index: usize, block: &TrackBlock) -> Option<Track> {
        let errors_before = self.errors.len();
        let fields = self.collect_fields(index, block);

        let title = match fields.title {
            Some(field) => self.required_text(Some(index), field, "title"),
            None => {
                self.track_error(index, block.span, "missing title");
                None
            }
        };

        let artist = fields
            .artist
            .and_then(|field| self.required_text(Some(index), field, "artist"));

        let source = match fields.source {
            Some(field) => {
                let parsed = match &field.value {
                    Value::Str(s) => parse_source(s),
                    _ => None,
                };
                if parsed.is_none() {
                    self.track_error(
                        index,
                        field.span,
                        format!("invalid url/source: {}", field.value),
                    );
                }
                parsed
            }
            None => {
                self.track_error(index, block.span, "missing url/source");
                None
            }
        };

        let duration = fields.duration.and_then(|field| {
            let parsed = parse_duration(&field.value);
            if parsed.is_none() {
                self.track_error(
                    index,
                    field.span,
                    format!("invalid duration: {}", field.value),
                );
            }
            parsed
        });

        let tags = match fields.tags {
            Some(field) => self.visit_tags(index, field),
            None => BTreeSet::new(),
        };

        if let Some(title) = &title {
            self.check_unique(index, block.span, title, artist.as_deref());
        }

        if self.errors.len() > errors_before {
            debug!("track {index} rejected");
            return None;
        }

        debug!("track {index} accepted");
        Some(Track {
            title: title?,
            artist,
            source: source?,
            duration,
            tags,
        })
    }

    /// Keep the first occurrence of each key; `source` and `url` share a slot.
    fn collect_fields<'a>(&mut self, index: usize, block: &'a TrackBlock) -> TrackFields<'a> {
        let mut fields = TrackFields::default();
        for field in &block.fields {
            let slot = match field.key {
                FieldKey::Title => &mut fields.title,
                FieldKey::Artist => &mut fields.artist,
                FieldKey::Source | FieldKey::Url => &mut fields.source,
                FieldKey::Duration => &mut fields.duration,
                FieldKey::Tags => &mut fields.tags,
            };
            if slot.is_some() {
                self.duplicate_field(Some(index), field);
            } else {
                *slot = Some(field);
            }
        }
        fields
    }

    fn visit_tags(&mut self, index: usize, field: &Field) -> BTreeSet<String> {
        let values = match &field.value {
            Value::List(items) => items.as_slice(),
            single => std::slice::from_ref(single),
        };

        let mut tags = BTreeSet::new();
        let mut invalid = Vec::new();
        for value in values {
            match value {
                Value::Str(s) | Value::Ident(s) if !s.trim().is_empty() => {
                    tags.insert(s.trim().to_string());
                }
                other => invalid.push(other.to_string()),
            }
        }

        if !invalid.is_empty() {
            self.track_error(
                index,
                field.span,
                format!("invalid tag: {}", invalid.join(", ")),
            );
        }
        tags
    }

    fn check_unique(&mut self, index: usize, span: Span, title: &str, artist: Option<&str>) {
        let key = (title.to_string(), artist.map(str::to_string));
        if let Some(&first) = self.seen.get(&key) {
            let who = match artist {
                Some(a) => format!("'{title}' by '{a}'"),
                None => format!("'{title}'"),
            };
            let message = format!("duplicate track {who} (first defined as track {first})");
            self.track_error(index, span, message);
        } else {
            self.seen.insert(key, index);
        }
    }

    /// A string field that must not be blank. Returns the trimmed text.
    fn required_text(&mut self, track: Option<usize>, field: &Field, what: &str) -> Option<String> {
        match &field.value {
            Value::Str(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Str(_) => {
                self.push(track, field.span, format!("empty {what}"));
                None
            }
            other => {
                self.push(
                    track,
                    field.span,
                    format!("invalid {what}: expected a string, found {}", other.kind_name()),
                );
                None
            }
        }
    }

    fn duplicate_field(&mut self, track: Option<usize>, field: &Field) {
        self.push(
            track,
            field.span,
            format!("duplicate field '{}'", field.key),
        );
    }

    fn track_error(&mut self, index: usize, span: Span, message: impl Into<String>) {
        self.push(Some(index), span, message);
    }

    fn push(&mut self, track: Option<usize>, span: Span, message: impl Into<String>) {
        let err = match track {
            Some(n) => SemanticError::track(n, message, span.line, span.col),
            None => SemanticError::playlist(message, span.line, span.col),
        };
        self.errors.push(err);
    }
}
