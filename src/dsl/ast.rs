//! Parse tree for PDL.
//!
//! Values are kept exactly as written; validation and conversion into the
//! [`crate::playlist`] model happen in the transformer.

use std::fmt;

/// A source position (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub line: usize,
    pub col: usize,
}

impl Span {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// A complete PDL document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub playlist: PlaylistBlock,
}

/// The `playlist { ... }` block.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistBlock {
    pub items: Vec<PlaylistItem>,
    pub span: Span,
}

/// An entry directly inside the playlist block, in source order.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaylistItem {
    Title(Field),
    Track(TrackBlock),
}

/// A `track { ... }` block.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackBlock {
    pub fields: Vec<Field>,
    pub span: Span,
}

/// A `key: value` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub key: FieldKey,
    pub value: Value,
    pub span: Span,
}

/// The field keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Title,
    Artist,
    Source,
    Url,
    Duration,
    Tags,
}

impl FieldKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Title => "title",
            FieldKey::Artist => "artist",
            FieldKey::Source => "source",
            FieldKey::Url => "url",
            FieldKey::Duration => "duration",
            FieldKey::Tags => "tags",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Integer(u64),
    /// An unquoted `mm:ss` literal, as written.
    Time(String),
    Ident(String),
    List(Vec<Value>),
}

impl Value {
    /// Short name of the value's kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Integer(_) => "integer",
            Value::Time(_) => "time",
            Value::Ident(_) => "identifier",
            Value::List(_) => "list",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{s:?}"),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Time(s) => f.write_str(s),
            Value::Ident(s) => f.write_str(s),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}
