//! Token types for the PDL lexer.

use std::fmt;

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub col: usize,
}

/// The kind of token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Keywords
    Playlist,
    Track,
    Title,
    Artist,
    Source,
    Url,
    Duration,
    Tags,

    // Literals
    Ident(String),
    Str(String),
    Integer(u64),
    /// `mm:ss` as written; checked by the transformer.
    Time(String),

    // Delimiters
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Colon,
    Comma,

    // Special
    Eof,
}

impl TokenKind {
    /// Map a bare word to its keyword, if it is one.
    pub fn keyword(word: &str) -> Option<TokenKind> {
        let kind = match word {
            "playlist" => TokenKind::Playlist,
            "track" => TokenKind::Track,
            "title" => TokenKind::Title,
            "artist" => TokenKind::Artist,
            "source" => TokenKind::Source,
            "url" => TokenKind::Url,
            "duration" => TokenKind::Duration,
            "tags" => TokenKind::Tags,
            _ => return None,
        };
        Some(kind)
    }

    /// The bare word of a keyword token.
    pub fn keyword_str(&self) -> Option<&'static str> {
        let word = match self {
            TokenKind::Playlist => "playlist",
            TokenKind::Track => "track",
            TokenKind::Title => "title",
            TokenKind::Artist => "artist",
            TokenKind::Source => "source",
            TokenKind::Url => "url",
            TokenKind::Duration => "duration",
            TokenKind::Tags => "tags",
            _ => return None,
        };
        Some(word)
    }

    /// How the token is named in "expected ..." diagnostics.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Playlist => "'playlist'".into(),
            TokenKind::Track => "'track'".into(),
            TokenKind::Title => "'title'".into(),
            TokenKind::Artist => "'artist'".into(),
            TokenKind::Source => "'source'".into(),
            TokenKind::Url => "'url'".into(),
            TokenKind::Duration => "'duration'".into(),
            TokenKind::Tags => "'tags'".into(),
            TokenKind::Ident(_) => "identifier".into(),
            TokenKind::Str(_) => "string".into(),
            TokenKind::Integer(_) => "integer".into(),
            TokenKind::Time(_) => "time".into(),
            TokenKind::LBrace => "'{'".into(),
            TokenKind::RBrace => "'}'".into(),
            TokenKind::LBracket => "'['".into(),
            TokenKind::RBracket => "']'".into(),
            TokenKind::Colon => "':'".into(),
            TokenKind::Comma => "','".into(),
            TokenKind::Eof => "end of input".into(),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ident(s) => write!(f, "identifier '{s}'"),
            TokenKind::Str(s) => write!(f, "string \"{s}\""),
            TokenKind::Integer(n) => write!(f, "integer {n}"),
            TokenKind::Time(s) => write!(f, "time {s}"),
            other => f.write_str(&other.describe()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_recognized() {
        assert_eq!(TokenKind::keyword("track"), Some(TokenKind::Track));
        assert_eq!(TokenKind::keyword("url"), Some(TokenKind::Url));
        assert_eq!(TokenKind::keyword("Track"), None);
        assert_eq!(TokenKind::keyword("genre"), None);
    }

    #[test]
    fn keyword_words_round_trip() {
        for word in ["playlist", "track", "title", "artist", "source", "url", "duration", "tags"] {
            let kind = TokenKind::keyword(word).unwrap();
            assert_eq!(kind.keyword_str(), Some(word));
        }
        assert_eq!(TokenKind::Ident("rock".into()).keyword_str(), None);
    }

    #[test]
    fn display_includes_literal_value() {
        assert_eq!(TokenKind::Integer(7).to_string(), "integer 7");
        assert_eq!(TokenKind::Time("3:05".into()).to_string(), "time 3:05");
        assert_eq!(TokenKind::RBrace.to_string(), "'}'");
    }
}
