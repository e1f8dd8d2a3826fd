//! Recursive-descent parser for PDL.
//!
//! Grammar:
//!
//! ```text
//! document      = playlist EOF ;
//! playlist      = "playlist" "{" { playlist_item } "}" ;
//! playlist_item = title_field | track ;
//! title_field   = "title" ":" value [ "," ] ;
//! track         = "track" "{" { field } "}" ;
//! field         = key ":" value [ "," ] ;
//! key           = "title" | "artist" | "source" | "url" | "duration" | "tags" ;
//! value         = STRING | INTEGER | TIME | IDENT | list ;
//! list          = "[" [ list_item { "," list_item } [ "," ] ] "]" ;
//! list_item     = STRING | INTEGER | TIME | IDENT | keyword ;
//! ```
//!
//! Inside a list, keywords are plain identifiers, so `tags: [track, live]` works.
//!
//! A playlist needs at least one track. The first violation aborts the parse.

use super::ast::*;
use super::error::SyntaxError;
use super::token::{Token, TokenKind};

const FIELD_KEYS: [&str; 6] = [
    "'title'",
    "'artist'",
    "'source'",
    "'url'",
    "'duration'",
    "'tags'",
];

const VALUE_START: [&str; 5] = ["string", "integer", "time", "identifier", "'['"];

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn parse(&mut self) -> Result<Document, SyntaxError> {
        let playlist = self.parse_playlist()?;
        if !self.is_at_end() {
            return Err(self.unexpected(["end of input"]));
        }
        Ok(Document { playlist })
    }

    fn parse_playlist(&mut self) -> Result<PlaylistBlock, SyntaxError> {
        let span = self.span();
        self.expect(TokenKind::Playlist)?;
        self.expect(TokenKind::LBrace)?;

        let mut items = Vec::new();
        let mut track_count = 0;
        loop {
            match &self.peek().kind {
                TokenKind::Title => {
                    items.push(PlaylistItem::Title(self.parse_field()?));
                }
                TokenKind::Track => {
                    items.push(PlaylistItem::Track(self.parse_track()?));
                    track_count += 1;
                }
                TokenKind::RBrace if track_count > 0 => {
                    self.advance();
                    break;
                }
                TokenKind::RBrace => {
                    let t = self.peek();
                    return Err(SyntaxError::new(
                        "playlist must contain at least one track",
                        t.line,
                        t.col,
                    )
                    .expecting(["'track'"]));
                }
                _ if track_count > 0 => return Err(self.unexpected(["'title'", "'track'", "'}'"])),
                _ => return Err(self.unexpected(["'title'", "'track'"])),
            }
        }

        Ok(PlaylistBlock { items, span })
    }

    fn parse_track(&mut self) -> Result<TrackBlock, SyntaxError> {
        let span = self.span();
        self.expect(TokenKind::Track)?;
        self.expect(TokenKind::LBrace)?;

        let mut fields = Vec::new();
        while !self.check(&TokenKind::RBrace) {
            if self.field_key().is_none() {
                let mut expected = FIELD_KEYS.to_vec();
                expected.push("'}'");
                return Err(self.unexpected(expected));
            }
            fields.push(self.parse_field()?);
        }
        self.expect(TokenKind::RBrace)?;

        Ok(TrackBlock { fields, span })
    }

    fn parse_field(&mut self) -> Result<Field, SyntaxError> {
        let span = self.span();
        let key = self
            .field_key()
            .ok_or_else(|| self.unexpected(FIELD_KEYS))?;
        self.advance();
        self.expect(TokenKind::Colon)?;
        let value = self.parse_value()?;
        if self.check(&TokenKind::Comma) {
            self.advance();
        }
        Ok(Field { key, value, span })
    }

    fn parse_value(&mut self) -> Result<Value, SyntaxError> {
        let value = match &self.peek().kind {
            TokenKind::Str(s) => Value::Str(s.clone()),
            TokenKind::Integer(n) => Value::Integer(*n),
            TokenKind::Time(s) => Value::Time(s.clone()),
            TokenKind::Ident(s) => Value::Ident(s.clone()),
            TokenKind::LBracket => return self.parse_list(),
            _ => return Err(self.unexpected(VALUE_START)),
        };
        self.advance();
        Ok(value)
    }

    fn parse_list(&mut self) -> Result<Value, SyntaxError> {
        self.expect(TokenKind::LBracket)?;
        let mut items = Vec::new();

        while !self.check(&TokenKind::RBracket) {
            if self.check(&TokenKind::LBracket) {
                return Err(self.unexpected(["string", "integer", "time", "identifier", "']'"]));
            }
            if let Some(word) = self.peek().kind.keyword_str() {
                items.push(Value::Ident(word.to_string()));
                self.advance();
            } else {
                items.push(self.parse_value()?);
            }
            if self.check(&TokenKind::Comma) {
                self.advance();
            } else if !self.check(&TokenKind::RBracket) {
                return Err(self.unexpected(["','", "']'"]));
            }
        }
        self.expect(TokenKind::RBracket)?;

        Ok(Value::List(items))
    }

    fn field_key(&self) -> Option<FieldKey> {
        match self.peek().kind {
            TokenKind::Title => Some(FieldKey::Title),
            TokenKind::Artist => Some(FieldKey::Artist),
            TokenKind::Source => Some(FieldKey::Source),
            TokenKind::Url => Some(FieldKey::Url),
            TokenKind::Duration => Some(FieldKey::Duration),
            TokenKind::Tags => Some(FieldKey::Tags),
            _ => None,
        }
    }

    // --- Helpers ---

    fn peek(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) -> &Token {
        let current = self.pos.min(self.tokens.len() - 1);
        if !self.is_at_end() {
            self.pos += 1;
        }
        &self.tokens[current]
    }

    fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    fn check(&self, kind: &TokenKind) -> bool {
        &self.peek().kind == kind
    }

    fn span(&self) -> Span {
        let t = self.peek();
        Span::new(t.line, t.col)
    }

    fn expect(&mut self, kind: TokenKind) -> Result<&Token, SyntaxError> {
        if self.check(&kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected([kind.describe()]))
        }
    }

    fn unexpected<I, S>(&self, expected: I) -> SyntaxError
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let t = self.peek();
        let message = if t.kind == TokenKind::Eof {
            "unexpected end of input".to_string()
        } else {
            format!("unexpected {}", t.kind)
        };
        SyntaxError::new(message, t.line, t.col).expecting(expected)
    }
}
