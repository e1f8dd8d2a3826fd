//! Lexer for PDL.
//!
//! Converts source text into a stream of [`Token`]s. Positions are 1-based.

use super::error::SyntaxError;
use super::token::{Token, TokenKind};

pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    pub fn tokenize(&mut self) -> Result<Vec<Token>, SyntaxError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_trivia();

            if self.is_at_end() {
                tokens.push(Token {
                    kind: TokenKind::Eof,
                    line: self.line,
                    col: self.col,
                });
                break;
            }

            let ch = self.peek();
            let token = match ch {
                '{' => self.single_char(TokenKind::LBrace),
                '}' => self.single_char(TokenKind::RBrace),
                '[' => self.single_char(TokenKind::LBracket),
                ']' => self.single_char(TokenKind::RBracket),
                ':' => self.single_char(TokenKind::Colon),
                ',' => self.single_char(TokenKind::Comma),
                '"' => self.lex_string()?,
                '0'..='9' => self.lex_number()?,
                'a'..='z' | 'A'..='Z' | '_' => self.lex_ident_or_keyword(),
                _ => {
                    return Err(SyntaxError::new(
                        format!("unexpected character: '{ch}'"),
                        self.line,
                        self.col,
                    ));
                }
            };

            tokens.push(token);
        }

        Ok(tokens)
    }

    fn peek(&self) -> char {
        self.chars[self.pos]
    }

    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    fn advance(&mut self) -> char {
        let ch = self.chars[self.pos];
        self.pos += 1;
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        ch
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Skip whitespace and `//` or `#` line comments.
    fn skip_trivia(&mut self) {
        while !self.is_at_end() {
            match self.peek() {
                ' ' | '\t' | '\r' | '\n' => {
                    self.advance();
                }
                '#' => self.skip_line(),
                '/' if self.peek_next() == Some('/') => self.skip_line(),
                _ => break,
            }
        }
    }

    fn skip_line(&mut self) {
        while !self.is_at_end() && self.peek() != '\n' {
            self.advance();
        }
    }

    fn single_char(&mut self, kind: TokenKind) -> Token {
        let line = self.line;
        let col = self.col;
        self.advance();
        Token { kind, line, col }
    }

    fn lex_string(&mut self) -> Result<Token, SyntaxError> {
        let line = self.line;
        let col = self.col;
        self.advance(); // consume opening '"'
        let mut s = String::new();

        loop {
            if self.is_at_end() {
                return Err(SyntaxError::new("unterminated string literal", line, col)
                    .expecting(["'\"'"]));
            }
            match self.peek() {
                '"' => {
                    self.advance();
                    break;
                }
                '\n' => {
                    return Err(SyntaxError::new(
                        "newline in string literal",
                        self.line,
                        self.col,
                    )
                    .expecting(["'\"'"]));
                }
                '\\' => {
                    let esc_line = self.line;
                    let esc_col = self.col;
                    self.advance();
                    if self.is_at_end() {
                        return Err(SyntaxError::new("unterminated string literal", line, col));
                    }
                    let escaped = match self.advance() {
                        '"' => '"',
                        '\\' => '\\',
                        'n' => '\n',
                        't' => '\t',
                        other => {
                            return Err(SyntaxError::new(
                                format!("unknown escape sequence: '\\{other}'"),
                                esc_line,
                                esc_col,
                            ));
                        }
                    };
                    s.push(escaped);
                }
                _ => s.push(self.advance()),
            }
        }

        Ok(Token {
            kind: TokenKind::Str(s),
            line,
            col,
        })
    }

    /// Lex an integer, or a `mm:ss` time literal when digits follow a colon directly.
    fn lex_number(&mut self) -> Result<Token, SyntaxError> {
        let line = self.line;
        let col = self.col;
        let whole = self.digits();

        if !self.is_at_end()
            && self.peek() == ':'
            && self.peek_next().is_some_and(|c| c.is_ascii_digit())
        {
            self.advance(); // consume ':'
            let frac = self.digits();
            return Ok(Token {
                kind: TokenKind::Time(format!("{whole}:{frac}")),
                line,
                col,
            });
        }

        if !self.is_at_end() && self.peek().is_ascii_alphabetic() {
            return Err(SyntaxError::new(
                format!("invalid number literal: '{whole}{}'", self.peek()),
                line,
                col,
            ));
        }

        Ok(Token {
            kind: TokenKind::Integer(parse_u64(&whole, line, col)?),
            line,
            col,
        })
    }

    fn digits(&mut self) -> String {
        let mut s = String::new();
        while !self.is_at_end() && self.peek().is_ascii_digit() {
            s.push(self.advance());
        }
        s
    }

    fn lex_ident_or_keyword(&mut self) -> Token {
        let line = self.line;
        let col = self.col;
        let mut s = String::new();

        while !self.is_at_end()
            && (self.peek().is_ascii_alphanumeric() || self.peek() == '_' || self.peek() == '-')
        {
            s.push(self.advance());
        }

        let kind = TokenKind::keyword(&s).unwrap_or(TokenKind::Ident(s));
        Token { kind, line, col }
    }
}

fn parse_u64(digits: &str, line: usize, col: usize) -> Result<u64, SyntaxError> {
    digits
        .parse()
        .map_err(|_| SyntaxError::new(format!("number out of range: {digits}"), line, col))
}
