//! PDL compiler — source text → tokens → parse tree → Playlist → HTML.

pub mod ast;
pub mod duration;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod source;
pub mod token;
pub mod transform;

pub use ast::Document;
pub use error::{Diagnostics, SemanticError, SyntaxError};

use log::{debug, info};

use crate::html::{self, HtmlOptions};
use crate::playlist::Playlist;
use lexer::Lexer;
use parser::Parser;

/// The PDL compiler.
///
/// Each call is independent; no state is carried between documents.
pub struct Compiler;

impl Compiler {
    /// Parse PDL source into a parse tree.
    pub fn parse(source: &str) -> Result<Document, SyntaxError> {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize()?;
        debug!("lexed {} tokens", tokens.len());
        let mut parser = Parser::new(tokens);
        parser.parse()
    }

    /// Validate a parse tree and build the playlist, collecting every error.
    pub fn transform(document: &Document) -> Result<Playlist, Vec<SemanticError>> {
        transform::transform(document)
    }

    /// Parse and validate PDL source.
    pub fn check(source: &str) -> Result<Playlist, Diagnostics> {
        let document = Self::parse(source)?;
        debug!("syntax analysis complete");
        let playlist = Self::transform(&document)?;
        debug!("semantic analysis complete");
        Ok(playlist)
    }

    /// Compile PDL source into an HTML page with default options.
    pub fn compile(source: &str) -> Result<String, Diagnostics> {
        Self::compile_with(source, &HtmlOptions::default())
    }

    /// Compile PDL source into an HTML page.
    pub fn compile_with(source: &str, options: &HtmlOptions) -> Result<String, Diagnostics> {
        let playlist = Self::check(source)?;
        info!(
            "compiled playlist '{}' with {} track(s)",
            playlist.title,
            playlist.tracks.len()
        );
        Ok(html::generate_with(&playlist, options))
    }
}
