//! pdlc — compiles Playlist Definition Language documents into static HTML pages.
//!
//! ```
//! let html = pdlc::compile(r#"
//! playlist {
//!   title: "Morning"
//!   track { title: "Intro" source: "music/intro.mp3" duration: 1:30 }
//! }
//! "#).unwrap();
//! assert!(html.contains("<h1>Morning</h1>"));
//! ```

pub mod config;
pub mod dsl;
pub mod error;
pub mod html;
pub mod output;
pub mod playlist;

pub use dsl::{Compiler, Diagnostics, SemanticError, SyntaxError};
pub use error::{Error, Result};
pub use playlist::{Playlist, Track};

/// Compile PDL source into an HTML page, or return every diagnostic found.
pub fn compile(source: &str) -> std::result::Result<String, Diagnostics> {
    Compiler::compile(source)
}
