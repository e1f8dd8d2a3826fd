//! Diagnostic types for the PDL compiler.

use std::fmt;

/// A fatal syntax error. Parsing stops at the first one.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxError {
    pub message: String,
    pub line: usize,
    pub col: usize,
    /// Tokens that would have been accepted at this position.
    pub expected: Vec<String>,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            message: message.into(),
            line,
            col,
            expected: Vec::new(),
        }
    }

    pub fn expecting<I, S>(mut self, expected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expected = expected.into_iter().map(Into::into).collect();
        self
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}] syntax error: {}", self.line, self.col, self.message)?;
        if !self.expected.is_empty() {
            write!(f, " (expected {})", self.expected.join(", "))?;
        }
        Ok(())
    }
}

impl std::error::Error for SyntaxError {}

/// A non-fatal semantic error. The transformer collects all of them.
#[derive(Debug, Clone, PartialEq)]
pub struct SemanticError {
    pub message: String,
    pub line: usize,
    pub col: usize,
    /// 1-based index of the offending track; `None` for playlist-level errors.
    pub track: Option<usize>,
}

impl SemanticError {
    pub fn playlist(message: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            message: message.into(),
            line,
            col,
            track: None,
        }
    }

    pub fn track(track: usize, message: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            message: message.into(),
            line,
            col,
            track: Some(track),
        }
    }
}

impl fmt::Display for SemanticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.track {
            Some(n) => write!(
                f,
                "[{}:{}] semantic error: track {}: {}",
                self.line, self.col, n, self.message
            ),
            None => write!(
                f,
                "[{}:{}] semantic error: playlist: {}",
                self.line, self.col, self.message
            ),
        }
    }
}

impl std::error::Error for SemanticError {}

/// Why a compilation produced no HTML.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostics {
    Syntax(SyntaxError),
    Semantic(Vec<SemanticError>),
}

impl Diagnostics {
    /// Human-readable diagnostics, in the order they were found.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Diagnostics::Syntax(err) => vec![err.to_string()],
            Diagnostics::Semantic(errors) => errors.iter().map(ToString::to_string).collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Diagnostics::Syntax(_) => 1,
            Diagnostics::Semantic(errors) => errors.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<SyntaxError> for Diagnostics {
    fn from(err: SyntaxError) -> Self {
        Diagnostics::Syntax(err)
    }
}

impl From<Vec<SemanticError>> for Diagnostics {
    fn from(errors: Vec<SemanticError>) -> Self {
        Diagnostics::Semantic(errors)
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join("\n"))
    }
}

impl std::error::Error for Diagnostics {}
