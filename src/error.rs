//! Errors raised around the compiler core: file access, configuration, and
//! compile diagnostics surfaced to the driver.

use std::path::PathBuf;

use thiserror::Error;

use crate::dsl::Diagnostics;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("cannot serialize playlist: {0}")]
    Serialize(serde_yaml::Error),

    #[error("compilation failed with {} error(s)", .0.len())]
    Compile(#[from] Diagnostics),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::SyntaxError;

    #[test]
    fn io_error_names_path() {
        let err = Error::Io {
            path: PathBuf::from("mix.pdl"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "cannot access 'mix.pdl': not found");
    }

    #[test]
    fn compile_error_counts_diagnostics() {
        let err = Error::from(Diagnostics::from(SyntaxError::new("unexpected '}'", 1, 1)));
        assert_eq!(err.to_string(), "compilation failed with 1 error(s)");
    }
}
