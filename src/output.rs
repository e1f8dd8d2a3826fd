//! Output file naming.

use std::path::{Path, PathBuf};

/// Fallback stem when neither a name nor a usable input stem is given.
pub const DEFAULT_STEM: &str = "playlist";

/// Where to write the page for `input`.
///
/// The stem comes from `name` if given, otherwise from the input file; any
/// extension is replaced by `.html`. Relative results land in `out_dir`.
pub fn output_path(input: &Path, name: Option<&str>, out_dir: Option<&Path>) -> PathBuf {
    let base = match name {
        Some(n) => PathBuf::from(n),
        None => input
            .file_stem()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STEM)),
    };
    let file = base.with_extension("html");
    match out_dir {
        Some(dir) if file.is_relative() => dir.join(file),
        _ => file,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_from_input_stem() {
        assert_eq!(
            output_path(Path::new("lists/road_trip.pldef"), None, None),
            PathBuf::from("road_trip.html")
        );
    }

    #[test]
    fn explicit_name_replaces_extension() {
        assert_eq!(
            output_path(Path::new("a.pdl"), Some("summer.txt"), None),
            PathBuf::from("summer.html")
        );
        assert_eq!(
            output_path(Path::new("a.pdl"), Some("summer"), None),
            PathBuf::from("summer.html")
        );
    }

    #[test]
    fn joins_out_dir() {
        assert_eq!(
            output_path(Path::new("mix.pdl"), None, Some(Path::new("public"))),
            PathBuf::from("public/mix.html")
        );
    }

    #[test]
    fn falls_back_to_default_stem() {
        assert_eq!(
            output_path(Path::new(""), None, None),
            PathBuf::from("playlist.html")
        );
    }
}
