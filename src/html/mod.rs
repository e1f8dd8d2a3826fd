//! HTML code generation — renders a validated [`Playlist`] as a static page.
//!
//! Output depends only on the playlist and the options, so identical inputs
//! always give byte-identical pages.

pub mod escape;

pub use escape::escape;

use serde::Deserialize;

use crate::playlist::{Duration, Playlist, Source, Track};

const DEFAULT_STYLE: &str = "\
body { font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 48rem; padding: 0 1rem; }
h1 { margin-bottom: 0.25rem; }
.summary { color: #666; margin-top: 0; }
.tracks { padding-left: 1.5rem; }
.track { margin: 0.75rem 0; }
.track .title { font-weight: 600; }
.track .artist, .track .duration { color: #555; margin-left: 0.5rem; }
.track .source { display: block; font-size: 0.9em; }
.tags { list-style: none; padding: 0; margin: 0.25rem 0 0; }
.tag { display: inline-block; background: #eee; border-radius: 0.25rem; padding: 0 0.4rem; margin-right: 0.25rem; font-size: 0.8em; }
";

/// Rendering options, usually loaded from the config file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HtmlOptions {
    /// Value of the `<html lang>` attribute.
    pub lang: String,
    /// Render each track's tags.
    pub show_tags: bool,
    /// Add an `<audio>` player per track.
    pub embed_audio: bool,
    /// External stylesheet href. The built-in style is inlined when unset.
    pub stylesheet: Option<String>,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            show_tags: true,
            embed_audio: false,
            stylesheet: None,
        }
    }
}

/// Render a playlist with default options.
pub fn generate(playlist: &Playlist) -> String {
    generate_with(playlist, &HtmlOptions::default())
}

/// Render a playlist as a complete HTML document.
pub fn generate_with(playlist: &Playlist, options: &HtmlOptions) -> String {
    let title = escape(&playlist.title);
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n");
    out.push_str(&format!("<html lang=\"{}\">\n", escape(&options.lang)));
    out.push_str("<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    );
    out.push_str(&format!("<title>{title}</title>\n"));
    match &options.stylesheet {
        Some(href) => out.push_str(&format!(
            "<link rel=\"stylesheet\" href=\"{}\">\n",
            escape(href)
        )),
        None => {
            out.push_str("<style>\n");
            out.push_str(DEFAULT_STYLE);
            out.push_str("</style>\n");
        }
    }
    out.push_str("</head>\n");
    out.push_str("<body>\n");
    out.push_str("<main class=\"playlist\">\n");
    out.push_str(&format!("<h1>{title}</h1>\n"));
    out.push_str(&format!(
        "<p class=\"summary\">{}</p>\n",
        summary(&playlist.tracks)
    ));
    out.push_str("<ol class=\"tracks\">\n");
    for track in &playlist.tracks {
        render_track(&mut out, track, options);
    }
    out.push_str("</ol>\n");
    out.push_str("</main>\n");
    out.push_str("</body>\n");
    out.push_str("</html>\n");
    out
}

fn render_track(out: &mut String, track: &Track, options: &HtmlOptions) {
    let href = escape(track.source.as_str());
    let kind = match track.source {
        Source::Url(_) => "url",
        Source::Path(_) => "path",
    };

    out.push_str("<li class=\"track\">\n");
    out.push_str(&format!(
        "<span class=\"title\">{}</span>\n",
        escape(&track.title)
    ));
    if let Some(artist) = &track.artist {
        out.push_str(&format!(
            "<span class=\"artist\">{}</span>\n",
            escape(artist)
        ));
    }
    if let Some(duration) = track.duration {
        out.push_str(&format!(
            "<span class=\"duration\">{duration}</span>\n"
        ));
    }
    out.push_str(&format!(
        "<a class=\"source {kind}\" href=\"{href}\">{href}</a>\n"
    ));
    if options.embed_audio {
        out.push_str(&format!(
            "<audio controls preload=\"none\" src=\"{href}\"></audio>\n"
        ));
    }
    if options.show_tags && !track.tags.is_empty() {
        out.push_str("<ul class=\"tags\">");
        for tag in &track.tags {
            out.push_str(&format!("<li class=\"tag\">{}</li>", escape(tag)));
        }
        out.push_str("</ul>\n");
    }
    out.push_str("</li>\n");
}

/// "N track(s)", plus the total length of the tracks that declare one.
fn summary(tracks: &[Track]) -> String {
    let count = match tracks.len() {
        1 => "1 track".to_string(),
        n => format!("{n} tracks"),
    };
    let known: Vec<Duration> = tracks.iter().filter_map(|t| t.duration).collect();
    if known.is_empty() {
        return count;
    }
    // A total that does not fit in u64 seconds is left out.
    match known
        .iter()
        .try_fold(0u64, |acc, d| acc.checked_add(d.as_secs()))
    {
        Some(total) => format!("{count}, total {}", Duration::from_secs(total)),
        None => count,
    }
}
