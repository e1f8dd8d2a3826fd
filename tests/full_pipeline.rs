//! Full pipeline integration tests — PDL source → parse → transform → HTML.

use pdlc::dsl::Compiler;
use pdlc::{compile, Diagnostics};

fn minimal_src() -> &'static str {
    r#"
playlist {
  title: "Minimal"
  track {
    title: "Only"
    source: "only.mp3"
  }
}
"#
}

fn three_tracks_src() -> &'static str {
    r#"
playlist {
  title: "Ordered"
  track { title: "Alpha" source: "a.mp3" }
  track { title: "Bravo" source: "b.mp3" }
  track { title: "Charlie" source: "c.mp3" }
}
"#
}

// =============================================================================
// Syntax analysis
// =============================================================================

#[test]
fn minimal_document_builds_one_track() {
    let document = Compiler::parse(minimal_src()).expect("parse failed");
    let playlist = Compiler::transform(&document).expect("transform failed");
    assert_eq!(playlist.title, "Minimal");
    assert_eq!(playlist.tracks.len(), 1);
    assert_eq!(playlist.tracks[0].title, "Only");
}

#[test]
fn unterminated_block_is_syntax_error_with_position() {
    let src = "playlist {\n  title: \"Broken\"\n  track {\n    title: \"x\"\n    source: \"x.mp3\"\n";
    let err = Compiler::parse(src).unwrap_err();
    assert_eq!(err.line, 6);
    assert_eq!(err.col, 1);
    assert!(err.expected.iter().any(|e| e == "'}'"));

    match compile(src).unwrap_err() {
        Diagnostics::Syntax(e) => assert_eq!(e, err),
        other => panic!("expected syntax diagnostic, got {other:?}"),
    }
}

#[test]
fn syntax_error_stops_before_semantics() {
    // Would also be semantically invalid, but only the syntax error is reported.
    let diags = compile("playlist { track { title: \"\" source: } }").unwrap_err();
    assert_eq!(diags.len(), 1);
    assert!(matches!(diags, Diagnostics::Syntax(_)));
}

// =============================================================================
// Semantic analysis
// =============================================================================

#[test]
fn missing_source_reports_one_error() {
    let diags = compile("playlist { title: \"P\" track { title: \"No source\" } }").unwrap_err();
    let messages = diags.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("url/source"), "{messages:?}");
}

#[test]
fn missing_title_and_source_reports_both() {
    let diags = compile("playlist { title: \"P\" track { duration: 3:00 } }").unwrap_err();
    let messages = diags.messages();
    assert_eq!(messages.len(), 2, "{messages:?}");
    assert!(messages[0].contains("missing title"));
    assert!(messages[1].contains("missing url/source"));
}

#[test]
fn errors_from_every_track_are_collected() {
    let src = r#"
playlist {
  title: "Many problems"
  track { title: "One" source: "gopher://old" }
  track { title: "Two" source: "two.mp3" duration: "soon" }
  track { title: "Two" source: "two-again.mp3" }
}
"#;
    let diags = compile(src).unwrap_err();
    let Diagnostics::Semantic(errors) = diags else {
        panic!("expected semantic diagnostics");
    };
    let tracks: Vec<_> = errors.iter().map(|e| e.track).collect();
    assert_eq!(tracks, vec![Some(1), Some(2), Some(3)]);
    assert!(errors[0].message.starts_with("invalid url/source"));
    assert!(errors[1].message.starts_with("invalid duration"));
    assert!(errors[2].message.starts_with("duplicate track"));
}

#[test]
fn url_and_source_are_aliases() {
    let playlist = Compiler::check(
        r#"playlist { title: "P" track { title: "Web" url: "http://radio.example.org/live" } }"#,
    )
    .unwrap();
    assert_eq!(
        playlist.tracks[0].source.as_str(),
        "http://radio.example.org/live"
    );
}

#[test]
fn keyword_words_are_valid_tags() {
    let playlist = Compiler::check(
        r#"playlist { track { title: "Live" source: "l.mp3" tags: [track, live, playlist] } }"#,
    )
    .unwrap();
    let tags: Vec<&str> = playlist.tracks[0].tags.iter().map(String::as_str).collect();
    assert_eq!(tags, vec!["live", "playlist", "track"]);
}

#[test]
fn both_duration_forms_render_the_same() {
    let src = r#"
playlist {
  title: "Durations"
  track { title: "Literal" source: "a.mp3" duration: 4:05 }
  track { title: "Seconds" source: "b.mp3" duration: 245 }
  track { title: "Quoted" source: "c.mp3" duration: "04:05" }
}
"#;
    let html = compile(src).unwrap();
    assert_eq!(html.matches("<span class=\"duration\">4:05</span>").count(), 3);
}

#[test]
fn short_or_long_seconds_are_rejected_in_both_forms() {
    for duration in ["3:5", "3:005", "\"3:5\"", "\"3:005\""] {
        let src = format!(
            "playlist {{ title: \"P\" track {{ title: \"A\" source: \"a.mp3\" duration: {duration} }} }}"
        );
        let diags = compile(&src).unwrap_err();
        let Diagnostics::Semantic(errors) = diags else {
            panic!("expected semantic diagnostics for {duration}");
        };
        assert_eq!(errors.len(), 1, "{duration}");
        assert!(errors[0].message.starts_with("invalid duration"), "{duration}");
    }
}

#[test]
fn huge_durations_compile_without_total() {
    let src = r#"
playlist {
  title: "Long"
  track { title: "Forever" source: "a.mp3" duration: 18446744073709551615 }
  track { title: "Tick" source: "b.mp3" duration: 1 }
}
"#;
    let html = compile(src).unwrap();
    assert!(html.contains("<p class=\"summary\">2 tracks</p>"));
}

// =============================================================================
// Code generation
// =============================================================================

#[test]
fn script_title_is_escaped() {
    let src = r#"playlist { title: "P" track { title: "<script>alert(1)</script>" source: "x.mp3" } }"#;
    let html = compile(src).unwrap();
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!html.contains("<script"));
}

#[test]
fn attribute_breaking_artist_is_escaped() {
    let src = r#"playlist { title: "P" track { title: "t" artist: "\"><img src=x onerror='1'>" source: "x.mp3" } }"#;
    let html = compile(src).unwrap();
    assert!(!html.contains("<img"));
    assert!(html.contains("&quot;&gt;&lt;img src=x onerror=&#39;1&#39;&gt;"));
}

#[test]
fn compiling_twice_is_byte_identical() {
    let first = compile(three_tracks_src()).unwrap();
    let second = compile(three_tracks_src()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn tracks_render_in_source_order() {
    let html = compile(three_tracks_src()).unwrap();
    let a = html.find("Alpha").unwrap();
    let b = html.find("Bravo").unwrap();
    let c = html.find("Charlie").unwrap();
    assert!(a < b && b < c);
}

// =============================================================================
// Isolation
// =============================================================================

#[test]
fn documents_do_not_leak_errors_into_each_other() {
    let doc_a = r#"playlist { title: "A" track { title: "" source: "ftp://a" } }"#;
    let doc_b = r#"playlist { title: "B" track { title: "b" } }"#;

    let a1 = compile(doc_a).unwrap_err().messages();
    let b1 = compile(doc_b).unwrap_err().messages();
    let a2 = compile(doc_a).unwrap_err().messages();

    assert_eq!(a1.len(), 2);
    assert_eq!(b1.len(), 1);
    assert!(b1[0].contains("missing url/source"));
    assert_eq!(a1, a2);

    assert!(compile(minimal_src()).is_ok());
}

#[test]
fn concurrent_compiles_are_independent() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                if i % 2 == 0 {
                    compile(minimal_src()).map(|_| 0).unwrap_or_else(|d| d.len())
                } else {
                    compile("playlist { title: \"x\" track { } }")
                        .map(|_| 0)
                        .unwrap_or_else(|d| d.len())
                }
            })
        })
        .collect();
    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(counts, vec![0, 2, 0, 2]);
}
