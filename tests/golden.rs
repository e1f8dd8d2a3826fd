//! Golden-file test — generated HTML must match the checked-in page byte for byte.

use pdlc::dsl::Compiler;
use pdlc::html::HtmlOptions;

const SOURCE: &str = include_str!("golden/late_night.pdl");
const EXPECTED: &str = include_str!("golden/late_night.html");

fn options() -> HtmlOptions {
    HtmlOptions {
        stylesheet: Some("playlist.css".to_string()),
        ..HtmlOptions::default()
    }
}

#[test]
fn late_night_matches_golden_file() {
    let html = Compiler::compile_with(SOURCE, &options()).expect("compile failed");
    assert_eq!(html, EXPECTED);
}

#[test]
fn golden_output_is_stable_across_runs() {
    let runs: Vec<String> = (0..3)
        .map(|_| Compiler::compile_with(SOURCE, &options()).unwrap())
        .collect();
    assert!(runs.windows(2).all(|w| w[0] == w[1]));
}
