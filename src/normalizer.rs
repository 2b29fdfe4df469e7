// Raw generation output -> caller-facing text and subject lines

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{Fragment, GenerationResult};

lazy_static! {
    static ref BOLD: Regex = Regex::new(r"\*\*(.*?)\*\*").unwrap();
}

/// Plain text of a generation result; fragments are joined without a
/// separator and non-text fragments are dropped
pub fn normalize(result: GenerationResult) -> String {
    match result {
        GenerationResult::Text(text) => text,
        GenerationResult::Fragments(fragments) => fragments
            .into_iter()
            .filter_map(|fragment| match fragment {
                Fragment::Text { text } => Some(text),
                Fragment::Other => None,
            })
            .collect(),
    }
}

/// Non-blank lines of a generation result with bold spans converted
pub fn normalize_lines(result: GenerationResult) -> Vec<String> {
    normalize(result)
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(emphasize)
        .collect()
}

// `**x**` -> `<strong>x</strong>`, every span on the line
pub fn emphasize(line: &str) -> String {
    BOLD.replace_all(line, "<strong>$1</strong>").into_owned()
}
