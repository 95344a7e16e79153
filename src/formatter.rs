//! Greeting text assembly.
//!
//! Turns a [`GreetingConfig`] into the line that gets printed. Everything in
//! here is pure: the same configuration always produces the same text.

use crate::models::greeting::{GreetingConfig, Style};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// A word for title casing is any run of letters.
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{L}+").expect("Invalid regex pattern"));

/// Builds the greeting for `cfg`.
///
/// The base text is `"<greeting>, <name><punctuation>"`; the configured style
/// is then applied to the whole of it, greeting word and punctuation included.
/// No trailing newline is added.
///
/// # Examples
/// ```
/// use greeting_cli::formatter::format_message;
/// use greeting_cli::models::greeting::{GreetingConfig, Style};
///
/// let cfg = GreetingConfig::new("Hi", "Alice", 2, "!!!", Style::Upper);
/// assert_eq!(format_message(&cfg), "HI, ALICE!!!");
/// ```
pub fn format_message(cfg: &GreetingConfig) -> String {
    let base = format!("{}, {}{}", cfg.greeting(), cfg.name(), cfg.punctuation());
    apply_style(&base, cfg.style())
}

/// Applies a casing style to `text`.
pub fn apply_style(text: &str, style: Style) -> String {
    match style {
        Style::Plain => text.to_string(),
        Style::Upper => text.to_uppercase(),
        Style::Lower => text.to_lowercase(),
        Style::Title => title_case(text),
    }
}

/// Capitalizes every word: the first letter of a run of letters is uppercased,
/// the rest of the run lowercased. Non-letters are copied as they are and
/// act as word boundaries, so `o'neil` becomes `O'Neil`.
fn title_case(text: &str) -> String {
    WORD.replace_all(text, |caps: &Captures| capitalize(&caps[0]))
        .into_owned()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
