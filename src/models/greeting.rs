use clap::ValueEnum;
use std::fmt;

pub const DEFAULT_GREETING: &str = "Hello";
pub const DEFAULT_NAME: &str = "world";
pub const DEFAULT_PUNCTUATION: &str = "!";

/// Casing transform applied to the whole assembled greeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Style {
    /// Leave the text untouched
    #[default]
    Plain,
    /// Uppercase every letter
    Upper,
    /// Lowercase every letter
    Lower,
    /// Capitalize every word
    Title,
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Style::Plain => "plain",
            Style::Upper => "upper",
            Style::Lower => "lower",
            Style::Title => "title",
        };
        f.write_str(name)
    }
}

/// The parameters of a single greeting run.
///
/// Fields are only reachable through accessors so that `count` can never
/// drop below 1 once the value has been built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingConfig {
    greeting: String,
    name: String,
    count: u64,
    punctuation: String,
    style: Style,
}

impl GreetingConfig {
    /// Builds a configuration, normalizing a zero or negative `count` to 1.
    pub fn new(
        greeting: impl Into<String>,
        name: impl Into<String>,
        count: i64,
        punctuation: impl Into<String>,
        style: Style,
    ) -> Self {
        GreetingConfig {
            greeting: greeting.into(),
            name: name.into(),
            count: normalize_count(count),
            punctuation: punctuation.into(),
            style,
        }
    }

    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn punctuation(&self) -> &str {
        &self.punctuation
    }

    pub fn style(&self) -> Style {
        self.style
    }
}

impl Default for GreetingConfig {
    fn default() -> Self {
        GreetingConfig::new(
            DEFAULT_GREETING,
            DEFAULT_NAME,
            1,
            DEFAULT_PUNCTUATION,
            Style::Plain,
        )
    }
}

/// Maps a requested repetition count onto the number of lines to print.
///
/// Zero and negative values collapse to 1.
pub fn normalize_count(count: i64) -> u64 {
    if count > 0 { count.unsigned_abs() } else { 1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_documented_defaults() {
        let cfg = GreetingConfig::default();
        assert_eq!(cfg.greeting(), "Hello");
        assert_eq!(cfg.name(), "world");
        assert_eq!(cfg.count(), 1);
        assert_eq!(cfg.punctuation(), "!");
        assert_eq!(cfg.style(), Style::Plain);
    }

    #[test]
    fn non_positive_counts_become_one() {
        assert_eq!(normalize_count(0), 1);
        assert_eq!(normalize_count(-5), 1);
        assert_eq!(normalize_count(i64::MIN), 1);
        assert_eq!(GreetingConfig::new("Hi", "x", -3, "?", Style::Upper).count(), 1);
    }

    #[test]
    fn positive_counts_are_kept() {
        assert_eq!(normalize_count(3), 3);
        assert_eq!(normalize_count(i64::MAX), i64::MAX as u64);
    }

    #[test]
    fn empty_strings_are_legal() {
        let cfg = GreetingConfig::new("", "", 2, "", Style::Plain);
        assert_eq!(cfg.greeting(), "");
        assert_eq!(cfg.name(), "");
        assert_eq!(cfg.punctuation(), "");
        assert_eq!(cfg.count(), 2);
    }

    #[test]
    fn style_parses_and_displays_lowercase_names() {
        for style in Style::value_variants() {
            let parsed = Style::from_str(&style.to_string(), false).unwrap();
            assert_eq!(parsed, *style);
        }
        assert!(Style::from_str("not-a-style", false).is_err());
        assert!(Style::from_str("UPPER", false).is_err());
    }
}
