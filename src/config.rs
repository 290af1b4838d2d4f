//! Name-parsing constants and process configuration.
//!
//! `NameConstants` is built once and only read afterwards. Parsers receive it
//! by reference; the free functions in [`crate::name`] use the process-wide
//! default from [`NameConstants::shared`].

use std::collections::HashSet;
use std::env;
use std::net::SocketAddr;
use std::sync::OnceLock;

/// Honorific titles recognized in front of a name.
const TITLES: &[&str] = &[
    "Dr", "Prof", "Professor", "Sir", "Editor", "Mr", "Mrs", "Ms", "Chair", "Co-Chair", "Chairs",
    "co-Chairs",
];

/// Generational and academic suffixes.
const SUFFIXES: &[&str] = &[
    "jr", "jnr", "junior", "sr", "snr", "senior", "esq", "esquire", "phd", "2nd", "3rd",
];

/// Roman numerals accepted as suffixes. Single letters ("i", "v", "x") are
/// listed but a lone letter is always read as an initial by the parser.
const ROMAN_NUMERAL_SUFFIXES: &[&str] = &[
    "i", "ii", "iii", "iv", "v", "vi", "vii", "viii", "ix", "x", "xii", "xiii", "xiv", "xv",
];

/// Surname particles, e.g. "van Beethoven", "da Vinci".
const SURNAME_PARTICLES: &[&str] = &[
    "van", "von", "de", "del", "della", "di", "da", "la", "le", "du", "des", "ten", "ter", "vander",
];

/// Separators placed between surname and given-name variations.
pub const LASTNAME_NON_LASTNAME_SEPARATORS: [&str; 2] = [" ", ", "];

/// Lookup key: lowercase with periods removed, so "Dr." matches "dr".
fn lookup_key(word: &str) -> String {
    word.chars().filter(|c| *c != '.').flat_map(char::to_lowercase).collect()
}

fn key_set<'a>(words: impl IntoIterator<Item = &'a str>) -> HashSet<String> {
    words
        .into_iter()
        .map(lookup_key)
        .filter(|key| !key.is_empty())
        .collect()
}

/// The title, suffix and particle tables consulted by the parser.
#[derive(Debug, Clone)]
pub struct NameConstants {
    titles: HashSet<String>,
    suffixes: HashSet<String>,
    roman_numerals: HashSet<String>,
    particles: HashSet<String>,
}

impl Default for NameConstants {
    fn default() -> Self {
        Self {
            titles: key_set(TITLES.iter().copied()),
            suffixes: key_set(SUFFIXES.iter().copied()),
            roman_numerals: key_set(ROMAN_NUMERAL_SUFFIXES.iter().copied()),
            particles: key_set(SURNAME_PARTICLES.iter().copied()),
        }
    }
}

impl NameConstants {
    /// Process-wide default constants, built on first use.
    pub fn shared() -> &'static NameConstants {
        static SHARED: OnceLock<NameConstants> = OnceLock::new();
        SHARED.get_or_init(NameConstants::default)
    }

    /// Returns a copy with `titles` added to the title table.
    pub fn with_titles<'a>(mut self, titles: impl IntoIterator<Item = &'a str>) -> Self {
        self.titles.extend(key_set(titles));
        self
    }

    /// Returns a copy with `suffixes` added to the ordinary suffix table.
    pub fn with_suffixes<'a>(mut self, suffixes: impl IntoIterator<Item = &'a str>) -> Self {
        self.suffixes.extend(key_set(suffixes));
        self
    }

    pub fn is_title(&self, word: &str) -> bool {
        self.titles.contains(&lookup_key(word))
    }

    /// True for ordinary and roman-numeral suffixes alike.
    pub fn is_suffix(&self, word: &str) -> bool {
        let key = lookup_key(word);
        self.suffixes.contains(&key) || self.roman_numerals.contains(&key)
    }

    pub fn is_particle(&self, word: &str) -> bool {
        self.particles.contains(&lookup_key(word))
    }
}

/// Runtime configuration for the HTTP service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub extra_titles: Vec<String>,
    pub extra_suffixes: Vec<String>,
}

impl AppConfig {
    /// Reads `BIND_ADDR`, `NAME_EXTRA_TITLES` and `NAME_EXTRA_SUFFIXES`.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a local `.env` file.
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let bind_addr = bind_addr
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid BIND_ADDR {:?}: {}", bind_addr, e))?;

        Ok(Self {
            bind_addr,
            extra_titles: list_var("NAME_EXTRA_TITLES"),
            extra_suffixes: list_var("NAME_EXTRA_SUFFIXES"),
        })
    }

    /// Default constants overlaid with the configured extras.
    pub fn name_constants(&self) -> NameConstants {
        NameConstants::default()
            .with_titles(self.extra_titles.iter().map(String::as_str))
            .with_suffixes(self.extra_suffixes.iter().map(String::as_str))
    }
}

/// Comma-separated environment list; unset means empty.
fn list_var(key: &str) -> Vec<String> {
    env::var(key)
        .map(|value| parse_list(&value))
        .unwrap_or_default()
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles_ignore_case_and_periods() {
        let constants = NameConstants::default();
        assert!(constants.is_title("Dr."));
        assert!(constants.is_title("PROF"));
        assert!(constants.is_title("co-chairs"));
        assert!(!constants.is_title("Ed"));
        assert!(!constants.is_title("John"));
    }

    #[test]
    fn test_suffixes_include_roman_numerals() {
        let constants = NameConstants::default();
        assert!(constants.is_suffix("Jr."));
        assert!(constants.is_suffix("iii"));
        assert!(constants.is_suffix("XIV"));
        assert!(!constants.is_suffix("Peter"));
    }

    #[test]
    fn test_particles() {
        let constants = NameConstants::default();
        assert!(constants.is_particle("van"));
        assert!(constants.is_particle("De"));
        assert!(!constants.is_particle("Smith"));
    }

    #[test]
    fn test_overlays_extend_defaults() {
        let constants = NameConstants::default()
            .with_titles(["Rev."])
            .with_suffixes(["OBE"]);
        assert!(constants.is_title("rev"));
        assert!(constants.is_title("Dr"));
        assert!(constants.is_suffix("obe"));
        assert!(!NameConstants::shared().is_title("rev"));
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(parse_list(" Rev, ,Fr "), vec!["Rev".to_string(), "Fr".to_string()]);
        assert!(parse_list("").is_empty());
    }
}
