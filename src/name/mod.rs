//! Personal-name parsing, normalization, variation and query generation.
//!
//! Every entry point parses the raw string into a [`ParsedName`] first:
//!
//! - [`normalize_name`] renders the canonical "Last, First Middle, Suffix"
//!   storage form.
//! - [`format_name`] renders the looser human display form.
//! - [`generate_name_variations`] expands the name into the lowercase ASCII
//!   spellings used for exact author matching.
//! - [`ParsedName::generate_es_query`] builds the nested author query.

mod es_query;
mod parser;
mod render;
mod variations;

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use tracing::warn;
use utoipa::ToSchema;

use crate::config::NameConstants;
use crate::error::NameError;

pub use es_query::{NAMES_ANALYZER, NAMES_INITIALS_ANALYZER};
pub use variations::{
    generate_name_variations, generate_name_variations_with, NAMES_MAX_NUMBER_THRESHOLD,
};

/// Input accepted by [`ParsedName::from_input`].
#[derive(Debug, Clone)]
pub enum NameInput {
    /// Free-form text to be parsed.
    RawText(String),
    /// A name that was already decomposed, passed through unchanged.
    AlreadyParsed(ParsedName),
}

impl NameInput {
    /// The raw text behind the input; a parsed name gives back its original.
    pub fn into_raw_text(self) -> String {
        match self {
            NameInput::RawText(raw) => raw,
            NameInput::AlreadyParsed(name) => name.original,
        }
    }
}

impl From<&str> for NameInput {
    fn from(raw: &str) -> Self {
        NameInput::RawText(raw.to_string())
    }
}

impl From<String> for NameInput {
    fn from(raw: String) -> Self {
        NameInput::RawText(raw)
    }
}

impl From<ParsedName> for NameInput {
    fn from(name: ParsedName) -> Self {
        NameInput::AlreadyParsed(name)
    }
}

impl TryFrom<&Value> for NameInput {
    type Error = NameError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(raw) => Ok(NameInput::RawText(raw.clone())),
            Value::Null => Err(NameError::InvalidArgumentType { found: "null" }),
            Value::Bool(_) => Err(NameError::InvalidArgumentType { found: "boolean" }),
            Value::Number(_) => Err(NameError::InvalidArgumentType { found: "number" }),
            Value::Array(_) => Err(NameError::InvalidArgumentType { found: "array" }),
            Value::Object(_) => Err(NameError::InvalidArgumentType { found: "object" }),
        }
    }
}

/// Known parts of a name, for building a [`ParsedName`] without parsing.
#[derive(Debug, Clone, Default)]
pub struct NameParts<'a> {
    pub first: Option<&'a str>,
    pub middle: Option<&'a str>,
    pub last: Option<&'a str>,
    pub suffix: Option<&'a str>,
    pub title: Option<&'a str>,
}

/// A human name decomposed into title, given names, surname and suffix.
///
/// Given names keep the first name and all middle names in input order.
/// A `ParsedName` is never built from blank input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ParsedName {
    title: Option<String>,
    first_list: Vec<String>,
    last_list: Vec<String>,
    suffix_list: Vec<String>,
    original: String,
    maybe_only_last_name: bool,
}

impl ParsedName {
    /// Parse `raw` with the shared default constants.
    ///
    /// Fails with [`NameError::EmptyInput`] on blank input.
    pub fn loads(raw: &str) -> Result<Self, NameError> {
        Self::loads_with(raw, NameConstants::shared())
    }

    /// Parse `raw` with explicitly supplied constants.
    pub fn loads_with(raw: &str, constants: &NameConstants) -> Result<Self, NameError> {
        if raw.trim().is_empty() {
            return Err(NameError::EmptyInput);
        }

        let pieces = parser::split_pieces(raw, constants);
        Ok(Self::assemble(raw, pieces, constants))
    }

    /// Resolve a [`NameInput`], parsing raw text and passing parsed names through.
    pub fn from_input(input: NameInput, constants: &NameConstants) -> Result<Self, NameError> {
        match input {
            NameInput::RawText(raw) => Self::loads_with(&raw, constants),
            NameInput::AlreadyParsed(name) => Ok(name),
        }
    }

    /// Build a name from already separated parts.
    ///
    /// Fails with [`NameError::EmptyInput`] when every part is missing or blank.
    ///
    /// ```
    /// use authornames::name::{NameParts, ParsedName};
    ///
    /// let name = ParsedName::from_parts(NameParts {
    ///     first: Some("John"),
    ///     middle: Some("Peter"),
    ///     last: Some("Smith"),
    ///     suffix: Some("Jr"),
    ///     title: Some("Sir"),
    /// })?;
    /// assert_eq!(name.dumps(), "Smith, John Peter, Jr.");
    /// # Ok::<(), authornames::NameError>(())
    /// ```
    pub fn from_parts(parts: NameParts<'_>) -> Result<Self, NameError> {
        let words = |part: Option<&str>| -> Vec<String> {
            part.map(|p| p.split_whitespace().map(str::to_string).collect())
                .unwrap_or_default()
        };

        let mut first = words(parts.first);
        first.extend(words(parts.middle));
        let pieces = parser::Pieces {
            title: words(parts.title),
            first,
            last: words(parts.last),
            suffix: words(parts.suffix),
        };

        let original = [parts.title, parts.first, parts.middle, parts.last, parts.suffix]
            .iter()
            .flatten()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if original.is_empty() {
            return Err(NameError::EmptyInput);
        }

        Ok(Self::assemble(&original, pieces, NameConstants::shared()))
    }

    fn assemble(raw: &str, mut pieces: parser::Pieces, constants: &NameConstants) -> Self {
        if pieces.is_empty() {
            warn!(original = %raw, "Falling back to raw input as surname");
            pieces.last = vec![raw.trim().to_string()];
        }

        if parser::is_single_case(raw) {
            parser::capitalize_pieces(&mut pieces, constants);
        }

        // A title stands in for the given name when nothing else is left.
        if pieces.first.is_empty() && !pieces.title.is_empty() && !pieces.last.is_empty() {
            pieces.first = std::mem::take(&mut pieces.title);
        }

        let maybe_only_last_name = !raw.contains(',')
            && pieces.first.last().map_or(true, |name| !name.contains('.'));

        let title = if pieces.title.is_empty() {
            None
        } else {
            Some(pieces.title.join(" "))
        };

        Self {
            title,
            first_list: pieces.first,
            last_list: pieces.last,
            suffix_list: pieces.suffix,
            original: raw.to_string(),
            maybe_only_last_name,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Given names (first and middle) joined by a space.
    pub fn first(&self) -> String {
        self.first_list.join(" ")
    }

    pub fn first_list(&self) -> &[String] {
        &self.first_list
    }

    pub fn last(&self) -> String {
        self.last_list.join(" ")
    }

    pub fn last_list(&self) -> &[String] {
        &self.last_list
    }

    /// Suffixes joined by ", ", or `None` when there are none.
    pub fn suffix(&self) -> Option<String> {
        if self.suffix_list.is_empty() {
            None
        } else {
            Some(self.suffix_list.join(", "))
        }
    }

    pub fn suffix_list(&self) -> &[String] {
        &self.suffix_list
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    /// True when the input had no comma and no dotted final given name, so
    /// the whole input may really be a surname.
    pub fn maybe_only_last_name(&self) -> bool {
        self.maybe_only_last_name
    }

    /// Dotted initial of every given-name piece, splitting on dash, period
    /// and space: "Miguel A-M.G." gives `["M.", "A.", "M.", "G."]`.
    pub fn first_initials_list(&self) -> Vec<String> {
        self.first_list
            .iter()
            .flat_map(|name| name.split(|c: char| c == '-' || c == '.' || c == ' '))
            .filter_map(|piece| piece.chars().next())
            .map(|initial| format!("{}.", initial))
            .collect()
    }

    pub fn first_initials(&self) -> String {
        self.first_initials_list().join(" ")
    }

    /// Number of name tokens, counting the title as one.
    pub fn len(&self) -> usize {
        usize::from(self.title.is_some())
            + self.first_list.len()
            + self.last_list.len()
            + self.suffix_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The only token, when the name consists of exactly one.
    fn single_token(&self) -> Option<&str> {
        if self.len() != 1 {
            return None;
        }
        self.title
            .iter()
            .chain(&self.first_list)
            .chain(&self.last_list)
            .chain(&self.suffix_list)
            .next()
            .map(String::as_str)
    }
}

/// Human-order full name: title, given names, surname, suffixes.
impl fmt::Display for ParsedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = self
            .title
            .iter()
            .chain(&self.first_list)
            .chain(&self.last_list)
            .chain(&self.suffix_list)
            .map(String::as_str)
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}

/// Normalize a name to its canonical "Last, First Middle, Suffix" form.
///
/// Returns `None` for blank input.
///
/// # Examples
///
/// ```
/// use authornames::name::normalize_name;
///
/// assert_eq!(normalize_name("Smith, J. P.").as_deref(), Some("Smith, J.P."));
/// assert_eq!(normalize_name("Sir John Smith").as_deref(), Some("Smith, John"));
/// assert_eq!(normalize_name("   "), None);
/// ```
pub fn normalize_name(raw: &str) -> Option<String> {
    ParsedName::loads(raw).ok().map(|name| name.dumps())
}

/// Render a name for display, e.g. "Lieber, Stanley Martin" as
/// "Stanley Martin Lieber" or, with `initials_only`, "S. M. Lieber".
pub fn format_name(raw: &str, initials_only: bool, without_titles: bool) -> Result<String, NameError> {
    Ok(ParsedName::loads(raw)?.pprint(initials_only, without_titles))
}
