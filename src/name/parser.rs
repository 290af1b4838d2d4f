//! Splitting raw name strings into title, given-name, surname and suffix pieces.

use crate::config::NameConstants;

/// Name pieces before capitalization and title promotion.
#[derive(Debug, Default)]
pub(crate) struct Pieces {
    pub title: Vec<String>,
    pub first: Vec<String>,
    pub last: Vec<String>,
    pub suffix: Vec<String>,
}

impl Pieces {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.first.is_empty() && self.last.is_empty() && self.suffix.is_empty()
    }
}

/// Split `raw` into pieces.
///
/// Text before the first comma is the surname; without a comma the last
/// token (plus any particles in front of it) is. Blank comma segments and
/// punctuation-only tokens are dropped, so "Perelstein,, Maxim" parses like
/// "Perelstein, Maxim".
pub(crate) fn split_pieces(raw: &str, constants: &NameConstants) -> Pieces {
    let segments: Vec<Vec<&str>> = raw
        .split(',')
        .map(tokenize)
        .filter(|tokens| !tokens.is_empty())
        .collect();

    match segments.as_slice() {
        [] => Pieces::default(),
        [only] if only.len() == 1 => Pieces {
            last: vec![only[0].to_string()],
            ..Pieces::default()
        },
        [only] => split_given_first(only, constants),
        [name, suffixes] if are_suffixes(suffixes, constants) => {
            let mut pieces = split_given_first(name, constants);
            pieces.suffix.extend(suffixes.iter().map(|s| s.to_string()));
            pieces
        }
        [last, given, rest @ ..] => {
            let mut pieces = split_given_part(given, constants);
            pieces.last = last.iter().map(|s| s.to_string()).collect();
            pieces
                .suffix
                .extend(rest.iter().flatten().map(|s| s.to_string()));
            pieces
        }
    }
}

/// Whitespace tokens of a comma segment, without punctuation-only tokens.
fn tokenize(segment: &str) -> Vec<&str> {
    segment
        .split_whitespace()
        .filter(|token| !token.chars().all(|c| c.is_ascii_punctuation()))
        .collect()
}

/// A lone letter, dotted or not.
fn is_an_initial(token: &str) -> bool {
    let mut chars = token.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(c), None, None) | (Some(c), Some('.'), None) if c.is_alphabetic()
    )
}

fn is_suffix(token: &str, constants: &NameConstants) -> bool {
    constants.is_suffix(token) && !is_an_initial(token)
}

fn are_suffixes(tokens: &[&str], constants: &NameConstants) -> bool {
    !tokens.is_empty() && tokens.iter().all(|t| is_suffix(t, constants))
}

/// "First Middle Last" order, at least two tokens.
fn split_given_first(tokens: &[&str], constants: &NameConstants) -> Pieces {
    let mut pieces = Pieces::default();

    // Titles need something after them.
    let mut start = 0;
    while start + 1 < tokens.len() && constants.is_title(tokens[start]) {
        pieces.title.push(tokens[start].to_string());
        start += 1;
    }
    let mut rest = &tokens[start..];

    if let [only] = rest {
        pieces.last.push(only.to_string());
        return pieces;
    }

    while rest.len() > 2 && is_suffix(rest[rest.len() - 1], constants) {
        pieces.suffix.insert(0, rest[rest.len() - 1].to_string());
        rest = &rest[..rest.len() - 1];
    }

    // Particles in front of the last token belong to the surname, but the
    // first token is always a given name ("de Rham").
    let mut family_start = rest.len() - 1;
    while family_start > 1 && constants.is_particle(rest[family_start - 1]) {
        family_start -= 1;
    }

    pieces.first = rest[..family_start].iter().map(|s| s.to_string()).collect();
    pieces.last.push(rest[family_start..].join(" "));
    pieces
}

/// The part after the surname in "Last, First Middle Suffix" order.
fn split_given_part(tokens: &[&str], constants: &NameConstants) -> Pieces {
    let mut pieces = Pieces::default();

    for (i, token) in tokens.iter().enumerate() {
        let has_next = i + 1 < tokens.len();
        if pieces.first.is_empty()
            && (has_next || tokens.len() == 1)
            && constants.is_title(token)
        {
            pieces.title.push(token.to_string());
        } else if !pieces.first.is_empty() && is_suffix(token, constants) {
            pieces.suffix.push(token.to_string());
        } else {
            pieces.first.push(token.to_string());
        }
    }

    pieces
}

/// True when the input carries no case information worth keeping, i.e. it
/// has no lowercase or no uppercase letters at all.
pub(crate) fn is_single_case(raw: &str) -> bool {
    let has_lower = raw.chars().any(char::is_lowercase);
    let has_upper = raw.chars().any(char::is_uppercase);
    !(has_lower && has_upper)
}

/// Capitalize every piece; surname particles before the final surname word
/// stay lowercase.
pub(crate) fn capitalize_pieces(pieces: &mut Pieces, constants: &NameConstants) {
    for token in pieces
        .title
        .iter_mut()
        .chain(pieces.first.iter_mut())
        .chain(pieces.suffix.iter_mut())
    {
        *token = capitalize(token);
    }

    let word_count: usize = pieces.last.iter().map(|t| t.split(' ').count()).sum();
    let mut seen = 0;
    for token in pieces.last.iter_mut() {
        let words: Vec<String> = token
            .split(' ')
            .map(|word| {
                seen += 1;
                if seen < word_count && constants.is_particle(word) {
                    word.to_lowercase()
                } else {
                    capitalize(word)
                }
            })
            .collect();
        *token = words.join(" ");
    }
}

/// Upper-case the first letter of every alphanumeric run and lower-case the
/// rest: "o'brien" → "O'Brien", "d.k." → "D.K.", "mcdonald" → "McDonald".
pub(crate) fn capitalize(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    let mut run = String::new();

    for c in token.chars() {
        if c.is_alphanumeric() {
            run.push(c);
        } else {
            out.push_str(&capitalize_run(&run));
            run.clear();
            out.push(c);
        }
    }
    out.push_str(&capitalize_run(&run));
    out
}

fn capitalize_run(run: &str) -> String {
    let lower = run.to_lowercase();
    if let Some(rest) = lower.strip_prefix("mc").filter(|rest| rest.chars().count() > 1) {
        return format!("Mc{}", capitalize_run(rest));
    }

    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
