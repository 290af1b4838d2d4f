//! Canonical (storage) and display renderings of a [`ParsedName`].

use tracing::warn;

use super::ParsedName;

const ROMAN_NUMERAL_CHARS: [char; 9] = ['M', 'D', 'C', 'L', 'X', 'V', 'I', '(', ')'];

/// A single character, or anything already carrying a period.
fn is_initial(name: &str) -> bool {
    name.chars().count() == 1 || name.contains('.')
}

fn ensure_dotted_initial(name: &str) -> String {
    if is_initial(name) && !name.contains('.') {
        format!("{}.", name)
    } else {
        name.to_string()
    }
}

fn ensure_dotted_suffix(suffix: &str) -> String {
    if suffix.contains('.') {
        suffix.to_string()
    } else {
        format!("{}.", suffix)
    }
}

fn is_roman_numeral(suffix: &str) -> bool {
    suffix
        .to_uppercase()
        .chars()
        .all(|c| ROMAN_NUMERAL_CHARS.contains(&c))
}

impl ParsedName {
    /// Canonical "Last, First Middle, Suffix" form.
    ///
    /// Initials get a trailing period and adjacent initials are not
    /// separated ("J.P."); roman-numeral suffixes are upper-cased and other
    /// suffixes dotted. Curly apostrophes become ASCII ones.
    pub fn dumps(&self) -> String {
        let mut first_and_middle = String::new();
        let mut prev_is_initial = false;
        for (i, name) in self.first_list.iter().enumerate() {
            let name = ensure_dotted_initial(name);
            let name_is_initial = is_initial(&name);
            if i > 0 && !(name_is_initial && prev_is_initial) {
                first_and_middle.push(' ');
            }
            first_and_middle.push_str(&name);
            prev_is_initial = name_is_initial;
        }

        if self.first_list.is_empty() {
            warn!(original = %self.original, "Cannot process name properly");
        }

        let suffix = self.suffix().map(|suffix| {
            if is_roman_numeral(&suffix) {
                suffix.to_uppercase()
            } else {
                ensure_dotted_suffix(&suffix)
            }
        });

        let last = self.last();
        let final_name = [Some(last), Some(first_and_middle), suffix]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ");

        final_name.replace('’', "'")
    }

    /// Display form "Title First Middle Last, Suffix".
    ///
    /// With `initials_only` the given names are rendered as dotted initials,
    /// unless there is no surname to anchor them. The title is left out when
    /// `without_titles` is set. Roman-numeral suffixes are upper-cased as in
    /// [`ParsedName::dumps`]; other suffixes are not dotted.
    pub fn pprint(&self, initials_only: bool, without_titles: bool) -> String {
        let last = self.last();
        let first = if initials_only && !last.is_empty() {
            self.first_initials()
        } else {
            self.first()
        };
        let title = if without_titles {
            None
        } else {
            self.title().map(str::to_string)
        };

        let name = [title, Some(first), Some(last)]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        match self.suffix() {
            Some(suffix) if is_roman_numeral(&suffix) => {
                format!("{}, {}", name, suffix.to_uppercase())
            }
            Some(suffix) => format!("{}, {}", name, suffix),
            None => name,
        }
    }
}
