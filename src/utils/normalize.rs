//! Unicode folding for name matching.
//!
//! Variations are compared against indexed values that went through the same
//! folding, so both sides land in plain ASCII.
//! Key transformations:
//! - Replace letters that don't decompose (ł, ø, æ, etc.)
//! - Remove accents/diacritics (é → e, ü → u, etc.)
//! - Transliterate whatever is still non-ASCII (ß → ss, 蕾 → Lei)

use unicode_normalization::UnicodeNormalization;

/// Fold a string to its closest plain-ASCII form, keeping case and punctuation.
///
/// # Examples
///
/// ```
/// use authornames::utils::fold_to_ascii;
///
/// assert_eq!(fold_to_ascii("Caro-Estévez Martínez"), "Caro-Estevez Martinez");
/// assert_eq!(fold_to_ascii("Łukasz"), "Lukasz");
/// assert_eq!(fold_to_ascii("Süß"), "Suss");
/// ```
pub fn fold_to_ascii(text: &str) -> String {
    let replaced = replace_special_chars(text);

    let mut folded = String::with_capacity(replaced.len());
    // NFD splits "é" into "e" + combining acute; the marks are dropped.
    for c in replaced.nfd().filter(|c| !is_combining_mark(*c)) {
        if c.is_ascii() {
            folded.push(c);
        } else {
            match deunicode::deunicode_char(c) {
                Some(ascii) => folded.push_str(ascii),
                None => folded.push(c),
            }
        }
    }
    folded
}

/// Fold to ASCII and lowercase, the form used for exact-match variations.
///
/// # Examples
///
/// ```
/// use authornames::utils::fold_for_matching;
///
/// assert_eq!(fold_for_matching("Müller, J"), "muller, j");
/// ```
pub fn fold_for_matching(text: &str) -> String {
    fold_to_ascii(text).to_lowercase()
}

/// Replace letters that are distinct letters rather than accented versions,
/// so NFD leaves them untouched.
fn replace_special_chars(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            // Polish
            'Ł' => 'L',
            'ł' => 'l',
            // Nordic
            'Ø' => 'O',
            'ø' => 'o',
            // Icelandic
            'Ð' => 'D',
            'ð' => 'd',
            // Croatian/Serbian
            'Đ' => 'D',
            'đ' => 'd',
            // Turkish
            'İ' => 'I',
            'ı' => 'i',
            _ => c,
        })
        .collect()
}

/// Check if a character is a combining diacritical mark.
fn is_combining_mark(c: char) -> bool {
    // See: https://unicode.org/charts/PDF/U0300.pdf
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_accents() {
        assert_eq!(fold_to_ascii("José"), "Jose");
        assert_eq!(fold_to_ascii("García"), "Garcia");
        assert_eq!(fold_to_ascii("Schrödinger"), "Schrodinger");
        assert_eq!(fold_to_ascii("Cañón"), "Canon");
        assert_eq!(fold_to_ascii("Čech"), "Cech");
        assert_eq!(fold_to_ascii("Nguyễn"), "Nguyen");
    }

    #[test]
    fn test_fold_special_letters() {
        assert_eq!(fold_to_ascii("Łukasz"), "Lukasz");
        assert_eq!(fold_to_ascii("Møller"), "Moller");
        assert_eq!(fold_to_ascii("Đorđević"), "Dordevic");
        assert_eq!(fold_to_ascii("Æsir"), "AEsir");
    }

    #[test]
    fn test_fold_keeps_punctuation_and_case() {
        assert_eq!(fold_to_ascii("O'Brien, J.-P."), "O'Brien, J.-P.");
        assert_eq!(fold_to_ascii("  Jean-François "), "  Jean-Francois ");
    }

    #[test]
    fn test_fold_for_matching_lowercases() {
        assert_eq!(fold_for_matching("Caro Estévez, David"), "caro estevez, david");
        assert_eq!(fold_for_matching("ÉLÉONORE"), "eleonore");
    }

    #[test]
    fn test_fold_output_is_ascii() {
        assert!(fold_to_ascii("蕾拉").is_ascii());
    }
}
