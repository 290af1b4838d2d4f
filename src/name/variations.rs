//! Name variations for exact author matching.
//!
//! Both indexed author names and user input are expanded into the same
//! lowercase ASCII space, so that "Ellis, J R", "john richard ellis" and
//! "Ellis, John Richard" meet on a shared variation.

use std::collections::BTreeSet;

use itertools::{iproduct, Itertools};
use tracing::warn;

use super::ParsedName;
use crate::config::{NameConstants, LASTNAME_NON_LASTNAME_SEPARATORS};
use crate::error::NameError;
use crate::utils::fold_for_matching;

/// Above this many surname or non-surname tokens the combinatorial expansion
/// is skipped. Such input is almost always several authors in one field.
pub const NAMES_MAX_NUMBER_THRESHOLD: usize = 5;

/// Generate the variations of `raw` with the shared default constants.
///
/// # Examples
///
/// ```
/// use authornames::name::generate_name_variations;
///
/// let variations = generate_name_variations("Smith, J").unwrap();
/// assert_eq!(variations, vec!["j smith", "j, smith", "smith", "smith j", "smith, j"]);
/// ```
pub fn generate_name_variations(raw: &str) -> Result<Vec<String>, NameError> {
    generate_name_variations_with(raw, NameConstants::shared())
}

/// Generate the variations of `raw`, returned sorted.
///
/// Every given name (and suffix) is dropped, reduced to its first character
/// or kept whole; every combination is paired with every surname variation
/// in both orders, separated by a space or a comma. Results are folded to
/// lowercase ASCII. Input with more than [`NAMES_MAX_NUMBER_THRESHOLD`]
/// tokens on either side is returned unchanged as the only variation.
pub fn generate_name_variations_with(
    raw: &str,
    constants: &NameConstants,
) -> Result<Vec<String>, NameError> {
    let parsed_name = ParsedName::loads_with(raw, constants)?;

    if let Some(single) = parsed_name.single_token() {
        return Ok(vec![fold_for_matching(single)]);
    }

    let non_lastnames: Vec<&String> = parsed_name
        .first_list
        .iter()
        .chain(&parsed_name.suffix_list)
        .filter(|name| !name.is_empty())
        .collect();

    if non_lastnames.len() > NAMES_MAX_NUMBER_THRESHOLD
        || parsed_name.last_list.len() > NAMES_MAX_NUMBER_THRESHOLD
    {
        warn!(name = %raw, "Skipping name variations generation - too many names");
        return Ok(vec![raw.to_string()]);
    }

    let non_lastnames_variations = non_lastnames_variations(&non_lastnames);
    let lastnames_variations = lastnames_variations(&parsed_name.last_list);

    let mut name_variations = BTreeSet::new();
    // Surname first, then surname last.
    let pairs = iproduct!(&lastnames_variations, &non_lastnames_variations)
        .chain(iproduct!(&non_lastnames_variations, &lastnames_variations));
    for (a, b) in pairs {
        for separator in LASTNAME_NON_LASTNAME_SEPARATORS {
            let variation = format!("{}{}{}", a, separator, b);
            let variation = variation.trim_matches(|c: char| c == ' ' || c == ',');
            name_variations.insert(fold_for_matching(variation));
        }
    }

    Ok(name_variations.into_iter().collect())
}

/// Every drop/initial/full combination of the given names.
///
/// For "John Richard" this yields "", "R", "Richard", "J", "J R",
/// "J Richard", "John", "John R" and "John Richard". With no given names the
/// only combination is the empty one.
fn non_lastnames_variations(non_lastnames: &[&String]) -> Vec<String> {
    if non_lastnames.is_empty() {
        return vec![String::new()];
    }

    non_lastnames
        .iter()
        .map(|name| {
            let initial = name.chars().next().map(String::from).unwrap_or_default();
            vec![String::new(), initial, name.to_string()]
        })
        .multi_cartesian_product()
        .map(|choice| choice.iter().filter(|part| !part.is_empty()).join(" "))
        .collect()
}

/// Each dash-split surname on its own, plus all of them joined when there
/// is more than one: "Caro-Estevez Martinez" yields "Caro", "Estevez",
/// "Martinez" and "Caro Estevez Martinez".
fn lastnames_variations(lastnames: &[String]) -> Vec<String> {
    let split_lastnames: Vec<&str> = lastnames
        .iter()
        .flat_map(|lastname| lastname.split('-'))
        .filter(|lastname| !lastname.is_empty())
        .collect();

    let mut variations: Vec<String> = split_lastnames
        .iter()
        .unique()
        .map(|lastname| lastname.to_string())
        .collect();
    if split_lastnames.len() > 1 {
        variations.push(split_lastnames.join(" "));
    }

    variations
}
