//! Nested author queries for the search index.

use serde_json::{json, Value};

use super::ParsedName;
use crate::query::{wrap_queries, BoolClause};

/// Analyzer for spelled-out given names.
pub const NAMES_ANALYZER: &str = "names_analyzer";
/// Analyzer that reduces given names to initials.
pub const NAMES_INITIALS_ANALYZER: &str = "names_initials_analyzer";

/// A given-name piece as it appears in a query.
enum GivenName<'a> {
    Initial(&'a str),
    Full(&'a str),
}

/// Split a given-name token on inner periods, so glued initials like "D.K."
/// or "D.John" become separate pieces.
fn given_name_pieces(name: &str) -> impl Iterator<Item = GivenName<'_>> {
    name.split_inclusive('.').filter_map(|piece| {
        let value = piece.trim_end_matches('.');
        if value.is_empty() {
            None
        } else if value.chars().count() == 1 || piece.ends_with('.') {
            Some(GivenName::Initial(value))
        } else {
            Some(GivenName::Full(value))
        }
    })
}

impl ParsedName {
    /// Build the nested query matching this name under `field_prefix`
    /// (e.g. "authors" or "first_author").
    ///
    /// The surname must match. Every given name must match too: initials
    /// against `{prefix}.first_name.initials`, full names either as a phrase
    /// prefix or through the initials analyzer of `{prefix}.first_name`.
    /// A lone undotted token is queried as a surname.
    pub fn generate_es_query(&self, field_prefix: &str) -> Value {
        let last_name_field = format!("{}.last_name", field_prefix);

        if let Some(single) = self.single_token().filter(|token| !token.contains('.')) {
            return nested(field_prefix, match_and(&last_name_field, single));
        }

        let first_name_field = format!("{}.first_name", field_prefix);
        let initials_field = format!("{}.first_name.initials", field_prefix);
        let full_name_field = format!("{}.full_name", field_prefix);

        let mut first_name_queries = Vec::new();
        for name in &self.first_list {
            for piece in given_name_pieces(name) {
                let query = match piece {
                    GivenName::Initial(initial) => json!({
                        "match": {
                            initials_field.clone(): {
                                "query": initial,
                                "operator": "AND",
                                "analyzer": NAMES_INITIALS_ANALYZER,
                            }
                        }
                    }),
                    GivenName::Full(full) => {
                        let mut should = vec![
                            json!({
                                "match_phrase_prefix": {
                                    first_name_field.clone(): {
                                        "query": full,
                                        "analyzer": NAMES_ANALYZER,
                                    }
                                }
                            }),
                            json!({
                                "match": {
                                    first_name_field.clone(): {
                                        "query": full,
                                        "operator": "AND",
                                        "analyzer": NAMES_INITIALS_ANALYZER,
                                    }
                                }
                            }),
                        ];
                        if self.maybe_only_last_name {
                            // The re-cased full name, so "john ellis" matches "John Ellis".
                            should.push(match_and(&full_name_field, &self.to_string()));
                        }
                        wrap_queries(should, BoolClause::Should, false)
                    }
                };
                first_name_queries.push(query);
            }
        }

        let query = wrap_queries(
            vec![
                match_and(&last_name_field, &self.last()),
                wrap_queries(first_name_queries, BoolClause::Must, false),
            ],
            BoolClause::Must,
            false,
        );
        nested(field_prefix, query)
    }
}

fn match_and(field: &str, value: &str) -> Value {
    json!({
        "match": {
            field: {
                "query": value,
                "operator": "AND",
            }
        }
    })
}

fn nested(path: &str, query: Value) -> Value {
    json!({
        "nested": {
            "path": path,
            "query": query,
        }
    })
}
