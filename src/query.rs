//! Helpers for composing search-engine boolean queries.

use serde_json::{json, Map, Value};

/// Boolean occurrence used when wrapping clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolClause {
    /// Every clause must match (`bool.must`).
    Must,
    /// Any clause may match (`bool.should`).
    Should,
}

impl BoolClause {
    pub fn as_str(self) -> &'static str {
        match self {
            BoolClause::Must => "must",
            BoolClause::Should => "should",
        }
    }
}

/// The empty query, `{}`.
pub fn empty_query() -> Value {
    Value::Object(Map::new())
}

/// Whether `query` is the empty `{}` (or null) placeholder.
pub fn is_empty_query(query: &Value) -> bool {
    match query {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Wrap `queries` in a `bool.{must,should}` clause when there is more than one.
///
/// No queries gives `{}`. A single query is returned unwrapped unless
/// `force_wrap` is set. Empty queries are dropped before counting.
pub fn wrap_queries(queries: Vec<Value>, clause: BoolClause, force_wrap: bool) -> Value {
    let mut queries: Vec<Value> = queries.into_iter().filter(|q| !is_empty_query(q)).collect();

    if queries.is_empty() {
        return empty_query();
    }

    if queries.len() == 1 && !force_wrap {
        return queries.remove(0);
    }

    json!({ "bool": { clause.as_str(): queries } })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_queries_gives_empty() {
        assert_eq!(wrap_queries(vec![], BoolClause::Must, false), json!({}));
        assert_eq!(wrap_queries(vec![json!({})], BoolClause::Must, true), json!({}));
    }

    #[test]
    fn test_single_query_is_unwrapped() {
        let query = json!({"match": {"title": "higgs"}});
        assert_eq!(wrap_queries(vec![query.clone()], BoolClause::Should, false), query);
    }

    #[test]
    fn test_single_query_forced_wrap() {
        let query = json!({"match": {"title": "higgs"}});
        assert_eq!(
            wrap_queries(vec![query.clone()], BoolClause::Must, true),
            json!({"bool": {"must": [query]}})
        );
    }

    #[test]
    fn test_many_queries_drop_empty_ones() {
        let a = json!({"match": {"a": 1}});
        let b = json!({"match": {"b": 2}});
        assert_eq!(
            wrap_queries(vec![a.clone(), json!({}), b.clone()], BoolClause::Should, false),
            json!({"bool": {"should": [a, b]}})
        );
    }

    #[test]
    fn test_empty_filtered_down_to_one_is_unwrapped() {
        let a = json!({"match": {"a": 1}});
        assert_eq!(wrap_queries(vec![json!({}), a.clone()], BoolClause::Must, false), a);
    }
}
