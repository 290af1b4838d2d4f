use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::name::ParsedName;

fn default_field_prefix() -> String {
    "authors".to_string()
}

/// Request carrying a single name
#[derive(Debug, Deserialize, ToSchema)]
pub struct NameRequest {
    /// The raw name; must be a JSON string
    #[schema(value_type = String, example = "Ellis, John Richard")]
    pub name: Value,
}

/// Request model for display formatting
#[derive(Debug, Deserialize, ToSchema)]
pub struct FormatNameRequest {
    #[schema(value_type = String, example = "Lieber, Stanley Martin")]
    pub name: Value,
    /// Render given names as dotted initials
    #[serde(default)]
    pub initials_only: bool,
    /// Leave honorific titles out
    #[serde(default)]
    pub without_titles: bool,
}

/// Request model for author query generation
#[derive(Debug, Deserialize, ToSchema)]
pub struct NameQueryRequest {
    #[schema(value_type = String, example = "ellis, john k.")]
    pub name: Value,
    /// Indexed sub-document the query targets (default: "authors")
    #[serde(default = "default_field_prefix")]
    pub field_prefix: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NormalizedNameResponse {
    /// Canonical form, or null for a blank name
    pub normalized: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FormattedNameResponse {
    pub formatted: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NameVariationsResponse {
    /// Lowercase ASCII variations, sorted
    pub variations: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ParsedNameResponse {
    pub parsed: ParsedName,
    /// Canonical form of the parsed name
    pub normalized: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NameQueryResponse {
    /// Search-index query, to be sent as-is
    #[schema(value_type = Object)]
    pub query: Value,
}
