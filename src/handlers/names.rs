use std::sync::Arc;

use axum::{extract::State, Json};

use crate::config::NameConstants;
use crate::error::NameError;
use crate::models::{
    FormatNameRequest, FormattedNameResponse, NameQueryRequest, NameQueryResponse, NameRequest,
    NameVariationsResponse, NormalizedNameResponse, ParsedNameResponse,
};
use crate::name::{generate_name_variations_with, NameInput, ParsedName};

/// Name constants shared by all handlers.
pub type SharedConstants = Arc<NameConstants>;

#[utoipa::path(
    post,
    path = "/names/normalize",
    tag = "names",
    request_body = NameRequest,
    responses(
        (status = 200, description = "Canonical name, null for a blank name", body = NormalizedNameResponse),
        (status = 400, description = "Name is not a string")
    )
)]
pub async fn normalize_name(
    State(constants): State<SharedConstants>,
    Json(request): Json<NameRequest>,
) -> Result<Json<NormalizedNameResponse>, NameError> {
    let input = NameInput::try_from(&request.name)?;

    let normalized = match ParsedName::from_input(input, &constants) {
        Ok(name) => Some(name.dumps()),
        Err(NameError::EmptyInput) => None,
        Err(e) => return Err(e),
    };

    Ok(Json(NormalizedNameResponse { normalized }))
}

#[utoipa::path(
    post,
    path = "/names/format",
    tag = "names",
    request_body = FormatNameRequest,
    responses(
        (status = 200, description = "Display form of the name", body = FormattedNameResponse),
        (status = 400, description = "Name is not a string or is blank")
    )
)]
pub async fn format_name(
    State(constants): State<SharedConstants>,
    Json(request): Json<FormatNameRequest>,
) -> Result<Json<FormattedNameResponse>, NameError> {
    let input = NameInput::try_from(&request.name)?;
    let name = ParsedName::from_input(input, &constants)?;

    Ok(Json(FormattedNameResponse {
        formatted: name.pprint(request.initials_only, request.without_titles),
    }))
}

#[utoipa::path(
    post,
    path = "/names/variations",
    tag = "names",
    request_body = NameRequest,
    responses(
        (status = 200, description = "Name variations for exact matching", body = NameVariationsResponse),
        (status = 400, description = "Name is not a string or is blank")
    )
)]
pub async fn name_variations(
    State(constants): State<SharedConstants>,
    Json(request): Json<NameRequest>,
) -> Result<Json<NameVariationsResponse>, NameError> {
    let raw = NameInput::try_from(&request.name)?.into_raw_text();
    let variations = generate_name_variations_with(&raw, &constants)?;

    Ok(Json(NameVariationsResponse { variations }))
}

#[utoipa::path(
    post,
    path = "/names/parse",
    tag = "names",
    request_body = NameRequest,
    responses(
        (status = 200, description = "Parsed name structure", body = ParsedNameResponse),
        (status = 400, description = "Name is not a string or is blank")
    )
)]
pub async fn parse_name(
    State(constants): State<SharedConstants>,
    Json(request): Json<NameRequest>,
) -> Result<Json<ParsedNameResponse>, NameError> {
    let input = NameInput::try_from(&request.name)?;
    let parsed = ParsedName::from_input(input, &constants)?;
    let normalized = parsed.dumps();

    Ok(Json(ParsedNameResponse { parsed, normalized }))
}

#[utoipa::path(
    post,
    path = "/names/query",
    tag = "names",
    request_body = NameQueryRequest,
    responses(
        (status = 200, description = "Nested author query", body = NameQueryResponse),
        (status = 400, description = "Name is not a string or is blank")
    )
)]
pub async fn name_query(
    State(constants): State<SharedConstants>,
    Json(request): Json<NameQueryRequest>,
) -> Result<Json<NameQueryResponse>, NameError> {
    let input = NameInput::try_from(&request.name)?;
    let name = ParsedName::from_input(input, &constants)?;

    Ok(Json(NameQueryResponse {
        query: name.generate_es_query(&request.field_prefix),
    }))
}
