pub mod names;

pub use names::*;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        names::normalize_name,
        names::format_name,
        names::name_variations,
        names::parse_name,
        names::name_query,
    ),
    components(schemas(
        models::NameRequest,
        models::FormatNameRequest,
        models::NameQueryRequest,
        models::NormalizedNameResponse,
        models::FormattedNameResponse,
        models::NameVariationsResponse,
        models::ParsedNameResponse,
        models::NameQueryResponse,
        crate::name::ParsedName,
    )),
    tags((name = "names", description = "Author name normalization and matching"))
)]
pub struct ApiDoc;

/// Build the application router.
pub fn create_router(constants: SharedConstants) -> Router {
    Router::new()
        .route("/", get(|| async { "Author names API" }))
        .route("/names/normalize", post(normalize_name))
        .route("/names/format", post(format_name))
        .route("/names/variations", post(name_variations))
        .route("/names/parse", post(parse_name))
        .route("/names/query", post(name_query))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(constants)
}
