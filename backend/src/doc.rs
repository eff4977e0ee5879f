//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API: the
//! directory query endpoint plus the health probes. The generated document
//! backs Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::domain::{DomainError, ErrorCode, User};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User directory API",
        description = "Filtered, sorted, size-limited queries over a bundled user dataset."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::query_users,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(User, DomainError, ErrorCode)),
    tags(
        (name = "users", description = "Directory query operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
