//! User directory backend library.
//!
//! Serves filtered, sorted, size-limited views over a small user dataset
//! loaded once from a bundled CSV resource.

pub mod dataset;
pub mod doc;
pub mod domain;
pub mod inbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
