//! Mocksmith server modules.

pub mod api;
pub mod cache;
pub mod config;
pub mod doc;
pub mod session;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
