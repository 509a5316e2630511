//! Pure Grafana client logic - no I/O, no async, no side effects.
//!
//! This crate provides:
//! - Sub-path templates, multi-valued query parameters and URL assembly
//! - Classification of responses and extraction of Grafana error messages
//! - Typed query parameters for the list and search endpoints
//! - The payload types of the Grafana HTTP API
//!
//! # Example
//!
//! ```
//! use grafana_core::request::{build_url, PathParams, QueryValues};
//! use grafana_core::response::normalize_error;
//! use url::Url;
//!
//! let base = Url::parse("http://localhost:8080").unwrap();
//! let mut params = PathParams::new();
//! params.set("dashboardID", "15");
//! let mut query = QueryValues::new();
//! query.append("tags", "tag1").append("tags", "tag2").append("limit", "100");
//!
//! let url = build_url(&base, "/api", "/dasboard/:dashboardID/snapshot", &params, &query).unwrap();
//! assert_eq!(
//!     url.as_str(),
//!     "http://localhost:8080/api/dasboard/15/snapshot?limit=100&tags=tag1&tags=tag2"
//! );
//!
//! let error = normalize_error(400, br#"[{"message":"invalid role value: admin"}]"#).unwrap();
//! assert_eq!(error.status(), 400);
//! assert_eq!(error.message(), "invalid role value: admin");
//! ```

pub mod query;
pub mod request;
pub mod response;
pub mod serde;
pub mod types;

pub use request::{BuildError, PathParams, QueryParams, QueryValues};
pub use response::ApiError;
