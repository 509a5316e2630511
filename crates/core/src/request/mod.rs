//! Pure request description: sub-path templates, query parameters and URL assembly.
//!
//! Nothing here performs I/O. A request that cannot be described fails with a
//! [`BuildError`] before any connection is opened.

mod error;
mod path;
mod query;
mod url;

pub use error::{BuildError, Result};
pub use path::{resolve_sub_path, PathParams};
pub use query::{QueryParams, QueryValues};
pub use self::url::build_url;
