//! Payloads exchanged with the Grafana HTTP API.
//!
//! Response types derive `Default` and decode with `#[serde(default)]` so that
//! fields missing from older Grafana versions do not fail the whole response.

mod acl;
mod admin;
mod alert;
mod alert_notification;
mod annotation;
mod dashboard;
mod datasource;
mod folder;
mod key;
mod org;
mod playlist;
mod search;
mod snapshot;
mod team;
mod user;

pub use acl::*;
pub use admin::*;
pub use alert::*;
pub use alert_notification::*;
pub use annotation::*;
pub use dashboard::*;
pub use datasource::*;
pub use folder::*;
pub use key::*;
pub use org::*;
pub use playlist::*;
pub use search::*;
pub use snapshot::*;
pub use team::*;
pub use user::*;
