//! External interactions
//!
//! - `api` - blocking HTTP client for the prediction backend
//! - `worker` - background execution of one request at a time
//! - `report` - plain-text forecast export

pub mod api;
pub mod report;
pub mod worker;

pub use api::{ApiClient, ApiError};
pub use worker::{ApiEvent, RequestKind, RequestRunner};
