/// HTTP API Layer
///
/// JSON endpoints a presentation layer calls to manage project records:
/// - Project CRUD and filtered listing
/// - Bulk delete of selected projects
/// - Error-to-status mapping for repository failures

// Project record endpoints (POST/GET/PUT/DELETE)
pub mod projects;

// Error responses for repository and request failures
pub mod error;

// Extractors that report rejections as JSON errors
pub mod extract;

// Re-export router builder
pub use error::{ApiError, ApiResult};
pub use projects::{create_project_routes, AppState};
