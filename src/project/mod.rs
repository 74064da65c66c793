/// Project record management
///
/// Holds the intake record types, the SQLite schema setup, and the repository
/// that callers use to create, list, update and delete projects.

pub mod database;
pub mod error;
pub mod repository;
pub mod types;

pub use error::{RepositoryError, RepositoryResult};
pub use repository::ProjectRepository;
pub use types::{Project, ProjectDraft, ProjectFilter, ProjectPriority, ProjectStatus};
