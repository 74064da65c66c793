/// Project Tracker: single-user project intake tracking
///
/// This library provides the SQLite-backed project record store and the
/// HTTP/JSON API a presentation layer drives it through.

// Core configuration and setup
pub mod config;

// Record management layer - schema, validation, filtering and CRUD
pub mod project;

// HTTP API layer - JSON endpoints over the project repository
pub mod api;

// Server setup and initialization
pub mod server;

// Re-export commonly used types for external consumers
pub use project::{
    Project, ProjectDraft, ProjectFilter, ProjectPriority, ProjectRepository, ProjectStatus,
    RepositoryError,
};
pub use server::start_server;
