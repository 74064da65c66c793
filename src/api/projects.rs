/// Project record REST API endpoints
///
/// Provides create, filtered list, read, update and delete for intake
/// projects. Success banners are returned in the response body instead of
/// being held as server-side state.

use crate::{
    api::{
        error::ApiResult,
        extract::{AppJson, AppPath, AppQuery},
    },
    project::{Project, ProjectDraft, ProjectFilter, ProjectRepository, RepositoryError},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Project record repository
    pub repository: ProjectRepository,
}

/// Response for project creation/update operations
#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectResponse {
    pub id: i64,
    pub message: String,
}

/// Response for delete operations
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Number of projects actually removed
    pub deleted: u64,
    pub message: String,
}

/// Response for list operations
#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectListResponse {
    pub projects: Vec<Project>,
}

/// Query parameters for listing; "All" or absent disables a filter
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
}

/// Request body for bulk delete
#[derive(Debug, Deserialize)]
pub struct BulkDeleteRequest {
    pub ids: Vec<i64>,
}

/// Create project management routes
pub fn create_project_routes() -> Router<AppState> {
    Router::new()
        .route("/api/projects", post(create_project).get(list_projects))
        .route(
            "/api/projects/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route("/api/projects/bulk-delete", post(bulk_delete_projects))
}

/// Create a new project
///
/// POST /api/projects
/// Body: { "project_name": "...", "client_name": "...", "owner": "...", "intake_date": "2026-01-31", ... }
async fn create_project(
    State(state): State<AppState>,
    AppJson(draft): AppJson<ProjectDraft>,
) -> ApiResult<(StatusCode, Json<ProjectResponse>)> {
    let id = state.repository.create(&draft).await?;

    Ok((
        StatusCode::CREATED,
        Json(ProjectResponse {
            id,
            message: "Project added successfully.".to_string(),
        }),
    ))
}

/// List projects matching the search and filters
///
/// GET /api/projects?search=acme&status=All&priority=High
async fn list_projects(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListParams>,
) -> ApiResult<Json<ProjectListResponse>> {
    let filter = ProjectFilter::from_params(
        params.search.as_deref(),
        params.status.as_deref(),
        params.priority.as_deref(),
    )?;
    let projects = state.repository.list(&filter).await?;

    Ok(Json(ProjectListResponse { projects }))
}

/// Get a specific project by ID
///
/// GET /api/projects/{id}
async fn get_project(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> ApiResult<Json<Project>> {
    state
        .repository
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| RepositoryError::NotFound(id).into())
}

/// Replace every editable field of a project
///
/// PUT /api/projects/{id}
async fn update_project(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(draft): AppJson<ProjectDraft>,
) -> ApiResult<Json<ProjectResponse>> {
    state.repository.update(id, &draft).await?;

    Ok(Json(ProjectResponse {
        id,
        message: "Project updated successfully.".to_string(),
    }))
}

/// Delete a project; repeating the call is harmless
///
/// DELETE /api/projects/{id}
async fn delete_project(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> ApiResult<Json<DeleteResponse>> {
    let removed = state.repository.delete(id).await?;

    Ok(Json(DeleteResponse {
        deleted: u64::from(removed),
        message: "Project deleted successfully.".to_string(),
    }))
}

/// Delete every selected project
///
/// POST /api/projects/bulk-delete
/// Body: { "ids": [1, 2, 3] }
async fn bulk_delete_projects(
    State(state): State<AppState>,
    AppJson(request): AppJson<BulkDeleteRequest>,
) -> ApiResult<Json<DeleteResponse>> {
    let deleted = state.repository.delete_many(&request.ids).await?;

    Ok(Json(DeleteResponse {
        deleted,
        message: format!("Deleted {} project(s) successfully.", deleted),
    }))
}
