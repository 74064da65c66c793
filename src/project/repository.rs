/// Record repository for intake projects
///
/// Create/read/list/update/delete over the `projects` table. Each call borrows
/// one pooled connection and returns it when done; bulk delete holds it for
/// one transaction.

use crate::project::{
    error::{RepositoryError, RepositoryResult},
    types::{Project, ProjectDraft, ProjectFilter, ProjectPriority, ProjectStatus, ValidProject},
};
use chrono::{NaiveDate, NaiveDateTime};
use sqlx::{sqlite::SqlitePool, QueryBuilder, Sqlite};

/// Column list shared across queries
const COLUMNS: &str = "id, project_name, client_name, owner, status, priority, \
     intake_date, due_date, budget, notes, created_at, updated_at";

/// Ids bound per statement in bulk deletes
const DELETE_CHUNK_SIZE: usize = 500;

/// SQLite-backed project repository
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    /// Create a repository over an initialized database pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Validate and insert a new project, returning its assigned id
    ///
    /// `created_at` and `updated_at` are stamped by the column defaults.
    pub async fn create(&self, draft: &ProjectDraft) -> RepositoryResult<i64> {
        let project = validated(draft)?;

        let result = sqlx::query(
            r#"
            INSERT INTO projects (
                project_name, client_name, owner, status, priority,
                intake_date, due_date, budget, notes
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&project.project_name)
        .bind(&project.client_name)
        .bind(&project.owner)
        .bind(project.status.as_str())
        .bind(project.priority.as_str())
        .bind(project.intake_date)
        .bind(project.due_date)
        .bind(project.budget)
        .bind(&project.notes)
        .execute(&self.pool)
        .await
        .inspect_err(|e| tracing::error!("Failed to insert project: {}", e))?;

        let id = result.last_insert_rowid();
        tracing::info!("➕ Created project {} ({})", id, project.project_name);

        Ok(id)
    }

    /// Fetch a project by id; `None` when it does not exist
    pub async fn get(&self, id: i64) -> RepositoryResult<Option<Project>> {
        let row = sqlx::query_as::<_, ProjectRow>(&format!(
            "SELECT {COLUMNS} FROM projects WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        tracing::debug!("🔍 Lookup project {}: found={}", id, row.is_some());

        row.map(Project::try_from).transpose()
    }

    /// List projects matching every criterion in `filter`
    ///
    /// Ordered by intake date, newest first; projects sharing an intake date
    /// are ordered by id, highest first.
    pub async fn list(&self, filter: &ProjectFilter) -> RepositoryResult<Vec<Project>> {
        let mut query =
            QueryBuilder::<Sqlite>::new(format!("SELECT {COLUMNS} FROM projects WHERE 1=1"));

        if !filter.search.is_empty() {
            let pattern = like_pattern(&filter.search);
            query.push(" AND (");
            for (i, column) in ["project_name", "client_name", "owner"].iter().enumerate() {
                if i > 0 {
                    query.push(" OR ");
                }
                query
                    .push(*column)
                    .push(" LIKE ")
                    .push_bind(pattern.clone())
                    .push(" ESCAPE '\\'");
            }
            query.push(")");
        }

        if let Some(status) = filter.status {
            query.push(" AND status = ").push_bind(status.as_str());
        }

        if let Some(priority) = filter.priority {
            query.push(" AND priority = ").push_bind(priority.as_str());
        }

        query.push(" ORDER BY intake_date DESC, id DESC");

        let rows = query
            .build_query_as::<ProjectRow>()
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!("📋 Listed {} projects for {:?}", rows.len(), filter);

        rows.into_iter().map(Project::try_from).collect()
    }

    /// Replace every mutable field of an existing project
    ///
    /// Fails with `NotFound` when no row has `id`; `updated_at` is refreshed
    /// by the table trigger.
    pub async fn update(&self, id: i64, draft: &ProjectDraft) -> RepositoryResult<()> {
        let project = validated(draft)?;

        let result = sqlx::query(
            r#"
            UPDATE projects
            SET project_name = ?,
                client_name = ?,
                owner = ?,
                status = ?,
                priority = ?,
                intake_date = ?,
                due_date = ?,
                budget = ?,
                notes = ?
            WHERE id = ?
            "#,
        )
        .bind(&project.project_name)
        .bind(&project.client_name)
        .bind(&project.owner)
        .bind(project.status.as_str())
        .bind(project.priority.as_str())
        .bind(project.intake_date)
        .bind(project.due_date)
        .bind(project.budget)
        .bind(&project.notes)
        .bind(id)
        .execute(&self.pool)
        .await
        .inspect_err(|e| tracing::error!("Failed to update project {}: {}", id, e))?;

        if result.rows_affected() == 0 {
            tracing::warn!("Update skipped, project {} does not exist", id);
            return Err(RepositoryError::NotFound(id));
        }

        tracing::info!("✏️ Updated project {} ({})", id, project.project_name);

        Ok(())
    }

    /// Hard-delete a project; returns whether a row was removed
    ///
    /// Deleting an id that does not exist is not an error.
    pub async fn delete(&self, id: i64) -> RepositoryResult<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let removed = result.rows_affected() > 0;
        tracing::info!("🗑️ Delete project {}: removed={}", id, removed);

        Ok(removed)
    }

    /// Delete several projects atomically; returns how many were removed
    ///
    /// Ids are bound in chunks so large selections stay under SQLite's
    /// bound-parameter limit; all chunks commit or none do.
    pub async fn delete_many(&self, ids: &[i64]) -> RepositoryResult<u64> {
        if ids.is_empty() {
            return Err(RepositoryError::Validation(
                "select at least one project to delete".to_string(),
            ));
        }

        let mut tx = self.pool.begin().await?;
        let mut removed = 0;

        for chunk in ids.chunks(DELETE_CHUNK_SIZE) {
            let mut query = QueryBuilder::<Sqlite>::new("DELETE FROM projects WHERE id IN (");
            let mut separated = query.separated(", ");
            for id in chunk {
                separated.push_bind(*id);
            }
            separated.push_unseparated(")");

            removed += query.build().execute(&mut *tx).await?.rows_affected();
        }

        tx.commit().await?;
        tracing::info!("🗑️ Bulk delete of {} ids removed {} projects", ids.len(), removed);

        Ok(removed)
    }
}

fn validated(draft: &ProjectDraft) -> RepositoryResult<ValidProject> {
    draft
        .validate()
        .inspect_err(|e| tracing::warn!("Rejected project input: {}", e))
}

/// Turn a search term into a LIKE pattern that matches it as a literal substring
fn like_pattern(search: &str) -> String {
    let mut pattern = String::with_capacity(search.len() + 2);
    pattern.push('%');
    for ch in search.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Raw row shape; enums are parsed when converting into [`Project`]
#[derive(Debug, sqlx::FromRow)]
struct ProjectRow {
    id: i64,
    project_name: String,
    client_name: String,
    owner: String,
    status: String,
    priority: String,
    intake_date: NaiveDate,
    due_date: Option<NaiveDate>,
    budget: Option<f64>,
    notes: Option<String>,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl TryFrom<ProjectRow> for Project {
    type Error = RepositoryError;

    fn try_from(row: ProjectRow) -> Result<Self, Self::Error> {
        let decode = |e: RepositoryError| RepositoryError::Storage(sqlx::Error::Decode(Box::new(e)));

        Ok(Project {
            id: row.id,
            project_name: row.project_name,
            client_name: row.client_name,
            owner: row.owner,
            status: row.status.parse::<ProjectStatus>().map_err(decode)?,
            priority: row.priority.parse::<ProjectPriority>().map_err(decode)?,
            intake_date: row.intake_date,
            due_date: row.due_date,
            budget: row.budget,
            notes: row.notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::like_pattern;

    #[test]
    fn like_pattern_wraps_term_in_wildcards() {
        assert_eq!(like_pattern("acme"), "%acme%");
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("50%_off\\"), "%50\\%\\_off\\\\%");
    }
}
