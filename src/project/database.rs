/// SQLite database setup for the project tracker
///
/// Opens (or creates) the database file and brings the `projects` schema up
/// to date. Every statement is idempotent, so this runs on each process start.

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use std::path::Path;

/// Timestamp expression shared by the column defaults and the update trigger.
/// UTC with millisecond precision.
pub const NOW_EXPR: &str = "strftime('%Y-%m-%d %H:%M:%f', 'now')";

/// Open the database at `path` and initialize its schema
///
/// Creates the parent directory and the database file when missing.
pub async fn connect(path: &Path) -> Result<SqlitePool> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!("Failed to create database directory '{}': {}", parent.display(), e)
        })?;
    }

    tracing::info!("🗄️ Opening project database: {}", path.display());

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(options).await?;

    init_schema(&pool).await?;

    tracing::info!("✅ Project database ready: {}", path.display());

    Ok(pool)
}

/// Create the `projects` table, its triggers and its index if absent
///
/// Status/priority/budget are constrained by CHECKs so the table rejects
/// invalid rows even when written around the repository.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS projects (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            project_name TEXT NOT NULL,
            client_name TEXT NOT NULL,
            owner TEXT NOT NULL,
            status TEXT NOT NULL CHECK (status IN ('New', 'In Progress', 'On Hold', 'Completed', 'Cancelled')),
            priority TEXT NOT NULL CHECK (priority IN ('Low', 'Medium', 'High', 'Urgent')),
            intake_date TEXT NOT NULL,
            due_date TEXT,
            budget REAL CHECK (budget IS NULL OR budget >= 0),
            notes TEXT,
            created_at TEXT NOT NULL DEFAULT ({now}),
            updated_at TEXT NOT NULL DEFAULT ({now})
        )
        "#,
        now = NOW_EXPR
    ))
    .execute(pool)
    .await?;

    // Recreated on every start so databases created with an older trigger
    // body pick up the current one. The new stamp is at least 1ms past the
    // old one, so updated_at strictly increases even within one millisecond.
    // Recursive triggers are off by default, so the inner UPDATE does not refire this.
    let mut tx = pool.begin().await?;
    sqlx::query("DROP TRIGGER IF EXISTS trg_projects_updated_at")
        .execute(&mut *tx)
        .await?;
    sqlx::query(&format!(
        r#"
        CREATE TRIGGER trg_projects_updated_at
        AFTER UPDATE ON projects
        FOR EACH ROW
        BEGIN
            UPDATE projects
            SET updated_at = MAX(
                {now},
                strftime('%Y-%m-%d %H:%M:%f', julianday(OLD.updated_at) + 0.001 / 86400.0)
            )
            WHERE id = OLD.id;
        END
        "#,
        now = NOW_EXPR
    ))
    .execute(&mut *tx)
    .await?;
    tx.commit().await?;

    sqlx::query(
        r#"
        CREATE TRIGGER IF NOT EXISTS trg_projects_immutable
        BEFORE UPDATE OF id, created_at ON projects
        FOR EACH ROW
        WHEN NEW.id IS NOT OLD.id OR NEW.created_at IS NOT OLD.created_at
        BEGIN
            SELECT RAISE(ABORT, 'id and created_at are immutable');
        END
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_projects_intake ON projects(intake_date DESC, id DESC)",
    )
    .execute(pool)
    .await?;

    tracing::debug!("📋 Project schema initialized");

    Ok(())
}
