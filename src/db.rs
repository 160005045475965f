use std::path::{Path, PathBuf};

use anyhow::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};
use tokio::fs;

pub const MIGRATIONS_DIR: &str = "migrations";

pub async fn create_orm_conn(database_url: &str) -> Result<DatabaseConnection> {
    let conn = Database::connect(database_url).await?;
    Ok(conn)
}

/// Applies the `NNNN_*.sql` scripts under `dir` in numeric order and returns
/// how many were run. Every script creates its tables and indexes with
/// `IF NOT EXISTS`, so `seed` can call this on each start.
pub async fn run_migrations(conn: &DatabaseConnection, dir: impl AsRef<Path>) -> Result<usize> {
    let mut entries = fs::read_dir(dir.as_ref()).await?;
    let mut files: Vec<PathBuf> = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "sql") {
            files.push(path);
        }
    }
    files.sort();

    let backend = conn.get_database_backend();
    for file in &files {
        tracing::debug!(file = %file.display(), "applying migration");
        let sql = fs::read_to_string(file).await?;
        // One CREATE per statement; the scripts hold no semicolons in literals.
        for stmt in sql.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            conn.execute(Statement::from_string(backend, format!("{stmt};")))
                .await?;
        }
    }

    Ok(files.len())
}
