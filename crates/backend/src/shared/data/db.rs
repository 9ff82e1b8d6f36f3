use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

const CREATE_EVENT_TABLE_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS a001_event (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL DEFAULT '',
        date TEXT,
        time TEXT,
        notes TEXT NOT NULL DEFAULT '',
        created_at TEXT,
        updated_at TEXT
    );
"#;

/// Open (or create) the SQLite file and store the global connection.
pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // sqlite URLs want forward slashes and a leading slash before a drive letter
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    tracing::info!("Opening database: {}", absolute_path.display());
    let conn = Database::connect(&db_url).await?;
    bootstrap_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("database already initialized"))?;
    Ok(())
}

/// Minimal schema bootstrap; safe to run on every start.
pub async fn bootstrap_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        CREATE_EVENT_TABLE_SQL.to_string(),
    ))
    .await?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

#[cfg(test)]
pub async fn memory_connection() -> DatabaseConnection {
    let mut opt = sea_orm::ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).sqlx_logging(false);
    let conn = Database::connect(opt).await.unwrap();
    bootstrap_schema(&conn).await.unwrap();
    conn
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bootstrap_is_idempotent() {
        let conn = memory_connection().await;
        bootstrap_schema(&conn).await.unwrap();

        let rows = conn
            .query_all(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT name FROM sqlite_master WHERE type='table' AND name='a001_event';"
                    .to_string(),
            ))
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
    }
}
