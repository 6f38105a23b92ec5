use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, Statement};

use crate::error::AppResult;

const MIGRATION_001: &str = include_str!("../migrations/001_initial.sql");

/// One connection, held for the process lifetime. Also what keeps
/// `sqlite::memory:` coherent: a second pooled connection would see its own
/// empty database.
pub async fn connect_and_migrate(database_url: &str) -> AppResult<DatabaseConnection> {
    let mut opts = ConnectOptions::new(database_url.to_string());
    opts.max_connections(1).min_connections(1);

    let db = Database::connect(opts).await?;

    if db.get_database_backend() == DbBackend::Sqlite {
        db.execute(Statement::from_string(
            db.get_database_backend(),
            "PRAGMA journal_mode=WAL".to_string(),
        ))
        .await?;

        db.execute(Statement::from_string(
            db.get_database_backend(),
            "PRAGMA synchronous=NORMAL".to_string(),
        ))
        .await?;
    }

    run_sql(&db, MIGRATION_001).await?;
    Ok(db)
}

async fn run_sql(db: &DatabaseConnection, sql: &str) -> AppResult<()> {
    for stmt in sql.split(';') {
        let stmt = stmt.trim();
        if stmt.is_empty() {
            continue;
        }
        db.execute(Statement::from_string(db.get_database_backend(), stmt.to_string())).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn migration_is_idempotent() {
        let db = connect_and_migrate("sqlite::memory:").await.unwrap();
        run_sql(&db, MIGRATION_001).await.unwrap();
    }
}
