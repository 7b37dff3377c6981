use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ConnectOptions, Database, DatabaseConnection,
    sqlx::sqlite::{SqliteJournalMode, SqliteSynchronous},
};

use crate::{config::Config, error::AppResult};

/// Connects to the configured store and brings the schema up to date.
///
/// Safe to call against an already-migrated database; existing rows are kept.
pub async fn connect_and_migrate(config: &Config) -> AppResult<DatabaseConnection> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .connect_timeout(config.connect_timeout)
        .sqlx_logging(false)
        .map_sqlx_sqlite_opts(|opts| {
            opts.journal_mode(SqliteJournalMode::Wal).synchronous(SqliteSynchronous::Normal)
        });

    let db = Database::connect(options).await?;

    Migrator::up(&db, None).await?;
    tracing::debug!("schema up to date");
    Ok(db)
}

#[cfg(test)]
pub(crate) mod tests {
    use sea_orm::{
        ConnectionTrait, DatabaseBackend, EntityTrait, PaginatorTrait, Statement, TransactionTrait,
    };
    use tempfile::TempDir;

    use super::*;
    use crate::entities::movie;

    /// Fresh SQLite file in a temp dir; keep the dir alive for the test's duration.
    pub(crate) async fn temp_db() -> (TempDir, DatabaseConnection) {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("movies.db").display());
        let db = connect_and_migrate(&Config::with_database_url(url)).await.unwrap();
        (dir, db)
    }

    #[tokio::test]
    async fn creates_empty_movies_table() {
        let (_dir, db) = temp_db().await;
        assert_eq!(movie::Entity::find().count(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn remigrating_keeps_existing_rows() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("movies.db").display());
        let config = Config::with_database_url(url);

        let db = connect_and_migrate(&config).await.unwrap();
        movie::Entity::insert(movie::ActiveModel::with_title("Kept Across Restarts"))
            .exec(&db)
            .await
            .unwrap();
        db.close().await.unwrap();

        let db = connect_and_migrate(&config).await.unwrap();
        let rows = movie::Entity::find().all(&db).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Kept Across Restarts");

        Migrator::up(&db, None).await.unwrap();
        assert_eq!(movie::Entity::find().count(&db).await.unwrap(), 1);
    }

    async fn pragmas<C: ConnectionTrait>(conn: &C) -> (String, i32) {
        let query = |sql: &str| Statement::from_string(DatabaseBackend::Sqlite, sql.to_string());
        let journal = conn.query_one(query("PRAGMA journal_mode")).await.unwrap().unwrap();
        let sync = conn.query_one(query("PRAGMA synchronous")).await.unwrap().unwrap();
        (journal.try_get_by_index(0).unwrap(), sync.try_get_by_index(0).unwrap())
    }

    #[tokio::test]
    async fn every_pooled_connection_uses_wal_and_normal_sync() {
        let (_dir, db) = temp_db().await;

        // an open transaction pins one connection, so `db` is served by another
        let txn = db.begin().await.unwrap();
        assert_eq!(pragmas(&txn).await, ("wal".to_string(), 1));
        assert_eq!(pragmas(&db).await, ("wal".to_string(), 1));
        txn.commit().await.unwrap();
    }
}
