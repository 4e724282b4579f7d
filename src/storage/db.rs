use anyhow::Result;
use log::info;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};
use std::path::Path;
use thiserror::Error;

use crate::entities::tag;

/// Failures while opening, initialising or closing the tag database
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to open tag database at {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: DbErr,
    },

    #[error("Failed to initialise tag schema: {0}")]
    Schema(#[source] DbErr),

    #[error("Failed to close tag database: {0}")]
    Close(#[source] DbErr),
}

/// Owner of the tag database connection.
///
/// The connection is opened once and held for the life of the application.
/// Release it with [`TagStore::close`] at shutdown rather than relying on drop.
pub struct TagStore {
    pub(crate) conn: DatabaseConnection,
    url: String,
}

impl TagStore {
    /// Open (creating if needed) the SQLite file at `path`
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let url = format!("sqlite://{}?mode=rwc", path.as_ref().display());
        Self::connect(url).await
    }

    /// Open a private in-memory database
    pub async fn in_memory() -> Result<Self> {
        Self::connect("sqlite::memory:".to_string()).await
    }

    async fn connect(url: String) -> Result<Self> {
        let mut options = ConnectOptions::new(url.clone());
        // A single connection: all access is sequential and in-memory databases
        // are per-connection.
        options.max_connections(1).min_connections(1).sqlx_logging(false);

        let conn = Database::connect(options)
            .await
            .map_err(|source| StoreError::Connect { url: url.clone(), source })?;

        let store = TagStore { conn, url };
        store.init_schema().await?;
        info!("Storage: Opened tag database {}", store.url);

        Ok(store)
    }

    /// Create the `tags` table if it does not exist
    async fn init_schema(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        let mut statement = schema.create_table_from_entity(tag::Entity);
        statement.if_not_exists();

        self.conn
            .execute(backend.build(&statement))
            .await
            .map_err(StoreError::Schema)?;

        Ok(())
    }

    /// Connection URL this store was opened with
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Close the connection. Consumes the store so it cannot be used afterwards.
    pub async fn close(self) -> Result<()> {
        info!("Storage: Closing tag database {}", self.url);
        self.conn.close().await.map_err(StoreError::Close)?;
        Ok(())
    }
}
