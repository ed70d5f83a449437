//! Transactional store over the connection pool.

use std::sync::Arc;

use bond_recommender_core::store::{Store, StoreTx};
use bond_recommender_core::Result;
use diesel::connection::{AnsiTransactionManager, TransactionManager};
use diesel::SqliteConnection;
use log::warn;

use crate::db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool};
use crate::errors::IntoCore;

/// SQLite implementation of [`Store`].
#[derive(Clone)]
pub struct SqliteStore {
    pool: Arc<DbPool>,
}

impl SqliteStore {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Opens the database at `db_path`, creating it and applying pending migrations.
    pub fn open(db_path: &str) -> Result<Self> {
        init(db_path)?;
        let pool = create_pool(db_path)?;
        run_migrations(&pool)?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &Arc<DbPool> {
        &self.pool
    }
}

impl Store for SqliteStore {
    fn begin(&self) -> Result<Box<dyn StoreTx>> {
        let conn = get_connection(&self.pool)?;
        Ok(Box::new(SqliteTx::begin(conn, "BEGIN IMMEDIATE")?))
    }

    fn read(&self) -> Result<Box<dyn StoreTx>> {
        let conn = get_connection(&self.pool)?;
        Ok(Box::new(SqliteTx::begin(conn, "BEGIN")?))
    }
}

/// One pooled connection inside an open transaction.
///
/// The repository traits are implemented for this type in the per-entity
/// modules. Dropped without [`StoreTx::commit`], the transaction rolls back.
pub struct SqliteTx {
    conn: DbConnection,
    committed: bool,
}

impl SqliteTx {
    fn begin(mut conn: DbConnection, sql: &str) -> Result<Self> {
        AnsiTransactionManager::begin_transaction_sql(&mut *conn, sql).into_core()?;
        Ok(Self {
            conn,
            committed: false,
        })
    }

    pub(crate) fn conn(&mut self) -> &mut SqliteConnection {
        &mut self.conn
    }
}

impl StoreTx for SqliteTx {
    fn commit(mut self: Box<Self>) -> Result<()> {
        AnsiTransactionManager::commit_transaction(&mut *self.conn).into_core()?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for SqliteTx {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        if let Err(e) = AnsiTransactionManager::rollback_transaction(&mut *self.conn) {
            warn!("Failed to roll back transaction: {}", e);
        }
    }
}
