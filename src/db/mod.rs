//! # PQP Storage Access
//!
//! Thin accessor over a PQP spectral library (an SQLite file). One
//! [`PqpDatabase`] owns exactly one connection for its whole lifetime; the
//! connection is closed when the accessor is dropped or explicitly
//! [`close`](PqpDatabase::close)d.
//!
//! ## Example
//!
//! ```rust,no_run
//! use pqpstat::db::PqpDatabase;
//!
//! let db = PqpDatabase::open("library.pqp")?;
//! let rows = db.execute_query("SELECT protein_accession FROM protein WHERE decoy = ?1", [0])?;
//! println!("{} target proteins", rows.len());
//! # Ok::<(), pqpstat::db::PqpError>(())
//! ```

mod config;
mod error;
mod patch;
mod schema;


pub use config::DatabaseConfig;
pub use error::PqpError;
pub use patch::PatchReport;
pub use schema::{tables, REQUIRED_COLUMNS, REQUIRED_TABLES};

use std::path::{Path, PathBuf};

use log::debug;
use rusqlite::types::{FromSql, Value};
use rusqlite::{Connection, OpenFlags, Params};

/// A single result row, one dynamically typed value per column
pub type Row = Vec<Value>;

/// Connection to a PQP library file
pub struct PqpDatabase {
    conn: Connection,
    path: PathBuf,
}

impl PqpDatabase {
    /// Open an existing PQP file for reading and writing
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PqpError> {
        Self::open_with_config(path, DatabaseConfig::default())
    }

    /// Open an existing PQP file with custom configuration
    ///
    /// The file is never created: a missing path fails with
    /// [`PqpError::NotFound`].
    pub fn open_with_config<P: AsRef<Path>>(
        path: P,
        config: DatabaseConfig,
    ) -> Result<Self, PqpError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(PqpError::NotFound(path.to_path_buf()));
        }

        let access = if config.read_only {
            OpenFlags::SQLITE_OPEN_READ_ONLY
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE
        };
        let conn = Connection::open_with_flags(path, access | OpenFlags::SQLITE_OPEN_NO_MUTEX)?;
        conn.busy_timeout(config.busy_timeout)?;

        debug!(
            "Opened PQP library {} (read_only: {})",
            path.display(),
            config.read_only
        );

        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    /// Wrap an already open connection (e.g. an in-memory database)
    pub fn from_connection(conn: Connection) -> Self {
        let path = conn
            .path()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(":memory:"));
        Self { conn, path }
    }

    /// Path of the underlying database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Borrow the raw SQLite connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Run a statement with positional parameters and return every row
    ///
    /// Pass `[]` when the statement has no parameters. Write statements
    /// return an empty row list and are committed immediately.
    pub fn execute_query<P: Params>(&self, sql: &str, params: P) -> Result<Vec<Row>, PqpError> {
        debug!("Executing query: {}", sql.trim());

        let mut stmt = self.conn.prepare(sql)?;
        let column_count = stmt.column_count();
        let mut rows = stmt.query(params)?;

        let mut result = Vec::new();
        while let Some(row) = rows.next()? {
            let values = (0..column_count)
                .map(|i| row.get::<_, Value>(i))
                .collect::<Result<Row, _>>()?;
            result.push(values);
        }

        Ok(result)
    }

    /// Run a query and collect its first column as typed values
    pub fn query_column<T: FromSql, P: Params>(
        &self,
        sql: &str,
        params: P,
    ) -> Result<Vec<T>, PqpError> {
        self.query_map(sql, params, |row| row.get(0))
    }

    /// Run a query and map each row through `f`
    pub fn query_map<T, P, F>(&self, sql: &str, params: P, f: F) -> Result<Vec<T>, PqpError>
    where
        P: Params,
        F: FnMut(&rusqlite::Row<'_>) -> rusqlite::Result<T>,
    {
        debug!("Executing query: {}", sql.trim());

        let mut stmt = self.conn.prepare(sql)?;
        let values = stmt.query_map(params, f)?.collect::<Result<Vec<T>, _>>()?;
        Ok(values)
    }

    /// Run a query expected to return exactly one row and read its first column
    pub fn query_scalar<T: FromSql, P: Params>(&self, sql: &str, params: P) -> Result<T, PqpError> {
        debug!("Executing query: {}", sql.trim());
        Ok(self.conn.query_row(sql, params, |row| row.get(0))?)
    }

    /// Close the connection, reporting any error SQLite raises while doing so
    pub fn close(self) -> Result<(), PqpError> {
        debug!("Closing PQP library {}", self.path.display());
        self.conn.close().map_err(|(_, e)| PqpError::Sqlite(e))
    }
}
