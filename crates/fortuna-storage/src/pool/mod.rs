//! Connection pool managing read/write connections.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use fortuna_core::errors::FortunaResult;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

/// Manages the single write connection and the read connection pool.
pub struct ConnectionPool {
    pub writer: Arc<WriteConnection>,
    pub readers: Option<Arc<ReadPool>>,
    pub db_path: Option<PathBuf>,
}

impl ConnectionPool {
    /// Open the writer for `path`. Readers are attached separately with
    /// [`ConnectionPool::attach_readers`] once the schema exists, since
    /// read-only connections cannot create the database file.
    pub fn open(path: &Path, busy_timeout_ms: u32) -> FortunaResult<Self> {
        let writer = Arc::new(WriteConnection::open(path, busy_timeout_ms)?);
        Ok(Self {
            writer,
            readers: None,
            db_path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory database (for testing). There is no read pool:
    /// separate in-memory connections would each see an empty database.
    pub fn open_in_memory() -> FortunaResult<Self> {
        let writer = Arc::new(WriteConnection::open_in_memory()?);
        Ok(Self {
            writer,
            readers: None,
            db_path: None,
        })
    }

    /// Open `read_pool_size` read-only connections against the database file.
    /// No-op for in-memory pools.
    pub fn attach_readers(&mut self, read_pool_size: usize, busy_timeout_ms: u32) -> FortunaResult<()> {
        if let Some(path) = &self.db_path {
            let readers = ReadPool::open(path, read_pool_size, busy_timeout_ms)?;
            self.readers = Some(Arc::new(readers));
        }
        Ok(())
    }
}
