//! Append-only SQLite log of served quotes.
//!
//! Each `QuoteStore::save` call opens its own connection, checks it is alive with
//! `SELECT 1`, inserts the bid into `quotes(value)` and closes the connection again.
//! No connection is shared between requests.
//!
//! rusqlite is blocking, so the whole sequence runs on the blocking thread pool and is
//! bounded by `tokio::time::timeout`. The insert happens inside a transaction whose
//! commit races the deadline through a shared `Deadline`: either the job claims the
//! commit first, or the caller expires it, interrupts the connection and reports
//! `QuoteError::Timeout`, and the transaction is rolled back. A reported timeout never
//! leaves a row behind.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::debug;
use quote_common::net::hop;
use quote_common::{QuoteError, Result};
use rusqlite::{Connection, InterruptHandle, OpenFlags, params};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS quotes (value TEXT)";
const PING: &str = "SELECT 1";
const INSERT_QUOTE: &str = "INSERT INTO quotes(value) VALUES(?1)";

/// SQLite keeps retrying a locked database for this multiple of the deadline, so lock
/// contention ends in the deadline branch rather than as `SQLITE_BUSY`.
const BUSY_FACTOR: u32 = 2;

const PENDING: u8 = 0;
const COMMITTING: u8 = 1;
const EXPIRED: u8 = 2;

/// Outcome shared between a blocking insert job and the task waiting on it.
#[derive(Default)]
struct Deadline {
    state: AtomicU8,
    interrupt: Mutex<Option<InterruptHandle>>,
}

impl Deadline {
    /// Remember how to interrupt the job's connection.
    fn register(&self, handle: InterruptHandle) {
        if let Ok(mut slot) = self.interrupt.lock() {
            *slot = Some(handle);
        }
    }

    fn is_expired(&self) -> bool {
        self.state.load(Ordering::SeqCst) == EXPIRED
    }

    /// Called by the job right before commit. `false` means the caller gave up.
    fn try_commit(&self) -> bool {
        self.state
            .compare_exchange(PENDING, COMMITTING, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Called by the caller when the deadline passes. `false` means the commit is
    /// already under way and its result must be awaited.
    fn expire(&self) -> bool {
        let expired = self
            .state
            .compare_exchange(PENDING, EXPIRED, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok();
        if expired {
            if let Ok(slot) = self.interrupt.lock() {
                if let Some(handle) = slot.as_ref() {
                    handle.interrupt();
                }
            }
        }
        expired
    }
}

/// Handle on the quote database. Cheap to clone; holds no open connection.
#[derive(Debug, Clone)]
pub struct QuoteStore {
    path: PathBuf,
    timeout: Duration,
}

impl QuoteStore {
    /// Create a handle for the database at `path` with the given deadline.
    pub fn new(path: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            path: path.into(),
            timeout,
        }
    }

    /// Location of the database.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the `quotes` table if it is missing.
    pub fn init_schema(&self) -> Result<()> {
        let conn = open(&self.path, self.timeout)?;
        conn.execute(CREATE_TABLE, [])
            .map_err(|e| QuoteError::Storage(format!("failed to create quotes table: {}", e)))?;
        Ok(())
    }

    /// Persist `bid` as a new record, within the store deadline.
    pub async fn save(&self, bid: &str) -> Result<()> {
        let path = self.path.clone();
        let timeout = self.timeout;
        let bid = bid.to_string();
        let deadline = Arc::new(Deadline::default());
        let job_deadline = Arc::clone(&deadline);
        let mut job =
            tokio::task::spawn_blocking(move || insert(&path, timeout, &bid, &job_deadline));

        let waited = tokio::time::timeout(self.timeout, &mut job).await;
        match waited {
            Ok(joined) => flatten(joined),
            Err(_) if deadline.expire() => Err(QuoteError::timeout(hop::STORE, self.timeout)),
            Err(_) => flatten(job.await),
        }
    }
}

fn flatten(joined: std::result::Result<Result<()>, tokio::task::JoinError>) -> Result<()> {
    joined.unwrap_or_else(|e| Err(QuoteError::Storage(format!("store task failed: {}", e))))
}

fn open(path: &Path, timeout: Duration) -> Result<Connection> {
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
        | OpenFlags::SQLITE_OPEN_CREATE
        | OpenFlags::SQLITE_OPEN_URI
        | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let conn = Connection::open_with_flags(path, flags).map_err(|e| {
        QuoteError::Storage(format!(
            "failed to open the SQLite database {}: {}",
            path.display(),
            e
        ))
    })?;
    conn.busy_timeout(timeout * BUSY_FACTOR)
        .map_err(|e| QuoteError::Storage(format!("failed to set busy timeout: {}", e)))?;
    Ok(conn)
}

fn insert(path: &Path, timeout: Duration, bid: &str, deadline: &Deadline) -> Result<()> {
    let mut conn = open(path, timeout)?;
    deadline.register(conn.get_interrupt_handle());
    if deadline.is_expired() {
        return Err(QuoteError::timeout(hop::STORE, timeout));
    }

    conn.query_row(PING, [], |row| row.get::<_, i64>(0))
        .map_err(|e| QuoteError::Storage(format!("failed to connect to database: {}", e)))?;
    let tx = conn
        .transaction()
        .map_err(|e| QuoteError::Storage(format!("failed to begin transaction: {}", e)))?;
    tx.execute(INSERT_QUOTE, params![bid]).map_err(|e| {
        QuoteError::Storage(format!(
            "failed to execute the insert statement for bid value '{}': {}",
            bid, e
        ))
    })?;

    // Dropping `tx` rolls the insert back.
    if !deadline.try_commit() {
        return Err(QuoteError::timeout(hop::STORE, timeout));
    }
    tx.commit()
        .map_err(|e| QuoteError::Storage(format!("failed to commit bid '{}': {}", bid, e)))?;
    debug!("Stored bid {} in {}", bid, path.display());
    Ok(())
}
