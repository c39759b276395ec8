use rusqlite::Connection;

use crate::error::Result;

const SCHEMA: &str = include_str!("migrations/001_initial.sql");

/// Create the dump tables on a fresh database.
///
/// Dumps are snapshots written to a new file each time, so there is no
/// migration tracking; the schema is applied exactly once per file.
pub fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}
