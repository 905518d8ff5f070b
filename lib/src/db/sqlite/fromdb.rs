use rusqlite::Row;
use crate::db::DbResult;
use crate::types::{Racer, StoredRacer};

pub fn internal_err<T>(r: rusqlite::Result<T>) -> DbResult<T> {
    r.map_err(|e| format!("internal error: {e}"))
}

pub fn internal_err_fn<T, F>(f: F) -> DbResult<T>
where
    F: FnOnce() -> rusqlite::Result<T>
{
    internal_err(f())
}

pub fn row_get<T>(r: &Row, i: usize) -> DbResult<T>
where
    T: rusqlite::types::FromSql
{
    internal_err(r.get(i))
}

pub const RACERS_SQL: &str = "id, name";
pub const RACERS_ID_COL: &str = "id";

/// for result selected by [`RACERS_SQL`]
pub fn racer(r: &Row) -> DbResult<StoredRacer> {
    Ok(StoredRacer {
        id: row_get(r, 0)?,
        data: Racer {
            name: row_get(r, 1)?,
        },
    })
}
