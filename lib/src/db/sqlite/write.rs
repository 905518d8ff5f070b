//! Helpers for writing to the database.

use rusqlite::{Connection, named_params};
use crate::db::DbResult;
use crate::types::{Id, Racer, StoredRacer};
use super::dbtypes::table::RACERS;

/// Error if no row was changed.  Updates are by primary key, so at most one
/// row can be.
fn one_row(changed: usize, id: Id) -> DbResult<()> {
    if changed == 0 {
        Err(format!("racer with given ID does not exist: {id}"))
    } else {
        Ok(())
    }
}

pub fn create_racer(conn: &Connection, racer: &Racer) -> DbResult<Id> {
    conn.execute(format!("
        INSERT INTO {RACERS} (name)
        VALUES (:name)
    ").as_ref(), named_params! {
        ":name": racer.name,
    })
        .map(|_| conn.last_insert_rowid())
        .map_err(|e| format!("error creating racer ({racer:?}): {e}"))
}

pub fn update_racer(conn: &Connection, racer: &StoredRacer) -> DbResult<()> {
    let changed = conn.execute(format!("
        UPDATE {RACERS}
        SET name = :name
        WHERE id = :id
    ").as_ref(), named_params! {
        ":id": racer.id,
        ":name": racer.data.name,
    })
        .map_err(|e| format!("error updating racer ({racer:?}): {e}"))?;
    one_row(changed, racer.id)
}

pub fn delete_racer(conn: &Connection, id: Id) -> DbResult<()> {
    let changed = conn.execute(format!("
        DELETE FROM {RACERS}
        WHERE id = :id
    ").as_ref(), named_params! {
        ":id": id,
    })
        .map_err(|e| format!("error deleting racer ({id}): {e}"))?;
    one_row(changed, id)
}
