//! SQLite database implementation.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use rusqlite::Connection;
use crate::db::{DbResult, DbResults, DbWriteResult, DbUpdate, IdToken,
                SortDirection};
use crate::types::{Id, StoredRacer};

mod dbtypes;
mod fromdb;
mod migrate;
mod read;
mod todb;
mod write;

/// SQLite [`Db`](crate::db::Db) implementation.
#[derive(Debug)]
pub struct Db { conn: Connection }

fn open_conn(db_path: &Path) -> DbResult<Connection> {
    let db_path_parent = db_path.parent()
        .map(|p| if p.as_os_str().is_empty() { Path::new(".") } else { p })
        .unwrap_or(db_path);

    fs::create_dir_all(db_path_parent)
        .map_err(|e| format!("error creating directory ({}): {e}",
                             db_path_parent.display()))?;
    Connection::open(db_path)
        .map_err(|e| format!("error opening database ({}): {e}",
                             db_path.display()))
}

fn init(mut conn: Connection) -> DbResult<Db> {
    fromdb::internal_err(rusqlite::vtab::array::load_module(&conn))?;
    migrate::run(&mut conn)?;
    Ok(Db { conn })
}

/// Connect to the database and perform any required initialisation.
pub fn open(db_path: &Path) -> DbResult<Db> {
    log::debug!("opening database: {}", db_path.display());
    init(open_conn(db_path)?)
}

pub fn open_in_memory() -> DbResult<Db> {
    init(fromdb::internal_err(Connection::open_in_memory())?)
}

/// Apply outstanding migrations to the database at `db_path`.
pub fn migrate_path(db_path: &Path) -> DbResult<usize> {
    let mut conn = open_conn(db_path)?;
    migrate::run(&mut conn)
}

/// Run a single `update` against the database.
fn write_update(conn: &Connection, update: &DbUpdate)
-> DbResult<Option<(IdToken, Id)>> {
    match update {
        DbUpdate::CreateRacer { id_token, racer } => {
            write::create_racer(conn, racer)
                .map(|id| Some((*id_token, id)))
        }
        DbUpdate::UpdateRacer(racer) => {
            write::update_racer(conn, racer).map(|_| None)
        }
        DbUpdate::DeleteRacer { id } => {
            write::delete_racer(conn, *id).map(|_| None)
        }
    }
}

impl crate::db::Db for Db {
    fn write(&mut self, updates: &[&DbUpdate]) -> DbWriteResult {
        let mut ids_map: HashMap<IdToken, Id> = HashMap::new();
        let tx = self.conn.transaction()
            .map_err(|e| format!("error writing to database: {e}"))?;

        for update in updates {
            if let Some((token, id)) = write_update(&tx, update)? {
                ids_map.insert(token, id);
            }
        }

        tx.commit()
            .map_err(|e| format!("error writing to database: {e}"))?;
        Ok(ids_map)
    }

    fn get_all_racers(&self) -> DbResults<StoredRacer> {
        read::get_all_racers(&self.conn)
    }

    fn get_racers(&self, ids: &[Id]) -> DbResults<StoredRacer> {
        read::get_racers(&self.conn, todb::multi(ids))
    }

    fn find_racers(&self, sort: SortDirection, max_results: Option<u32>)
    -> DbResults<StoredRacer> {
        read::find_racers(&self.conn, sort, max_results)
    }
}

#[cfg(test)]
mod tests {
    use crate::db::{Db as _, util};
    use crate::types::Racer;
    use super::*;

    fn column_info(db: &Db) -> Vec<(String, String, bool, bool)> {
        let mut stmt = db.conn.prepare(
            "SELECT name, type, \"notnull\", pk FROM pragma_table_info('racers')
             ORDER BY cid").unwrap();
        stmt.query_map((), |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?)))
            .unwrap()
            .collect::<rusqlite::Result<_>>()
            .unwrap()
    }

    #[test]
    fn racers_table_shape() {
        let db = open_in_memory().unwrap();
        assert_eq!(column_info(&db), vec![
            ("id".to_owned(), "INTEGER".to_owned(), false, true),
            ("name".to_owned(), "TEXT".to_owned(), true, false),
        ]);
    }

    #[test]
    fn null_name_is_rejected_by_engine() {
        let db = open_in_memory().unwrap();
        let err = db.conn.execute("INSERT INTO racers (name) VALUES (NULL)", ())
            .unwrap_err();
        assert_eq!(err.sqlite_error_code(),
                   Some(rusqlite::ErrorCode::ConstraintViolation));
        let err = db.conn.execute("INSERT INTO racers DEFAULT VALUES", ())
            .unwrap_err();
        assert_eq!(err.sqlite_error_code(),
                   Some(rusqlite::ErrorCode::ConstraintViolation));
        assert_eq!(db.get_all_racers(), Ok(vec![]));
    }

    #[test]
    fn name_is_not_unique() {
        let mut db = open_in_memory().unwrap();
        let racer = Racer { name: "Schumacher".to_owned() };
        let a = util::create_racer(&mut db, &racer).unwrap();
        let b = util::create_racer(&mut db, &racer).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(db.get_racers(&[a.id, b.id]).unwrap().len(), 2);
    }

    #[test]
    fn reopen_keeps_data_and_sequence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("league.sqlite");
        let first = {
            let mut db = open(&path).unwrap();
            let racer = Racer { name: "Kimi".to_owned() };
            let first = util::create_racer(&mut db, &racer).unwrap();
            util::delete_racer(&mut db, first.id).unwrap();
            first
        };

        assert_eq!(migrate_path(&path), Ok(migrate::version_count()));
        let mut db = open(&path).unwrap();
        let racer = Racer { name: "Mika".to_owned() };
        let second = util::create_racer(&mut db, &racer).unwrap();
        assert!(second.id > first.id);
        assert_eq!(db.get_all_racers(), Ok(vec![second]));
    }

    #[test]
    fn find_racers_sorts_and_limits() {
        let mut db = open_in_memory().unwrap();
        let ids: Vec<Id> = ["A", "B", "C"].iter()
            .map(|n| util::create_racer(
                &mut db, &Racer { name: n.to_string() }).unwrap().id)
            .collect();
        let asc: Vec<Id> = db.find_racers(SortDirection::Asc, None).unwrap()
            .into_iter().map(|r| r.id).collect();
        assert_eq!(asc, ids);
        let desc: Vec<Id> = db.find_racers(SortDirection::Desc, Some(2))
            .unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(desc, vec![ids[2], ids[1]]);
    }
}
