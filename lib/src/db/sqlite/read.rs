use std::rc::Rc;
use rusqlite::{Connection, named_params, types::Value};
use crate::db::{DbResults, SortDirection};
use crate::types::StoredRacer;
use super::dbtypes::table::RACERS;
use super::fromdb::{self, RACERS_ID_COL, RACERS_SQL};
use super::todb;

pub fn get_all_racers(conn: &Connection) -> DbResults<StoredRacer> {
    find_racers(conn, SortDirection::Asc, None)
}

pub fn get_racers(conn: &Connection, dbids: Rc<Vec<Value>>)
-> DbResults<StoredRacer> {
    fromdb::internal_err_fn(|| {
        let mut stmt = conn.prepare(format!("
            SELECT {RACERS_SQL} FROM {RACERS}
            WHERE id IN rarray(:ids)
            ORDER BY {RACERS_ID_COL} ASC
        ").as_ref())?;
        let rows = stmt.query_map(
            named_params! { ":ids": dbids },
            todb::mapper(fromdb::racer))?;
        rows.collect()
    })
}

pub fn find_racers(
    conn: &Connection,
    sort: SortDirection,
    max_results: Option<u32>,
) -> DbResults<StoredRacer> {
    let direction = todb::sort_direction(sort);
    fromdb::internal_err_fn(|| {
        let mut stmt = conn.prepare(format!("
            SELECT {RACERS_SQL} FROM {RACERS}
            ORDER BY {RACERS_ID_COL} {direction}
            LIMIT :max_results
        ").as_ref())?;
        let rows = stmt.query_map(
            named_params! { ":max_results": todb::max_results(max_results) },
            todb::mapper(fromdb::racer))?;
        rows.collect()
    })
}
