use std::rc::Rc;
use rusqlite::{Row, types::{Type, Value}};
use crate::db::{DbResult, SortDirection};
use crate::types::Id;

/// Parameter for use with `rarray`.
pub fn multi(ids: &[Id]) -> Rc<Vec<Value>> {
    Rc::new(ids.iter().copied().map(Value::from).collect())
}

pub fn sort_direction(sort: SortDirection) -> &'static str {
    match sort {
        SortDirection::Asc => "ASC",
        SortDirection::Desc => "DESC",
    }
}

/// SQLite treats a negative limit as no limit.
pub fn max_results(max_results: Option<u32>) -> i64 {
    max_results.map(i64::from).unwrap_or(-1)
}

pub fn mapper<T, F>(f: F) -> impl Fn(&Row<'_>) -> rusqlite::Result<T>
where
    F: Fn(&Row<'_>) -> DbResult<T>,
{
    move |r| {
        f(r).map_err(|e| rusqlite::Error::FromSqlConversionFailure(
            0, Type::Null, e.into()))
    }
}
