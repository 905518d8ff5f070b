//! Schema versioning.  The number of applied migrations is stored in the
//! database's `user_version`.

use rusqlite::Connection;
use crate::db::DbResult;
use crate::schema::{self, Dialect};
use super::fromdb;

/// Migrations in the order they are applied.  Never reorder or remove
/// entries.
fn migrations() -> Vec<String> {
    vec![
        schema::create_table_sql(&schema::RACERS, Dialect::Sqlite),
    ]
}

#[cfg(test)]
pub fn version_count() -> usize {
    migrations().len()
}

fn current_version(conn: &Connection) -> DbResult<usize> {
    let version: i64 = fromdb::internal_err(
        conn.pragma_query_value(None, "user_version", |r| r.get(0)))?;
    usize::try_from(version)
        .map_err(|_| format!("invalid database schema version: {version}"))
}

/// Apply any migrations newer than the database's version, each in its own
/// transaction.  Returns the resulting version.
pub fn run(conn: &mut Connection) -> DbResult<usize> {
    let migrations = migrations();
    let current = current_version(conn)?;
    if current > migrations.len() {
        return Err(format!(
            "database schema version ({current}) is newer than supported ({})",
            migrations.len()));
    }

    for (index, sql) in migrations.iter().enumerate().skip(current) {
        let version = index + 1;
        log::info!("applying database migration {version}");
        let tx = conn.transaction()
            .map_err(|e| format!("error starting migration {version}: {e}"))?;
        tx.execute_batch(sql)
            .map_err(|e| format!("error applying migration {version}: {e}"))?;
        tx.pragma_update(None, "user_version", version as i64)
            .map_err(|e| format!("error recording migration {version}: {e}"))?;
        tx.commit()
            .map_err(|e| format!("error committing migration {version}: {e}"))?;
    }
    Ok(migrations.len())
}
