use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic;
use crate::config::{self, Config};
use crate::configrefs;
use crate::types::{Id, Racer, StoredRacer};

mod sqlite;
pub mod util;

pub type DbResult<T> = Result<T, String>;
pub type DbWriteResult = DbResult<HashMap<IdToken, Id>>;
pub type DbResults<T> = DbResult<Vec<T>>;

/// Identifies an object created by a [write](Db::write), so its generated ID
/// can be found in the result.
pub type IdToken = u64;
static UPDATE_TOKEN: atomic::AtomicU64 = atomic::AtomicU64::new(0);

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug)]
pub enum DbUpdate<'a> {
    CreateRacer { id_token: IdToken, racer: &'a Racer },
    UpdateRacer(&'a StoredRacer),
    DeleteRacer { id: Id },
}

impl<'a> DbUpdate<'a> {
    pub fn id_token() -> IdToken {
        UPDATE_TOKEN.fetch_add(1, atomic::Ordering::Relaxed)
    }

    pub fn create_racer(id_token: IdToken, racer: &'a Racer) -> DbUpdate<'a> {
        DbUpdate::CreateRacer { id_token, racer }
    }

    pub fn update_racer(racer: &'a StoredRacer) -> DbUpdate<'a> {
        DbUpdate::UpdateRacer(racer)
    }

    pub fn delete_racer(id: Id) -> DbUpdate<'a> {
        DbUpdate::DeleteRacer { id }
    }
}

pub trait Db {
    /// Perform all `updates` in a single transaction.  If any update fails,
    /// none are applied.
    ///
    /// The result maps the token of each created object to its ID.
    fn write(&mut self, updates: &[&DbUpdate]) -> DbWriteResult;

    fn get_all_racers(&self) -> DbResults<StoredRacer>;

    /// Racers that don't exist are left out of the result.
    fn get_racers(&self, ids: &[Id]) -> DbResults<StoredRacer>;

    /// Racers ordered by ID.
    fn find_racers(&self, sort: SortDirection, max_results: Option<u32>)
    -> DbResults<StoredRacer>;
}

/// Location of the database file configured by `cfg`.
pub fn configured_path<C>(cfg: &C) -> DbResult<PathBuf>
where
    C: Config + ?Sized,
{
    config::get_ref(cfg, &configrefs::DB_SQLITE_PATH)
}

/// Open the database configured by `cfg`, creating and migrating it as
/// needed.
pub fn open<C>(cfg: &C) -> DbResult<impl Db>
where
    C: Config + ?Sized,
{
    open_path(&configured_path(cfg)?)
}

pub fn open_path(db_path: &Path) -> DbResult<impl Db> {
    sqlite::open(db_path)
}

/// Open a new, empty database that only exists in memory.
pub fn open_in_memory() -> DbResult<impl Db> {
    sqlite::open_in_memory()
}

/// Bring the database configured by `cfg` up to date, returning the schema
/// version.
pub fn migrate<C>(cfg: &C) -> DbResult<usize>
where
    C: Config + ?Sized,
{
    migrate_path(&configured_path(cfg)?)
}

pub fn migrate_path(db_path: &Path) -> DbResult<usize> {
    sqlite::migrate_path(db_path)
}
