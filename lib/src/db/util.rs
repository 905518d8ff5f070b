use crate::types::{Id, Racer, StoredRacer};
use super::{Db, DbResult, DbUpdate};

pub fn create_racer(db: &mut (impl Db + ?Sized), racer: &Racer)
-> DbResult<StoredRacer> {
    let id_token = DbUpdate::id_token();
    let mut ids = db.write(&[&DbUpdate::create_racer(id_token, racer)])?;
    let id = ids.remove(&id_token)
        .ok_or("unknown error - ID not returned".to_owned())?;
    Ok(StoredRacer { id, data: racer.clone() })
}

pub fn update_racer(db: &mut (impl Db + ?Sized), racer: &StoredRacer)
-> DbResult<()> {
    db.write(&[&DbUpdate::update_racer(racer)])?;
    Ok(())
}

pub fn delete_racer(db: &mut (impl Db + ?Sized), id: Id) -> DbResult<()> {
    db.write(&[&DbUpdate::delete_racer(id)])?;
    Ok(())
}

/// `None` if the racer does not exist.
pub fn find_racer(db: &(impl Db + ?Sized), id: Id)
-> DbResult<Option<StoredRacer>> {
    Ok(db.get_racers(&[id])?.into_iter().next())
}

pub fn get_racer(db: &(impl Db + ?Sized), id: Id) -> DbResult<StoredRacer> {
    find_racer(db, id)?
        .ok_or(format!("racer with given ID does not exist: {id}"))
}
