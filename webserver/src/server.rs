use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use actix_web::error::ErrorInternalServerError;
use actix_web::web;
use formel1_league::appconfig::AppConfig;
use formel1_league::config::{self, Config};
use formel1_league::db::{self, Db};
use crate::{api, configrefs, ui};

/// Per-worker state.
pub struct State {
    pub app: AppConfig,
    pub db: Mutex<Box<dyn Db>>,
}

impl State {
    pub fn new(app: AppConfig, db: Box<dyn Db>) -> State {
        State { app, db: Mutex::new(db) }
    }

    pub fn open(db_path: &Path, app: AppConfig) -> Result<State, String> {
        let db = db::open_path(db_path)?;
        Ok(State::new(app, Box::new(db)))
    }

    pub fn db(&self) -> actix_web::Result<MutexGuard<'_, Box<dyn Db>>> {
        self.db.lock()
            .map_err(|_| ErrorInternalServerError("database lock poisoned"))
    }
}

/// Server settings, read once at startup.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settings {
    pub addr: (Ipv4Addr, u16),
    pub root_path: String,
    pub api_path: String,
    pub ui_path: String,
    pub assets_path: String,
    pub ui_dir: PathBuf,
    pub assets_dir: PathBuf,
    pub db_path: PathBuf,
}

impl Settings {
    pub fn load<C>(cfg: &C) -> Result<Settings, String>
    where
        C: Config + ?Sized,
    {
        Ok(Settings {
            addr: addr(cfg)?,
            root_path: config::get_ref(cfg, &configrefs::SERVER_ROOT_PATH)?
                .trim_end_matches('/').to_owned(),
            api_path: config::get_ref(cfg, &configrefs::SERVER_API_PATH)?,
            ui_path: config::get_ref(cfg, &configrefs::SERVER_UI_PATH)?,
            assets_path: config::get_ref(cfg, &configrefs::SERVER_ASSETS_PATH)?,
            ui_dir: config::get_ref(cfg, &configrefs::UI_PATH)?,
            assets_dir: config::get_ref(cfg, &configrefs::ASSETS_PATH)?,
            db_path: db::configured_path(cfg)?,
        })
    }
}

pub fn addr<C>(cfg: &C) -> Result<(Ipv4Addr, u16), String>
where
    C: Config + ?Sized,
{
    let all_interfaces =
        config::get_ref(cfg, &configrefs::SERVER_ALL_INTERFACES)?;
    let addr = if all_interfaces { Ipv4Addr::UNSPECIFIED }
               else { Ipv4Addr::LOCALHOST };
    Ok((addr, config::get_ref(cfg, &configrefs::SERVER_PORT)?))
}

/// Register all routes under the root path.
pub fn configure(settings: Settings, devtools: bool)
-> impl FnOnce(&mut web::ServiceConfig) {
    move |sc| {
        sc.service(web::scope(&settings.root_path)
            .service(api::service(&settings.api_path, devtools))
            .service(ui::service(&settings)));
    }
}
