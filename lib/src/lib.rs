//! Library for formel1-league: configuration, the racers schema, and the
//! database holding it.

pub mod appconfig;
pub mod config;
mod configrefs;
pub mod db;
pub mod schema;
pub mod types;
