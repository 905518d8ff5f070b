use std::path::PathBuf;
use crate::config::{ValueRef, parse};

pub const DB_SQLITE_PATH: ValueRef<'_, PathBuf> = ValueRef {
    names: &["db", "sqlite", "db-path"],
    def: "/var/lib/formel1-league/db.sqlite",
    type_: &parse::FILE_PATH,
    validators: &[],
};

pub const APP_DEVTOOLS_ENABLED: ValueRef<'_, bool> = ValueRef {
    names: &["app", "devtools", "enabled"],
    def: "true",
    type_: &parse::BOOL,
    validators: &[],
};

pub const APP_MODULES: ValueRef<'_, Vec<String>> = ValueRef {
    names: &["app", "modules"],
    def: "tailwindcss",
    type_: &parse::LIST,
    validators: &[],
};

pub const APP_CSS: ValueRef<'_, Vec<String>> = ValueRef {
    names: &["app", "css"],
    def: "assets/css/main.css",
    type_: &parse::LIST,
    validators: &[],
};

// read from SUPABASE_URL and SUPABASE_PUBLISHABLE_KEY when the environment
// config has no prefix

pub const SUPABASE_URL: ValueRef<'_, String> = ValueRef {
    names: &["supabase", "url"],
    def: "",
    type_: &parse::STRING,
    validators: &[],
};

pub const SUPABASE_PUBLISHABLE_KEY: ValueRef<'_, String> = ValueRef {
    names: &["supabase", "publishable-key"],
    def: "",
    type_: &parse::STRING,
    validators: &[],
};
