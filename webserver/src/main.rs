use std::path::{Path, PathBuf};
use std::str::FromStr;
use actix_web::{App, HttpServer, middleware, web};
use clap::{Parser, Subcommand};
use formel1_league::appconfig::AppConfig;
use formel1_league::config::{self, Config};
use formel1_league::db;
use formel1_league::schema::{self, Dialect};

mod api;
mod configrefs;
mod constant;
mod server;
mod ui;

#[derive(Debug, Parser)]
#[command(version, about = "Formel1 league web server")]
struct Cli {
    /// YAML config file; environment variables take precedence over it
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the web server (default)
    Serve,
    /// Print the SQL to create the database tables
    Schema {
        /// sqlite or mysql
        #[arg(long, default_value = "sqlite")]
        dialect: String,
    },
    /// Create or upgrade the database, then exit
    Migrate,
}

fn cfg_factory(path: Option<&Path>) -> Result<Box<dyn Config>, String> {
    layered_config(config::env::new(String::new()), path,
                   Path::new(constant::DEFAULT_CONFIG_PATH))
}

/// Environment first, then the config file at `path`, or at `default_path`
/// when no path is given and that file exists.
fn layered_config(env: config::env::Config, path: Option<&Path>,
                  default_path: &Path)
-> Result<Box<dyn Config>, String> {
    let mut layers: Vec<Box<dyn Config>> = Vec::new();
    layers.push(Box::new(env));
    match path {
        Some(path) => layers.push(Box::new(config::file::new(path)?)),
        None if default_path.is_file() =>
            layers.push(Box::new(config::file::new(default_path)?)),
        None => {}
    }
    Ok(Box::new(config::layered::new(layers)))
}

fn parse_dialect(name: &str) -> Result<Dialect, String> {
    Dialect::from_str(name)
        .map_err(|_| format!(
            "unknown SQL dialect (expected sqlite or mysql): {name}"))
}

async fn serve(cfg: &dyn Config) -> Result<(), String> {
    let app_config = AppConfig::load(cfg)?;
    let settings = server::Settings::load(cfg)?;
    let devtools = app_config.devtools.enabled;

    log::info!("public runtime config: {:?}",
               app_config.runtime_config.public.present_keys());
    ui::check_stylesheets(&settings, &app_config.css);
    let version = db::migrate_path(&settings.db_path)?;
    log::info!("database {} at schema version {version}",
               settings.db_path.display());
    log::info!("listening on {}:{}", settings.addr.0, settings.addr.1);

    let addr = settings.addr;
    HttpServer::new(move || {
        let app_config = app_config.clone();
        let db_path = settings.db_path.clone();
        App::new()
            .data_factory(move || {
                let app_config = app_config.clone();
                let db_path = db_path.clone();
                async move { server::State::open(&db_path, app_config) }
            })
            .wrap(middleware::Condition::new(
                devtools, middleware::Logger::default()))
            .configure(server::configure(settings.clone(), devtools))
            .default_service(web::to(api::notfound::get))
    })
        .bind_auto_h2c(addr)
        .map_err(|e| format!("error binding port: {e}"))?
        .run()
        .await
        .map_err(|e| format!("error initialising or interrupted: {e}"))
}

#[actix_web::main]
async fn main() -> Result<(), String> {
    env_logger::init();

    let cli = Cli::parse();
    let cfg = cfg_factory(cli.config.as_deref())?;
    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(cfg.as_ref()).await,
        Command::Schema { dialect } => {
            let dialect = parse_dialect(&dialect)?;
            println!("{}", schema::create_table_sql(&schema::RACERS, dialect));
            Ok(())
        }
        Command::Migrate => {
            let version = db::migrate(cfg.as_ref())?;
            log::info!("database at schema version {version}");
            Ok(())
        }
    }
}
