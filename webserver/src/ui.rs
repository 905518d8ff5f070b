use std::path::PathBuf;
use actix_web::web;
use actix_web::dev::HttpServiceFactory;
use crate::server::Settings;

pub fn service(settings: &Settings) -> impl HttpServiceFactory {
    let ui_files = actix_files::Files::new(&settings.ui_path, &settings.ui_dir)
        .index_file("index.html")
        .redirect_to_slash_directory();
    let asset_files =
        actix_files::Files::new(&settings.assets_path, &settings.assets_dir);
    web::scope("")
        .service(asset_files)
        .service(ui_files)
}

/// File a stylesheet entry point is served from.  Entries are relative to the
/// root path, so only those under the assets path can be found.
pub fn stylesheet_file(settings: &Settings, entry: &str) -> Option<PathBuf> {
    let mount = settings.assets_path.trim_matches('/');
    let rel = entry.trim_start_matches('/').strip_prefix(mount)?;
    if !rel.is_empty() && !rel.starts_with('/') {
        return None;
    }
    Some(settings.assets_dir.join(rel.trim_start_matches('/')))
}

/// Log a warning for each stylesheet entry point that won't be served.
pub fn check_stylesheets(settings: &Settings, css: &[String]) {
    for entry in css {
        match stylesheet_file(settings, entry) {
            Some(path) if path.is_file() => {
                log::debug!("stylesheet {entry}: {}", path.display());
            }
            Some(path) => {
                log::warn!("stylesheet {entry} not found: {}", path.display());
            }
            None => {
                log::warn!("stylesheet {entry} is outside {}",
                           settings.assets_path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use formel1_league::config::map;
    use super::*;

    fn settings(assets_dir: &str) -> Settings {
        let cfg = map::from_pairs(&[("webserver.paths.assets", assets_dir)]);
        Settings::load(&cfg).unwrap()
    }

    #[test]
    fn stylesheet_under_assets() {
        let settings = settings("/srv/assets");
        assert_eq!(stylesheet_file(&settings, "assets/css/main.css"),
                   Some(PathBuf::from("/srv/assets/css/main.css")));
        assert_eq!(stylesheet_file(&settings, "/assets/css/main.css"),
                   Some(PathBuf::from("/srv/assets/css/main.css")));
    }

    #[test]
    fn stylesheet_outside_assets() {
        let settings = settings("/srv/assets");
        assert_eq!(stylesheet_file(&settings, "styles/main.css"), None);
        assert_eq!(stylesheet_file(&settings, "assetsx/main.css"), None);
    }
}
