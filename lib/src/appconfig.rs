//! Application configuration, read once at startup.
//!
//! The public runtime configuration is exposed to browser code, so it must
//! only ever hold values that are safe to publish.  This is a convention:
//! nothing here checks it.

use serde::Serialize;
use crate::config::{self, Config, ValueValidator, validate};
use crate::configrefs;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Devtools {
    pub enabled: bool,
}

/// Values passed through unchanged from configuration.  A value that is not
/// configured is `None` and is left out when serialised.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicRuntimeConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supabase_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supabase_publishable_key: Option<String>,
}

impl PublicRuntimeConfig {
    pub fn load<C>(cfg: &C) -> Result<PublicRuntimeConfig, String>
    where
        C: Config + ?Sized,
    {
        let public = PublicRuntimeConfig {
            supabase_url: config::get_opt_ref(cfg, &configrefs::SUPABASE_URL)?,
            supabase_publishable_key: config::get_opt_ref(
                cfg, &configrefs::SUPABASE_PUBLISHABLE_KEY)?,
        };
        if let Some(url) = &public.supabase_url {
            if let Err(e) = validate::URL.validate(url) {
                log::warn!("supabase URL looks wrong, passing it on anyway: {e}");
            }
        }
        Ok(public)
    }

    /// Names of the configured keys, for logging without the values.
    pub fn present_keys(&self) -> Vec<&'static str> {
        let mut keys = Vec::new();
        if self.supabase_url.is_some() {
            keys.push("supabaseUrl");
        }
        if self.supabase_publishable_key.is_some() {
            keys.push("supabasePublishableKey");
        }
        keys
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct RuntimeConfig {
    pub public: PublicRuntimeConfig,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub devtools: Devtools,
    /// UI modules, e.g. the CSS utility framework.
    pub modules: Vec<String>,
    /// Stylesheet entry points, relative to the assets directory's parent.
    pub css: Vec<String>,
    pub runtime_config: RuntimeConfig,
}

impl AppConfig {
    pub fn load<C>(cfg: &C) -> Result<AppConfig, String>
    where
        C: Config + ?Sized,
    {
        Ok(AppConfig {
            devtools: Devtools {
                enabled: config::get_ref(cfg, &configrefs::APP_DEVTOOLS_ENABLED)?,
            },
            modules: config::get_ref(cfg, &configrefs::APP_MODULES)?,
            css: config::get_ref(cfg, &configrefs::APP_CSS)?,
            runtime_config: RuntimeConfig {
                public: PublicRuntimeConfig::load(cfg)?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::config::{env, file, map};
    use super::*;

    #[test]
    fn defaults() {
        let app = AppConfig::load(&map::from_pairs(&[])).unwrap();
        assert!(app.devtools.enabled);
        assert_eq!(app.modules, vec!["tailwindcss".to_owned()]);
        assert_eq!(app.css, vec!["assets/css/main.css".to_owned()]);
        assert_eq!(app.runtime_config.public, PublicRuntimeConfig::default());
    }

    #[test]
    fn public_values_pass_through_from_env() {
        std::env::set_var("F1APPTEST_SET_SUPABASE_URL",
                          "https://abc.supabase.co ");
        std::env::set_var("F1APPTEST_SET_SUPABASE_PUBLISHABLE_KEY",
                          "sb_publishable_x.y=z");
        let cfg = env::new("F1APPTEST_SET_".to_owned());
        let public = PublicRuntimeConfig::load(&cfg).unwrap();
        assert_eq!(public.supabase_url.as_deref(),
                   Some("https://abc.supabase.co "));
        assert_eq!(public.supabase_publishable_key.as_deref(),
                   Some("sb_publishable_x.y=z"));
        assert_eq!(serde_json::to_value(&public).unwrap(), json!({
            "supabaseUrl": "https://abc.supabase.co ",
            "supabasePublishableKey": "sb_publishable_x.y=z",
        }));
    }

    #[test]
    fn unset_public_values_are_absent() {
        std::env::set_var("F1APPTEST_HALF_SUPABASE_PUBLISHABLE_KEY", "key");
        let cfg = env::new("F1APPTEST_HALF_".to_owned());
        let public = PublicRuntimeConfig::load(&cfg).unwrap();
        assert_eq!(public.supabase_url, None);
        assert_eq!(public.present_keys(), vec!["supabasePublishableKey"]);
        assert_eq!(serde_json::to_value(&public).unwrap(),
                   json!({ "supabasePublishableKey": "key" }));
    }

    #[test]
    fn empty_env_value_passes_through() {
        std::env::set_var("F1APPTEST_EMPTY_SUPABASE_URL", "");
        let cfg = env::new("F1APPTEST_EMPTY_".to_owned());
        let public = PublicRuntimeConfig::load(&cfg).unwrap();
        assert_eq!(public.supabase_url.as_deref(), Some(""));
        assert_eq!(public.supabase_publishable_key, None);
    }

    #[test]
    fn loads_lists_from_yaml() {
        let yaml = [
            "app:",
            "  css:",
            "    - assets/css/print.css",
            "  modules:",
            "    - '@nuxtjs/tailwindcss'",
        ].join("\n");
        let cfg = file::from_str(&yaml).unwrap();
        let app = AppConfig::load(&cfg).unwrap();
        assert_eq!(app.css, vec!["assets/css/print.css".to_owned()]);
        assert_eq!(app.modules, vec!["@nuxtjs/tailwindcss".to_owned()]);
    }

    #[test]
    fn yaml_null_public_value_is_absent() {
        let cfg = file::from_str("supabase:\n  url:\n  publishable-key: k")
            .unwrap();
        let public = PublicRuntimeConfig::load(&cfg).unwrap();
        assert_eq!(public.supabase_url, None);
        assert_eq!(serde_json::to_value(&public).unwrap(),
                   json!({ "supabasePublishableKey": "k" }));
    }

    #[test]
    fn malformed_url_is_not_rejected() {
        let cfg = map::from_pairs(&[("supabase.url", "not a url")]);
        let public = PublicRuntimeConfig::load(&cfg).unwrap();
        assert_eq!(public.supabase_url.as_deref(), Some("not a url"));
    }

    #[test]
    fn serialises_with_framework_keys() {
        let cfg = map::from_pairs(&[
            ("app.devtools.enabled", "false"),
            ("app.css", "assets/css/main.css, assets/css/print.css"),
        ]);
        let app = AppConfig::load(&cfg).unwrap();
        assert_eq!(serde_json::to_value(&app).unwrap(), json!({
            "devtools": { "enabled": false },
            "modules": ["tailwindcss"],
            "css": ["assets/css/main.css", "assets/css/print.css"],
            "runtimeConfig": { "public": {} },
        }));
    }

    #[test]
    fn invalid_devtools_flag_is_an_error() {
        let cfg = map::from_pairs(&[("app.devtools.enabled", "maybe")]);
        assert!(AppConfig::load(&cfg).is_err());
    }
}
