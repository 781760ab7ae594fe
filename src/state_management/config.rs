use std::path::PathBuf;

use dioxus::prelude::*;

use crate::{lazy_image::prelude::ProximityConfig, utils::CCStr};

pub const DEFAULT_SHARE_BASE_URL: &str = "https://resep-nusantara.app/";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Root of the public web front end used to build share links
    pub share_base_url: CCStr,
    /// Name attached to the reviews written from this application
    pub username: CCStr,
    /// JSON catalog to load at startup. The built-in sample is used if absent.
    pub catalog_path: Option<PathBuf>,
    /// Shows the edit and delete actions on recipes
    pub enable_edit: bool,
    pub proximity: ProximityConfig,
}
impl Default for AppConfig {
    fn default() -> Self {
        let catalog_path = dirs_next::data_dir().map(|mut p| {
            p.push("resep-nusantara");
            p.push("recipes.json");
            p
        });
        Self {
            share_base_url: CCStr::from(DEFAULT_SHARE_BASE_URL),
            username: anonymous_username(),
            catalog_path,
            enable_edit: false,
            proximity: ProximityConfig::default(),
        }
    }
}
impl AppConfig {
    /// Builds the configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from `lookup`, keeping defaults for missing
    /// or unparsable values
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup("RESEP_SHARE_BASE_URL").filter(|s| !s.trim().is_empty()) {
            config.share_base_url = CCStr::from(url.trim());
        }
        if let Some(username) = lookup("RESEP_USERNAME").filter(|s| !s.trim().is_empty()) {
            config.username = CCStr::from(username.trim());
        }
        if let Some(path) = lookup("RESEP_CATALOG").filter(|s| !s.is_empty()) {
            config.catalog_path = Some(PathBuf::from(path));
        }
        if let Some(flag) = lookup("RESEP_ENABLE_EDIT") {
            config.enable_edit = matches!(flag.trim(), "1" | "true" | "TRUE" | "True");
        }

        let margin_px = match lookup("RESEP_LAZY_MARGIN_PX").map(|s| s.trim().parse::<u32>()) {
            Some(Ok(v)) => v,
            Some(Err(e)) => {
                log::warn!("Ignoring RESEP_LAZY_MARGIN_PX: {e}");
                config.proximity.margin_px()
            }
            None => config.proximity.margin_px(),
        };
        let visible_fraction =
            match lookup("RESEP_LAZY_VISIBLE_FRACTION").map(|s| s.trim().parse::<f64>()) {
                Some(Ok(v)) => v,
                Some(Err(e)) => {
                    log::warn!("Ignoring RESEP_LAZY_VISIBLE_FRACTION: {e}");
                    config.proximity.visible_fraction()
                }
                None => config.proximity.visible_fraction(),
            };
        config.proximity = ProximityConfig::new(margin_px, visible_fraction);

        config
    }
}

fn anonymous_username() -> CCStr {
    let id = uuid::Uuid::new_v4().simple().to_string();
    CCStr::from(format!("Tamu-{}", &id[..8]))
}

pub static APP_CONFIG: GlobalSignal<AppConfig> = Signal::global(AppConfig::from_env);

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config.share_base_url.as_ref(), DEFAULT_SHARE_BASE_URL);
        assert!(config.username.starts_with("Tamu-"));
        assert_eq!(config.username.len(), "Tamu-".len() + 8);
        assert!(!config.enable_edit);
        assert_eq!(config.proximity, ProximityConfig::default());
    }

    #[test]
    fn env_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("RESEP_SHARE_BASE_URL", " https://contoh.id/resep "),
            ("RESEP_USERNAME", "Sari"),
            ("RESEP_CATALOG", "/tmp/katalog.json"),
            ("RESEP_ENABLE_EDIT", "true"),
            ("RESEP_LAZY_MARGIN_PX", "120"),
            ("RESEP_LAZY_VISIBLE_FRACTION", "0.5"),
        ]));
        assert_eq!(config.share_base_url.as_ref(), "https://contoh.id/resep");
        assert_eq!(config.username.as_ref(), "Sari");
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/katalog.json")));
        assert!(config.enable_edit);
        assert_eq!(config.proximity.margin_px(), 120);
        assert_eq!(config.proximity.visible_fraction(), 0.5);
    }

    #[test]
    fn bad_values_keep_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            ("RESEP_USERNAME", "   "),
            ("RESEP_ENABLE_EDIT", "yes please"),
            ("RESEP_LAZY_MARGIN_PX", "-3"),
        ]));
        assert!(config.username.starts_with("Tamu-"));
        assert!(!config.enable_edit);
        assert_eq!(
            config.proximity.margin_px(),
            ProximityConfig::DEFAULT_MARGIN_PX
        );
    }
}
