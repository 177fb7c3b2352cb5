//! Page configuration
//!
//! Embedded defaults, optionally overridden from the query string, e.g.
//! `?catalog_url=demo.json&image_base=static/img/`.

use contracts::shared::config::{CatalogConfig, ConfigOverrides};
use web_sys::window;

pub fn load_config() -> anyhow::Result<CatalogConfig> {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let config = CatalogConfig::embedded()?.with_overrides(parse_overrides(&search));
    log::debug!("config: {:?}", config);
    Ok(config)
}

/// Unreadable query strings are ignored
pub fn parse_overrides(search: &str) -> ConfigOverrides {
    match serde_qs::from_str(search.trim_start_matches('?')) {
        Ok(overrides) => overrides,
        Err(e) => {
            log::warn!("Ignoring query string {:?}: {}", search, e);
            ConfigOverrides::default()
        }
    }
}
