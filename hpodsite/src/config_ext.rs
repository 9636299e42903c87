//! Extension pour lire les réglages du site dans hpodconfig
//!
//! Ce module fournit le trait `SiteConfigExt`, qui ajoute à `hpodconfig::Config`
//! les accès à la section `site` et une fabrique de [`SiteState`].

use crate::assets::FsObjectStore;
use crate::settings::{
    DEFAULT_EPISODES_PER_PAGE, DEFAULT_FEED_OBJECT_KEY, DEFAULT_MAIN_CONTAINER_ID,
    DEFAULT_SITE_NAME, DEFAULT_THEME_COLOR, DEFAULT_THEME_STORAGE_KEY, MAX_TOTAL_PAGES,
    SiteSettings,
};
use crate::state::SiteState;
use anyhow::{Context, Result};
use hpodconfig::Config;
use hpodi18n::{LocaleSet, Messages};
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_STORAGE_DIR: &str = "storage";
const DEFAULT_LOCALE: &str = "en";
const DEFAULT_SCROLL_DELAY_MS: u64 = 100;

/// Trait d'extension pour la section `site` de la configuration
///
/// # Exemple
///
/// ```rust,ignore
/// use hpodconfig::get_config;
/// use hpodsite::SiteConfigExt;
///
/// let config = get_config();
/// let state = config.create_site_state()?;
/// println!("{} pages", state.settings.total_pages());
/// ```
pub trait SiteConfigExt {
    fn get_site_settings(&self) -> SiteSettings;

    /// Locales supportées et locale par défaut (`site.locales`)
    fn get_locale_set(&self) -> Result<LocaleSet>;

    /// Répertoire du stockage objet, créé si besoin (default: "storage")
    fn get_storage_dir(&self) -> Result<String>;

    /// Construit l'état partagé des routes du site
    fn create_site_state(&self) -> Result<SiteState>;
}

impl SiteConfigExt for Config {
    fn get_site_settings(&self) -> SiteSettings {
        let per_page = match self.get_u64(&["site", "episodes", "per_page"], DEFAULT_EPISODES_PER_PAGE) {
            0 => {
                tracing::warn!(
                    "site.episodes.per_page must be positive, using default {}",
                    DEFAULT_EPISODES_PER_PAGE
                );
                DEFAULT_EPISODES_PER_PAGE
            }
            n => n,
        };

        let max_episodes = u64::from(MAX_TOTAL_PAGES).saturating_mul(per_page);
        let total_episodes = match self.get_u64(&["site", "episodes", "total"], 0) {
            n if n > max_episodes => {
                tracing::warn!(
                    "site.episodes.total = {} exceeds {} pages, listing truncated to {} episodes",
                    n,
                    MAX_TOTAL_PAGES,
                    max_episodes
                );
                max_episodes
            }
            n => n,
        };

        SiteSettings {
            name: self.get_string(&["site", "name"], DEFAULT_SITE_NAME),
            description: self.get_string(&["site", "description"], ""),
            theme_color: self.get_string(&["site", "theme_color"], DEFAULT_THEME_COLOR),
            theme_storage_key: self
                .get_string(&["site", "theme_storage_key"], DEFAULT_THEME_STORAGE_KEY),
            main_container_id: self
                .get_string(&["site", "main_container_id"], DEFAULT_MAIN_CONTAINER_ID),
            scroll_delay: Duration::from_millis(
                self.get_u64(&["site", "scroll_delay_ms"], DEFAULT_SCROLL_DELAY_MS),
            ),
            total_episodes,
            episodes_per_page: per_page,
            feed_object_key: self.get_string(&["site", "feed", "object_key"], DEFAULT_FEED_OBJECT_KEY),
        }
    }

    fn get_locale_set(&self) -> Result<LocaleSet> {
        let supported = self
            .get_string_list(&["site", "locales", "supported"])
            .unwrap_or_else(|e| {
                tracing::warn!("Invalid site.locales.supported ({}), using '{}'", e, DEFAULT_LOCALE);
                vec![DEFAULT_LOCALE.to_string()]
            });
        let default = self.get_string(&["site", "locales", "default"], DEFAULT_LOCALE);

        LocaleSet::new(supported, &default).context("Invalid site.locales configuration")
    }

    fn get_storage_dir(&self) -> Result<String> {
        self.get_managed_dir(&["site", "storage", "directory"], DEFAULT_STORAGE_DIR)
    }

    fn create_site_state(&self) -> Result<SiteState> {
        let settings = self.get_site_settings();
        let locales = self.get_locale_set()?;
        let messages = Messages::embedded().context("Cannot load message catalogue")?;
        let objects = FsObjectStore::new(self.get_storage_dir()?);

        Ok(SiteState::new(settings, locales, messages, Arc::new(objects)))
    }
}
