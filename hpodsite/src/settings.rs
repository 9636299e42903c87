use std::time::Duration;

pub const DEFAULT_SITE_NAME: &str = "Hacker Podcast";
pub const DEFAULT_THEME_COLOR: &str = "orange";
pub const DEFAULT_THEME_STORAGE_KEY: &str = "next-ui-theme";
pub const DEFAULT_MAIN_CONTAINER_ID: &str = "main-scroll-container";
pub const DEFAULT_EPISODES_PER_PAGE: u64 = 10;
pub const DEFAULT_FEED_OBJECT_KEY: &str = "rss.xml";
/// Nombre de pages au-delà duquel la liste est tronquée
pub const MAX_TOTAL_PAGES: u32 = 10_000;

/// Réglages du site, lus une fois au démarrage
#[derive(Debug, Clone)]
pub struct SiteSettings {
    pub name: String,
    pub description: String,
    /// Suffixe de la classe `theme-{color}` posée sur `<html>`
    pub theme_color: String,
    pub theme_storage_key: String,
    pub main_container_id: String,
    pub scroll_delay: Duration,
    pub total_episodes: u64,
    pub episodes_per_page: u64,
    pub feed_object_key: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            name: DEFAULT_SITE_NAME.to_string(),
            description: String::new(),
            theme_color: DEFAULT_THEME_COLOR.to_string(),
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_string(),
            main_container_id: DEFAULT_MAIN_CONTAINER_ID.to_string(),
            scroll_delay: hpodpager::DEFAULT_SCROLL_DELAY,
            total_episodes: 0,
            episodes_per_page: DEFAULT_EPISODES_PER_PAGE,
            feed_object_key: DEFAULT_FEED_OBJECT_KEY.to_string(),
        }
    }
}

impl SiteSettings {
    /// `ceil(total_episodes / episodes_per_page)`, plafonné à [`MAX_TOTAL_PAGES`]
    pub fn total_pages(&self) -> u32 {
        let pages = self
            .total_episodes
            .div_ceil(self.episodes_per_page.max(1));
        u32::try_from(pages).map_or(MAX_TOTAL_PAGES, |p| p.min(MAX_TOTAL_PAGES))
    }

    /// Ramène une page demandée dans `[1, total_pages]`
    pub fn clamp_page(&self, page: u32) -> u32 {
        page.clamp(1, self.total_pages().max(1))
    }
}
