//! Implémentation du trait [`SiteExt`](crate::SiteExt) pour `hpodserver::Server`
//!
//! `hpodsite` étend `hpodserver::Server` sans que `hpodserver` connaisse
//! `hpodsite`.
//!
//! ```rust,no_run
//! use hpodsite::SiteExt;
//! use hpodserver::ServerBuilder;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut server = ServerBuilder::new_configured().build();
//! server.add_site_configured().await?;
//! server.start().await?;
//! # Ok(())
//! # }
//! ```

use crate::assets::{rss_feed, static_object};
use crate::config_ext::SiteConfigExt;
use crate::pages::episode_list;
use crate::state::SiteState;
use crate::SiteExt;
use async_trait::async_trait;
use axum::{Router, routing::get};
use hpodserver::Server;
use tracing::info;

/// Routes publiques du site
pub fn create_site_router(state: SiteState) -> Router {
    Router::new()
        .route("/", get(episode_list))
        .route("/static/{*path}", get(static_object))
        .route("/rss.xml", get(rss_feed))
        // Ancienne adresse du flux
        .route("/blog.xml", get(rss_feed))
        .with_state(state)
}

#[async_trait]
impl SiteExt for Server {
    async fn add_site(&mut self, state: SiteState) {
        info!(
            "📻 Site '{}': {} pages, locales [{}]",
            state.settings.name,
            state.settings.total_pages(),
            state
                .locales
                .supported()
                .iter()
                .map(|l| l.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        self.add_router("/", create_site_router(state)).await;
    }

    async fn add_site_configured(&mut self) -> anyhow::Result<SiteState> {
        let config = hpodconfig::get_config();
        let state = config.create_site_state()?;
        self.add_site(state.clone()).await;
        Ok(state)
    }
}
