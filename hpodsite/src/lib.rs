//! # hpodsite - Pages publiques de Hacker Podcast
//!
//! Cette crate assemble les briques du site et les branche sur
//! `hpodserver::Server` :
//!
//! - 🌍 **Locale** : `<html lang>` choisi d'après `Accept-Language` ([`hpodi18n`])
//! - 📄 **Liste des épisodes** : page courante lue dans `?page=N`, contrôle de
//!   pagination rendu par [`hpodpager`]
//! - 🌗 **Thème** : script d'initialisation clair / sombre dans `<head>`
//! - 📁 **Fichiers** : `/static/...` et le flux `/rss.xml` (alias `/blog.xml`)
//!   servis depuis un [`ObjectStore`]
//!
//! ## Routes enregistrées
//!
//! - `GET /` - Liste des épisodes
//! - `GET /static/{*path}` - Objet brut du stockage
//! - `GET /rss.xml`, `GET /blog.xml` - Flux RSS

pub mod assets;
pub mod config_ext;
pub mod error;
pub mod hpodserver_impl;
pub mod pages;
pub mod settings;
pub mod state;
pub mod theme;

pub use assets::{FsObjectStore, ObjectStore, RSS_CONTENT_TYPE};
pub use config_ext::SiteConfigExt;
pub use error::{ObjectStoreError, StorageError, ThemeError};
pub use hpodserver_impl::create_site_router;
pub use pages::EpisodeListPage;
pub use settings::SiteSettings;
pub use state::SiteState;
pub use theme::{
    ColorSchemeQuery, KeyValueStore, MemoryStore, RootClassList, ThemePreference,
    bootstrap_theme, initializer_script,
};

/// Trait d'extension pour ajouter le site à hpodserver
#[async_trait::async_trait]
pub trait SiteExt {
    /// Enregistre les routes du site avec un état déjà construit
    async fn add_site(&mut self, state: SiteState);

    /// Construit l'état depuis la configuration globale puis enregistre les routes
    async fn add_site_configured(&mut self) -> anyhow::Result<SiteState>;
}
