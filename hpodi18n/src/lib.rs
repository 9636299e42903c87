//! # hpodi18n - Locales du site HackerPodcast
//!
//! - [`LocaleSet::resolve`] choisit la locale d'une réponse à partir de l'en-tête
//!   `Accept-Language` de la requête, parmi un ensemble fermé de locales configurées.
//! - [`Messages`] fournit les libellés traduits utilisés par le rendu des pages.
//!
//! ```rust
//! use hpodi18n::LocaleSet;
//!
//! let locales = LocaleSet::new(["en", "fr"], "en").unwrap();
//! assert_eq!(locales.resolve(Some("fr-CA,fr;q=0.9,en;q=0.8")).as_str(), "fr");
//! assert_eq!(locales.resolve(None).as_str(), "en");
//! ```

mod error;
pub mod locale;
pub mod messages;

pub use error::I18nError;
pub use locale::{LanguageRange, Locale, LocaleSet, parse_accept_language};
pub use messages::Messages;
