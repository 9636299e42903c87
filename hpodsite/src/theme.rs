//! Thème clair / sombre
//!
//! La préférence est persistée côté navigateur sous une clé de stockage. Avant
//! le premier rendu, un script placé dans `<head>` la relit et pose la classe
//! `light` ou `dark` sur l'élément racine ; [`initializer_script`] produit ce
//! script. [`bootstrap_theme`] applique la même logique en Rust sur des
//! capacités injectées (stockage, requête `prefers-color-scheme`, liste de
//! classes), ce qui permet de la tester.

use crate::error::{StorageError, ThemeError};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;
use tracing::{debug, error};

pub const LIGHT_CLASS: &str = "light";
pub const DARK_CLASS: &str = "dark";

/// Préférence persistée ; `system` suit le réglage du système d'exploitation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    System,
    Light,
    Dark,
    /// Valeur inconnue, appliquée telle quelle comme classe
    Named(String),
}

impl ThemePreference {
    pub fn as_str(&self) -> &str {
        match self {
            ThemePreference::System => "system",
            ThemePreference::Light => LIGHT_CLASS,
            ThemePreference::Dark => DARK_CLASS,
            ThemePreference::Named(name) => name,
        }
    }

    /// Classe à poser sur la racine
    pub fn resolve(&self, scheme: &dyn ColorSchemeQuery) -> Result<String, ThemeError> {
        Ok(match self {
            ThemePreference::System => {
                if scheme.prefers_dark()? {
                    DARK_CLASS.to_string()
                } else {
                    LIGHT_CLASS.to_string()
                }
            }
            other => other.as_str().to_string(),
        })
    }
}

impl FromStr for ThemePreference {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "" | "system" => ThemePreference::System,
            LIGHT_CLASS => ThemePreference::Light,
            DARK_CLASS => ThemePreference::Dark,
            other => ThemePreference::Named(other.to_string()),
        })
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stockage clé/valeur persistant (localStorage)
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Requête `(prefers-color-scheme: dark)`
pub trait ColorSchemeQuery {
    fn prefers_dark(&self) -> Result<bool, ThemeError>;
}

/// Liste de classes de l'élément racine du document
pub trait RootClassList {
    fn add(&mut self, class: &str);
    fn remove(&mut self, class: &str);
}

impl RootClassList for Vec<String> {
    fn add(&mut self, class: &str) {
        if !self.iter().any(|c| c == class) {
            self.push(class.to_string());
        }
    }

    fn remove(&mut self, class: &str) {
        self.retain(|c| c != class);
    }
}

/// Stockage en mémoire
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self
            .values
            .lock()
            .map_err(|_| StorageError::Unavailable("poisoned lock".into()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| StorageError::Unavailable("poisoned lock".into()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Lit la préférence ; absente ou vide vaut `system`
pub fn load_preference(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<ThemePreference, StorageError> {
    let stored = store.get(key)?.unwrap_or_default();
    // FromStr est infaillible
    Ok(stored.parse().unwrap_or_default())
}

pub fn save_preference(
    store: &dyn KeyValueStore,
    key: &str,
    preference: &ThemePreference,
) -> Result<(), StorageError> {
    store.set(key, preference.as_str())
}

fn apply_theme(
    store: &dyn KeyValueStore,
    scheme: &dyn ColorSchemeQuery,
    root: &mut dyn RootClassList,
    key: &str,
) -> Result<String, ThemeError> {
    let preference = load_preference(store, key)?;
    root.remove(LIGHT_CLASS);
    root.remove(DARK_CLASS);

    let class = preference.resolve(scheme)?;
    root.add(&class);
    Ok(class)
}

/// Applique la préférence de thème à la racine du document
///
/// Renvoie la classe posée. En cas d'échec l'erreur est journalisée et aucune
/// classe de thème n'est forcée.
pub fn bootstrap_theme(
    store: &dyn KeyValueStore,
    scheme: &dyn ColorSchemeQuery,
    root: &mut dyn RootClassList,
    key: &str,
) -> Option<String> {
    match apply_theme(store, scheme, root, key) {
        Ok(class) => {
            debug!(class = %class, "Theme initialised");
            Some(class)
        }
        Err(e) => {
            error!("Failed to initialize theme: {}", e);
            None
        }
    }
}

/// Script d'initialisation du thème, à placer dans `<head>`
pub fn initializer_script(storage_key: &str) -> String {
    // Une chaîne JSON est un littéral JS valide ; `<` est échappé pour ne pas
    // fermer la balise <script>
    let key = serde_json::to_string(storage_key)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace('<', "\\u003c");

    format!(
        r#"(function() {{
  try {{
    const theme = localStorage.getItem({key}) || 'system'
    const root = document.documentElement
    root.classList.remove('light', 'dark')

    if (theme === 'system') {{
      const systemTheme = window.matchMedia('(prefers-color-scheme: dark)').matches ? 'dark' : 'light'
      root.classList.add(systemTheme)
    }}
    else {{
      root.classList.add(theme)
    }}
  }}
  catch (error) {{
    console.error('Failed to initialize theme', error)
  }}
}})()"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "next-ui-theme";

    struct Scheme(Result<bool, ()>);

    impl ColorSchemeQuery for Scheme {
        fn prefers_dark(&self) -> Result<bool, ThemeError> {
            self.0
                .map_err(|_| ThemeError::ColorScheme("matchMedia unavailable".into()))
        }
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::AccessDenied(key.to_string()))
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::AccessDenied(key.to_string()))
        }
    }

    fn root() -> Vec<String> {
        vec!["theme-orange".to_string(), "light".to_string()]
    }

    #[test]
    fn test_missing_preference_follows_system() {
        let store = MemoryStore::default();
        let mut classes = root();

        let class = bootstrap_theme(&store, &Scheme(Ok(true)), &mut classes, KEY);

        assert_eq!(class.as_deref(), Some("dark"));
        assert_eq!(classes, vec!["theme-orange", "dark"]);
    }

    #[test]
    fn test_explicit_preference_wins_over_system() {
        let store = MemoryStore::default();
        save_preference(&store, KEY, &ThemePreference::Light).unwrap();
        let mut classes = vec!["dark".to_string()];

        let class = bootstrap_theme(&store, &Scheme(Ok(true)), &mut classes, KEY);

        assert_eq!(class.as_deref(), Some("light"));
        assert_eq!(classes, vec!["light"]);
    }

    #[test]
    fn test_unknown_preference_is_applied_verbatim() {
        let store = MemoryStore::default();
        store.set(KEY, "sepia").unwrap();
        let mut classes = Vec::new();

        bootstrap_theme(&store, &Scheme(Ok(false)), &mut classes, KEY);

        assert_eq!(classes, vec!["sepia"]);
    }

    #[test]
    fn test_storage_failure_forces_no_class() {
        let mut classes = vec!["theme-orange".to_string()];

        let class = bootstrap_theme(&BrokenStore, &Scheme(Ok(true)), &mut classes, KEY);

        assert!(class.is_none());
        assert_eq!(classes, vec!["theme-orange"]);
    }

    #[test]
    fn test_color_scheme_failure_forces_no_class() {
        let store = MemoryStore::default();
        let mut classes = root();

        let class = bootstrap_theme(&store, &Scheme(Err(())), &mut classes, KEY);

        assert!(class.is_none());
        assert_eq!(classes, vec!["theme-orange"]);
    }

    #[test]
    fn test_initializer_script_embeds_key() {
        let script = initializer_script(KEY);
        assert!(script.contains(r#"localStorage.getItem("next-ui-theme") || 'system'"#));
        assert!(script.contains("root.classList.remove('light', 'dark')"));
        assert!(script.contains("console.error('Failed to initialize theme', error)"));

        let hostile = initializer_script("</script><script>alert(1)");
        assert!(!hostile.contains("</script>"));
    }
}
