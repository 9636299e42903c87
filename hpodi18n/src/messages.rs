//! Catalogue de messages traduits
//!
//! Le catalogue est un document YAML embarqué dans le binaire, indexé par
//! locale puis par clé de message.

use crate::{I18nError, Locale};
use serde::Deserialize;
use std::collections::HashMap;

const EMBEDDED_MESSAGES: &str = include_str!("messages.yaml");

#[derive(Debug, Deserialize)]
struct Catalogue {
    default: String,
    locales: HashMap<String, HashMap<String, String>>,
}

/// Messages traduits, avec repli locale → langue primaire → locale par défaut → clé
#[derive(Debug, Clone)]
pub struct Messages {
    default: String,
    locales: HashMap<String, HashMap<String, String>>,
}

impl Messages {
    /// Charge le catalogue embarqué
    pub fn embedded() -> Result<Self, I18nError> {
        Self::from_yaml(EMBEDDED_MESSAGES)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, I18nError> {
        let catalogue: Catalogue = serde_yaml::from_str(yaml)?;
        let locales: HashMap<String, HashMap<String, String>> = catalogue
            .locales
            .into_iter()
            .map(|(tag, messages)| (tag.to_ascii_lowercase(), messages))
            .collect();

        let default = catalogue.default.to_ascii_lowercase();
        if !locales.contains_key(&default) {
            return Err(I18nError::MissingDefaultMessages(default));
        }

        Ok(Self { default, locales })
    }

    fn lookup(&self, tag: &str, key: &str) -> Option<&str> {
        self.locales
            .get(&tag.to_ascii_lowercase())
            .and_then(|messages| messages.get(key))
            .map(String::as_str)
    }

    /// Traduit `key` pour `locale`
    pub fn t<'a>(&'a self, locale: &Locale, key: &'a str) -> &'a str {
        self.lookup(locale.as_str(), key)
            .or_else(|| self.lookup(locale.primary_subtag(), key))
            .or_else(|| self.lookup(&self.default, key))
            .unwrap_or_else(|| {
                tracing::debug!(key, locale = %locale, "Missing translation");
                key
            })
    }

    /// Traduit puis remplace les paramètres `{name}`
    pub fn t_args(&self, locale: &Locale, key: &str, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.t(locale, key).to_string(), |message, (name, value)| {
                message.replace(&format!("{{{}}}", name), value)
            })
    }
}
