//! Accès à l'URL courante et à l'historique de navigation
//!
//! Dans un navigateur, c'est le routeur qui implémente [`Navigator`]. Ce module
//! fournit aussi [`HistoryNavigator`], un historique en mémoire qui reproduit la
//! sémantique push / back / forward.

use std::sync::Mutex;

/// Emplacement courant : chemin et chaîne de requête (sans `?`)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub path: String,
    pub query: String,
}

impl Location {
    /// Découpe une URL relative `path?query`
    pub fn parse(url: &str) -> Self {
        let (path, query) = url.split_once('?').unwrap_or((url, ""));
        Self {
            path: if path.is_empty() { "/".to_string() } else { path.to_string() },
            query: query.to_string(),
        }
    }

    pub fn href(&self) -> String {
        crate::query::href(&self.path, &self.query)
    }
}

/// Routeur côté client
pub trait Navigator: Send + Sync {
    /// Emplacement actuellement affiché
    fn location(&self) -> Location;

    /// Ajoute une entrée d'historique (jamais un remplacement silencieux)
    ///
    /// `scroll_to_top` demande au routeur de remonter en haut du nouveau contenu.
    fn push(&self, url: &str, scroll_to_top: bool);
}

#[derive(Debug)]
struct History {
    entries: Vec<Location>,
    index: usize,
}

/// Historique de navigation en mémoire
#[derive(Debug)]
pub struct HistoryNavigator {
    history: Mutex<History>,
}

impl HistoryNavigator {
    pub fn new(initial_url: &str) -> Self {
        Self {
            history: Mutex::new(History {
                entries: vec![Location::parse(initial_url)],
                index: 0,
            }),
        }
    }

    fn with_history<R>(&self, f: impl FnOnce(&mut History) -> R) -> R {
        let mut guard = self
            .history
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }

    /// Revient à l'entrée précédente ; `false` au début de l'historique
    pub fn back(&self) -> bool {
        self.with_history(|h| {
            if h.index == 0 {
                return false;
            }
            h.index -= 1;
            true
        })
    }

    /// Avance à l'entrée suivante ; `false` en fin d'historique
    pub fn forward(&self) -> bool {
        self.with_history(|h| {
            if h.index + 1 >= h.entries.len() {
                return false;
            }
            h.index += 1;
            true
        })
    }

    /// Nombre d'entrées dans l'historique
    pub fn len(&self) -> usize {
        self.with_history(|h| h.entries.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Navigator for HistoryNavigator {
    fn location(&self) -> Location {
        self.with_history(|h| h.entries[h.index].clone())
    }

    fn push(&self, url: &str, _scroll_to_top: bool) {
        self.with_history(|h| {
            // Un push après un retour arrière efface les entrées « suivantes »
            h.entries.truncate(h.index + 1);
            h.entries.push(Location::parse(url));
            h.index = h.entries.len() - 1;
        });
    }
}
