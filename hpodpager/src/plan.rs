//! Fenêtre de pagination : quelles pages et quelles ellipses afficher
//!
//! Forme produite : première page, ellipse, page courante ±1, ellipse, dernière
//! page. Une ellipse prend la place de la page 2 ou de l'avant-dernière page,
//! elle ne s'ajoute jamais au plan.

use serde::Serialize;

/// Un élément du plan de rendu, dans l'ordre d'affichage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PlanEntry {
    /// Lien vers une page (1-based)
    Page { value: u32 },
    /// Trou non cliquable ; `key` est unique dans un plan
    Ellipsis { key: String },
}

impl PlanEntry {
    pub fn page(value: u32) -> Self {
        PlanEntry::Page { value }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PlanEntry::Ellipsis { .. })
    }

    pub fn page_value(&self) -> Option<u32> {
        match self {
            PlanEntry::Page { value } => Some(*value),
            PlanEntry::Ellipsis { .. } => None,
        }
    }
}

/// Le contrôle de pagination n'est affiché qu'à partir de deux pages
pub fn needs_pagination(total_pages: u32) -> bool {
    total_pages > 1
}

/// Calcule le plan de rendu pour `current_page` parmi `total_pages`
///
/// À n'appeler que si [`needs_pagination`] est vrai. Aucune correction n'est
/// appliquée à une page courante hors de `[1, total_pages]` : le résultat est
/// alors celui de la règle de fenêtrage, sans panique.
pub fn plan(current_page: u32, total_pages: u32) -> Vec<PlanEntry> {
    let current = i64::from(current_page);
    let total = i64::from(total_pages);

    let mut entries = Vec::new();
    for page in 1..=total {
        let show_page = page == 1 || page == total || (page - current).abs() <= 1;
        let ellipsis_before = page == 2 && current > 3;
        let ellipsis_after = page == total - 1 && current < total - 2;

        if !show_page && !ellipsis_before && !ellipsis_after {
            continue;
        }

        if ellipsis_before || ellipsis_after {
            entries.push(PlanEntry::Ellipsis {
                key: format!("ellipsis-{}", page),
            });
        } else {
            entries.push(PlanEntry::page(page as u32));
        }
    }
    entries
}
