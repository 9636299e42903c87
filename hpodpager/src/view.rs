//! Modèle de rendu du contrôle de pagination
//!
//! Un bouton « précédent », un élément par entrée du plan, un bouton
//! « suivant ». Chaque lien porte l'URL cible (autres paramètres conservés).

use crate::navigation::Location;
use crate::plan::{PlanEntry, needs_pagination, plan};
use crate::query::href_for_page;
use serde::Serialize;

/// Bouton précédent / suivant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepControl {
    pub target: u32,
    pub href: String,
    /// Non interactif et visuellement atténué
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ViewItem {
    Page { page: u32, href: String, active: bool },
    Ellipsis { key: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationView {
    pub current_page: u32,
    pub total_pages: u32,
    pub previous: StepControl,
    pub items: Vec<ViewItem>,
    pub next: StepControl,
}

/// Construit la vue ; `None` quand il n'y a pas plus d'une page
pub fn build_view(location: &Location, current_page: u32, total_pages: u32) -> Option<PaginationView> {
    if !needs_pagination(total_pages) {
        return None;
    }

    let link = |page: u32| href_for_page(&location.path, &location.query, page);

    let previous_target = current_page.saturating_sub(1).max(1);
    let next_target = total_pages.min(current_page.saturating_add(1));

    let items = plan(current_page, total_pages)
        .into_iter()
        .map(|entry| match entry {
            PlanEntry::Page { value } => ViewItem::Page {
                page: value,
                href: link(value),
                active: value == current_page,
            },
            PlanEntry::Ellipsis { key } => ViewItem::Ellipsis { key },
        })
        .collect();

    Some(PaginationView {
        current_page,
        total_pages,
        previous: StepControl {
            target: previous_target,
            href: link(previous_target),
            disabled: current_page == 1,
        },
        items,
        next: StepControl {
            target: next_target,
            href: link(next_target),
            disabled: current_page == total_pages,
        },
    })
}
