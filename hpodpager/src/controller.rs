//! Contrôleur de pagination
//!
//! Traduit une demande « aller à la page N » en une transition cohérente de
//! l'URL, du store partagé et de la position de défilement.

use crate::navigation::Navigator;
use crate::query::{href, page_from_query, query_with_page};
use crate::scroll::{ScrollScheduler, ScrollSurface};
use crate::store::{PageState, PageStore};
use crate::view::{PaginationView, build_view};
use std::sync::Arc;
use tracing::debug;

/// Résultat d'une demande de changement de page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Page déjà courante : aucun effet de bord
    Unchanged,
    /// Navigation effectuée vers `url`
    Navigated { page: u32, url: String },
}

pub struct PaginationController<N, S> {
    navigator: Arc<N>,
    store: PageStore,
    scroller: ScrollScheduler<S>,
    total_pages: u32,
}

impl<N: Navigator, S: ScrollSurface> PaginationController<N, S> {
    pub fn new(
        navigator: Arc<N>,
        store: PageStore,
        scroller: ScrollScheduler<S>,
        total_pages: u32,
    ) -> Self {
        Self {
            navigator,
            store,
            scroller,
            total_pages,
        }
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn set_total_pages(&mut self, total_pages: u32) {
        self.total_pages = total_pages;
    }

    pub fn store(&self) -> &PageStore {
        &self.store
    }

    /// Page courante, lue dans l'URL
    pub fn current_page(&self) -> u32 {
        page_from_query(&self.navigator.location().query)
    }

    /// Va à la page `target`
    ///
    /// Dans l'ordre : nouvelle entrée d'historique, mise à jour du store, puis
    /// défilement différé. Ne fait rien si `target` est déjà la page courante.
    /// `target` n'est pas borné par le nombre de pages (voir [`Self::previous`]
    /// et [`Self::next`]) ; une cible nulle vaut 1.
    pub fn request_page(&self, target: u32) -> Transition {
        let target = target.max(1);
        let location = self.navigator.location();
        if target == page_from_query(&location.query) {
            return Transition::Unchanged;
        }

        let url = href(&location.path, &query_with_page(&location.query, target));
        debug!(page = target, url = %url, "Navigating to page");

        self.navigator.push(&url, true);
        self.store.set_state(|_| PageState {
            current_page: target,
        });
        self.scroller.schedule();

        Transition::Navigated { page: target, url }
    }

    /// Bouton « précédent »
    pub fn previous(&self) -> Transition {
        self.request_page(self.current_page().saturating_sub(1).max(1))
    }

    /// Bouton « suivant »
    pub fn next(&self) -> Transition {
        self.request_page(self.total_pages.min(self.current_page().saturating_add(1)))
    }

    /// Relit l'URL après une navigation de l'historique (précédent/suivant)
    ///
    /// Met le store à jour s'il diverge de l'URL, sans nouvelle entrée
    /// d'historique ni défilement. Renvoie `true` si le store a changé.
    pub fn sync_from_location(&self) -> bool {
        let page = self.current_page();
        if self.store.get_state().current_page == page {
            return false;
        }
        debug!(page, "Store resynchronised from location");
        self.store.set_state(|_| PageState { current_page: page });
        true
    }

    /// Modèle de rendu ; `None` s'il n'y a qu'une page
    pub fn view(&self) -> Option<PaginationView> {
        let location = self.navigator.location();
        build_view(&location, page_from_query(&location.query), self.total_pages)
    }
}
