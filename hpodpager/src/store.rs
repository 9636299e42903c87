//! Store partagé du numéro de page
//!
//! Valeur observable : un seul écrivain (le contrôleur de pagination), des
//! lecteurs abonnés qui ne bloquent jamais les écritures. Chaque `PageStore`
//! est une instance indépendante ; les clones partagent la même valeur.

use serde::Serialize;
use tokio::sync::watch;

/// Contenu du store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageState {
    pub current_page: u32,
}

impl Default for PageState {
    fn default() -> Self {
        Self { current_page: 1 }
    }
}

#[derive(Debug, Clone)]
pub struct PageStore {
    tx: watch::Sender<PageState>,
}

impl PageStore {
    pub fn new(initial: PageState) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    pub fn get_state(&self) -> PageState {
        *self.tx.borrow()
    }

    /// Remplace l'état par le résultat de `updater` et notifie les abonnés
    pub fn set_state<F>(&self, updater: F)
    where
        F: FnOnce(&PageState) -> PageState,
    {
        self.tx.send_modify(|state| *state = updater(state));
    }

    /// Abonnement aux changements d'état
    pub fn subscribe(&self) -> watch::Receiver<PageState> {
        self.tx.subscribe()
    }
}

impl Default for PageStore {
    fn default() -> Self {
        Self::new(PageState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_state_without_subscribers() {
        let store = PageStore::default();
        assert_eq!(store.get_state().current_page, 1);

        store.set_state(|_| PageState { current_page: 4 });
        assert_eq!(store.get_state().current_page, 4);
    }

    #[test]
    fn test_clones_share_state() {
        let store = PageStore::default();
        let other = store.clone();
        other.set_state(|s| PageState {
            current_page: s.current_page + 2,
        });
        assert_eq!(store.get_state().current_page, 3);
    }

    #[tokio::test]
    async fn test_subscribers_are_notified() {
        let store = PageStore::default();
        let mut rx = store.subscribe();

        store.set_state(|_| PageState { current_page: 7 });
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().current_page, 7);
    }
}
