//! # hpodpager - Pagination de la liste d'épisodes
//!
//! - [`plan`] : fenêtre de pages et d'ellipses à afficher (fonction pure)
//! - [`PaginationController`] : synchronise l'URL (`?page=N`), le [`PageStore`]
//!   partagé et le défilement lors d'un changement de page
//! - [`build_view`] : modèle de rendu (liens, état actif, boutons désactivés)
//!
//! ## Exemple
//!
//! ```rust
//! use hpodpager::{HistoryNavigator, PageStore, PaginationController, ScrollError,
//!                 ScrollScheduler, ScrollSurface, ScrollTarget, Transition};
//! use std::{sync::Arc, time::Duration};
//!
//! struct NoScroll;
//! impl ScrollSurface for NoScroll {
//!     fn scroll_to_top(&self, _: &ScrollTarget) -> Result<(), ScrollError> { Ok(()) }
//! }
//!
//! let navigator = Arc::new(HistoryNavigator::new("/?page=5&sort=new"));
//! let store = PageStore::default();
//! let scroller = ScrollScheduler::new(Arc::new(NoScroll), "main", Duration::from_millis(100));
//! let controller = PaginationController::new(navigator, store.clone(), scroller, 10);
//!
//! let transition = controller.request_page(1);
//! assert_eq!(transition, Transition::Navigated { page: 1, url: "/?sort=new".into() });
//! assert_eq!(store.get_state().current_page, 1);
//! ```

pub mod controller;
pub mod navigation;
pub mod plan;
pub mod query;
pub mod scroll;
pub mod store;
pub mod view;

pub use controller::{PaginationController, Transition};
pub use navigation::{HistoryNavigator, Location, Navigator};
pub use plan::{PlanEntry, needs_pagination, plan};
pub use query::{PAGE_PARAM, href_for_page, page_from_query, query_with_page};
pub use scroll::{DEFAULT_SCROLL_DELAY, ScrollError, ScrollScheduler, ScrollSurface, ScrollTarget};
pub use store::{PageState, PageStore};
pub use view::{PaginationView, StepControl, ViewItem, build_view};
