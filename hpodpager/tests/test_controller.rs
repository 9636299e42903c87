use hpodpager::{
    HistoryNavigator, Navigator, PageState, PageStore, PaginationController, ScrollError,
    ScrollScheduler, ScrollSurface, ScrollTarget, Transition, ViewItem,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

const CONTAINER: &str = "main-scroll-container";

/// Surface qui enregistre les défilements ; le conteneur peut être absent
#[derive(Default)]
struct RecordingSurface {
    scrolled: Mutex<Vec<ScrollTarget>>,
    container_missing: bool,
}

impl RecordingSurface {
    fn without_container() -> Self {
        Self {
            scrolled: Mutex::new(Vec::new()),
            container_missing: true,
        }
    }

    fn scrolled(&self) -> Vec<ScrollTarget> {
        self.scrolled.lock().unwrap().clone()
    }
}

impl ScrollSurface for RecordingSurface {
    fn scroll_to_top(&self, target: &ScrollTarget) -> Result<(), ScrollError> {
        if let ScrollTarget::MainContainer(id) = target {
            if self.container_missing {
                return Err(ScrollError::ContainerNotFound(id.clone()));
            }
        }
        self.scrolled.lock().unwrap().push(target.clone());
        Ok(())
    }
}

struct Fixture {
    navigator: Arc<HistoryNavigator>,
    store: PageStore,
    surface: Arc<RecordingSurface>,
    controller: PaginationController<HistoryNavigator, RecordingSurface>,
}

fn fixture_with(url: &str, total_pages: u32, surface: RecordingSurface) -> Fixture {
    let navigator = Arc::new(HistoryNavigator::new(url));
    let store = PageStore::new(PageState {
        current_page: hpodpager::page_from_query(&navigator.location().query),
    });
    let surface = Arc::new(surface);
    let scroller = ScrollScheduler::new(surface.clone(), CONTAINER, Duration::from_millis(100));
    let controller =
        PaginationController::new(navigator.clone(), store.clone(), scroller, total_pages);
    Fixture {
        navigator,
        store,
        surface,
        controller,
    }
}

fn fixture(url: &str, total_pages: u32) -> Fixture {
    fixture_with(url, total_pages, RecordingSurface::default())
}

#[tokio::test(start_paused = true)]
async fn test_first_page_removes_parameter_and_keeps_others() {
    let f = fixture("/?page=5&sort=new", 10);

    let transition = f.controller.request_page(1);

    assert_eq!(
        transition,
        Transition::Navigated {
            page: 1,
            url: "/?sort=new".to_string()
        }
    );
    assert_eq!(f.navigator.location().query, "sort=new");
    assert_eq!(f.navigator.len(), 2);
    assert_eq!(f.store.get_state().current_page, 1);
}

#[tokio::test(start_paused = true)]
async fn test_request_page_sets_parameter() {
    let f = fixture("/", 10);

    f.controller.request_page(7);

    assert_eq!(f.navigator.location().href(), "/?page=7");
    assert_eq!(f.controller.current_page(), 7);
    assert_eq!(f.store.get_state().current_page, 7);
}

#[tokio::test(start_paused = true)]
async fn test_requesting_current_page_is_a_no_op() {
    let f = fixture("/?page=3&sort=new", 10);

    assert_eq!(f.controller.request_page(3), Transition::Unchanged);

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(f.navigator.len(), 1);
    assert_eq!(f.navigator.location().query, "page=3&sort=new");
    assert_eq!(f.store.get_state().current_page, 3);
    assert!(f.surface.scrolled().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_scroll_is_deferred_then_reaches_both_targets() {
    let f = fixture("/", 10);

    f.controller.request_page(2);
    // Rien avant l'expiration du délai
    assert!(f.surface.scrolled().is_empty());

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(
        f.surface.scrolled(),
        vec![
            ScrollTarget::MainContainer(CONTAINER.to_string()),
            ScrollTarget::Window
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_missing_container_is_ignored() {
    let f = fixture_with("/", 10, RecordingSurface::without_container());

    let transition = f.controller.request_page(4);
    assert!(matches!(transition, Transition::Navigated { page: 4, .. }));

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(f.surface.scrolled(), vec![ScrollTarget::Window]);
    assert_eq!(f.store.get_state().current_page, 4);
}

#[tokio::test(start_paused = true)]
async fn test_previous_and_next_are_clamped() {
    let f = fixture("/", 3);

    assert_eq!(f.controller.previous(), Transition::Unchanged);
    assert!(matches!(f.controller.next(), Transition::Navigated { page: 2, .. }));
    assert!(matches!(f.controller.next(), Transition::Navigated { page: 3, .. }));
    assert_eq!(f.controller.next(), Transition::Unchanged);
    assert!(matches!(f.controller.previous(), Transition::Navigated { page: 2, .. }));
    assert_eq!(f.navigator.len(), 4);
}

#[tokio::test(start_paused = true)]
async fn test_history_navigation_resynchronises_store() {
    let f = fixture("/", 10);
    f.controller.request_page(2);
    f.controller.request_page(3);
    assert_eq!(f.store.get_state().current_page, 3);

    assert!(f.navigator.back());
    assert!(f.controller.sync_from_location());
    assert_eq!(f.store.get_state().current_page, 2);
    // Déjà synchronisé
    assert!(!f.controller.sync_from_location());

    assert!(f.navigator.back());
    assert!(f.controller.sync_from_location());
    assert_eq!(f.store.get_state().current_page, 1);
    assert_eq!(f.navigator.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_store_subscribers_see_navigation() {
    let f = fixture("/", 10);
    let mut rx = f.store.subscribe();

    f.controller.request_page(6);

    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().current_page, 6);
}

#[tokio::test(start_paused = true)]
async fn test_view_tracks_url() {
    let mut f = fixture("/?sort=new", 10);
    let view = f.controller.view().unwrap();
    assert!(view.previous.disabled);
    assert_eq!(view.next.href, "/?sort=new&page=2");

    f.controller.request_page(10);
    let view = f.controller.view().unwrap();
    assert!(view.next.disabled);
    assert!(matches!(
        view.items.last(),
        Some(ViewItem::Page { page: 10, active: true, .. })
    ));

    f.controller.set_total_pages(1);
    assert!(f.controller.view().is_none());
}

#[test]
fn test_request_without_runtime_skips_scroll() {
    let f = fixture("/", 10);

    let transition = f.controller.request_page(2);

    assert!(matches!(transition, Transition::Navigated { page: 2, .. }));
    assert_eq!(f.store.get_state().current_page, 2);
    assert!(f.surface.scrolled().is_empty());
}
