use opendork::{
    execute_search, Dispatcher, EngineCatalog, FileTypeCatalog, MultiEngineDispatcher, Navigation,
    NavigationError, Navigator, SearchError, SearchOptions,
};
use std::cell::RefCell;
use std::time::Duration;

/// Opens the first `allow` URLs, then reports every later call as blocked.
struct BlockingNavigator {
    allow: usize,
    calls: RefCell<Vec<String>>,
}

impl BlockingNavigator {
    fn new(allow: usize) -> Self {
        Self {
            allow,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl Navigator for BlockingNavigator {
    fn navigate(&self, url: &str) -> Result<Navigation, NavigationError> {
        let mut calls = self.calls.borrow_mut();
        calls.push(url.to_string());
        if calls.len() <= self.allow {
            Ok(Navigation::Opened)
        } else {
            Ok(Navigation::Blocked)
        }
    }
}

#[test]
fn balanced_video_search_on_primary_engine() {
    let navigator = BlockingNavigator::new(usize::MAX);
    let engine = EngineCatalog::global().primary();
    let video = FileTypeCatalog::global().get("video").unwrap();

    let url = execute_search(
        "Breaking Bad S01",
        video,
        engine,
        &SearchOptions::default(),
        &navigator,
    )
    .unwrap();

    assert!(url.starts_with(engine.base_url));
    let decoded = urlencoding::decode(&url[engine.base_url.len()..]).unwrap();
    assert!(decoded.starts_with("Breaking Bad S01 "));
    assert!(decoded.contains("intitle:\"index of\""));
    let first_five = video.extension_list()[..5]
        .iter()
        .map(|ext| format!("filetype:{ext}"))
        .collect::<Vec<_>>()
        .join(" OR ");
    assert!(decoded.contains(&format!("({first_five})")));
    assert_eq!(navigator.calls.borrow().as_slice(), &[url]);
}

#[test]
fn one_character_query_is_rejected_before_navigation() {
    let navigator = BlockingNavigator::new(usize::MAX);
    let result = execute_search(
        "x",
        FileTypeCatalog::global().default_category(),
        EngineCatalog::global().primary(),
        &SearchOptions::default(),
        &navigator,
    );

    assert_eq!(result, Err(SearchError::TooShort { min: 2 }));
    assert!(navigator.calls.borrow().is_empty());
}

#[tokio::test]
async fn blocked_second_engine_ends_the_run() {
    let navigator = BlockingNavigator::new(1);
    let dispatcher = MultiEngineDispatcher::new(Dispatcher::default(), Duration::from_millis(5));
    let options = SearchOptions::default().with_engines(["google", "duckduckgo"]);

    let outcome = dispatcher
        .dispatch(
            "Breaking Bad S01",
            FileTypeCatalog::global().default_category(),
            &options,
            &navigator,
        )
        .await;

    assert_eq!(navigator.calls.borrow().len(), 2);
    assert_eq!(outcome.opened.len(), 1);
    assert_eq!(outcome.opened[0].engine, "google");
    assert_eq!(outcome.error, Some(SearchError::PopupBlocked));
    assert!(!dispatcher.is_searching());
}

#[tokio::test]
async fn selection_survives_deselecting_everything() {
    let mut options = SearchOptions::default().with_engines(["google", "brave"]);
    options.deselect_engine("google");
    options.deselect_engine("brave");
    assert_eq!(options.selected_engine_ids(), &["brave".to_string()]);

    let navigator = BlockingNavigator::new(usize::MAX);
    let outcome = MultiEngineDispatcher::new(Dispatcher::default(), Duration::ZERO)
        .dispatch(
            "dune",
            FileTypeCatalog::global().default_category(),
            &options,
            &navigator,
        )
        .await;
    assert!(outcome.is_success());
    assert!(navigator.calls.borrow()[0].starts_with("https://search.brave.com/search?q=dune"));
}
