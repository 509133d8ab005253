use crate::engines::{EngineCatalog, SearchEngineDescriptor};
use crate::error::SearchError;
use crate::file_types::FileTypeCategory;
use crate::navigator::{Navigation, Navigator};
use crate::options::SearchOptions;
use crate::query::QueryLimits;
use crate::sanitize::validate_with;
use crate::url_builder::UrlBuilder;
use log::{debug, info, warn};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Pause between successive browser launches in one multi-engine run.
pub const DEFAULT_MULTI_ENGINE_DELAY: Duration = Duration::from_millis(500);

/// Validates, builds and navigates for a single engine.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    urls: UrlBuilder,
    limits: QueryLimits,
}

impl Dispatcher {
    pub fn new(limits: QueryLimits) -> Self {
        Self {
            urls: UrlBuilder::new(limits.clone()),
            limits,
        }
    }

    pub fn url_builder(&self) -> &UrlBuilder {
        &self.urls
    }

    /// Returns the opened URL. Nothing is navigated when validation fails.
    pub fn execute_search<N: Navigator + ?Sized>(
        &self,
        raw: &str,
        file_type: &FileTypeCategory,
        engine: &SearchEngineDescriptor,
        options: &SearchOptions,
        navigator: &N,
    ) -> Result<String, SearchError> {
        validate_with(raw, &self.limits)?;

        let url = self.urls.build(raw, file_type, engine, options);
        match navigator.navigate(&url) {
            Ok(Navigation::Opened) => {
                info!("Opened {} search", engine.name);
                Ok(url)
            }
            Ok(Navigation::Blocked) => {
                warn!("Navigation to {} was blocked", engine.name);
                Err(SearchError::PopupBlocked)
            }
            Err(e) => {
                warn!("Navigation to {} failed: {e}", engine.name);
                Err(SearchError::NavigationFailed(e.to_string()))
            }
        }
    }
}

/// Dispatch one search with the default limits.
pub fn execute_search<N: Navigator + ?Sized>(
    raw: &str,
    file_type: &FileTypeCategory,
    engine: &SearchEngineDescriptor,
    options: &SearchOptions,
    navigator: &N,
) -> Result<String, SearchError> {
    Dispatcher::default().execute_search(raw, file_type, engine, options, navigator)
}

/// Flat `{success, error, url}` view of a dispatch result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<SearchError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl From<Result<String, SearchError>> for SearchReport {
    fn from(result: Result<String, SearchError>) -> Self {
        match result {
            Ok(url) => Self {
                success: true,
                error: None,
                url: Some(url),
            },
            Err(error) => Self {
                success: false,
                error: Some(error),
                url: None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenedSearch {
    pub engine: &'static str,
    pub url: String,
}

/// Result of a multi-engine run: what opened, what was skipped, and the
/// error that stopped the run, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MultiSearchOutcome {
    pub opened: Vec<OpenedSearch>,
    pub skipped: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_engine: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<SearchError>,
}

impl MultiSearchOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    fn failed(error: SearchError) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }
}

/// Runs one search per selected engine, pausing between launches so
/// rapid-fire window creation is not flagged by the host.
///
/// The first failure ends the run; engines after it are not attempted.
/// A second run started while one is in flight fails with
/// [`SearchError::SearchInProgress`].
#[derive(Debug)]
pub struct MultiEngineDispatcher {
    dispatcher: Dispatcher,
    delay: Duration,
    is_searching: AtomicBool,
}

impl Default for MultiEngineDispatcher {
    fn default() -> Self {
        Self::new(Dispatcher::default(), DEFAULT_MULTI_ENGINE_DELAY)
    }
}

struct SearchingGuard<'a>(&'a AtomicBool);

impl Drop for SearchingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl MultiEngineDispatcher {
    pub fn new(dispatcher: Dispatcher, delay: Duration) -> Self {
        Self {
            dispatcher,
            delay,
            is_searching: AtomicBool::new(false),
        }
    }

    pub fn is_searching(&self) -> bool {
        self.is_searching.load(Ordering::Acquire)
    }

    pub async fn dispatch<N: Navigator + ?Sized>(
        &self,
        raw: &str,
        file_type: &FileTypeCategory,
        options: &SearchOptions,
        navigator: &N,
    ) -> MultiSearchOutcome {
        if self.is_searching.swap(true, Ordering::AcqRel) {
            return MultiSearchOutcome::failed(SearchError::SearchInProgress);
        }
        let _guard = SearchingGuard(&self.is_searching);

        let catalog = EngineCatalog::global();
        let mut outcome = MultiSearchOutcome::default();

        for id in options.selected_engine_ids() {
            let Some(engine) = catalog.get(id) else {
                debug!("Skipping unknown engine id {id}");
                outcome.skipped.push(id.clone());
                continue;
            };

            if !outcome.opened.is_empty() && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }

            match self
                .dispatcher
                .execute_search(raw, file_type, engine, options, navigator)
            {
                Ok(url) => outcome.opened.push(OpenedSearch {
                    engine: engine.id,
                    url,
                }),
                Err(error) => {
                    outcome.failed_engine = Some(engine.id);
                    outcome.error = Some(error);
                    break;
                }
            }
        }

        if outcome.opened.is_empty() && outcome.error.is_none() {
            warn!(
                "No known engines among {:?}, nothing was searched",
                outcome.skipped
            );
        }
        info!(
            "Multi-engine search opened {} of {} engines",
            outcome.opened.len(),
            options.selected_engine_ids().len()
        );
        outcome
    }
}
