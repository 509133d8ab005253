//! Registry of the search engines a dork can be dispatched to.

use crate::error::SearchError;
use crate::options::DateFilter;
use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;

/// An engine's recency URL parameter and its value vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecencyParam {
    pub name: &'static str,
    pub past_day: &'static str,
    pub past_week: &'static str,
    pub past_month: &'static str,
    pub past_year: &'static str,
}

impl RecencyParam {
    /// Value for `filter`, or `None` for [`DateFilter::Any`].
    pub fn value_for(&self, filter: DateFilter) -> Option<&'static str> {
        match filter {
            DateFilter::Any => None,
            DateFilter::PastDay => Some(self.past_day),
            DateFilter::PastWeek => Some(self.past_week),
            DateFilter::PastMonth => Some(self.past_month),
            DateFilter::PastYear => Some(self.past_year),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchEngineDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    /// Ends with the query parameter's `=`, ready for the encoded query.
    pub base_url: &'static str,
    pub icon: &'static str,
    pub uses_query_param: bool,
    /// Takes a bare phrase plus a result kind instead of a dork query.
    pub has_custom_handler: bool,
    pub description: &'static str,
    pub recency: Option<RecencyParam>,
}

pub const PRIMARY_ENGINE_ID: &str = "google";

pub static SEARCH_ENGINES: &[SearchEngineDescriptor] = &[
    SearchEngineDescriptor {
        id: PRIMARY_ENGINE_ID,
        name: "Google",
        base_url: "https://www.google.com/search?q=",
        icon: "search",
        uses_query_param: true,
        has_custom_handler: false,
        description: "Most comprehensive results",
        recency: Some(RecencyParam {
            name: "tbs",
            past_day: "qdr:d",
            past_week: "qdr:w",
            past_month: "qdr:m",
            past_year: "qdr:y",
        }),
    },
    SearchEngineDescriptor {
        id: "duckduckgo",
        name: "DuckDuckGo",
        base_url: "https://duckduckgo.com/?q=",
        icon: "shield",
        uses_query_param: true,
        has_custom_handler: false,
        description: "Privacy-focused search",
        recency: Some(RecencyParam {
            name: "df",
            past_day: "d",
            past_week: "w",
            past_month: "m",
            past_year: "y",
        }),
    },
    SearchEngineDescriptor {
        id: "brave",
        name: "Brave",
        base_url: "https://search.brave.com/search?q=",
        icon: "shield-check",
        uses_query_param: true,
        has_custom_handler: false,
        description: "Independent privacy search",
        recency: Some(RecencyParam {
            name: "freshness",
            past_day: "pd",
            past_week: "pw",
            past_month: "pm",
            past_year: "py",
        }),
    },
    SearchEngineDescriptor {
        id: "startpage",
        name: "Startpage",
        base_url: "https://www.startpage.com/sp/search?query=",
        icon: "lock",
        uses_query_param: true,
        has_custom_handler: false,
        description: "Anonymous Google results",
        recency: None,
    },
    SearchEngineDescriptor {
        id: "yandex",
        name: "Yandex",
        base_url: "https://yandex.com/search/?text=",
        icon: "globe",
        uses_query_param: true,
        has_custom_handler: false,
        description: "Good for Russian content",
        recency: None,
    },
    SearchEngineDescriptor {
        id: "filepursuit",
        name: "FilePursuit",
        base_url: "https://filepursuit.com/pursuit?q=",
        icon: "folder-search",
        uses_query_param: false,
        has_custom_handler: true,
        description: "Specialized file search",
        recency: None,
    },
];

const DEFAULT_MULTI_SELECTION: &[&str] = &[PRIMARY_ENGINE_ID, "duckduckgo"];

lazy_static! {
    static ref CATALOG: EngineCatalog = EngineCatalog::new(SEARCH_ENGINES);
}

pub struct EngineCatalog {
    engines: &'static [SearchEngineDescriptor],
    by_id: HashMap<&'static str, usize>,
}

impl EngineCatalog {
    pub fn new(engines: &'static [SearchEngineDescriptor]) -> Self {
        let by_id = engines
            .iter()
            .enumerate()
            .map(|(idx, engine)| (engine.id, idx))
            .collect();
        Self { engines, by_id }
    }

    pub fn global() -> &'static EngineCatalog {
        &CATALOG
    }

    pub fn get(&self, id: &str) -> Option<&'static SearchEngineDescriptor> {
        let key = id.trim().to_ascii_lowercase();
        self.by_id.get(key.as_str()).map(|&idx| &self.engines[idx])
    }

    pub fn resolve(&self, id: &str) -> Result<&'static SearchEngineDescriptor, SearchError> {
        self.get(id)
            .ok_or_else(|| SearchError::UnknownEngine(id.to_string()))
    }

    pub fn all(&self) -> &'static [SearchEngineDescriptor] {
        self.engines
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.engines.iter().map(|engine| engine.id)
    }

    /// The default single-engine selection.
    pub fn primary(&self) -> &'static SearchEngineDescriptor {
        &self.engines[self.by_id[PRIMARY_ENGINE_ID]]
    }

    /// Selection applied when multi-engine mode is switched on from a single engine.
    pub fn default_multi_selection(&self) -> &'static [&'static str] {
        DEFAULT_MULTI_SELECTION
    }
}
