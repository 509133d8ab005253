use crate::engines::EngineCatalog;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How aggressively the query builder narrows results.
#[derive(ValueEnum, Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Fewer results, higher quality
    Precise,
    /// Default, good balance
    #[default]
    Balanced,
    /// More results, may include noise
    Broad,
}

impl SearchMode {
    pub fn label(&self) -> &'static str {
        match self {
            SearchMode::Precise => "Precise",
            SearchMode::Balanced => "Balanced",
            SearchMode::Broad => "Broad",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SearchMode::Precise => "Fewer results, higher quality",
            SearchMode::Balanced => "Default, good balance",
            SearchMode::Broad => "More results, may include noise",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Precise => write!(f, "precise"),
            SearchMode::Balanced => write!(f, "balanced"),
            SearchMode::Broad => write!(f, "broad"),
        }
    }
}

/// Recency window applied through engine-specific URL parameters.
#[derive(ValueEnum, Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DateFilter {
    #[default]
    Any,
    #[value(alias = "past_day", alias = "day")]
    PastDay,
    #[value(alias = "past_week", alias = "week")]
    PastWeek,
    #[value(alias = "past_month", alias = "month")]
    PastMonth,
    #[value(alias = "past_year", alias = "year")]
    PastYear,
}

impl DateFilter {
    pub const ALL: [DateFilter; 5] = [
        DateFilter::Any,
        DateFilter::PastDay,
        DateFilter::PastWeek,
        DateFilter::PastMonth,
        DateFilter::PastYear,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DateFilter::Any => "Any time",
            DateFilter::PastDay => "Past 24 hours",
            DateFilter::PastWeek => "Past week",
            DateFilter::PastMonth => "Past month",
            DateFilter::PastYear => "Past year",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DateFilter::Any => "All results",
            DateFilter::PastDay => "Very recent",
            DateFilter::PastWeek => "Last 7 days",
            DateFilter::PastMonth => "Last 30 days",
            DateFilter::PastYear => "Last 12 months",
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, DateFilter::Any)
    }
}

impl fmt::Display for DateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = match self {
            DateFilter::Any => "any",
            DateFilter::PastDay => "past_day",
            DateFilter::PastWeek => "past_week",
            DateFilter::PastMonth => "past_month",
            DateFilter::PastYear => "past_year",
        };
        f.write_str(id)
    }
}

/// Web server flavour whose listing page title is targeted explicitly.
#[derive(ValueEnum, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ListingPlatform {
    Apache,
    Nginx,
    /// Pages titled "directory listing"
    Generic,
}

/// Advanced options for one search session.
///
/// While `multi_engine_enabled` is set, `selected_engine_ids` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOptions {
    pub mode: SearchMode,
    pub date_filter: DateFilter,
    pub multi_engine_enabled: bool,
    selected_engine_ids: Vec<String>,
    pub platform: Option<ListingPlatform>,
}

fn default_pair() -> Vec<String> {
    EngineCatalog::global()
        .default_multi_selection()
        .iter()
        .map(|id| id.to_string())
        .collect()
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            mode: SearchMode::default(),
            date_filter: DateFilter::default(),
            multi_engine_enabled: false,
            selected_engine_ids: vec![EngineCatalog::global().primary().id.to_string()],
            platform: None,
        }
    }
}

impl SearchOptions {
    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_date_filter(mut self, date_filter: DateFilter) -> Self {
        self.date_filter = date_filter;
        self
    }

    pub fn with_platform(mut self, platform: Option<ListingPlatform>) -> Self {
        self.platform = platform;
        self
    }

    /// Enables multi-engine mode with `ids` selected, in order.
    ///
    /// An empty `ids` falls back to the default multi-engine pair.
    pub fn with_engines<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_engine_ids.clear();
        for id in ids {
            self.select_engine(id);
        }
        if self.selected_engine_ids.is_empty() {
            self.selected_engine_ids = default_pair();
        }
        self.multi_engine_enabled = true;
        self
    }

    pub fn selected_engine_ids(&self) -> &[String] {
        &self.selected_engine_ids
    }

    /// Adds `id` to the selection unless already present.
    pub fn select_engine(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.selected_engine_ids.contains(&id) {
            self.selected_engine_ids.push(id);
        }
    }

    /// Removes `id` from the selection. Refuses to drop the last engine.
    pub fn deselect_engine(&mut self, id: &str) -> bool {
        if self.selected_engine_ids.len() <= 1 {
            return false;
        }
        let before = self.selected_engine_ids.len();
        self.selected_engine_ids.retain(|selected| selected != id);
        before != self.selected_engine_ids.len()
    }

    /// Toggles multi-engine mode. Turning it on with fewer than two engines
    /// selected resets the selection to the default pair.
    pub fn set_multi_engine(&mut self, enabled: bool) {
        if enabled && !self.multi_engine_enabled && self.selected_engine_ids.len() < 2 {
            self.selected_engine_ids = default_pair();
        }
        self.multi_engine_enabled = enabled;
    }

    /// Engine ids a submission targets: the selection in multi-engine mode,
    /// otherwise just `single`.
    pub fn engines_to_dispatch<'a>(&'a self, single: &'a str) -> Vec<&'a str> {
        if self.multi_engine_enabled {
            self.selected_engine_ids.iter().map(String::as_str).collect()
        } else {
            vec![single]
        }
    }
}
