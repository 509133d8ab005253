//! Dork query composition.
//!
//! Clause order is significant: engines weight early terms more heavily and
//! truncate long queries, so the user's own text always comes first and the
//! exclusion lists are bounded.

use crate::engines::SearchEngineDescriptor;
use crate::file_types::FileTypeCategory;
use crate::options::{DateFilter, SearchMode, SearchOptions};
use crate::patterns::{DirectoryPatterns, ExclusionCatalog, FAKE_DOWNLOAD_PHRASES};
use crate::sanitize::{sanitize, MAX_SANITIZED_CHARS};
use log::trace;
use serde::{Deserialize, Serialize};

/// Bounds that keep generated queries within practical engine limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryLimits {
    pub max_extensions: usize,
    pub max_excluded_sites: usize,
    pub max_fake_phrases: usize,
    pub max_query_chars: usize,
    pub min_query_chars: usize,
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self {
            max_extensions: 5,
            max_excluded_sites: 20,
            max_fake_phrases: 2,
            max_query_chars: MAX_SANITIZED_CHARS,
            min_query_chars: 2,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    limits: QueryLimits,
}

impl QueryBuilder {
    pub fn new(limits: QueryLimits) -> Self {
        Self { limits }
    }

    pub fn build(&self, raw: &str, file_type: &FileTypeCategory, options: &SearchOptions) -> String {
        let exclusions = ExclusionCatalog::global();
        let mut clauses: Vec<String> = vec![sanitize(raw)];

        clauses.extend(
            DirectoryPatterns::for_mode(options.mode)
                .iter()
                .map(|pattern| pattern.to_string()),
        );
        if let Some(platform) = options.platform {
            clauses.push(DirectoryPatterns::for_platform(platform).to_string());
        }

        if let Some(filter) = self.extension_clause(file_type) {
            clauses.push(filter);
        }

        if let Some(keywords) = negated_inurl(&exclusions.excluded_url_keywords, usize::MAX) {
            clauses.push(keywords);
        }
        if let Some(sites) =
            negated_inurl(&exclusions.excluded_site_tokens, self.limits.max_excluded_sites)
        {
            clauses.push(sites);
        }

        if options.mode != SearchMode::Broad {
            clauses.extend(
                FAKE_DOWNLOAD_PHRASES
                    .iter()
                    .take(self.limits.max_fake_phrases)
                    .map(|phrase| format!("-\"{phrase}\"")),
            );
        }

        let query = clauses.join(" ");
        trace!("Built dork query with {} clauses", clauses.len());
        query
    }

    fn extension_clause(&self, file_type: &FileTypeCategory) -> Option<String> {
        if file_type.is_unfiltered() {
            return None;
        }
        let terms: Vec<String> = file_type
            .extension_list()
            .into_iter()
            .take(self.limits.max_extensions)
            .map(|ext| format!("filetype:{ext}"))
            .collect();
        if terms.is_empty() {
            return None;
        }
        Some(format!("({})", terms.join(" OR ")))
    }
}

fn negated_inurl(tokens: &[&str], max: usize) -> Option<String> {
    let bounded: Vec<&str> = tokens.iter().copied().take(max).collect();
    if bounded.is_empty() {
        None
    } else {
        Some(format!("-inurl:({})", bounded.join("|")))
    }
}

/// Build a dork query with the default limits.
pub fn build_query(raw: &str, file_type: &FileTypeCategory, options: &SearchOptions) -> String {
    QueryBuilder::default().build(raw, file_type, options)
}

/// What a submission would send, for display before dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryPreview {
    pub query: String,
    pub date_filter: &'static str,
    pub engine: &'static str,
}

impl QueryBuilder {
    pub fn preview(
        &self,
        raw: &str,
        file_type: &FileTypeCategory,
        engine: &SearchEngineDescriptor,
        options: &SearchOptions,
    ) -> QueryPreview {
        if engine.has_custom_handler {
            return QueryPreview {
                query: sanitize(raw),
                date_filter: DateFilter::Any.label(),
                engine: engine.name,
            };
        }
        let date_filter = engine
            .recency
            .as_ref()
            .and_then(|recency| recency.value_for(options.date_filter))
            .map(|_| options.date_filter.label())
            .unwrap_or_else(|| DateFilter::Any.label());
        QueryPreview {
            query: self.build(raw, file_type, options),
            date_filter,
            engine: engine.name,
        }
    }
}
