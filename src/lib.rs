//! Build search-engine dork queries that surface open directory listings and
//! dispatch them to one or more engines.
//!
//! The core is pure: [`sanitize`], [`query`] and [`url_builder`] turn a raw
//! query plus catalog selections into a request URL. [`dispatch`] validates,
//! builds and hands the URL to a [`Navigator`], which is the only side effect.
//!
//! ```
//! use opendork::{build_url, EngineCatalog, FileTypeCatalog, SearchOptions};
//!
//! let engine = EngineCatalog::global().primary();
//! let video = FileTypeCatalog::global().get("video").unwrap();
//! let url = build_url("Breaking Bad S01", video, engine, &SearchOptions::default());
//! assert!(url.starts_with("https://www.google.com/search?q=Breaking%20Bad%20S01"));
//! ```

pub mod app;
pub mod cli;
mod clipboard;
pub mod config;
pub mod dispatch;
pub mod engines;
pub mod error;
pub mod file_types;
mod interactive;
mod list;
pub mod navigator;
pub mod options;
mod output;
pub mod patterns;
pub mod query;
pub mod sanitize;
pub mod url_builder;

pub use clap::Parser;
pub use cli::{Cli, Commands};
pub use config::Config;
pub use dispatch::{
    execute_search, Dispatcher, MultiEngineDispatcher, MultiSearchOutcome, SearchReport,
};
pub use engines::{EngineCatalog, SearchEngineDescriptor};
pub use error::{DorkError, NavigationError, Result, SearchError};
pub use file_types::{FileTypeCatalog, FileTypeCategory};
pub use navigator::{BrowserNavigator, DryRunNavigator, Navigation, Navigator};
pub use options::{DateFilter, ListingPlatform, SearchMode, SearchOptions};
pub use query::{build_query, QueryBuilder, QueryLimits, QueryPreview};
pub use sanitize::{sanitize, validate};
pub use url_builder::{build_url, percent_encode, UrlBuilder};
