use crate::engines::EngineCatalog;
use crate::file_types::FileTypeCatalog;
use crate::options::{DateFilter, SearchMode};
use colored::*;

pub fn print_file_types(long: bool) {
    let catalog = FileTypeCatalog::global();
    for category in catalog.all() {
        if long {
            let extensions = if category.is_unfiltered() {
                "(no filter)".dimmed().to_string()
            } else {
                category.extension_list().join(", ")
            };
            println!(
                "{:<10} {:<10} {:<32} {}",
                category.id.cyan(),
                category.result_kind,
                category.description,
                extensions
            );
        } else {
            println!("{:<10} {}", category.id.cyan(), category.label);
        }
    }
}

pub fn print_engines(long: bool) {
    let catalog = EngineCatalog::global();
    let primary = catalog.primary().id;
    for engine in catalog.all() {
        let marker = if engine.id == primary { "*" } else { " " };
        if long {
            let recency = engine
                .recency
                .as_ref()
                .map(|param| param.name.to_string())
                .unwrap_or_else(|| "-".to_string());
            let handler = if engine.has_custom_handler {
                "phrase"
            } else {
                "dork"
            };
            println!(
                "{}{:<12} {:<7} {:<10} {}",
                marker,
                engine.id.cyan(),
                handler,
                recency,
                engine.base_url.dimmed()
            );
        } else {
            println!("{}{:<12} {}", marker, engine.id.cyan(), engine.description);
        }
    }
}

pub fn print_modes() {
    for mode in [SearchMode::Precise, SearchMode::Balanced, SearchMode::Broad] {
        let default = if mode == SearchMode::default() {
            " (default)".dimmed().to_string()
        } else {
            String::new()
        };
        println!("{:<10} {}{}", mode.to_string().cyan(), mode.description(), default);
    }
}

pub fn print_date_filters() {
    for filter in DateFilter::ALL {
        println!(
            "{:<12} {:<14} {}",
            filter.to_string().cyan(),
            filter.label(),
            filter.description().dimmed()
        );
    }
}
