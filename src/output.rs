use crate::cli::OutputFormat;
use crate::dispatch::{MultiSearchOutcome, SearchReport};
use crate::error::Result;
use crate::query::QueryPreview;
use colored::*;
use serde_json::json;

/// Renders dispatch results and previews for the terminal.
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format_report(&self, report: &SearchReport, dry_run: bool) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Text => Ok(match (&report.url, &report.error) {
                (Some(url), _) if dry_run => url.clone(),
                (Some(url), _) => format!("{} {}", "Opened".green(), url),
                (None, Some(err)) => err.to_string().red().to_string(),
                (None, None) => String::new(),
            }),
        }
    }

    pub fn format_multi(&self, outcome: &MultiSearchOutcome, dry_run: bool) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(outcome)?),
            OutputFormat::Text => {
                let mut lines = Vec::new();
                for opened in &outcome.opened {
                    if dry_run {
                        lines.push(opened.url.clone());
                    } else {
                        lines.push(format!("{} {}: {}", "Opened".green(), opened.engine, opened.url));
                    }
                }
                if !outcome.skipped.is_empty() {
                    lines.push(
                        format!("Skipped unknown engines: {}", outcome.skipped.join(", "))
                            .yellow()
                            .to_string(),
                    );
                }
                if outcome.opened.is_empty() && outcome.error.is_none() {
                    lines.push(
                        "No known engines selected, nothing was searched"
                            .yellow()
                            .to_string(),
                    );
                }
                if let Some(err) = &outcome.error {
                    let engine = outcome.failed_engine.unwrap_or("search");
                    lines.push(format!("{engine}: {err}").red().to_string());
                }
                Ok(lines.join("\n"))
            }
        }
    }

    /// One block per engine. JSON is a single object for one engine and an
    /// array otherwise.
    pub fn format_previews(&self, previews: &[(QueryPreview, String)]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let mut values: Vec<_> = previews
                    .iter()
                    .map(|(preview, url)| preview_json(preview, url))
                    .collect();
                let value = if values.len() == 1 {
                    values.remove(0)
                } else {
                    serde_json::Value::Array(values)
                };
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Text => Ok(previews
                .iter()
                .map(|(preview, url)| preview_text(preview, url))
                .collect::<Vec<_>>()
                .join("\n\n")),
        }
    }
}

fn preview_json(preview: &QueryPreview, url: &str) -> serde_json::Value {
    json!({
        "engine": preview.engine,
        "query": preview.query,
        "date_filter": preview.date_filter,
        "url": url,
    })
}

fn preview_text(preview: &QueryPreview, url: &str) -> String {
    format!(
        "{} {}\n{} {}\n{} {}\n{} {}",
        "Engine:".cyan(),
        preview.engine,
        "Query:".cyan(),
        preview.query,
        "Time filter:".cyan(),
        preview.date_filter,
        "URL:".cyan(),
        url
    )
}
