use crate::app::Session;
use crate::config::Config;
use crate::engines::EngineCatalog;
use crate::error::{DorkError, Result};
use crate::file_types::FileTypeCatalog;
use crate::options::{DateFilter, SearchMode, SearchOptions};
use crate::sanitize::validate_with;
use dialoguer::{Confirm, Input, MultiSelect, Select};
use is_terminal::IsTerminal;
use log::info;

const MODES: [SearchMode; 3] = [SearchMode::Precise, SearchMode::Balanced, SearchMode::Broad];

/// Walks the user through the search form on the terminal.
pub struct InteractivePrompt<'a> {
    config: &'a Config,
}

impl<'a> InteractivePrompt<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<(String, Session)> {
        if !std::io::stdin().is_terminal() {
            return Err(DorkError::Other(
                "interactive mode needs a terminal on stdin".to_string(),
            ));
        }
        info!("Starting interactive session");

        let limits = self.config.limits.clone();
        let query: String = Input::new()
            .with_prompt("Search for")
            .validate_with(|input: &String| -> std::result::Result<(), String> {
                validate_with(input, &limits).map(|_| ()).map_err(|e| e.to_string())
            })
            .interact_text()?;

        let file_types = FileTypeCatalog::global();
        let type_labels: Vec<String> = file_types
            .all()
            .iter()
            .map(|c| format!("{} - {}", c.label, c.description))
            .collect();
        let default_type = file_types
            .all()
            .iter()
            .position(|c| Some(c) == file_types.get(&self.config.search.default_file_type))
            .unwrap_or(0);
        let type_idx = Select::new()
            .with_prompt("File type")
            .items(&type_labels)
            .default(default_type)
            .interact()?;
        let file_type = &file_types.all()[type_idx];

        let engines = EngineCatalog::global();
        let engine_labels: Vec<String> = engines
            .all()
            .iter()
            .map(|e| format!("{} - {}", e.name, e.description))
            .collect();
        let default_engine = engines
            .all()
            .iter()
            .position(|e| Some(e) == engines.get(&self.config.search.default_engine))
            .unwrap_or(0);

        let mode_labels: Vec<String> = MODES
            .iter()
            .map(|m| format!("{} - {}", m.label(), m.description()))
            .collect();
        let mode_idx = Select::new()
            .with_prompt("Mode")
            .items(&mode_labels)
            .default(MODES.iter().position(|m| *m == self.config.search.mode).unwrap_or(1))
            .interact()?;

        let date_labels: Vec<&str> = DateFilter::ALL.iter().map(|d| d.label()).collect();
        let date_idx = Select::new()
            .with_prompt("Time filter")
            .items(&date_labels)
            .default(
                DateFilter::ALL
                    .iter()
                    .position(|d| *d == self.config.search.date_filter)
                    .unwrap_or(0),
            )
            .interact()?;

        let mut options = SearchOptions::default()
            .with_mode(MODES[mode_idx])
            .with_date_filter(DateFilter::ALL[date_idx])
            .with_platform(self.config.search.platform);

        let multi = Confirm::new()
            .with_prompt("Search several engines?")
            .default(false)
            .interact()?;

        let engine = if multi {
            options.set_multi_engine(true);
            let defaults: Vec<bool> = engines
                .all()
                .iter()
                .map(|e| options.selected_engine_ids().iter().any(|id| id == e.id))
                .collect();
            let picked = MultiSelect::new()
                .with_prompt("Engines (space to toggle)")
                .items(&engine_labels)
                .defaults(&defaults)
                .interact()?;
            if !picked.is_empty() {
                options = options.with_engines(picked.iter().map(|&idx| engines.all()[idx].id));
            }
            engines.primary()
        } else {
            let engine_idx = Select::new()
                .with_prompt("Engine")
                .items(&engine_labels)
                .default(default_engine)
                .interact()?;
            &engines.all()[engine_idx]
        };

        Ok((
            query,
            Session {
                file_type,
                engine,
                options,
            },
        ))
    }
}
