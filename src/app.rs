//! Command handling for the `opendork` binary.
use crate::cli::{Cli, Commands, ConfigCommands, ListTarget, OutputFormat, SelectionArgs};
use crate::clipboard::ClipboardManager;
use crate::config::Config;
use crate::dispatch::{Dispatcher, MultiEngineDispatcher, SearchReport};
use crate::engines::{EngineCatalog, SearchEngineDescriptor};
use crate::error::{DorkError, Result, SearchError};
use crate::file_types::{FileTypeCatalog, FileTypeCategory};
use crate::interactive::InteractivePrompt;
use crate::list;
use crate::navigator::{BrowserNavigator, DryRunNavigator, Navigator};
use crate::options::SearchOptions;
use crate::output::OutputFormatter;
use clap::CommandFactory;
use colored::*;
use log::{info, warn};
use std::path::PathBuf;

/// Everything one submission needs besides the query text.
#[derive(Debug, Clone)]
pub struct Session {
    pub file_type: &'static FileTypeCategory,
    pub engine: &'static SearchEngineDescriptor,
    pub options: SearchOptions,
}

impl Session {
    /// Combine command-line selection with config defaults.
    pub fn resolve(args: &SelectionArgs, config: &Config) -> std::result::Result<Self, SearchError> {
        let file_type = FileTypeCatalog::global().resolve(
            args.file_type
                .as_deref()
                .unwrap_or(&config.search.default_file_type),
        )?;
        let engine = EngineCatalog::global().resolve(
            args.engine
                .as_deref()
                .unwrap_or(&config.search.default_engine),
        )?;

        let mut options = SearchOptions::default()
            .with_mode(args.mode.unwrap_or(config.search.mode))
            .with_date_filter(args.date.unwrap_or(config.search.date_filter))
            .with_platform(args.platform.or(config.search.platform));

        if let Some(engines) = &args.engines {
            options = options.with_engines(engines.iter().cloned());
        } else if args.multi {
            if config.search.engines.is_empty() {
                options.set_multi_engine(true);
            } else {
                options = options.with_engines(config.search.engines.iter().cloned());
            }
        }

        Ok(Self {
            file_type,
            engine,
            options,
        })
    }
}

pub struct DorkApp {
    config: Config,
    config_path: Option<PathBuf>,
    dispatcher: Dispatcher,
}

impl DorkApp {
    pub fn new(config: Config, config_path: Option<PathBuf>) -> Self {
        let dispatcher = Dispatcher::new(config.limits.clone());
        Self {
            config,
            config_path,
            dispatcher,
        }
    }

    pub async fn run(&self, cli: Cli) -> Result<()> {
        match cli.command {
            Commands::Search {
                query,
                selection,
                dry_run,
                copy,
                output,
            } => {
                let session = Session::resolve(&selection, &self.config)?;
                self.dispatch(&query.join(" "), &session, dry_run, copy, output)
                    .await
            }
            Commands::Preview {
                query,
                selection,
                copy,
                output,
            } => self.handle_preview(&query.join(" "), &selection, copy, output),
            Commands::List { target, long } => {
                match target {
                    ListTarget::Types => list::print_file_types(long),
                    ListTarget::Engines => list::print_engines(long),
                    ListTarget::Modes => list::print_modes(),
                    ListTarget::Dates => list::print_date_filters(),
                }
                Ok(())
            }
            Commands::Interactive { dry_run } => self.handle_interactive(dry_run).await,
            Commands::Config { action } => self.handle_config(action),
            Commands::Completions { shell } => {
                let mut cmd = Cli::command();
                clap_complete::generate(shell, &mut cmd, "opendork", &mut std::io::stdout());
                Ok(())
            }
        }
    }

    async fn dispatch(
        &self,
        query: &str,
        session: &Session,
        dry_run: bool,
        copy: bool,
        output: OutputFormat,
    ) -> Result<()> {
        let browser = BrowserNavigator;
        let recorder = DryRunNavigator::new();
        let navigator: &dyn Navigator = if dry_run { &recorder } else { &browser };
        let formatter = OutputFormatter::new(output);
        let copy = copy || self.config.dispatch.copy_url;

        if session.options.multi_engine_enabled {
            let multi = MultiEngineDispatcher::new(
                self.dispatcher.clone(),
                self.config.dispatch.multi_engine_delay(),
            );
            let outcome = multi
                .dispatch(query, session.file_type, &session.options, navigator)
                .await;

            let rendered = formatter.format_multi(&outcome, dry_run)?;
            if !rendered.is_empty() {
                println!("{rendered}");
            }
            if copy && !outcome.opened.is_empty() {
                let urls: Vec<&str> = outcome.opened.iter().map(|o| o.url.as_str()).collect();
                copy_text(&urls.join("\n"))?;
            }
            return match outcome.error {
                Some(err) => Err(err.into()),
                None => Ok(()),
            };
        }

        let result = self.dispatcher.execute_search(
            query,
            session.file_type,
            session.engine,
            &session.options,
            navigator,
        );
        let report = SearchReport::from(result);
        if report.success || output == OutputFormat::Json {
            println!("{}", formatter.format_report(&report, dry_run)?);
        }

        match (report.url, report.error) {
            (Some(url), _) => {
                if copy {
                    copy_text(&url)?;
                }
                Ok(())
            }
            (None, Some(err)) => Err(err.into()),
            (None, None) => Ok(()),
        }
    }

    fn handle_preview(
        &self,
        query: &str,
        selection: &SelectionArgs,
        copy: bool,
        output: OutputFormat,
    ) -> Result<()> {
        let session = Session::resolve(selection, &self.config)?;
        let urls = self.dispatcher.url_builder();
        let catalog = EngineCatalog::global();

        let mut previews = Vec::new();
        for id in session.options.engines_to_dispatch(session.engine.id) {
            let Some(engine) = catalog.get(id) else {
                warn!("Skipping unknown engine id {id}");
                continue;
            };
            let preview =
                urls.query_builder()
                    .preview(query, session.file_type, engine, &session.options);
            let url = urls.build(query, session.file_type, engine, &session.options);
            previews.push((preview, url));
        }

        println!(
            "{}",
            OutputFormatter::new(output).format_previews(&previews)?
        );
        if copy {
            if let Some((preview, _)) = previews.first() {
                copy_text(&preview.query)?;
            }
        }
        Ok(())
    }

    async fn handle_interactive(&self, dry_run: bool) -> Result<()> {
        let prompt = InteractivePrompt::new(&self.config);
        let (query, session) = prompt.run()?;
        self.dispatch(&query, &session, dry_run, false, OutputFormat::Text)
            .await
    }

    fn handle_config(&self, action: ConfigCommands) -> Result<()> {
        match action {
            ConfigCommands::Init { path, force } => {
                let path = path
                    .or_else(|| self.config_path.clone())
                    .or_else(Config::default_path)
                    .ok_or_else(|| {
                        DorkError::Config("no config directory on this platform".to_string())
                    })?;
                if path.exists() && !force {
                    return Err(DorkError::Config(format!(
                        "{} already exists (use --force to overwrite)",
                        path.display()
                    )));
                }
                Config::default().save(&path)?;
                info!("Wrote default config to {}", path.display());
                println!("{} {}", "Wrote".green(), path.display());
                Ok(())
            }
            ConfigCommands::Show => {
                print!("{}", self.config.to_toml()?);
                Ok(())
            }
        }
    }
}

fn copy_text(text: &str) -> Result<()> {
    let mut clipboard = ClipboardManager::new()?;
    clipboard.copy_to_clipboard(text)?;
    eprintln!("{}", "Copied to clipboard!".green());
    Ok(())
}
