use colored::*;
use env_logger::{Builder, Env, Target};
use log::info;
use opendork::app::DorkApp;
use opendork::cli::ConfigCommands;
use opendork::{Cli, Commands, Config, DorkError, Parser, Result};
use std::fs;
use std::time::Instant;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("{} {}", "Error:".red().bold(), e.to_string().red());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    setup_logging(&cli)?;

    let start_time = Instant::now();
    info!("Application started with command: {:?}", cli.command);

    // `config init` may name a file that does not exist yet.
    let initializing = matches!(
        &cli.command,
        Commands::Config {
            action: ConfigCommands::Init { .. }
        }
    );
    let config = match &cli.config {
        Some(path) if initializing && !path.exists() => Config::default(),
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let app = DorkApp::new(config, cli.config.clone());
    app.run(cli).await?;

    info!(
        "Application finished. Total elapsed time: {:.2?}",
        start_time.elapsed()
    );
    Ok(())
}

fn setup_logging(cli: &Cli) -> Result<()> {
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_level));

    builder.format(|buf, record| {
        use std::io::Write;
        writeln!(
            buf,
            "{} [{}] [{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.module_path().unwrap_or("unknown"),
            record.args()
        )
    });

    if let Some(log_path) = &cli.log {
        if let Some(parent_dir) = log_path.parent() {
            if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
                fs::create_dir_all(parent_dir)?;
            }
        }
        let log_file = fs::File::create(log_path)?;
        builder.target(Target::Pipe(Box::new(log_file)));
    } else {
        builder.target(Target::Stderr);
    }

    builder
        .try_init()
        .map_err(|e| DorkError::Other(e.to_string()))?;
    Ok(())
}
