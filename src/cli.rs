use crate::options::{DateFilter, ListingPlatform, SearchMode};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    #[clap(long, value_parser, default_value_t = false, global = true)]
    pub verbose: bool,

    #[clap(long, value_parser, global = true)]
    pub log: Option<PathBuf>,

    /// Config file to use instead of the default search locations
    #[clap(long, value_parser, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

/// Selection shared by `search` and `preview`. Unset flags fall back to the
/// config file, then to the built-in defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// File type category (see `list types`)
    #[clap(short = 't', long = "type", value_parser)]
    pub file_type: Option<String>,

    /// Search engine (see `list engines`)
    #[clap(short, long, value_parser)]
    pub engine: Option<String>,

    #[clap(short, long, value_enum)]
    pub mode: Option<SearchMode>,

    #[clap(short, long, value_enum)]
    pub date: Option<DateFilter>,

    /// Target a specific web server's listing pages
    #[clap(long, value_enum)]
    pub platform: Option<ListingPlatform>,

    /// Dispatch to several engines in turn
    #[clap(long, value_parser, default_value_t = false)]
    pub multi: bool,

    /// Engines for multi-engine dispatch (implies --multi)
    #[clap(long, value_parser, use_value_delimiter = true)]
    pub engines: Option<Vec<String>>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the dork and open it in the browser
    Search {
        #[clap(required = true, num_args = 1..)]
        query: Vec<String>,

        #[clap(flatten)]
        selection: SelectionArgs,

        /// Print the URL instead of opening a browser
        #[clap(long, value_parser, default_value_t = false)]
        dry_run: bool,

        /// Copy the final URL to the clipboard
        #[clap(long, value_parser, default_value_t = false)]
        copy: bool,

        #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },
    /// Show the query and URL a search would use
    Preview {
        #[clap(required = true, num_args = 1..)]
        query: Vec<String>,

        #[clap(flatten)]
        selection: SelectionArgs,

        /// Copy the generated query to the clipboard
        #[clap(long, value_parser, default_value_t = false)]
        copy: bool,

        #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },
    /// List catalog entries
    List {
        #[clap(value_enum, default_value_t = ListTarget::Types)]
        target: ListTarget,

        #[clap(short, long, value_parser, default_value_t = false)]
        long: bool,
    },
    /// Prompt for the query and options
    Interactive {
        #[clap(long, value_parser, default_value_t = false)]
        dry_run: bool,
    },
    Config {
        #[clap(subcommand)]
        action: ConfigCommands,
    },
    Completions {
        #[clap(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a config file with the defaults
    Init {
        #[clap(long, value_parser)]
        path: Option<PathBuf>,

        #[clap(long, value_parser, default_value_t = false)]
        force: bool,
    },
    /// Print the effective configuration
    Show,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListTarget {
    #[default]
    Types,
    Engines,
    Modes,
    Dates,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl fmt::Display for ListTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListTarget::Types => write!(f, "types"),
            ListTarget::Engines => write!(f, "engines"),
            ListTarget::Modes => write!(f, "modes"),
            ListTarget::Dates => write!(f, "dates"),
        }
    }
}
