//! CLI commands and argument parsing

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Pagination nav renderer
#[derive(Parser, Debug)]
#[command(name = "pagy-nav")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML, or JSON with a .json extension)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Custom styles file (YAML list of styles)
    #[arg(long, global = true)]
    pub styles: Option<PathBuf>,

    /// Output format for JSON results
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments identifying one page of a collection
#[derive(Args, Debug, Clone)]
pub struct PageArgs {
    /// Total number of items
    #[arg(long)]
    pub count: i64,

    /// Current page
    #[arg(short, long, default_value = "1")]
    pub page: i64,

    /// Items per page (overrides the config)
    #[arg(long)]
    pub items: Option<u64>,

    /// Request URL the page links are built from
    #[arg(short, long, default_value = "/")]
    pub url: String,

    /// Drop the page parameter from page 1 links
    #[arg(long)]
    pub trim: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the page series
    Series {
        #[command(flatten)]
        page: PageArgs,

        /// Pages on each side of the current one (overrides the config size)
        #[arg(short, long)]
        window: Option<u64>,
    },

    /// Render the static nav
    Nav {
        #[command(flatten)]
        page: PageArgs,

        /// Style name (defaults to the configured style)
        #[arg(short, long)]
        style: Option<String>,
    },

    /// Render the JS nav container and payload
    NavJs {
        #[command(flatten)]
        page: PageArgs,

        /// Style name (defaults to the configured style)
        #[arg(short, long)]
        style: Option<String>,

        /// DOM id of the container
        #[arg(long, default_value = "pagy-nav")]
        id: String,
    },

    /// Render the combo nav container and payload
    ComboNavJs {
        #[command(flatten)]
        page: PageArgs,

        /// Style name (defaults to the configured style)
        #[arg(short, long)]
        style: Option<String>,

        /// DOM id of the container
        #[arg(long, default_value = "pagy-combo-nav")]
        id: String,
    },

    /// Render the info line
    Info {
        #[command(flatten)]
        page: PageArgs,

        /// Item name (defaults to the configured labels)
        #[arg(long)]
        item_name: Option<String>,
    },

    /// Build the URL of a page
    Url {
        /// Base URL
        url: String,

        /// Target page
        #[arg(short, long)]
        page: u64,

        /// Page parameter name (defaults to the configured one)
        #[arg(long)]
        param: Option<String>,

        /// Drop the page parameter for page 1
        #[arg(long)]
        trim: bool,
    },

    /// Expand a JS nav payload the way the client script does
    Expand {
        /// Payload JSON
        payload: String,

        /// Viewport width used to pick the breakpoint
        #[arg(short, long, default_value = "0")]
        width: u32,
    },

    /// List available styles
    Styles,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}
