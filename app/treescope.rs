//! Command-line interface for treescope.
//!
//! `serve` runs the HTTP server with the frontend; `scan` builds one tree and
//! prints it to stdout.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::exit;
use tracing_subscriber::{EnvFilter, fmt};
use treescope::config::AppConfig;
use treescope::output::{self, format_response};
use treescope::{TreeBuilder, TreeResponse};

/// treescope — browse a directory tree as JSON
#[derive(Parser)]
#[command(name = "treescope", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the tree API and the frontend over HTTP
    Serve(ServeArgs),
    /// Build a tree once and print it
    Scan(ScanArgs),
}

#[derive(Args)]
struct ServeArgs {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind address (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory with the frontend files (overrides config)
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[derive(Args)]
struct ScanArgs {
    /// Root directory (default home dir)
    #[arg(default_value = "~")]
    root: PathBuf,

    /// Max depth below the root
    #[arg(short, long, default_value_t = 3)]
    depth: usize,

    /// Include hidden files
    #[arg(long)]
    hidden: bool,

    /// Exclude patterns (can be repeated)
    #[arg(short = 'I', long = "exclude")]
    exclude_patterns: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Pretty JSON output
    #[arg(short, long)]
    pretty: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Tree,
}

impl From<OutputFormat> for output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => output::OutputFormat::Json,
            OutputFormat::Tree => output::OutputFormat::Tree,
        }
    }
}

impl ServeArgs {
    fn into_config(self) -> Result<AppConfig, config::ConfigError> {
        let mut config = AppConfig::load(self.config.as_deref())?;
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(static_dir) = self.static_dir {
            config.server.static_dir = static_dir;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    match cli.command {
        Command::Serve(args) => run_serve(args).await,
        Command::Scan(args) => run_scan(args),
    }
}

async fn run_serve(args: ServeArgs) {
    let config = match args.into_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            exit(1);
        }
    };

    init_logging(&config.logging.level, &config.logging.format);

    if let Err(e) = treescope::server::serve(config).await {
        tracing::error!("{}", e);
        exit(1);
    }
}

fn run_scan(args: ScanArgs) {
    init_logging("warn", "pretty");

    let response = TreeBuilder::new(args.root)
        .max_depth(args.depth)
        .show_hidden(args.hidden)
        .exclude_patterns(args.exclude_patterns)
        .build();

    match format_response(&response, args.format.into(), args.pretty) {
        Ok(out) => println!("{}", out),
        Err(e) => {
            eprintln!("JSON serialization error: {}", e);
            exit(1);
        }
    }

    if let TreeResponse::Error { .. } = response {
        exit(1);
    }
}

/// Logs go to stderr so `scan` output stays clean.
fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match format {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
