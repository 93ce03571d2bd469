use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use extracto_ingest::{
    PdfTextExtractor, PlainTextExtractor, TextExtractor, TransactionRecord, extract_from_path,
};
use extracto_server::Application;
use extracto_server::telemetry::init_tracing;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

mod config;
mod output;
mod state;

use output::{OutputFormat, write_records};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("EXTRACTO_BUILD_SHA"),
    ")"
);

#[derive(Parser, Debug)]
#[command(
    name = "extracto",
    version,
    long_version = LONG_VERSION,
    about = "Extract transactions from bank statement PDFs"
)]
struct Cli {
    /// tracing filter directive (overrides config; EXTRACTO_LOG overrides both)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the upload form and the /extract endpoint
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,
    },

    /// Extract transactions from one or more statements and print them
    Parse {
        /// Statement files, parsed in the order given
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Inputs are text dumps with form-feed page breaks (pdftotext output)
        #[arg(long)]
        text: bool,
    },

    /// Configuration file commands
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config to ~/.extracto/config.toml
    Init,

    /// Print the effective config
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config()?;

    let level = cli.log_level.as_deref().unwrap_or(cfg.log.level.as_str());
    init_tracing(level, cli.json_logs || cfg.log.json);

    match cli.command {
        Command::Serve { host, port } => {
            let mut server_cfg = cfg.server.clone();
            if let Some(host) = host {
                server_cfg.host = host;
            }
            if let Some(port) = port {
                server_cfg.port = port;
            }

            let app = Application::build(server_cfg, Arc::new(PdfTextExtractor))
                .await
                .context("starting server")?;
            println!("Listening on port {}", app.port());
            app.run_until_stopped().await.context("server error")?;
        }

        Command::Parse {
            files,
            format,
            text,
        } => {
            let extractor: &dyn TextExtractor = if text {
                &PlainTextExtractor
            } else {
                &PdfTextExtractor
            };
            parse_files(extractor, &files, format)?;
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                println!("# {}", config::config_path()?.display());
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

fn parse_files(
    extractor: &dyn TextExtractor,
    files: &[PathBuf],
    format: OutputFormat,
) -> Result<()> {
    let all = collect_records(extractor, files)?;
    write_records(io::stdout().lock(), &all, format)
}

/// Parse `files` in order into one flat list; a missing file stops the run.
fn collect_records(
    extractor: &dyn TextExtractor,
    files: &[PathBuf],
) -> Result<Vec<TransactionRecord>> {
    let mut all = Vec::new();

    for path in files {
        if !path.exists() {
            bail!("statement not found: {}", path.display());
        }
        let txns = extract_from_path(extractor, path)
            .with_context(|| format!("parsing {}", path.display()))?;
        tracing::info!(file = %path.display(), records = txns.len(), "statement parsed");
        all.extend(txns);
    }

    Ok(all)
}
