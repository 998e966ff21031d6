use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use kakeibo_core::Categories;
use kakeibo_finance::{classify, rules};
use kakeibo_ingest::{IngestError, read_statement};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod config;
mod report;
mod session;

use config::{Config, OutputFormat};
use session::Session;

#[derive(Parser, Debug)]
#[command(name = "kakeibo", version, about = "Sort card statement CSVs into spending categories")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a Shift_JIS statement CSV and print category totals
    Classify {
        /// Path to the statement CSV
        #[arg(long)]
        csv: PathBuf,

        /// Declared content type, accepted in place of a .csv file name
        #[arg(long)]
        mime: Option<String>,

        /// Print each category's rows
        #[arg(long)]
        items: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Explain how each category is decided
    Rules,

    /// Manage ~/.kakeibo/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config if none exists
    Init,
    /// Print the effective config
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config()?;
    init_tracing(&cfg);

    match cli.command {
        Command::Classify { csv, mime, items, json } => {
            classify_statement(&cfg, csv, mime, items, json).await?;
        }

        Command::Rules => print_rules(),

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => config::show_config()?,
        },
    }

    Ok(())
}

fn init_tracing(cfg: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log.level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Read and classify on a blocking worker; the task owns the result until it
/// hands it back.
async fn run_pass(path: PathBuf, mime: Option<String>) -> Result<Result<Categories, IngestError>> {
    tokio::task::spawn_blocking(move || -> Result<Categories, IngestError> {
        let rows = read_statement(&path, mime.as_deref())?;
        Ok(classify(&rows))
    })
    .await
    .context("classification task failed")
}

async fn classify_statement(
    cfg: &Config,
    csv: PathBuf,
    mime: Option<String>,
    items: bool,
    json: bool,
) -> Result<()> {
    let mut session = Session::default();
    session.start(csv.clone());

    match run_pass(csv.clone(), mime).await? {
        Ok(categories) => session.succeed(categories),
        Err(err) => session.fail(err),
    }

    if let Some(message) = session.error() {
        bail!("{message}");
    }
    let Some(categories) = session.categories() else {
        bail!("classification did not finish");
    };

    let name = csv_name(session.file().unwrap_or(csv.as_path()));
    if json || cfg.output.format == OutputFormat::Json {
        println!("{}", report::render_json(&name, categories)?);
    } else {
        print!("{}", report::render_text(&name, categories, items || cfg.output.show_items));
    }

    session.reset();
    Ok(())
}

fn csv_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn print_rules() {
    println!("計算方法について\n");
    for (category, description) in rules::describe() {
        println!("- {category}: {description}");
    }
    println!("\n計算はすべてこのコンピュータ内で完結し、外部にデータが送信されることはありません。");
}
