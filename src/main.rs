use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tenday_core::config::Config;
use tenday_core::export::ExportFormat;
use tenday_core::NormalizedBatch;
use tenday_feeds::{FileSource, WebSource, ZipCode};
use tenday::pipeline;
use tokio::io::{AsyncBufReadExt, BufReader};

const DEBUG_LOG: &str = "/tmp/tenday-debug.log";

#[derive(Parser)]
#[command(
    name = "tenday",
    version,
    about = "Ten-day forecast scraper: forecast text to structured day records"
)]
struct Cli {
    /// 5-digit US ZIP code. Prompted for when neither ZIP nor --input is given.
    zip: Option<String>,

    /// Read forecast lines from a file (`-` for stdin) instead of the web.
    #[arg(long, short, conflicts_with = "zip")]
    input: Option<PathBuf>,

    /// Output format: csv, jsonl or table. Defaults to `[export] format`.
    #[arg(long, short)]
    format: Option<ExportFormat>,

    /// Write records to this file instead of stdout.
    #[arg(long, short, conflicts_with = "save")]
    output: Option<PathBuf>,

    /// Write records to `<export.directory>/<file_name_template>.<ext>`.
    #[arg(long)]
    save: bool,

    /// Print column statistics and the correlation matrix after the records.
    #[arg(long)]
    summary: bool,

    /// List the lines that could not be parsed on stderr.
    #[arg(long)]
    skipped: bool,

    /// Open the interactive table and chart viewer.
    #[arg(long)]
    tui: bool,

    /// Use this config file instead of ~/.config/tenday/config.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write debug logs to /tmp/tenday-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug, cli.tui)?;

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;
    let format = match cli.format {
        Some(format) => format,
        None => config.export.format()?,
    };

    let (batch, label) = if let Some(input) = &cli.input {
        let batch = pipeline::collect(&FileSource::new(input)).await?;
        (batch, pipeline::output_label(None, Some(input)))
    } else {
        let zip = match &cli.zip {
            Some(zip) => zip.parse::<ZipCode>(),
            None => prompt_zip().await?.parse::<ZipCode>(),
        }
        .map_err(|err| anyhow::anyhow!(err.user_message()))?;
        let batch = pipeline::collect(&WebSource::new(zip.clone(), &config.fetch)).await?;
        (batch, pipeline::output_label(Some(&zip), None))
    };

    if cli.skipped {
        pipeline::write_skipped(&batch, io::stderr().lock())?;
    }

    let today = chrono::Local::now().date_naive();
    let save_path = pipeline::save_path(&config.export, &label, today, format);

    if cli.tui {
        return tenday_tui::run(batch, config, save_path);
    }

    if cli.save || cli.output.is_some() {
        let path = cli.output.clone().unwrap_or(save_path);
        tenday_core::export::export_to_path(&batch.records, format, &path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Forecast data stored to {}", path.display());
        if cli.summary {
            pipeline::write_summary(&batch, io::stdout().lock())?;
        }
    } else {
        write_stdout(&batch, format, cli.summary)?;
    }

    Ok(())
}

fn write_stdout(batch: &NormalizedBatch, format: ExportFormat, summary: bool) -> anyhow::Result<()> {
    let stdout = io::stdout().lock();
    match pipeline::write_report(batch, format, summary, stdout) {
        // `tenday | head` closes the pipe early
        Err(err)
            if err
                .downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe) =>
        {
            Ok(())
        }
        other => other,
    }
}

async fn prompt_zip() -> anyhow::Result<String> {
    print!("Enter 5-digit zip code: ");
    io::stdout().flush()?;
    let mut line = String::new();
    BufReader::new(tokio::io::stdin()).read_line(&mut line).await?;
    Ok(line.trim().to_string())
}

fn init_tracing(debug: bool, tui: bool) -> anyhow::Result<()> {
    let filter = |default: &str| {
        tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default))
    };

    if debug || tui {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(DEBUG_LOG)?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(filter(if debug { "debug" } else { "info" }))
            .init();
        tracing::info!("tenday log started — tail -f {DEBUG_LOG}");
    } else {
        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_env_filter(filter("warn"))
            .init();
    }
    Ok(())
}
