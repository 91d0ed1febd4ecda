use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use reflow::config::{LogFormat, ReflowConfig};
use reflow::logging;

#[derive(Parser)]
#[command(name = "reflow")]
#[command(about = "Rejoin hard-wrapped plain text into paragraphs")]
#[command(version)]
struct Args {
    /// Text file to reflow
    input: PathBuf,

    /// Log filter directive, e.g. `info` or `reflow=debug`
    #[arg(long)]
    log_level: Option<String>,

    /// Write logs as JSON lines
    #[arg(long)]
    log_json: bool,

    /// Configuration file (defaults to ./reflow.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut cfg = ReflowConfig::load(args.config.as_deref())?;
    if let Some(level) = args.log_level {
        cfg.log.level = Some(level);
    }
    if args.log_json {
        cfg.log.format = LogFormat::Json;
    }
    logging::init(&cfg.log)?;

    let doc = reflow::reflow_file(&args.input)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", doc.text)?;
    stdout.flush()?;

    Ok(())
}
