use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use potfield_driver::Session;
use potfield_engine::{EngineConfig, FieldEngine, DEFAULT_MAX_CELLS};

#[derive(Parser, Debug)]
#[command(author, version, about = "Potential-field command interpreter", long_about = None)]
struct Args {
    /// read commands from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// log level written to stderr (off, error, warn, info, debug, trace)
    #[arg(short, long)]
    verbosity: Option<String>,

    /// gain installed by every CREATE
    #[arg(long, default_value_t = 1.0)]
    default_gain: f64,

    /// largest grid CREATE may allocate, in cells
    #[arg(long, default_value_t = DEFAULT_MAX_CELLS)]
    max_cells: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::builder()
        .filter_level(LevelFilter::from_str(
            args.verbosity.as_deref().unwrap_or("off"),
        )?)
        .init();

    let engine = FieldEngine::with_config(EngineConfig {
        default_gain: args.default_gain,
        max_cells: args.max_cells,
    })
    .context("invalid engine configuration")?;
    let mut session = Session::with_engine(engine);

    let stdout = io::stdout();
    let writer = BufWriter::new(stdout.lock());
    let stats = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            session.run(BufReader::new(file), writer)?
        }
        None => session.run(io::stdin().lock(), writer)?,
    };

    log::debug!("{stats:?}");
    Ok(())
}
