use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use nabory::pipeline::build_rows;
use nabory::report::write_rows;
use nabory_core::config::{Config, OutputFormat, UnrecognizedPolicy};
use nabory_core::SalaryNormalizer;
use nabory_feeds::lines::LineFeed;
use nabory_feeds::xml::XmlFeed;
use nabory_feeds::FeedSource;

#[derive(Parser)]
#[command(name = "nabory", about = "Normalise salaries in the civil-service vacancy feed")]
struct Cli {
    /// Feed XML export or salary strings one per line. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Input format. Defaults to `xml` for `.xml` files, `lines` otherwise.
    #[arg(long, value_enum)]
    input_format: Option<InputFormat>,

    /// Report format (overrides `[output] format`).
    #[arg(long, value_enum)]
    output: Option<OutputArg>,

    /// What to do with unrecognised salaries (overrides `[output] on_unrecognized`).
    #[arg(long, value_enum)]
    on_unrecognized: Option<PolicyArg>,

    /// Config file to use instead of ~/.config/nabory/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log at debug level to stderr.
    #[arg(long)]
    debug: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum InputFormat {
    Xml,
    Lines,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputArg {
    Tsv,
    Jsonl,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Tsv => OutputFormat::Tsv,
            OutputArg::Jsonl => OutputFormat::Jsonl,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    Fail,
    Skip,
}

impl From<PolicyArg> for UnrecognizedPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Fail => UnrecognizedPolicy::Fail,
            PolicyArg::Skip => UnrecognizedPolicy::Skip,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let format = cli.output.map(Into::into).unwrap_or(config.output.format);
    let policy = cli
        .on_unrecognized
        .map(Into::into)
        .unwrap_or(config.output.on_unrecognized);
    let normalizer = SalaryNormalizer::from_config(&config.normalizer);

    let input_format = cli
        .input_format
        .unwrap_or_else(|| infer_format(cli.input.as_deref()));
    let source: Box<dyn Read> = match &cli.input {
        Some(path) => Box::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        ),
        None => Box::new(std::io::stdin().lock()),
    };
    let offers = match input_format {
        InputFormat::Xml => XmlFeed::new(source).offers(),
        InputFormat::Lines => LineFeed::new(BufReader::new(source)).offers(),
    }
    .context("reading feed")?;
    tracing::info!(offers = offers.len(), "feed loaded");

    let outcome = build_rows(offers, &normalizer, policy)
        .context("salary needs a new grammar rule")?;
    if !outcome.skipped.is_empty() {
        tracing::warn!(skipped = outcome.skipped.len(), "rows with unrecognized salaries were dropped");
    }

    let mut out = std::io::BufWriter::new(std::io::stdout().lock());
    write_rows(&mut out, &outcome.rows, format)
}

fn infer_format(input: Option<&Path>) -> InputFormat {
    match input.and_then(|p| p.extension()) {
        Some(ext) if ext.eq_ignore_ascii_case("xml") => InputFormat::Xml,
        _ => InputFormat::Lines,
    }
}
