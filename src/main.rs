//! ctxsplit - split documents into context-window sized parts.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use context_splitter::export::{write_archive_to_dir, write_parts};
use context_splitter::{
    estimate_tokens, group_thousands, NewlineLookback, Preset, Session, Source, SplitConfig,
    SplitMode, Splitter, DEFAULT_PREVIEW_LEN, PASTED_NAME, PRESETS,
};

#[derive(Parser)]
#[command(name = "ctxsplit")]
#[command(about = "Split long text into parts that fit an LLM context window")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a file (or stdin) and list, print or export the parts
    Split {
        #[command(flatten)]
        input: SplitArgs,

        /// Write parts into this directory
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Write a single zip archive instead of loose files
        #[arg(long)]
        zip: bool,

        /// Print the chunks as JSON
        #[arg(long, conflicts_with_all = ["out", "zip"])]
        json: bool,
    },
    /// Print one part's content to stdout
    Show {
        #[command(flatten)]
        input: SplitArgs,

        /// 1-based part number
        #[arg(short, long)]
        index: usize,
    },
    /// List the built-in model presets
    Presets,
    /// Estimate the token count of a file (or stdin)
    Estimate {
        /// Input file, `-` or nothing for stdin
        file: Option<PathBuf>,
    },
}

#[derive(Args)]
struct SplitArgs {
    /// Input file, `-` or nothing for stdin
    file: Option<PathBuf>,

    /// JSON file with `mode`, `size` and `overlap`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Unit of --size: token or char
    #[arg(short, long)]
    mode: Option<SplitMode>,

    /// Maximum tokens or chars per part
    #[arg(short, long)]
    size: Option<usize>,

    /// Use a model preset (see `ctxsplit presets`)
    #[arg(short, long, conflicts_with_all = ["mode", "size"])]
    preset: Option<String>,

    /// Reserved; accepted but not applied
    #[arg(long)]
    overlap: Option<usize>,

    /// Share of each window searched for a newline (0 disables)
    #[arg(long, default_value_t = NewlineLookback::DEFAULT_FRACTION)]
    lookback: f64,
}

impl SplitArgs {
    fn config(&self) -> Result<SplitConfig> {
        let mut config = match &self.config {
            Some(path) => SplitConfig::from_json_file(path)?,
            None => SplitConfig::default(),
        };
        if let Some(key) = &self.preset {
            config = config.apply_preset(Preset::find(key)?);
        }
        if let Some(mode) = self.mode {
            config = config.with_mode(mode);
        }
        if let Some(size) = self.size {
            config = config.with_size(size);
        }
        if let Some(overlap) = self.overlap {
            config = config.with_overlap(overlap);
        }
        Ok(config)
    }

    fn session(&self) -> Result<Session> {
        let lookback = NewlineLookback::new(self.lookback)?;
        let splitter = Splitter::with_break_point(self.config()?, lookback);
        let mut session = Session::with_splitter(splitter);
        session.load(read_source(self.file.as_ref())?);
        Ok(session)
    }
}

fn read_source(file: Option<&PathBuf>) -> Result<Source> {
    match file {
        Some(path) if path.as_os_str() != "-" => Source::from_path(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => Source::from_reader(io::stdin().lock(), PASTED_NAME).context("failed to read stdin"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("context_splitter=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Split {
            input,
            out,
            zip,
            json,
        } => {
            let session = input.session()?;
            let chunks = session.chunks();
            let name = session
                .source()
                .map_or(PASTED_NAME, |source| source.file_name());

            if json {
                let stdout = io::stdout().lock();
                serde_json::to_writer_pretty(stdout, chunks).context("failed to write JSON")?;
                println!();
                return Ok(());
            }

            if let Some(summary) = session.summary() {
                eprintln!("{summary}");
            }

            if zip || out.is_some() {
                let dir = out.unwrap_or_else(|| PathBuf::from("."));
                if zip {
                    let path = write_archive_to_dir(&dir, name, chunks)?;
                    println!("{}", path.display());
                } else {
                    for path in write_parts(&dir, name, chunks)? {
                        println!("{}", path.display());
                    }
                }
                return Ok(());
            }

            for chunk in chunks {
                println!("{}", chunk.card(chunks.len()));
                for line in chunk.preview(DEFAULT_PREVIEW_LEN).lines() {
                    println!("    {line}");
                }
                println!();
            }
        }
        Commands::Show { input, index } => {
            let session = input.session()?;
            let chunk = session.chunk(index)?;
            let mut stdout = io::stdout().lock();
            stdout.write_all(chunk.content().as_bytes())?;
            stdout.flush()?;
        }
        Commands::Presets => {
            for preset in PRESETS {
                println!(
                    "{:<20} {:>10} tokens  {}",
                    preset.key,
                    group_thousands(preset.size),
                    preset.label
                );
            }
        }
        Commands::Estimate { file } => {
            let source = read_source(file.as_ref())?;
            let content = source.content();
            println!(
                "{}: {} chars, ~{} tokens",
                source.file_name(),
                group_thousands(content.chars().count()),
                group_thousands(estimate_tokens(content))
            );
        }
    }

    Ok(())
}
