use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

use huddlelog::{
    FilterConfig, JsonLog, TextLog, build_turns, parse_export_file, DEFAULT_FILLER_WORDS,
};

#[derive(Parser)]
#[command(name = "huddlelog")]
#[command(author, version, about = "Convert an exported huddle caption log to readable text", long_about = None)]
struct Cli {
    /// HTML export file to convert
    input: PathBuf,

    /// Remove filler words. Without words, uses the defaults ("Hm", "Mhm");
    /// with words, replaces them.
    #[arg(short = 'f', long = "filler-words", num_args = 0.., value_name = "WORD")]
    filler_words: Option<Vec<String>>,

    /// Replace the given words with "<REDACTED>"
    #[arg(short = 'r', long = "redact", num_args = 1.., value_name = "WORD")]
    redact: Option<Vec<String>>,

    /// Write the text log to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write a machine-readable JSON log to this file
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    // Logging goes to stderr so stdout stays a clean transcript.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn run(cli: Cli) -> Result<()> {
    debug!("Loading caption export from {:?}", cli.input);
    let items = parse_export_file(&cli.input)?;
    debug!("Extracted {} caption items", items.len());

    let config = filter_config(&cli);
    let turns = build_turns(&items, &config);
    debug!("Merged into {} turns", turns.len());

    let text = TextLog::new(&turns);
    match &cli.output {
        Some(path) => {
            text.write_file(path)?;
            info!("Text log written to {:?}", path);
        }
        None => print!("{}", text.format()),
    }

    if let Some(path) = &cli.json {
        JsonLog::new(&turns, items.len()).write_json(path)?;
        info!("JSON log written to {:?}", path);
    }

    // Per-option summaries land on stderr, next to any redacted evidence.
    if config.remove_fillers {
        eprintln!(
            "Filler words were removed from the conversation: {}",
            config.filler_words.join(", ")
        );
    }
    if !config.redact_words.is_empty() {
        eprintln!(
            "Words were redacted from the conversation: {}",
            config.redact_words.join(", ")
        );
    }

    Ok(())
}

fn filter_config(cli: &Cli) -> FilterConfig {
    let remove_fillers = cli.filler_words.is_some();
    let filler_words = match &cli.filler_words {
        Some(words) if !words.is_empty() => words.clone(),
        _ => DEFAULT_FILLER_WORDS.iter().map(|w| w.to_string()).collect(),
    };

    FilterConfig {
        remove_fillers,
        filler_words,
        redact_words: cli.redact.clone().unwrap_or_default(),
    }
}
