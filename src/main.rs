use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use lexigraph::config::Config;
use lexigraph::languages::{self, Language};
use lexigraph::output::files::FileSink;
use lexigraph::output::terminal;
use lexigraph::pipeline::batch::{process_directory, process_word_file, TopicOutcome};
use lexigraph::pipeline::topic::TopicPipeline;
use lexigraph::similarity::aggregate::AggregatorKind;
use lexigraph::translate::google::GoogleTranslator;
use lexigraph::translate::traits::{IdentityTranslator, Translator};

/// Lexigraph: compare vocabularies across languages.
///
/// Translates a word list into 2-4 languages, scores how similar the
/// translations look, and draws the result as a language graph.
#[derive(Parser)]
#[command(name = "lexigraph", version, about)]
struct Cli {
    /// Skip translation and compare the source words as-is
    #[arg(long, global = true)]
    offline: bool,

    /// Aggregation policy: diagonal (default) or row-max
    #[arg(long, global = true)]
    aggregator: Option<AggregatorKind>,

    /// Override the results directory
    #[arg(long, global = true)]
    results_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single word file (one word per line)
    Analyze {
        /// Path to the word file; its name becomes the topic
        file: PathBuf,

        /// Comma-separated language names, e.g. "English, Spanish, Polish"
        #[arg(short, long)]
        languages: String,
    },

    /// Analyze every .txt word file in a directory
    Batch {
        dir: PathBuf,

        /// Comma-separated language names, e.g. "English, Spanish, Polish"
        #[arg(short, long)]
        languages: String,
    },

    /// List supported languages
    Languages,

    /// Interactive menu
    Interactive,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lexigraph=info")),
        )
        .init();

    let cli = Cli::parse();

    if let Commands::Languages = cli.command {
        terminal::display_languages();
        return Ok(());
    }

    // Reject a bad selection before creating any output or touching the network
    let selected = match &cli.command {
        Commands::Analyze { languages, .. } | Commands::Batch { languages, .. } => {
            Some(parse_languages(languages)?)
        }
        _ => None,
    };

    let mut config = Config::load()?;
    if let Some(kind) = cli.aggregator {
        config.aggregator = kind;
    }
    if let Some(dir) = cli.results_dir {
        config.results_dir = dir;
    }

    let sink = FileSink::create(&config.results_dir)?;
    let translator = create_translator(&config, cli.offline)?;
    let aggregator = config.aggregator.build();
    let pipeline =
        TopicPipeline::new(translator.as_ref(), aggregator.as_ref(), &sink).with_progress(true);

    match cli.command {
        Commands::Analyze { file, .. } => {
            let selected = selected.unwrap_or_default();
            match process_word_file(&pipeline, &file, &selected).await {
                TopicOutcome::Completed(report) => {
                    terminal::display_topic_report(&report);
                    println!(
                        "\n{}",
                        format!("Results saved to: {}", sink.root().display()).bold()
                    );
                }
                TopicOutcome::Failed { .. } => {
                    anyhow::bail!("Failed to process {}", file.display());
                }
            }
        }

        Commands::Batch { dir, .. } => {
            let selected = selected.unwrap_or_default();
            let summary = process_directory(&pipeline, &dir, &selected).await?;
            terminal::display_batch_summary(&summary);
        }

        Commands::Interactive => {
            println!("{}", "=".repeat(60));
            println!("{}", "Word Similarity Analyzer - Levenshtein Method".bold());
            println!("{}", "=".repeat(60));
            let stdin = io::stdin();
            lexigraph::menu::run(&mut stdin.lock(), &pipeline).await?;
        }

        // Listed before setup
        Commands::Languages => {}
    }

    Ok(())
}

/// Parse and validate a --languages argument.
fn parse_languages(input: &str) -> Result<Vec<Language>> {
    let selected = languages::select(input)?;
    let names: Vec<String> = selected.iter().map(Language::display_name).collect();
    info!(languages = names.join(", "), "Languages selected");
    Ok(selected)
}

/// Create a translator based on configuration and the --offline flag.
fn create_translator(config: &Config, offline: bool) -> Result<Box<dyn Translator>> {
    if offline {
        info!("Offline mode: words are compared untranslated");
        return Ok(Box::new(IdentityTranslator));
    }

    info!(url = %config.translate_url, "Using Google Translate");
    let translator = GoogleTranslator::new(
        &config.translate_url,
        config.translate_qps,
        config.translate_timeout,
    )?;
    Ok(Box::new(translator))
}
