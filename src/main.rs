//! corpus-search CLI
//!
//! ```bash
//! # Rank documents for a query
//! corpus-search search "oil prices" --corpus mycorpus
//!
//! # Per-group document and word counts
//! corpus-search stats
//!
//! # Full document with query terms highlighted
//! corpus-search show training/1042 --query "oil"
//!
//! # Flatten the corpus to a text file
//! corpus-search export --output corpus_output.txt
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use corpus_search::config::Config;
use corpus_search::corpus::{export_to_path, CorpusIndex};
use corpus_search::search::{highlight, render_snippet, CorpusFilter, FilterField};
use corpus_search::{logging, Error, Result};

/// Search a corpus of short news documents
#[derive(Parser, Debug)]
#[command(name = "corpus-search")]
#[command(version)]
#[command(about = "Ranked search over a local text corpus", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// TOML configuration file
    #[arg(long, short = 'c', global = true, env = "CORPUS_SEARCH_CONFIG")]
    config: Option<PathBuf>,

    /// Corpus directory (overrides the configuration)
    #[arg(long, global = true)]
    corpus: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output for scripting
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank documents against a query
    Search(SearchArgs),

    /// Show corpus and per-group counts
    Stats,

    /// Show one document, optionally highlighting query terms
    Show(ShowArgs),

    /// List documents matching browse filters
    List(FilterArgs),

    /// Write every document to a flat text file
    Export(ExportArgs),
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Free-text query
    query: String,

    #[command(flatten)]
    filters: FilterArgs,
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// Document id, e.g. training/1042
    id: String,

    /// Query whose terms are highlighted
    #[arg(long, short = 'q')]
    query: Option<String>,
}

#[derive(Args, Debug, Default)]
struct FilterArgs {
    /// Substring the id must contain
    #[arg(long)]
    id_contains: Option<String>,

    /// Substring the title must contain
    #[arg(long)]
    title_contains: Option<String>,

    /// Substring the content must contain
    #[arg(long)]
    content_contains: Option<String>,

    /// Match substrings case-sensitively
    #[arg(long)]
    case_sensitive: bool,

    /// Minimum raw word count
    #[arg(long)]
    min_words: Option<usize>,

    /// Maximum raw word count
    #[arg(long)]
    max_words: Option<usize>,
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Output path (defaults to the configured export path)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,
}

impl FilterArgs {
    fn to_filter(&self) -> CorpusFilter {
        let mut filter = CorpusFilter::new().case_sensitive(self.case_sensitive);
        for (field, value) in [
            (FilterField::Id, &self.id_contains),
            (FilterField::Title, &self.title_contains),
            (FilterField::Content, &self.content_contains),
        ] {
            if let Some(value) = value {
                filter = filter.field(field, value.clone());
            }
        }
        if self.min_words.is_some() || self.max_words.is_some() {
            filter = filter.word_count_between(
                self.min_words.unwrap_or(0),
                self.max_words.unwrap_or(usize::MAX),
            );
        }
        filter
    }
}

#[derive(Debug, Serialize)]
struct DocumentRow<'a> {
    id: &'a str,
    title: &'a str,
    word_count: usize,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(dir) = &cli.corpus {
        config.corpus.directory = dir.clone();
    }

    logging::init(&config.logging.level, config.logging.json)?;

    let corpus = config.loader().load_index(config.normalizer()?);

    match cli.command {
        Commands::Search(args) => search(&config, &corpus, &args, cli.format),
        Commands::Stats => stats(&corpus, cli.format),
        Commands::Show(args) => show(&corpus, &args, cli.format),
        Commands::List(args) => list(&corpus, &args, cli.format),
        Commands::Export(args) => {
            let path = args.output.unwrap_or_else(|| config.export.path.clone());
            let written = export_to_path(&corpus, &path)?;
            println!("Exported {written} documents to {}", path.display());
            Ok(())
        }
    }
}

fn search(
    config: &Config,
    corpus: &CorpusIndex,
    args: &SearchArgs,
    format: OutputFormat,
) -> Result<()> {
    let engine = config.query_engine();
    let filter = args.filters.to_filter();

    let response = if filter.is_empty() {
        engine.search(&args.query, corpus)
    } else {
        engine.search_within(&args.query, corpus, filter.apply(corpus))
    };

    if format == OutputFormat::Json {
        return print_json(&response);
    }

    if response.is_empty() {
        println!("No matching documents found. Please try a different query.");
        return Ok(());
    }

    println!("Found {} relevant documents.\n", response.search.documents_matched);
    for result in &response.results {
        println!("Title: {} (Relevance: {})", result.title, result.relevance);
        println!("Document ID: {}", result.document_id);
        println!("{}\n", render_snippet(&result.snippet, &response.search.tokens));
    }
    Ok(())
}

fn stats(corpus: &CorpusIndex, format: OutputFormat) -> Result<()> {
    let summary = corpus.summary();
    if format == OutputFormat::Json {
        return print_json(&summary);
    }

    println!("Corpus version: {}", summary.corpus_version);
    println!(
        "Documents: {} ({} duplicates dropped)",
        summary.document_count, summary.duplicates_dropped
    );
    println!("Words: {}", summary.word_count);
    for (group, stats) in &summary.groups {
        println!(
            "  {group}: {} documents, {} words",
            stats.document_count, stats.word_count
        );
    }
    Ok(())
}

fn show(corpus: &CorpusIndex, args: &ShowArgs, format: OutputFormat) -> Result<()> {
    let doc = corpus
        .get(&args.id)
        .ok_or_else(|| Error::NotFound(args.id.clone()))?;

    let tokens = args
        .query
        .as_deref()
        .map(|q| corpus.normalizer().normalize(q))
        .unwrap_or_default();

    if format == OutputFormat::Json {
        return print_json(doc);
    }

    println!("Title: {}", doc.title);
    println!("Document ID: {}", doc.id);
    println!("Word Count: {}\n", doc.word_count);
    println!("{}", highlight(&doc.content, &tokens));
    Ok(())
}

fn list(corpus: &CorpusIndex, args: &FilterArgs, format: OutputFormat) -> Result<()> {
    let documents = args.to_filter().apply(corpus);

    if format == OutputFormat::Json {
        let rows: Vec<DocumentRow> = documents
            .iter()
            .map(|d| DocumentRow {
                id: d.id.as_str(),
                title: &d.title,
                word_count: d.word_count,
            })
            .collect();
        return print_json(&rows);
    }

    if documents.is_empty() {
        println!("No documents match the applied filters.");
        return Ok(());
    }

    println!("Found {} documents matching the filters.", documents.len());
    for doc in documents {
        println!("{}\t{}\t{}", doc.id, doc.word_count, doc.title);
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
