//! Sentiment dashboard CLI
//!
//! Loads a batch of texts, scores each with both sentiment models, prints
//! a per-record summary and writes the six-panel dashboard as SVG.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use sentiment_dashboard::{
    utils::{setup_logging, Config},
    AnalysisReport, CsvFileSource, DashboardLayout, DashboardRenderer, EmbeddedSource,
    PipelineStage, RecordSource, SentimentPipeline, SvgRenderer,
};

/// Widest text excerpt shown in the summary table
const EXCERPT_CHARS: usize = 48;

#[derive(Parser)]
#[command(name = "sentiment_dashboard")]
#[command(version)]
#[command(about = "Lexicon sentiment scoring with a six-panel dashboard", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// CSV file with a `text` column (defaults to the embedded sample)
    #[arg(short, long)]
    input: Option<String>,

    /// Output SVG path
    #[arg(short, long)]
    output: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Score and print the summary without drawing
    #[arg(long)]
    no_render: bool,

    /// Tab-separated valence lexicon merged over the builtin one
    #[arg(long)]
    lexicon: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path).with_context(|| format!("loading config {path}"))?,
        None => Config::default(),
    };
    apply_overrides(&mut config, cli);

    setup_logging(&config.logging.level);
    info!("Sentiment dashboard v{}", sentiment_dashboard::VERSION);

    let pipeline = SentimentPipeline::from_config(&config.input)?;

    let source: Box<dyn RecordSource> = match &config.input.path {
        Some(path) => Box::new(CsvFileSource::new(path)),
        None => Box::new(EmbeddedSource),
    };
    let records = source
        .load()
        .with_context(|| format!("loading records from {}", source.name()))?;
    info!("Loaded {} records from {}", records.len(), source.name());

    let report = pipeline.analyze(&records)?;
    print_summary(&report);

    if !config.output.render {
        info!("Rendering disabled");
        return Ok(());
    }

    let layout = DashboardLayout::from_report(&report);
    let mut renderer = SvgRenderer::new(&config.output.path)
        .with_size(config.output.width, config.output.height);
    renderer.render(&layout)?;
    info!("Pipeline {}: {}", PipelineStage::Rendered, renderer.path().display());

    Ok(())
}

/// CLI values win over the config file
fn apply_overrides(config: &mut Config, cli: Cli) {
    if let Some(input) = cli.input {
        config.input.path = Some(input);
    }
    if let Some(lexicon) = cli.lexicon {
        config.input.lexicon = Some(lexicon);
    }
    if let Some(output) = cli.output {
        config.output.path = output;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if cli.no_render {
        config.output.render = false;
    }
}

fn print_summary(report: &AnalysisReport) {
    println!("\n=== Sentiment Summary ===\n");
    println!(
        "{:>4}  {:>8}  {:>12}  {:>8}  {:<8}  {}",
        "#", "Polarity", "Subjectivity", "Compound", "Label", "Text"
    );
    println!("{}", "-".repeat(100));

    for record in &report.records {
        println!(
            "{:>4}  {:>8.3}  {:>12.3}  {:>8.4}  {:<8}  {}",
            record.position,
            record.polarity,
            record.subjectivity,
            record.compound,
            record.label,
            excerpt(&record.text)
        );
    }

    println!("\nRecords: {}", report.len());
    println!("Labels: {}", report.counts);
    println!("Mean polarity: {:.3}", report.mean_polarity());
    println!("Model disagreements: {}", report.disagreements());
}

fn excerpt(text: &str) -> String {
    if text.chars().count() <= EXCERPT_CHARS {
        return text.to_string();
    }
    let head: String = text.chars().take(EXCERPT_CHARS - 3).collect();
    format!("{head}...")
}
