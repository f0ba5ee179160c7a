//! CLI for the Bayesian spam filter
//!
//! # Usage
//!
//! ```bash
//! # Build and save both frequency dictionaries from the learning corpora
//! spam-filter learn
//!
//! # Score a single message against the saved dictionaries
//! spam-filter score "想赢。搜公纵號〔妞姐看牌〕" --threshold 0.09
//!
//! # Evaluate the test corpora and print the threshold sweep
//! spam-filter evaluate
//!
//! # Join raw data files into the normal learning corpus
//! spam-filter join normal learn raw_normal_20170901_20170905.tsv
//! ```

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use spam_rs::classifier::{FrequencyDictionary, ScoreOutcome, SpamClassifier};
use spam_rs::config::Config;
use spam_rs::corpus::join_corpora;
use spam_rs::evaluate::{sweep_thresholds, BatchEvaluator};
use spam_rs::tokenize::TokenNormalizer;

#[derive(Parser)]
#[command(name = "spam-filter")]
#[command(about = "Bayesian spam filter for short text messages", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build both frequency dictionaries from the learning corpora and save them
    Learn,
    /// Score a single message
    Score {
        /// Message text to score
        message: String,
        /// Decision threshold (overrides the configured one)
        #[arg(long)]
        threshold: Option<f64>,
    },
    /// Evaluate the test corpora and print threshold-sweep statistics
    Evaluate,
    /// Join raw data files into a learning or testing corpus
    Join {
        /// Message class the files belong to
        class: MessageClass,
        /// Which corpus the joined file feeds
        purpose: CorpusPurpose,
        /// File names under the raw data directory
        files: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum MessageClass {
    Normal,
    Spam,
}

#[derive(Clone, Copy, ValueEnum)]
enum CorpusPurpose {
    Learn,
    Test,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = if Path::new(&cli.config).exists() {
        Config::from_file(&cli.config)?
    } else {
        Config::default()
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Learn => learn(&config),
        Commands::Score { message, threshold } => {
            score(&config, &message, threshold.unwrap_or(config.classifier.threshold))
        }
        Commands::Evaluate => evaluate(&config),
        Commands::Join {
            class,
            purpose,
            files,
        } => join(&config, class, purpose, &files),
    }
}

fn learn(config: &Config) -> anyhow::Result<()> {
    let normalizer = TokenNormalizer::new();
    let start = Instant::now();

    info!("Start learning ...");
    let normal = FrequencyDictionary::learn(&config.data.learn_normal_path, &normalizer)
        .context("learning normal corpus")?;
    normal
        .save(&config.data.dictionary_normal_path)
        .context("saving normal dictionary")?;

    let spam = FrequencyDictionary::learn(&config.data.learn_spam_path, &normalizer)
        .context("learning spam corpus")?;
    spam.save(&config.data.dictionary_spam_path)
        .context("saving spam dictionary")?;

    info!("Elapsed time: {:.3} seconds", start.elapsed().as_secs_f64());
    println!(
        "Learned {} normal tokens and {} spam tokens",
        normal.len(),
        spam.len()
    );
    Ok(())
}

fn score(config: &Config, message: &str, threshold: f64) -> anyhow::Result<()> {
    let classifier = load_classifier(config)?;

    match classifier.score_message(message)? {
        ScoreOutcome::Scored(probability) => {
            println!("Message [{}] probability of spam: {}", message, probability);
            println!(
                "Under threshold [{}] this message is classified as spam: {}",
                threshold,
                probability >= threshold
            );
        }
        ScoreOutcome::Unscoreable => {
            println!("Message [{}] produced no tokens; unscoreable", message);
        }
    }
    Ok(())
}

fn evaluate(config: &Config) -> anyhow::Result<()> {
    let classifier = load_classifier(config)?;
    let evaluator = BatchEvaluator::new(&classifier);

    let normal = evaluator
        .evaluate(&config.data.test_normal_path, &config.data.log_normal_path)
        .context("evaluating normal test corpus")?;
    let spam = evaluator
        .evaluate(&config.data.test_spam_path, &config.data.log_spam_path)
        .context("evaluating spam test corpus")?;

    println!(
        "Normal messages analysed: {} ({} skipped, {} unscoreable)",
        normal.processed, normal.skipped, normal.unscoreable
    );
    println!(
        "Spam messages analysed: {} ({} skipped, {} unscoreable)",
        spam.processed, spam.skipped, spam.unscoreable
    );

    let points = sweep_thresholds(
        &normal.scores,
        &spam.scores,
        &config.classifier.sweep_thresholds,
    );
    for point in points {
        println!("Threshold: {}", point.threshold);
        println!(
            "Normal regarded as spam = {}; normal msg fail percentage = {}",
            point.false_positives, point.false_positive_rate
        );
        println!(
            "Spam detected as spam = {}; spam msg correct percentage = {}",
            point.true_positives, point.true_positive_rate
        );
        println!();
    }
    Ok(())
}

fn join(
    config: &Config,
    class: MessageClass,
    purpose: CorpusPurpose,
    files: &[String],
) -> anyhow::Result<()> {
    if files.is_empty() {
        anyhow::bail!("no raw files given");
    }

    let sources: Vec<PathBuf> = files
        .iter()
        .map(|name| Path::new(&config.data.raw_dir).join(name))
        .collect();

    let dest = match (class, purpose) {
        (MessageClass::Normal, CorpusPurpose::Learn) => &config.data.learn_normal_path,
        (MessageClass::Normal, CorpusPurpose::Test) => &config.data.test_normal_path,
        (MessageClass::Spam, CorpusPurpose::Learn) => &config.data.learn_spam_path,
        (MessageClass::Spam, CorpusPurpose::Test) => &config.data.test_spam_path,
    };

    let total = join_corpora(&sources, dest).context("joining raw data files")?;
    println!("Joined {} messages into {}", total, dest);
    Ok(())
}

fn load_classifier(config: &Config) -> anyhow::Result<SpamClassifier> {
    let spam = FrequencyDictionary::load(&config.data.dictionary_spam_path)
        .context("loading spam dictionary (run `spam-filter learn` first)")?;
    let normal = FrequencyDictionary::load(&config.data.dictionary_normal_path)
        .context("loading normal dictionary (run `spam-filter learn` first)")?;

    let mut classifier = SpamClassifier::new(spam, normal);
    if let Some(top_k) = config.classifier.top_k {
        classifier = classifier.with_top_k(top_k);
    }
    Ok(classifier)
}
