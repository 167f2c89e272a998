//! Digital Nose — simulate VOC captures, train the classifier, report scents

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::path::PathBuf;

use dnose_core::{ProfileRegistry, ScentFamily, ScentProfile, VOC_CHANNELS};
use dnose_ml::{split_holdout, CentroidClassifier, Evaluation};
use dnose_sensor::SensorSimulator;

mod dataset;
mod report;

use report::ScentReport;

const DEFAULT_DATASET: &str = "data/sample_scent_readings.csv";

#[derive(Parser)]
#[command(name = "dnose")]
#[command(version = "2026.1.16")]
#[command(about = "Digital Nose - simulated VOC scent classification", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the labeled sample dataset as CSV
    Dataset {
        /// Output CSV path
        #[arg(short, long, value_name = "PATH", default_value = DEFAULT_DATASET)]
        out: PathBuf,

        /// Captures to simulate per scent family
        #[arg(short, long, default_value_t = 120)]
        samples: usize,

        /// Base seed for the per-family random streams
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Regenerate even if the file exists
        #[arg(short, long)]
        force: bool,
    },

    /// Train the classifier and print holdout accuracy
    Train {
        /// Dataset CSV (generated first if missing)
        #[arg(short, long, value_name = "PATH", default_value = DEFAULT_DATASET)]
        dataset: PathBuf,

        /// Fraction of rows held out for evaluation
        #[arg(long, default_value_t = 0.2)]
        holdout: f64,

        /// Seed for the holdout shuffle (and dataset generation if needed)
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Write the trained model as JSON
        #[arg(short, long, value_name = "PATH")]
        model_out: Option<PathBuf>,
    },

    /// Simulate one live capture and print its scent report
    Sniff {
        /// Scent family to simulate (random if omitted)
        #[arg(short, long, value_name = "FAMILY")]
        family: Option<String>,

        /// Dataset CSV to train from (generated first if missing)
        #[arg(short, long, value_name = "PATH", default_value = DEFAULT_DATASET)]
        dataset: PathBuf,

        /// Seed for the live capture (random if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the report as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// List registered scent profiles and their channel parameters
    Profiles,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Dataset {
            out,
            samples,
            seed,
            force,
        } => dataset_command(&out, samples, seed, force),
        Commands::Train {
            dataset,
            holdout,
            seed,
            model_out,
        } => train_command(&dataset, holdout, seed, model_out.as_deref()),
        Commands::Sniff {
            family,
            dataset,
            seed,
            json,
        } => sniff_command(family.as_deref(), &dataset, seed, json),
        Commands::Profiles => profiles_command(),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn dataset_command(out: &std::path::Path, samples: usize, seed: u64, force: bool) -> Result<()> {
    if samples == 0 {
        return Err(anyhow!("--samples must be at least 1"));
    }

    let registry = ProfileRegistry::builtin();
    if out.exists() && !force {
        return Err(anyhow!(
            "{} already exists (use --force to regenerate)",
            out.display()
        ));
    }

    let rows = dataset::build_dataset(&registry, samples, seed)?;
    dataset::write_csv(out, &rows)?;
    println!(
        "{} {} rows ({} families x {} samples) -> {}",
        "dataset:".green().bold(),
        rows.len(),
        registry.len(),
        samples,
        out.display()
    );
    Ok(())
}

fn train_command(
    dataset_path: &std::path::Path,
    holdout: f64,
    seed: u64,
    model_out: Option<&std::path::Path>,
) -> Result<()> {
    let registry = ProfileRegistry::builtin();
    dataset::ensure_dataset(dataset_path, &registry, 120, seed, false)?;

    let rows = dataset::read_csv(dataset_path)?;
    let set = dataset::to_training_set(&rows);
    let (train, test) = split_holdout(&set, holdout, seed)?;

    let mut classifier = CentroidClassifier::new();
    classifier.train(&train)?;
    let evaluation = classifier.evaluate(&test)?;

    println!("{}", "Model trained.".cyan().bold());
    print_evaluation(&evaluation);

    if let Some(path) = model_out {
        let model = classifier.model().ok_or_else(|| anyhow!("model missing after training"))?;
        std::fs::write(path, model.to_json()?)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("{} {}", "model saved:".green().bold(), path.display());
    }
    Ok(())
}

fn sniff_command(
    family: Option<&str>,
    dataset_path: &std::path::Path,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let registry = ProfileRegistry::builtin();
    dataset::ensure_dataset(dataset_path, &registry, 120, 42, false)?;

    let rows = dataset::read_csv(dataset_path)?;
    let set = dataset::to_training_set(&rows);
    let mut classifier = CentroidClassifier::new();
    classifier.train(&set)?;

    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    let profile = match family {
        Some(name) => {
            let family: ScentFamily = name.parse()?;
            registry
                .get(family)
                .ok_or_else(|| anyhow!("family '{family}' is not registered"))?
        }
        None => registry
            .profiles()
            .choose(&mut rng)
            .ok_or_else(|| anyhow!("registry is empty"))?,
    };

    let simulator = SensorSimulator::new();
    let capture = simulator.capture(profile, &mut rng)?;
    let prediction = classifier.predict(&capture.fingerprint)?;
    let report = ScentReport::from_prediction(
        &prediction,
        capture.fingerprint.total(),
        capture.ambient,
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(profile, &report, seed);
    }
    Ok(())
}

fn profiles_command() -> Result<()> {
    let registry = ProfileRegistry::builtin();
    println!(
        "{} {} families, {} channels",
        "registry:".cyan().bold(),
        registry.len(),
        registry.channel_count()
    );

    for profile in registry.profiles() {
        print_profile(profile);
    }
    Ok(())
}

fn print_evaluation(evaluation: &Evaluation) {
    println!(
        "  overall accuracy: {} ({} samples)",
        format!("{:.1}%", evaluation.overall_accuracy * 100.0).bold(),
        evaluation.samples_evaluated
    );
    for (family, tally) in &evaluation.per_class {
        match tally.accuracy() {
            Some(acc) => println!(
                "  {:<8} {:>5.1}%  ({}/{})",
                family.to_string(),
                acc * 100.0,
                tally.correct,
                tally.total
            ),
            None => println!("  {:<8}    n/a", family.to_string()),
        }
    }
}

fn print_report(profile: &ScentProfile, report: &ScentReport, seed: u64) {
    println!("{}", "Scent Report".green().bold());
    println!("  simulated family: {} (seed {})", profile.family, seed);
    println!(
        "  predicted family: {} ({:.1}% confidence)",
        report.predicted_family.to_string().bold(),
        report.confidence * 100.0
    );
    println!("  intensity index:  {:.1} / 100", report.intensity_index);
    println!(
        "  environment:      {:.1} C, {:.1}% RH",
        report.environment.temperature_c, report.environment.humidity_pct
    );
    println!("  scores:");
    for (family, confidence) in &report.scores {
        println!("    {:<8} {:>5.1}%", family.to_string(), confidence * 100.0);
    }
}

fn print_profile(profile: &ScentProfile) {
    println!("  {}", profile.family.to_string().bold());
    for (name, params) in VOC_CHANNELS.iter().zip(&profile.channels) {
        println!(
            "    {:<22} {:>7.1} ppb (sd {:.1})",
            name, params.mean, params.std_dev
        );
    }
    println!(
        "    ambient: {:.1}-{:.1} C, {:.0}-{:.0}% RH",
        profile.ambient.temperature_c.lo,
        profile.ambient.temperature_c.hi,
        profile.ambient.humidity_pct.lo,
        profile.ambient.humidity_pct.hi
    );
}
