//! Interactive ID3 decision tree tool.
//!
//! Loads a delimited dataset (last column is the outcome), reports
//! contradictory rows, induces a tree, prints it and exports it as Graphviz
//! DOT, then classifies samples typed at the prompt.
//!
//! Usage:
//!   id3 [DATASET] [--report terminal|file|none] [--conflicts fallback|most-common]
//!       [--fallback-label TEXT] [--out-dir DIR] [--no-export] [--no-color]
//!
//! Anything not given on the command line is asked for interactively. Logging
//! goes to stderr and is controlled with `RUST_LOG` (default `warn`).

use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use id3tree::data::Dataset;
use id3tree::inference::Assignment;
use id3tree::render::{self, graphviz_hints, prediction_path_to_dot, render_tree, tree_to_dot};
use id3tree::training::{
    ConflictPolicy, ConflictRegistry, DEFAULT_FALLBACK_LABEL, ReportMode, TreeBuilder, TreeConfig,
    detect_conflicts,
};
use id3tree::{DecisionTree, read_delimited};

/// File the buffered entropy report is saved to in `file` mode.
const REPORT_FILE: &str = "entropy_output.txt";

const EXIT_WORD: &str = "exit";

#[derive(Parser)]
#[command(name = "id3")]
#[command(about = "Build an ID3 decision tree from a delimited file and predict interactively", long_about = None)]
struct Cli {
    /// Dataset file (CSV/TXT); the last column is the outcome
    #[arg(value_name = "DATASET")]
    dataset: Option<PathBuf>,

    /// Where the entropy and gain breakdown goes
    #[arg(long, value_name = "MODE")]
    report: Option<ReportMode>,

    /// How conflicting rows are labelled (asked only when conflicts exist)
    #[arg(long, value_name = "POLICY")]
    conflicts: Option<ConflictPolicy>,

    /// Leaf label used by the fallback conflict policy
    #[arg(long, value_name = "TEXT", default_value = DEFAULT_FALLBACK_LABEL)]
    fallback_label: String,

    /// Root directory for DOT output
    #[arg(long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Do not write DOT files
    #[arg(long)]
    no_export: bool,

    /// Disable ANSI colours
    #[arg(long)]
    no_color: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .try_init();
}

// =============================================================================
// Prompting
// =============================================================================

/// Line-oriented stdin reader.
struct Prompt<R> {
    input: R,
}

impl<R: BufRead> Prompt<R> {
    fn new(input: R) -> Self {
        Self { input }
    }

    /// Print `question` and read one trimmed line. `None` at end of input.
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        print!("{question}");
        io::stdout().flush().context("failed to flush stdout")?;

        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn ask_report_mode<R: BufRead>(prompt: &mut Prompt<R>) -> Result<ReportMode> {
    println!("---------------------------------------------------------");
    println!("How would you like to view entropy and gain calculations?");
    println!("1. Show in terminal");
    println!("2. Save to file ({REPORT_FILE})");
    println!("3. Skip showing calculations");
    let answer = prompt.ask("Enter choice (1/2/3): ")?.unwrap_or_default();
    Ok(answer.parse().unwrap_or_else(|_| {
        println!("Invalid input. Defaulting to terminal.");
        ReportMode::Terminal
    }))
}

fn print_conflicts(registry: &ConflictRegistry) {
    for conflict in registry.iter() {
        println!("⚠️ Conflict detected:");
        print!("{conflict}");
    }
}

fn ask_conflict_policy<R: BufRead>(prompt: &mut Prompt<R>, fallback_label: &str) -> Result<ConflictPolicy> {
    println!();
    println!("There are conflicts in the data (same inputs → different outcomes).");
    println!("1. Use '{fallback_label}' for conflicting inputs");
    println!("2. Automatically choose the most common decision");
    let answer = prompt.ask("Choose how to handle them (1/2): ")?.unwrap_or_default();
    Ok(if answer == "1" {
        ConflictPolicy::FallbackLabel
    } else {
        ConflictPolicy::MostCommon
    })
}

// =============================================================================
// Output
// =============================================================================

fn write_dot(path: &Path, contents: &str) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}

fn export_tree(tree: &DecisionTree, cli: &Cli, dataset_path: &Path) -> Result<()> {
    let dot_path = render::tree_dot_path(&cli.out_dir, dataset_path);
    write_dot(&dot_path, &tree_to_dot(tree))?;

    let hints = graphviz_hints(&dot_path);
    println!("📦 DOT file saved at: {}", dot_path.display());
    println!("For high-resolution PNG:");
    println!("👉 Use: {}", hints[0]);
    println!("If the Tree is Large:");
    println!("👉 Use: {}", hints[1]);
    println!("SVG Format:");
    println!("👉 Use: {}", hints[2]);
    Ok(())
}

// =============================================================================
// Prediction loop
// =============================================================================

/// Read one value per attribute, re-asking until it is an observed value.
/// `None` when the user typed `exit` or input ended.
fn read_sample<R: BufRead>(prompt: &mut Prompt<R>, dataset: &Dataset) -> Result<Option<Assignment>> {
    let mut sample = Assignment::new();
    for (index, name) in dataset.attribute_names().iter().enumerate() {
        let observed = dataset.observed_values(index);
        let question = format!("  Enter value for {name} ({}): ", observed.join(", "));
        loop {
            let Some(answer) = prompt.ask(&question)? else {
                return Ok(None);
            };
            if answer.eq_ignore_ascii_case(EXIT_WORD) {
                return Ok(None);
            }
            if observed.contains(&answer.as_str()) {
                sample.insert(name.as_str(), answer);
                break;
            }
            println!("  ❌ Invalid input. Please choose one of the listed valid values.");
        }
    }
    Ok(Some(sample))
}

fn prediction_loop<R: BufRead>(
    prompt: &mut Prompt<R>,
    tree: &DecisionTree,
    dataset: &Dataset,
    cli: &Cli,
) -> Result<()> {
    loop {
        println!();
        println!("Please enter input values for prediction (type '{EXIT_WORD}' at any prompt to quit):");
        let Some(sample) = read_sample(prompt, dataset)? else {
            println!("Exiting prediction. Goodbye!");
            return Ok(());
        };

        let trace = tree.trace(&sample);
        println!();
        println!(">>> Predicted Decision ({}): {}", dataset.outcome_name(), trace.prediction);
        tracing::debug!(steps = trace.path.len(), prediction = %trace.prediction, "prediction traced");

        if !cli.no_export {
            let path = render::prediction_dot_path(&cli.out_dir, chrono::Local::now().naive_local());
            write_dot(&path, &prediction_path_to_dot(tree, &trace))?;
            println!("🌳 Prediction path DOT file saved at: {}", path.display());
            println!("👉 Use: {}", graphviz_hints(&path)[0]);
        }
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock());

    let dataset_path = match &cli.dataset {
        Some(path) => path.clone(),
        None => prompt
            .ask("Enter CSV/TXT file name: ")?
            .filter(|name| !name.is_empty())
            .map(PathBuf::from)
            .context("no dataset file given")?,
    };
    let dataset = read_delimited(&dataset_path)
        .with_context(|| format!("failed to load dataset {}", dataset_path.display()))?;

    let config = TreeConfig::builder()
        .fallback_label(cli.fallback_label.as_str())
        .build()
        .context("invalid tree configuration")?;

    // The policy question can fail on stdin; keep the error and surface it after.
    let mut prompt_error = None;
    let resolution = detect_conflicts(&dataset, |registry| {
        print_conflicts(registry);
        match cli.conflicts {
            Some(policy) => policy,
            None => ask_conflict_policy(&mut prompt, &config.fallback_label).unwrap_or_else(|err| {
                prompt_error = Some(err);
                ConflictPolicy::default()
            }),
        }
    });
    if let Some(err) = prompt_error {
        return Err(err);
    }

    let mode = match cli.report {
        Some(mode) => mode,
        None => ask_report_mode(&mut prompt)?,
    };
    let color = !cli.no_color && io::stdout().is_terminal();
    let mut reporter = mode.into_reporter(color);

    let tree = TreeBuilder::new(&config, &resolution).build(&dataset, &mut reporter);

    if let Some(report) = reporter.buffered() {
        match fs::write(REPORT_FILE, report) {
            Ok(()) => println!("✅ Entropy details saved to {REPORT_FILE}"),
            Err(err) => {
                tracing::error!(error = %err, path = REPORT_FILE, "failed to save report");
                println!("❌ Failed to write {REPORT_FILE}: {err}");
            }
        }
    }

    println!();
    println!("=== Decision Tree Structure ===");
    println!();
    print!("{}", render_tree(&tree, color));

    if !cli.no_export {
        export_tree(&tree, &cli, &dataset_path)?;
    }

    prediction_loop(&mut prompt, &tree, &dataset, &cli)
}
