//! triage - A terminal dialog for classifying labels into two categories
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::io::{IsTerminal, Read};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use triage_app::load_settings;
use triage_app::SelectionSet;
use triage_core::prelude::*;
use triage_core::{Choice, MasterPolicy, MasterStyle};
use triage_tui::{run_dialog, DialogOutcome};

/// triage - classify each label as GUI or Custom
#[derive(Parser, Debug)]
#[command(name = "triage")]
#[command(about = "Classify each label as GUI or Custom", long_about = None)]
struct Args {
    /// Labels to classify (falls back to --file, then piped stdin)
    #[arg(value_name = "LABEL")]
    labels: Vec<String>,

    /// Read labels from a file, one per line (blank lines skipped)
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// What activating an already-satisfied master control does
    #[arg(long, value_enum)]
    policy: Option<PolicyArg>,

    /// Master-control presentation
    #[arg(long, value_enum)]
    master: Option<MasterArg>,

    /// Print the committed result as JSON instead of tab-separated lines
    #[arg(long)]
    json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum PolicyArg {
    /// Unchecking clears every row
    Clear,
    /// Unchecking flips every row to the other category
    Flip,
}

impl From<PolicyArg> for MasterPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Clear => MasterPolicy::Clear,
            PolicyArg::Flip => MasterPolicy::Flip,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum MasterArg {
    /// Header checkboxes with derived on/off state
    Checkbox,
    /// Stateless header buttons
    Button,
}

impl From<MasterArg> for MasterStyle {
    fn from(arg: MasterArg) -> Self {
        match arg {
            MasterArg::Checkbox => MasterStyle::Checkbox,
            MasterArg::Button => MasterStyle::Button,
        }
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = triage_core::logging::init() {
        eprintln!("Warning: could not initialize logging: {e}");
    }

    let labels = match gather_labels(&args) {
        Ok(labels) => labels,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    if labels.is_empty() {
        eprintln!("Error: {}", Error::EmptyInput);
        eprintln!();
        eprintln!("Pass labels as arguments, with --file, or pipe them in:");
        eprintln!("  triage getUserData fetchUserInfo getProfile");
        eprintln!("  triage --file labels.txt");
        eprintln!("  printf 'a\\nb\\n' | triage");
        std::process::exit(2);
    }

    // File settings provide the variant defaults; flags override.
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let settings = load_settings(&cwd);
    let policy = args
        .policy
        .map(MasterPolicy::from)
        .unwrap_or(settings.dialog.policy);
    let style = args
        .master
        .map(MasterStyle::from)
        .unwrap_or(settings.dialog.master);

    let selection = SelectionSet::new(labels, policy, style);
    match run_dialog(selection) {
        Ok(DialogOutcome::Committed(pairs)) => {
            if let Err(e) = print_result(&pairs, args.json) {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        Ok(DialogOutcome::Cancelled) => {
            eprintln!("Selection cancelled.");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(if e.is_fatal() { 2 } else { 1 });
        }
    }
}

/// Collect labels from positional args, --file, or piped stdin (that order)
fn gather_labels(args: &Args) -> Result<Vec<String>> {
    if !args.labels.is_empty() {
        return Ok(args.labels.clone());
    }

    if let Some(path) = &args.file {
        let content = std::fs::read_to_string(path)?;
        return Ok(split_labels(&content));
    }

    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        let mut content = String::new();
        stdin.lock().read_to_string(&mut content)?;
        return Ok(split_labels(&content));
    }

    Ok(Vec::new())
}

/// One label per line, trimmed, blank lines skipped
fn split_labels(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Print the committed pairs: tab-separated lines, or JSON with --json
fn print_result(pairs: &[(String, Choice)], json: bool) -> Result<()> {
    if json {
        let entries: Vec<serde_json::Value> = pairs
            .iter()
            .map(|(label, choice)| {
                serde_json::json!({ "label": label, "choice": choice.as_str() })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for (label, choice) in pairs {
            println!("{label}\t{choice}");
        }
    }
    Ok(())
}
