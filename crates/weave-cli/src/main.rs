use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use serde_json::json;
use weave_core::Sequence;
use weave_plan::{expand_plan, stable_hash_string, to_canonical_json_bytes, SamplePlan};

#[derive(Parser, Debug)]
#[command(name = "weave", about = "Deterministic test-matrix sampling CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Expand a sample plan into a report of selected configurations.
    Expand(ExpandArgs),
    /// Print size and balance diagnostics for a plan's matrix.
    Info(InfoArgs),
}

#[derive(Args, Debug)]
struct ExpandArgs {
    /// YAML file describing the matrix and sampling window.
    #[arg(long)]
    plan: PathBuf,
    /// Output directory for the expansion report.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct InfoArgs {
    /// YAML file describing the matrix and sampling window.
    #[arg(long)]
    plan: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Expand(args) => expand(&args),
        Command::Info(args) => info(&args),
    }
}

fn read_plan(path: &Path) -> Result<SamplePlan, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&text)?)
}

fn expand(args: &ExpandArgs) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(&args.out)?;
    let plan = read_plan(&args.plan)?;
    let report = expand_plan(&plan)?;
    let bytes = to_canonical_json_bytes(&report)?;
    fs::write(args.out.join("plan_report.json"), bytes)?;
    Ok(())
}

fn info(args: &InfoArgs) -> Result<(), Box<dyn Error>> {
    let plan = read_plan(&args.plan)?;
    let matrix = plan.matrix.build()?;
    let summary = json!({
        "size": matrix.size(),
        "min_scan_len": matrix.min_scan_len(),
        "cyclicity": matrix.cyclicity(),
        "plan_hash": stable_hash_string(&plan)?,
    });
    println!("{summary}");
    Ok(())
}
