use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "delayed-init workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the DelayedInit benchmarks and write a comparison report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

const BENCH: &str = "delayed_init_benchmark";
const REPORT_DIR: &str = "benchmark_results";

/// One measured function, as read back from criterion's output.
#[derive(Debug, Serialize)]
struct Measurement {
    group: String,
    function: String,
    mean_ns: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmark(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmark(quick: bool) -> Result<()> {
    println!(">>> Running {BENCH}...");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.arg("bench").arg("--bench").arg(BENCH);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if quick {
        cmd.arg("--measurement-time").arg("0.1");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd.status().context("failed to spawn cargo bench")?;
    if !status.success() {
        anyhow::bail!("benchmark {BENCH} failed");
    }

    println!("Finished in {:.2?}", start.elapsed());
    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut measurements = Vec::new();
    collect_measurements(criterion_dir, &mut measurements)?;
    measurements.sort_by(|a, b| (&a.group, &a.function).cmp(&(&b.group, &b.function)));

    fs::create_dir_all(REPORT_DIR)?;

    let summary_path = Path::new(REPORT_DIR).join("summary.json");
    fs::write(&summary_path, serde_json::to_string_pretty(&measurements)?)
        .with_context(|| format!("writing {}", summary_path.display()))?;

    let report_path = Path::new(REPORT_DIR).join("report.md");
    fs::write(&report_path, render_markdown(&measurements))
        .with_context(|| format!("writing {}", report_path.display()))?;

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn render_markdown(measurements: &[Measurement]) -> String {
    let mut groups: BTreeMap<&str, Vec<&Measurement>> = BTreeMap::new();
    for m in measurements {
        groups.entry(m.group.as_str()).or_default().push(m);
    }

    let mut out = String::from("# DelayedInit Benchmark Report\n");
    for (group, rows) in groups {
        let fastest = rows
            .iter()
            .map(|m| m.mean_ns)
            .fold(f64::INFINITY, f64::min);

        out.push_str(&format!("\n## {group}\n\n| Function | Mean | vs fastest |\n|---|---|---|\n"));
        for m in rows {
            let rel = if fastest > 0.0 { m.mean_ns / fastest } else { 0.0 };
            out.push_str(&format!(
                "| {} | {} | **{:.2}x** |\n",
                m.function,
                format_ns(m.mean_ns),
                rel
            ));
        }
    }
    out
}

fn format_ns(ns: f64) -> String {
    if ns > 1_000_000.0 {
        format!("{:.2} ms", ns / 1_000_000.0)
    } else if ns > 1_000.0 {
        format!("{:.2} µs", ns / 1_000.0)
    } else {
        format!("{:.1} ns", ns)
    }
}

/// Walks criterion's output tree and reads every `new/` measurement.
///
/// Layout: `<group>/<function>/new/{benchmark.json, estimates.json}`.
fn collect_measurements(dir: &Path, out: &mut Vec<Measurement>) -> Result<()> {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return Ok(()),
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("new") {
            collect_measurements(&path, out)?;
            continue;
        }

        let benchmark = read_json(&path.join("benchmark.json"))?;
        let estimates = read_json(&path.join("estimates.json"))?;

        let group = benchmark.get("group_id").and_then(|v| v.as_str());
        let function = benchmark.get("function_id").and_then(|v| v.as_str());
        let mean = estimates
            .get("mean")
            .and_then(|m| m.get("point_estimate"))
            .and_then(serde_json::Value::as_f64);

        if let (Some(group), Some(function), Some(mean_ns)) = (group, function, mean) {
            out.push(Measurement {
                group: group.to_owned(),
                function: function.to_owned(),
                mean_ns,
            });
        }
    }

    Ok(())
}

fn read_json(path: &Path) -> Result<serde_json::Value> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}
