use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

use puzzlebox::api::{solve_dial, solve_ids, solve_joltage, DialCfg, JoltageCfg};
use puzzlebox::cfg::{DEFAULT_MODULUS, DEFAULT_START};

mod provenance;

#[derive(Parser)]
#[command(name = "puzzlebox")]
#[command(about = "Solve the dial, ID-range and joltage puzzles from text inputs")]
struct Cmd {
    /// Print the result as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Also write the JSON result to this path, with a provenance sidecar next to it
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Rotate the dial; part 1 counts landings on 0, part 2 adds passes through 0
    Dial {
        #[arg(long, default_value = "inputs/day-01.txt")]
        input: PathBuf,
        #[arg(long, default_value_t = DEFAULT_MODULUS)]
        modulus: u64,
        #[arg(long, default_value_t = DEFAULT_START)]
        start: u64,
    },
    /// Sum the duplicated-half IDs inside comma-separated ranges
    Ids {
        #[arg(long, default_value = "inputs/day-02.txt")]
        input: PathBuf,
    },
    /// Sum the largest two-digit joltage of each bank
    Joltage {
        #[arg(long, default_value = "inputs/day-03.txt")]
        input: PathBuf,
        /// Worker threads (defaults to available parallelism)
        #[arg(long)]
        workers: Option<usize>,
    },
    /// Print version and code revision as JSON
    Report,
}

/// One puzzle's answers. `part2` is absent for single-part puzzles.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct Solution {
    puzzle: &'static str,
    part1: u128,
    #[serde(skip_serializing_if = "Option::is_none")]
    part2: Option<u128>,
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Solution (part 1): {}", self.part1)?;
        if let Some(p2) = self.part2 {
            write!(f, "\nSolution (part 2): {p2}")?;
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    // Results go to stdout; logs stay on stderr. RUST_LOG overrides the default level.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match &cmd.action {
        Action::Report => report(),
        puzzle => run(puzzle, cmd.json, cmd.out.as_deref()),
    }
}

fn run(action: &Action, json: bool, out: Option<&Path>) -> Result<()> {
    let (solution, input, params) = solve(action)?;
    if let Some(out) = out {
        write_result(out, &solution, input, params)?;
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&solution)?);
    } else {
        println!("{solution}");
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading input {}", path.display()))
}

/// Run the selected puzzle. Returns the solution, its input path, and the params for provenance.
fn solve(action: &Action) -> Result<(Solution, &Path, serde_json::Value)> {
    match action {
        Action::Dial {
            input,
            modulus,
            start,
        } => {
            tracing::info!(input = %input.display(), modulus, start, "dial");
            let cfg = DialCfg {
                modulus: *modulus,
                start: *start,
            };
            let text = read_input(input)?;
            let (hits, total) = solve_dial(&text, cfg)
                .with_context(|| format!("dial puzzle on {}", input.display()))?;
            tracing::debug!(hits, total, "dial_done");
            let solution = Solution {
                puzzle: "dial",
                part1: hits.into(),
                part2: Some(total.into()),
            };
            let params = serde_json::json!({ "modulus": modulus, "start": start });
            Ok((solution, input.as_path(), params))
        }
        Action::Ids { input } => {
            tracing::info!(input = %input.display(), "ids");
            let text = read_input(input)?;
            let sum = solve_ids(&text)
                .with_context(|| format!("ids puzzle on {}", input.display()))?;
            let solution = Solution {
                puzzle: "ids",
                part1: sum,
                part2: None,
            };
            Ok((solution, input.as_path(), serde_json::json!({})))
        }
        Action::Joltage { input, workers } => {
            let cfg = workers.map_or_else(JoltageCfg::default, |workers| JoltageCfg { workers });
            tracing::info!(input = %input.display(), workers = cfg.workers, "joltage");
            let text = read_input(input)?;
            let total = solve_joltage(&text, cfg)
                .with_context(|| format!("joltage puzzle on {}", input.display()))?;
            let solution = Solution {
                puzzle: "joltage",
                part1: total.into(),
                part2: None,
            };
            let params = serde_json::json!({ "workers": cfg.workers });
            Ok((solution, input.as_path(), params))
        }
        Action::Report => unreachable!("report is dispatched in main"),
    }
}

fn write_result(
    out: &Path,
    solution: &Solution,
    input: &Path,
    params: serde_json::Value,
) -> Result<()> {
    provenance::ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(solution)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let payload = provenance::Payload::new(solution.puzzle, input, params);
    let sidecar = provenance::write_sidecar(out, payload)?;
    tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "wrote_result");
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "version": puzzlebox::VERSION,
        "code_rev": provenance::current_git_rev(),
        "puzzles": ["dial", "ids", "joltage"]
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
