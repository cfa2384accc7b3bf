//! `mcplan`: solve a ground planning problem with Monte-Carlo random walks.
//!
//! Exit status: 0 when a plan was found, 2 when the budget ran out without
//! one, 1 on any error.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::{ArgGroup, Parser};
use tracing_subscriber::EnvFilter;

use mcplan_harness::problem_file::load_problem;
use mcplan_harness::runner::{run_planner, RunReportV1};
use mcplan_harness::worlds::{world_by_name, WORLD_NAMES};
use mcplan_kernel::problem::ProblemV1;
use mcplan_search::heuristic::HeuristicNameV1;
use mcplan_search::policy::{
    MrwPolicyV1, SearchBudgetV1, DEFAULT_MAX_ITERATIONS, DEFAULT_MAX_STEPS, DEFAULT_WALK_COUNT,
    DEFAULT_WALK_LENGTH,
};

#[derive(Debug, Parser)]
#[command(name = "mcplan", version, about, long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["problem", "world"])))]
struct Cli {
    /// Ground problem file (JSON).
    #[arg(short, long)]
    problem: Option<PathBuf>,

    /// Built-in world instead of a problem file.
    #[arg(long, value_parser = clap::builder::PossibleValuesParser::new(WORLD_NAMES))]
    world: Option<String>,

    /// Number of balls for the gripper world.
    #[arg(long, default_value_t = 4)]
    balls: usize,

    /// Heuristic oracle (blind, goal-count).
    #[arg(short = 'e', long, default_value_t = HeuristicNameV1::GoalCount)]
    heuristic: HeuristicNameV1,

    /// Weight applied to the heuristic estimate.
    #[arg(short, long, default_value_t = 1.0)]
    weight: f64,

    /// Walk attempts per batch.
    #[arg(long, default_value_t = DEFAULT_WALK_COUNT)]
    walks: u64,

    /// Maximum walk length; each attempt takes up to length - 1 steps.
    #[arg(long, default_value_t = DEFAULT_WALK_LENGTH)]
    walk_length: u64,

    /// Non-improving iterations before a restart.
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: u64,

    /// Iteration cap of the search loop.
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: u64,

    /// Wall-clock limit in milliseconds.
    #[arg(short = 't', long)]
    timeout_ms: Option<u64>,

    /// Seed of the random source.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Run the attempts of each batch in parallel.
    #[arg(long)]
    parallel: bool,

    /// Print the run report as JSON.
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn policy(&self) -> MrwPolicyV1 {
        MrwPolicyV1 {
            heuristic: self.heuristic,
            heuristic_weight: self.weight,
            walk_count: self.walks,
            walk_length: self.walk_length,
            max_steps: self.max_steps,
            seed: self.seed,
            parallel_walks: self.parallel,
            budget: SearchBudgetV1 {
                max_iterations: Some(self.max_iterations),
                max_wall_time: self.timeout_ms.map(Duration::from_millis),
            },
        }
    }

    fn problem(&self) -> anyhow::Result<ProblemV1> {
        if let Some(path) = &self.problem {
            return load_problem(path).with_context(|| format!("loading {}", path.display()));
        }
        let Some(name) = self.world.as_deref() else {
            bail!("either --problem or --world is required");
        };
        let Some(world) = world_by_name(name, self.balls) else {
            bail!("unknown world `{name}`");
        };
        world
            .build()
            .with_context(|| format!("grounding world {}", world.world_id()))
    }
}

fn print_report(report: &RunReportV1) {
    match &report.plan {
        Some(plan) => {
            println!("found plan as follows:");
            for (step, action) in plan.iter().enumerate() {
                println!("{step:>4}: ({action})");
            }
            println!("plan length: {}", plan.len());
        }
        None => println!("no plan found ({})", report.termination),
    }
    let s = &report.stats;
    println!(
        "iterations: {}  restarts: {} stalled, {} dead-end  walks: {}  nodes: {}",
        s.iterations,
        s.restarts_stalled,
        s.restarts_dead_end,
        s.walk_attempts,
        s.nodes_generated
    );
    println!("time spent: {:.3} s", Duration::from_millis(report.elapsed_ms).as_secs_f64());
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let problem = cli.problem()?;
    let run = run_planner(&problem, &cli.policy())?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&run.report)?);
    } else {
        print_report(&run.report);
    }
    Ok(if run.report.is_solved() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
