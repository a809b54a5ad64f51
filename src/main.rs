use ropesim::{bench_step, IntegratorConfig, Scenario, ScenarioConfig};

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(about = "Headless mass-spring rope simulation")]
struct Args {
    /// Scenario file, looked up under `scenarios/` when not found as given
    #[arg(short, long, default_value = "euler.yaml")]
    file: PathBuf,

    /// Override the integrator named in the scenario
    #[arg(long, value_enum)]
    integrator: Option<IntegratorConfig>,

    /// Time both integrators over a range of rope sizes instead of running a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file: &Path) -> Result<ScenarioConfig> {
    let config_path = if file.exists() {
        file.to_path_buf()
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file)
    };
    let reader = BufReader::new(File::open(&config_path)?);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    info!(path = %config_path.display(), "loaded scenario");
    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    if args.bench {
        bench_step(&[100, 1_000, 10_000, 100_000], 10)?;
        return Ok(());
    }

    let mut scenario_cfg = load_scenario_from_yaml(&args.file)?;
    if let Some(integrator) = args.integrator {
        scenario_cfg.engine.integrator = integrator;
    }

    let mut scenario = Scenario::build_scenario(scenario_cfg)?;
    scenario.run()?;

    for (i, p) in scenario.rope.positions().enumerate() {
        println!("{i:3}: ({:10.5}, {:10.5})", p.x, p.y);
    }

    Ok(())
}
