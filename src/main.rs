use gravsim::{Scenario, ScenarioConfig};
use gravsim::run_2d;
use gravsim::{bench_advance, bench_advance_curve};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Interactive 2D gravity simulator")]
struct Args {
    /// Scenario file inside the `scenarios` directory; the built-in two object scenario when omitted
    #[arg(short)]
    file_name: Option<String>,

    /// Run the step benchmark instead of opening the window
    #[arg(long)]
    bench: bool,

    /// With --bench, print a CSV curve over many N
    #[arg(long, requires = "bench")]
    curve: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        // Bevy's LogPlugin owns the subscriber in windowed mode
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .init();

        if args.curve {
            bench_advance_curve()?;
        } else {
            bench_advance()?;
        }
        return Ok(());
    }

    let scenario = match args.file_name.as_deref() {
        Some(file_name) => {
            let scenario_cfg = load_scenario_from_yaml(file_name)?;
            Scenario::build_scenario(scenario_cfg).context("invalid scenario")?
        }
        None => Scenario::default_scenario().context("invalid default scenario")?,
    };
    run_2d(scenario);

    Ok(())
}
