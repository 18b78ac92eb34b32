use solsim::{ScenarioConfig, Scenario, RunConfig, SpawnConfig, FrameClock};
use solsim::{bench_step, bench_step_curve};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, warn};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Headless solar-system gravity simulation")]
struct Args {
    /// Scenario file, looked up under `scenarios/` if not found as given
    #[arg(short, default_value = "solar_system.yaml")]
    file_name: String,

    /// Use the built-in Sun + planets preset instead of a file
    #[arg(long)]
    preset: bool,

    /// Override the number of frames to run
    #[arg(long)]
    frames: Option<u64>,

    /// Override the speed multiplier
    #[arg(long)]
    speed: Option<f64>,

    /// Override the wall-clock seconds per frame
    #[arg(long)]
    frame_dt: Option<f64>,

    /// Measure real frame deltas instead of using a fixed frame_dt
    #[arg(long)]
    realtime: bool,

    /// Print the final state as YAML
    #[arg(long)]
    dump: bool,

    /// Run the step benchmark and exit
    #[arg(long)]
    bench: bool,

    /// With --bench, print a CSV curve instead
    #[arg(long)]
    curve: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let given = PathBuf::from(file_name);
    let config_path = if given.exists() {
        given
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    let file = File::open(&config_path).with_context(|| format!("opening {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader).with_context(|| format!("parsing {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn run(scenario: &mut Scenario, run_cfg: &RunConfig, spawns: &[SpawnConfig], realtime: bool) -> Result<()> {
    info!(
        "running {} frames at speed {} ({} bodies)",
        run_cfg.frames,
        run_cfg.speed,
        scenario.system.len()
    );

    for sc in run_cfg.unreachable_spawns(spawns) {
        warn!(
            "spawn '{}' at frame {} is past the last frame ({}), skipping",
            sc.name.as_deref().unwrap_or("unnamed"),
            sc.frame,
            run_cfg.frames
        );
    }

    let mut clock = FrameClock::new();
    clock.delta();

    for frame in 0..run_cfg.frames {
        for sc in spawns.iter().filter(|sc| sc.frame == frame) {
            scenario.spawn_from_config(sc)?;
        }

        let elapsed = if realtime { clock.delta() } else { run_cfg.frame_dt };
        scenario.tick(elapsed, run_cfg.speed)?;

        if log::log_enabled!(log::Level::Debug) && frame % 60 == 0 {
            for b in &scenario.system.bodies {
                debug!("{:>10} x = [{:9.3}, {:9.3}, {:9.3}] |F| = {:e}", b.name, b.x.x, b.x.y, b.x.z, b.net_force().norm());
            }
        }
    }

    info!("finished at t = {:e} after {} frames", scenario.system.t, scenario.driver.frames);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        if args.curve { bench_step_curve() } else { bench_step() }
        return Ok(());
    }

    let (mut scenario, mut run_cfg, spawns) = if args.preset {
        (Scenario::solar_system(), RunConfig::default(), Vec::new())
    } else {
        let cfg = load_scenario_from_yaml(&args.file_name)?;
        let scenario = Scenario::build_scenario(&cfg)?;
        (scenario, cfg.run, cfg.spawns)
    };

    if let Some(frames) = args.frames {
        run_cfg.frames = frames;
    }
    if let Some(speed) = args.speed {
        run_cfg.speed = speed;
    }
    if let Some(frame_dt) = args.frame_dt {
        run_cfg.frame_dt = frame_dt;
    }

    run(&mut scenario, &run_cfg, &spawns, args.realtime)?;

    for (i, b) in scenario.system.bodies.iter().enumerate() {
        let strongest = scenario
            .forces_by_name(i)
            .into_iter()
            .max_by(|p, q| p.1.norm().total_cmp(&q.1.norm()));
        match strongest {
            Some((from, f)) => info!("{:>10} |x| = {:10.3}, strongest pull from {from} ({:e})", b.name, b.x.norm(), f.norm()),
            None => info!("{:>10} |x| = {:10.3}", b.name, b.x.norm()),
        }
    }

    if args.dump {
        print!("{}", serde_yaml::to_string(&scenario.snapshot())?);
    }

    Ok(())
}
