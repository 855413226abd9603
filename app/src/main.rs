use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod report;
mod state;
mod web;

use ballflight::{ClassifyResponse, ShotInputs, UnitSystem, classify};
use state::AppState;

#[derive(Parser, Debug, Clone)]
#[command(name = "ballflight", about = "Golf ball flight simulator")]
struct Config {
    /// Config file path (default: ~/.config/ballflight/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Simulate one shot and print the readout
    Shot {
        #[command(flatten)]
        delivery: Delivery,
        /// Pin distance in yards (display only)
        #[arg(long)]
        target: Option<f64>,
        #[arg(long, value_enum)]
        units: Option<UnitSystem>,
        /// Print the full record as JSON
        #[arg(long)]
        json: bool,
        /// Append every trajectory sample (x y z meters)
        #[arg(long)]
        trajectory: bool,
    },
    /// Classify a delivery without simulating the flight
    Classify {
        /// Face angle (deg, + = open)
        #[arg(long, allow_hyphen_values = true)]
        face: f64,
        /// Path angle (deg)
        #[arg(long, allow_hyphen_values = true)]
        path: f64,
        /// Side-spin rate; estimated from the default swing speed when omitted
        #[arg(long, allow_hyphen_values = true)]
        spin: Option<f64>,
        #[arg(long)]
        json: bool,
    },
    /// Run the HTTP API
    Serve {
        /// Bind address (default: [webserver] bind from config)
        #[arg(long)]
        bind: Option<SocketAddr>,
    },
}

/// Club delivery flags. Omitted flags fall back to the `[shot]` config section.
#[derive(clap::Args, Debug, Clone)]
struct Delivery {
    /// Face angle (deg, + = open)
    #[arg(long, allow_hyphen_values = true)]
    face: Option<f64>,
    /// Path angle (deg)
    #[arg(long, allow_hyphen_values = true)]
    path: Option<f64>,
    /// Swing speed (mph)
    #[arg(long)]
    speed: Option<f64>,
    /// Launch angle (deg)
    #[arg(long, allow_hyphen_values = true)]
    launch: Option<f64>,
}

impl Delivery {
    fn resolve(&self, defaults: ShotInputs) -> ShotInputs {
        ShotInputs {
            face_deg: self.face.unwrap_or(defaults.face_deg),
            path_deg: self.path.unwrap_or(defaults.path_deg),
            swing_speed_mph: self.speed.unwrap_or(defaults.swing_speed_mph),
            launch_deg: self.launch.unwrap_or(defaults.launch_deg),
            target_yards: defaults.target_yards,
        }
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> anyhow::Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new("ballflight=info")
    };
    // Logs go to stderr so `--json` output stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("debug logging enabled");

    let cli = Config::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(state::config::default_config_path);
    let state = Arc::new(AppState::new(config_path));
    tracing::debug!("using config {}", state.system.path().display());

    match cli.command {
        Command::Shot {
            delivery,
            target,
            units,
            json,
            trajectory,
        } => {
            let snap = state.system.snapshot();
            let mut inputs = delivery.resolve(snap.shot);
            if let Some(target) = target {
                inputs.target_yards = target;
            }
            let record = state.hit(state.shots.next_shot_number(), inputs);
            let units = units.unwrap_or(snap.default_units);
            if json {
                println!("{}", serde_json::to_string_pretty(&record.with_units(units))?);
            } else {
                print!("{}", report::render(&record, units, trajectory));
            }
            if let Err(e) = record.result.carry() {
                tracing::warn!("shot #{}: {e}", record.shot_number);
            }
        }
        Command::Classify {
            face,
            path,
            spin,
            json,
        } => {
            let snap = state.system.snapshot();
            let speed = snap.shot.swing_speed_mph;
            let side_spin = spin.unwrap_or_else(|| snap.model.side_spin(face, path, speed));
            let res = ClassifyResponse {
                shot_category: classify(face, path, side_spin),
                side_spin,
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&res)?);
            } else {
                println!("{}", res.shot_category);
            }
        }
        Command::Serve { bind } => {
            let configured = state.system.snapshot().webserver.bind;
            let addr = match bind {
                Some(addr) => addr,
                None => configured
                    .parse::<SocketAddr>()
                    .context("invalid [webserver] bind address in config")?,
            };
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(web::run(Arc::clone(&state), addr, async {
                let _ = tokio::signal::ctrl_c().await;
                tracing::info!("shutting down...");
            }))?;
        }
    }

    Ok(())
}
