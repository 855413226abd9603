pub mod config;
mod slot;

pub use slot::ShotSlot;

use std::path::PathBuf;

use ballflight::{FlightModel, ShotInputs, ShotRecord};
use config::SystemConfig;

/// Root entry point for all managed application state.
///
/// Passed as `Arc<AppState>` to the web layer; the CLI uses it directly.
pub struct AppState {
    pub system: SystemConfig,
    pub shots: ShotSlot,
}

impl AppState {
    pub fn new(config_path: PathBuf) -> Self {
        Self {
            system: SystemConfig::new(config_path),
            shots: ShotSlot::new(),
        }
    }

    /// Flight model from the current config.
    pub fn model(&self) -> FlightModel {
        self.system.snapshot().model
    }

    /// Run a shot through the flight model and offer it to the slot.
    ///
    /// Blocking: the whole trajectory is integrated before this returns.
    pub fn hit(&self, shot_number: u64, inputs: ShotInputs) -> ShotRecord {
        let record = ShotRecord::compute(shot_number, inputs, &self.model());
        let b = &record.summary;
        tracing::info!(
            "shot #{}: {} carry={} apex={:.1}m outcome={:?}",
            record.shot_number,
            b.shape,
            b.carry_distance
                .map(|d| format!("{:.1}yd", d.as_yards()))
                .unwrap_or_else(|| "-".into()),
            b.max_height.as_meters(),
            b.outcome,
        );
        if !self.shots.offer(record.clone()) {
            tracing::debug!(
                "shot #{} superseded by a newer request",
                record.shot_number
            );
        }
        record
    }
}
