//! Celebration Effect
//!
//! Drives the page's `confetti` function (canvas-confetti) for a short burst
//! once every task is done. The particle engine itself is external.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::CelebrationConfig;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = confetti, catch)]
    fn confetti(options: JsValue) -> Result<(), JsValue>;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Origin {
    pub x: f64,
    pub y: f64,
}

/// Options object handed to `confetti`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BurstOptions {
    pub particle_count: f64,
    pub start_velocity: u32,
    pub spread: u32,
    pub ticks: u32,
    pub z_index: i32,
    pub origin: Origin,
}

fn random_in_range(sample: f64, min: f64, max: f64) -> f64 {
    sample * (max - min) + min
}

/// Particle count for a tick, decaying linearly to zero over the duration
pub fn particle_count(config: &CelebrationConfig, time_left_ms: f64) -> f64 {
    if config.duration_ms == 0 {
        return 0.0;
    }
    config.max_particles * (time_left_ms / config.duration_ms as f64)
}

/// The pair of bursts (left and right side of the screen) for one tick, or
/// `None` once the time budget is spent. `random` yields samples in `[0, 1)`.
pub fn bursts(
    config: &CelebrationConfig,
    time_left_ms: f64,
    random: &mut impl FnMut() -> f64,
) -> Option<[BurstOptions; 2]> {
    if time_left_ms <= 0.0 {
        return None;
    }
    let particle_count = particle_count(config, time_left_ms);
    let mut burst = |x_min: f64, x_max: f64| BurstOptions {
        particle_count,
        start_velocity: config.start_velocity,
        spread: config.spread,
        ticks: config.ticks,
        z_index: config.z_index,
        origin: Origin {
            x: random_in_range(random(), x_min, x_max),
            y: random() - 0.2,
        },
    };
    let left = burst(0.1, 0.3);
    let right = burst(0.7, 0.9);
    Some([left, right])
}

fn fire(options: &BurstOptions) -> Result<(), String> {
    let js_options = serde_wasm_bindgen::to_value(options).map_err(|e| e.to_string())?;
    confetti(js_options).map_err(|e| format!("{:?}", e))
}

/// One tick of a run. Returns `false` once the time budget is spent; a
/// failed `fire` skips the rest of the tick but keeps the run going.
fn tick(
    config: &CelebrationConfig,
    time_left_ms: f64,
    random: &mut impl FnMut() -> f64,
    fire: &mut impl FnMut(&BurstOptions) -> Result<(), String>,
) -> bool {
    let Some(pair) = bursts(config, time_left_ms, random) else {
        return false;
    };
    for options in &pair {
        if let Err(e) = fire(options) {
            log::warn!("confetti unavailable: {}", e);
            break;
        }
    }
    true
}

/// Fire-and-forget: ticks every `interval_ms` until `duration_ms` elapses
pub fn launch(config: CelebrationConfig) {
    log::info!("All tasks complete, celebrating");
    spawn_local(async move {
        let end = js_sys::Date::now() + config.duration_ms as f64;
        loop {
            TimeoutFuture::new(config.interval_ms).await;
            let time_left = end - js_sys::Date::now();
            if !tick(&config, time_left, &mut js_sys::Math::random, &mut fire) {
                break;
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_count_decays_linearly() {
        let config = CelebrationConfig::default();
        assert_eq!(particle_count(&config, 1500.0), 50.0);
        assert_eq!(particle_count(&config, 750.0), 25.0);
        assert_eq!(particle_count(&config, 0.0), 0.0);
    }

    #[test]
    fn test_no_bursts_after_budget() {
        let config = CelebrationConfig::default();
        assert!(bursts(&config, 0.0, &mut || 0.5).is_none());
        assert!(bursts(&config, -10.0, &mut || 0.5).is_none());
    }

    #[test]
    fn test_bursts_on_both_sides() {
        let config = CelebrationConfig::default();
        let [left, right] = bursts(&config, 1250.0, &mut || 0.5).unwrap();

        assert!((left.origin.x - 0.2).abs() < 1e-9);
        assert!((right.origin.x - 0.8).abs() < 1e-9);
        assert!((left.origin.y - 0.3).abs() < 1e-9);
        assert!((left.particle_count - 50.0 * 1250.0 / 1500.0).abs() < 1e-9);
        assert_eq!(left.spread, 360);
        assert_eq!(right.start_velocity, 30);
    }

    #[test]
    fn test_origin_ranges_at_extremes() {
        let config = CelebrationConfig::default();

        let [left, right] = bursts(&config, 100.0, &mut || 0.0).unwrap();
        assert!((left.origin.x - 0.1).abs() < 1e-9);
        assert!((right.origin.x - 0.7).abs() < 1e-9);
        assert!((left.origin.y + 0.2).abs() < 1e-9);

        let [left, right] = bursts(&config, 100.0, &mut || 0.999).unwrap();
        assert!(left.origin.x < 0.3);
        assert!(right.origin.x < 0.9);
    }

    #[test]
    fn test_failed_fire_skips_tick_but_keeps_running() {
        let config = CelebrationConfig::default();
        let mut calls = 0;
        let mut failing = |_: &BurstOptions| {
            calls += 1;
            Err("confetti is not defined".to_string())
        };

        assert!(tick(&config, 1000.0, &mut || 0.5, &mut failing));
        assert!(tick(&config, 750.0, &mut || 0.5, &mut failing));
        assert!(!tick(&config, 0.0, &mut || 0.5, &mut failing));
        // Each live tick stopped after its first failure
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_tick_fires_both_sides() {
        let config = CelebrationConfig::default();
        let mut fired = Vec::new();
        let mut record = |options: &BurstOptions| {
            fired.push(options.origin.x);
            Ok(())
        };

        assert!(tick(&config, 500.0, &mut || 0.0, &mut record));
        assert_eq!(fired, vec![0.1, 0.7]);
    }

    #[test]
    fn test_options_serialize_camel_case() {
        let config = CelebrationConfig::default();
        let [left, _] = bursts(&config, 1500.0, &mut || 0.0).unwrap();
        let json = serde_json::to_value(&left).unwrap();

        assert_eq!(json["particleCount"], 50.0);
        assert_eq!(json["startVelocity"], 30);
        assert_eq!(json["zIndex"], 0);
        assert!(json.get("origin").is_some());
    }
}
