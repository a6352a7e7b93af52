//! Core projectile types and math
//!
//! Includes:
//! - Physical parameters (gravity, projectile mass)
//! - Time grids for the analytic solvers
//! - Trajectory samples & ground masking
//! - Flight metrics reduction
//! - Parameter validation for boundary layers (FFI/UI)

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// -------------------------
/// Physical parameters
/// -------------------------

/// Standard gravitational acceleration [m/s²]
pub const STANDARD_GRAVITY: f64 = 9.80665;

/// Mass of a regulation baseball [kg]
pub const BASEBALL_MASS_KG: f64 = 0.145;

/// Immutable per-run physical context. Passed explicitly into every solver
/// so no component reads hidden globals.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Physics {
    /// Gravitational acceleration [m/s²]
    pub gravity: f64,
    /// Projectile mass [kg]
    pub mass_kg: f64,
}

impl Physics {
    /// Standard gravity and a regulation baseball.
    pub fn baseball() -> Self {
        Self {
            gravity: STANDARD_GRAVITY,
            mass_kg: BASEBALL_MASS_KG,
        }
    }
}

impl Default for Physics {
    fn default() -> Self {
        Self::baseball()
    }
}

/// -------------------------
/// Time grid
/// -------------------------

/// Length of the default plotting window [s]
pub const DEFAULT_T_MAX: f64 = 30.0;

/// Sample count of the default plotting grid
pub const DEFAULT_GRID_POINTS: usize = 800;

/// Evenly spaced sample times over [0, t_max], both endpoints included.
pub fn time_grid(t_max: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![0.0],
        n => {
            let step = t_max / (n - 1) as f64;
            (0..n).map(|i| i as f64 * step).collect()
        }
    }
}

/// The 800-point grid over [0, 30] s the analytic curves are plotted on.
pub fn default_time_grid() -> Vec<f64> {
    time_grid(DEFAULT_T_MAX, DEFAULT_GRID_POINTS)
}

/// -------------------------
/// Trajectory samples
/// -------------------------

/// One trajectory sample: time [s], downrange distance [m], height [m].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub t: f64,
    pub x: f64,
    pub y: f64,
}

/// Replace below-ground heights with NaN so display layers drop everything
/// after impact. Grid-sampled analytic curves keep going past the landing
/// time; the metrics reduction skips NaN heights either way.
pub fn mask_below_ground(samples: &mut [Sample]) {
    for s in samples {
        if s.y < 0.0 {
            s.y = f64::NAN;
        }
    }
}

/// -------------------------
/// Flight metrics
/// -------------------------

/// Headline numbers for one trajectory. Every field is NaN when the
/// trajectory never had a finite sample at or above ground level; NaN
/// serializes to JSON `null`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct FlightMetrics {
    pub max_height_m: f64,
    pub range_m: f64,
    pub flight_time_s: f64,
}

impl FlightMetrics {
    /// The all-NaN marker for "no valid samples".
    pub fn undefined() -> Self {
        Self {
            max_height_m: f64::NAN,
            range_m: f64::NAN,
            flight_time_s: f64::NAN,
        }
    }

    pub fn is_defined(&self) -> bool {
        self.max_height_m.is_finite()
            && self.range_m.is_finite()
            && self.flight_time_s.is_finite()
    }
}

/// Reduce a sampled trajectory to its metrics.
///
/// Only samples with a finite height `y >= 0` count: the maximum height is
/// taken over them and the last of them supplies range and flight time.
/// Works identically on masked and unmasked trajectories.
pub fn metrics_from_samples(samples: &[Sample]) -> FlightMetrics {
    let mut max_height = f64::NAN; // f64::max skips NaN, so this seeds cleanly
    let mut last_valid: Option<Sample> = None;

    for &s in samples {
        if s.y.is_finite() && s.y >= 0.0 {
            max_height = max_height.max(s.y);
            last_valid = Some(s);
        }
    }

    match last_valid {
        Some(s) => FlightMetrics {
            max_height_m: max_height,
            range_m: s.x,
            flight_time_s: s.t,
        },
        None => FlightMetrics::undefined(),
    }
}

/// Closed-form metrics for drag-free flight:
/// range v0²·sin2θ/g, apex (v0·sinθ)²/(2g), time of flight 2·v0·sinθ/g.
pub fn no_drag_metrics(v0: f64, theta_deg: f64, gravity: f64) -> FlightMetrics {
    let th = theta_deg.to_radians();
    FlightMetrics {
        max_height_m: (v0 * th.sin()).powi(2) / (2.0 * gravity),
        range_m: v0 * v0 * (2.0 * th).sin() / gravity,
        flight_time_s: 2.0 * v0 * th.sin() / gravity,
    }
}

/// -------------------------
/// Parameter validation
/// -------------------------

/// Control-panel bounds as (lo, hi). The solvers accept any finite input;
/// boundary layers (FFI, UI) enforce these before calling in.
pub const SPEED_BOUNDS: (f64, f64) = (1.0, 100.0); // v0 [m/s]
pub const ANGLE_BOUNDS: (f64, f64) = (1.0, 89.0); // launch angle [deg]
pub const DRAG_BOUNDS: (f64, f64) = (0.0, 1.0); // drag k [kg/s]
pub const SPIN_BOUNDS: (f64, f64) = (0.0, 3000.0); // spin rate [rpm]

#[derive(Debug, Error)]
pub enum ParamError {
    #[error("{name} must be a finite number")]
    NotFinite { name: &'static str },
    #[error("{name} = {value} is outside [{lo}, {hi}]")]
    OutOfRange {
        name: &'static str,
        value: f64,
        lo: f64,
        hi: f64,
    },
}

/// Check one scalar against its control bounds.
pub fn check_bounds(
    name: &'static str,
    value: f64,
    (lo, hi): (f64, f64),
) -> Result<(), ParamError> {
    if !value.is_finite() {
        return Err(ParamError::NotFinite { name });
    }
    if value < lo || value > hi {
        return Err(ParamError::OutOfRange { name, value, lo, hi });
    }
    Ok(())
}

/* -------------------------------- tests -------------------------------- */
