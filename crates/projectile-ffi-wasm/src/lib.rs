// crates/projectile-ffi-wasm/src/lib.rs
//
// WASM bindings: the three trajectory solvers + metrics, bundled per
// control-panel update.

use serde::{Deserialize, Serialize};
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

// --- our crates ---
use projectile_analytic::{free_flight, linear_drag};
use projectile_core::{
    check_bounds, default_time_grid, mask_below_ground, metrics_from_samples, no_drag_metrics,
    FlightMetrics, ParamError, Physics, Sample, ANGLE_BOUNDS, DRAG_BOUNDS, SPEED_BOUNDS,
    SPIN_BOUNDS,
};
use projectile_spin::{simulate_spin_drag, IntegrateOpts, SpinInputs};

// Better panic messages in browser console
#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
}

/* --------------------------- Shared DTOs (JS) --------------------------- */

/// Control-panel values. `magnus_coeff` may be omitted by UIs that only
/// expose the spin slider; it then takes the stock value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct JsLaunchParams {
    pub v0_ms: f64,
    pub angle_deg: f64,
    pub drag_k: f64,
    pub spin_rpm: f64,
    #[serde(default = "stock_magnus_coeff")]
    pub magnus_coeff: f64,
}

/// Seed values for the sliders, matching the stock control panel.
pub const DEFAULT_PARAMS: JsLaunchParams = JsLaunchParams {
    v0_ms: 50.0,
    angle_deg: 45.0,
    drag_k: 0.2,
    spin_rpm: 1500.0,
    magnus_coeff: 1.2e-4,
};

fn stock_magnus_coeff() -> f64 {
    DEFAULT_PARAMS.magnus_coeff
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct JsSample {
    pub t: f64,
    pub x: f64,
    pub y: f64,
}

impl From<Sample> for JsSample {
    fn from(s: Sample) -> Self {
        Self {
            t: s.t,
            x: s.x,
            y: s.y,
        }
    }
}

/// Metric fields are NaN on the JS side when the flight had no valid sample.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct JsMetrics {
    pub max_height_m: f64,
    pub range_m: f64,
    pub flight_time_s: f64,
}

impl From<FlightMetrics> for JsMetrics {
    fn from(m: FlightMetrics) -> Self {
        Self {
            max_height_m: m.max_height_m,
            range_m: m.range_m,
            flight_time_s: m.flight_time_s,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsCurve {
    pub samples: Vec<JsSample>,
    pub metrics: JsMetrics,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsSolveResult {
    pub no_drag: JsCurve,
    pub linear_drag: JsCurve,
    pub spin: JsCurve,
}

/* ------------------------------ Validation ------------------------------ */

fn validate(p: &JsLaunchParams) -> Result<(), ParamError> {
    check_bounds("v0", p.v0_ms, SPEED_BOUNDS)?;
    check_bounds("angle", p.angle_deg, ANGLE_BOUNDS)?;
    check_bounds("drag k", p.drag_k, DRAG_BOUNDS)?;
    check_bounds("spin", p.spin_rpm, SPIN_BOUNDS)?;
    if !p.magnus_coeff.is_finite() {
        return Err(ParamError::NotFinite {
            name: "magnus_coeff",
        });
    }
    Ok(())
}

/* ------------------------------- Exports -------------------------------- */

/// Recompute all three curves plus their headline metrics for one set of
/// control values. The analytic curves come back ground-masked for display;
/// the no-drag metrics use the closed forms, the other two the sampled
/// reduction, matching the overlay text of the stock UI.
#[wasm_bindgen]
pub fn solve_all_js(params: JsValue) -> Result<JsValue, JsValue> {
    let p: JsLaunchParams = swb::from_value(params)?;
    validate(&p).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let physics = Physics::baseball();
    let grid = default_time_grid();

    let mut parabola = free_flight(p.v0_ms, p.angle_deg, physics, &grid);
    mask_below_ground(&mut parabola);
    let parabola_metrics = no_drag_metrics(p.v0_ms, p.angle_deg, physics.gravity);

    let mut dragged = linear_drag(p.v0_ms, p.angle_deg, p.drag_k, physics, &grid);
    mask_below_ground(&mut dragged);
    let dragged_metrics = metrics_from_samples(&dragged);

    let spin = simulate_spin_drag(
        &SpinInputs {
            v0: p.v0_ms,
            theta_deg: p.angle_deg,
            drag_k: p.drag_k,
            spin_rpm: p.spin_rpm,
            magnus_coeff: p.magnus_coeff,
        },
        physics,
        IntegrateOpts::default(),
    );
    let spin_metrics = metrics_from_samples(&spin);

    let out = JsSolveResult {
        no_drag: curve(parabola, parabola_metrics),
        linear_drag: curve(dragged, dragged_metrics),
        spin: curve(spin, spin_metrics),
    };
    swb::to_value(&out).map_err(|e| e.into())
}

/// Stock control values so the UI can seed its sliders.
#[wasm_bindgen]
pub fn default_params_js() -> Result<JsValue, JsValue> {
    swb::to_value(&DEFAULT_PARAMS).map_err(|e| e.into())
}

fn curve(samples: Vec<Sample>, metrics: FlightMetrics) -> JsCurve {
    JsCurve {
        samples: samples.into_iter().map(Into::into).collect(),
        metrics: metrics.into(),
    }
}
