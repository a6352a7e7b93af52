//! projectile-spin
//!
//! Fixed-step RK4 trajectory integrator for combined linear drag and Magnus
//! (spin lift) forces, where no closed form exists.
//!
//! State vector (4): [x, y, vx, vy]. Spin enters as a constant angular rate
//! ω = rpm·2π/60 about the axis out of the plane of motion; no spin decay.
//!
//! Per-step derivative:
//!   ax = −(k/m)·vx + (C_M/m)·(−ω·vy)
//!   ay = −(k/m)·vy + (C_M/m)·( ω·vx) − g
//!
//! The Magnus term is the planar small-model form: proportional to spin
//! rate and orthogonal to velocity, not speed-scaled and not the full 3D
//! ω×v cross product. It stays as modeled; every spin reference number
//! downstream depends on it.
//!
//! Integration stops at the first ground crossing, with the final sample
//! interpolated onto y = 0 exactly, or at `max_time`, whichever comes
//! first. A trajectory still airborne at `max_time` is a normal outcome:
//! its final height is simply > 0 and callers see a truncated flight.

use std::f64::consts::PI;

use nalgebra::Vector4;
use projectile_core::{Physics, Sample};

/// Launch inputs for the spin solver.
#[derive(Clone, Copy, Debug)]
pub struct SpinInputs {
    pub v0: f64,           // launch speed [m/s]
    pub theta_deg: f64,    // launch angle [deg]
    pub drag_k: f64,       // linear drag coefficient [kg/s]
    pub spin_rpm: f64,     // spin rate [rev/min]
    pub magnus_coeff: f64, // Magnus coefficient C_M [N·s/rad]
}

/// Integration options.
#[derive(Clone, Copy, Debug)]
pub struct IntegrateOpts {
    pub dt: f64,       // step size [s]
    pub max_time: f64, // max flight time [s]
}

impl Default for IntegrateOpts {
    fn default() -> Self {
        Self {
            dt: 0.01,
            max_time: 30.0,
        }
    }
}

/// Integrate the drag + Magnus flight from the origin.
///
/// Returns time-increasing samples starting at (0, 0, 0). If the flight
/// lands within `opts.max_time`, the final sample sits at y = 0 exactly
/// and no sample is ever below ground.
pub fn simulate_spin_drag(
    inputs: &SpinInputs,
    physics: Physics,
    opts: IntegrateOpts,
) -> Vec<Sample> {
    let th = inputs.theta_deg.to_radians();
    let omega = inputs.spin_rpm * 2.0 * PI / 60.0; // rev/min -> rad/s

    let g = physics.gravity;
    let drag = inputs.drag_k / physics.mass_kg;
    let magnus = inputs.magnus_coeff / physics.mass_kg;

    // state layout: [x, y, vx, vy]
    let deriv = |s: Vector4<f64>| -> Vector4<f64> {
        let (vx, vy) = (s[2], s[3]);
        Vector4::new(
            vx,
            vy,
            -drag * vx + magnus * (-omega * vy),
            -drag * vy + magnus * (omega * vx) - g,
        )
    };

    let dt = opts.dt;
    let mut s = Vector4::new(0.0, 0.0, inputs.v0 * th.cos(), inputs.v0 * th.sin());
    let mut t = 0.0;

    let mut out = Vec::with_capacity((opts.max_time / dt).ceil() as usize + 8);
    out.push(Sample {
        t,
        x: s[0],
        y: s[1],
    });

    while t < opts.max_time {
        let next = rk4_step(&deriv, s, dt);
        let t_next = t + dt;

        if next[1] < 0.0 && s[1] >= 0.0 {
            // Ground crossing: pull the final sample back onto y = 0 by
            // linear interpolation between the last two states, then stop.
            let frac = s[1] / (s[1] - next[1]);
            out.push(Sample {
                t: t + frac * dt,
                x: s[0] + frac * (next[0] - s[0]),
                y: 0.0,
            });
            break;
        }

        out.push(Sample {
            t: t_next,
            x: next[0],
            y: next[1],
        });
        s = next;
        t = t_next;
    }

    out
}

// One classic 4-stage step: s ← s + dt/6·(k1 + 2k2 + 2k3 + k4).
fn rk4_step<F>(f: F, s: Vector4<f64>, dt: f64) -> Vector4<f64>
where
    F: Fn(Vector4<f64>) -> Vector4<f64>,
{
    let k1 = f(s);
    let k2 = f(s + k1 * (0.5 * dt));
    let k3 = f(s + k2 * (0.5 * dt));
    let k4 = f(s + k3 * dt);
    s + (k1 + (k2 + k3) * 2.0 + k4) * (dt / 6.0)
}

/* -------------------------------- tests -------------------------------- */
