//! projectile-analytic
//!
//! Closed-form trajectory solutions evaluated pointwise over a caller-owned
//! time grid:
//!
//!   free flight :  x = v0·cosθ·t,  y = v0·sinθ·t − ½·g·t²
//!   linear drag :  exact solution of dv/dt = −(k/m)·v − g·ĵ with τ = m/k
//!
//! Both are total functions of their inputs: degenerate launches (v0 = 0,
//! k = 0) produce degenerate trajectories, never errors. Curves sampled on
//! a grid keep going past the landing time; apply
//! `projectile_core::mask_below_ground` before display.

use projectile_core::{Physics, Sample};

/// Substitute time constant when the drag coefficient is exactly zero.
/// Large enough that the drag solution lands on the drag-free parabola
/// within float tolerance over any plotted flight.
const FREE_FLIGHT_TAU: f64 = 1e10;

/// Drag-free parabola sampled over `grid`.
pub fn free_flight(v0: f64, theta_deg: f64, physics: Physics, grid: &[f64]) -> Vec<Sample> {
    let th = theta_deg.to_radians();
    let (v0x, v0y) = (v0 * th.cos(), v0 * th.sin());
    let g = physics.gravity;

    grid.iter()
        .map(|&t| Sample {
            t,
            x: v0x * t,
            y: v0y * t - 0.5 * g * t * t,
        })
        .collect()
}

/// Linear-drag trajectory sampled over `grid`, with τ = m/k:
///
///   x(t) = v0x·τ·(1 − e^(−t/τ))
///   y(t) = (v0y + g·τ)·τ·(1 − e^(−t/τ)) − g·t·τ
///
/// The decay factor is evaluated as −expm1(−t/τ). At the k = 0 sentinel τ
/// the naive `1.0 - (-t / tau).exp()` keeps only a handful of significant
/// bits and the parabolic −½·g·t² term, which enters at second order in
/// t/τ, drowns in the rounding (tens of km of error at t = 30 s).
pub fn linear_drag(
    v0: f64,
    theta_deg: f64,
    drag_k: f64,
    physics: Physics,
    grid: &[f64],
) -> Vec<Sample> {
    let th = theta_deg.to_radians();
    let (v0x, v0y) = (v0 * th.cos(), v0 * th.sin());
    let g = physics.gravity;
    let tau = if drag_k == 0.0 {
        FREE_FLIGHT_TAU
    } else {
        physics.mass_kg / drag_k
    };

    grid.iter()
        .map(|&t| {
            let decay = -(-t / tau).exp_m1();
            Sample {
                t,
                x: v0x * tau * decay,
                y: (v0y + g * tau) * tau * decay - g * t * tau,
            }
        })
        .collect()
}

/* -------------------------------- tests -------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use projectile_core::{metrics_from_samples, no_drag_metrics, time_grid};

    #[test]
    fn free_flight_hits_closed_form_range() {
        let physics = Physics::baseball();
        let m = no_drag_metrics(50.0, 45.0, physics.gravity);

        // Sample exactly at the closed-form landing time: y returns to 0,
        // x equals the closed-form range.
        let traj = free_flight(50.0, 45.0, physics, &[0.0, m.flight_time_s]);
        assert_abs_diff_eq!(traj[1].y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(traj[1].x, m.range_m, max_relative = 1e-9);
    }

    #[test]
    fn free_flight_with_zero_speed_stays_at_origin() {
        let traj = free_flight(0.0, 45.0, Physics::baseball(), &[0.0]);
        assert_eq!(traj.len(), 1);
        assert_eq!((traj[0].x, traj[0].y), (0.0, 0.0));
    }

    #[test]
    fn zero_drag_sentinel_matches_free_flight() {
        let physics = Physics::baseball();
        // Cover the whole flight (lands at ~7.21 s).
        let grid = time_grid(7.3, 731);

        let parabola = free_flight(50.0, 45.0, physics, &grid);
        let with_sentinel = linear_drag(50.0, 45.0, 0.0, physics, &grid);

        for (a, b) in parabola.iter().zip(&with_sentinel) {
            assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-3);
            assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-3);
        }
    }

    #[test]
    fn vanishing_drag_converges_to_free_flight() {
        let physics = Physics::baseball();
        let grid = time_grid(7.3, 731);

        let parabola = free_flight(50.0, 45.0, physics, &grid);
        let nearly_free = linear_drag(50.0, 45.0, 1e-6, physics, &grid);

        // Residual drag effect scales as t²/(2τ) with τ = 1.45e5 s, about
        // 6.5e-3 m in x at the end of this grid.
        for (a, b) in parabola.iter().zip(&nearly_free) {
            assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-2);
            assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-2);
        }
    }

    #[test]
    fn linear_drag_reference_point() {
        // v0 = 50, θ = 45°, k = 0.2, baseball: evaluated from the closed
        // form in double precision.
        let traj = linear_drag(50.0, 45.0, 0.2, Physics::baseball(), &[3.0]);
        assert_relative_eq!(traj[0].x, 25.223_631_092_177_09, max_relative = 1e-12);
        assert_relative_eq!(traj[0].y, 8.966_541_504_404_482, max_relative = 1e-12);
    }

    #[test]
    fn drag_shortens_the_flight() {
        let physics = Physics::baseball();
        let grid = time_grid(30.0, 800);

        let mut dragged = linear_drag(50.0, 45.0, 0.2, physics, &grid);
        projectile_core::mask_below_ground(&mut dragged);

        let no_drag = no_drag_metrics(50.0, 45.0, physics.gravity);
        let with_drag = metrics_from_samples(&dragged);

        assert!(with_drag.is_defined());
        assert!(with_drag.range_m < no_drag.range_m);
        assert!(with_drag.max_height_m < no_drag.max_height_m);
    }

    #[test]
    fn identical_inputs_reproduce_bit_identical_output() {
        let physics = Physics::baseball();
        let grid = time_grid(30.0, 800);
        let a = linear_drag(50.0, 45.0, 0.2, physics, &grid);
        let b = linear_drag(50.0, 45.0, 0.2, physics, &grid);
        assert_eq!(a, b);
    }
}
