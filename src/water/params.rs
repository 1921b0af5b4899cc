//! Simulation parameters.
//!
//! These parameters control the behavior of the water simulation. They are
//! passed to [`WaterSimulation::new`](super::simulation::WaterSimulation::new)
//! once and treated as immutable for the lifetime of the simulation.

use bevy::prelude::*;

/// Parameters controlling the water particle simulation.
///
/// This is a heuristic spring-and-drag approximation calibrated for visual
/// plausibility in the [-1, 1] square, not for physical accuracy. All
/// force magnitudes are per-tick velocity deltas (the integrator uses a
/// unit time step).
#[derive(Clone, Debug, Reflect)]
pub struct WaterParams {
    /// Downward velocity decrement applied every tick.
    pub gravity: f32,

    /// Upward velocity increment applied while a particle is below the
    /// water level.
    pub buoyancy: f32,

    /// Multiplicative velocity decay applied every tick. Must be in (0, 1)
    /// for the simulation to dissipate energy.
    pub drag: f32,

    /// Second multiplicative decay, compounding with drag. Kept separate
    /// so the two can be tuned independently.
    pub damping: f32,

    /// Hookean spring stiffness for the pairwise restoring force.
    pub spring_constant: f32,

    /// Scale applied to the spring force before it reaches a velocity.
    /// Softens the spring without changing its equilibrium.
    pub spread: f32,

    /// Equilibrium distance for the spring force, and the inner edge of
    /// the surface tension band (which spans separation..2*separation).
    pub separation: f32,

    /// Surface tension strength. Attractive only, vanishing at both edges
    /// of its band.
    pub tension: f32,

    /// Strength of the repulsive ripple impulse applied on insertion.
    pub ripple_factor: f32,

    /// Radius of the ripple impulse around the insertion point.
    pub ripple_radius: f32,

    /// Strength of the oscillatory wave impulse applied on insertion.
    pub wave_factor: f32,

    /// Radius of the wave impulse around the insertion point.
    pub wave_radius: f32,

    /// Spatial frequency of the wave impulse (`sin(distance * frequency)`).
    pub wave_frequency: f32,

    /// How much the water level rises per inserted particle.
    pub water_level_increment: f32,

    /// Water level at construction time. -1.0 is an empty basin.
    pub initial_water_level: f32,

    /// Optional bound on the particle count. When set, the oldest particle
    /// is evicted on insertion once the bound is reached; `None` means
    /// unbounded growth. The pairwise pass is O(n²), so an unbounded
    /// simulation gets slower with every click.
    pub capacity: Option<usize>,
}

impl Default for WaterParams {
    fn default() -> Self {
        Self {
            gravity: 0.002,
            buoyancy: 0.003,
            drag: 0.98,
            damping: 0.98,
            spring_constant: 0.015,
            spread: 0.005,
            // 24 pixels at a 1280x720 window, in normalized x.
            separation: 24.0 / 640.0,
            tension: 0.007,
            ripple_factor: 0.001,
            ripple_radius: 0.1,
            wave_factor: 0.01,
            wave_radius: 0.3,
            wave_frequency: 10.0,
            water_level_increment: 0.001,
            initial_water_level: -1.0,
            capacity: None,
        }
    }
}

impl WaterParams {
    /// The default water tuning.
    pub fn water() -> Self {
        Self::default()
    }

    /// Gentler insertion impulses and stronger damping; clicks barely
    /// disturb the pool.
    pub fn calm() -> Self {
        Self {
            ripple_factor: 0.0005,
            wave_factor: 0.004,
            damping: 0.96,
            ..Self::default()
        }
    }

    /// Livelier surface: stronger waves, less decay.
    pub fn choppy() -> Self {
        Self {
            ripple_factor: 0.002,
            wave_factor: 0.02,
            drag: 0.99,
            damping: 0.99,
            ..Self::default()
        }
    }

    /// Outer edge of the surface tension band.
    pub fn tension_radius(&self) -> f32 {
        2.0 * self.separation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_decay_factors_dissipate_energy() {
        let params = WaterParams::default();
        assert!(params.drag > 0.0 && params.drag < 1.0);
        assert!(params.damping > 0.0 && params.damping < 1.0);
    }

    #[test]
    fn tension_band_sits_outside_spring_range() {
        let params = WaterParams::default();
        assert!((params.tension_radius() - 2.0 * params.separation).abs() < 1e-6);
    }

    #[test]
    fn presets_start_from_the_default_tuning() {
        let default = WaterParams::default();
        let calm = WaterParams::calm();
        assert_eq!(calm.separation, default.separation);
        assert!(calm.wave_factor < default.wave_factor);
    }
}
