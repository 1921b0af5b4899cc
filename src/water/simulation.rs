//! Water simulation core.
//!
//! [`WaterSimulation`] owns the particle collection and the water level and
//! advances them one tick at a time. A tick is fully synchronous and
//! deterministic: the pairwise pass walks unordered pairs in insertion
//! order, so results are bit-reproducible for a given click sequence.
//!
//! Per frame the host is expected to call, in order:
//!
//! 1. [`splash`](WaterSimulation::splash) for a pointer press, if any;
//! 2. [`apply_pairwise_forces`](WaterSimulation::apply_pairwise_forces);
//! 3. [`step`](WaterSimulation::step);
//!
//! or just [`tick`](WaterSimulation::tick) for steps 2 and 3. Positions are
//! then read back for rendering.

use bevy::prelude::*;

use super::forces::{ripple_impulse, spring_impulse, tension_impulse, wave_impulse};
use super::params::WaterParams;
use super::particle::WaterParticle;

/// The particle system: an insertion-ordered particle collection plus the
/// scalar water level.
///
/// Particles are only ever added (see [`WaterParams::capacity`] for the one
/// opt-in exception), so the pairwise pass grows quadratically with every
/// splash over the lifetime of the process.
#[derive(Resource, Clone, Debug)]
pub struct WaterSimulation {
    params: WaterParams,
    particles: Vec<WaterParticle>,
    water_level: f32,
}

impl Default for WaterSimulation {
    fn default() -> Self {
        Self::new(WaterParams::default())
    }
}

impl WaterSimulation {
    /// Creates an empty simulation with the given tuning.
    pub fn new(params: WaterParams) -> Self {
        let water_level = params.initial_water_level;
        Self {
            params,
            particles: Vec::new(),
            water_level,
        }
    }

    /// The tuning this simulation was constructed with.
    pub fn params(&self) -> &WaterParams {
        &self.params
    }

    /// Current particles, in insertion order.
    pub fn particles(&self) -> &[WaterParticle] {
        &self.particles
    }

    /// Number of particles.
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Current water level in [-1, 1].
    pub fn water_level(&self) -> f32 {
        self.water_level
    }

    /// Inserts a particle at `(x, y)` and disturbs the pool around it.
    ///
    /// Appends the particle at rest, raises the water level by the
    /// configured increment (clamped at 1.0), then applies the ripple and
    /// wave impulses centered on the insertion point to every particle.
    /// The new particle sits at distance zero from the center and receives
    /// no self-force.
    ///
    /// Coordinates are taken as-is; callers that pass points outside
    /// [-1, 1] get a particle that the next [`step`](Self::step) pulls back
    /// onto the boundary.
    pub fn splash(&mut self, x: f32, y: f32) {
        let center = Vec2::new(x, y);
        self.particles.push(WaterParticle::new(center));

        if let Some(capacity) = self.params.capacity {
            // Oldest first, so the freshly inserted particle survives.
            while self.particles.len() > capacity.max(1) {
                self.particles.remove(0);
            }
        }

        self.water_level = (self.water_level + self.params.water_level_increment).min(1.0);

        for particle in &mut self.particles {
            particle.velocity += ripple_impulse(particle.position, center, &self.params);
        }
        for particle in &mut self.particles {
            particle.velocity += wave_impulse(particle.position, center, &self.params);
        }
    }

    /// Runs the O(n²) spring and surface tension pass over all unordered
    /// pairs.
    ///
    /// Both deltas of a pair are computed from snapshots taken before
    /// either particle is written, so the pass is symmetric: every
    /// interaction imparts equal and opposite velocity changes.
    pub fn apply_pairwise_forces(&mut self) {
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let a = self.particles[i].position;
                let b = self.particles[j].position;

                let on_a = spring_impulse(a, b, &self.params) + tension_impulse(a, b, &self.params);
                let on_b = spring_impulse(b, a, &self.params) + tension_impulse(b, a, &self.params);

                self.particles[i].velocity += on_a;
                self.particles[j].velocity += on_b;
            }
        }
    }

    /// Integrates every particle by one tick against the current water
    /// level. Call after [`apply_pairwise_forces`](Self::apply_pairwise_forces).
    pub fn step(&mut self) {
        let water_level = self.water_level;
        for particle in &mut self.particles {
            particle.integrate(water_level, &self.params);
        }
    }

    /// One full simulation tick: the pairwise pass followed by integration.
    pub fn tick(&mut self) {
        self.apply_pairwise_forces();
        self.step();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn water_level_rises_by_the_increment_per_splash() {
        let mut sim = WaterSimulation::default();
        let increment = sim.params().water_level_increment;

        for i in 1..=5 {
            // Spread the splashes out so impulses do not matter here.
            sim.splash(-0.8 + 0.4 * i as f32 / 5.0, 0.9);
            assert!((sim.water_level() - (-1.0 + increment * i as f32)).abs() < 1e-6);
        }
        assert_eq!(sim.particle_count(), 5);
    }

    #[test]
    fn water_level_clamps_at_the_top() {
        let mut sim = WaterSimulation::new(WaterParams {
            water_level_increment: 0.5,
            ..WaterParams::default()
        });

        for _ in 0..6 {
            sim.splash(0.0, 0.0);
        }

        assert_eq!(sim.water_level(), 1.0);
    }

    #[test]
    fn splash_then_step_applies_gravity_only() {
        // Drag and damping of 1.0 keep the expected numbers exact.
        let params = WaterParams {
            drag: 1.0,
            damping: 1.0,
            ..WaterParams::default()
        };
        let gravity = params.gravity;
        let increment = params.water_level_increment;
        let mut sim = WaterSimulation::new(params);

        sim.splash(0.2, 0.3);

        assert_eq!(sim.particle_count(), 1);
        assert_eq!(sim.particles()[0].position, Vec2::new(0.2, 0.3));
        assert_eq!(sim.particles()[0].velocity, Vec2::ZERO);
        assert!((sim.water_level() - (-1.0 + increment)).abs() < 1e-6);

        // Single particle: the pairwise pass is a no-op.
        sim.apply_pairwise_forces();
        assert_eq!(sim.particles()[0].velocity, Vec2::ZERO);

        // 0.3 is above the water level, so only gravity applies.
        sim.step();
        assert_eq!(sim.particles()[0].velocity, Vec2::new(0.0, -gravity));
        assert_eq!(sim.particles()[0].position, Vec2::new(0.2, 0.3 - gravity));
    }

    #[test]
    fn pairwise_pass_conserves_momentum() {
        let mut sim = WaterSimulation::default();
        let separation = sim.params().separation;

        sim.splash(0.0, 0.0);
        sim.splash(separation * 0.4, 0.0);
        sim.splash(separation * 0.4, separation * 0.3);

        // Splashing imparted impulses; measure only the pairwise pass.
        let before: Vec2 = sim.particles().iter().map(|p| p.velocity).sum();
        sim.apply_pairwise_forces();
        let after: Vec2 = sim.particles().iter().map(|p| p.velocity).sum();

        assert!((after - before).length() < 1e-6);
    }

    #[test]
    fn pairwise_deltas_are_symmetric_along_the_pair_axis() {
        let params = WaterParams::default();
        let mut sim = WaterSimulation::new(params);

        sim.splash(-0.5, 0.0);
        sim.splash(-0.5 + sim.params().separation * 0.5, 0.0);

        let before: Vec<Vec2> = sim.particles().iter().map(|p| p.velocity).collect();
        sim.apply_pairwise_forces();

        let delta_a = sim.particles()[0].velocity - before[0];
        let delta_b = sim.particles()[1].velocity - before[1];

        assert!(delta_a.length() > 0.0);
        assert!((delta_a + delta_b).length() < 1e-7);
    }

    #[test]
    fn pairwise_pass_visits_each_unordered_pair_exactly_once() {
        use crate::water::forces::{spring_impulse, tension_impulse};

        let mut sim = WaterSimulation::default();
        let separation = sim.params().separation;

        // A cluster where every pair interacts through spring or tension.
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(separation * 0.6, 0.0),
            Vec2::new(0.0, separation * 0.8),
            Vec2::new(separation * 0.5, separation * 0.5),
        ];
        for point in points {
            sim.splash(point.x, point.y);
        }

        let before: Vec<Vec2> = sim.particles().iter().map(|p| p.velocity).collect();
        sim.apply_pairwise_forces();

        // Expand the n*(n-1)/2 pair sum by hand; a pass that skipped or
        // double-counted a pair would not match.
        let params = sim.params().clone();
        for (i, &a) in points.iter().enumerate() {
            let mut expected = Vec2::ZERO;
            for (j, &b) in points.iter().enumerate() {
                if i != j {
                    expected += spring_impulse(a, b, &params) + tension_impulse(a, b, &params);
                }
            }
            let actual = sim.particles()[i].velocity - before[i];
            assert!((actual - expected).length() < 1e-7, "particle {i}");
        }
    }

    #[test]
    fn coincident_particles_never_produce_nan() {
        let mut sim = WaterSimulation::default();
        sim.splash(0.1, 0.1);
        sim.splash(0.1, 0.1);
        sim.splash(0.1, 0.1);

        sim.tick();

        for particle in sim.particles() {
            assert!(particle.position.is_finite());
            assert!(particle.velocity.is_finite());
        }
    }

    #[test]
    fn capacity_evicts_oldest_first() {
        let mut sim = WaterSimulation::new(WaterParams {
            capacity: Some(2),
            ..WaterParams::default()
        });

        sim.splash(-0.5, 0.0);
        sim.splash(0.0, 0.0);
        sim.splash(0.5, 0.0);

        assert_eq!(sim.particle_count(), 2);
        assert_eq!(sim.particles()[0].position.x, 0.0);
        assert_eq!(sim.particles()[1].position.x, 0.5);
    }

    #[test]
    fn unbounded_by_default() {
        let mut sim = WaterSimulation::default();
        for i in 0..100 {
            sim.splash(-0.9 + 0.018 * i as f32, 0.9);
        }
        assert_eq!(sim.particle_count(), 100);
    }

    #[test]
    fn out_of_range_splash_is_pulled_back_by_the_boundary() {
        let mut sim = WaterSimulation::default();
        sim.splash(1.5, -2.0);

        sim.tick();

        let particle = sim.particles()[0];
        assert!(particle.position.x <= 1.0 && particle.position.x >= -1.0);
        assert!(particle.position.y <= 1.0 && particle.position.y >= -1.0);
    }
}
