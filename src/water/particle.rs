//! Water particle state and per-tick integration.

use bevy::prelude::*;

use super::params::WaterParams;

/// One point mass in the simulation.
///
/// Position lives in normalized simulation space: center origin, y up,
/// both axes in [-1, 1]. [`integrate`](Self::integrate) re-establishes that
/// bound every tick, so the invariant only holds between ticks, not while
/// forces are being accumulated.
#[derive(Clone, Copy, Debug, Reflect)]
pub struct WaterParticle {
    /// Position in simulation space.
    pub position: Vec2,
    /// Velocity in simulation units per tick.
    pub velocity: Vec2,
}

impl WaterParticle {
    /// Creates a particle at rest at the given position.
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
        }
    }

    /// Advances the particle by one tick.
    ///
    /// Applies the single-particle forces (gravity, buoyancy while below
    /// `water_level`, then drag and damping), integrates the position with
    /// an explicit Euler step of unit length, and reflects off the [-1, 1]
    /// walls. The walls are inelastic: the position is clamped and the
    /// offending velocity component zeroed, no energy is returned.
    pub fn integrate(&mut self, water_level: f32, params: &WaterParams) {
        self.velocity.y -= params.gravity;

        if self.position.y < water_level {
            self.velocity.y += params.buoyancy;
        }

        self.velocity *= params.drag;
        self.velocity *= params.damping;

        self.position += self.velocity;

        if self.position.x < -1.0 {
            self.position.x = -1.0;
            self.velocity.x = 0.0;
        } else if self.position.x > 1.0 {
            self.position.x = 1.0;
            self.velocity.x = 0.0;
        }

        if self.position.y < -1.0 {
            self.position.y = -1.0;
            self.velocity.y = 0.0;
        } else if self.position.y > 1.0 {
            self.position.y = 1.0;
            self.velocity.y = 0.0;
        }
    }
}
