//! Interactive water particle simulation module.
//!
//! A variable-size set of point masses under gravity, buoyancy, drag,
//! damping, pairwise spring/cohesion forces, and click-triggered
//! ripple/wave impulses, integrated once per frame and rendered as filled
//! discs over a water-level gradient.
//!
//! # Architecture
//!
//! - [`params`]: simulation tunables (one immutable object, injected at
//!   construction)
//! - [`particle`]: point-mass state and per-tick integration
//! - [`forces`]: pure force laws (spring, tension, ripple, wave)
//! - [`simulation`]: the particle system — collection, water level, tick
//! - [`render`]: render config, coordinate mapping, backdrop mesh
//! - [`plugin`]: Bevy plugin gluing input, tick, and visuals together
//!
//! The core ([`simulation`] and below) has no notion of windows or pixels;
//! it consumes normalized click coordinates and per-frame ticks, and
//! exposes particle state for drawing.

pub mod forces;
pub mod params;
pub mod particle;
pub mod plugin;
pub mod render;
pub mod simulation;

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::params::WaterParams;
    pub use super::particle::WaterParticle;
    pub use super::plugin::{WaterPlugin, WaterState};
    pub use super::render::WaterRenderConfig;
    pub use super::simulation::WaterSimulation;
}
