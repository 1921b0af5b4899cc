//! Ondine - interactive 2D water particle toy for Bevy
//!
//! A heuristic spring-and-drag fluid approximation: every click drops a
//! particle into a [-1, 1] basin, raises the water level, and sends ripple
//! and wave impulses through the pool. Tuned for visual plausibility, not
//! physical accuracy.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use ondine::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(WaterPlugin::with_params(WaterParams::default()))
//!         .add_systems(Startup, |mut commands: Commands| {
//!             commands.spawn(Camera2d);
//!         })
//!         .run();
//! }
//! ```
//!
//! The simulation core is usable without the plugin: construct a
//! [`water::simulation::WaterSimulation`], call `splash` for insertions and
//! `tick` once per frame, and read back `particles()` for drawing.

pub mod water;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::water::prelude::*;
}
