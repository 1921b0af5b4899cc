//! Rendering configuration and helpers.
//!
//! The simulation core knows nothing about pixels: it works in normalized
//! space, center origin, y up, [-1, 1] on both axes. This module owns the
//! mapping between that space and the window (top-left origin, y down) and
//! builds the vertex-colored backdrop mesh for the water level.

use bevy::prelude::*;
use bevy::render::mesh::Indices;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::PrimitiveTopology;

/// Visual tuning for the water scene.
#[derive(Resource, Clone, Debug, Reflect)]
#[reflect(Resource)]
pub struct WaterRenderConfig {
    /// Disc radius per particle, in simulation units. Scaled per axis by
    /// half the viewport, so discs stretch with the aspect ratio the way
    /// normalized-space circles do.
    pub particle_radius: f32,
    /// Fill color for particle discs.
    pub particle_color: Color,
    /// Backdrop color at the water surface.
    pub surface_color: Color,
    /// Backdrop color at the bottom of the basin.
    pub deep_color: Color,
    /// Window clear color.
    pub clear_color: Color,
    /// Whether to outline the simulation square.
    pub draw_bounds: bool,
    /// Outline color for the simulation square.
    pub bounds_color: Color,
}

impl Default for WaterRenderConfig {
    fn default() -> Self {
        Self {
            particle_radius: 0.03,
            particle_color: Color::srgba(0.3, 0.7, 0.9, 0.8),
            surface_color: Color::srgba(0.3, 0.7, 0.9, 0.8),
            deep_color: Color::srgba(0.3, 0.5, 0.9, 0.5),
            clear_color: Color::srgb(0.576, 0.871, 0.973),
            draw_bounds: true,
            bounds_color: Color::WHITE,
        }
    }
}

/// Converts a cursor position (logical pixels, top-left origin, y down)
/// to simulation space.
pub fn cursor_to_sim(cursor: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(
        2.0 * cursor.x / viewport.x - 1.0,
        1.0 - 2.0 * cursor.y / viewport.y,
    )
}

/// Converts a simulation-space point to world coordinates for a centered
/// 2D camera, where the viewport spans [-w/2, w/2] x [-h/2, h/2].
pub fn sim_to_world(point: Vec2, viewport: Vec2) -> Vec2 {
    point * viewport * 0.5
}

/// Builds the water backdrop: a full-width quad from the bottom of the
/// basin up to `water_level`, shaded from `surface_color` at the top edge
/// to `deep_color` at the bottom.
///
/// The mesh is in simulation coordinates; the caller scales it to the
/// viewport through its transform.
pub fn build_backdrop_mesh(water_level: f32, config: &WaterRenderConfig) -> Mesh {
    let surface = config.surface_color.to_linear().to_f32_array();
    let deep = config.deep_color.to_linear().to_f32_array();

    let positions = vec![
        [-1.0, water_level, 0.0],
        [1.0, water_level, 0.0],
        [1.0, -1.0, 0.0],
        [-1.0, -1.0, 0.0],
    ];
    let colors = vec![surface, surface, deep, deep];

    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, colors)
    .with_inserted_indices(Indices::U32(vec![0, 1, 2, 0, 2, 3]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

    #[test]
    fn cursor_center_maps_to_origin() {
        let sim = cursor_to_sim(Vec2::new(640.0, 360.0), VIEWPORT);
        assert!(sim.length() < 1e-6);
    }

    #[test]
    fn cursor_corners_map_to_sim_corners() {
        // Window origin is top-left with y down; simulation y is up.
        let top_left = cursor_to_sim(Vec2::ZERO, VIEWPORT);
        assert!((top_left - Vec2::new(-1.0, 1.0)).length() < 1e-6);

        let bottom_right = cursor_to_sim(VIEWPORT, VIEWPORT);
        assert!((bottom_right - Vec2::new(1.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn sim_corner_maps_to_half_viewport() {
        let world = sim_to_world(Vec2::new(1.0, 1.0), VIEWPORT);
        assert_eq!(world, Vec2::new(640.0, 360.0));
    }

    #[test]
    fn cursor_roundtrips_through_both_mappings() {
        let cursor = Vec2::new(200.0, 500.0);
        let world = sim_to_world(cursor_to_sim(cursor, VIEWPORT), VIEWPORT);
        // Same point, re-expressed around the window center with y flipped.
        assert!((world.x - (cursor.x - 640.0)).abs() < 1e-3);
        assert!((world.y - (360.0 - cursor.y)).abs() < 1e-3);
    }

    #[test]
    fn backdrop_mesh_spans_bottom_to_water_level() {
        let config = WaterRenderConfig::default();
        let mesh = build_backdrop_mesh(-0.25, &config);

        assert_eq!(mesh.count_vertices(), 4);

        let positions = mesh
            .attribute(Mesh::ATTRIBUTE_POSITION)
            .and_then(|values| values.as_float3())
            .expect("backdrop positions");
        assert_eq!(positions[0][1], -0.25);
        assert_eq!(positions[3][1], -1.0);
    }
}
