//! Bevy plugin wiring the simulation to input and rendering.
//!
//! Per frame: pointer input may insert a particle and kick off its
//! impulses, then the simulation ticks (pairwise pass followed by
//! integration), then the visuals are synced from the particle state.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::params::WaterParams;
use super::render::{
    build_backdrop_mesh, cursor_to_sim, sim_to_world, WaterRenderConfig,
};
use super::simulation::WaterSimulation;

/// Plugin that adds the interactive water simulation to a Bevy app.
///
/// # Example
///
/// ```rust,ignore
/// use bevy::prelude::*;
/// use ondine::prelude::*;
///
/// fn main() {
///     App::new()
///         .add_plugins(DefaultPlugins)
///         .add_plugins(WaterPlugin::default())
///         .run();
/// }
/// ```
#[derive(Default)]
pub struct WaterPlugin {
    params: WaterParams,
}

impl WaterPlugin {
    /// Builds the plugin with a specific tuning.
    pub fn with_params(params: WaterParams) -> Self {
        Self { params }
    }
}

impl Plugin for WaterPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<WaterParams>()
            .register_type::<WaterRenderConfig>();

        let config = WaterRenderConfig::default();
        app.insert_resource(ClearColor(config.clear_color))
            .insert_resource(config)
            .insert_resource(WaterSimulation::new(self.params.clone()))
            .init_resource::<WaterState>();

        app.add_systems(Startup, setup_water_visuals).add_systems(
            Update,
            (
                handle_pointer_input,
                run_simulation,
                sync_particle_visuals,
                update_backdrop,
                draw_bounds,
            )
                .chain(),
        );
    }
}

/// Host-side simulation control.
#[derive(Resource, Default)]
pub struct WaterState {
    /// While paused the simulation neither ticks nor accepts splashes.
    pub paused: bool,
    /// Ticks advanced so far.
    pub frame: u64,
    step_requested: bool,
}

impl WaterState {
    /// Toggles the paused flag.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Requests a single tick while paused.
    pub fn request_step(&mut self) {
        self.step_requested = true;
    }

    fn take_step_request(&mut self) -> bool {
        std::mem::take(&mut self.step_requested)
    }
}

/// Marker plus particle index for a rendered disc.
#[derive(Component)]
struct WaterParticleVisual(usize);

/// Marker for the water level backdrop quad.
#[derive(Component)]
struct WaterBackdrop;

/// Shared unit-circle mesh for particle discs.
#[derive(Resource)]
struct WaterParticleMesh(Handle<Mesh>);

/// Shared material for particle discs.
#[derive(Resource)]
struct WaterParticleMaterial(Handle<ColorMaterial>);

fn setup_water_visuals(
    mut commands: Commands,
    config: Res<WaterRenderConfig>,
    simulation: Res<WaterSimulation>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // Unit circle; per-particle transforms scale it to the configured
    // radius in viewport pixels.
    let circle = meshes.add(Circle::new(1.0));
    let material = materials.add(ColorMaterial::from(config.particle_color));
    commands.insert_resource(WaterParticleMesh(circle));
    commands.insert_resource(WaterParticleMaterial(material));

    let backdrop = meshes.add(build_backdrop_mesh(simulation.water_level(), &config));
    commands.spawn((
        WaterBackdrop,
        Mesh2d(backdrop),
        // White material: the quad's vertex colors carry the gradient.
        MeshMaterial2d(materials.add(ColorMaterial::default())),
        Transform::IDENTITY,
    ));
}

/// Turns a held left button into one splash per frame at the cursor.
///
/// The pressed state is polled once per frame, so a sustained press pours
/// a stream of particles; `pressed` rather than `just_pressed` is
/// intentional.
fn handle_pointer_input(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    state: Res<WaterState>,
    mut simulation: ResMut<WaterSimulation>,
) {
    if state.paused || !mouse.pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    let viewport = Vec2::new(window.width(), window.height());
    let point = cursor_to_sim(cursor, viewport);
    simulation.splash(point.x, point.y);

    debug!(
        "splash at ({:.3}, {:.3}), {} particles, water level {:.3}",
        point.x,
        point.y,
        simulation.particle_count(),
        simulation.water_level()
    );
}

fn run_simulation(mut state: ResMut<WaterState>, mut simulation: ResMut<WaterSimulation>) {
    if state.paused && !state.take_step_request() {
        return;
    }
    simulation.tick();
    state.frame += 1;
}

/// Keeps one disc entity per particle and moves it to the particle's
/// position. Entities are spawned as the collection grows and despawned if
/// an eviction policy shrank it.
fn sync_particle_visuals(
    mut commands: Commands,
    simulation: Res<WaterSimulation>,
    config: Res<WaterRenderConfig>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mesh: Res<WaterParticleMesh>,
    material: Res<WaterParticleMaterial>,
    mut visuals: Query<(Entity, &WaterParticleVisual, &mut Transform)>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let viewport = Vec2::new(window.width(), window.height());
    let scale = Vec3::new(
        config.particle_radius * viewport.x * 0.5,
        config.particle_radius * viewport.y * 0.5,
        1.0,
    );

    let particles = simulation.particles();
    let mut present = 0;

    for (entity, visual, mut transform) in visuals.iter_mut() {
        match particles.get(visual.0) {
            Some(particle) => {
                let world = sim_to_world(particle.position, viewport);
                transform.translation = world.extend(1.0);
                transform.scale = scale;
                present += 1;
            }
            None => commands.entity(entity).despawn(),
        }
    }

    for index in present..particles.len() {
        let world = sim_to_world(particles[index].position, viewport);
        commands.spawn((
            WaterParticleVisual(index),
            Mesh2d(mesh.0.clone()),
            MeshMaterial2d(material.0.clone()),
            Transform::from_translation(world.extend(1.0)).with_scale(scale),
        ));
    }
}

/// Rebuilds the backdrop quad when the water level changes and keeps it
/// scaled to the viewport.
fn update_backdrop(
    simulation: Res<WaterSimulation>,
    config: Res<WaterRenderConfig>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut backdrops: Query<(&Mesh2d, &mut Transform), With<WaterBackdrop>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let viewport = Vec2::new(window.width(), window.height());

    for (mesh, mut transform) in backdrops.iter_mut() {
        transform.scale = Vec3::new(viewport.x * 0.5, viewport.y * 0.5, 1.0);
        if simulation.is_changed() {
            meshes.insert(
                &mesh.0,
                build_backdrop_mesh(simulation.water_level(), &config),
            );
        }
    }
}

/// Outlines the simulation square.
fn draw_bounds(
    config: Res<WaterRenderConfig>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut gizmos: Gizmos,
) {
    if !config.draw_bounds {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let viewport = Vec2::new(window.width(), window.height());

    let corners = [
        sim_to_world(Vec2::new(-1.0, -1.0), viewport),
        sim_to_world(Vec2::new(1.0, -1.0), viewport),
        sim_to_world(Vec2::new(1.0, 1.0), viewport),
        sim_to_world(Vec2::new(-1.0, 1.0), viewport),
    ];
    for i in 0..4 {
        gizmos.line_2d(corners[i], corners[(i + 1) % 4], config.bounds_color);
    }
}
