//! Ondine - interactive water toy demo
//!
//! Click (or hold) the left mouse button to pour water into the basin.

use bevy::prelude::*;
use ondine::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Ondine - Water Simulation".to_string(),
                resolution: bevy::window::WindowResolution::new(1280.0, 720.0),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(WaterPlugin::with_params(WaterParams::default()))
        .add_systems(Startup, setup_scene)
        .add_systems(Update, (handle_input, update_hud))
        .run();
}

/// Marker for the HUD text.
#[derive(Component)]
struct HudText;

fn setup_scene(mut commands: Commands) {
    commands.spawn(Camera2d);

    commands.spawn((
        Text::new(
            "Ondine Water Simulation\n\n\
             Controls:\n  \
             Left mouse - Pour water\n  \
             Space - Pause/Resume\n  \
             S - Step (when paused)\n\n\
             Particles: 0",
        ),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        HudText,
    ));
}

/// Keyboard control for pausing and single-stepping.
fn handle_input(keyboard: Res<ButtonInput<KeyCode>>, mut state: ResMut<WaterState>) {
    if keyboard.just_pressed(KeyCode::Space) {
        state.toggle_pause();
    }
    if keyboard.just_pressed(KeyCode::KeyS) && state.paused {
        state.request_step();
    }
}

fn update_hud(
    state: Res<WaterState>,
    simulation: Res<WaterSimulation>,
    mut text_query: Query<&mut Text, With<HudText>>,
) {
    for mut text in text_query.iter_mut() {
        let status = if state.paused { "PAUSED" } else { "Running" };
        text.0 = format!(
            "Ondine Water Simulation ({})\n\n\
             Controls:\n  \
             Left mouse - Pour water\n  \
             Space - Pause/Resume\n  \
             S - Step (when paused)\n\n\
             Particles: {}\n\
             Water level: {:.3}\n\
             Frame: {}",
            status,
            simulation.particle_count(),
            simulation.water_level(),
            state.frame
        );
    }
}
