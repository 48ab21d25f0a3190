//! Performance overlay for native dev builds, toggled with F3.
//!
//! Gated behind `dev_native` in `main.rs`.

use bevy::diagnostic::{
    EntityCountDiagnosticsPlugin, FrameTimeDiagnosticsPlugin, SystemInformationDiagnosticsPlugin,
};
use bevy::prelude::*;
use bevy::render::diagnostic::RenderDiagnosticsPlugin;
use iyes_perf_ui::prelude::*;

#[derive(Component)]
struct PerfOverlay;

pub(super) fn plugin(app: &mut App) {
    app.add_plugins((
        FrameTimeDiagnosticsPlugin::default(),
        EntityCountDiagnosticsPlugin::default(),
        SystemInformationDiagnosticsPlugin::default(),
        RenderDiagnosticsPlugin,
        PerfUiPlugin,
    ));

    app.add_systems(Startup, spawn_perf_ui);
    app.add_systems(Update, toggle_perf_ui);
}

fn spawn_perf_ui(mut commands: Commands) {
    commands.spawn((PerfUiAllEntries::default(), PerfOverlay));
}

fn toggle_perf_ui(
    keys: Res<ButtonInput<KeyCode>>,
    mut overlays: Query<&mut Visibility, With<PerfOverlay>>,
) {
    if !keys.just_pressed(KeyCode::F3) {
        return;
    }
    for mut visibility in &mut overlays {
        visibility.toggle_visible_hidden();
    }
}
