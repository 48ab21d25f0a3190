// Support configuring Bevy lints within code.
#![cfg_attr(bevy_lint, feature(register_tool), register_tool(bevy))]
// Disable console on Windows for non-dev builds.
#![cfg_attr(not(feature = "dev"), windows_subsystem = "windows")]

#[cfg(feature = "dev_native")]
mod debug_tools;

mod camera;
mod chat;
mod config;
mod input;
mod network;
mod nv;
mod player;
mod text;
mod world;

use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;

fn main() -> AppExit {
    App::new().add_plugins(AppPlugin).run()
}

pub struct AppPlugin;
impl Plugin for AppPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Window {
                        title: "NV.Utils".to_string(),
                        fit_canvas_to_parent: true,
                        ..default()
                    }
                    .into(),
                    ..default()
                })
                .set(LogPlugin {
                    filter: "wgpu=error,naga=warn,nv_client=debug,nv_shared=debug".to_string(),
                    level: Level::INFO,
                    ..default()
                }),
        );

        // Overlay text is laid out in the host's small-font pixel units.
        app.insert_resource(UiScale(2.0));

        app.add_plugins((
            config::plugin,
            input::plugin,
            world::plugin,
            player::plugin,
            camera::plugin,
            chat::plugin,
            network::plugin,
            nv::plugin,
        ));

        #[cfg(feature = "dev_native")]
        app.add_plugins(debug_tools::plugin);
    }
}
