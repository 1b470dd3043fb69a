use bevy::prelude::*;

mod camera;
mod content;
mod input;
mod trail;
mod visual;

use bevy::window::{CursorOptions, WindowResolution};
use camera::CameraPlugin;
use input::InputPlugin;

use crate::visual::plugin::PortfolioPlugin;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Neon Portfolio".into(),
            resolution: WindowResolution::new(1280, 800),
            resizable: true,
            ..default()
        }),
        // The trail draws its own cursor ring
        primary_cursor_options: Some(CursorOptions {
            visible: false,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(CameraPlugin)
    .add_plugins(InputPlugin)
    .add_plugins(PortfolioPlugin);

    app.run();
}
