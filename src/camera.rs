use bevy::prelude::*;

use crate::visual::utils::BACKGROUND;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(BACKGROUND))
            .add_systems(Startup, setup_camera);
    }
}

#[derive(Component)]
pub struct MainCamera;

/// UI-only page: a plain 2D camera renders the node tree.
///
/// UI coordinates match window coordinates (logical px from the top-left), so
/// pointer positions can be used for node placement as-is.
fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MainCamera));
}
