use bevy::prelude::*;
use bevy::ui::FocusPolicy;

use crate::{
    trail::{PointerState, TrailConfig},
    visual::{
        plugin::CursorTrail,
        utils::{CURSOR_LAYER, PRIMARY, SECONDARY, faded},
    },
};

/// Ring diameter over ordinary content
const RING_SIZE: f32 = 16.0;
const RING_BORDER: f32 = 2.0;
/// Ring grows by this factor over links and buttons
const HOVER_SCALE: f32 = 1.5;

/// The custom cursor indicator following the pointer
#[derive(Component)]
pub struct CursorRing;

/// Size and colour of the ring for a given pointer state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingLook {
    pub size: f32,
    pub color: Color,
}

impl RingLook {
    pub fn for_pointer(pointer: &PointerState) -> Self {
        if pointer.over_interactive {
            RingLook {
                size: RING_SIZE * HOVER_SCALE,
                color: SECONDARY,
            }
        } else {
            RingLook {
                size: RING_SIZE,
                color: PRIMARY,
            }
        }
    }

    fn node(&self, center: Vec2) -> Node {
        let half = self.size * 0.5;
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(center.x - half),
            top: Val::Px(center.y - half),
            width: Val::Px(self.size),
            height: Val::Px(self.size),
            border: UiRect::all(Val::Px(RING_BORDER)),
            ..default()
        }
    }

    fn glow(&self) -> BoxShadow {
        BoxShadow::new(
            faded(self.color, 0.5),
            Val::ZERO,
            Val::ZERO,
            Val::Px(2.0),
            Val::Px(10.0),
        )
    }
}

/// System: Spawn the cursor ring, parked off screen until the pointer moves
pub fn spawn_cursor_ring(mut commands: Commands, config: Res<TrailConfig>) {
    let look = RingLook {
        size: RING_SIZE,
        color: PRIMARY,
    };

    commands.spawn((
        CursorRing,
        look.node(config.offscreen),
        BorderColor::all(look.color),
        BorderRadius::MAX,
        look.glow(),
        GlobalZIndex(CURSOR_LAYER),
        FocusPolicy::Pass,
    ));
}

/// System: Move and restyle the ring from the tracked pointer state
pub fn update_cursor_ring(
    trail: Res<CursorTrail>,
    mut rings: Query<(&mut Node, &mut BorderColor, &mut BoxShadow), With<CursorRing>>,
) {
    let pointer = trail.animator.pointer();
    let look = RingLook::for_pointer(pointer);

    for (mut node, mut border, mut shadow) in &mut rings {
        *node = look.node(pointer.position);
        *border = BorderColor::all(look.color);
        *shadow = look.glow();
    }
}
