use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy::ui::FocusPolicy;

use crate::{
    trail::{ParticleId, ParticleStyle, TrailConfig, VisualSink},
    visual::utils::{PRIMARY, TRAIL_LAYER, faded},
};

/// Marks the UI node drawing one trail particle
#[derive(Component, Debug)]
pub struct TrailParticle;

/// UI-node backed sink for the pointer trail.
///
/// Each particle is an absolutely positioned round node with a box shadow for
/// its glow. Position, size, alpha and glow are rewritten from the particle
/// style every frame.
#[derive(SystemParam)]
pub struct ParticleNodes<'w, 's> {
    commands: Commands<'w, 's>,
    nodes: Query<
        'w,
        's,
        (
            &'static mut Node,
            &'static mut BackgroundColor,
            &'static mut BoxShadow,
        ),
        With<TrailParticle>,
    >,
    config: Res<'w, TrailConfig>,
}

impl VisualSink for ParticleNodes<'_, '_> {
    type Handle = Entity;

    fn create(&mut self, id: ParticleId, position: Vec2) -> Entity {
        let style = ParticleStyle {
            center: position,
            size: self.config.particle_size,
            opacity: 1.0,
            glow_blur: self.config.glow_blur,
            glow_spread: self.config.glow_spread,
            glow_alpha: self.config.glow_alpha,
        };

        self.commands
            .spawn((
                TrailParticle,
                Name::new(format!("Trail particle {id}")),
                particle_node(&style),
                BackgroundColor(faded(PRIMARY, style.opacity)),
                BorderRadius::MAX,
                particle_glow(&style),
                GlobalZIndex(TRAIL_LAYER),
                FocusPolicy::Pass,
            ))
            .id()
    }

    fn is_attached(&self, handle: &Entity) -> bool {
        self.nodes.contains(*handle)
    }

    fn update(&mut self, handle: Entity, style: &ParticleStyle) {
        let Ok((mut node, mut background, mut shadow)) = self.nodes.get_mut(handle) else {
            return;
        };

        *node = particle_node(style);
        background.0 = faded(PRIMARY, style.opacity);
        *shadow = particle_glow(style);
    }

    fn destroy(&mut self, handle: Entity) {
        if let Ok(mut entity) = self.commands.get_entity(handle) {
            entity.despawn();
        }
    }
}

/// Node centred on the particle origin (the CSS `translate(-50%, -50%)`)
fn particle_node(style: &ParticleStyle) -> Node {
    let half = style.size * 0.5;
    Node {
        position_type: PositionType::Absolute,
        left: Val::Px(style.center.x - half),
        top: Val::Px(style.center.y - half),
        width: Val::Px(style.size),
        height: Val::Px(style.size),
        ..default()
    }
}

fn particle_glow(style: &ParticleStyle) -> BoxShadow {
    BoxShadow::new(
        faded(PRIMARY, style.glow_alpha),
        Val::ZERO,
        Val::ZERO,
        Val::Px(style.glow_spread),
        Val::Px(style.glow_blur),
    )
}
