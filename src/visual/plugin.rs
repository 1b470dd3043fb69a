use crate::content::{SkillsFeed, StatsFeed, load_content_feeds};
use crate::input::{PointerEvent, PointerEventType};
use crate::trail::{FrameQueue, PointerTrailAnimator, TrailConfig};
use crate::visual::cursor::{spawn_cursor_ring, update_cursor_ring};
use crate::visual::hero::{
    animate_hero_title, animate_stat_counters, log_link_presses, populate_stats_row, spawn_hero,
};
use crate::visual::hover::HoverProbe;
use crate::visual::particle_nodes::ParticleNodes;
use crate::visual::skills::{animate_skill_bars, populate_skills_panel};
use crate::visual::typography::load_page_fonts;
use bevy::prelude::*;

/// The pointer trail, mounted for the lifetime of the app
#[derive(Resource)]
pub struct CursorTrail {
    pub animator: PointerTrailAnimator<Entity>,
}

pub struct PortfolioPlugin;

impl Plugin for PortfolioPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(TrailPlugin)
            .init_resource::<StatsFeed>()
            .init_resource::<SkillsFeed>()
            .add_systems(
                Startup,
                (load_page_fonts, spawn_hero, load_content_feeds).chain(),
            )
            .add_systems(
                Update,
                (
                    animate_hero_title,
                    populate_stats_row,
                    animate_stat_counters,
                    populate_skills_panel,
                    animate_skill_bars,
                    log_link_presses,
                )
                    .chain(),
            );
    }
}

/// Cursor ring and particle trail. Needs `PointerEvent` messages.
pub struct TrailPlugin;

impl Plugin for TrailPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FrameQueue>()
            .add_systems(Startup, (setup_trail, spawn_cursor_ring).chain())
            .add_systems(
                Update,
                (
                    handle_pointer_input,
                    drive_trail_frames,
                    update_cursor_ring,
                    unmount_trail_on_exit,
                )
                    .chain(),
            );
    }
}

/// System: Load trail tuning and mount the animator
fn setup_trail(mut commands: Commands, mut frames: ResMut<FrameQueue>) {
    let config = match TrailConfig::load() {
        Ok(config) => {
            info!(
                "✓ Trail config loaded: threshold {}px, particles live {} frames",
                config.emission_threshold,
                config.lifetime_frames()
            );
            config
        }
        Err(e) => {
            warn!("{} - falling back to defaults", e);
            TrailConfig::default()
        }
    };

    let mut animator = PointerTrailAnimator::new(&config);
    animator.mount(&mut *frames);

    commands.insert_resource(config);
    commands.insert_resource(CursorTrail { animator });
}

/// System: Feed pointer messages to the trail
fn handle_pointer_input(
    mut pointer_events: MessageReader<PointerEvent>,
    mut trail: ResMut<CursorTrail>,
    probe: HoverProbe,
    mut sink: ParticleNodes,
) {
    for event in pointer_events.read() {
        match event.event_type {
            PointerEventType::Move => {
                let target = probe.target();
                if let Some(id) =
                    trail
                        .animator
                        .pointer_moved(event.position, target.as_ref(), &mut sink)
                {
                    debug!("Trail particle {} at {:?}", id, event.position);
                }
            }
            PointerEventType::Leave => {
                trail.animator.pointer_left();
            }
        }
    }
}

/// System: Run every frame request that came due on this refresh
fn drive_trail_frames(
    mut frames: ResMut<FrameQueue>,
    mut trail: ResMut<CursorTrail>,
    mut sink: ParticleNodes,
) {
    for request in frames.take_due() {
        trail.animator.frame(request, &mut *frames, &mut sink);
    }
}

/// System: Release every particle when the app is shutting down
fn unmount_trail_on_exit(
    mut exits: MessageReader<AppExit>,
    mut frames: ResMut<FrameQueue>,
    mut trail: ResMut<CursorTrail>,
    mut sink: ParticleNodes,
) {
    if exits.read().next().is_none() || !trail.animator.is_mounted() {
        return;
    }

    let live = trail.animator.particles().len();
    let ran = trail.animator.frames();
    trail.animator.unmount(&mut *frames, &mut sink);
    info!(
        "Cursor trail unmounted after {} frames ({} particles released)",
        ran, live
    );
}
