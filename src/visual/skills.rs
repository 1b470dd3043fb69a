use bevy::prelude::*;

use crate::{
    content::{ProgressFill, SkillGroup, SkillsFeed, group_by_category},
    visual::{
        typography::PageFonts,
        utils::{MUTED, PRIMARY, faded},
    },
};

const CARD_WIDTH: f32 = 220.0;
const BAR_HEIGHT: f32 = 6.0;

/// Container the category cards are added to once skills arrive
#[derive(Component)]
pub struct SkillsPanel;

/// Shown in the skills panel while the feed is still loading
#[derive(Component)]
pub struct SkillsPlaceholder;

/// Fill node of one skill bar, with the label that echoes its percentage
#[derive(Component)]
pub struct SkillBar {
    fill: ProgressFill,
    label: Entity,
    shown: Option<u8>,
}

/// Heading plus the (still empty) row of category cards
pub fn spawn_skills_panel(parent: &mut ChildSpawnerCommands, fonts: &PageFonts) {
    parent
        .spawn(Node {
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            row_gap: Val::Px(16.0),
            ..default()
        })
        .with_children(|section| {
            section.spawn((
                Text::new(">_ НАВЫКИ И ТЕХНОЛОГИИ"),
                fonts.bold(24.0),
                TextColor(PRIMARY),
            ));

            section
                .spawn((
                    SkillsPanel,
                    Node {
                        flex_wrap: FlexWrap::Wrap,
                        justify_content: JustifyContent::Center,
                        column_gap: Val::Px(16.0),
                        row_gap: Val::Px(16.0),
                        ..default()
                    },
                ))
                .with_children(|panel| {
                    panel.spawn((
                        SkillsPlaceholder,
                        Text::new("..."),
                        fonts.regular(18.0),
                        TextColor(MUTED),
                    ));
                });
        });
}

/// System: Replace the placeholder with one card per category once skills are ready
pub fn populate_skills_panel(
    mut commands: Commands,
    feed: Res<SkillsFeed>,
    fonts: Res<PageFonts>,
    panels: Query<Entity, With<SkillsPanel>>,
    placeholders: Query<Entity, With<SkillsPlaceholder>>,
    bars: Query<(), With<SkillBar>>,
) {
    if feed.0.is_loading() || !bars.is_empty() {
        return;
    }

    let Ok(panel) = panels.single() else {
        return;
    };

    for placeholder in &placeholders {
        commands.entity(placeholder).despawn();
    }

    let groups = group_by_category(feed.0.items());
    commands.entity(panel).with_children(|panel| {
        for group in &groups {
            spawn_skill_card(panel, group, &fonts);
        }
    });

    info!("Skills panel populated with {} categories", groups.len());
}

fn spawn_skill_card(panel: &mut ChildSpawnerCommands, group: &SkillGroup, fonts: &PageFonts) {
    panel
        .spawn((
            Node {
                width: Val::Px(CARD_WIDTH),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(10.0),
                padding: UiRect::all(Val::Px(14.0)),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BorderColor::all(faded(PRIMARY, 0.2)),
            BackgroundColor(faded(PRIMARY, 0.03)),
        ))
        .with_children(|card| {
            card.spawn(Node {
                justify_content: JustifyContent::SpaceBetween,
                align_items: AlignItems::Center,
                ..default()
            })
            .with_children(|header| {
                header.spawn((
                    Text::new(group.category.clone()),
                    fonts.bold(13.0),
                    TextColor(Color::WHITE),
                ));
                header.spawn((
                    Text::new(format!("{} навыков", group.skills.len())),
                    fonts.regular(10.0),
                    TextColor(MUTED),
                ));
            });

            for skill in &group.skills {
                card.spawn(Node {
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(4.0),
                    ..default()
                })
                .with_children(|row| {
                    let mut label = Entity::PLACEHOLDER;
                    row.spawn(Node {
                        justify_content: JustifyContent::SpaceBetween,
                        ..default()
                    })
                    .with_children(|line| {
                        line.spawn((
                            Text::new(skill.name.clone()),
                            fonts.regular(12.0),
                            TextColor(Color::WHITE),
                        ));
                        label = line
                            .spawn((Text::new("0%"), fonts.regular(11.0), TextColor(PRIMARY)))
                            .id();
                    });

                    row.spawn((
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Px(BAR_HEIGHT),
                            ..default()
                        },
                        BackgroundColor(faded(MUTED, 0.3)),
                        BorderRadius::MAX,
                    ))
                    .with_children(|track| {
                        track.spawn((
                            SkillBar {
                                fill: ProgressFill::new(
                                    skill.proficiency,
                                    ProgressFill::DEFAULT_DELAY,
                                ),
                                label,
                                shown: None,
                            },
                            Node {
                                width: Val::Percent(0.0),
                                height: Val::Percent(100.0),
                                ..default()
                            },
                            BackgroundColor(PRIMARY),
                            BorderRadius::MAX,
                        ));
                    });
                });
            }
        });
}

/// System: Fill every skill bar after its delay
pub fn animate_skill_bars(
    time: Res<Time>,
    mut bars: Query<(&mut SkillBar, &mut Node)>,
    mut labels: Query<&mut Text>,
) {
    let dt = time.delta_secs();

    for (mut bar, mut node) in &mut bars {
        bar.fill.tick(dt);

        let value = bar.fill.value();
        if bar.shown == Some(value) {
            continue;
        }
        bar.shown = Some(value);

        node.width = Val::Percent(value as f32);
        if let Ok(mut text) = labels.get_mut(bar.label) {
            text.0 = format!("{}%", value);
        }
    }
}
