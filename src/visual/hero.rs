use bevy::prelude::*;

use crate::{
    content::{Blink, CountUp, StatsFeed, Typewriter, group_thousands},
    visual::{
        hover::{LinkTarget, PointerCursor},
        skills::spawn_skills_panel,
        typography::PageFonts,
        utils::{MUTED, PRIMARY, SECONDARY, faded},
    },
};

const HERO_TITLE: &str = ">_ KONSTANTIN KRESTNIKOV";
/// Seconds between typed characters
const TYPE_INTERVAL: f32 = 0.1;
/// Seconds the caret stays on (and off)
const CARET_PERIOD: f32 = 0.5;

const HERO_LINKS: &[(&str, &str)] = &[
    ("GitHub", "https://github.com/Rai220"),
    ("Telegram", "https://t.me/robofuture"),
    ("YouTube", "https://www.youtube.com/@Rai220"),
    ("Blog", "https://habr.com/ru/users/Rai220/"),
];

/// Typed headline with a blinking caret
#[derive(Component)]
pub struct HeroTitle {
    typewriter: Typewriter,
    caret: Blink,
}

/// Container the stat counters are added to once stats arrive
#[derive(Component)]
pub struct StatsRow;

/// Shown in the stats row while the feed is still loading
#[derive(Component)]
pub struct StatsPlaceholder;

/// One animated number in the stats row
#[derive(Component)]
pub struct StatCounter {
    count: CountUp,
}

/// System: Build the page (title, links, empty stats row, empty skills panel)
pub fn spawn_hero(mut commands: Commands, fonts: Res<PageFonts>) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            row_gap: Val::Px(28.0),
            ..default()
        })
        .with_children(|root| {
            root.spawn((
                HeroTitle {
                    typewriter: Typewriter::new(HERO_TITLE, TYPE_INTERVAL),
                    caret: Blink::new(CARET_PERIOD),
                },
                Text::new(""),
                fonts.bold(48.0),
                TextColor(PRIMARY),
            ));

            root.spawn(Node {
                column_gap: Val::Px(16.0),
                ..default()
            })
            .with_children(|links| {
                for (label, url) in HERO_LINKS {
                    links
                        .spawn((
                            Button,
                            LinkTarget {
                                url: url.to_string(),
                            },
                            PointerCursor,
                            Node {
                                padding: UiRect::axes(Val::Px(20.0), Val::Px(10.0)),
                                border: UiRect::all(Val::Px(1.0)),
                                ..default()
                            },
                            BorderColor::all(faded(PRIMARY, 0.5)),
                            BackgroundColor(faded(PRIMARY, 0.05)),
                        ))
                        .with_children(|button| {
                            button.spawn((
                                Text::new(*label),
                                fonts.regular(18.0),
                                TextColor(PRIMARY),
                            ));
                        });
                }
            });

            root.spawn((
                StatsRow,
                Node {
                    column_gap: Val::Px(48.0),
                    ..default()
                },
            ))
            .with_children(|row| {
                row.spawn((
                    StatsPlaceholder,
                    Text::new("..."),
                    fonts.regular(18.0),
                    TextColor(MUTED),
                ));
            });

            spawn_skills_panel(root, &fonts);
        });
}

/// System: Advance the typewriter and caret
pub fn animate_hero_title(time: Res<Time>, mut titles: Query<(&mut HeroTitle, &mut Text)>) {
    let dt = time.delta_secs();

    for (mut title, mut text) in &mut titles {
        title.typewriter.tick(dt);
        title.caret.tick(dt);

        let caret = if title.caret.is_on() { "_" } else { " " };
        text.0 = format!("{}{}", title.typewriter.visible(), caret);
    }
}

/// System: Replace the placeholder with counters once the stats feed is ready
pub fn populate_stats_row(
    mut commands: Commands,
    feed: Res<StatsFeed>,
    fonts: Res<PageFonts>,
    rows: Query<Entity, With<StatsRow>>,
    placeholders: Query<Entity, With<StatsPlaceholder>>,
    counters: Query<(), With<StatCounter>>,
) {
    if feed.0.is_loading() || !counters.is_empty() {
        return;
    }

    let Ok(row) = rows.single() else {
        return;
    };

    for placeholder in &placeholders {
        commands.entity(placeholder).despawn();
    }

    commands.entity(row).with_children(|row| {
        for stat in feed.0.items() {
            row.spawn(Node {
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                ..default()
            })
            .with_children(|cell| {
                cell.spawn((
                    StatCounter {
                        count: CountUp::new(stat.value, CountUp::DEFAULT_DURATION),
                    },
                    Text::new("0"),
                    fonts.bold(40.0),
                    TextColor(SECONDARY),
                ));
                cell.spawn((
                    Text::new(stat.label.clone()),
                    fonts.regular(14.0),
                    TextColor(MUTED),
                ));
            });
        }
    });

    info!("Stats row populated with {} counters", feed.0.items().len());
}

/// System: Count every stat up towards its value
pub fn animate_stat_counters(
    time: Res<Time>,
    mut counters: Query<(&mut StatCounter, &mut Text)>,
) {
    let dt = time.delta_secs();

    for (mut counter, mut text) in &mut counters {
        if counter.count.is_finished() {
            continue;
        }
        counter.count.start();
        counter.count.tick(dt);
        text.0 = group_thousands(counter.count.value());
    }
}

/// System: Log which link was pressed
pub fn log_link_presses(links: Query<(&Interaction, &LinkTarget), Changed<Interaction>>) {
    for (interaction, link) in &links {
        if *interaction == Interaction::Pressed {
            info!("🔗 Link pressed: {}", link.url);
        }
    }
}
