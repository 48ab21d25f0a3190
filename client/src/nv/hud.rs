use super::NvState;
use crate::{
    player::{LocalPlayer, PlayerState},
    text::spawn_segments,
};
use bevy::prelude::*;
use nv_shared::{BlockPos, HUD_LINE_HEIGHT, HUD_ORIGIN, StyledText};

/// Index of the overlay line this text entity shows.
#[derive(Component)]
struct HudLine(usize);

/// What each line currently displays, so spans are only rebuilt on change.
#[derive(Resource, Default)]
struct HudCache([StyledText; 3]);

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<HudCache>();
    app.add_systems(Startup, spawn_hud);
    app.add_systems(Update, render_hud);
}

fn spawn_hud(mut commands: Commands) {
    let (left, top) = HUD_ORIGIN;
    commands
        .spawn((
            Name::new("NV HUD"),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(left),
                top: Val::Px(top),
                flex_direction: FlexDirection::Column,
                ..default()
            },
        ))
        .with_children(|parent| {
            for index in 0..3 {
                parent.spawn((
                    HudLine(index),
                    Text::default(),
                    Node {
                        height: Val::Px(HUD_LINE_HEIGHT),
                        ..default()
                    },
                ));
            }
        });
}

fn render_hud(
    mut commands: Commands,
    nv: Res<NvState>,
    mut cache: ResMut<HudCache>,
    players: Query<&PlayerState, With<LocalPlayer>>,
    lines: Query<(Entity, &HudLine)>,
) {
    let position = players
        .single()
        .ok()
        .map(|player| BlockPos::containing(player.position));
    let next = nv.utils.on_hud_render(position);

    if next == cache.0 {
        return;
    }

    for (entity, line) in &lines {
        let Some(text) = next.get(line.0) else {
            continue;
        };
        if cache.0[line.0] == *text {
            continue;
        }

        commands
            .entity(entity)
            .despawn_related::<Children>()
            .with_children(|parent| spawn_segments(parent, text));
    }

    cache.0 = next;
}
