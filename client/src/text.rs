use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;
use nv_shared::{Palette, StyledText};

pub const FONT_SIZE: f32 = 8.0;

pub fn palette_color(palette: Palette) -> Color {
    let [r, g, b] = palette.rgb();
    Color::srgb_u8(r, g, b)
}

/// Spawn one `TextSpan` per segment under a `Text` root.
pub fn spawn_segments(parent: &mut ChildSpawnerCommands, text: &StyledText) {
    for segment in &text.segments {
        parent.spawn((
            TextSpan::new(segment.text.clone()),
            TextColor(palette_color(segment.color)),
            TextFont {
                font_size: FONT_SIZE,
                ..default()
            },
        ));
    }
}
