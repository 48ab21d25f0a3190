use crate::text::{FONT_SIZE, spawn_segments};
use bevy::prelude::*;
use nv_shared::StyledText;

const MAX_CHAT_LINES: usize = 10;

/// A line for the local chat window. Never sent to the server.
#[derive(Message, Debug, Clone)]
pub struct ChatMessage(pub StyledText);

#[derive(Component)]
struct ChatLog;

pub(super) fn plugin(app: &mut App) {
    app.add_message::<ChatMessage>();
    app.add_systems(Startup, spawn_chat_log);
    app.add_systems(Update, show_chat_messages);
}

fn spawn_chat_log(mut commands: Commands) {
    commands.spawn((
        Name::new("Chat"),
        ChatLog,
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(2.0),
            bottom: Val::Px(24.0),
            flex_direction: FlexDirection::Column,
            ..default()
        },
    ));
}

fn show_chat_messages(
    mut commands: Commands,
    mut messages: MessageReader<ChatMessage>,
    log: Single<(Entity, Option<&Children>), With<ChatLog>>,
) {
    let incoming: Vec<&ChatMessage> = messages.read().collect();
    if incoming.is_empty() {
        return;
    }

    let (log_entity, children) = *log;
    let existing = children.map(|c| c.len()).unwrap_or(0);

    // Drop the oldest lines so at most MAX_CHAT_LINES remain once the new ones land.
    let excess = (existing + incoming.len()).saturating_sub(MAX_CHAT_LINES);
    if let Some(children) = children {
        for &old in children.iter().take(excess) {
            commands.entity(old).despawn();
        }
    }

    let skip = incoming.len().saturating_sub(MAX_CHAT_LINES);
    commands.entity(log_entity).with_children(|parent| {
        for ChatMessage(text) in incoming.into_iter().skip(skip) {
            info!("[chat] {}", text.plain());
            parent
                .spawn((
                    Text::default(),
                    TextFont {
                        font_size: FONT_SIZE,
                        ..default()
                    },
                ))
                .with_children(|line| spawn_segments(line, text));
        }
    });
}
