use super::{NvState, TPS_DIAGNOSTIC};
use crate::{
    chat::ChatMessage,
    network::SendPacket,
    player::{LocalPlayer, PlayerState},
};
use bevy::diagnostic::Diagnostics;
use bevy::prelude::*;

pub(super) fn on_tick_start(mut nv: ResMut<NvState>, mut diagnostics: Diagnostics) {
    let now = nv.now_nanos();
    nv.utils.on_tick_start(now);

    if let Some(tps) = nv.utils.estimate_rate().tps() {
        diagnostics.add_measurement(&TPS_DIAGNOSTIC, || tps);
    }
}

pub(super) fn on_tick_end(
    mut nv: ResMut<NvState>,
    mut players: Query<&mut PlayerState, With<LocalPlayer>>,
    mut chat: MessageWriter<ChatMessage>,
    mut packets: MessageWriter<SendPacket>,
) {
    let now = nv.now_millis();
    let mut player = players.single_mut().ok();

    let output = nv.utils.on_tick_end(player.as_deref_mut(), now);

    for line in output.chat {
        chat.write(ChatMessage(line));
    }
    for packet in output.packets {
        packets.write(SendPacket(packet));
    }
}
