//! Outbound packet sink.
//!
//! There is no server connection in this client, so packets end here: each one is counted and
//! logged where the host would hand it to its connection.

use bevy::prelude::*;
use nv_shared::OutboundPacket;

#[derive(Message, Debug, Clone, Copy)]
pub struct SendPacket(pub OutboundPacket);

#[derive(Resource, Debug, Default)]
pub struct PacketStats {
    pub on_ground_only: u64,
}

pub(super) fn plugin(app: &mut App) {
    app.add_message::<SendPacket>();
    app.init_resource::<PacketStats>();
    app.add_systems(Update, flush_outbound);
}

fn flush_outbound(mut messages: MessageReader<SendPacket>, mut stats: ResMut<PacketStats>) {
    for SendPacket(packet) in messages.read() {
        match packet {
            OutboundPacket::OnGroundOnly { on_ground } => {
                stats.on_ground_only += 1;
                debug!(
                    "-> OnGroundOnly {{ on_ground: {on_ground} }} (#{})",
                    stats.on_ground_only
                );
            }
        }
    }
}
