//! Entry points the host client calls.
//!
//! The host owns the event loop and the player; [`NvUtils`] owns every piece of mod state. Per
//! tick the host calls [`NvUtils::on_tick_start`] as the tick begins and
//! [`NvUtils::on_tick_end`] once the player has been simulated; per rendered frame it calls
//! [`NvUtils::on_hud_render`] and draws the returned lines.

use crate::{
    fall::suppress_fall,
    flight::{FlightController, Velocity},
    hud::{flight_notice, hud_lines},
    input::MoveInput,
    text::StyledText,
    tick_rate::{RateEstimate, TickRateEstimator},
    types::{BlockPos, OutboundPacket},
};

/// View of the local player as exposed by the host.
pub trait ClientPlayer {
    fn input(&self) -> MoveInput;
    fn yaw_degrees(&self) -> f32;
    fn velocity(&self) -> Velocity;
    fn set_velocity(&mut self, velocity: Velocity);
    fn clear_velocity_modified(&mut self);
    /// The host's glide state; assisted flight follows it.
    fn is_fall_flying(&self) -> bool;
    fn fall_distance(&self) -> f32;
    fn set_fall_distance(&mut self, distance: f32);
}

/// Side effects the host should carry out after [`NvUtils::on_tick_end`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickOutput {
    pub chat: Vec<StyledText>,
    pub packets: Vec<OutboundPacket>,
}

impl TickOutput {
    pub fn is_empty(&self) -> bool {
        self.chat.is_empty() && self.packets.is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct NvUtils {
    tick_rate: TickRateEstimator,
    flight: FlightController,
}

impl NvUtils {
    pub fn new(start_nanos: u64) -> Self {
        Self {
            tick_rate: TickRateEstimator::new(start_nanos),
            flight: FlightController::new(),
        }
    }

    pub fn tick_rate(&self) -> &TickRateEstimator {
        &self.tick_rate
    }

    pub fn flight(&self) -> &FlightController {
        &self.flight
    }

    pub fn estimate_rate(&self) -> RateEstimate {
        self.tick_rate.estimate_rate()
    }

    pub fn on_tick_start(&mut self, now_nanos: u64) {
        self.tick_rate.record_tick(now_nanos);
    }

    /// Runs assisted flight then fall suppression. Does nothing without a player.
    pub fn on_tick_end<P: ClientPlayer>(
        &mut self,
        player: Option<&mut P>,
        now_millis: u64,
    ) -> TickOutput {
        let mut output = TickOutput::default();
        let Some(player) = player else {
            return output;
        };

        let flight = self.flight.on_tick(
            player.input(),
            player.yaw_degrees(),
            player.velocity(),
            player.is_fall_flying(),
            now_millis,
        );
        if let Some(event) = flight.event {
            output.chat.push(flight_notice(event));
        }
        if flight.clear_velocity_modified {
            player.set_velocity(flight.velocity);
            player.clear_velocity_modified();
        }

        let fall = suppress_fall(player.fall_distance());
        if fall.force_grounded {
            player.set_fall_distance(fall.fall_distance);
            output
                .packets
                .push(OutboundPacket::OnGroundOnly { on_ground: true });
        }

        output
    }

    pub fn on_hud_render(&self, position: Option<BlockPos>) -> [StyledText; 3] {
        hud_lines(self.estimate_rate(), position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MoveKey;

    struct MockPlayer {
        input: MoveInput,
        yaw: f32,
        velocity: Velocity,
        velocity_modified: bool,
        fall_flying: bool,
        fall_distance: f32,
    }

    fn idle_player() -> MockPlayer {
        MockPlayer {
            input: MoveInput::default(),
            yaw: 0.0,
            velocity: Velocity::zeros(),
            velocity_modified: false,
            fall_flying: false,
            fall_distance: 0.0,
        }
    }

    impl ClientPlayer for MockPlayer {
        fn input(&self) -> MoveInput {
            self.input
        }
        fn yaw_degrees(&self) -> f32 {
            self.yaw
        }
        fn velocity(&self) -> Velocity {
            self.velocity
        }
        fn set_velocity(&mut self, velocity: Velocity) {
            self.velocity = velocity;
        }
        fn clear_velocity_modified(&mut self) {
            self.velocity_modified = false;
        }
        fn is_fall_flying(&self) -> bool {
            self.fall_flying
        }
        fn fall_distance(&self) -> f32 {
            self.fall_distance
        }
        fn set_fall_distance(&mut self, distance: f32) {
            self.fall_distance = distance;
        }
    }

    #[test]
    fn no_player_skips_the_tick() {
        let mut nv = NvUtils::new(0);
        let output = nv.on_tick_end::<MockPlayer>(None, 1_000);
        assert!(output.is_empty());
        assert!(!nv.flight().is_active());
    }

    #[test]
    fn gliding_player_gets_override_notice_and_ground_packet() {
        let mut nv = NvUtils::new(0);
        let mut player = MockPlayer {
            input: MoveInput::from_keys(&[MoveKey::Forward, MoveKey::Jump]),
            velocity: Velocity::new(0.4, -0.3, 0.9),
            velocity_modified: true,
            fall_flying: true,
            fall_distance: 4.0,
            ..idle_player()
        };

        let output = nv.on_tick_end(Some(&mut player), 1_000);

        assert_eq!(output.chat, vec![flight_notice(crate::flight::FlightEvent::Enabled)]);
        assert_eq!(
            output.packets,
            vec![OutboundPacket::OnGroundOnly { on_ground: true }]
        );
        assert!(player.velocity.x.abs() < 1.0e-9);
        assert!((player.velocity.y - (-0.3 + 0.05)).abs() < 1.0e-9);
        assert!((player.velocity.z - 1.4).abs() < 1.0e-9);
        assert!(!player.velocity_modified);
        assert_eq!(player.fall_distance, 0.0);

        // Steady state: no notice, and fall distance below threshold sends nothing.
        player.fall_distance = 1.0;
        let output = nv.on_tick_end(Some(&mut player), 1_050);
        assert!(output.is_empty());
        assert_eq!(player.fall_distance, 1.0);
    }

    #[test]
    fn walking_player_keeps_host_velocity() {
        let mut nv = NvUtils::new(0);
        let mut player = MockPlayer {
            input: MoveInput::from_keys(&[MoveKey::Left]),
            velocity: Velocity::new(0.1, 0.0, 0.2),
            velocity_modified: true,
            ..idle_player()
        };

        let output = nv.on_tick_end(Some(&mut player), 0);
        assert!(output.is_empty());
        assert_eq!(player.velocity, Velocity::new(0.1, 0.0, 0.2));
        assert!(player.velocity_modified);
    }

    #[test]
    fn landing_disables_assist_once() {
        let mut nv = NvUtils::new(0);
        let mut player = MockPlayer {
            fall_flying: true,
            ..idle_player()
        };
        nv.on_tick_end(Some(&mut player), 0);

        player.fall_flying = false;
        let output = nv.on_tick_end(Some(&mut player), 50);
        assert_eq!(
            output.chat,
            vec![flight_notice(crate::flight::FlightEvent::Disabled)]
        );
        assert!(nv.on_tick_end(Some(&mut player), 100).is_empty());
    }

    #[test]
    fn hud_reflects_recorded_ticks() {
        let mut nv = NvUtils::new(0);
        assert_eq!(nv.on_hud_render(None)[1].plain(), "TPS: Calculating...");

        for i in 1..=10u64 {
            nv.on_tick_start(i * 100_000_000);
        }
        let lines = nv.on_hud_render(Some(BlockPos::new(1, 2, 3)));
        assert_eq!(lines[1].plain(), "TPS: 10.0");
        assert_eq!(lines[2].plain(), "Pos: 1, 2, 3");
    }
}
