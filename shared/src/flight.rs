//! Assisted glide movement.
//!
//! While the host reports the player as fall-flying, horizontal velocity is replaced every tick
//! with a fixed-speed vector in the held direction (no momentum), and jump/sneak nudge vertical
//! velocity in small steps gated by a cooldown.

use std::time::Duration;

use nalgebra as na;

use crate::{
    constants::{ALTITUDE_CHANGE_COOLDOWN, ALTITUDE_STEP, MAX_SPEED_BLOCKS_PER_TICK},
    input::{MoveInput, MoveKey},
};

pub type Velocity = na::Vector3<f64>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlightState {
    #[default]
    Inactive,
    Active,
}

/// Emitted once per state transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlightEvent {
    Enabled,
    Disabled,
}

/// Rate limit for altitude adjustments.
#[derive(Clone, Copy, Debug)]
pub struct AltitudeCooldown {
    last_change_millis: Option<u64>,
    interval: Duration,
}

impl Default for AltitudeCooldown {
    fn default() -> Self {
        Self::new(ALTITUDE_CHANGE_COOLDOWN)
    }
}

impl AltitudeCooldown {
    pub fn new(interval: Duration) -> Self {
        Self {
            last_change_millis: None,
            interval,
        }
    }

    /// `true` if no adjustment happened yet, or the last one is at least `interval` old.
    pub fn is_ready(&self, now_millis: u64) -> bool {
        match self.last_change_millis {
            None => true,
            Some(last) => now_millis.saturating_sub(last) >= self.interval.as_millis() as u64,
        }
    }

    pub fn stamp(&mut self, now_millis: u64) {
        self.last_change_millis = Some(now_millis);
    }

    pub fn last_change_millis(&self) -> Option<u64> {
        self.last_change_millis
    }
}

/// Output of one [`FlightController::on_tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlightTick {
    /// Velocity the host should apply. Equal to the input velocity while inactive.
    pub velocity: Velocity,
    pub event: Option<FlightEvent>,
    /// The host must drop its "velocity externally modified" flag so the override sticks.
    pub clear_velocity_modified: bool,
}

#[derive(Clone, Debug, Default)]
pub struct FlightController {
    state: FlightState,
    cooldown: AltitudeCooldown,
}

impl FlightController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FlightState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == FlightState::Active
    }

    pub fn cooldown(&self) -> &AltitudeCooldown {
        &self.cooldown
    }

    pub fn on_tick(
        &mut self,
        input: MoveInput,
        yaw_degrees: f32,
        current_velocity: Velocity,
        is_assist_eligible: bool,
        now_millis: u64,
    ) -> FlightTick {
        let event = match (self.state, is_assist_eligible) {
            (FlightState::Inactive, true) => {
                self.state = FlightState::Active;
                log::debug!("assisted flight enabled at {now_millis}ms");
                Some(FlightEvent::Enabled)
            }
            (FlightState::Active, false) => {
                self.state = FlightState::Inactive;
                log::debug!("assisted flight disabled at {now_millis}ms");
                Some(FlightEvent::Disabled)
            }
            _ => None,
        };

        if self.state == FlightState::Inactive {
            return FlightTick {
                velocity: current_velocity,
                event,
                clear_velocity_modified: false,
            };
        }

        let mut velocity = current_velocity;
        velocity.y += self.altitude_adjustment(input, now_millis);

        let horizontal = horizontal_velocity(input, yaw_degrees, MAX_SPEED_BLOCKS_PER_TICK);
        velocity.x = horizontal.x;
        velocity.z = horizontal.z;

        FlightTick {
            velocity,
            event,
            clear_velocity_modified: true,
        }
    }

    /// At most one step per tick; jump beats sneak.
    fn altitude_adjustment(&mut self, input: MoveInput, now_millis: u64) -> f64 {
        if !self.cooldown.is_ready(now_millis) {
            return 0.0;
        }

        let step = if input.is_pressed(MoveKey::Jump) {
            ALTITUDE_STEP
        } else if input.is_pressed(MoveKey::Sneak) {
            -ALTITUDE_STEP
        } else {
            return 0.0;
        };

        self.cooldown.stamp(now_millis);
        step
    }
}

/// Planar (XZ) velocity of magnitude `speed` in the held direction, or zero with no direction held.
///
/// Yaw follows the host convention: 0° faces +Z and positive yaw turns toward -X.
pub fn horizontal_velocity(input: MoveInput, yaw_degrees: f32, speed: f64) -> Velocity {
    if !input.is_directional() {
        return Velocity::zeros();
    }

    let yaw = (yaw_degrees as f64).to_radians();
    let (sin, cos) = yaw.sin_cos();
    let forward = input.forward_axis();
    let strafe = input.strafe_axis();

    let direction = Velocity::new(
        forward * -sin + strafe * cos,
        0.0,
        forward * cos + strafe * -sin,
    );

    // Non-zero: (strafe, forward) has at least one unit component and the map is a rotation.
    direction.normalize() * speed
}
