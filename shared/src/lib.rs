pub mod bitmask_flags;
pub mod constants;
pub mod fall;
pub mod flight;
pub mod hooks;
pub mod hud;
pub mod input;
pub mod text;
pub mod tick_rate;
pub mod types;

pub use constants::{
    ALTITUDE_CHANGE_COOLDOWN, ALTITUDE_STEP, FALL_DISTANCE_THRESHOLD, HUD_LINE_HEIGHT, HUD_ORIGIN,
    MAX_SPEED_BLOCKS_PER_TICK, MAX_TPS, TICK_SAMPLE_CAPACITY,
};
pub use fall::{FallSuppression, suppress_fall};
pub use flight::{FlightController, FlightEvent, FlightState, FlightTick, Velocity, horizontal_velocity};
pub use hooks::{ClientPlayer, NvUtils, TickOutput};
pub use input::{MoveInput, MoveKey};
pub use text::{Palette, Segment, StyledText};
pub use tick_rate::{RateEstimate, TickRateEstimator};
pub use types::{BlockPos, OutboundPacket};
