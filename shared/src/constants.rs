use std::time::Duration;

/// Number of inter-tick durations kept for the rolling TPS average.
pub const TICK_SAMPLE_CAPACITY: usize = 100;

/// Highest tick rate the server protocol can run at.
///
/// Any raw estimate above this is a symptom of too few samples (one abnormally short interval),
/// not a real rate, so estimates are clamped here.
pub const MAX_TPS: f64 = 20.0;

pub const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

/// Horizontal speed while assisted flight is active, in blocks per tick.
pub const MAX_SPEED_BLOCKS_PER_TICK: f64 = 1.4;

/// Vertical velocity added (jump) or removed (sneak) per altitude adjustment.
pub const ALTITUDE_STEP: f64 = 0.05;

/// Minimum spacing between two altitude adjustments.
pub const ALTITUDE_CHANGE_COOLDOWN: Duration = Duration::from_millis(100);

/// Fall distance (blocks) at which client-side fall state is reset.
pub const FALL_DISTANCE_THRESHOLD: f32 = 2.0;

/// TPS colour tier lower bounds, highest first.
pub const TPS_GOOD: f64 = 18.0;
pub const TPS_DEGRADED: f64 = 14.0;
pub const TPS_POOR: f64 = 7.0;

/// Top-left corner of the overlay, in logical pixels.
pub const HUD_ORIGIN: (f32, f32) = (2.0, 2.0);

/// Vertical distance between overlay lines, in logical pixels.
pub const HUD_LINE_HEIGHT: f32 = 10.0;

pub const MOD_LABEL: &str = "NV.Utils";
pub const CHAT_PREFIX: &str = "[NV]";
