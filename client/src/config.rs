use bevy::prelude::*;

/// Fixed-step rate the client simulates at when nothing else is configured.
pub const DEFAULT_TICK_HZ: f64 = 20.0;
const MAX_TICK_HZ: f64 = 1_000.0;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ClientConfig {
    pub tick_hz: f64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            tick_hz: DEFAULT_TICK_HZ,
        }
    }
}

pub(super) fn plugin(app: &mut App) {
    let config = read_config(std::env::args().skip(1), std::env::var("NV_TICK_HZ").ok());
    info!("Simulating at {} ticks per second.", config.tick_hz);

    app.insert_resource(Time::<Fixed>::from_hz(config.tick_hz));
    app.insert_resource(config);
}

/// Builds the config from CLI args, then env, then defaults.
///
/// Supported:
///   --tick-hz <HZ>
///   --tick-hz=<HZ>
///   NV_TICK_HZ environment variable
fn read_config(args: impl Iterator<Item = String>, env_tick_hz: Option<String>) -> ClientConfig {
    let raw = tick_hz_from_args(args).or(env_tick_hz);

    let Some(raw) = raw else {
        return ClientConfig::default();
    };

    match parse_tick_hz(&raw) {
        Ok(tick_hz) => ClientConfig { tick_hz },
        Err(err) => {
            warn!("Ignoring tick rate {raw:?}: {err}. Using {DEFAULT_TICK_HZ}.");
            ClientConfig::default()
        }
    }
}

fn tick_hz_from_args(mut args: impl Iterator<Item = String>) -> Option<String> {
    while let Some(arg) = args.next() {
        if arg == "--tick-hz" {
            return args.next();
        } else if let Some(val) = arg.strip_prefix("--tick-hz=") {
            return Some(val.to_string());
        }
    }
    None
}

fn parse_tick_hz(raw: &str) -> Result<f64, String> {
    let hz: f64 = raw
        .trim()
        .parse()
        .map_err(|e| format!("not a number ({e})"))?;

    if !hz.is_finite() || hz <= 0.0 {
        return Err("must be a positive number".to_string());
    }
    if hz > MAX_TICK_HZ {
        return Err(format!("must be at most {MAX_TICK_HZ}"));
    }
    Ok(hz)
}
