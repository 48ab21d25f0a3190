//! Hooks the mod into the client's schedules.
//!
//! - `FixedFirst`: tick start, feeds the TPS estimator.
//! - `FixedPostUpdate`: tick end, after the player has been simulated. Assisted flight and fall
//!   suppression run here and their side effects go out as chat/packet messages.
//! - `Update`: overlay refresh.

mod hud;
mod tick;

use bevy::diagnostic::{Diagnostic, DiagnosticPath, RegisterDiagnostic};
use bevy::platform::time::Instant;
use bevy::prelude::*;
use nv_shared::NvUtils;

pub const TPS_DIAGNOSTIC: DiagnosticPath = DiagnosticPath::const_new("nv/estimated_tps");

#[derive(Resource)]
pub struct NvState {
    pub utils: NvUtils,
    origin: Instant,
}

impl NvState {
    fn new() -> Self {
        Self {
            utils: NvUtils::new(0),
            origin: Instant::now(),
        }
    }

    /// Monotonic nanoseconds since the mod was loaded.
    fn now_nanos(&self) -> u64 {
        self.origin.elapsed().as_nanos() as u64
    }

    fn now_millis(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

pub(super) fn plugin(app: &mut App) {
    app.insert_resource(NvState::new());
    app.register_diagnostic(Diagnostic::new(TPS_DIAGNOSTIC).with_suffix(" tps"));

    app.add_plugins(hud::plugin);

    app.add_systems(FixedFirst, tick::on_tick_start);
    app.add_systems(FixedPostUpdate, tick::on_tick_end);
}
