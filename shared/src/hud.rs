//! Overlay and chat text.

use crate::{
    constants::{CHAT_PREFIX, MOD_LABEL, TPS_DEGRADED, TPS_GOOD, TPS_POOR},
    flight::FlightEvent,
    tick_rate::RateEstimate,
    types::BlockPos,
};
use crate::text::{Palette, StyledText};

pub fn tps_color(tps: f64) -> Palette {
    if tps >= TPS_GOOD {
        Palette::Green
    } else if tps >= TPS_DEGRADED {
        Palette::Yellow
    } else if tps >= TPS_POOR {
        Palette::Red
    } else {
        Palette::DarkRed
    }
}

pub fn tps_line(rate: RateEstimate) -> StyledText {
    let line = StyledText::new().with("TPS: ", Palette::Gray);
    match rate {
        RateEstimate::Calculating => line.with("Calculating...", Palette::Gray),
        RateEstimate::Tps(tps) => line.with(format!("{tps:.1}"), tps_color(tps)),
    }
}

pub fn position_line(position: Option<BlockPos>) -> StyledText {
    let value = match position {
        Some(pos) => format!(" {}, {}, {}", pos.x, pos.y, pos.z),
        None => " Unknown".to_string(),
    };
    StyledText::new()
        .with("Pos:", Palette::Gray)
        .with(value, Palette::White)
}

/// The three overlay lines, top to bottom: label, TPS, position.
pub fn hud_lines(rate: RateEstimate, position: Option<BlockPos>) -> [StyledText; 3] {
    [
        StyledText::new().with(MOD_LABEL, Palette::Yellow),
        tps_line(rate),
        position_line(position),
    ]
}

/// Chat notice for an assisted-flight transition.
pub fn flight_notice(event: FlightEvent) -> StyledText {
    let (word, color) = match event {
        FlightEvent::Enabled => ("enabled", Palette::Green),
        FlightEvent::Disabled => ("disabled", Palette::Red),
    };
    StyledText::new()
        .with(CHAT_PREFIX, Palette::Yellow)
        .with(" Elytraflight is now ", Palette::Gray)
        .with(word, color)
        .with(".", Palette::Gray)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tps_tiers_switch_at_thresholds() {
        assert_eq!(tps_color(20.0), Palette::Green);
        assert_eq!(tps_color(18.0), Palette::Green);
        assert_eq!(tps_color(17.99), Palette::Yellow);
        assert_eq!(tps_color(14.0), Palette::Yellow);
        assert_eq!(tps_color(13.9), Palette::Red);
        assert_eq!(tps_color(7.0), Palette::Red);
        assert_eq!(tps_color(6.99), Palette::DarkRed);
        assert_eq!(tps_color(0.0), Palette::DarkRed);
    }

    #[test]
    fn tps_value_has_one_decimal_and_tier_color() {
        let line = tps_line(RateEstimate::Tps(15.26));
        assert_eq!(line.plain(), "TPS: 15.3");
        assert_eq!(line.segments[1].color, Palette::Yellow);

        let line = tps_line(RateEstimate::Calculating);
        assert_eq!(line.plain(), "TPS: Calculating...");
        assert_eq!(line.segments[1].color, Palette::Gray);
    }

    #[test]
    fn hud_has_label_tps_and_position() {
        let lines = hud_lines(
            RateEstimate::Tps(20.0),
            Some(BlockPos { x: -3, y: 64, z: 120 }),
        );
        assert_eq!(lines[0].plain(), "NV.Utils");
        assert_eq!(lines[0].segments[0].color, Palette::Yellow);
        assert_eq!(lines[1].plain(), "TPS: 20.0");
        assert_eq!(lines[2].plain(), "Pos: -3, 64, 120");
    }

    #[test]
    fn missing_player_reads_unknown() {
        let lines = hud_lines(RateEstimate::Calculating, None);
        assert_eq!(lines[2].plain(), "Pos: Unknown");
    }

    #[test]
    fn flight_notices() {
        let on = flight_notice(FlightEvent::Enabled);
        assert_eq!(on.plain(), "[NV] Elytraflight is now enabled.");
        assert_eq!(on.segments[2].color, Palette::Green);

        let off = flight_notice(FlightEvent::Disabled);
        assert_eq!(off.plain(), "[NV] Elytraflight is now disabled.");
        assert_eq!(off.segments[2].color, Palette::Red);
    }
}
