use crate::constants::FALL_DISTANCE_THRESHOLD;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FallSuppression {
    pub fall_distance: f32,
    /// Tell the server the player is on the ground this tick. Sent once, never retried.
    pub force_grounded: bool,
}

/// Reset accumulated fall distance once it reaches [`FALL_DISTANCE_THRESHOLD`].
#[inline]
pub fn suppress_fall(fall_distance: f32) -> FallSuppression {
    if fall_distance >= FALL_DISTANCE_THRESHOLD {
        log::debug!("resetting fall distance {fall_distance:.2}");
        return FallSuppression {
            fall_distance: 0.0,
            force_grounded: true,
        };
    }

    FallSuppression {
        fall_distance,
        force_grounded: false,
    }
}
