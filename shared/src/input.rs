//! Movement input snapshot handed to the mod by the host each tick.

use crate::bitmask_flags::FlagSet;
use crate::define_flag_bits;

define_flag_bits!(MoveKey, u8, {
    Forward,
    Back,
    Left,
    Right,
    Jump,
    Sneak,
});

const DIRECTIONAL: [MoveKey; 4] = [MoveKey::Forward, MoveKey::Back, MoveKey::Left, MoveKey::Right];

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MoveInput(FlagSet<u8>);

impl MoveInput {
    pub fn from_keys(keys: &[MoveKey]) -> Self {
        let mut input = Self::default();
        for &key in keys {
            input.press(key);
        }
        input
    }

    pub fn press(&mut self, key: MoveKey) {
        self.0.insert(key);
    }

    pub fn set(&mut self, key: MoveKey, pressed: bool) {
        self.0.set(key, pressed);
    }

    pub fn is_pressed(&self, key: MoveKey) -> bool {
        self.0.contains(key)
    }

    /// True when any of forward/back/left/right is held.
    pub fn is_directional(&self) -> bool {
        self.0.contains_any(&DIRECTIONAL)
    }

    /// +1 forward, -1 back, 0 neither. Forward wins when both are held.
    pub fn forward_axis(&self) -> f64 {
        if self.is_pressed(MoveKey::Forward) {
            1.0
        } else if self.is_pressed(MoveKey::Back) {
            -1.0
        } else {
            0.0
        }
    }

    /// +1 left, -1 right, 0 neither. Left wins when both are held.
    pub fn strafe_axis(&self) -> f64 {
        if self.is_pressed(MoveKey::Left) {
            1.0
        } else if self.is_pressed(MoveKey::Right) {
            -1.0
        } else {
            0.0
        }
    }

    pub fn bits(&self) -> u8 {
        self.0.bits
    }
}
