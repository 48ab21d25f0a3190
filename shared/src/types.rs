use nalgebra as na;

/// Integer block coordinates containing a world position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Floors each axis, so `-0.5` lands in block `-1`.
    pub fn containing(position: na::Vector3<f64>) -> Self {
        Self {
            x: position.x.floor() as i32,
            y: position.y.floor() as i32,
            z: position.z.floor() as i32,
        }
    }
}

/// Client-to-server state overrides the mod may send.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutboundPacket {
    OnGroundOnly { on_ground: bool },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containing_floors_negative_coordinates() {
        let pos = BlockPos::containing(na::Vector3::new(-0.5, 64.99, 3.0));
        assert_eq!(pos, BlockPos::new(-1, 64, 3));
    }
}
