//! Stand-in for the host game's local player.
//!
//! Just enough simulation for the mod hooks to act on: velocity integration in blocks per tick,
//! constant gravity, a flat floor at y = 0 and a glide toggle while airborne. Everything runs in
//! `FixedUpdate`, one step per host tick.

use crate::input::{InputAction, move_input};
use bevy::prelude::*;
use leafwing_input_manager::prelude::ActionState;
use nalgebra as na;
use nv_shared::{ClientPlayer, MoveInput, MoveKey, Velocity, horizontal_velocity};

const SPAWN_HEIGHT: f64 = 24.0;

const GRAVITY: f64 = 0.08;
const GLIDE_GRAVITY: f64 = 0.01;
const VERTICAL_DRAG: f64 = 0.98;
const WALK_SPEED: f64 = 0.22;
const JUMP_VELOCITY: f64 = 0.42;
const TURN_DEGREES_PER_TICK: f32 = 6.0;
/// Landing with more accumulated fall than this would hurt.
const SAFE_FALL_DISTANCE: f32 = 3.0;

const RENDER_DECAY_RATE: f32 = 24.0;
/// Capsule origin sits at its center; the simulated position is the feet.
const BODY_HALF_HEIGHT: f32 = 0.9;

#[derive(Component)]
pub struct LocalPlayer;

/// Host-side player state, in host units (blocks, blocks per tick, degrees).
#[derive(Component, Clone, Debug)]
pub struct PlayerState {
    pub position: na::Vector3<f64>,
    pub velocity: Velocity,
    pub yaw_degrees: f32,
    pub input: MoveInput,
    pub on_ground: bool,
    pub fall_distance: f32,
    pub fall_flying: bool,
    pub velocity_modified: bool,
}

impl PlayerState {
    fn spawn_at(position: na::Vector3<f64>) -> Self {
        Self {
            position,
            velocity: Velocity::zeros(),
            yaw_degrees: 0.0,
            input: MoveInput::default(),
            on_ground: false,
            fall_distance: 0.0,
            fall_flying: false,
            velocity_modified: false,
        }
    }

    /// Render-space translation of the capsule center.
    pub fn translation(&self) -> Vec3 {
        Vec3::new(
            self.position.x as f32,
            self.position.y as f32 + BODY_HALF_HEIGHT,
            self.position.z as f32,
        )
    }

    /// Host yaw turns toward -X as it grows; Bevy's Y rotation turns toward +X.
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(-self.yaw_degrees.to_radians())
    }

    fn step(&mut self) {
        if self.fall_flying {
            self.velocity.y -= GLIDE_GRAVITY;
        } else {
            let walk = horizontal_velocity(self.input, self.yaw_degrees, WALK_SPEED);
            self.velocity.x = walk.x;
            self.velocity.z = walk.z;

            if self.on_ground && self.input.is_pressed(MoveKey::Jump) {
                self.velocity.y = JUMP_VELOCITY;
                self.velocity_modified = true;
            } else if !self.on_ground {
                self.velocity.y -= GRAVITY;
            }
        }
        self.velocity.y *= VERTICAL_DRAG;

        let previous_y = self.position.y;
        self.position += self.velocity;

        if self.position.y <= 0.0 {
            self.land();
        } else {
            self.on_ground = false;
            if self.position.y < previous_y {
                self.fall_distance += (previous_y - self.position.y) as f32;
            }
        }
    }

    fn land(&mut self) {
        if !self.on_ground {
            if self.fall_distance > SAFE_FALL_DISTANCE {
                warn!("Landed after falling {:.1} blocks.", self.fall_distance);
            } else {
                debug!("Landed, fall distance {:.1}.", self.fall_distance);
            }
        }

        self.position.y = 0.0;
        self.velocity.y = self.velocity.y.max(0.0);
        self.on_ground = true;
        self.fall_flying = false;
        self.fall_distance = 0.0;
    }
}

impl ClientPlayer for PlayerState {
    fn input(&self) -> MoveInput {
        self.input
    }

    fn yaw_degrees(&self) -> f32 {
        self.yaw_degrees
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

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_local_player);

    app.add_systems(FixedPreUpdate, capture_input);
    app.add_systems(FixedUpdate, simulate);

    app.add_systems(Update, (toggle_glide, sync_render_transform));
}

fn spawn_local_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let state = PlayerState::spawn_at(na::Vector3::new(0.0, SPAWN_HEIGHT, 0.0));
    info!("Spawning local player at {:?}", state.translation());

    commands.spawn((
        Name::new("Local Player"),
        LocalPlayer,
        Transform::from_translation(state.translation()).with_rotation(state.rotation()),
        Mesh3d(meshes.add(Capsule3d::new(0.3, 1.2))),
        MeshMaterial3d(materials.add(Color::srgb_u8(235, 200, 80))),
        state,
    ));
}

fn capture_input(
    actions: Res<ActionState<InputAction>>,
    mut players: Query<&mut PlayerState, With<LocalPlayer>>,
) {
    let input = move_input(&actions);
    for mut player in &mut players {
        player.input = input;
    }
}

fn simulate(
    actions: Res<ActionState<InputAction>>,
    mut players: Query<&mut PlayerState, With<LocalPlayer>>,
) {
    let turn = match (
        actions.pressed(&InputAction::TurnLeft),
        actions.pressed(&InputAction::TurnRight),
    ) {
        (true, false) => -TURN_DEGREES_PER_TICK,
        (false, true) => TURN_DEGREES_PER_TICK,
        _ => 0.0,
    };

    for mut player in &mut players {
        player.yaw_degrees += turn;
        player.step();
    }
}

fn toggle_glide(
    actions: Res<ActionState<InputAction>>,
    mut players: Query<&mut PlayerState, With<LocalPlayer>>,
) {
    if !actions.just_pressed(&InputAction::ToggleGlide) {
        return;
    }

    for mut player in &mut players {
        if player.on_ground {
            debug!("Glide needs the player airborne.");
            continue;
        }
        player.fall_flying = !player.fall_flying;
    }
}

fn sync_render_transform(
    time: Res<Time>,
    mut players: Query<(&mut Transform, &PlayerState), With<LocalPlayer>>,
) {
    let dt = time.delta_secs();
    for (mut transform, state) in &mut players {
        transform
            .translation
            .smooth_nudge(&state.translation(), RENDER_DECAY_RATE, dt);
        transform.rotation = state.rotation();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falling_accumulates_distance_until_landing() {
        let mut player = PlayerState::spawn_at(na::Vector3::new(0.0, 5.0, 0.0));

        let mut max_fall = 0.0f32;
        for _ in 0..200 {
            player.step();
            max_fall = max_fall.max(player.fall_distance);
        }

        assert!(max_fall > 4.0);
        assert!(player.on_ground);
        assert_eq!(player.position.y, 0.0);
        assert_eq!(player.fall_distance, 0.0);
    }

    #[test]
    fn landing_ends_glide() {
        let mut player = PlayerState::spawn_at(na::Vector3::new(0.0, 0.5, 0.0));
        player.fall_flying = true;
        player.velocity.y = -1.0;

        player.step();

        assert!(player.on_ground);
        assert!(!player.fall_flying);
    }

    #[test]
    fn jump_flags_velocity_as_modified() {
        let mut player = PlayerState::spawn_at(na::Vector3::zeros());
        player.on_ground = true;
        player.input = MoveInput::from_keys(&[MoveKey::Jump]);

        player.step();

        assert!(player.velocity_modified);
        assert!(player.position.y > 0.0);
        assert!(!player.on_ground);
    }
}
