use bevy::prelude::*;
use leafwing_input_manager::prelude::*;
use nv_shared::{MoveInput, MoveKey};

#[derive(Reflect, Actionlike, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputAction {
    Forward,
    Back,
    Left,
    Right,
    Jump,
    Sneak,
    TurnLeft,
    TurnRight,
    ToggleGlide,
}

const MOVE_BINDINGS: [(InputAction, MoveKey); 6] = [
    (InputAction::Forward, MoveKey::Forward),
    (InputAction::Back, MoveKey::Back),
    (InputAction::Left, MoveKey::Left),
    (InputAction::Right, MoveKey::Right),
    (InputAction::Jump, MoveKey::Jump),
    (InputAction::Sneak, MoveKey::Sneak),
];

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(InputManagerPlugin::<InputAction>::default());

    app.register_type::<InputAction>();

    let input_map = InputMap::new([
        (InputAction::Forward, KeyCode::KeyW),
        (InputAction::Back, KeyCode::KeyS),
        (InputAction::Left, KeyCode::KeyA),
        (InputAction::Right, KeyCode::KeyD),
        (InputAction::Jump, KeyCode::Space),
        (InputAction::Sneak, KeyCode::ShiftLeft),
        (InputAction::TurnLeft, KeyCode::KeyQ),
        (InputAction::TurnRight, KeyCode::KeyE),
        (InputAction::ToggleGlide, KeyCode::KeyG),
    ]);
    app.insert_resource(input_map);
    app.insert_resource(ActionState::<InputAction>::default());
}

/// Snapshot of the movement keys held right now.
pub fn move_input(actions: &ActionState<InputAction>) -> MoveInput {
    let mut input = MoveInput::default();
    for (action, key) in MOVE_BINDINGS {
        input.set(key, actions.pressed(&action));
    }
    input
}
