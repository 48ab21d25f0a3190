use bevy::prelude::*;

const GROUND_SIZE: f32 = 400.0;
const PILLAR_SPACING: f32 = 24.0;
const PILLARS_PER_SIDE: i32 = 5;

pub(super) fn plugin(app: &mut App) {
    app.insert_resource(ClearColor(Color::srgb(0.45, 0.62, 0.85)));
    app.add_systems(Startup, setup);
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    debug!("World setup");

    commands.spawn((
        Name::new("Ground"),
        Transform::from_xyz(0., 0., 0.),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE).build())),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::linear_rgb(0.2, 0.3, 0.25),
            perceptual_roughness: 1.0,
            metallic: 0.0,
            ..default()
        })),
    ));

    // Pillars give a sense of speed and heading while gliding.
    let pillar_mesh = meshes.add(Cuboid::new(1.0, 6.0, 1.0));
    let pillar_material = materials.add(Color::srgb_u8(124, 144, 255));
    for gx in -PILLARS_PER_SIDE..=PILLARS_PER_SIDE {
        for gz in -PILLARS_PER_SIDE..=PILLARS_PER_SIDE {
            if gx == 0 && gz == 0 {
                continue;
            }
            commands.spawn((
                Mesh3d(pillar_mesh.clone()),
                MeshMaterial3d(pillar_material.clone()),
                Transform::from_xyz(gx as f32 * PILLAR_SPACING, 3.0, gz as f32 * PILLAR_SPACING),
            ));
        }
    }

    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(30.0, 60.0, 20.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
