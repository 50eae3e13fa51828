use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;

use crate::simulation::engine;
use crate::simulation::scenario::Scenario;

#[derive(Component)]
struct BodyIndex(pub usize);

const SCALE: f32 = 40.0;

/// Run the Bevy 2D viewer: one physics tick per frame, then sync the
/// circle transforms. The viewer is the external scheduler — the engine
/// itself never loops.
pub fn run_2d(scenario: Scenario) {
    println!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.system.bodies.len());

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_bodies_system)
        .add_systems(
            Update,
            (physics_step_system, sync_transforms_system, grid_overlay_system).chain(),
        )
        .run();
}

/// Simulation position -> screen translation, arena centered on the origin.
fn to_screen(scenario: &Scenario, x: f64, y: f64) -> (f32, f32) {
    let sx = (x - scenario.grid.width() / 2.0) as f32 * SCALE;
    let sy = (y - scenario.grid.height() / 2.0) as f32 * SCALE;
    (sx, sy)
}

fn setup_bodies_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    for (i, body) in scenario.system.bodies.iter().enumerate() {
        let radius_screen = body.radius as f32 * SCALE;
        let (x, y) = to_screen(&scenario, body.x.x, body.x.y);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius_screen))),
                material: materials.add(ColorMaterial::from(Color::WHITE)),
                transform: Transform::from_xyz(x, y, 0.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        system,
        grid,
        parameters,
        ..
    } = &mut *scenario;

    engine::step(system, grid, parameters);
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.system.bodies.get(*i) {
            let (x, y) = to_screen(&scenario, b.x.x, b.x.y);
            transform.translation.x = x;
            transform.translation.y = y;
        }
    }
}

/// Debug overlay: outline every grid cell when the scenario asks for it.
fn grid_overlay_system(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    if !scenario.grid_overlay {
        return;
    }

    for row in 0..scenario.grid.rows() {
        for col in 0..scenario.grid.cols() {
            let (min, max) = scenario.grid.cell_bounds(row, col);
            let center = (min + max) / 2.0;
            let (cx, cy) = to_screen(&scenario, center.x, center.y);
            let size = Vec2::new(
                (max.x - min.x) as f32 * SCALE,
                (max.y - min.y) as f32 * SCALE,
            );
            gizmos.rect_2d(Vec2::new(cx, cy), 0.0, size, Color::DARK_GRAY);
        }
    }
}
