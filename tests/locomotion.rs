//! Behaviour tests for the locomotion tick.
//!
//! Verifies move-then-tick integration and geometric friction decay in a
//! headless Bevy application.

use approx::assert_relative_eq;
use bevy::prelude::*;
use bodkin::{MoveCommand, MoveInbox, SimulationPlugin, Velocity, FRICTION};
use rstest::rstest;

fn spawn_app() -> (App, Entity) {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(SimulationPlugin);
    let body = app
        .world_mut()
        .spawn(Transform::from_xyz(1.0, 2.0, 3.0))
        .id();
    (app, body)
}

fn queue_move(app: &mut App, entity: Entity, dx: f32, dz: f32) {
    app.world_mut()
        .resource_mut::<MoveInbox>()
        .push(MoveCommand { entity, dx, dz });
}

fn translation(app: &App, entity: Entity) -> Vec3 {
    app.world()
        .get::<Transform>(entity)
        .expect("body should have a Transform component")
        .translation
}

fn velocity(app: &App, entity: Entity) -> Velocity {
    *app.world()
        .get::<Velocity>(entity)
        .expect("body should have a Velocity component")
}

#[rstest]
fn move_then_tick_advances_position_and_decays_velocity() {
    let (mut app, body) = spawn_app();
    queue_move(&mut app, body, 4.0, -2.0);
    app.update();

    let position = translation(&app, body);
    assert_relative_eq!(position.x, 5.0);
    assert_relative_eq!(position.y, 2.0);
    assert_relative_eq!(position.z, 1.0);

    let vel = velocity(&app, body);
    assert_relative_eq!(vel.vx, FRICTION * 4.0);
    assert_relative_eq!(vel.vz, FRICTION * -2.0);
}

#[rstest]
fn tick_without_move_leaves_position_unchanged() {
    let (mut app, body) = spawn_app();
    app.update();
    app.update();

    let position = translation(&app, body);
    assert_relative_eq!(position.x, 1.0);
    assert_relative_eq!(position.y, 2.0);
    assert_relative_eq!(position.z, 3.0);
    assert!(
        app.world().get::<Velocity>(body).is_none(),
        "velocity state is only created by a move command"
    );
}

#[rstest]
fn second_tick_applies_decayed_velocity() {
    let (mut app, body) = spawn_app();
    queue_move(&mut app, body, 1.0, 0.0);
    app.update();
    app.update();

    let position = translation(&app, body);
    assert_relative_eq!(position.x, 2.0 + FRICTION);
    assert_relative_eq!(position.z, 3.0);

    let vel = velocity(&app, body);
    assert_relative_eq!(vel.vx, FRICTION * FRICTION);
    assert_relative_eq!(vel.vz, 0.0);
}

#[rstest]
fn later_move_overwrites_prior_velocity() {
    let (mut app, body) = spawn_app();
    queue_move(&mut app, body, 1.0, 1.0);
    app.update();
    queue_move(&mut app, body, 0.5, -0.5);
    app.update();

    let position = translation(&app, body);
    assert_relative_eq!(position.x, 2.0 + 0.5);
    assert_relative_eq!(position.z, 4.0 - 0.5);

    let vel = velocity(&app, body);
    assert_relative_eq!(vel.vx, FRICTION * 0.5);
    assert_relative_eq!(vel.vz, FRICTION * -0.5);
}

#[rstest]
fn command_for_despawned_entity_is_dropped() {
    let (mut app, body) = spawn_app();
    app.world_mut().despawn(body);
    queue_move(&mut app, body, 1.0, 1.0);
    // Must not panic; the command is logged and discarded.
    app.update();
    assert!(app.world().resource::<MoveInbox>().is_empty());
}
