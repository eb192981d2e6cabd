//! Debounced grid movement scenarios

use arcade_engine::prelude::*;

const TILE: f32 = 64.0;

fn spawn_player(world: &mut World, x: f32, y: f32) -> Entity {
    let player = world.spawn();
    world.attach(player, Position::new(x, y));
    world.attach(player, Body::solid(TILE, TILE));
    world.attach(player, Mover::new(TILE, 250.0));
    player
}

fn spawn_wall(world: &mut World, x: f32, y: f32) -> Entity {
    let wall = world.spawn();
    world.attach(wall, Position::new(x, y));
    world.attach(wall, Body::solid(TILE, TILE));
    wall
}

#[test]
fn two_moves_within_debounce_window_step_once() {
    // Player at (64,64) with a 250ms cooldown; two "right" presses 100ms
    // apart must produce exactly one +64 step.
    let config = LoopConfig {
        fps: 10, // 100ms ticks make the timing explicit
        max_catchup_ticks: 5,
    };
    let held_right = InputSnapshot {
        right: true,
        ..InputSnapshot::default()
    };
    let mut game_loop = GameLoop::new(
        &config,
        Box::new(ScriptedInput::from_snapshots([held_right, held_right])),
    )
    .unwrap();
    let mut world = World::new();
    let player = spawn_player(&mut world, TILE, TILE);

    game_loop.add_system(CooldownSystem);
    game_loop.subscribe(player, |world, entity, input: &InputSnapshot, _dt| {
        if input.right {
            try_move(world, entity, Direction::Right);
        }
    });

    game_loop.frame(&mut world, 0.0);
    game_loop.frame(&mut world, 100.0); // first press: accepted
    game_loop.frame(&mut world, 200.0); // second press, 100ms later: debounced

    let pos = world.get::<Position>(player).copied().unwrap();
    assert_eq!(pos.x, TILE + TILE);
    assert_eq!(pos.y, TILE);
}

#[test]
fn cooldown_expires_and_allows_the_next_step() {
    let config = LoopConfig {
        fps: 10,
        max_catchup_ticks: 5,
    };
    // Press right on every tick; only every third 100ms tick clears the
    // 250ms cooldown.
    let held_right = InputSnapshot {
        right: true,
        ..InputSnapshot::default()
    };
    let script = ScriptedInput::from_snapshots(std::iter::repeat(held_right).take(7));

    let mut game_loop = GameLoop::new(&config, Box::new(script)).unwrap();
    let mut world = World::new();
    let player = spawn_player(&mut world, 0.0, 0.0);

    game_loop.add_system(CooldownSystem);
    game_loop.subscribe(player, |world, entity, input: &InputSnapshot, _dt| {
        if input.right {
            try_move(world, entity, Direction::Right);
        }
    });

    game_loop.frame(&mut world, 0.0);
    for i in 1..=7 {
        game_loop.frame(&mut world, f64::from(i) * 100.0);
    }

    // Accepted at t=100 (tick 1), t=400 (tick 4), t=700 (tick 7)
    let pos = world.get::<Position>(player).copied().unwrap();
    assert_eq!(pos.x, 3.0 * TILE);
}

#[test]
fn solid_wall_blocks_the_step() {
    let config = LoopConfig {
        fps: 10,
        max_catchup_ticks: 5,
    };
    let held_right = InputSnapshot {
        right: true,
        ..InputSnapshot::default()
    };
    let mut game_loop = GameLoop::new(
        &config,
        Box::new(ScriptedInput::from_snapshots([held_right])),
    )
    .unwrap();
    let mut world = World::new();
    let player = spawn_player(&mut world, 0.0, 0.0);
    spawn_wall(&mut world, TILE, 0.0);

    game_loop.add_system(CooldownSystem);
    game_loop.subscribe(player, |world, entity, input: &InputSnapshot, _dt| {
        if input.right {
            try_move(world, entity, Direction::Right);
        }
    });

    game_loop.frame(&mut world, 0.0);
    game_loop.frame(&mut world, 100.0);

    // Candidate tile is occupied by a solid wall: no movement at all
    let pos = world.get::<Position>(player).copied().unwrap();
    assert_eq!(pos.x, 0.0);
}
