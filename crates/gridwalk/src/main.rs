//! Tile-based movement demo
//!
//! Parses a small ASCII level into wall and player entities, then replays
//! a scripted walk through it. Movement goes through `try_move`, so the
//! demo exercises both occupancy resolution (walls block) and the input
//! debounce (holding a direction only steps once per cooldown window).

use arcade_engine::prelude::*;

/// Side length of one grid tile in world units
const TILE: f32 = 64.0;

const LEVEL: &str = "\
########
#@.....#
#.###..#
#...#..#
#.#.#.##
#.#....#
########";

/// Spawn a wall or player entity per level glyph; returns the player
fn build_level(world: &mut World) -> Option<Entity> {
    let mut player = None;
    for (row, line) in LEVEL.lines().enumerate() {
        for (col, glyph) in line.chars().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let position = Position::new(col as f32 * TILE, row as f32 * TILE);
            match glyph {
                '#' => {
                    let wall = world.spawn();
                    world.attach(wall, position);
                    world.attach(wall, Body::solid(TILE, TILE));
                }
                '@' => {
                    let entity = world.spawn();
                    world.attach(entity, position);
                    world.attach(entity, Body::solid(TILE, TILE));
                    world.attach(entity, Mover::new(TILE, 250.0));
                    player = Some(entity);
                }
                _ => {}
            }
        }
    }
    player
}

fn held(direction: Direction) -> InputSnapshot {
    let mut snapshot = InputSnapshot::default();
    match direction {
        Direction::Up => snapshot.up = true,
        Direction::Down => snapshot.down = true,
        Direction::Left => snapshot.left = true,
        Direction::Right => snapshot.right = true,
    }
    snapshot
}

/// The walk the script attempts; the final step runs into the inner
/// wall pocket on purpose.
const WALK: [Direction; 8] = [
    Direction::Down,
    Direction::Down,
    Direction::Right,
    Direction::Right,
    Direction::Down,
    Direction::Down,
    Direction::Right,
    Direction::Up, // blocked by the wall at (4, 4)
];

fn main() -> Result<(), EngineError> {
    arcade_engine::foundation::logging::init();

    // 10 fps makes the 250 ms debounce span three ticks, so each intended
    // step holds its direction long enough to land exactly once.
    let timing = LoopConfig {
        fps: 10,
        max_catchup_ticks: 5,
    };
    let mut script = ScriptedInput::new();
    for direction in WALK {
        for _ in 0..3 {
            script.push(held(direction));
        }
    }

    let mut engine = Engine::new(&timing, Box::new(script))?;
    let Some(player) = build_level(engine.world_mut()) else {
        log::error!("level has no player tile");
        return Ok(());
    };

    engine.game_loop_mut().add_system(CooldownSystem);
    engine.game_loop_mut().subscribe(player, |world, entity, input, _frame_ms| {
        let direction = if input.up {
            Direction::Up
        } else if input.down {
            Direction::Down
        } else if input.left {
            Direction::Left
        } else if input.right {
            Direction::Right
        } else {
            return;
        };

        if try_move(world, entity, direction) {
            if let Some(pos) = world.get::<Position>(entity) {
                log::info!(
                    "{entity} stepped {direction:?} to tile ({}, {})",
                    (pos.x / TILE) as i32,
                    (pos.y / TILE) as i32
                );
            }
        } else {
            log::debug!("{entity} step {direction:?} refused");
        }
    });

    let frame_ms = f64::from(engine.game_loop().frame_ms());
    let total_frames = u32::try_from(WALK.len() * 3 + 1).unwrap_or(u32::MAX);
    for frame in 0..total_frames {
        engine.frame(f64::from(frame) * frame_ms);
    }

    if let Some(pos) = engine.world().get::<Position>(player) {
        log::info!(
            "walk finished at tile ({}, {})",
            (pos.x / TILE) as i32,
            (pos.y / TILE) as i32
        );
    }

    Ok(())
}
