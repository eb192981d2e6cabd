//! Headless Pong demo
//!
//! Wires the engine pieces into a complete match: a ball, two scripted
//! paddles (the opponent runs with a speed handicap so matches end), the
//! Pong rules system, and a frame observer that logs score changes.
//! Frames are driven with synthetic timestamps, so the demo runs the
//! same everywhere regardless of wall-clock speed.

mod config;

use std::cell::RefCell;
use std::rc::Rc;

use arcade_engine::prelude::*;

use config::GameConfig;

/// Chase AI: each paddle tracks the ball's vertical center
struct PaddleAiSystem {
    arena: ArenaConfig,
    paddle_speed: f32,
    opponent_handicap: f32,
}

impl System for PaddleAiSystem {
    fn run(&mut self, world: &mut World, _input: &InputSnapshot, _frame_ms: f32) {
        let ball_query = Query::new().with::<Ball>().with::<Position>().with::<Body>();
        let Some(ball) = ball_query.first(world) else {
            return;
        };
        let (Some(ball_pos), Some(ball_body)) = (
            world.get::<Position>(ball).copied(),
            world.get::<Body>(ball).copied(),
        ) else {
            return;
        };
        let ball_center = ball_pos.y + ball_body.height / 2.0;

        for paddle in Query::new().with::<Paddle>().with::<Position>().with::<Body>().run(world) {
            let (Some(side), Some(pos), Some(body)) = (
                world.get::<Paddle>(paddle).map(|p| p.side),
                world.get::<Position>(paddle).copied(),
                world.get::<Body>(paddle).copied(),
            ) else {
                continue;
            };

            let speed = match side {
                PaddleSide::Player => self.paddle_speed,
                PaddleSide::Opponent => self.paddle_speed * self.opponent_handicap,
            };

            let paddle_center = pos.y + body.height / 2.0;
            let delta = (ball_center - paddle_center).clamp(-speed, speed);
            let max_y = self.arena.height - body.height;
            world.update::<Position>(paddle, |p| {
                p.y = (p.y + delta).clamp(0.0, max_y);
            });
        }
    }

    fn name(&self) -> &str {
        "paddle_ai"
    }
}

fn spawn_scene(world: &mut World, config: &GameConfig) -> (Entity, Entity) {
    let arena = config.arena;

    let player = world.spawn();
    world.attach(player, Paddle::player());
    world.attach(player, Position::new(10.0, arena.height / 2.0 - 30.0));
    world.attach(player, Body::solid(10.0, 60.0));
    world.attach(player, Score::default());

    let opponent = world.spawn();
    world.attach(opponent, Paddle::opponent());
    world.attach(opponent, Position::new(arena.width - 20.0, arena.height / 2.0 - 30.0));
    world.attach(opponent, Body::solid(10.0, 60.0));
    world.attach(opponent, Score::default());

    let ball = world.spawn();
    world.attach(ball, Ball);
    world.attach(
        ball,
        Position::new(arena.width / 2.0 - 10.0, arena.height / 2.0 - 10.0),
    );
    world.attach(
        ball,
        Velocity::new(config.rules.ball_speed, config.rules.ball_speed * 0.6),
    );
    world.attach(ball, Body::solid(10.0, 10.0));

    (player, opponent)
}

fn main() -> Result<(), EngineError> {
    arcade_engine::foundation::logging::init();

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load_from_file(&path).unwrap_or_else(|err| {
            log::warn!("failed to load {path}: {err}; using defaults");
            GameConfig::default()
        }),
        None => GameConfig::default(),
    };

    let mut engine = Engine::new(&config.timing, Box::new(ScriptedInput::new()))?;
    let (player, opponent) = spawn_scene(engine.world_mut(), &config);

    let winner: Rc<RefCell<Option<bool>>> = Rc::new(RefCell::new(None));
    let hook_winner = Rc::clone(&winner);

    engine.game_loop_mut().add_system(VelocitySystem);
    engine.game_loop_mut().add_system(PaddleAiSystem {
        arena: config.arena,
        paddle_speed: config.rules.paddle_speed,
        opponent_handicap: config.demo.opponent_handicap,
    });
    engine.game_loop_mut().add_system(
        PongSystem::new(config.arena, config.rules.clone())
            .with_seed(config.demo.seed)
            .on_game_over(move |player_won| *hook_winner.borrow_mut() = Some(player_won)),
    );

    // Rendering boundary stand-in: log the score line whenever it moves.
    let last_line: Rc<RefCell<String>> = Rc::new(RefCell::new(String::new()));
    engine.game_loop_mut().observe(move |world| {
        let player_score = world.get::<Score>(player).map_or(0, |s| s.value);
        let opponent_score = world.get::<Score>(opponent).map_or(0, |s| s.value);
        let line = format!("{player_score} - {opponent_score}");
        if *last_line.borrow() != line {
            log::info!("score: {line}");
            *last_line.borrow_mut() = line;
        }
    });

    let frame_ms = f64::from(engine.game_loop().frame_ms());
    for frame in 0..config.demo.max_frames {
        engine.frame(f64::from(frame) * frame_ms);
        if winner.borrow().is_some() {
            break;
        }
    }

    match *winner.borrow() {
        Some(true) => log::info!("player wins the match"),
        Some(false) => log::info!("opponent wins the match"),
        None => log::warn!(
            "no winner within {} frames; final score {} - {}",
            config.demo.max_frames,
            engine.world().get::<Score>(player).map_or(0, |s| s.value),
            engine.world().get::<Score>(opponent).map_or(0, |s| s.value),
        ),
    }

    Ok(())
}
