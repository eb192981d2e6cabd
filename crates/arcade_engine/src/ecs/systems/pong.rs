//! Ball/paddle collision and scoring
//!
//! One system implements the whole Pong rule set per tick: wall bounce,
//! paddle bounce, score lines, ball reset, and the game-over latch. Role
//! entities are found by query each tick; when the scene has no ball or
//! a paddle is missing, the tick is a no-op rather than an error.
//!
//! Boundary semantics follow the per-call convention: paddle contact uses
//! the strict AABB overlap (touching is not a hit), wall and score-line
//! checks are inclusive (`>=`/`<=`).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::audio::{play_best_effort, AudioSink, NullAudio, SoundEffect};
use crate::core::config::{ArenaConfig, PongRules};
use crate::ecs::components::{Ball, Body, Paddle, PaddleSide, Position, Score, Velocity};
use crate::ecs::{Entity, Query, System, World};
use crate::input::InputSnapshot;
use crate::physics::Aabb;

/// Callback fired once when a side reaches the winning score
///
/// The flag is `true` when the player (left side) won.
pub type GameOverHook = Box<dyn FnMut(bool)>;

/// Pong rules system: wall/paddle bounce, scoring, reset, game over
pub struct PongSystem {
    arena: ArenaConfig,
    rules: PongRules,
    audio: Box<dyn AudioSink>,
    on_game_over: Option<GameOverHook>,
    finished: bool,
    rng: StdRng,
}

impl PongSystem {
    /// Create a system with the given arena and rules
    pub fn new(arena: ArenaConfig, rules: PongRules) -> Self {
        Self {
            arena,
            rules,
            audio: Box::new(NullAudio),
            on_game_over: None,
            finished: false,
            rng: StdRng::from_entropy(),
        }
    }

    /// Use a fixed RNG seed; serve directions become deterministic
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Route sound cues to an external sink
    pub fn with_audio(mut self, audio: Box<dyn AudioSink>) -> Self {
        self.audio = audio;
        self
    }

    /// Install the game-over callback
    pub fn on_game_over(mut self, hook: impl FnMut(bool) + 'static) -> Self {
        self.on_game_over = Some(Box::new(hook));
        self
    }

    /// Whether a side has already won
    pub fn finished(&self) -> bool {
        self.finished
    }

    fn find_paddle(world: &World, side: PaddleSide) -> Option<Entity> {
        Query::new()
            .with::<Paddle>()
            .with::<Position>()
            .with::<Body>()
            .run(world)
            .into_iter()
            .find(|e| world.get::<Paddle>(*e).is_some_and(|p| p.side == side))
    }

    fn award_point(&mut self, world: &mut World, paddle: Entity, player_won: bool) -> bool {
        world.update::<Score>(paddle, Score::increment);
        let score = world.get::<Score>(paddle).map_or(0, |s| s.value);
        log::info!(
            "{} scores: {score}",
            if player_won { "player" } else { "opponent" }
        );

        if score >= self.rules.max_score {
            self.finished = true;
            play_best_effort(self.audio.as_mut(), SoundEffect::GameOver);
            if let Some(hook) = self.on_game_over.as_mut() {
                hook(player_won);
            }
            true
        } else {
            play_best_effort(self.audio.as_mut(), SoundEffect::Score);
            false
        }
    }
}

impl System for PongSystem {
    fn run(&mut self, world: &mut World, _input: &InputSnapshot, _frame_ms: f32) {
        if self.finished {
            return;
        }

        // Role lookup; a scene without all three roles is a no-op tick.
        let ball_query = Query::new()
            .with::<Ball>()
            .with::<Position>()
            .with::<Velocity>()
            .with::<Body>();
        let Some(ball) = ball_query.first(world) else {
            return;
        };
        let Some(player) = Self::find_paddle(world, PaddleSide::Player) else {
            return;
        };
        let Some(opponent) = Self::find_paddle(world, PaddleSide::Opponent) else {
            return;
        };

        let (Some(mut pos), Some(mut vel), Some(body)) = (
            world.get::<Position>(ball).copied(),
            world.get::<Velocity>(ball).copied(),
            world.get::<Body>(ball).copied(),
        ) else {
            return;
        };

        // Wall bounce: inclusive bounds, vertical sign flip only.
        if pos.y + body.height >= self.arena.height {
            vel.dy = -vel.dy.abs();
            play_best_effort(self.audio.as_mut(), SoundEffect::Bounce);
        } else if pos.y <= 0.0 {
            vel.dy = vel.dy.abs();
            play_best_effort(self.audio.as_mut(), SoundEffect::Bounce);
        }

        // Paddle bounce: player checked first, so player resolution wins
        // if the ball somehow overlaps both. The ball snaps flush against
        // the paddle edge to stop tunneling and sticking.
        let ball_box = Aabb::from_parts(&pos, &body);
        let player_box = paddle_box(world, player);
        let opponent_box = paddle_box(world, opponent);

        if let Some(player_box) = player_box.filter(|b| ball_box.overlaps(b)) {
            vel.dx = vel.dx.abs();
            pos.x = player_box.max_x;
            play_best_effort(self.audio.as_mut(), SoundEffect::Bounce);
        } else if let Some(opponent_box) = opponent_box.filter(|b| ball_box.overlaps(b)) {
            vel.dx = -vel.dx.abs();
            pos.x = opponent_box.min_x - body.width;
            play_best_effort(self.audio.as_mut(), SoundEffect::Bounce);
        }

        // Score lines: inclusive. The scorer's paddle holds the score
        // slot. On game over the ball stays where it crossed.
        if pos.x + body.width >= self.arena.width {
            if !self.award_point(world, player, true) {
                pos = self.reset_position(&body);
                vel.dx = self.serve_direction();
            }
        } else if pos.x <= 0.0 {
            if !self.award_point(world, opponent, false) {
                pos = self.reset_position(&body);
                vel.dx = self.serve_direction();
            }
        }

        world.set(ball, pos);
        world.set(ball, vel);
    }

    fn name(&self) -> &str {
        "pong"
    }
}

impl PongSystem {
    /// Center reposition after a point; vertical speed is untouched
    fn reset_position(&self, body: &Body) -> Position {
        Position::new(
            self.arena.width / 2.0 - body.width,
            self.arena.height / 2.0 - body.height,
        )
    }

    /// 50/50 serve toward either side at the configured ball speed
    fn serve_direction(&mut self) -> f32 {
        if self.rng.gen_bool(0.5) {
            self.rules.ball_speed
        } else {
            -self.rules.ball_speed
        }
    }
}

fn paddle_box(world: &World, paddle: Entity) -> Option<Aabb> {
    let pos = world.get::<Position>(paddle)?;
    let body = world.get::<Body>(paddle)?;
    Some(Aabb::from_parts(pos, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARENA: ArenaConfig = ArenaConfig {
        width: 640.0,
        height: 480.0,
    };

    fn rules() -> PongRules {
        PongRules {
            ball_speed: 5.0,
            paddle_speed: 5.0,
            max_score: 5,
        }
    }

    struct Scene {
        world: World,
        ball: Entity,
        player: Entity,
        opponent: Entity,
    }

    fn scene() -> Scene {
        let mut world = World::new();

        let player = world.spawn();
        world.attach(player, Paddle::player());
        world.attach(player, Position::new(10.0, 200.0));
        world.attach(player, Body::solid(10.0, 60.0));
        world.attach(player, Score::default());

        let opponent = world.spawn();
        world.attach(opponent, Paddle::opponent());
        world.attach(opponent, Position::new(620.0, 200.0));
        world.attach(opponent, Body::solid(10.0, 60.0));
        world.attach(opponent, Score::default());

        let ball = world.spawn();
        world.attach(ball, Ball);
        world.attach(ball, Position::new(300.0, 220.0));
        world.attach(ball, Velocity::new(5.0, 5.0));
        world.attach(ball, Body::solid(10.0, 10.0));

        Scene {
            world,
            ball,
            player,
            opponent,
        }
    }

    fn tick(system: &mut PongSystem, world: &mut World) {
        system.run(world, &InputSnapshot::default(), 16.667);
    }

    #[test]
    fn test_bottom_wall_bounce_flips_vertical_only() {
        let mut s = scene();
        s.world.set(s.ball, Position::new(300.0, ARENA.height - 10.0));
        s.world.set(s.ball, Velocity::new(5.0, 5.0));

        let mut system = PongSystem::new(ARENA, rules()).with_seed(1);
        tick(&mut system, &mut s.world);

        let vel = s.world.get::<Velocity>(s.ball).copied().unwrap();
        assert_eq!(vel.dy, -5.0);
        assert_eq!(vel.dx, 5.0);
    }

    #[test]
    fn test_top_wall_bounce() {
        let mut s = scene();
        s.world.set(s.ball, Position::new(300.0, 0.0));
        s.world.set(s.ball, Velocity::new(5.0, -5.0));

        let mut system = PongSystem::new(ARENA, rules()).with_seed(1);
        tick(&mut system, &mut s.world);

        let vel = s.world.get::<Velocity>(s.ball).copied().unwrap();
        assert_eq!(vel.dy, 5.0);
    }

    #[test]
    fn test_player_paddle_bounce_snaps_flush() {
        let mut s = scene();
        // Overlapping the player paddle (x 10..20, y 200..260)
        s.world.set(s.ball, Position::new(15.0, 220.0));
        s.world.set(s.ball, Velocity::new(-5.0, 3.0));

        let mut system = PongSystem::new(ARENA, rules()).with_seed(1);
        tick(&mut system, &mut s.world);

        let pos = s.world.get::<Position>(s.ball).copied().unwrap();
        let vel = s.world.get::<Velocity>(s.ball).copied().unwrap();
        assert_eq!(vel.dx, 5.0); // now moving away from the player
        assert_eq!(pos.x, 20.0); // flush against the paddle face
        assert_eq!(vel.dy, 3.0);
    }

    #[test]
    fn test_opponent_paddle_bounce() {
        let mut s = scene();
        // Overlapping the opponent paddle (x 620..630)
        s.world.set(s.ball, Position::new(615.0, 220.0));
        s.world.set(s.ball, Velocity::new(5.0, 0.0));

        let mut system = PongSystem::new(ARENA, rules()).with_seed(1);
        tick(&mut system, &mut s.world);

        let pos = s.world.get::<Position>(s.ball).copied().unwrap();
        let vel = s.world.get::<Velocity>(s.ball).copied().unwrap();
        assert_eq!(vel.dx, -5.0);
        assert_eq!(pos.x, 610.0); // 620 - ball width
    }

    #[test]
    fn test_paddle_touching_is_not_a_hit() {
        let mut s = scene();
        // Exactly flush with the player face at x=20: strict overlap says
        // no contact, so velocity is unchanged.
        s.world.set(s.ball, Position::new(20.0, 220.0));
        s.world.set(s.ball, Velocity::new(-5.0, 0.0));

        let mut system = PongSystem::new(ARENA, rules()).with_seed(1);
        tick(&mut system, &mut s.world);

        let vel = s.world.get::<Velocity>(s.ball).copied().unwrap();
        assert_eq!(vel.dx, -5.0);
    }

    #[test]
    fn test_player_scores_and_ball_resets_center() {
        let mut s = scene();
        s.world.set(s.ball, Position::new(ARENA.width - 10.0, 100.0));
        s.world.set(s.ball, Velocity::new(5.0, 3.0));

        let mut system = PongSystem::new(ARENA, rules()).with_seed(42);
        tick(&mut system, &mut s.world);

        assert_eq!(s.world.get::<Score>(s.player).unwrap().value, 1);
        assert_eq!(s.world.get::<Score>(s.opponent).unwrap().value, 0);

        let pos = s.world.get::<Position>(s.ball).copied().unwrap();
        assert_eq!(pos.x, ARENA.width / 2.0 - 10.0);
        assert_eq!(pos.y, ARENA.height / 2.0 - 10.0);

        let vel = s.world.get::<Velocity>(s.ball).copied().unwrap();
        assert_eq!(vel.dx.abs(), 5.0); // serve direction random, speed fixed
        assert_eq!(vel.dy, 3.0); // vertical speed untouched
    }

    #[test]
    fn test_opponent_scores_at_left_wall() {
        let mut s = scene();
        s.world.set(s.ball, Position::new(0.0, 100.0));
        s.world.set(s.ball, Velocity::new(-5.0, 0.0));
        // Move paddles clear of the score line
        s.world.set(s.player, Position::new(10.0, 400.0));

        let mut system = PongSystem::new(ARENA, rules()).with_seed(42);
        tick(&mut system, &mut s.world);

        assert_eq!(s.world.get::<Score>(s.opponent).unwrap().value, 1);
        assert_eq!(s.world.get::<Score>(s.player).unwrap().value, 0);
    }

    #[test]
    fn test_match_point_fires_game_over_once_without_reset() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let mut s = scene();
        s.world.set(s.player, Score { value: 4 });
        s.world.set(s.ball, Position::new(ARENA.width - 10.0, 100.0));
        s.world.set(s.ball, Velocity::new(5.0, 3.0));

        let outcomes: Rc<RefCell<Vec<bool>>> = Rc::new(RefCell::new(Vec::new()));
        let hook_outcomes = Rc::clone(&outcomes);
        let mut system = PongSystem::new(ARENA, rules())
            .with_seed(7)
            .on_game_over(move |player_won| hook_outcomes.borrow_mut().push(player_won));

        tick(&mut system, &mut s.world);

        assert_eq!(s.world.get::<Score>(s.player).unwrap().value, 5);
        assert_eq!(*outcomes.borrow(), vec![true]);
        assert!(system.finished());

        // No reset happened: the ball stays where it crossed.
        let pos = s.world.get::<Position>(s.ball).copied().unwrap();
        assert_eq!(pos.x, ARENA.width - 10.0);

        // Further ticks are frozen; the hook never fires again.
        tick(&mut system, &mut s.world);
        tick(&mut system, &mut s.world);
        assert_eq!(outcomes.borrow().len(), 1);
        assert_eq!(s.world.get::<Score>(s.player).unwrap().value, 5);
    }

    #[test]
    fn test_opponent_win_threshold_matches_player() {
        let mut s = scene();
        s.world.set(s.opponent, Score { value: 4 });
        s.world.set(s.ball, Position::new(0.0, 100.0));
        s.world.set(s.ball, Velocity::new(-5.0, 0.0));

        // Single configurable threshold on both sides: the opponent needs
        // the full max_score, same as the player.
        let mut system = PongSystem::new(ARENA, rules()).with_seed(7);
        tick(&mut system, &mut s.world);

        assert_eq!(s.world.get::<Score>(s.opponent).unwrap().value, 5);
        assert!(system.finished());
    }

    #[test]
    fn test_missing_ball_is_noop_tick() {
        let mut s = scene();
        s.world.despawn(s.ball);

        let mut system = PongSystem::new(ARENA, rules()).with_seed(1);
        // Must not panic and must not touch scores
        tick(&mut system, &mut s.world);
        assert_eq!(s.world.get::<Score>(s.player).unwrap().value, 0);
    }

    #[test]
    fn test_missing_paddle_is_noop_tick() {
        let mut s = scene();
        s.world.despawn(s.opponent);
        s.world.set(s.ball, Position::new(ARENA.width - 10.0, 100.0));

        let mut system = PongSystem::new(ARENA, rules()).with_seed(1);
        tick(&mut system, &mut s.world);

        // No scoring ran at all
        assert_eq!(s.world.get::<Score>(s.player).unwrap().value, 0);
    }
}
