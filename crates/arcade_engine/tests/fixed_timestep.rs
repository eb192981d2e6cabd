//! Fixed-tick invariant tests
//!
//! For any sequence of frame timestamps, the ticks executed per frame
//! equal `floor(elapsed / frame_ms)` clamped to the catch-up cap, with
//! the remainder carried in the accumulator.

use arcade_engine::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

struct TickCounter {
    count: Rc<RefCell<u32>>,
}

impl System for TickCounter {
    fn run(&mut self, _world: &mut World, _input: &InputSnapshot, _frame_ms: f32) {
        *self.count.borrow_mut() += 1;
    }
}

fn counting_loop(fps: u32) -> (GameLoop, Rc<RefCell<u32>>) {
    let config = LoopConfig {
        fps,
        max_catchup_ticks: 5,
    };
    let mut game_loop = GameLoop::new(&config, Box::new(ScriptedInput::new())).unwrap();
    let count = Rc::new(RefCell::new(0));
    game_loop.add_system(TickCounter {
        count: Rc::clone(&count),
    });
    (game_loop, count)
}

#[test]
fn ticks_follow_floor_of_elapsed_time() {
    // fps 50 -> frame_ms exactly 20
    let (mut game_loop, count) = counting_loop(50);
    let mut world = World::new();

    game_loop.frame(&mut world, 0.0);

    let frames: [(f64, u32); 6] = [
        (10.0, 0),  // 10ms accumulated
        (20.0, 1),  // 20ms total
        (30.0, 0),  // 10ms accumulated again
        (75.0, 2),  // 55ms accumulated, 15ms remainder
        (95.0, 1),  // remainder + 20ms
        (300.0, 5), // stall: capped at 5
    ];

    let mut expected_total = 0;
    for (timestamp, expected) in frames {
        assert_eq!(
            game_loop.frame(&mut world, timestamp),
            expected,
            "frame at t={timestamp}"
        );
        expected_total += expected;
        assert_eq!(*count.borrow(), expected_total);
    }
}

#[test]
fn backlog_beyond_the_cap_stays_accumulated() {
    let (mut game_loop, count) = counting_loop(50);
    let mut world = World::new();

    game_loop.frame(&mut world, 0.0);
    // 240ms elapsed = 12 frames' worth; cap is 5 per callback
    assert_eq!(game_loop.frame(&mut world, 240.0), 5);
    // Same timestamp again: no new time, but 140ms of backlog remains
    assert_eq!(game_loop.frame(&mut world, 240.0), 5);
    assert_eq!(game_loop.frame(&mut world, 240.0), 2);
    assert_eq!(game_loop.frame(&mut world, 240.0), 0);
    assert_eq!(*count.borrow(), 12);
}

#[test]
fn first_frame_only_establishes_epoch() {
    let (mut game_loop, count) = counting_loop(60);
    let mut world = World::new();

    assert_eq!(game_loop.frame(&mut world, 5000.0), 0);
    assert_eq!(*count.borrow(), 0);
}

#[test]
fn default_config_runs_at_sixty_fps() {
    let (mut game_loop, _count) = counting_loop(LoopConfig::default().fps);
    let mut world = World::new();

    game_loop.frame(&mut world, 0.0);
    // One 60Hz frame interval is just under 16.67ms
    assert_eq!(game_loop.frame(&mut world, 16.0), 0);
    assert_eq!(game_loop.frame(&mut world, 33.4), 2);
}
