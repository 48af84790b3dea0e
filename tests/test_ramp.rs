use gravity_flip::config::*;
use gravity_flip::entities::ObstacleStream;
use gravity_flip::ramp::apply_pass;

const EPS: f64 = 1e-9;

fn passes(stream: &mut ObstacleStream, config: &GameConfig, from: u32, to: u32) -> u32 {
    (from..=to)
        .filter(|&score| apply_pass(stream, score, config))
        .count() as u32
}

#[test]
fn no_step_before_fifth_pass() {
    let config = GameConfig::default();
    let mut s = ObstacleStream::new(&config);
    assert_eq!(passes(&mut s, &config, 1, 4), 0);
    assert_eq!(s.speed, INITIAL_SPEED);
    assert_eq!(s.spawn_interval, INITIAL_SPAWN_INTERVAL);
}

#[test]
fn fifth_pass_speeds_up_and_shortens_interval() {
    let config = GameConfig::default();
    let mut s = ObstacleStream::new(&config);
    assert_eq!(passes(&mut s, &config, 1, 5), 1);
    assert!((s.speed - (INITIAL_SPEED + 0.3)).abs() < EPS);
    assert_eq!(s.spawn_interval, INITIAL_SPAWN_INTERVAL - 10);
}

#[test]
fn fourteen_passes_give_two_steps() {
    let config = GameConfig::default();
    let mut s = ObstacleStream::new(&config);
    assert_eq!(passes(&mut s, &config, 1, 14), 2);
    assert!((s.speed - (INITIAL_SPEED + 0.6)).abs() < EPS);
    assert_eq!(s.spawn_interval, INITIAL_SPAWN_INTERVAL - 20);
}

#[test]
fn zero_score_is_not_a_milestone() {
    let config = GameConfig::default();
    let mut s = ObstacleStream::new(&config);
    assert!(!apply_pass(&mut s, 0, &config));
    assert_eq!(s.speed, INITIAL_SPEED);
}

#[test]
fn interval_stops_at_floor_while_speed_keeps_growing() {
    let config = GameConfig::default();
    let mut s = ObstacleStream::new(&config);
    // Eight steps take 140 down to 60; the rest must leave it there
    assert_eq!(passes(&mut s, &config, 1, 100), 20);
    assert_eq!(s.spawn_interval, SPAWN_INTERVAL_FLOOR);
    assert!((s.speed - (INITIAL_SPEED + 20.0 * 0.3)).abs() < 1e-6);
}

#[test]
fn interval_just_above_floor_overshoots_once() {
    let config = GameConfig {
        initial_spawn_interval: 65,
        ..GameConfig::default()
    };
    let mut s = ObstacleStream::new(&config);
    apply_pass(&mut s, 5, &config);
    assert_eq!(s.spawn_interval, 55);
    apply_pass(&mut s, 10, &config);
    assert_eq!(s.spawn_interval, 55);
}

#[test]
fn custom_milestone_and_steps() {
    let config = GameConfig {
        score_milestone: 3,
        speed_increment: 1.0,
        spawn_interval_decrement: 25,
        ..GameConfig::default()
    };
    let mut s = ObstacleStream::new(&config);
    assert_eq!(passes(&mut s, &config, 1, 6), 2);
    assert_eq!(s.speed, INITIAL_SPEED + 2.0);
    assert_eq!(s.spawn_interval, 90);
}

#[test]
fn zero_milestone_never_ramps() {
    let config = GameConfig {
        score_milestone: 0,
        ..GameConfig::default()
    };
    let mut s = ObstacleStream::new(&config);
    assert_eq!(passes(&mut s, &config, 0, 20), 0);
    assert_eq!(s.speed, INITIAL_SPEED);
    assert_eq!(s.spawn_interval, INITIAL_SPAWN_INTERVAL);
}
