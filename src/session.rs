/// Session lifecycle: start → playing → game-over, and back via confirm.

use log::info;
use rand::Rng;

use crate::compute::spawn_enemy;
use crate::entities::{
    Arena, GameState, Phase, Player, Star, STARTING_LEVEL, STARTING_LIVES,
    STARTING_SPAWN_INTERVAL,
};
use crate::pool::Pool;

/// Build the idle start-screen state with a scattered star field.
pub fn init_state(arena: Arena, star_count: usize, rng: &mut impl Rng) -> GameState {
    let stars: Pool<Star> = (0..star_count)
        .map(|_| Star::scattered(&arena, rng))
        .collect();

    GameState {
        arena,
        player: Player::new(&arena),
        bullets: Pool::new(),
        enemies: Pool::new(),
        particles: Pool::new(),
        stars,
        score: 0,
        lives: STARTING_LIVES,
        level: STARTING_LEVEL,
        spawn_interval: STARTING_SPAWN_INTERVAL,
        spawn_counter: 0,
        phase: Phase::Start,
        high_score: 0,
        new_high_score: false,
        frame: 0,
    }
}

/// Fresh player, empty pools, starting counters, and one enemy already on
/// its way.  Stars, the high score and the frame count carry over.
pub fn reset(state: &mut GameState, rng: &mut impl Rng) {
    state.player = Player::new(&state.arena);
    state.bullets.clear();
    state.enemies.clear();
    state.particles.clear();
    state.score = 0;
    state.lives = STARTING_LIVES;
    state.level = STARTING_LEVEL;
    state.spawn_counter = 0;
    state.spawn_interval = STARTING_SPAWN_INTERVAL;
    state.new_high_score = false;

    spawn_enemy(state, rng);
}

/// The confirm/restart control.  Only acts from the start or game-over screen.
pub fn confirm(state: &mut GameState, rng: &mut impl Rng) {
    match state.phase {
        Phase::Start | Phase::GameOver => {
            reset(state, rng);
            state.phase = Phase::Playing;
            info!("new game started");
        }
        Phase::Playing => {}
    }
}

/// End the game once lives are spent, settling the high score on the way out.
pub fn check_status(state: &mut GameState) {
    if state.phase != Phase::Playing || state.lives > 0 {
        return;
    }

    state.phase = Phase::GameOver;
    if state.score > state.high_score {
        state.high_score = state.score;
        state.new_high_score = true;
        info!("game over, new high score {}", state.score);
    } else {
        info!(
            "game over, score {} (high score {})",
            state.score, state.high_score
        );
    }
}
