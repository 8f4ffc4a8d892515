/// Per-tick simulation: spawning, difficulty, and the frame orchestrator.
///
/// State is mutated in place.  Anything random draws from an injected RNG
/// so callers control determinism (tests use a seeded one).

use log::{debug, trace};
use rand::Rng;

use crate::collision::{resolve_bullet_hits, resolve_player_hits, Hit};
use crate::entities::{Enemy, GameState, Particle, Phase, ENEMY_SPAWN_Y};
use crate::input::InputState;
use crate::session::check_status;

// ── Difficulty table ──────────────────────────────────────────────────────────

pub const POINTS_PER_HIT: u32 = 10;
pub const POINTS_PER_LEVEL: u32 = 100;
pub const MIN_SPAWN_INTERVAL: u32 = 20;
pub const PARTICLES_PER_EXPLOSION: usize = 20;
/// Enemies spawn at least this far from either side wall.
pub const SPAWN_MARGIN: f32 = 40.0;

/// Ticks between spawns at `level`, never below `MIN_SPAWN_INTERVAL`.
pub fn spawn_interval_for(level: u32) -> u32 {
    60u32
        .saturating_sub(level.saturating_mul(5))
        .max(MIN_SPAWN_INTERVAL)
}

// ── Spawning ──────────────────────────────────────────────────────────────────

/// Push one enemy along the top edge at a random x inside the spawn margins.
pub fn spawn_enemy(state: &mut GameState, rng: &mut impl Rng) {
    let lo = SPAWN_MARGIN;
    let hi = state.arena.width - SPAWN_MARGIN;
    let x = if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        state.arena.width / 2.0
    };
    trace!("enemy spawned at x={:.1}", x);
    state.enemies.spawn(Enemy::new(x, ENEMY_SPAWN_Y, rng));
}

/// Count up and spawn once the current interval is reached.
fn advance_spawner(state: &mut GameState, rng: &mut impl Rng) {
    state.spawn_counter += 1;
    if state.spawn_counter >= state.spawn_interval {
        spawn_enemy(state, rng);
        state.spawn_counter = 0;
    }
}

pub fn spawn_explosion(state: &mut GameState, x: f32, y: f32, rng: &mut impl Rng) {
    for _ in 0..PARTICLES_PER_EXPLOSION {
        state.particles.spawn(Particle::new(x, y, rng));
    }
}

/// Add the points for one kill and level up when a hundred-point mark is crossed.
pub fn award_hit(state: &mut GameState) {
    let before = state.score;
    state.score += POINTS_PER_HIT;
    if state.score / POINTS_PER_LEVEL > before / POINTS_PER_LEVEL {
        state.level += 1;
        state.spawn_interval = spawn_interval_for(state.level);
        debug!(
            "level {} reached at score {}, spawn interval now {}",
            state.level, state.score, state.spawn_interval
        );
    }
}

// ── Input entry points ────────────────────────────────────────────────────────

/// Discrete fire press.  Ignored outside play or while cooling down.
pub fn fire(state: &mut GameState) {
    if state.phase != Phase::Playing {
        return;
    }
    if let Some(bullet) = state.player.shoot() {
        state.bullets.spawn(bullet);
    }
}

// ── Per-frame tick ────────────────────────────────────────────────────────────

/// Advance the simulation by one tick.
///
/// Stars move in every phase.  While playing, the order is fixed:
/// entity updates and pruning, spawner, collisions, then the terminal check.
pub fn tick(state: &mut GameState, input: &InputState, rng: &mut impl Rng) {
    state.frame += 1;
    update_stars(state, rng);

    if state.phase != Phase::Playing {
        return;
    }

    // ── 1. Update & prune ─────────────────────────────────────────────────────
    update_player(state, input);
    update_pools(state);

    // ── 2. Spawn ──────────────────────────────────────────────────────────────
    advance_spawner(state, rng);

    // ── 3. Collisions ─────────────────────────────────────────────────────────
    resolve_collisions(state, rng);

    // ── 4. Terminal check ─────────────────────────────────────────────────────
    check_status(state);
}

fn update_stars(state: &mut GameState, rng: &mut impl Rng) {
    let frame = state.frame;
    let arena = state.arena;
    state.stars.update(|star| star.update(frame));
    state
        .stars
        .recycle(|star| star.has_exited(&arena), |star| star.respawn(&arena, rng));
}

/// Move the player, then auto-fire if fire is held and the cooldown is clear.
fn update_player(state: &mut GameState, input: &InputState) {
    state.player.update(input, &state.arena);
    if input.fire {
        fire(state);
    }
}

fn update_pools(state: &mut GameState) {
    let frame = state.frame;
    let arena = state.arena;

    state.bullets.update(|b| b.update());
    state.bullets.prune(|b| b.is_gone());

    state.enemies.update(|e| e.update(frame, &arena));
    let escaped = state.enemies.prune(|e| e.has_exited(&arena));
    if escaped > 0 {
        state.lives -= escaped as i32;
        debug!("{} enemy(s) escaped, lives now {}", escaped, state.lives);
    }

    state.particles.update(|p| p.update());
    state.particles.prune(|p| p.is_dead());
}

fn resolve_collisions(state: &mut GameState, rng: &mut impl Rng) {
    let kills = resolve_bullet_hits(&mut state.bullets, &mut state.enemies);
    for Hit { x, y } in kills {
        spawn_explosion(state, x, y, rng);
        award_hit(state);
    }

    let rammed = resolve_player_hits(&state.player, &mut state.enemies);
    for Hit { x, y } in rammed {
        spawn_explosion(state, x, y, rng);
        state.lives -= 1;
        debug!("player rammed at ({:.0}, {:.0}), lives now {}", x, y, state.lives);
    }
}
