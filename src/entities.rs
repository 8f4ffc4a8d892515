/// Game entity types and their per-tick kinematics.
///
/// Every randomized attribute is drawn from an injected RNG so a seeded
/// generator reproduces an exact run.

use rand::Rng;

use crate::input::InputState;
use crate::pool::Pool;

// ── Tuning ────────────────────────────────────────────────────────────────────

pub const PLAYER_RADIUS: f32 = 20.0;
pub const PLAYER_SPEED: f32 = 6.0;
/// Distance of the player above the bottom edge.
pub const PLAYER_FLOOR_OFFSET: f32 = 100.0;
/// Ticks between shots.
pub const FIRE_COOLDOWN: u32 = 15;

pub const BULLET_SPEED: f32 = 10.0;
pub const BULLET_RADIUS: f32 = 4.0;
/// Bullets spawn this far above the player's centre.
pub const BULLET_MUZZLE_OFFSET: f32 = 25.0;
/// Bullets above this y are gone.
pub const BULLET_EXIT_Y: f32 = -10.0;

pub const ENEMY_RADIUS: f32 = 20.0;
pub const ENEMY_SPAWN_Y: f32 = -20.0;
/// Enemies this far past the bottom edge are gone (and cost a life).
pub const ENEMY_EXIT_MARGIN: f32 = 20.0;

pub const PARTICLE_LIFESPAN: i32 = 255;
pub const PARTICLE_FADE: i32 = 10;
pub const PARTICLE_DRAG: f32 = 0.95;

pub const STAR_MIN_SIZE: f32 = 1.0;
pub const STAR_MAX_SIZE: f32 = 3.0;

// ── Shared value types ────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 800.0,
        }
    }
}

impl Arena {
    /// Clamp `x` so a circle of `radius` stays inside the side walls.
    /// Arenas narrower than the circle pin it to the centre.
    pub fn clamp_x(&self, x: f32, radius: f32) -> f32 {
        let lo = radius;
        let hi = self.width - radius;
        if hi < lo {
            self.width / 2.0
        } else {
            x.max(lo).min(hi)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn random(rng: &mut impl Rng, r: (u8, u8), g: (u8, u8), b: (u8, u8)) -> Self {
        Self::new(
            rng.gen_range(r.0..r.1),
            rng.gen_range(g.0..g.1),
            rng.gen_range(b.0..b.1),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Start,
    Playing,
    GameOver,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub speed: f32,
    /// Ticks left before the next shot is allowed.
    pub cooldown: u32,
    pub cooldown_period: u32,
}

impl Player {
    pub fn new(arena: &Arena) -> Self {
        Self {
            x: arena.width / 2.0,
            y: arena.height - PLAYER_FLOOR_OFFSET,
            radius: PLAYER_RADIUS,
            speed: PLAYER_SPEED,
            cooldown: 0,
            cooldown_period: FIRE_COOLDOWN,
        }
    }

    /// Move from held left/right and tick the cooldown down.
    pub fn update(&mut self, input: &InputState, arena: &Arena) {
        if input.left {
            self.x -= self.speed;
        }
        if input.right {
            self.x += self.speed;
        }
        self.x = arena.clamp_x(self.x, self.radius);
        self.cooldown = self.cooldown.saturating_sub(1);
    }

    /// Fire if the cooldown has run out.
    pub fn shoot(&mut self) -> Option<Bullet> {
        if self.cooldown > 0 {
            return None;
        }
        self.cooldown = self.cooldown_period;
        Some(Bullet::new(self.x, self.y - BULLET_MUZZLE_OFFSET))
    }
}

// ── Bullet ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub radius: f32,
}

impl Bullet {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            speed: BULLET_SPEED,
            radius: BULLET_RADIUS,
        }
    }

    pub fn update(&mut self) {
        self.y -= self.speed;
    }

    pub fn is_gone(&self) -> bool {
        self.y < BULLET_EXIT_Y
    }
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovePattern {
    Straight,
    Zigzag,
    Sine,
}

impl MovePattern {
    pub fn random(rng: &mut impl Rng) -> Self {
        match rng.gen_range(0..3) {
            0 => MovePattern::Straight,
            1 => MovePattern::Zigzag,
            _ => MovePattern::Sine,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    /// Anchor the oscillating patterns swing around.
    pub initial_x: f32,
    pub speed: f32,
    pub radius: f32,
    pub pattern: MovePattern,
    pub oscillation_speed: f32,
    pub oscillation_amp: f32,
    pub color: Rgb,
}

impl Enemy {
    pub fn new(x: f32, y: f32, rng: &mut impl Rng) -> Self {
        Self {
            x,
            y,
            initial_x: x,
            speed: rng.gen_range(1.5..3.5),
            radius: ENEMY_RADIUS,
            pattern: MovePattern::random(rng),
            oscillation_speed: rng.gen_range(0.02..0.05),
            oscillation_amp: rng.gen_range(20.0..40.0),
            color: Rgb::random(rng, (200, 255), (50, 150), (50, 150)),
        }
    }

    pub fn update(&mut self, frame: u64, arena: &Arena) {
        self.y += self.speed;

        let t = frame as f32;
        match self.pattern {
            MovePattern::Straight => {}
            MovePattern::Zigzag => {
                self.x = self.swing(t);
            }
            MovePattern::Sine => {
                self.x = self.swing(t);
                // Re-derived every tick, so the descent rate keeps pulsing.
                self.speed = (t * 0.1).sin() * 0.5 + 2.0;
            }
        }

        self.x = arena.clamp_x(self.x, self.radius);
    }

    fn swing(&self, t: f32) -> f32 {
        self.initial_x + (t * self.oscillation_speed).sin() * self.oscillation_amp
    }

    pub fn has_exited(&self, arena: &Arena) -> bool {
        self.y > arena.height + ENEMY_EXIT_MARGIN
    }

    pub fn detail_dark(&self) -> Rgb {
        Rgb::new(
            self.color.r.saturating_sub(50),
            self.color.g.saturating_sub(30),
            self.color.b.saturating_sub(30),
        )
    }

    pub fn detail_light(&self) -> Rgb {
        Rgb::new(
            self.color.r.saturating_add(20),
            self.color.g.saturating_add(20),
            self.color.b.saturating_add(60),
        )
    }
}

// ── Particle ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    /// Counts down by `PARTICLE_FADE` per tick; doubles as draw alpha.
    pub lifespan: i32,
    pub color: Rgb,
}

impl Particle {
    pub fn new(x: f32, y: f32, rng: &mut impl Rng) -> Self {
        Self {
            x,
            y,
            vx: rng.gen_range(-3.0..3.0),
            vy: rng.gen_range(-3.0..3.0),
            size: rng.gen_range(2.0..5.0),
            lifespan: PARTICLE_LIFESPAN,
            color: Rgb::random(rng, (200, 255), (100, 200), (0, 100)),
        }
    }

    pub fn update(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        self.vx *= PARTICLE_DRAG;
        self.vy *= PARTICLE_DRAG;
        self.lifespan -= PARTICLE_FADE;
    }

    pub fn is_dead(&self) -> bool {
        self.lifespan <= 0
    }
}

// ── Star ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub speed: f32,
    pub brightness: f32,
    pub twinkle_speed: f32,
}

impl Star {
    pub fn new(x: f32, y: f32, size: f32, rng: &mut impl Rng) -> Self {
        Self {
            x,
            y,
            size,
            speed: Self::speed_for(size),
            brightness: rng.gen_range(150.0..255.0),
            twinkle_speed: rng.gen_range(0.05..0.1),
        }
    }

    /// Random star anywhere in the arena.
    pub fn scattered(arena: &Arena, rng: &mut impl Rng) -> Self {
        let x = rng.gen_range(0.0..arena.width);
        let y = rng.gen_range(0.0..arena.height);
        let size = rng.gen_range(STAR_MIN_SIZE..STAR_MAX_SIZE);
        Self::new(x, y, size, rng)
    }

    /// Bigger stars fall faster: size 1..3 maps linearly onto 0.5..2.
    pub fn speed_for(size: f32) -> f32 {
        0.5 + (size - STAR_MIN_SIZE) * (1.5 / (STAR_MAX_SIZE - STAR_MIN_SIZE))
    }

    pub fn update(&mut self, frame: u64) {
        self.y += self.speed;
        self.brightness = 150.0 + (frame as f32 * self.twinkle_speed).sin() * 105.0;
    }

    pub fn has_exited(&self, arena: &Arena) -> bool {
        self.y > arena.height
    }

    /// Re-enter along the top edge at a fresh x, keeping the size.
    pub fn respawn(&mut self, arena: &Arena, rng: &mut impl Rng) {
        let x = rng.gen_range(0.0..arena.width);
        *self = Star::new(x, 0.0, self.size, rng);
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

pub const STARTING_LIVES: i32 = 3;
pub const STARTING_LEVEL: u32 = 1;
pub const STARTING_SPAWN_INTERVAL: u32 = 60;

/// Everything one session owns.  Pools hold live entities only; a member's
/// lifetime is exactly its residency in its pool.
#[derive(Clone, Debug)]
pub struct GameState {
    pub arena: Arena,
    pub player: Player,
    pub bullets: Pool<Bullet>,
    pub enemies: Pool<Enemy>,
    pub particles: Pool<Particle>,
    pub stars: Pool<Star>,
    pub score: u32,
    pub lives: i32,
    pub level: u32,
    /// Ticks between enemy spawns.
    pub spawn_interval: u32,
    pub spawn_counter: u32,
    pub phase: Phase,
    /// Best score seen by this process.
    pub high_score: u32,
    /// Set when the last finished game beat the previous high score.
    pub new_high_score: bool,
    /// Ticks since start-up, advanced in every phase.
    pub frame: u64,
}
