/// The render seam.
///
/// The core never draws.  `render` walks the state in a fixed order and
/// hands a `RenderSink` semantic values: positions, radii, colours and
/// fade levels.  What a sink does with them is its own business.

use crate::entities::{Enemy, GameState, MovePattern, Particle, Phase, Rgb, Star};

#[derive(Clone, Debug, PartialEq)]
pub enum Sprite {
    Star {
        x: f32,
        y: f32,
        size: f32,
        brightness: u8,
    },
    Bullet {
        x: f32,
        y: f32,
        radius: f32,
    },
    Player {
        x: f32,
        y: f32,
        radius: f32,
    },
    Enemy {
        x: f32,
        y: f32,
        radius: f32,
        pattern: MovePattern,
        color: Rgb,
        /// Lighter trim drawn around the hull.
        outline: Rgb,
        /// Darker inner detail.
        shade: Rgb,
    },
    Particle {
        x: f32,
        y: f32,
        size: f32,
        color: Rgb,
        /// 0 = invisible, 255 = opaque.
        alpha: u8,
    },
}

impl From<&Star> for Sprite {
    fn from(star: &Star) -> Self {
        Sprite::Star {
            x: star.x,
            y: star.y,
            size: star.size,
            brightness: star.brightness.clamp(0.0, 255.0) as u8,
        }
    }
}

impl From<&Enemy> for Sprite {
    fn from(enemy: &Enemy) -> Self {
        Sprite::Enemy {
            x: enemy.x,
            y: enemy.y,
            radius: enemy.radius,
            pattern: enemy.pattern,
            color: enemy.color,
            outline: enemy.detail_light(),
            shade: enemy.detail_dark(),
        }
    }
}

impl From<&Particle> for Sprite {
    fn from(p: &Particle) -> Self {
        Sprite::Particle {
            x: p.x,
            y: p.y,
            size: p.size,
            color: p.color,
            alpha: p.lifespan.clamp(0, 255) as u8,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hud {
    pub score: u32,
    pub lives: i32,
    pub level: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Start {
        high_score: u32,
    },
    GameOver {
        score: u32,
        high_score: u32,
        new_high_score: bool,
    },
}

/// Anything that can present a frame.
pub trait RenderSink {
    type Error;

    fn begin_frame(&mut self, state: &GameState) -> Result<(), Self::Error>;
    fn draw_sprite(&mut self, sprite: &Sprite) -> Result<(), Self::Error>;
    fn draw_hud(&mut self, hud: &Hud) -> Result<(), Self::Error>;
    fn draw_screen(&mut self, screen: &Screen) -> Result<(), Self::Error>;
    fn end_frame(&mut self) -> Result<(), Self::Error>;
}

/// Present one frame: stars first, then whatever the phase shows.
pub fn render<S: RenderSink>(state: &GameState, sink: &mut S) -> Result<(), S::Error> {
    sink.begin_frame(state)?;

    for star in &state.stars {
        sink.draw_sprite(&Sprite::from(star))?;
    }

    match state.phase {
        Phase::Start => {
            sink.draw_screen(&Screen::Start {
                high_score: state.high_score,
            })?;
        }
        Phase::Playing => {
            for b in &state.bullets {
                sink.draw_sprite(&Sprite::Bullet {
                    x: b.x,
                    y: b.y,
                    radius: b.radius,
                })?;
            }
            sink.draw_sprite(&Sprite::Player {
                x: state.player.x,
                y: state.player.y,
                radius: state.player.radius,
            })?;
            for enemy in &state.enemies {
                sink.draw_sprite(&Sprite::from(enemy))?;
            }
            for p in &state.particles {
                sink.draw_sprite(&Sprite::from(p))?;
            }
            sink.draw_hud(&Hud {
                score: state.score,
                lives: state.lives,
                level: state.level,
            })?;
        }
        Phase::GameOver => {
            sink.draw_screen(&Screen::GameOver {
                score: state.score,
                high_score: state.high_score,
                new_high_score: state.new_high_score,
            })?;
        }
    }

    sink.end_frame()
}
