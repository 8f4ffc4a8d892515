/// Circle-overlap collision between the bullet, enemy and player sets.
///
/// All pairs are tested; no spatial partitioning.  Resolution only removes
/// members and reports where each hit happened; scoring and life effects
/// belong to the caller.

use crate::entities::{Bullet, Enemy, Player};
use crate::pool::Pool;

/// Where an enemy was destroyed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub x: f32,
    pub y: f32,
}

impl From<&Enemy> for Hit {
    fn from(enemy: &Enemy) -> Self {
        Hit {
            x: enemy.x,
            y: enemy.y,
        }
    }
}

/// Strictly closer than the sum of the radii.
pub fn circles_overlap(ax: f32, ay: f32, ar: f32, bx: f32, by: f32, br: f32) -> bool {
    let dx = ax - bx;
    let dy = ay - by;
    (dx * dx + dy * dy).sqrt() < ar + br
}

fn bullet_hits(bullet: &Bullet, enemy: &Enemy) -> bool {
    circles_overlap(
        bullet.x,
        bullet.y,
        bullet.radius,
        enemy.x,
        enemy.y,
        enemy.radius,
    )
}

fn player_hits(player: &Player, enemy: &Enemy) -> bool {
    circles_overlap(
        player.x,
        player.y,
        player.radius,
        enemy.x,
        enemy.y,
        enemy.radius,
    )
}

/// Each bullet takes out at most one enemy; both leave their pools.
pub fn resolve_bullet_hits(bullets: &mut Pool<Bullet>, enemies: &mut Pool<Enemy>) -> Vec<Hit> {
    bullets
        .pair_off(enemies, bullet_hits)
        .iter()
        .map(|(_, enemy)| Hit::from(enemy))
        .collect()
}

/// Enemies touching the player are destroyed.  The player never is.
pub fn resolve_player_hits(player: &Player, enemies: &mut Pool<Enemy>) -> Vec<Hit> {
    enemies
        .extract(|enemy| player_hits(player, enemy))
        .iter()
        .map(Hit::from)
        .collect()
}
