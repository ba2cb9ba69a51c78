/// Brute-force AABB collision between small entity sets.

use crate::entities::Entity;

/// True when the two bounding boxes overlap on both axes.
pub fn overlaps(a: &Entity, b: &Entity) -> bool {
    a.bounds().intersects(&b.bounds())
}

/// Every `(i, j)` with `xs[i]` overlapping `ys[j]`, in index order.
/// Dead entities never collide.
pub fn colliding_pairs(xs: &[Entity], ys: &[Entity]) -> Vec<(usize, usize)> {
    xs.iter()
        .enumerate()
        .filter(|(_, a)| a.alive)
        .flat_map(move |(i, a)| {
            ys.iter()
                .enumerate()
                .filter(move |(_, b)| b.alive && overlaps(a, b))
                .map(move |(j, _)| (i, j))
        })
        .collect()
}

/// True if `target` overlaps any live entity in `others`.
pub fn hits_any(target: &Entity, others: &[Entity]) -> bool {
    others.iter().any(|o| o.alive && overlaps(target, o))
}

/// Mark every overlapping projectile and enemy dead.  Returns the number of
/// enemies destroyed; an enemy struck by several projectiles counts once.
pub fn resolve_projectile_hits(projectiles: &mut [Entity], enemies: &mut [Entity]) -> u32 {
    let mut kills = 0;
    for (pi, ei) in colliding_pairs(projectiles, enemies) {
        projectiles[pi].alive = false;
        if enemies[ei].alive {
            enemies[ei].alive = false;
            kills += 1;
        }
    }
    kills
}
