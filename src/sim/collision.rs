//! Axis-aligned box overlap between entities
//!
//! Boxes are never rotated, even for the ship. Touching edges count as a hit.
//! Every unordered pair is tested each frame; entity counts stay in the tens.

use glam::Vec2;

use super::entity::Entity;

/// Inclusive overlap test for boxes given by center and full size
#[inline]
pub fn aabb_overlap(c1: Vec2, s1: Vec2, c2: Vec2, s2: Vec2) -> bool {
    (c1.x - c2.x).abs() <= (s1.x + s2.x) / 2.0 && (c1.y - c2.y).abs() <= (s1.y + s2.y) / 2.0
}

/// Whether two distinct entities overlap
pub fn colliding(a: &Entity, b: &Entity) -> bool {
    a.id != b.id && aabb_overlap(a.center, a.size, b.center, b.size)
}

/// Index pairs `(i, j)` with `i < j` that overlap, in scan order
pub fn colliding_pairs(entities: &[Entity]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..entities.len() {
        for j in (i + 1)..entities.len() {
            if colliding(&entities[i], &entities[j]) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Mutable access to two distinct entries
pub(super) fn pair_mut(entities: &mut [Entity], i: usize, j: usize) -> (&mut Entity, &mut Entity) {
    debug_assert!(i < j);
    let (left, right) = entities.split_at_mut(j);
    (&mut left[i], &mut right[0])
}
