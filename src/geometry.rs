//! Axis-aligned bounding-box overlap test.

/// True iff the two rectangles intersect with non-zero overlap on both
/// axes. Strict inequalities: rectangles that merely touch edge-to-edge
/// do NOT collide.
pub fn overlaps(
    ax: f32,
    ay: f32,
    aw: f32,
    ah: f32,
    bx: f32,
    by: f32,
    bw: f32,
    bh: f32,
) -> bool {
    ax < bx + bw && ax + aw > bx && ay < by + bh && ay + ah > by
}
