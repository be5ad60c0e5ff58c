//! Tuning constants for the whole simulation.
//!
//! World units are abstract pixels; velocities are units per tick.

// ── Physics ──────────────────────────────────────────────────────────────────

pub const GRAVITY: f32 = 0.5;
/// Exponential horizontal decay per tick. Never reaches exactly zero;
/// contact resolution snaps velocity on collision instead.
pub const FRICTION: f32 = 0.9;
pub const PLAYER_SPEED: f32 = 5.0;
pub const JUMP_FORCE: f32 = -12.0;
/// Unsupported enemies sink at twice gravity, as a flat per-tick rate.
pub const ENEMY_FALL_RATE: f32 = GRAVITY * 2.0;

// ── Entity sizes ─────────────────────────────────────────────────────────────

pub const PLAYER_WIDTH: f32 = 40.0;
pub const PLAYER_HEIGHT: f32 = 60.0;
pub const ENEMY_WIDTH: f32 = 40.0;
pub const ENEMY_HEIGHT: f32 = 40.0;
pub const BULLET_SIZE: f32 = 5.0;
pub const COIN_SIZE: f32 = 15.0;
pub const PLATFORM_THICKNESS: f32 = 20.0;
pub const GROUND_THICKNESS: f32 = 50.0;

// ── World & camera ───────────────────────────────────────────────────────────

pub const LEVEL_WIDTH: f32 = 3000.0;
/// Camera starts tracking once the player passes this world-x.
pub const SCROLL_THRESHOLD: f32 = 400.0;
/// Level-complete requires the player within this margin of the right edge.
pub const LEVEL_END_MARGIN: f32 = 100.0;
pub const VIEW_WIDTH: f32 = 800.0;
pub const VIEW_HEIGHT: f32 = 600.0;

// ── Combat & rewards ─────────────────────────────────────────────────────────

pub const BULLET_SPEED: f32 = 10.0;
pub const MAX_HEALTH: i32 = 100;
/// Deducted every tick an enemy overlaps the player.
pub const CONTACT_DAMAGE: i32 = 1;
pub const COIN_VALUE: u32 = 5;
pub const KILL_BOUNTY: u32 = 10;

// ── Collision tolerances ─────────────────────────────────────────────────────

/// A falling player whose feet are within this many units above a
/// platform top lands on it; absorbs one tick of gravity overshoot.
pub const LANDING_TOLERANCE: f32 = 10.0;
/// Enemies snap to a platform top when their feet are within this band.
pub const ENEMY_SNAP_TOLERANCE: f32 = 5.0;

// ── Level generation ─────────────────────────────────────────────────────────

pub const PLAYER_SPAWN_X: f32 = 100.0;
pub const PLAYER_SPAWN_Y: f32 = 300.0;
pub const RANDOM_PLATFORM_COUNT: usize = 15;
pub const COIN_COUNT: usize = 20;
pub const ENEMIES_PER_LEVEL: u32 = 3;
pub const ENEMY_SPAWN_X: f32 = 500.0;
pub const ENEMY_SPACING: f32 = 200.0;
pub const ENEMY_SPAWN_Y: f32 = 400.0;
pub const ENEMY_BASE_HEALTH: i32 = 30;
