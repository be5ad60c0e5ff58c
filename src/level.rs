//! Level lifecycle: procedural population and progression.
//!
//! All randomness comes through an injected `Rng` handle so callers
//! control determinism (tests seed a `StdRng`).

use rand::Rng;

use crate::constants::{
    COIN_COUNT, COIN_SIZE, ENEMIES_PER_LEVEL, ENEMY_BASE_HEALTH, ENEMY_HEIGHT, ENEMY_SPACING,
    ENEMY_SPAWN_X, ENEMY_SPAWN_Y, ENEMY_WIDTH, GROUND_THICKNESS, LEVEL_WIDTH,
    PLATFORM_THICKNESS, PLAYER_SPAWN_X, PLAYER_SPAWN_Y, RANDOM_PLATFORM_COUNT,
};
use crate::entities::{Camera, Coin, Enemy, GameState, GameStatus, Platform, UiSurface};

/// Reset the world for level `n`: player back at spawn with full health,
/// dynamic stores cleared, geometry and population regenerated.
///
/// Coins, owned weapons and remaining ammo persist across levels; they
/// are the player's economy, not level state.
pub fn load_level(
    state: &mut GameState,
    level: u32,
    rng: &mut impl Rng,
    ui: &mut impl UiSurface,
) {
    let p = &mut state.player;
    p.x = PLAYER_SPAWN_X;
    p.y = PLAYER_SPAWN_Y;
    p.velocity_x = 0.0;
    p.velocity_y = 0.0;
    p.health = p.max_health;
    p.is_jumping = false;
    p.facing_right = true;
    p.shoot_cooldown = 0;

    state.enemies.clear();
    state.bullets.clear();
    state.platforms.clear();
    state.coins.clear();
    state.camera = Camera::default();
    state.level = level;
    state.status = GameStatus::Running;

    // Ground spans the full level width.
    state.platforms.push(Platform {
        x: 0.0,
        y: state.view_height - GROUND_THICKNESS,
        width: LEVEL_WIDTH,
        height: GROUND_THICKNESS,
    });

    for _ in 0..RANDOM_PLATFORM_COUNT {
        state.platforms.push(Platform {
            x: rng.gen_range(300.0..LEVEL_WIDTH - 300.0),
            y: rng.gen_range(200.0..500.0),
            width: rng.gen_range(100.0..250.0),
            height: PLATFORM_THICKNESS,
        });
    }

    for _ in 0..COIN_COUNT {
        state.coins.push(Coin {
            x: rng.gen_range(100.0..LEVEL_WIDTH - 100.0),
            y: rng.gen_range(100.0..state.view_height - 100.0),
            width: COIN_SIZE,
            height: COIN_SIZE,
            collected: false,
        });
    }

    // Fixed spacing, scaling health and speed; patrol direction is random.
    for i in 0..ENEMIES_PER_LEVEL * level {
        state.enemies.push(Enemy {
            x: ENEMY_SPAWN_X + i as f32 * ENEMY_SPACING,
            y: ENEMY_SPAWN_Y,
            width: ENEMY_WIDTH,
            height: ENEMY_HEIGHT,
            health: ENEMY_BASE_HEALTH * level as i32,
            speed: 1.0 + 0.5 * level as f32,
            direction: if rng.gen_bool(0.5) { 1.0 } else { -1.0 },
        });
    }

    ui.refresh(state);
}

/// Move on to the next level after a `LevelComplete`.
pub fn advance_level(state: &mut GameState, rng: &mut impl Rng, ui: &mut impl UiSurface) {
    let next = state.level + 1;
    load_level(state, next, rng, ui);
}

/// A brand-new game: fresh player, level 1.
pub fn new_game(
    view_width: f32,
    view_height: f32,
    rng: &mut impl Rng,
    ui: &mut impl UiSurface,
) -> GameState {
    let mut state = GameState::new(view_width, view_height);
    load_level(&mut state, 1, rng, ui);
    state
}
