//! The per-tick simulation: physics, collision resolution, camera, and
//! the orchestrating `tick`.
//!
//! Every function takes the world by explicit `&mut GameState`; nothing
//! here touches I/O. UI notifications go through the injected
//! `UiSurface` collaborator.

use crate::constants::{
    BULLET_SIZE, BULLET_SPEED, COIN_VALUE, CONTACT_DAMAGE, ENEMY_FALL_RATE,
    ENEMY_SNAP_TOLERANCE, FRICTION, GRAVITY, GROUND_THICKNESS, JUMP_FORCE, KILL_BOUNTY,
    LANDING_TOLERANCE, LEVEL_END_MARGIN, LEVEL_WIDTH, PLAYER_HEIGHT, PLAYER_SPEED,
    PLAYER_WIDTH, SCROLL_THRESHOLD,
};
use crate::entities::{Bullet, GameState, GameStatus, UiSurface, Weapon};
use crate::geometry::overlaps;

// ── Input-driven transitions ──────────────────────────────────────────────────

pub fn move_left(state: &mut GameState) {
    state.player.velocity_x = -PLAYER_SPEED;
    state.player.facing_right = false;
}

pub fn move_right(state: &mut GameState) {
    state.player.velocity_x = PLAYER_SPEED;
    state.player.facing_right = true;
}

/// Jump only from the ground; air jumps are not a thing here.
pub fn jump(state: &mut GameState) {
    let p = &mut state.player;
    if !p.is_jumping {
        p.velocity_y = JUMP_FORCE;
        p.is_jumping = true;
    }
}

/// Fire the current weapon: respects the shoot cooldown and the ammo
/// pouch, then spawns bullet(s) from the player's facing edge. The
/// shotgun fires a three-way spread.
pub fn shoot(state: &mut GameState) {
    if state.status != GameStatus::Running || state.player.shoot_cooldown > 0 {
        return;
    }
    let weapon = state.player.current_weapon;
    if !state.player.ammo.get_mut(weapon).take_round() {
        return;
    }

    let p = &state.player;
    let dir = if p.facing_right { 1.0 } else { -1.0 };
    let x = if p.facing_right {
        p.x + PLAYER_WIDTH
    } else {
        p.x - BULLET_SIZE
    };
    let y = p.y + PLAYER_HEIGHT / 2.0 - BULLET_SIZE / 2.0;

    let spreads: &[f32] = match weapon {
        Weapon::Shotgun => &[-1.5, 0.0, 1.5],
        _ => &[0.0],
    };
    for &vy in spreads {
        state.bullets.push(Bullet {
            x,
            y,
            velocity_x: dir * BULLET_SPEED,
            velocity_y: vy,
            size: BULLET_SIZE,
            damage: weapon.damage(),
        });
    }
    state.player.shoot_cooldown = weapon.cooldown();
}

/// Switch to a weapon the player already owns; otherwise a no-op.
pub fn switch_weapon(state: &mut GameState, weapon: Weapon) {
    if state.player.owns(weapon) {
        state.player.current_weapon = weapon;
    }
}

/// Pause into the shop or resume out of it. Terminal states stay put.
pub fn toggle_shop(state: &mut GameState) {
    state.status = match state.status {
        GameStatus::Running => GameStatus::ShopOpen,
        GameStatus::ShopOpen => GameStatus::Running,
        other => other,
    };
}

/// Buy (or refill) a weapon while the shop is open. Returns whether the
/// purchase went through.
pub fn buy_weapon(state: &mut GameState, weapon: Weapon) -> bool {
    if state.status != GameStatus::ShopOpen {
        return false;
    }
    let price = weapon.price();
    if state.player.coins < price {
        return false;
    }
    state.player.coins -= price;
    if !state.player.owns(weapon) {
        state.player.weapons.push(weapon);
    }
    *state.player.ammo.get_mut(weapon) = weapon.starting_ammo();
    state.player.current_weapon = weapon;
    true
}

// ── Physics & player collision resolution ─────────────────────────────────────

/// Integrate player physics, then resolve platform contacts, the ground
/// clamp, and coin pickups.
pub fn update_player(state: &mut GameState, ui: &mut impl UiSurface) {
    let p = &mut state.player;
    p.velocity_y += GRAVITY;
    p.velocity_x *= FRICTION;
    p.x += p.velocity_x;
    p.y += p.velocity_y;

    // Directional platform resolution, first matching rule per platform.
    // Vertical cases win so landings stay clean; the tolerance absorbs
    // one tick of gravity overshoot.
    for i in 0..state.platforms.len() {
        let pf = state.platforms[i];
        let p = &mut state.player;
        if !overlaps(
            p.x, p.y, PLAYER_WIDTH, PLAYER_HEIGHT, pf.x, pf.y, pf.width, pf.height,
        ) {
            continue;
        }
        if p.velocity_y > 0.0 && p.y + PLAYER_HEIGHT < pf.y + LANDING_TOLERANCE {
            p.y = pf.y - PLAYER_HEIGHT;
            p.velocity_y = 0.0;
            p.is_jumping = false;
        } else if p.velocity_y < 0.0 {
            p.y = pf.y + pf.height;
            p.velocity_y = 0.0;
        } else if p.velocity_x > 0.0 {
            p.x = pf.x - PLAYER_WIDTH;
            p.velocity_x = 0.0;
        } else if p.velocity_x < 0.0 {
            p.x = pf.x + pf.width;
            p.velocity_x = 0.0;
        }
    }

    // World floor: unconditional bottom clamp, whatever the velocity sign.
    let floor = state.view_height - GROUND_THICKNESS;
    let p = &mut state.player;
    if p.y + PLAYER_HEIGHT > floor {
        p.y = floor - PLAYER_HEIGHT;
        p.velocity_y = 0.0;
        p.is_jumping = false;
    }

    // Coin pickup; collected coins stay in the store but never re-award.
    let (px, py) = (state.player.x, state.player.y);
    for i in 0..state.coins.len() {
        let c = state.coins[i];
        if c.collected {
            continue;
        }
        if overlaps(px, py, PLAYER_WIDTH, PLAYER_HEIGHT, c.x, c.y, c.width, c.height) {
            state.coins[i].collected = true;
            state.player.coins += COIN_VALUE;
            ui.refresh(state);
        }
    }
}

// ── Camera ────────────────────────────────────────────────────────────────────

/// Track `player.x − threshold`, clamped to the level bounds. Produces
/// three zones: fixed start, tracking middle, fixed end.
pub fn update_camera(state: &mut GameState) {
    let max = LEVEL_WIDTH - state.view_width;
    state.camera.x = (state.player.x - SCROLL_THRESHOLD).clamp(0.0, max);
}

// ── Bullets & enemies ─────────────────────────────────────────────────────────

/// Straight-line bullet travel; prune anything outside the camera window
/// or the world's vertical extent.
pub fn update_bullets(state: &mut GameState) {
    let cam = state.camera.x;
    let view_w = state.view_width;
    let view_h = state.view_height;
    state.bullets.retain_mut(|b| {
        b.x += b.velocity_x;
        b.y += b.velocity_y;
        b.x >= cam && b.x <= cam + view_w && b.y >= 0.0 && b.y <= view_h
    });
}

/// Patrol movement: flip at the world edges, ride platform tops when the
/// feet are within the snap band, otherwise sink at a flat fall rate.
pub fn update_enemies(state: &mut GameState) {
    for e in state.enemies.iter_mut() {
        e.x += e.speed * e.direction;
        if e.x < 0.0 || e.x + e.width > LEVEL_WIDTH {
            e.direction = -e.direction;
        }

        let mut on_platform = false;
        for pf in &state.platforms {
            if e.x + e.width > pf.x
                && e.x < pf.x + pf.width
                && e.y + e.height <= pf.y + ENEMY_SNAP_TOLERANCE
                && e.y + e.height >= pf.y - ENEMY_SNAP_TOLERANCE
            {
                e.y = pf.y - e.height;
                on_platform = true;
            }
        }
        if !on_platform {
            e.y += ENEMY_FALL_RATE;
        }
    }
}

// ── Combat resolution ─────────────────────────────────────────────────────────

/// Bullet-vs-enemy and player-vs-enemy contacts.
///
/// Bullets scan newest-first so in-place removal never shifts an index
/// that is still to be visited; each bullet spends itself on the first
/// enemy it overlaps and never reaches a second one in the same tick.
pub fn resolve_combat(state: &mut GameState, ui: &mut impl UiSurface) {
    let mut bi = state.bullets.len();
    while bi > 0 {
        bi -= 1;
        let mut ei = state.enemies.len();
        while ei > 0 {
            ei -= 1;
            let b = &state.bullets[bi];
            let e = &state.enemies[ei];
            if overlaps(b.x, b.y, b.size, b.size, e.x, e.y, e.width, e.height) {
                let bullet = state.bullets.remove(bi);
                let enemy = &mut state.enemies[ei];
                enemy.health -= bullet.damage;
                if enemy.health <= 0 {
                    state.enemies.remove(ei);
                    state.player.coins += KILL_BOUNTY;
                    ui.refresh(state);
                }
                break;
            }
        }
    }

    // Contact damage is continuous: every overlapping enemy costs health
    // every tick, clamped at zero.
    let (px, py) = (state.player.x, state.player.y);
    let touching = state
        .enemies
        .iter()
        .filter(|e| overlaps(px, py, PLAYER_WIDTH, PLAYER_HEIGHT, e.x, e.y, e.width, e.height))
        .count();
    if touching > 0 {
        let p = &mut state.player;
        p.health = (p.health - CONTACT_DAMAGE * touching as i32).max(0);
        if p.health == 0 {
            state.status = GameStatus::GameOver;
        }
        ui.refresh(state);
    }
}

// ── Per-frame tick ────────────────────────────────────────────────────────────

/// Advance the simulation by one tick. Terminal and paused states skip
/// simulation entirely.
pub fn tick(state: &mut GameState, ui: &mut impl UiSurface) {
    if state.status != GameStatus::Running {
        return;
    }

    update_player(state, ui);
    update_camera(state);
    update_bullets(state);
    update_enemies(state);
    resolve_combat(state, ui);

    // Both conditions together, and only together: past the end marker
    // with every enemy cleared.
    if state.status == GameStatus::Running
        && state.player.x > LEVEL_WIDTH - LEVEL_END_MARGIN
        && state.enemies.is_empty()
    {
        state.status = GameStatus::LevelComplete;
    }

    if state.player.shoot_cooldown > 0 {
        state.player.shoot_cooldown -= 1;
    }
}
