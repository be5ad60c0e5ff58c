use platform_gunner::constants::*;
use platform_gunner::entities::*;
use platform_gunner::level::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Test helpers ──────────────────────────────────────────────────────────────

struct CountingUi {
    refreshes: u32,
}

impl UiSurface for CountingUi {
    fn refresh(&mut self, _state: &GameState) {
        self.refreshes += 1;
    }
}

fn counting_ui() -> CountingUi {
    CountingUi { refreshes: 0 }
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ── load_level(1) end-to-end ──────────────────────────────────────────────────

#[test]
fn first_level_population() {
    let mut s = GameState::new(800.0, 600.0);
    load_level(&mut s, 1, &mut seeded_rng(), &mut counting_ui());

    assert_eq!(s.enemies.len(), 3);
    for e in &s.enemies {
        assert_eq!(e.health, 30);
        assert_eq!(e.speed, 1.5);
    }
    assert_eq!(s.coins.len(), 20);
    assert_eq!(s.platforms.len(), 16); // 1 ground + 15 random

    assert_eq!(s.player.x, 100.0);
    assert_eq!(s.player.y, 300.0);
    assert_eq!(s.player.velocity_x, 0.0);
    assert_eq!(s.player.velocity_y, 0.0);
    assert_eq!(s.player.health, 100);

    assert_eq!(s.level, 1);
    assert_eq!(s.status, GameStatus::Running);
    assert_eq!(s.camera.x, 0.0);
}

#[test]
fn ground_platform_spans_the_level() {
    let mut s = GameState::new(800.0, 600.0);
    load_level(&mut s, 1, &mut seeded_rng(), &mut counting_ui());
    let ground = &s.platforms[0];
    assert_eq!(ground.x, 0.0);
    assert_eq!(ground.width, LEVEL_WIDTH);
    assert_eq!(ground.y, 600.0 - GROUND_THICKNESS);
    assert_eq!(ground.height, GROUND_THICKNESS);
}

#[test]
fn random_platforms_stay_within_safe_margins() {
    let mut s = GameState::new(800.0, 600.0);
    load_level(&mut s, 1, &mut seeded_rng(), &mut counting_ui());
    for pf in &s.platforms[1..] {
        assert!(pf.x >= 300.0 && pf.x < LEVEL_WIDTH - 300.0);
        assert!(pf.y >= 200.0 && pf.y < 500.0);
        assert!(pf.width >= 100.0 && pf.width < 250.0);
        assert_eq!(pf.height, PLATFORM_THICKNESS);
    }
}

#[test]
fn coins_stay_within_safe_margins() {
    let mut s = GameState::new(800.0, 600.0);
    load_level(&mut s, 1, &mut seeded_rng(), &mut counting_ui());
    for c in &s.coins {
        assert!(c.x >= 100.0 && c.x < LEVEL_WIDTH - 100.0);
        assert!(c.y >= 100.0 && c.y < 500.0);
        assert!(!c.collected);
    }
}

#[test]
fn enemies_spawn_at_fixed_spacing() {
    let mut s = GameState::new(800.0, 600.0);
    load_level(&mut s, 1, &mut seeded_rng(), &mut counting_ui());
    for (i, e) in s.enemies.iter().enumerate() {
        assert_eq!(e.x, ENEMY_SPAWN_X + i as f32 * ENEMY_SPACING);
        assert_eq!(e.y, ENEMY_SPAWN_Y);
        assert!(e.direction == 1.0 || e.direction == -1.0);
    }
}

// ── Difficulty scaling ────────────────────────────────────────────────────────

#[test]
fn second_level_scales_the_opposition() {
    let mut s = GameState::new(800.0, 600.0);
    load_level(&mut s, 2, &mut seeded_rng(), &mut counting_ui());
    assert_eq!(s.enemies.len(), 6);
    for e in &s.enemies {
        assert_eq!(e.health, 60);
        assert_eq!(e.speed, 2.0);
    }
}

// ── Progression & persistence ─────────────────────────────────────────────────

#[test]
fn reload_clears_dynamic_stores() {
    let mut s = GameState::new(800.0, 600.0);
    load_level(&mut s, 1, &mut seeded_rng(), &mut counting_ui());
    s.bullets.push(Bullet {
        x: 400.0, y: 300.0, velocity_x: 10.0, velocity_y: 0.0,
        size: BULLET_SIZE, damage: 10,
    });
    s.camera.x = 900.0;
    s.status = GameStatus::LevelComplete;

    load_level(&mut s, 1, &mut seeded_rng(), &mut counting_ui());
    assert!(s.bullets.is_empty());
    assert_eq!(s.camera.x, 0.0);
    assert_eq!(s.status, GameStatus::Running);
}

#[test]
fn advancing_keeps_the_player_economy() {
    let mut s = GameState::new(800.0, 600.0);
    load_level(&mut s, 1, &mut seeded_rng(), &mut counting_ui());
    s.player.coins = 42;
    s.player.weapons.push(Weapon::Shotgun);
    s.player.current_weapon = Weapon::Shotgun;
    *s.player.ammo.get_mut(Weapon::Shotgun) = Ammo::Count(7);
    s.player.health = 13;
    s.player.x = 2950.0;

    advance_level(&mut s, &mut seeded_rng(), &mut counting_ui());
    assert_eq!(s.level, 2);
    assert_eq!(s.player.coins, 42);
    assert!(s.player.owns(Weapon::Shotgun));
    assert_eq!(*s.player.ammo.get(Weapon::Shotgun), Ammo::Count(7));
    // But spawn state is restored
    assert_eq!(s.player.health, s.player.max_health);
    assert_eq!(s.player.x, PLAYER_SPAWN_X);
    assert_eq!(s.player.y, PLAYER_SPAWN_Y);
}

#[test]
fn new_game_starts_at_level_one() {
    let s = new_game(800.0, 600.0, &mut seeded_rng(), &mut counting_ui());
    assert_eq!(s.level, 1);
    assert_eq!(s.status, GameStatus::Running);
    assert_eq!(s.player.coins, 0);
    assert_eq!(s.player.weapons, vec![Weapon::Pistol]);
}

#[test]
fn load_notifies_the_ui_surface() {
    let mut s = GameState::new(800.0, 600.0);
    let mut ui = counting_ui();
    load_level(&mut s, 1, &mut seeded_rng(), &mut ui);
    assert_eq!(ui.refreshes, 1);
}
