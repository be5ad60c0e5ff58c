use platform_gunner::entities::*;

// ── Ammo ──────────────────────────────────────────────────────────────────────

#[test]
fn unlimited_ammo_never_runs_dry() {
    let mut ammo = Ammo::Unlimited;
    for _ in 0..1000 {
        assert!(ammo.take_round());
    }
    assert_eq!(ammo, Ammo::Unlimited);
}

#[test]
fn counted_ammo_depletes_and_blocks() {
    let mut ammo = Ammo::Count(2);
    assert!(ammo.take_round());
    assert!(ammo.take_round());
    assert!(!ammo.take_round()); // empty: refused, stays at zero
    assert_eq!(ammo, Ammo::Count(0));
}

#[test]
fn has_rounds_matches_take_round() {
    assert!(Ammo::Unlimited.has_rounds());
    assert!(Ammo::Count(1).has_rounds());
    assert!(!Ammo::Count(0).has_rounds());
}

// ── Weapon tables ─────────────────────────────────────────────────────────────

#[test]
fn pistol_is_the_free_fallback() {
    assert_eq!(Weapon::Pistol.price(), 0);
    assert_eq!(Weapon::Pistol.starting_ammo(), Ammo::Unlimited);
}

#[test]
fn bought_weapons_carry_finite_ammo() {
    assert_eq!(Weapon::Shotgun.starting_ammo(), Ammo::Count(20));
    assert_eq!(Weapon::Rifle.starting_ammo(), Ammo::Count(30));
    assert!(Weapon::Shotgun.price() > 0);
    assert!(Weapon::Rifle.price() > Weapon::Shotgun.price());
}

#[test]
fn ammo_pouch_routes_per_weapon() {
    let mut pouch = AmmoPouch::new();
    *pouch.get_mut(Weapon::Rifle) = Ammo::Count(5);
    assert_eq!(*pouch.get(Weapon::Rifle), Ammo::Count(5));
    // Other slots untouched
    assert_eq!(*pouch.get(Weapon::Pistol), Ammo::Unlimited);
    assert_eq!(*pouch.get(Weapon::Shotgun), Ammo::Count(20));
}

// ── Player ────────────────────────────────────────────────────────────────────

#[test]
fn spawned_player_owns_only_the_pistol() {
    let p = Player::spawn();
    assert!(p.owns(Weapon::Pistol));
    assert!(!p.owns(Weapon::Shotgun));
    assert!(!p.owns(Weapon::Rifle));
    assert_eq!(p.current_weapon, Weapon::Pistol);
    assert_eq!(p.health, p.max_health);
    assert_eq!(p.coins, 0);
    assert!(!p.is_jumping);
    assert!(p.facing_right);
}

// ── Game state ────────────────────────────────────────────────────────────────

#[test]
fn game_state_clone_is_independent() {
    let original = GameState::new(800.0, 600.0);
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.x = 99.0;
    cloned.player.coins = 999;
    cloned.enemies.push(Enemy {
        x: 5.0,
        y: 5.0,
        width: 40.0,
        height: 40.0,
        health: 30,
        speed: 1.5,
        direction: 1.0,
    });
    cloned.status = GameStatus::GameOver;

    assert_eq!(original.player.x, 100.0);
    assert_eq!(original.player.coins, 0);
    assert!(original.enemies.is_empty());
    assert_eq!(original.status, GameStatus::Running);
}

#[test]
fn status_equality() {
    assert_eq!(GameStatus::Running, GameStatus::Running);
    assert_ne!(GameStatus::Running, GameStatus::GameOver);
    assert_ne!(GameStatus::LevelComplete, GameStatus::ShopOpen);
}
