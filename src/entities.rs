//! All game entity types — pure data, no per-tick logic.

use crate::constants::{MAX_HEALTH, PLAYER_SPAWN_X, PLAYER_SPAWN_Y, VIEW_HEIGHT, VIEW_WIDTH};

// ── Weapons & ammo ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Weapon {
    Pistol,
    Shotgun,
    Rifle,
}

impl Weapon {
    pub const ALL: [Weapon; 3] = [Weapon::Pistol, Weapon::Shotgun, Weapon::Rifle];

    pub fn name(&self) -> &'static str {
        match self {
            Weapon::Pistol => "Pistol",
            Weapon::Shotgun => "Shotgun",
            Weapon::Rifle => "Rifle",
        }
    }

    /// Damage carried by each bullet this weapon fires.
    pub fn damage(&self) -> i32 {
        match self {
            Weapon::Pistol => 10,
            Weapon::Shotgun => 12,
            Weapon::Rifle => 20,
        }
    }

    /// Ticks the player must wait between shots.
    pub fn cooldown(&self) -> u32 {
        match self {
            Weapon::Pistol => 15,
            Weapon::Shotgun => 30,
            Weapon::Rifle => 10,
        }
    }

    /// Shop price in coins. Buying an owned weapon refills its ammo.
    pub fn price(&self) -> u32 {
        match self {
            Weapon::Pistol => 0,
            Weapon::Shotgun => 50,
            Weapon::Rifle => 100,
        }
    }

    pub fn starting_ammo(&self) -> Ammo {
        match self {
            Weapon::Pistol => Ammo::Unlimited,
            Weapon::Shotgun => Ammo::Count(20),
            Weapon::Rifle => Ammo::Count(30),
        }
    }
}

/// Per-weapon ammunition. The pistol never runs dry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ammo {
    Unlimited,
    Count(u32),
}

impl Ammo {
    pub fn has_rounds(&self) -> bool {
        match self {
            Ammo::Unlimited => true,
            Ammo::Count(n) => *n > 0,
        }
    }

    /// Consume one round. Returns false (and leaves the pouch untouched)
    /// when empty.
    pub fn take_round(&mut self) -> bool {
        match self {
            Ammo::Unlimited => true,
            Ammo::Count(0) => false,
            Ammo::Count(n) => {
                *n -= 1;
                true
            }
        }
    }
}

/// One ammo slot per weapon, whether owned yet or not.
#[derive(Clone, Debug)]
pub struct AmmoPouch {
    pistol: Ammo,
    shotgun: Ammo,
    rifle: Ammo,
}

impl AmmoPouch {
    pub fn new() -> Self {
        AmmoPouch {
            pistol: Weapon::Pistol.starting_ammo(),
            shotgun: Weapon::Shotgun.starting_ammo(),
            rifle: Weapon::Rifle.starting_ammo(),
        }
    }

    pub fn get(&self, weapon: Weapon) -> &Ammo {
        match weapon {
            Weapon::Pistol => &self.pistol,
            Weapon::Shotgun => &self.shotgun,
            Weapon::Rifle => &self.rifle,
        }
    }

    pub fn get_mut(&mut self, weapon: Weapon) -> &mut Ammo {
        match weapon {
            Weapon::Pistol => &mut self.pistol,
            Weapon::Shotgun => &mut self.shotgun,
            Weapon::Rifle => &mut self.rifle,
        }
    }
}

impl Default for AmmoPouch {
    fn default() -> Self {
        Self::new()
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
    pub health: i32,
    pub max_health: i32,
    pub coins: u32,
    pub weapons: Vec<Weapon>,
    pub current_weapon: Weapon,
    pub ammo: AmmoPouch,
    pub facing_right: bool,
    pub is_jumping: bool,
    pub shoot_cooldown: u32,
}

impl Player {
    /// A fresh player at the level spawn point, pistol only.
    pub fn spawn() -> Self {
        Player {
            x: PLAYER_SPAWN_X,
            y: PLAYER_SPAWN_Y,
            velocity_x: 0.0,
            velocity_y: 0.0,
            health: MAX_HEALTH,
            max_health: MAX_HEALTH,
            coins: 0,
            weapons: vec![Weapon::Pistol],
            current_weapon: Weapon::Pistol,
            ammo: AmmoPouch::new(),
            facing_right: true,
            is_jumping: false,
            shoot_cooldown: 0,
        }
    }

    pub fn owns(&self, weapon: Weapon) -> bool {
        self.weapons.contains(&weapon)
    }
}

// ── World entities ────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub health: i32,
    pub speed: f32,
    /// +1.0 walking right, -1.0 walking left.
    pub direction: f32,
}

#[derive(Clone, Debug)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
    pub size: f32,
    pub damage: i32,
}

#[derive(Clone, Copy, Debug)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Collected coins stay in the store with the flag set, so the renderer
/// can skip them without the store shifting under it.
#[derive(Clone, Copy, Debug)]
pub struct Coin {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub collected: bool,
}

/// Horizontal scroll offset; vertical is fixed at zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct Camera {
    pub x: f32,
}

// ── Game status ───────────────────────────────────────────────────────────────

/// Exactly one of these holds at a time. `GameOver` and `LevelComplete`
/// are terminal until an external level load; `ShopOpen` merely pauses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver,
    LevelComplete,
    ShopOpen,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire world state, owned by the frame loop and handed to every
/// component by explicit mutable borrow.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
    pub camera: Camera,
    pub level: u32,
    pub status: GameStatus,
    /// Viewport extent in world units.
    pub view_width: f32,
    pub view_height: f32,
}

impl GameState {
    /// An empty world; `level::load_level` populates it.
    pub fn new(view_width: f32, view_height: f32) -> Self {
        GameState {
            player: Player::spawn(),
            enemies: Vec::new(),
            bullets: Vec::new(),
            platforms: Vec::new(),
            coins: Vec::new(),
            camera: Camera::default(),
            level: 1,
            status: GameStatus::Running,
            view_width,
            view_height,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(VIEW_WIDTH, VIEW_HEIGHT)
    }
}

// ── UI collaborator ───────────────────────────────────────────────────────────

/// Injected UI surface. The core notifies it on discrete events (coin
/// pickup, player damage, enemy kill, level load); no core logic depends
/// on what the implementation does with the call.
pub trait UiSurface {
    fn refresh(&mut self, state: &GameState);
}

/// For shells whose HUD is redrawn from world state every frame anyway.
pub struct NullUi;

impl UiSurface for NullUi {
    fn refresh(&mut self, _state: &GameState) {}
}
