//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state. No game logic is performed; this module only projects
//! world coordinates through the camera onto terminal cells.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::constants::{LEVEL_WIDTH, PLAYER_HEIGHT, PLAYER_WIDTH};
use crate::entities::{Ammo, GameState, GameStatus, Weapon};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_PLATFORM: Color = Color::DarkYellow;
const C_GROUND: Color = Color::DarkGreen;
const C_COIN: Color = Color::Yellow;
const C_PLAYER: Color = Color::Red;
const C_ENEMY: Color = Color::Magenta;
const C_BULLET: Color = Color::Cyan;
const C_HUD: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

// ── World-to-cell projection ──────────────────────────────────────────────────

/// Maps world coordinates into the terminal grid. Row 0 is the HUD and
/// the last row is the controls hint; the play area spans the rest.
struct Projection {
    cols: u16,
    rows: u16,
    cam_x: f32,
    view_w: f32,
    view_h: f32,
}

impl Projection {
    fn new(state: &GameState, cols: u16, rows: u16) -> Self {
        Projection {
            cols: cols.max(2),
            rows: rows.max(4),
            cam_x: state.camera.x,
            view_w: state.view_width,
            view_h: state.view_height,
        }
    }

    fn play_rows(&self) -> u16 {
        self.rows - 2
    }

    /// Terminal row for a world y, or None when above/below the world.
    fn row_of(&self, wy: f32) -> Option<u16> {
        if wy < 0.0 || wy >= self.view_h {
            return None;
        }
        let row = 1 + (wy / self.view_h * self.play_rows() as f32) as u16;
        Some(row.min(self.rows - 2))
    }

    /// Clipped column span `[start, end)` for a world-x extent, or None
    /// when the extent lies fully outside the camera window.
    fn col_span(&self, wx: f32, width: f32) -> Option<(u16, u16)> {
        let left = wx - self.cam_x;
        let right = left + width;
        if right <= 0.0 || left >= self.view_w {
            return None;
        }
        let scale = self.cols as f32 / self.view_w;
        let start = (left.max(0.0) * scale) as u16;
        let end = ((right.min(self.view_w) * scale) as u16).max(start + 1);
        Some((start.min(self.cols - 1), end.min(self.cols)))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let proj = Projection::new(state, cols, rows);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_platforms(out, state, &proj)?;
    draw_coins(out, state, &proj)?;
    draw_enemies(out, state, &proj)?;
    draw_bullets(out, state, &proj)?;
    draw_player(out, state, &proj)?;
    draw_hud(out, state)?;
    draw_controls_hint(out, &proj)?;

    match state.status {
        GameStatus::GameOver => draw_game_over(out, state, &proj)?,
        GameStatus::LevelComplete => draw_level_complete(out, state, &proj)?,
        GameStatus::ShopOpen => draw_shop(out, state, &proj)?,
        GameStatus::Running => {}
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, proj.rows - 1))?;
    out.flush()?;
    Ok(())
}

// ── Static geometry ───────────────────────────────────────────────────────────

fn draw_platforms<W: Write>(
    out: &mut W,
    state: &GameState,
    proj: &Projection,
) -> std::io::Result<()> {
    for pf in &state.platforms {
        let Some((start, end)) = proj.col_span(pf.x, pf.width) else {
            continue;
        };
        let Some(row) = proj.row_of(pf.y) else {
            continue;
        };
        let ground = pf.width >= LEVEL_WIDTH;
        out.queue(style::SetForegroundColor(if ground { C_GROUND } else { C_PLATFORM }))?;
        // The ground slab fills down to the bottom of the play area.
        let depth = if ground { proj.rows - 1 - row } else { 1 };
        for d in 0..depth.max(1) {
            out.queue(cursor::MoveTo(start, row + d))?;
            out.queue(Print("▀".repeat((end - start) as usize)))?;
        }
    }
    Ok(())
}

fn draw_coins<W: Write>(
    out: &mut W,
    state: &GameState,
    proj: &Projection,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_COIN))?;
    for coin in &state.coins {
        if coin.collected {
            continue;
        }
        let Some((col, _)) = proj.col_span(coin.x, coin.width) else {
            continue;
        };
        if let Some(row) = proj.row_of(coin.y) {
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(Print("●"))?;
        }
    }
    Ok(())
}

// ── Actors ────────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(
    out: &mut W,
    state: &GameState,
    proj: &Projection,
) -> std::io::Result<()> {
    let p = &state.player;
    let Some((start, end)) = proj.col_span(p.x, PLAYER_WIDTH) else {
        return Ok(());
    };
    let top = match proj.row_of(p.y) {
        Some(r) => r,
        None => return Ok(()),
    };
    let bottom = proj.row_of(p.y + PLAYER_HEIGHT - 1.0).unwrap_or(top);

    out.queue(style::SetForegroundColor(C_PLAYER))?;
    for row in top..=bottom {
        out.queue(cursor::MoveTo(start, row))?;
        out.queue(Print("█".repeat((end - start) as usize)))?;
    }

    // An eye marks the facing direction, like the sprite's gun arm.
    out.queue(style::SetForegroundColor(C_HUD))?;
    let eye = if p.facing_right { end - 1 } else { start };
    out.queue(cursor::MoveTo(eye, top))?;
    out.queue(Print(if p.facing_right { "▸" } else { "◂" }))?;
    Ok(())
}

fn draw_enemies<W: Write>(
    out: &mut W,
    state: &GameState,
    proj: &Projection,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_ENEMY))?;
    for e in &state.enemies {
        let Some((start, end)) = proj.col_span(e.x, e.width) else {
            continue;
        };
        let Some(top) = proj.row_of(e.y) else {
            continue;
        };
        let bottom = proj.row_of(e.y + e.height - 1.0).unwrap_or(top);
        for row in top..=bottom {
            out.queue(cursor::MoveTo(start, row))?;
            out.queue(Print("▓".repeat((end - start) as usize)))?;
        }
    }
    Ok(())
}

fn draw_bullets<W: Write>(
    out: &mut W,
    state: &GameState,
    proj: &Projection,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_BULLET))?;
    for b in &state.bullets {
        let Some((col, _)) = proj.col_span(b.x, b.size) else {
            continue;
        };
        if let Some(row) = proj.row_of(b.y) {
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(Print("•"))?;
        }
    }
    Ok(())
}

// ── HUD (row 0) & hint (last row) ─────────────────────────────────────────────

fn ammo_text(state: &GameState) -> String {
    match state.player.ammo.get(state.player.current_weapon) {
        Ammo::Unlimited => "∞".to_string(),
        Ammo::Count(n) => n.to_string(),
    }
}

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let p = &state.player;
    let segments = 10;
    let filled =
        ((p.health as f32 / p.max_health as f32) * segments as f32).round() as usize;
    let bar = format!(
        "{}{}",
        "█".repeat(filled.min(segments)),
        "░".repeat(segments - filled.min(segments))
    );

    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!(
        "HP {} {:>3}   Coins: {:<4}  {} [{}]   Level {}",
        bar,
        p.health,
        p.coins,
        p.current_weapon.name(),
        ammo_text(state),
        state.level
    )))?;
    Ok(())
}

fn draw_controls_hint<W: Write>(out: &mut W, proj: &Projection) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, proj.rows - 1))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(
        "← → / A D : Move   W / SPACE : Jump   F : Shoot   1-3 : Weapon   E : Shop   Q : Quit",
    ))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_centered_lines<W: Write>(
    out: &mut W,
    proj: &Projection,
    lines: &[(String, Color)],
) -> std::io::Result<()> {
    let cx = proj.cols / 2;
    let start_row = (proj.rows / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(msg.as_str()))?;
    }
    Ok(())
}

fn draw_game_over<W: Write>(
    out: &mut W,
    state: &GameState,
    proj: &Projection,
) -> std::io::Result<()> {
    let lines = vec![
        ("╔══════════════════╗".to_string(), Color::Red),
        ("║    GAME  OVER    ║".to_string(), Color::Red),
        ("╚══════════════════╝".to_string(), Color::Red),
        (format!("Level reached: {}", state.level), Color::Yellow),
        ("R - Restart  Q - Quit".to_string(), Color::White),
    ];
    draw_centered_lines(out, proj, &lines)
}

fn draw_level_complete<W: Write>(
    out: &mut W,
    state: &GameState,
    proj: &Projection,
) -> std::io::Result<()> {
    let lines = vec![
        ("╔══════════════════╗".to_string(), Color::Green),
        (format!("║  LEVEL {:>2} CLEAR  ║", state.level), Color::Green),
        ("╚══════════════════╝".to_string(), Color::Green),
        (format!("Coins: {}", state.player.coins), Color::Yellow),
        ("N - Next Level  Q - Quit".to_string(), Color::White),
    ];
    draw_centered_lines(out, proj, &lines)
}

fn draw_shop<W: Write>(
    out: &mut W,
    state: &GameState,
    proj: &Projection,
) -> std::io::Result<()> {
    let mut lines = vec![
        ("╔═════════ SHOP ═════════╗".to_string(), Color::Cyan),
        (format!("Coins: {}", state.player.coins), Color::Yellow),
    ];
    for (i, weapon) in Weapon::ALL.iter().enumerate() {
        let owned = if state.player.owns(*weapon) {
            "owned"
        } else {
            ""
        };
        lines.push((
            format!(
                "[{}] {:<8} {:>3}c  {}",
                i + 1,
                weapon.name(),
                weapon.price(),
                owned
            ),
            Color::White,
        ));
    }
    lines.push((
        "buying an owned weapon refills its ammo".to_string(),
        C_HINT,
    ));
    lines.push(("E - Close".to_string(), Color::White));
    lines.push(("╚════════════════════════╝".to_string(), Color::Cyan));
    draw_centered_lines(out, proj, &lines)
}
