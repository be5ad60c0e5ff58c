use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal,
    ExecutableCommand,
};
use rand::thread_rng;

use platform_gunner::compute::{
    buy_weapon, jump, move_left, move_right, shoot, switch_weapon, tick, toggle_shop,
};
use platform_gunner::constants::{VIEW_HEIGHT, VIEW_WIDTH};
use platform_gunner::display;
use platform_gunner::entities::{GameState, GameStatus, NullUi, Weapon};
use platform_gunner::level::{advance_level, new_game};

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

// ── Simultaneous-input constants ──────────────────────────────────────────────

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 4 frames (≈133 ms) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 4;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the user quits.
///
/// Input model: instead of acting on each key event individually, we keep
/// a `key_frame` map that records the frame number of the last press or
/// repeat event for every key.  Each frame we check which keys are still
/// "fresh" (within `HOLD_WINDOW` frames) and apply all their effects
/// simultaneously, so move + shoot can be held together.
///
/// The simulation itself is gated inside `tick`: terminal states and the
/// shop pause leave the world untouched while the shell keeps polling so
/// restart / next-level / close-shop keys still work.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let mut ui = NullUi;

    // Maps each held key → the frame it was last seen (press or repeat).
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            match kind {
                // Press: record key + handle one-shot actions
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok(());
                        }
                        KeyCode::Char('c')
                            if modifiers.contains(KeyModifiers::CONTROL) =>
                        {
                            return Ok(());
                        }
                        KeyCode::Char('r') | KeyCode::Char('R')
                            if state.status == GameStatus::GameOver =>
                        {
                            *state = new_game(VIEW_WIDTH, VIEW_HEIGHT, &mut rng, &mut ui);
                        }
                        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Enter
                            if state.status == GameStatus::LevelComplete =>
                        {
                            advance_level(state, &mut rng, &mut ui);
                        }
                        KeyCode::Char('e') | KeyCode::Char('E') => {
                            toggle_shop(state);
                        }
                        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up
                        | KeyCode::Char(' ')
                            if state.status == GameStatus::Running =>
                        {
                            jump(state);
                        }
                        KeyCode::Char(c @ '1'..='3') => {
                            let weapon = match c {
                                '1' => Weapon::Pistol,
                                '2' => Weapon::Shotgun,
                                _ => Weapon::Rifle,
                            };
                            match state.status {
                                GameStatus::Running => switch_weapon(state, weapon),
                                GameStatus::ShopOpen => {
                                    let _ = buy_weapon(state, weapon);
                                }
                                _ => {}
                            }
                        }
                        _ => {}
                    }
                }
                // Repeat: refresh timestamp so key stays "held"
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                // Release: remove key immediately (keyboard-enhancement path)
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        // ── Apply held-key actions every frame ────────────────────────────────
        if state.status == GameStatus::Running {
            let left = is_held(&key_frame, &KeyCode::Left, frame)
                || is_held(&key_frame, &KeyCode::Char('a'), frame)
                || is_held(&key_frame, &KeyCode::Char('A'), frame);
            let right = is_held(&key_frame, &KeyCode::Right, frame)
                || is_held(&key_frame, &KeyCode::Char('d'), frame)
                || is_held(&key_frame, &KeyCode::Char('D'), frame);
            let fire = is_held(&key_frame, &KeyCode::Char('f'), frame)
                || is_held(&key_frame, &KeyCode::Char('F'), frame);

            if left {
                move_left(state);
            } else if right {
                move_right(state);
            }
            // Rate-limited by the weapon's own shoot cooldown.
            if fire {
                shoot(state);
            }
        }

        tick(state, &mut ui);
        display::render(out, state)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let mut rng = thread_rng();
    let mut ui = NullUi;
    let mut state = new_game(VIEW_WIDTH, VIEW_HEIGHT, &mut rng, &mut ui);
    let result = game_loop(&mut out, &mut state, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
