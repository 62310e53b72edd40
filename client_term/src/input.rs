//! Keyboard input handling

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use game_core::{InputSource, InputState};
use std::time::{Duration, Instant};

/// Without release events a held key shows up as one press, a pause of the
/// terminal's auto-repeat delay, then repeats every ~30-50ms. A first press is
/// held across that delay; once repeats arrive each one holds for the short window.
const INITIAL_HOLD: Duration = Duration::from_millis(500);
const HOLD_WINDOW: Duration = Duration::from_millis(120);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Confirm,
    Quit,
}

/// Map a terminal key to a logical button
pub fn key_from_event(event: &KeyEvent) -> Option<Key> {
    match event.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::Down),
        KeyCode::Enter => Some(Key::Confirm),
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => Some(Key::Quit),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Key::Quit),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy)]
struct Hold {
    since: Instant,
    last: Instant,
}

/// Which movement keys count as held.
///
/// With release events a key is held from press to release. Without them,
/// holds are inferred from press timing.
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    releases_reported: bool,
    up: Option<Hold>,
    down: Option<Hold>,
}

impl HeldKeys {
    pub fn new(releases_reported: bool) -> Self {
        Self {
            releases_reported,
            ..Self::default()
        }
    }

    fn slot(&mut self, key: Key) -> Option<&mut Option<Hold>> {
        match key {
            Key::Up => Some(&mut self.up),
            Key::Down => Some(&mut self.down),
            Key::Confirm | Key::Quit => None,
        }
    }

    fn get(&self, key: Key) -> Option<Hold> {
        match key {
            Key::Up => self.up,
            Key::Down => self.down,
            Key::Confirm | Key::Quit => None,
        }
    }

    pub fn press(&mut self, key: Key, at: Instant) {
        let repeat = self.is_held(key, at);
        if let Some(slot) = self.slot(key) {
            *slot = match (*slot, repeat) {
                (Some(hold), true) => Some(Hold { last: at, ..hold }),
                _ => Some(Hold { since: at, last: at }),
            };
        }
    }

    pub fn release(&mut self, key: Key) {
        if let Some(slot) = self.slot(key) {
            *slot = None;
        }
    }

    pub fn is_held(&self, key: Key, now: Instant) -> bool {
        let Some(hold) = self.get(key) else {
            return false;
        };
        if self.releases_reported {
            return true;
        }
        let window = if hold.last == hold.since {
            INITIAL_HOLD
        } else {
            HOLD_WINDOW
        };
        now.saturating_duration_since(hold.last) < window
    }
}

/// Polls crossterm for pending key events once per frame
#[derive(Debug, Default)]
pub struct KeyboardInput {
    held: HeldKeys,
}

impl KeyboardInput {
    /// `releases_reported` is true when the terminal sends key release events
    pub fn new(releases_reported: bool) -> Self {
        Self {
            held: HeldKeys::new(releases_reported),
        }
    }

    fn apply(&mut self, event: &KeyEvent, state: &mut InputState, now: Instant) {
        let Some(key) = key_from_event(event) else {
            return;
        };
        match event.kind {
            KeyEventKind::Release => self.held.release(key),
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.held.press(key, now);
                match key {
                    Key::Confirm => state.confirm = true,
                    Key::Quit => state.quit = true,
                    Key::Up | Key::Down => {}
                }
            }
        }
    }
}

impl InputSource for KeyboardInput {
    fn poll(&mut self) -> InputState {
        let mut state = InputState::default();
        let now = Instant::now();

        loop {
            match event::poll(Duration::ZERO) {
                Ok(true) => {}
                Ok(false) => break,
                Err(err) => {
                    tracing::warn!("input poll failed: {err}");
                    break;
                }
            }
            match event::read() {
                Ok(Event::Key(key)) => self.apply(&key, &mut state, now),
                Ok(_) => {}
                Err(err) => {
                    tracing::warn!("input read failed: {err}");
                    break;
                }
            }
        }

        state.up = self.held.is_held(Key::Up, now);
        state.down = self.held.is_held(Key::Down, now);
        state
    }
}
