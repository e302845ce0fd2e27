// Keyboard control adapter: held keys in, per-tick intent out.

use crate::domain::{ControlIntent, IntentSource};
use std::collections::{HashMap, HashSet};
use std::str::FromStr;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;
use tracing::{debug, info};

/// Raw key as reported by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
    Enter,
    Shift,
    Char(char),
}

impl FromStr for KeyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let key = match lower.as_str() {
            "up" => KeyCode::ArrowUp,
            "down" => KeyCode::ArrowDown,
            "left" => KeyCode::ArrowLeft,
            "right" => KeyCode::ArrowRight,
            "space" => KeyCode::Space,
            "enter" => KeyCode::Enter,
            "shift" => KeyCode::Shift,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return Err(format!("unknown key {s:?}")),
                }
            }
        };
        Ok(key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Pressed(KeyCode),
    Released(KeyCode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    Kick,
    Pass,
    Shoot,
}

/// Raw key to action mapping. Keys without a binding are ignored.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    map: HashMap<KeyCode, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::from_pairs([
            (KeyCode::ArrowUp, Action::Up),
            (KeyCode::ArrowDown, Action::Down),
            (KeyCode::ArrowLeft, Action::Left),
            (KeyCode::ArrowRight, Action::Right),
            (KeyCode::Char('w'), Action::Up),
            (KeyCode::Char('s'), Action::Down),
            (KeyCode::Char('a'), Action::Left),
            (KeyCode::Char('d'), Action::Right),
            (KeyCode::Space, Action::Kick),
            (KeyCode::Char('z'), Action::Pass),
            (KeyCode::Char('x'), Action::Shoot),
        ])
    }
}

impl KeyBindings {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (KeyCode, Action)>) -> Self {
        Self {
            map: pairs.into_iter().collect(),
        }
    }

    pub fn action(&self, key: KeyCode) -> Option<Action> {
        self.map.get(&key).copied()
    }

    /// Intent for a set of currently held keys.
    pub fn intent(&self, held: &HashSet<KeyCode>) -> ControlIntent {
        let mut intent = ControlIntent::default();
        for action in held.iter().filter_map(|k| self.action(*k)) {
            match action {
                Action::Up => intent.up = true,
                Action::Down => intent.down = true,
                Action::Left => intent.left = true,
                Action::Right => intent.right = true,
                Action::Kick => intent.kick = true,
                Action::Pass => intent.pass = true,
                Action::Shoot => intent.shoot = true,
            }
        }
        intent
    }
}

/// Samples held keys for one team side.
///
/// Key events arrive on an mpsc channel; `poll` drains whatever is queued without waiting and
/// returns the intent for the keys held afterwards.
pub struct KeyboardController {
    events: Option<mpsc::Receiver<KeyEvent>>,
    bindings: KeyBindings,
    held: HashSet<KeyCode>,
}

impl KeyboardController {
    pub fn new(bindings: KeyBindings, events: mpsc::Receiver<KeyEvent>) -> Self {
        Self {
            events: Some(events),
            bindings,
            held: HashSet::new(),
        }
    }

    /// Controller with no device attached; always idle.
    pub fn detached() -> Self {
        Self {
            events: None,
            bindings: KeyBindings::default(),
            held: HashSet::new(),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.events.is_some()
    }

    fn drain(&mut self) {
        let Some(events) = self.events.as_mut() else {
            return;
        };

        loop {
            match events.try_recv() {
                Ok(KeyEvent::Pressed(key)) => {
                    if self.bindings.action(key).is_none() {
                        debug!(key = ?key, "unmapped key");
                    }
                    self.held.insert(key);
                }
                Ok(KeyEvent::Released(key)) => {
                    self.held.remove(&key);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    info!("control device detached; releasing held keys");
                    self.events = None;
                    self.held.clear();
                    break;
                }
            }
        }
    }
}

impl IntentSource for KeyboardController {
    fn poll(&mut self) -> ControlIntent {
        self.drain();
        self.bindings.intent(&self.held)
    }
}
