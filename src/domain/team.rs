// Teams and the formations used to place their players at kick-off.

use super::errors::AssetError;
use glam::Vec2;
use std::collections::HashMap;

/// Outfield players per team; the goalkeeper is placed separately.
pub const OUTFIELD_PLAYERS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TeamSide {
    /// Defends the goal at -Y.
    Home,
    /// Defends the goal at +Y.
    Away,
}

impl TeamSide {
    pub fn opponent(self) -> Self {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }

    /// +1 when the side attacks towards +Y.
    pub fn attack_sign(self) -> f32 {
        match self {
            TeamSide::Home => 1.0,
            TeamSide::Away => -1.0,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "home" | "a" => Some(TeamSide::Home),
            "away" | "b" => Some(TeamSide::Away),
            _ => None,
        }
    }
}

/// Outfield slots in half-pitch coordinates.
///
/// `x` runs 0..=1 across the pitch from the team's left touchline, `y` runs 0..=1 from the
/// team's own goal line to the halfway line.
#[derive(Debug, Clone, PartialEq)]
pub struct Formation {
    name: String,
    slots: [Vec2; OUTFIELD_PLAYERS],
}

impl Formation {
    pub fn new(name: impl Into<String>, slots: &[[f32; 2]]) -> Result<Self, AssetError> {
        let name = name.into();
        if slots.len() != OUTFIELD_PLAYERS {
            return Err(AssetError::InvalidFormation {
                name,
                reason: format!("expected {OUTFIELD_PLAYERS} slots, got {}", slots.len()),
            });
        }

        let mut out = [Vec2::ZERO; OUTFIELD_PLAYERS];
        for (i, [x, y]) in slots.iter().copied().enumerate() {
            if !(0.0..=1.0).contains(&x) || !(0.0..=1.0).contains(&y) {
                return Err(AssetError::InvalidFormation {
                    name,
                    reason: format!("slot {i} ({x}, {y}) is outside the half pitch"),
                });
            }
            out[i] = Vec2::new(x, y);
        }

        Ok(Self { name, slots: out })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slots(&self) -> &[Vec2; OUTFIELD_PLAYERS] {
        &self.slots
    }
}

/// Formations keyed by name ("442", "433", ...).
#[derive(Debug, Clone, Default)]
pub struct TacticsBook {
    formations: HashMap<String, Formation>,
}

impl TacticsBook {
    pub fn builtin() -> Self {
        let mut book = Self::default();
        for (name, slots) in BUILTIN_FORMATIONS {
            // Built-in tables are static and always valid.
            if let Ok(formation) = Formation::new(*name, slots) {
                book.insert(formation);
            }
        }
        book
    }

    pub fn insert(&mut self, formation: Formation) {
        self.formations.insert(formation.name.clone(), formation);
    }

    pub fn get(&self, name: &str) -> Option<&Formation> {
        self.formations.get(name)
    }

    pub fn require(&self, name: &str) -> Result<&Formation, AssetError> {
        self.get(name)
            .ok_or_else(|| AssetError::UnknownFormation(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.formations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formations.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Team {
    pub side: TeamSide,
    pub formation: Formation,
}

impl Team {
    pub fn new(side: TeamSide, formation: Formation) -> Self {
        Self { side, formation }
    }
}

const BUILTIN_FORMATIONS: &[(&str, &[[f32; 2]])] = &[
    (
        "442",
        &[
            [0.15, 0.25],
            [0.38, 0.2],
            [0.62, 0.2],
            [0.85, 0.25],
            [0.15, 0.55],
            [0.38, 0.5],
            [0.62, 0.5],
            [0.85, 0.55],
            [0.4, 0.85],
            [0.6, 0.85],
        ],
    ),
    (
        "433",
        &[
            [0.15, 0.25],
            [0.38, 0.2],
            [0.62, 0.2],
            [0.85, 0.25],
            [0.3, 0.5],
            [0.5, 0.45],
            [0.7, 0.5],
            [0.2, 0.85],
            [0.5, 0.9],
            [0.8, 0.85],
        ],
    ),
    (
        "352",
        &[
            [0.3, 0.2],
            [0.5, 0.18],
            [0.7, 0.2],
            [0.1, 0.5],
            [0.3, 0.45],
            [0.5, 0.5],
            [0.7, 0.45],
            [0.9, 0.5],
            [0.4, 0.85],
            [0.6, 0.85],
        ],
    ),
];
