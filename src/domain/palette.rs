// Per-entity-kind colors for the debug view.

use super::shape::BodyKind;
use super::team::TeamSide;

/// Linear RGB color with components in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const RED: Rgb = Rgb::new(1.0, 0.0, 0.0);
    pub const BLUE: Rgb = Rgb::new(0.0, 0.0, 1.0);
    pub const YELLOW: Rgb = Rgb::new(1.0, 1.0, 0.0);
    pub const GREEN: Rgb = Rgb::new(0.0, 1.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(value: &str) -> Option<Self> {
        let hex = value.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .ok()
                .map(|v| v as f32 / 255.0)
        };
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

/// Color for every kind of body the world can expose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub home: Rgb,
    pub away: Rgb,
    pub home_goalkeeper: Rgb,
    pub away_goalkeeper: Rgb,
    pub ball: Rgb,
    pub goal: Rgb,
    pub pitch: Rgb,
    /// Used for `BodyKind::Other`.
    pub fallback: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            home: Rgb::RED,
            away: Rgb::BLUE,
            home_goalkeeper: Rgb::YELLOW,
            away_goalkeeper: Rgb::GREEN,
            ball: Rgb::WHITE,
            goal: Rgb::new(0.8, 0.8, 0.8),
            pitch: Rgb::new(0.1, 0.45, 0.1),
            fallback: Rgb::new(1.0, 0.0, 1.0),
        }
    }
}

impl Palette {
    /// Every body gets the same color.
    pub fn uniform(color: Rgb) -> Self {
        Self {
            home: color,
            away: color,
            home_goalkeeper: color,
            away_goalkeeper: color,
            ball: color,
            goal: color,
            pitch: color,
            fallback: color,
        }
    }

    pub fn color_for(&self, body: BodyKind) -> Rgb {
        match body {
            BodyKind::Ball => self.ball,
            BodyKind::Player {
                side: TeamSide::Home,
                goalkeeper: false,
            } => self.home,
            BodyKind::Player {
                side: TeamSide::Away,
                goalkeeper: false,
            } => self.away,
            BodyKind::Player {
                side: TeamSide::Home,
                goalkeeper: true,
            } => self.home_goalkeeper,
            BodyKind::Player {
                side: TeamSide::Away,
                goalkeeper: true,
            } => self.away_goalkeeper,
            BodyKind::Goal => self.goal,
            BodyKind::Pitch => self.pitch,
            BodyKind::Other => self.fallback,
        }
    }
}
