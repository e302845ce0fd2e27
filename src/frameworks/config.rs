use crate::domain::{Palette, Rgb, TeamSide};
use crate::interface_adapters::frames::FrameOutput;
use crate::use_cases::HeadingConvention;
use std::{env, path::PathBuf, str::FromStr, time::Duration};
use tracing::warn;

// Runtime constants (not gameplay tuning).

pub const KEY_CHANNEL_CAPACITY: usize = 256;
pub const COMMAND_CHANNEL_CAPACITY: usize = 32;
pub const FRAME_BROADCAST_CAPACITY: usize = 128;

pub const DEFAULT_TICK_HZ: u32 = 60;
pub const DEFAULT_PITCH_INDEX: u32 = 6;

/// Everything a harness run is configured with.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Simulation rate; `dt = 1 / tick_hz`.
    pub tick_hz: u32,
    /// Wall-clock pacing between ticks.
    pub tick_interval: Duration,
    pub max_ticks: Option<u64>,
    pub assets_dir: PathBuf,
    pub pitch_index: u32,
    pub headless: bool,
    /// Read operator commands from stdin.
    pub operator_stdin: bool,
    pub home_formation: String,
    pub away_formation: String,
    pub controlled: TeamSide,
    pub frame_output: FrameOutput,
    pub heading: HeadingConvention,
    pub palette: Palette,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            tick_hz: DEFAULT_TICK_HZ,
            tick_interval: interval_for(DEFAULT_TICK_HZ),
            max_ticks: None,
            assets_dir: PathBuf::from("assets"),
            pitch_index: DEFAULT_PITCH_INDEX,
            headless: false,
            operator_stdin: true,
            home_formation: "442".to_string(),
            away_formation: "433".to_string(),
            controlled: TeamSide::Home,
            frame_output: FrameOutput::Off,
            heading: HeadingConvention::default(),
            palette: Palette::default(),
        }
    }
}

impl HarnessConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source; unset or malformed values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let tick_hz = parse_var::<u32>(&lookup, "HARNESS_TICK_HZ")
            .filter(|hz| *hz > 0)
            .unwrap_or(defaults.tick_hz);
        let tick_interval = parse_var::<u64>(&lookup, "HARNESS_TICK_INTERVAL_MS")
            .map(Duration::from_millis)
            .filter(|d| !d.is_zero())
            .unwrap_or_else(|| interval_for(tick_hz));

        let controlled = match lookup("HARNESS_CONTROLLED_SIDE") {
            Some(value) => TeamSide::parse(&value).unwrap_or_else(|| {
                warn!(value = %value, "unknown controlled side; using home");
                defaults.controlled
            }),
            None => defaults.controlled,
        };

        let heading = HeadingConvention {
            sign: parse_var::<f32>(&lookup, "HARNESS_HEADING_SIGN")
                .filter(|v| v.is_finite())
                .map(f32::signum)
                .unwrap_or(defaults.heading.sign),
            offset_deg: parse_var::<f32>(&lookup, "HARNESS_HEADING_OFFSET_DEG")
                .filter(|v| v.is_finite())
                .unwrap_or(defaults.heading.offset_deg),
        };

        Self {
            tick_hz,
            tick_interval,
            max_ticks: parse_var::<u64>(&lookup, "HARNESS_MAX_TICKS").filter(|n| *n > 0),
            assets_dir: lookup("HARNESS_ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.assets_dir),
            pitch_index: parse_var(&lookup, "HARNESS_PITCH_INDEX").unwrap_or(defaults.pitch_index),
            headless: flag(&lookup, "HARNESS_HEADLESS").unwrap_or(defaults.headless),
            operator_stdin: flag(&lookup, "HARNESS_STDIN").unwrap_or(defaults.operator_stdin),
            home_formation: lookup("HARNESS_HOME_FORMATION").unwrap_or(defaults.home_formation),
            away_formation: lookup("HARNESS_AWAY_FORMATION").unwrap_or(defaults.away_formation),
            controlled,
            frame_output: lookup("HARNESS_FRAME_OUTPUT")
                .map(|v| FrameOutput::parse(&v))
                .unwrap_or(defaults.frame_output),
            heading,
            palette: palette(&lookup, defaults.palette),
        }
    }

    pub fn fixed_dt(&self) -> f32 {
        1.0 / self.tick_hz as f32
    }
}

fn interval_for(hz: u32) -> Duration {
    Duration::from_secs_f64(1.0 / f64::from(hz))
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<T> {
    let value = lookup(name)?;
    let parsed = value.trim().parse().ok();
    if parsed.is_none() {
        warn!(name, value = %value, "ignoring malformed setting");
    }
    parsed
}

fn flag(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<bool> {
    match lookup(name)?.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        other => {
            warn!(name, value = %other, "ignoring malformed flag");
            None
        }
    }
}

// HARNESS_COLOR_ALL sets every kind first; the per-kind variables override it.
fn palette(lookup: &impl Fn(&str) -> Option<String>, defaults: Palette) -> Palette {
    let color = |name: &str| {
        let value = lookup(name)?;
        let rgb = Rgb::from_hex(&value);
        if rgb.is_none() {
            warn!(name, value = %value, "ignoring malformed color");
        }
        rgb
    };

    let mut palette = color("HARNESS_COLOR_ALL").map_or(defaults, Palette::uniform);
    let slots: [(&str, &mut Rgb); 8] = [
        ("HARNESS_COLOR_HOME", &mut palette.home),
        ("HARNESS_COLOR_AWAY", &mut palette.away),
        ("HARNESS_COLOR_HOME_GOALKEEPER", &mut palette.home_goalkeeper),
        ("HARNESS_COLOR_AWAY_GOALKEEPER", &mut palette.away_goalkeeper),
        ("HARNESS_COLOR_BALL", &mut palette.ball),
        ("HARNESS_COLOR_GOAL", &mut palette.goal),
        ("HARNESS_COLOR_PITCH", &mut palette.pitch),
        ("HARNESS_COLOR_FALLBACK", &mut palette.fallback),
    ];
    for (name, slot) in slots {
        if let Some(rgb) = color(name) {
            *slot = rgb;
        }
    }
    palette
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> HarnessConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        HarnessConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn unset_environment_gives_the_defaults() {
        let cfg = config(&[]);

        assert_eq!(cfg.tick_hz, 60);
        assert!((cfg.fixed_dt() - 1.0 / 60.0).abs() < f32::EPSILON);
        assert_eq!(cfg.max_ticks, None);
        assert_eq!(cfg.pitch_index, 6);
        assert_eq!(cfg.controlled, TeamSide::Home);
        assert_eq!(cfg.frame_output, FrameOutput::Off);
        assert_eq!(cfg.heading, HeadingConvention::default());
        assert!(!cfg.headless);
    }

    #[test]
    fn tick_rate_drives_dt_and_pacing_unless_pacing_is_set() {
        let cfg = config(&[("HARNESS_TICK_HZ", "100")]);
        assert!((cfg.fixed_dt() - 0.01).abs() < f32::EPSILON);
        assert_eq!(cfg.tick_interval, Duration::from_millis(10));

        let cfg = config(&[("HARNESS_TICK_HZ", "100"), ("HARNESS_TICK_INTERVAL_MS", "1")]);
        assert!((cfg.fixed_dt() - 0.01).abs() < f32::EPSILON);
        assert_eq!(cfg.tick_interval, Duration::from_millis(1));
    }

    #[test]
    fn malformed_values_fall_back() {
        let cfg = config(&[
            ("HARNESS_TICK_HZ", "0"),
            ("HARNESS_PITCH_INDEX", "six"),
            ("HARNESS_HEADLESS", "maybe"),
            ("HARNESS_CONTROLLED_SIDE", "left"),
            ("HARNESS_COLOR_BALL", "#zzzzzz"),
            ("HARNESS_COLOR_GOAL", "#+f+f+f"),
            ("HARNESS_HEADING_SIGN", "NaN"),
            ("HARNESS_HEADING_OFFSET_DEG", "inf"),
        ]);

        assert_eq!(cfg.tick_hz, 60);
        assert_eq!(cfg.pitch_index, 6);
        assert!(!cfg.headless);
        assert_eq!(cfg.controlled, TeamSide::Home);
        assert_eq!(cfg.palette.ball, Palette::default().ball);
        assert_eq!(cfg.palette.goal, Palette::default().goal);
        assert_eq!(cfg.heading, HeadingConvention::default());
    }

    #[test]
    fn run_shape_settings_are_read() {
        let cfg = config(&[
            ("HARNESS_MAX_TICKS", "120"),
            ("HARNESS_HEADLESS", "true"),
            ("HARNESS_STDIN", "0"),
            ("HARNESS_CONTROLLED_SIDE", "away"),
            ("HARNESS_HOME_FORMATION", "352"),
            ("HARNESS_FRAME_OUTPUT", "stdout"),
            ("HARNESS_HEADING_SIGN", "-1"),
            ("HARNESS_HEADING_OFFSET_DEG", "180"),
        ]);

        assert_eq!(cfg.max_ticks, Some(120));
        assert!(cfg.headless);
        assert!(!cfg.operator_stdin);
        assert_eq!(cfg.controlled, TeamSide::Away);
        assert_eq!(cfg.home_formation, "352");
        assert_eq!(cfg.frame_output, FrameOutput::Stdout);
        assert_eq!(cfg.heading.sign, -1.0);
        assert_eq!(cfg.heading.offset_deg, 180.0);
    }

    #[test]
    fn uniform_color_is_overridden_per_kind() {
        let cfg = config(&[
            ("HARNESS_COLOR_ALL", "#ff0000"),
            ("HARNESS_COLOR_BALL", "ffffff"),
        ]);

        assert_eq!(cfg.palette.home, Rgb::RED);
        assert_eq!(cfg.palette.goal, Rgb::RED);
        assert_eq!(cfg.palette.ball, Rgb::WHITE);
    }
}
