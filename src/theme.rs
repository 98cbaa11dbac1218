use clap::ValueEnum;
use palette::{Hsl, IntoColor, Srgb};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, ValueEnum, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// The original page palette: light grid, gray axes, red vector.
    #[default]
    Classic,
    Dark,
    Light,
    Mono,
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "classic" => Ok(Self::Classic),
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            "mono" | "monochrome" => Ok(Self::Mono),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

impl Theme {
    /// Background grid lines.
    pub fn grid(&self) -> (u8, u8, u8) {
        match self {
            Theme::Classic => hsl(0.0, 0.0, 0.88),
            Theme::Dark => hsl(0.0, 0.0, 0.25),
            Theme::Light => hsl(0.0, 0.0, 0.90),
            Theme::Mono => hsl(0.0, 0.0, 0.35),
        }
    }

    /// The X and Y axes and their letter labels.
    pub fn axis(&self) -> (u8, u8, u8) {
        match self {
            Theme::Classic => hsl(0.0, 0.0, 0.53),
            Theme::Dark => hsl(0.0, 0.0, 0.55),
            Theme::Light => hsl(0.0, 0.0, 0.40),
            Theme::Mono => hsl(0.0, 0.0, 0.65),
        }
    }

    /// The vector arrow.
    pub fn accent(&self) -> (u8, u8, u8) {
        match self {
            Theme::Classic => hsl(6.0, 0.78, 0.57),
            Theme::Dark => hsl(30.0, 0.90, 0.60),
            Theme::Light => hsl(210.0, 0.80, 0.45),
            Theme::Mono => hsl(0.0, 0.0, 0.95),
        }
    }

    /// Annotation text and the angle arc.
    pub fn text(&self) -> (u8, u8, u8) {
        match self {
            Theme::Classic => hsl(210.0, 0.29, 0.24),
            Theme::Dark => hsl(0.0, 0.0, 0.85),
            Theme::Light => hsl(0.0, 0.0, 0.15),
            Theme::Mono => hsl(0.0, 0.0, 0.80),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Classic => "classic",
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::Mono => "mono",
        }
    }

    pub fn all() -> &'static [Theme] {
        &[Theme::Classic, Theme::Dark, Theme::Light, Theme::Mono]
    }

    pub fn next(&self) -> Self {
        let all = Self::all();
        let current = all.iter().position(|t| t == self).unwrap_or(0);
        all[(current + 1) % all.len()]
    }
}

fn hsl(h: f32, s: f32, l: f32) -> (u8, u8, u8) {
    let rgb: Srgb = Hsl::new(h, s, l).into_color();
    (
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_accent_is_red() {
        let (r, g, b) = Theme::Classic.accent();
        assert!(r > g && r > b);
    }

    #[test]
    fn next_cycles_through_all_and_wraps() {
        let mut theme = Theme::Classic;
        for _ in 0..Theme::all().len() {
            theme = theme.next();
        }
        assert_eq!(theme, Theme::Classic);
    }

    #[test]
    fn parses_aliases() {
        assert_eq!("monochrome".parse::<Theme>(), Ok(Theme::Mono));
        assert!("neon".parse::<Theme>().is_err());
    }
}
