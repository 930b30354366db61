//! Preview colors, read from the user's kitty.conf when available
//! (~/.config/kitty/kitty.conf), otherwise a built-in dark palette

use ratatui::style::Color;
use std::collections::HashMap;
use std::fs;

use crate::icons::IconAsset;

#[derive(Debug, Clone)]
pub struct Theme {
    pub accent: Color,      // Selection marker, key hints
    pub danger: Color,      // Status errors
    pub text: Color,        // Urls
    pub text_dim: Color,    // Hints, counts
    pub bg_selected: Color, // Selected row
    pub inactive: Color,    // Borders
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb(250, 179, 135),
            danger: Color::Rgb(243, 139, 168),
            text: Color::Rgb(205, 214, 244),
            text_dim: Color::Rgb(147, 153, 178),
            bg_selected: Color::Rgb(69, 71, 90),
            inactive: Color::Rgb(88, 91, 112),
        }
    }
}

impl Theme {
    pub fn load() -> Self {
        Self::load_kitty_theme().unwrap_or_default()
    }

    /// Glyphs keep their brand color regardless of the palette
    pub fn glyph_color(icon: &IconAsset) -> Color {
        let (r, g, b) = icon.brand_color;
        Color::Rgb(r, g, b)
    }

    fn load_kitty_theme() -> Option<Self> {
        let path = dirs::config_dir()?.join("kitty/kitty.conf");
        let content = fs::read_to_string(&path).ok()?;
        let theme = Self::from_kitty_conf(&content);
        if theme.is_some() {
            tracing::debug!(path = %path.display(), "Loaded preview colors");
        }
        theme
    }

    fn from_kitty_conf(content: &str) -> Option<Self> {
        let colors = Self::parse_kitty_conf(content);
        if colors.is_empty() {
            return None;
        }

        let fallback = Self::default();
        let pick = |keys: &[&str], default: Color| {
            keys.iter()
                .find_map(|k| colors.get(*k))
                .copied()
                .unwrap_or(default)
        };

        Some(Self {
            accent: pick(&["color2", "color10"], fallback.accent),
            danger: pick(&["color1", "color9"], fallback.danger),
            text: pick(&["foreground"], fallback.text),
            text_dim: pick(&["color8"], fallback.text_dim),
            bg_selected: pick(&["selection_background", "color0"], fallback.bg_selected),
            inactive: pick(&["inactive_border_color", "color8"], fallback.inactive),
        })
    }

    /// `key value` lines; only hex color values are kept
    fn parse_kitty_conf(content: &str) -> HashMap<String, Color> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once(char::is_whitespace))
            .filter_map(|(key, value)| {
                Self::parse_hex_color(value).map(|c| (key.trim().to_string(), c))
            })
            .collect()
    }

    /// #RRGGBB or #RGB
    fn parse_hex_color(s: &str) -> Option<Color> {
        let s = s.trim().strip_prefix('#')?;
        if !s.is_ascii() {
            return None;
        }
        let channel = |hex: &str| u8::from_str_radix(hex, 16).ok();

        match s.len() {
            6 => Some(Color::Rgb(
                channel(&s[0..2])?,
                channel(&s[2..4])?,
                channel(&s[4..6])?,
            )),
            3 => Some(Color::Rgb(
                channel(&s[0..1])? * 17,
                channel(&s[1..2])? * 17,
                channel(&s[2..3])? * 17,
            )),
            _ => None,
        }
    }
}
