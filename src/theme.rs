//! Resolved UI colors
//!
//! Config carries colors as hex strings; this module resolves them to
//! ratatui [`Color`]s once at startup. Invalid hex falls back to the
//! built-in default for that slot.

use crate::config::ColorConfig;
use ratatui::style::Color;

/// Colors resolved from the `[colors]` config table
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub button: Color,
    pub button_border: Color,
    pub heading: Color,
    pub link: Color,
    /// None means transparent (terminal default background)
    pub background: Option<Color>,
}

impl Theme {
    pub fn from_config(colors: &ColorConfig) -> Self {
        Self {
            button: parse_color(&colors.button).unwrap_or(Color::Gray),
            button_border: parse_color(&colors.button_border).unwrap_or(Color::Cyan),
            heading: parse_color(&colors.heading).unwrap_or(Color::Green),
            link: parse_color(&colors.link).unwrap_or(Color::Blue),
            // "-" means explicitly transparent
            background: match colors.background.as_str() {
                "-" | "" => None,
                other => parse_color(other),
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ColorConfig::default())
    }
}

/// Parse a hex color string ("#rrggbb" or "rrggbb") to a ratatui Color
pub fn parse_color(hex: &str) -> Option<Color> {
    let s = hex.trim();
    let h = s.strip_prefix('#').unwrap_or(s);
    if h.len() != 6 {
        return None;
    }
    u32::from_str_radix(h, 16).ok().map(|rgb| {
        let r = ((rgb >> 16) & 0xff) as u8;
        let g = ((rgb >> 8) & 0xff) as u8;
        let b = (rgb & 0xff) as u8;
        Color::Rgb(r, g, b)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_with_hash() {
        assert_eq!(parse_color("#60b4bf"), Some(Color::Rgb(0x60, 0xb4, 0xbf)));
    }

    #[test]
    fn test_parse_color_without_hash() {
        assert_eq!(parse_color("477ab3"), Some(Color::Rgb(0x47, 0x7a, 0xb3)));
    }

    #[test]
    fn test_parse_color_rejects_garbage() {
        assert_eq!(parse_color("not-a-color"), None);
        assert_eq!(parse_color("#fff"), None);
        assert_eq!(parse_color(""), None);
    }

    #[test]
    fn test_bad_hex_falls_back_to_defaults() {
        let mut colors = ColorConfig::default();
        colors.heading = "bogus".to_string();
        let theme = Theme::from_config(&colors);
        assert_eq!(theme.heading, Color::Green);
    }

    #[test]
    fn test_dash_background_is_transparent() {
        let colors = ColorConfig::default();
        let theme = Theme::from_config(&colors);
        assert!(theme.background.is_none());
    }
}
