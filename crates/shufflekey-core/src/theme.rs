//! Colour themes.
//!
//! Four built-in themes are cycled in a fixed order. Colours are plain RGBA
//! values; turning them into gradients and shadows is up to the renderer.

use crate::error::ThemeError;

/// An sRGB colour with alpha, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, 255 is opaque.
    pub a: u8,
}

impl Rgba {
    /// Opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `RGB`, `RRGGBB`, or `AARRGGBB` hex, ignoring any non-hex
    /// characters such as a leading `#`.
    pub fn from_hex(input: &str) -> Result<Self, ThemeError> {
        let digits: Vec<u8> = input
            .chars()
            .filter_map(|c| c.to_digit(16))
            .filter_map(|d| u8::try_from(d).ok())
            .collect();

        match digits.as_slice() {
            // 12-bit: each nibble is scaled to a full byte.
            [r, g, b] => Ok(Self::rgb(r * 17, g * 17, b * 17)),
            [r1, r0, g1, g0, b1, b0] => {
                Ok(Self::rgb((r1 << 4) | r0, (g1 << 4) | g0, (b1 << 4) | b0))
            },
            [a1, a0, r1, r0, g1, g0, b1, b0] => Ok(Self {
                r: (r1 << 4) | r0,
                g: (g1 << 4) | g0,
                b: (b1 << 4) | b0,
                a: (a1 << 4) | a0,
            }),
            _ => Err(ThemeError::InvalidHex { input: input.to_owned() }),
        }
    }

    /// Same colour with alpha scaled by `opacity` (clamped to `[0, 1]`).
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn with_opacity(self, opacity: f32) -> Self {
        let scale = if opacity.is_nan() { 0.0 } else { opacity.clamp(0.0, 1.0) };
        let a = (f32::from(self.a) * scale).round() as u8;
        Self { a, ..self }
    }

    /// `#RRGGBB` or `#AARRGGBB` when not opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
        }
    }
}

/// Two-stop linear gradient, top-leading to bottom-trailing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    /// Start colour.
    pub from: Rgba,
    /// End colour.
    pub to: Rgba,
}

/// Built-in theme identifiers, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeKind {
    /// Warm red and orange.
    #[default]
    Red,
    /// Blues.
    Blue,
    /// Purples.
    Purple,
    /// Greens.
    Green,
}

impl ThemeKind {
    /// All themes in cycle order.
    pub const ALL: [Self; 4] = [Self::Red, Self::Blue, Self::Purple, Self::Green];

    /// The next theme, wrapping after the last.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Red => Self::Blue,
            Self::Blue => Self::Purple,
            Self::Purple => Self::Green,
            Self::Green => Self::Red,
        }
    }

    /// Palette for this theme.
    pub fn theme(self) -> Theme {
        match self {
            Self::Red => Theme {
                kind: self,
                name: "Red",
                icon: "flame.fill",
                primary: Rgba::rgb(0xFF, 0x4B, 0x4B),
                secondary: Rgba::rgb(0xFF, 0x8F, 0x1F),
                accent: Rgba::rgb(0xFF, 0xB7, 0x4D),
            },
            Self::Blue => Theme {
                kind: self,
                name: "Blue",
                icon: "water.waves",
                primary: Rgba::rgb(0x21, 0x96, 0xF3),
                secondary: Rgba::rgb(0x42, 0xA5, 0xF5),
                accent: Rgba::rgb(0x64, 0xB5, 0xF6),
            },
            Self::Purple => Theme {
                kind: self,
                name: "Purple",
                icon: "sparkles",
                primary: Rgba::rgb(0x9C, 0x27, 0xB0),
                secondary: Rgba::rgb(0xAB, 0x47, 0xBC),
                accent: Rgba::rgb(0xBA, 0x68, 0xC8),
            },
            Self::Green => Theme {
                kind: self,
                name: "Green",
                icon: "leaf.fill",
                primary: Rgba::rgb(0x4C, 0xAF, 0x50),
                secondary: Rgba::rgb(0x66, 0xBB, 0x6A),
                accent: Rgba::rgb(0x81, 0xC7, 0x84),
            },
        }
    }
}

/// A named palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Which built-in theme this is.
    pub kind: ThemeKind,
    /// Display name.
    pub name: &'static str,
    /// Symbol shown on the theme button.
    pub icon: &'static str,
    /// Main colour (shuffle button, key labels).
    pub primary: Rgba,
    /// Secondary colour (delete button).
    pub secondary: Rgba,
    /// Accent colour (clear button).
    pub accent: Rgba,
}

impl Theme {
    /// Primary colour fading to 80% opacity.
    pub fn primary_gradient(&self) -> Gradient {
        fade(self.primary)
    }

    /// Secondary colour fading to 80% opacity.
    pub fn secondary_gradient(&self) -> Gradient {
        fade(self.secondary)
    }

    /// Accent colour fading to 80% opacity.
    pub fn accent_gradient(&self) -> Gradient {
        fade(self.accent)
    }

    /// Key and input field border.
    pub fn border_gradient(&self) -> Gradient {
        Gradient { from: self.primary.with_opacity(0.3), to: self.secondary.with_opacity(0.3) }
    }
}

impl Default for Theme {
    fn default() -> Self {
        ThemeKind::default().theme()
    }
}

fn fade(colour: Rgba) -> Gradient {
    Gradient { from: colour, to: colour.with_opacity(0.8) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_six_digit_hex() {
        assert_eq!(Rgba::from_hex("#FF4B4B"), Ok(Rgba::rgb(255, 75, 75)));
    }

    #[test]
    fn parse_three_digit_hex() {
        assert_eq!(Rgba::from_hex("#FFF"), Ok(Rgba::rgb(255, 255, 255)));
        assert_eq!(Rgba::from_hex("1a3"), Ok(Rgba::rgb(0x11, 0xAA, 0x33)));
    }

    #[test]
    fn parse_eight_digit_hex_is_argb() {
        assert_eq!(Rgba::from_hex("#80FF0000"), Ok(Rgba { r: 255, g: 0, b: 0, a: 0x80 }));
    }

    #[test]
    fn bad_hex_rejected() {
        assert!(Rgba::from_hex("#12345").is_err());
        assert!(Rgba::from_hex("").is_err());
    }

    #[test]
    fn hex_round_trips_through_display() {
        for kind in ThemeKind::ALL {
            let theme = kind.theme();
            assert_eq!(Rgba::from_hex(&theme.primary.to_hex()), Ok(theme.primary));
        }
    }

    #[test]
    fn themes_cycle_back_to_start() {
        let mut kind = ThemeKind::default();
        for expected in [ThemeKind::Blue, ThemeKind::Purple, ThemeKind::Green, ThemeKind::Red] {
            kind = kind.next();
            assert_eq!(kind, expected);
        }
    }

    #[test]
    fn builtin_palettes_match_hex() {
        let blue = ThemeKind::Blue.theme();
        assert_eq!(Rgba::from_hex("#2196F3"), Ok(blue.primary));
        assert_eq!(Rgba::from_hex("#64B5F6"), Ok(blue.accent));
        assert_eq!(blue.icon, "water.waves");
    }

    #[test]
    fn border_is_translucent() {
        let border = Theme::default().border_gradient();
        assert_eq!(border.from.a, 77);
        assert_eq!(border.to, Rgba::rgb(0xFF, 0x8F, 0x1F).with_opacity(0.3));
    }

    #[test]
    fn opacity_is_clamped() {
        let c = Rgba::rgb(1, 2, 3);
        assert_eq!(c.with_opacity(2.0).a, 255);
        assert_eq!(c.with_opacity(-1.0).a, 0);
        assert_eq!(c.with_opacity(f32::NAN).a, 0);
    }
}
