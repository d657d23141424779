//! Default implementations of the color and modifier lookups.

use tracing::debug;

use crate::ansi::ansi_color;
use crate::{Color, ColorResolver, Modifier, ModifierResolver};

/// Encodes colors with the standard ANSI foreground sequences.
///
/// Besides [`Color`] itself, this accepts anything `Color`'s `FromStr` does
/// (names, `#rrggbb`, `208`, `10,20,30`), an `(r, g, b)` triple and a bare
/// `u8` palette index. Strings that don't parse resolve to nothing.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AnsiColors;

impl ColorResolver<Color> for AnsiColors {
    fn resolve(&self, color: &Color) -> Option<String> {
        Some(ansi_color(color))
    }
}

impl ColorResolver<str> for AnsiColors {
    fn resolve(&self, color: &str) -> Option<String> {
        match color.parse::<Color>() {
            Ok(color) => Some(ansi_color(&color)),
            Err(err) => {
                debug!(%err, "ignoring unparseable color");
                None
            }
        }
    }
}

impl ColorResolver<&str> for AnsiColors {
    fn resolve(&self, color: &&str) -> Option<String> {
        ColorResolver::<str>::resolve(self, color)
    }
}

impl ColorResolver<String> for AnsiColors {
    fn resolve(&self, color: &String) -> Option<String> {
        ColorResolver::<str>::resolve(self, color)
    }
}

impl ColorResolver<(u8, u8, u8)> for AnsiColors {
    fn resolve(&self, &(r, g, b): &(u8, u8, u8)) -> Option<String> {
        Some(ansi_color(&Color::Rgb(r, g, b)))
    }
}

impl ColorResolver<u8> for AnsiColors {
    fn resolve(&self, &n: &u8) -> Option<String> {
        Some(ansi_color(&Color::Ansi256(n)))
    }
}

/// Looks modifier names up in the [`Modifier`] vocabulary.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct StandardModifiers;

impl ModifierResolver for StandardModifiers {
    fn resolve(&self, name: &str) -> Option<(u8, u8)> {
        Modifier::from_name(name).map(|m| m.codes())
    }
}
