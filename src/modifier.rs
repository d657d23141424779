use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A text attribute that isn't a color.
///
/// Each modifier is switched on and off by a pair of SGR codes, see
/// [`Modifier::codes`]. Several names share a code pair: `faint` is `dim`,
/// `swapColors` is `inverse` and `conceal` is `hidden`.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Modifier {
    Bold,
    Dim,
    Italic,
    Underline,
    Blink,
    Inverse,
    Hidden,
    Strikethrough,
    DoubleUnderline,
    Framed,
    Overlined,
}

impl Modifier {
    /// Every modifier, in SGR code order.
    pub const ALL: [Modifier; 11] = [
        Modifier::Bold,
        Modifier::Dim,
        Modifier::Italic,
        Modifier::Underline,
        Modifier::Blink,
        Modifier::Inverse,
        Modifier::Hidden,
        Modifier::Strikethrough,
        Modifier::DoubleUnderline,
        Modifier::Framed,
        Modifier::Overlined,
    ];

    /// The `(open, close)` SGR codes.
    ///
    /// Close codes are shared where the terminal has no finer control:
    /// 22 ends both bold and dim, 24 ends both underline styles.
    pub fn codes(&self) -> (u8, u8) {
        match *self {
            Modifier::Bold => (1, 22),
            Modifier::Dim => (2, 22),
            Modifier::Italic => (3, 23),
            Modifier::Underline => (4, 24),
            Modifier::Blink => (5, 25),
            Modifier::Inverse => (7, 27),
            Modifier::Hidden => (8, 28),
            Modifier::Strikethrough => (9, 29),
            Modifier::DoubleUnderline => (21, 24),
            Modifier::Framed => (51, 54),
            Modifier::Overlined => (53, 55),
        }
    }

    /// The canonical name of this modifier.
    pub fn as_str(&self) -> &'static str {
        match *self {
            Modifier::Bold => "bold",
            Modifier::Dim => "dim",
            Modifier::Italic => "italic",
            Modifier::Underline => "underline",
            Modifier::Blink => "blink",
            Modifier::Inverse => "inverse",
            Modifier::Hidden => "hidden",
            Modifier::Strikethrough => "strikethrough",
            Modifier::DoubleUnderline => "doubleUnderline",
            Modifier::Framed => "framed",
            Modifier::Overlined => "overlined",
        }
    }

    /// Looks up a modifier by name or alias, ignoring case.
    pub fn from_name(name: &str) -> Option<Modifier> {
        let modifier = match name.to_lowercase().as_str() {
            "bold" => Modifier::Bold,
            "dim" | "faint" => Modifier::Dim,
            "italic" => Modifier::Italic,
            "underline" => Modifier::Underline,
            "blink" => Modifier::Blink,
            "inverse" | "swapcolors" => Modifier::Inverse,
            "hidden" | "conceal" => Modifier::Hidden,
            "strikethrough" | "crossedout" => Modifier::Strikethrough,
            "doubleunderline" => Modifier::DoubleUnderline,
            "framed" => Modifier::Framed,
            "overlined" => Modifier::Overlined,
            _ => return None,
        };
        Some(modifier)
    }
}

impl AsRef<str> for Modifier {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Modifier {
    type Err = ParseModifierError;

    fn from_str(s: &str) -> Result<Modifier, ParseModifierError> {
        Modifier::from_name(s).ok_or_else(|| ParseModifierError {
            given: s.to_string(),
        })
    }
}

/// An error from parsing an unknown modifier name.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("unrecognized modifier '{given}'")]
pub struct ParseModifierError {
    given: String,
}

impl ParseModifierError {
    /// Return the string that couldn't be parsed as a modifier.
    pub fn invalid(&self) -> &str {
        &self.given
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_share_codes() {
        let pairs = [
            ("faint", "dim"),
            ("swapColors", "inverse"),
            ("conceal", "hidden"),
            ("crossedOut", "strikethrough"),
        ];
        for (alias, name) in pairs {
            assert_eq!(Modifier::from_name(alias), Modifier::from_name(name), "{alias}");
        }
    }

    #[test]
    fn canonical_names_round_trip() {
        for modifier in Modifier::ALL {
            assert_eq!(modifier.as_str().parse::<Modifier>().unwrap(), modifier);
        }
    }

    #[test]
    fn known_code_pairs() {
        assert_eq!(Modifier::Bold.codes(), (1, 22));
        assert_eq!(Modifier::Underline.codes(), (4, 24));
        assert_eq!(Modifier::DoubleUnderline.codes(), (21, 24));
        assert_eq!(Modifier::Overlined.codes(), (53, 55));
    }

    #[test]
    fn unknown_name_is_an_error() {
        assert_eq!(Modifier::from_name("sparkle"), None);
        let err = "sparkle".parse::<Modifier>().unwrap_err();
        assert_eq!(err.invalid(), "sparkle");
        assert_eq!(err.to_string(), "unrecognized modifier 'sparkle'");
    }
}
