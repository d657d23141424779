use std::env;
use std::ffi::OsString;
use std::fmt;
use std::io::{self, IsTerminal};
use std::str::FromStr;

use thiserror::Error;

/// ColorChoice represents the color preferences of an end user.
///
/// It is the configuration surface for the styling gate: a [`Styler`] built
/// from a choice either emits escape sequences for every call or for none.
///
/// The `Default` implementation for this type will select `Auto`, which tries
/// to do the right thing based on the current environment.
///
/// The `FromStr` implementation for this type converts a lowercase string of
/// the variant name to the corresponding variant. Any other string results in
/// an error.
///
/// [`Styler`]: crate::Styler
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ColorChoice {
    /// Always emit escape sequences.
    Always,
    /// Emit escape sequences only when stdout is a terminal and the
    /// environment doesn't object (`NO_COLOR`, `TERM=dumb`). `FORCE_COLOR`
    /// overrides the terminal check.
    #[default]
    Auto,
    /// Never emit escape sequences.
    Never,
}

impl FromStr for ColorChoice {
    type Err = ColorChoiceParseError;

    fn from_str(s: &str) -> Result<ColorChoice, ColorChoiceParseError> {
        match s.to_lowercase().as_str() {
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            "auto" => Ok(ColorChoice::Auto),
            unknown => Err(ColorChoiceParseError {
                unknown_choice: unknown.to_string(),
            }),
        }
    }
}

impl ColorChoice {
    /// Returns true if we should attempt to write colored output.
    ///
    /// For `Auto`, this reads the process environment and checks whether
    /// stdout is a terminal. The answer is not cached.
    pub fn should_attempt_color(&self) -> bool {
        self.should_attempt_color_with(
            |key| env::var_os(key),
            io::stdout().is_terminal(),
        )
    }

    /// Like `should_attempt_color`, but with the environment lookup and the
    /// terminal check supplied by the caller.
    pub fn should_attempt_color_with<F>(&self, lookup: F, is_tty: bool) -> bool
    where
        F: Fn(&str) -> Option<OsString>,
    {
        match *self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => env_allows_color(&lookup, is_tty),
        }
    }
}

fn env_allows_color<F>(lookup: &F, is_tty: bool) -> bool
where
    F: Fn(&str) -> Option<OsString>,
{
    // NO_COLOR wins over everything, but only when it has a value.
    if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        return false;
    }
    if let Some(force) = lookup("FORCE_COLOR") {
        if force != "0" && force != "false" {
            return true;
        }
    }
    if !is_tty {
        return false;
    }
    term_allows_color(lookup("TERM"))
}

#[cfg(not(windows))]
fn term_allows_color(term: Option<OsString>) -> bool {
    // If TERM isn't set, then we are in a weird environment that
    // probably doesn't support colors.
    matches!(term, Some(k) if k != "dumb")
}

#[cfg(windows)]
fn term_allows_color(term: Option<OsString>) -> bool {
    // On Windows, if TERM isn't set, then we shouldn't automatically
    // assume that colors aren't allowed.
    term.is_none_or(|k| k != "dumb")
}

/// An error that occurs when parsing a `ColorChoice` fails.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error(
    "unrecognized color choice '{unknown_choice}': valid choices are: \
     always, never, auto"
)]
pub struct ColorChoiceParseError {
    unknown_choice: String,
}

impl ColorChoiceParseError {
    /// Return the string that couldn't be parsed as a valid color choice.
    pub fn invalid_choice(&self) -> &str {
        &self.unknown_choice
    }
}

/// The set of colors a foreground or background can be set to.
///
/// This type has a `FromStr` impl that can parse colors from their human
/// readable form. The format is as follows:
///
/// 1. Any of the explicitly listed colors in English, matched case
///    insensitively. Bright variants may be written `bright_red`,
///    `bright-red`, `brightred` or `redBright`. `gray` and `grey` are
///    aliases for `bright_black`.
/// 2. A `#rgb` or `#rrggbb` hex code.
/// 3. A single 8-bit integer, in either decimal or hexadecimal format.
/// 4. A triple of 8-bit integers separated by a comma, where each integer is
///    in decimal or hexadecimal format.
///
/// Hexadecimal numbers are written with a `0x` prefix.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    Ansi256(u8),
    Rgb(u8, u8, u8),
}

impl Color {
    fn from_basic_name(name: &str) -> Option<Color> {
        let color = match name {
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            _ => return None,
        };
        Some(color)
    }

    fn brighten(self) -> Color {
        match self {
            Color::Black => Color::BrightBlack,
            Color::Red => Color::BrightRed,
            Color::Green => Color::BrightGreen,
            Color::Yellow => Color::BrightYellow,
            Color::Blue => Color::BrightBlue,
            Color::Magenta => Color::BrightMagenta,
            Color::Cyan => Color::BrightCyan,
            Color::White => Color::BrightWhite,
            other => other,
        }
    }

    /// Parses a (lowercased) color name, including the bright spellings.
    fn from_name(name: &str) -> Option<Color> {
        if name == "gray" || name == "grey" {
            return Some(Color::BrightBlack);
        }
        let bright = name
            .strip_prefix("bright_")
            .or_else(|| name.strip_prefix("bright-"))
            .or_else(|| name.strip_prefix("bright"))
            .or_else(|| name.strip_suffix("bright"));
        match bright {
            Some(base) => Color::from_basic_name(base).map(Color::brighten),
            None => Color::from_basic_name(name),
        }
    }

    /// Parses a `#rgb` or `#rrggbb` hex code, without the leading `#`.
    fn from_str_hex(hex: &str) -> Result<Color, ParseColorError> {
        let err = || ParseColorError {
            kind: ParseColorErrorKind::InvalidHex,
            given: format!("#{hex}"),
        };
        // from_str_radix would take a leading sign, so check every byte.
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| err());
        match hex.len() {
            // #rgb -> #rrggbb
            3 => Ok(Color::Rgb(
                channel(&hex[0..1])? * 17,
                channel(&hex[1..2])? * 17,
                channel(&hex[2..3])? * 17,
            )),
            6 => Ok(Color::Rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(err()),
        }
    }

    /// Parses a numeric color string, either ANSI or RGB.
    fn from_str_numeric(s: &str) -> Result<Color, ParseColorError> {
        // The "ansi256" format is a single number (decimal or hex)
        // corresponding to one of 256 colors.
        //
        // The "rgb" format is a triple of numbers (decimal or hex) delimited
        // by a comma corresponding to one of 256^3 colors.

        fn parse_number(s: &str) -> Option<u8> {
            let s = s.trim();
            if let Some(hex_str) = s.strip_prefix("0x") {
                if !hex_str.bytes().all(|b| b.is_ascii_hexdigit()) {
                    return None;
                }
                u8::from_str_radix(hex_str, 16).ok()
            } else if s.bytes().all(|b| b.is_ascii_digit()) {
                s.parse::<u8>().ok()
            } else {
                None
            }
        }

        let error = |kind| ParseColorError { kind, given: s.to_string() };
        let codes: Vec<&str> = s.split(',').collect();
        match codes.as_slice() {
            [single] => match parse_number(*single) {
                Some(n) => Ok(Color::Ansi256(n)),
                None if s.chars().all(|c| c.is_ascii_hexdigit()) => {
                    Err(error(ParseColorErrorKind::InvalidAnsi256))
                }
                None => Err(error(ParseColorErrorKind::InvalidName)),
            },
            [r, g, b] => {
                let channel = |c: &str| {
                    parse_number(c)
                        .ok_or_else(|| error(ParseColorErrorKind::InvalidRgb))
                };
                Ok(Color::Rgb(channel(*r)?, channel(*g)?, channel(*b)?))
            }
            _ => Err(error(ParseColorErrorKind::InvalidRgb)),
        }
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Color, ParseColorError> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return Color::from_str_hex(hex);
        }
        match Color::from_name(&s.to_lowercase()) {
            Some(color) => Ok(color),
            None => Color::from_str_numeric(s),
        }
    }
}

/// An error from parsing an invalid color specification.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("{kind}, but got '{given}'")]
pub struct ParseColorError {
    kind: ParseColorErrorKind,
    given: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ParseColorErrorKind {
    InvalidName,
    InvalidAnsi256,
    InvalidRgb,
    InvalidHex,
}

impl ParseColorError {
    /// Return the string that couldn't be parsed as a valid color.
    pub fn invalid(&self) -> &str {
        &self.given
    }
}

impl fmt::Display for ParseColorErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use self::ParseColorErrorKind::*;
        match *self {
            InvalidName => write!(
                f,
                "unrecognized color name, choose from: black, red, green, \
                 yellow, blue, magenta, cyan, white (or a bright variant)"
            ),
            InvalidAnsi256 => write!(
                f,
                "unrecognized ansi256 color number, \
                 should be '[0-255]' (or a hex number)"
            ),
            InvalidRgb => write!(
                f,
                "unrecognized RGB color triple, \
                 should be '[0-255],[0-255],[0-255]' (or a hex triple)"
            ),
            InvalidHex => {
                write!(f, "unrecognized hex color, should be '#rgb' or '#rrggbb'")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_of<'a>(
        vars: &'a [(&'a str, &'a str)],
    ) -> impl Fn(&str) -> Option<OsString> + 'a {
        move |key: &str| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| OsString::from(*v))
        }
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Cyan".parse::<Color>().unwrap(), Color::Cyan);
        assert_eq!("WHITE".parse::<Color>().unwrap(), Color::White);
    }

    #[test]
    fn parses_bright_spellings() {
        for name in ["bright_red", "bright-red", "brightred", "redBright"] {
            assert_eq!(name.parse::<Color>().unwrap(), Color::BrightRed, "{name}");
        }
        assert_eq!("grey".parse::<Color>().unwrap(), Color::BrightBlack);
    }

    #[test]
    fn parses_hex() {
        assert_eq!("#ff6b35".parse::<Color>().unwrap(), Color::Rgb(255, 107, 53));
        assert_eq!("#fff".parse::<Color>().unwrap(), Color::Rgb(255, 255, 255));
        let err = "#ff6b3".parse::<Color>().unwrap_err();
        assert_eq!(err.invalid(), "#ff6b3");
        assert!("#ééé".parse::<Color>().is_err());
    }

    #[test]
    fn rejects_signed_components() {
        let err = "#+fffff".parse::<Color>().unwrap_err();
        assert_eq!(err.kind, ParseColorErrorKind::InvalidHex);
        assert_eq!(err.invalid(), "#+fffff");
        assert!("#+ff".parse::<Color>().is_err());
        assert!("+5".parse::<Color>().is_err());
        assert!("0x+5".parse::<Color>().is_err());
        let err = "1,+2,3".parse::<Color>().unwrap_err();
        assert_eq!(err.kind, ParseColorErrorKind::InvalidRgb);
    }

    #[test]
    fn parses_numeric() {
        assert_eq!("208".parse::<Color>().unwrap(), Color::Ansi256(208));
        assert_eq!("0xff".parse::<Color>().unwrap(), Color::Ansi256(255));
        assert_eq!(
            "10, 20,0x1e".parse::<Color>().unwrap(),
            Color::Rgb(10, 20, 30)
        );
    }

    #[test]
    fn rejects_bad_numbers() {
        let err = "256".parse::<Color>().unwrap_err();
        assert_eq!(err.kind, ParseColorErrorKind::InvalidAnsi256);
        let err = "1,2".parse::<Color>().unwrap_err();
        assert_eq!(err.kind, ParseColorErrorKind::InvalidRgb);
        let err = "chartreuse".parse::<Color>().unwrap_err();
        assert_eq!(err.kind, ParseColorErrorKind::InvalidName);
        assert!(err.to_string().contains("'chartreuse'"));
    }

    #[test]
    fn color_choice_from_str() {
        assert_eq!("Always".parse::<ColorChoice>().unwrap(), ColorChoice::Always);
        assert_eq!("never".parse::<ColorChoice>().unwrap(), ColorChoice::Never);
        let err = "sometimes".parse::<ColorChoice>().unwrap_err();
        assert_eq!(err.invalid_choice(), "sometimes");
    }

    #[test]
    fn always_and_never_ignore_environment() {
        let env = env_of(&[("NO_COLOR", "1")]);
        assert!(ColorChoice::Always.should_attempt_color_with(&env, false));
        let env = env_of(&[("FORCE_COLOR", "1")]);
        assert!(!ColorChoice::Never.should_attempt_color_with(&env, true));
    }

    #[test]
    fn auto_requires_a_terminal() {
        let env = env_of(&[("TERM", "xterm-256color")]);
        assert!(ColorChoice::Auto.should_attempt_color_with(&env, true));
        assert!(!ColorChoice::Auto.should_attempt_color_with(&env, false));
    }

    #[test]
    fn auto_respects_no_color_and_dumb_term() {
        let env = env_of(&[("TERM", "xterm"), ("NO_COLOR", "1")]);
        assert!(!ColorChoice::Auto.should_attempt_color_with(&env, true));
        let env = env_of(&[("TERM", "dumb")]);
        assert!(!ColorChoice::Auto.should_attempt_color_with(&env, true));
        // An empty NO_COLOR doesn't count.
        let env = env_of(&[("TERM", "xterm"), ("NO_COLOR", "")]);
        assert!(ColorChoice::Auto.should_attempt_color_with(&env, true));
    }

    #[test]
    fn auto_force_color_skips_terminal_check() {
        let env = env_of(&[("FORCE_COLOR", "1")]);
        assert!(ColorChoice::Auto.should_attempt_color_with(&env, false));
        let env = env_of(&[("FORCE_COLOR", "0")]);
        assert!(!ColorChoice::Auto.should_attempt_color_with(&env, false));
        let env = env_of(&[("FORCE_COLOR", "1"), ("NO_COLOR", "1")]);
        assert!(!ColorChoice::Auto.should_attempt_color_with(&env, true));
    }
}
