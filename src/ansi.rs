//! ANSI escape sequence functionality for terminal color output.
//!
//! This module provides the low-level pieces the styler is built from: the
//! reset code, SGR formatting for a single code, the foreground encoding of a
//! [`Color`] and the rewrite of foreground color sequences into their
//! background equivalents.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::Color;

/// Clears all attributes back to the terminal default.
pub const RESET: &str = "\x1B[0m";

/// 24-bit foreground: `ESC[38;2;R;G;Bm`.
static RGB_FG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b\[38;2;([0-9]{1,3});([0-9]{1,3});([0-9]{1,3})m")
        .expect("Invalid RGB foreground regex")
});

/// 256-color foreground: `ESC[38;5;Nm`.
static ANSI256_FG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b\[38;5;([0-9]{1,3})m").expect("Invalid ansi256 foreground regex")
});

/// Basic and bright foreground: `ESC[30m`-`ESC[37m` and `ESC[90m`-`ESC[97m`.
///
/// The code must be followed directly by `m`, so the `38;` prefix of the
/// extended forms (and their rewritten `48;` output) never matches here.
static BASIC_FG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b\[(3[0-7]|9[0-7])m").expect("Invalid basic foreground regex")
});

/// Formats a single SGR code as `ESC[<code>m`.
pub fn esc(code: u8) -> String {
    format!("\x1B[{code}m")
}

/// Returns the foreground escape sequence for the given color.
///
/// Named colors use the 30-37/90-97 codes, `Ansi256` uses `38;5;N` and `Rgb`
/// uses `38;2;R;G;B`.
pub fn ansi_color(color: &Color) -> String {
    let mut seq = String::new();
    // Writing into a String can't fail.
    let _ = write_ansi_color(&mut seq, color);
    seq
}

/// Writes the foreground escape sequence for the given color to `wtr`.
pub fn write_ansi_color<W: Write>(mut wtr: W, color: &Color) -> std::fmt::Result {
    match *color {
        Color::Black => write!(wtr, "\x1B[30m"),
        Color::Red => write!(wtr, "\x1B[31m"),
        Color::Green => write!(wtr, "\x1B[32m"),
        Color::Yellow => write!(wtr, "\x1B[33m"),
        Color::Blue => write!(wtr, "\x1B[34m"),
        Color::Magenta => write!(wtr, "\x1B[35m"),
        Color::Cyan => write!(wtr, "\x1B[36m"),
        Color::White => write!(wtr, "\x1B[37m"),
        Color::BrightBlack => write!(wtr, "\x1B[90m"),
        Color::BrightRed => write!(wtr, "\x1B[91m"),
        Color::BrightGreen => write!(wtr, "\x1B[92m"),
        Color::BrightYellow => write!(wtr, "\x1B[93m"),
        Color::BrightBlue => write!(wtr, "\x1B[94m"),
        Color::BrightMagenta => write!(wtr, "\x1B[95m"),
        Color::BrightCyan => write!(wtr, "\x1B[96m"),
        Color::BrightWhite => write!(wtr, "\x1B[97m"),
        Color::Ansi256(n) => write!(wtr, "\x1B[38;5;{n}m"),
        Color::Rgb(r, g, b) => write!(wtr, "\x1B[38;2;{r};{g};{b}m"),
    }
}

/// Rewrites every foreground color sequence in `seq` into its background
/// equivalent.
///
/// Three passes run in order over the whole string: 24-bit (`38;2;` to
/// `48;2;`), 256-color (`38;5;` to `48;5;`), then basic and bright codes
/// (30-37 and 90-97, plus 10). Captured digits are copied verbatim, so
/// `ESC[38;2;007;0;0m` keeps its leading zeros. Anything else in the string,
/// including other SGR codes, passes through unchanged.
pub fn to_background(seq: &str) -> String {
    let seq = RGB_FG_RE.replace_all(seq, "\x1B[48;2;${1};${2};${3}m");
    let seq = ANSI256_FG_RE.replace_all(&seq, "\x1B[48;5;${1}m");
    let seq = BASIC_FG_RE.replace_all(&seq, |caps: &Captures<'_>| {
        match caps[1].parse::<u8>() {
            Ok(code) => esc(code + 10),
            Err(_) => caps[0].to_string(),
        }
    });
    seq.into_owned()
}
