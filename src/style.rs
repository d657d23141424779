use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, trace};

use crate::ansi::{RESET, esc, to_background};
use crate::{
    AnsiColors, Color, ColorChoice, ColorResolver, ModifierResolver,
    ParseColorError, StandardModifiers,
};

/// What to apply to a piece of text: an optional text color, an optional
/// background color and an ordered list of modifier names.
///
/// `C` is the color description handed to the [`ColorResolver`]; it defaults
/// to [`Color`].
///
/// Modifier names are kept as strings so that names the resolver doesn't
/// know can be passed along and skipped instead of rejected.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StyleOptions<C = Color> {
    fg_color: Option<C>,
    bg_color: Option<C>,
    modifiers: Vec<String>,
}

impl<C> Default for StyleOptions<C> {
    fn default() -> StyleOptions<C> {
        StyleOptions { fg_color: None, bg_color: None, modifiers: Vec::new() }
    }
}

impl<C> StyleOptions<C> {
    /// Create new options that apply no colors or modifiers.
    pub fn new() -> StyleOptions<C> {
        StyleOptions::default()
    }

    /// Get the text color.
    pub fn fg(&self) -> Option<&C> {
        self.fg_color.as_ref()
    }

    /// Set the text color.
    pub fn set_fg(&mut self, color: Option<C>) -> &mut StyleOptions<C> {
        self.fg_color = color;
        self
    }

    /// Get the background color.
    pub fn bg(&self) -> Option<&C> {
        self.bg_color.as_ref()
    }

    /// Set the background color.
    pub fn set_bg(&mut self, color: Option<C>) -> &mut StyleOptions<C> {
        self.bg_color = color;
        self
    }

    /// Get the modifier names, in the order they will be opened.
    pub fn modifiers(&self) -> &[String] {
        &self.modifiers
    }

    /// Append a modifier. It opens after, and closes before, every modifier
    /// already added.
    pub fn add_modifier<S: AsRef<str>>(&mut self, name: S) -> &mut StyleOptions<C> {
        self.modifiers.push(name.as_ref().to_string());
        self
    }

    /// Replace the modifier list.
    pub fn set_modifiers<I, S>(&mut self, names: I) -> &mut StyleOptions<C>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.modifiers = names.into_iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    /// Returns true if these options apply nothing.
    pub fn is_none(&self) -> bool {
        self.fg_color.is_none() && self.bg_color.is_none() && self.modifiers.is_empty()
    }

    /// Clears all colors and modifiers.
    pub fn clear(&mut self) {
        self.fg_color = None;
        self.bg_color = None;
        self.modifiers.clear();
    }
}

/// An error from parsing an invalid style string.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum StyleParseError {
    /// An error parsing a color.
    #[error(transparent)]
    InvalidColor(#[from] ParseColorError),
}

/// Parses whitespace separated tokens such as `fg:cyan bg:10,20,30 bold`.
///
/// `fg:` and `bg:` take anything [`Color`] parses. Every other token is a
/// modifier name; unknown names are kept and skipped when styling.
impl FromStr for StyleOptions<Color> {
    type Err = StyleParseError;

    fn from_str(spec: &str) -> Result<StyleOptions<Color>, StyleParseError> {
        let mut opts = StyleOptions::<Color>::new();
        for part in spec.split_whitespace() {
            if let Some(color) = part.strip_prefix("fg:") {
                opts.set_fg(Some(color.parse::<Color>()?));
            } else if let Some(color) = part.strip_prefix("bg:") {
                opts.set_bg(Some(color.parse::<Color>()?));
            } else {
                opts.add_modifier(part);
            }
        }
        Ok(opts)
    }
}

/// Wraps text in ANSI escape sequences.
///
/// A styler carries the on/off gate and the two lookups it needs. When the
/// gate is off, [`Styler::style`] returns the text untouched and never calls
/// either resolver.
///
/// Stylers hold no mutable state, so one can be shared freely between
/// threads as long as its resolvers can.
#[derive(Clone, Debug)]
pub struct Styler<R = AnsiColors, M = StandardModifiers> {
    enabled: bool,
    colors: R,
    modifiers: M,
}

impl Default for Styler {
    /// Follows `ColorChoice::Auto`.
    fn default() -> Styler {
        Styler::from_choice(ColorChoice::Auto)
    }
}

impl Styler {
    /// A styler with the default resolvers and an explicit gate.
    pub fn new(enabled: bool) -> Styler {
        Styler::with_resolvers(enabled, AnsiColors, StandardModifiers)
    }

    /// A styler with the default resolvers whose gate is decided once, now,
    /// from the given choice.
    pub fn from_choice(choice: ColorChoice) -> Styler {
        let enabled = choice.should_attempt_color();
        debug!(?choice, enabled, "resolved styling gate");
        Styler::new(enabled)
    }
}

impl<R, M> Styler<R, M> {
    /// A styler with custom color and modifier resolvers.
    pub fn with_resolvers(enabled: bool, colors: R, modifiers: M) -> Styler<R, M> {
        Styler { enabled, colors, modifiers }
    }

    /// Returns true if this styler emits escape sequences.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Turn escape sequence output on or off.
    pub fn set_enabled(&mut self, yes: bool) -> &mut Styler<R, M> {
        self.enabled = yes;
        self
    }
}

impl<R, M: ModifierResolver> Styler<R, M> {
    /// Wraps `text` in the sequences `opts` asks for.
    ///
    /// The output is `RESET`, the modifier open codes in order, the
    /// background sequence, the foreground sequence, `text`, the modifier
    /// close codes in reverse order and a final `RESET`. Colors that resolve
    /// to nothing and unknown modifiers are left out without complaint.
    ///
    /// With the gate off, `text` is returned as is, without the resets.
    pub fn style<C>(&self, text: &str, opts: &StyleOptions<C>) -> String
    where
        R: ColorResolver<C>,
    {
        if !self.enabled {
            return text.to_string();
        }

        let mut center = String::new();
        if let Some(bg) = opts.bg() {
            match self.resolve_color(bg) {
                Some(seq) => center.push_str(&to_background(&seq)),
                None => trace!("background color resolved to nothing"),
            }
        }
        if let Some(fg) = opts.fg() {
            match self.resolve_color(fg) {
                Some(seq) => center.push_str(&seq),
                None => trace!("text color resolved to nothing"),
            }
        }

        let mut open = String::new();
        let mut close = Vec::with_capacity(opts.modifiers().len());
        for name in opts.modifiers() {
            match self.modifiers.resolve(name) {
                Some((on, off)) => {
                    open.push_str(&esc(on));
                    close.push(esc(off));
                }
                None => trace!(modifier = %name, "skipping unknown modifier"),
            }
        }

        let close_len: usize = close.iter().map(String::len).sum();
        let mut out = String::with_capacity(
            2 * RESET.len() + open.len() + center.len() + text.len() + close_len,
        );
        out.push_str(RESET);
        out.push_str(&open);
        out.push_str(&center);
        out.push_str(text);
        for seq in close.iter().rev() {
            out.push_str(seq);
        }
        out.push_str(RESET);
        out
    }

    fn resolve_color<C>(&self, color: &C) -> Option<String>
    where
        R: ColorResolver<C>,
    {
        self.colors.resolve(color).filter(|seq| !seq.is_empty())
    }
}

/// Wraps `text` using the default resolvers, with the gate decided by
/// `ColorChoice::Auto` on every call.
///
/// Build a [`Styler`] once instead when styling many strings.
pub fn style(text: &str, opts: &StyleOptions) -> String {
    Styler::default().style(text, opts)
}
