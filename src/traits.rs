/// Turns a color description into a raw foreground escape sequence.
///
/// `C` is whatever the caller uses to describe a color: a [`Color`], a color
/// name, an RGB triple. Implementations must produce one of the sequence
/// families the styler knows how to turn into a background:
///
/// * `ESC[38;2;R;G;Bm` (24-bit)
/// * `ESC[38;5;Nm` (256-color)
/// * `ESC[30m`-`ESC[37m` and `ESC[90m`-`ESC[97m` (basic and bright)
///
/// Returning `None` (or an empty string) means "no color", and the styler
/// silently leaves that color out. Resolvers should never panic on bad input.
///
/// Implementations must be safe to call from several threads at once if the
/// styler using them is shared.
///
/// [`Color`]: crate::Color
pub trait ColorResolver<C: ?Sized> {
    /// Returns the foreground escape sequence for `color`, if there is one.
    fn resolve(&self, color: &C) -> Option<String>;
}

/// Looks up the SGR (open, close) code pair for a modifier name such as
/// `bold` or `underline`.
///
/// Unknown names return `None` and are skipped by the styler.
pub trait ModifierResolver {
    /// Returns the `(open, close)` codes for `name`, if it is known.
    fn resolve(&self, name: &str) -> Option<(u8, u8)>;
}

impl<C: ?Sized, T: ?Sized + ColorResolver<C>> ColorResolver<C> for &T {
    fn resolve(&self, color: &C) -> Option<String> {
        (**self).resolve(color)
    }
}

impl<C: ?Sized, T: ?Sized + ColorResolver<C>> ColorResolver<C> for Box<T> {
    fn resolve(&self, color: &C) -> Option<String> {
        (**self).resolve(color)
    }
}

impl<T: ?Sized + ModifierResolver> ModifierResolver for &T {
    fn resolve(&self, name: &str) -> Option<(u8, u8)> {
        (**self).resolve(name)
    }
}

impl<T: ?Sized + ModifierResolver> ModifierResolver for Box<T> {
    fn resolve(&self, name: &str) -> Option<(u8, u8)> {
        (**self).resolve(name)
    }
}
