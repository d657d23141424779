/*!
This crate wraps text in ANSI escape sequences: a text color, a background
color and any number of modifiers such as bold or underline, bracketed by
reset codes so that nothing leaks into the surrounding output.

# Organization

[`Styler`] does the composing. It owns a gate that switches all escape
sequence output on or off, a [`ColorResolver`] that turns a color description
into a foreground sequence and a [`ModifierResolver`] that turns a modifier
name into its open/close code pair. The defaults, [`AnsiColors`] and
[`StandardModifiers`], cover [`Color`] and [`Modifier`]; either can be swapped
for a custom implementation.

Background sequences are derived from foreground ones by
[`ansi::to_background`], so a resolver only ever has to produce foreground
colors.

[`ColorChoice`] decides the gate from the environment: `NO_COLOR`,
`FORCE_COLOR`, `TERM` and whether stdout is a terminal.

# Example

```
use ansistyle::{Color, StyleOptions, Styler};

let styler = Styler::new(true);
let mut opts = StyleOptions::new();
opts.set_fg(Some(Color::Cyan)).add_modifier("bold");
assert_eq!(
    styler.style("Hi", &opts),
    "\x1b[0m\x1b[1m\x1b[36mHi\x1b[22m\x1b[0m",
);

// With the gate off, text comes back untouched.
assert_eq!(Styler::new(false).style("Hi", &opts), "Hi");
```

Options can also be parsed from a string:

```
use ansistyle::{StyleOptions, Styler};

let opts: StyleOptions = "fg:#ff6b35 bg:black underline".parse().unwrap();
let styled = Styler::new(true).style("warning", &opts);
assert!(styled.starts_with("\x1b[0m\x1b[4m\x1b[40m\x1b[38;2;255;107;53m"));
```
*/

pub mod ansi;
mod modifier;
mod resolvers;
mod style;
mod traits;
mod types;

pub use modifier::{Modifier, ParseModifierError};
pub use resolvers::{AnsiColors, StandardModifiers};
pub use style::{StyleOptions, StyleParseError, Styler, style};
pub use traits::{ColorResolver, ModifierResolver};
pub use types::{Color, ColorChoice, ColorChoiceParseError, ParseColorError};
