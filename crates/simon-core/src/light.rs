//! Lights and the fixed color palette
//!
//! A [`Light`] is a single on/off cell with a bright ("on") color and a dim
//! ("off") color derived from it. The color a light shows is always computed
//! from its state; nothing can set it independently.

use std::fmt;

/// Channel multiplier used to derive a dim color from a bright one (x 7/10)
const DARKEN_NUMERATOR: u16 = 7;
const DARKEN_DENOMINATOR: u16 = 10;

/// An 8-bit RGB color, independent of any rendering library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// A darker version of this color (every channel scaled by 0.7, rounded down)
    pub fn darker(self) -> Self {
        let scale = |c: u8| ((c as u16 * DARKEN_NUMERATOR) / DARKEN_DENOMINATOR) as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }

    /// Parse `#rrggbb` (the leading `#` is optional)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// The fixed palette supplying each light's bright color.
///
/// Declaration order is board order: index 0 is red, 3 is blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightColor {
    Red,
    Yellow,
    Green,
    Blue,
}

impl LightColor {
    /// All palette entries in board order
    pub const ALL: [LightColor; 4] = [
        LightColor::Red,
        LightColor::Yellow,
        LightColor::Green,
        LightColor::Blue,
    ];

    pub fn rgb(self) -> Rgb {
        match self {
            LightColor::Red => Rgb::new(255, 0, 0),
            LightColor::Yellow => Rgb::new(255, 255, 0),
            LightColor::Green => Rgb::new(0, 128, 0),
            LightColor::Blue => Rgb::new(0, 0, 255),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LightColor::Red => "Red",
            LightColor::Yellow => "Yellow",
            LightColor::Green => "Green",
            LightColor::Blue => "Blue",
        }
    }

    /// Letter shortcut for pressing this light from the keyboard
    pub fn key(self) -> char {
        match self {
            LightColor::Red => 'r',
            LightColor::Yellow => 'y',
            LightColor::Green => 'g',
            LightColor::Blue => 'b',
        }
    }

    /// Position on the board
    pub fn index(self) -> usize {
        self as usize
    }

    /// Palette entry for a keyboard shortcut: `1`-`4` or a color initial
    pub fn from_key(c: char) -> Option<Self> {
        if let Some(digit) = c.to_digit(10) {
            let index = (digit as usize).checked_sub(1)?;
            return Self::ALL.get(index).copied();
        }
        let lower = c.to_ascii_lowercase();
        Self::ALL.into_iter().find(|color| color.key() == lower)
    }

    /// Board index for a keyboard shortcut
    pub fn index_for_key(c: char) -> Option<usize> {
        Self::from_key(c).map(Self::index)
    }
}

impl fmt::Display for LightColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single colored cell that can be switched on and off
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Light {
    is_on: bool,
    bright: Rgb,
    dim: Rgb,
}

impl Light {
    /// Create a light that starts off, showing the darkened version of `bright`
    pub fn new(bright: Rgb) -> Self {
        Self {
            is_on: false,
            bright,
            dim: bright.darker(),
        }
    }

    pub fn is_on(&self) -> bool {
        self.is_on
    }

    pub fn bright_color(&self) -> Rgb {
        self.bright
    }

    pub fn dim_color(&self) -> Rgb {
        self.dim
    }

    /// The color currently shown: bright when on, dim when off
    pub fn current_color(&self) -> Rgb {
        if self.is_on {
            self.bright
        } else {
            self.dim
        }
    }

    /// Flip the light and return the new state
    pub fn toggle(&mut self) -> bool {
        self.is_on = !self.is_on;
        self.is_on
    }

    /// Set the light state. Returns `true` when this changed anything.
    pub fn set_on(&mut self, on: bool) -> bool {
        if self.is_on == on {
            return false;
        }
        self.toggle();
        true
    }
}

impl From<LightColor> for Light {
    fn from(color: LightColor) -> Self {
        Light::new(color.rgb())
    }
}
