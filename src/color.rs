use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of levels in an 8-bit channel.
pub const EIGHT_BIT_LEVELS: usize = 256;

/// Uniform ramp from 0 to 1, indexed by raw 8-bit channel values.
///
/// Index 255 is exactly 1.0.
pub const EIGHT_BIT_RAMP: [f64; EIGHT_BIT_LEVELS] = eight_bit_ramp();

const fn eight_bit_ramp() -> [f64; EIGHT_BIT_LEVELS] {
    let step = 1.0 / (EIGHT_BIT_LEVELS - 1) as f64;
    let mut ramp = [0.0; EIGHT_BIT_LEVELS];
    let mut i = 0;
    while i < EIGHT_BIT_LEVELS {
        ramp[i] = i as f64 * step;
        i += 1;
    }
    ramp[EIGHT_BIT_LEVELS - 1] = 1.0;
    ramp
}

/// How the channel values handed to a table builder are encoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    /// Channels already lie in `[0, 1]`.
    #[default]
    Arithmetic,
    /// Channels are integers in `[0, 255]`.
    EightBit,
}

impl Encoding {
    /// Maps a raw channel value to `[0, 1]`, or `None` if it is outside the
    /// range of this encoding. Values are never clamped.
    pub fn normalize(self, value: f64) -> Option<f64> {
        match self {
            Encoding::Arithmetic => (0.0..=1.0).contains(&value).then_some(value),
            Encoding::EightBit => {
                if value.fract() != 0.0 || !(0.0..=255.0).contains(&value) {
                    return None;
                }
                Some(EIGHT_BIT_RAMP[value as usize])
            }
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Arithmetic => write!(f, "arithmetic [0, 1]"),
            Encoding::EightBit => write!(f, "8-bit [0, 255]"),
        }
    }
}

/// An RGB color with every channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

impl Color {
    pub const BLACK: Color = Color::rgb(0., 0., 0.);
    pub const WHITE: Color = Color::rgb(1., 1., 1.);

    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Color { red, green, blue }
    }

    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Color {
            red: EIGHT_BIT_RAMP[red as usize],
            green: EIGHT_BIT_RAMP[green as usize],
            blue: EIGHT_BIT_RAMP[blue as usize],
        }
    }

    /// Decodes raw channels under `encoding`. On failure the offending raw
    /// value is returned.
    pub fn decode(channels: [f64; 3], encoding: Encoding) -> Result<Self, f64> {
        let [red, green, blue] = channels
            .map(|c| encoding.normalize(c).ok_or(c));
        Ok(Color { red: red?, green: green?, blue: blue? })
    }

    pub fn lerp(start: Self, end: Self, t: f64) -> Self {
        Color {
            red: lerp(start.red, end.red, t),
            green: lerp(start.green, end.green, t),
            blue: lerp(start.blue, end.blue, t)
        }
    }

    pub fn channels(&self) -> [f64; 3] {
        [self.red, self.green, self.blue]
    }

    /// Nearest 8-bit representation.
    pub fn to_rgb8(&self) -> [u8; 3] {
        self.channels().map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}

impl From<Color> for [f64; 3] {
    fn from(color: Color) -> [f64; 3] {
        color.channels()
    }
}
