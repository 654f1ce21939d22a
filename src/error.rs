use thiserror::Error;

use super::color::Encoding;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidSpec {
    #[error("at least two colors are required (found {found})")]
    TooFewColors { found: usize },
    #[error("position length must equal colors length ({positions} positions for {colors} colors)")]
    LengthMismatch { positions: usize, colors: usize },
    #[error("position must start at 0 and end at 1 (found {first} and {last})")]
    Endpoints { first: f64, last: f64 },
    #[error("positions not monotonically non-decreasing (position {index} is {value})")]
    NonMonotonic { index: usize, value: f64 },
    #[error("channel value {value} of color {index} outside the {encoding} range")]
    ChannelOutOfRange { index: usize, value: f64, encoding: Encoding },
    #[error("channel value {value} of the {kind} color outside the {encoding} range")]
    ExtremeOutOfRange { kind: &'static str, value: f64, encoding: Encoding },
}

#[derive(Error, Debug)]
pub enum TableError {
    #[error("invalid color table, {0}")]
    InvalidSpec(#[from] InvalidSpec),
    #[error("could not parse color table file\n{0}")]
    JsonError(#[from] serde_json::Error),
    #[error("could not parse color table file\n{0}")]
    RonError(#[from] ron::error::SpannedError),
    #[error("could not parse color table file\n{0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("failed to read input file\n{0}")]
    FileReadError(#[from] std::io::Error),
    #[error("input file does not have valid extension (must be .json, .ron, .yaml or .yml)")]
    ExtensionError,
    #[error("failed to save image\n{0}")]
    ImageSaveError(#[from] image::ImageError),
    #[error("cannot register a color table without a name")]
    Unnamed,
    #[error("unknown preset '{0}'")]
    UnknownPreset(String),
}
