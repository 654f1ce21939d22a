//! Color tables for radar and satellite products.
//!
//! The anchors are plain data; every table goes through [`ColorTable::build`]
//! like any other.

use super::{
    color::*,
    error::*,
    table::*
};

/// Products with a predefined color table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Base reflectivity, -30 to 80 dBZ.
    Reflectivity,
    /// Spectrum width.
    SpectrumWidth,
    /// Velocity gradient.
    VelocityGradient,
    /// Azimuthal shear and divergent shear.
    AzShear,
    /// Azimuthal shear with the hues swapped, so that convergence reads red.
    AzShearReversed,
    /// GOES channel 13, clean longwave IR.
    CleanIr,
    /// GOES water vapor channels 8 to 10.
    WaterVapor,
}

const REFLECTIVITY_COLORS: &[[u8; 3]] = &[
    [0, 0, 0], [130, 130, 130], [95, 189, 207], [57, 201, 105], [57, 201, 105],
    [0, 40, 0], [9, 94, 9], [255, 207, 0], [255, 207, 0], [255, 207, 0],
    [255, 133, 0], [255, 0, 0], [89, 0, 0], [255, 245, 255], [225, 11, 227],
    [164, 0, 247], [99, 0, 214], [5, 221, 224], [58, 103, 181], [255, 255, 255],
];

const REFLECTIVITY_POSITIONS: &[f64] = &[
    0.0, 45.0 / 110.0, 46.0 / 110.0, 50.0 / 110.0, 51.0 / 110.0,
    65.0 / 110.0, 66.0 / 110.0, 70.0 / 110.0, 71.0 / 110.0, 80.0 / 110.0,
    81.0 / 110.0, 90.0 / 110.0, 91.0 / 110.0, 100.0 / 110.0, 101.0 / 110.0,
    105.0 / 110.0, 106.0 / 110.0, 107.0 / 110.0, 109.0 / 110.0, 1.0,
];

const SPECTRUM_WIDTH_COLORS: &[[u8; 3]] = &[
    [0, 0, 0], [220, 220, 255], [180, 180, 240], [50, 50, 150],
    [255, 255, 0], [255, 150, 0], [255, 0, 0], [255, 255, 255],
];

const SPECTRUM_WIDTH_POSITIONS: &[f64] = &[
    0.0, 1.0 / 40.0, 5.0 / 40.0, 0.25, 15.0 / 40.0, 0.5, 0.75, 1.0,
];

const VELOCITY_GRADIENT_COLORS: &[[u8; 3]] = &[
    [0, 0, 0], [32, 32, 32], [128, 128, 128], [117, 70, 0], [151, 70, 0],
    [186, 70, 0], [220, 132, 0], [255, 153, 0], [119, 0, 0], [153, 0, 0],
    [187, 0, 0], [221, 0, 0], [255, 0, 0], [255, 204, 204], [255, 204, 255],
    [255, 255, 255], [255, 255, 255],
];

const VELOCITY_GRADIENT_POSITIONS: &[f64] = &[
    0.0, 1.0 / 15.0, 2.0 / 15.0, 3.0 / 15.0, 4.0 / 15.0, 5.0 / 15.0,
    6.0 / 15.0, 7.0 / 15.0, 8.0 / 15.0, 9.0 / 15.0, 10.0 / 15.0,
    11.0 / 15.0, 12.0 / 15.0, 13.0 / 15.0, 14.0 / 15.0, 0.999999, 1.0,
];

const AZ_SHEAR_COLORS: &[[f64; 3]] = &[
    [1., 1., 1.], [1., 1., 1.], [0., 0., 1.], [0., 0., 0.7], [0., 0., 0.],
    [0.7, 0., 0.], [1., 0., 0.], [1., 1., 1.], [1., 1., 1.],
];

const AZ_SHEAR_REVERSED_COLORS: &[[f64; 3]] = &[
    [1., 1., 1.], [1., 1., 1.], [1., 0., 0.], [0.7, 0., 0.], [0., 0., 0.],
    [0., 0., 0.7], [0., 0., 1.], [1., 1., 1.], [1., 1., 1.],
];

const AZ_SHEAR_POSITIONS: &[f64] = &[
    0.0, 0.001, 0.3, 0.43, 0.5, 0.57, 0.7, 0.999, 1.0,
];

const CLEAN_IR_COLORS: &[[u8; 3]] = &[
    [0, 0, 0], [255, 255, 255], [0, 0, 0], [255, 0, 0], [255, 255, 0],
    [0, 255, 0], [0, 0, 255], [191, 0, 255], [255, 255, 255], [0, 0, 0],
    [120, 120, 120], [0, 0, 0],
];

const CLEAN_IR_POSITIONS: &[f64] = &[
    0.0, 10.0 / 166.0, 35.0 / 166.0, 45.0 / 166.0, 55.0 / 166.0, 65.0 / 166.0,
    82.0 / 166.0, 90.0 / 166.0, 95.0 / 166.0, 135.9 / 166.0, 136.0 / 166.0, 1.0,
];

const WATER_VAPOR_COLORS: &[[u8; 3]] = &[
    [0, 255, 255], [0, 110, 0], [255, 255, 255], [0, 0, 165],
    [255, 255, 0], [255, 0, 0], [0, 0, 0],
];

const WATER_VAPOR_POSITIONS: &[f64] = &[
    0.0, (109.0 - 75.0) / 109.0, (109.0 - 47.0) / 109.0, (109.0 - 30.0) / 109.0,
    (109.0 - 15.5) / 109.0, 108.0 / 109.0, 1.0,
];

impl Preset {
    pub const ALL: &'static [Preset] = &[
        Preset::Reflectivity,
        Preset::SpectrumWidth,
        Preset::VelocityGradient,
        Preset::AzShear,
        Preset::AzShearReversed,
        Preset::CleanIr,
        Preset::WaterVapor,
    ];

    /// Name the table is registered under.
    pub fn name(&self) -> &'static str {
        match self {
            Preset::Reflectivity => "reflectivity",
            Preset::SpectrumWidth => "spectrum_width",
            Preset::VelocityGradient => "velocity_gradient",
            Preset::AzShear => "az_shear",
            Preset::AzShearReversed => "az_shear_r",
            Preset::CleanIr => "clean_ir",
            Preset::WaterVapor => "water_vapor",
        }
    }

    /// Case-insensitive inverse of [`Preset::name`].
    pub fn from_name(name: &str) -> Option<Preset> {
        Preset::ALL.iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    pub fn table(&self) -> Result<ColorTable, InvalidSpec> {
        let table = match self {
            Preset::Reflectivity =>
                ColorTable::from_rgb8(REFLECTIVITY_COLORS, Some(REFLECTIVITY_POSITIONS))?,
            Preset::SpectrumWidth =>
                ColorTable::from_rgb8(SPECTRUM_WIDTH_COLORS, Some(SPECTRUM_WIDTH_POSITIONS))?,
            Preset::VelocityGradient =>
                ColorTable::from_rgb8(VELOCITY_GRADIENT_COLORS, Some(VELOCITY_GRADIENT_POSITIONS))?,
            Preset::AzShear => ColorTable::build(
                AZ_SHEAR_COLORS.iter().copied(),
                Some(AZ_SHEAR_POSITIONS.iter().copied()),
                Encoding::Arithmetic
            )?,
            Preset::AzShearReversed => ColorTable::build(
                AZ_SHEAR_REVERSED_COLORS.iter().copied(),
                Some(AZ_SHEAR_POSITIONS.iter().copied()),
                Encoding::Arithmetic
            )?,
            Preset::CleanIr =>
                ColorTable::from_rgb8(CLEAN_IR_COLORS, Some(CLEAN_IR_POSITIONS))?,
            Preset::WaterVapor =>
                ColorTable::from_rgb8(WATER_VAPOR_COLORS, Some(WATER_VAPOR_POSITIONS))?,
        };

        Ok(table.with_name(self.name()))
    }
}
