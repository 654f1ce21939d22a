use std::path::Path;

use image::{Rgb, RgbImage};
use num_traits::ToPrimitive;

use super::color::*;
use super::error::TableError;
use super::table::*;

#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    /// Rows in the discretized table the colorbar is drawn from.
    pub steps: usize,
    /// Draw low values at the bottom instead of the left.
    pub vertical: bool,
}

impl Default for RenderConfig {
    fn default() -> RenderConfig {
        RenderConfig {
            width: 512,
            height: 32,
            steps: DEFAULT_LUT_SIZE,
            vertical: false,
        }
    }
}

/// Physical value range mapped onto `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    min: f64,
    max: f64,
}

impl ValueRange {
    /// `None` unless both ends are finite and `min < max`.
    pub fn new(min: f64, max: f64) -> Option<Self> {
        (min.is_finite() && max.is_finite() && min < max).then_some(ValueRange { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Position of `value` in the range; not clamped.
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }
}

impl ColorTable {
    /// Color for a physical value, honoring the table's extremes. Without
    /// explicit extremes, values out of range take the end colors and NaN
    /// takes the color at 0.
    pub fn color_for(&self, value: f64, range: &ValueRange) -> Color {
        let extremes = self.extremes();
        if value.is_nan() {
            return extremes.bad.unwrap_or_else(|| self.lookup(0.0));
        }

        let t = range.normalize(value);
        if t < 0.0 {
            extremes.under.unwrap_or_else(|| self.lookup(0.0))
        } else if t > 1.0 {
            extremes.over.unwrap_or_else(|| self.lookup(1.0))
        } else {
            self.lookup(t)
        }
    }

    /// Colors a row-major scalar field. Values that cannot be represented as
    /// `f64` are treated as missing.
    ///
    /// # Panics
    ///
    /// If `values` does not hold exactly `width * height` entries, or if
    /// either dimension exceeds `u32::MAX`.
    pub fn colorize<T: ToPrimitive>(
        &self,
        values: &[T],
        width: usize,
        height: usize,
        range: &ValueRange
    ) -> RgbImage {
        assert_eq!(
            Some(values.len()),
            width.checked_mul(height),
            "attempting to colorize {} values into an image of size {}x{}",
            values.len(),
            width,
            height
        );
        let (w, h) = image_dims(width, height);

        RgbImage::from_fn(w, h, |x, y| {
            let value = values[x as usize + y as usize * width]
                .to_f64()
                .unwrap_or(f64::NAN);
            Rgb(self.color_for(value, range).to_rgb8())
        })
    }

    /// Draws the table as a strip, low values on the left (or at the bottom
    /// when vertical).
    ///
    /// # Panics
    ///
    /// If either dimension of `cfg` exceeds `u32::MAX`.
    pub fn colorbar(&self, cfg: RenderConfig) -> RgbImage {
        let steps = cfg.steps.max(2);
        let lut: Vec<[u8; 3]> = self.lut(steps).iter().map(Color::to_rgb8).collect();
        let length = if cfg.vertical { cfg.height } else { cfg.width };

        let (w, h) = image_dims(cfg.width, cfg.height);

        RgbImage::from_fn(w, h, |x, y| {
            let along = if cfg.vertical {
                cfg.height - 1 - y as usize
            } else {
                x as usize
            };
            Rgb(lut[(along * steps / length).min(steps - 1)])
        })
    }

    /// Writes [`ColorTable::colorbar`] to `path`; the format follows the
    /// extension.
    pub fn save_colorbar(&self, path: impl AsRef<Path>, cfg: RenderConfig) -> Result<(), TableError> {
        self.colorbar(cfg).save(path)?;
        Ok(())
    }
}

fn image_dims(width: usize, height: usize) -> (u32, u32) {
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => (w, h),
        _ => panic!("image size {}x{} exceeds the u32 pixel limit", width, height),
    }
}
