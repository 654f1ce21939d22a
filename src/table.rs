use serde::{Deserialize, Serialize};
use tracing::debug;

use super::color::*;
use super::error::InvalidSpec;

/// Number of rows in a discretized table when the consumer does not ask for
/// anything else.
pub const DEFAULT_LUT_SIZE: usize = 256;

/// Colors a consumer uses for values that fall outside the mapped range.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Extremes {
    /// Below the range.
    pub under: Option<Color>,
    /// Above the range.
    pub over: Option<Color>,
    /// NaN.
    pub bad: Option<Color>,
}

/// A continuous, piecewise-linear mapping from `[0, 1]` to RGB.
///
/// Built from anchor colors pinned at positions along the domain. Two
/// anchors sharing a position form a hard step: just below the position the
/// earlier anchor applies, at or above it the later one does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from="crate::source::TableSource", into="crate::source::TableSource")]
pub struct ColorTable {
    name: Option<String>,
    positions: Vec<f64>,
    colors: Vec<Color>,
    extremes: Extremes,
}

impl ColorTable {
    /// Builds a table from `colors` and optional `positions`.
    ///
    /// Without positions the anchors are spread evenly over `[0, 1]`. With
    /// positions, there must be one per color, starting at exactly 0, ending
    /// at exactly 1 and never decreasing. Every channel must lie within the
    /// range of `encoding`.
    pub fn build<C, I>(
        colors: impl IntoIterator<Item=C>,
        positions: Option<I>,
        encoding: Encoding
    ) -> Result<ColorTable, InvalidSpec>
    where C: Into<[f64; 3]>, I: IntoIterator<Item=f64> {
        let raw: Vec<[f64; 3]> = colors.into_iter().map(Into::into).collect();
        let n = raw.len();

        if n < 2 {
            return Err(InvalidSpec::TooFewColors { found: n })
        }

        let positions: Vec<f64> = match positions {
            None => evenly_spaced(n),
            Some(positions) => {
                let positions: Vec<f64> = positions.into_iter().collect();
                validate_positions(&positions, n)?;
                positions
            }
        };

        let colors = raw.into_iter()
            .enumerate()
            .map(|(index, channels)| {
                Color::decode(channels, encoding)
                    .map_err(|value| InvalidSpec::ChannelOutOfRange { index, value, encoding })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(anchors = n, %encoding, "built color table");

        Ok(ColorTable {
            name: None,
            positions,
            colors,
            extremes: Extremes::default(),
        })
    }

    /// Builds a table with evenly spaced anchors.
    pub fn evenly_spaced<C: Into<[f64; 3]>>(
        colors: impl IntoIterator<Item=C>,
        encoding: Encoding
    ) -> Result<ColorTable, InvalidSpec> {
        ColorTable::build(colors, None::<std::iter::Empty<f64>>, encoding)
    }

    /// Builds a table from 8-bit anchors, which cannot be out of range.
    pub fn from_rgb8(
        colors: &[[u8; 3]],
        positions: Option<&[f64]>
    ) -> Result<ColorTable, InvalidSpec> {
        ColorTable::build(
            colors.iter().map(|c| c.map(f64::from)),
            positions.map(|p| p.iter().copied()),
            Encoding::EightBit
        )
    }

    /// Color at `t`.
    ///
    /// Queries outside `[0, 1]` are clamped to the nearest end and NaN is
    /// treated as 0, so this never fails. Use [`ColorTable::sample`] to reject
    /// such queries instead.
    pub fn lookup(&self, t: f64) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        if t <= 0.0 {
            return self.colors[0];
        }

        // positions[0] == 0 < t, so hi >= 1
        let hi = self.positions.partition_point(|&p| p <= t);
        if hi == self.positions.len() {
            return self.colors[hi - 1];
        }

        let lo = hi - 1;
        let (p_lo, p_hi) = (self.positions[lo], self.positions[hi]);
        Color::lerp(self.colors[lo], self.colors[hi], (t - p_lo) / (p_hi - p_lo))
    }

    /// Color at `t`, or `None` if `t` is outside `[0, 1]`.
    pub fn sample(&self, t: f64) -> Option<Color> {
        if !(0.0..=1.0).contains(&t) { return None };
        Some(self.lookup(t))
    }

    /// Discretizes the table into `n` evenly spaced rows covering `[0, 1]`.
    pub fn lut(&self, n: usize) -> Vec<Color> {
        let last = n.saturating_sub(1).max(1) as f64;
        (0..n).map(|i| self.lookup(i as f64 / last)).collect()
    }

    /// The same table traversed from 1 to 0. Under and over colors swap and
    /// the name, if any, gains an `_r` suffix.
    ///
    /// At a step (anchors sharing an interior position `p`) the reversed table
    /// still gives the later anchor at `1 - p`, which is the color just below
    /// `p` in the original rather than the one at `p`.
    pub fn reversed(&self) -> ColorTable {
        ColorTable {
            name: self.name.as_ref().map(|name| format!("{name}_r")),
            positions: self.positions.iter().rev().map(|p| 1.0 - p).collect(),
            colors: self.colors.iter().rev().copied().collect(),
            extremes: Extremes {
                under: self.extremes.over,
                over: self.extremes.under,
                bad: self.extremes.bad,
            },
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> ColorTable {
        self.name = Some(name.into());
        self
    }

    pub fn with_extremes(mut self, extremes: Extremes) -> ColorTable {
        self.extremes = extremes;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn extremes(&self) -> &Extremes {
        &self.extremes
    }

    /// Number of anchors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; a table has at least two anchors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

fn evenly_spaced(n: usize) -> Vec<f64> {
    let last = (n - 1) as f64;
    (0..n).map(|i| i as f64 / last).collect()
}

fn validate_positions(positions: &[f64], colors: usize) -> Result<(), InvalidSpec> {
    if positions.len() != colors {
        return Err(InvalidSpec::LengthMismatch { positions: positions.len(), colors })
    }

    let (first, last) = (positions[0], positions[positions.len() - 1]);
    if first != 0.0 || last != 1.0 {
        return Err(InvalidSpec::Endpoints { first, last })
    }

    // written as !(a <= b) so that NaN is caught too
    if let Some(i) = positions.windows(2).position(|w| !(w[0] <= w[1])) {
        return Err(InvalidSpec::NonMonotonic { index: i + 1, value: positions[i + 1] })
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn gray(v: f64) -> [f64; 3] {
        [v, v, v]
    }

    #[test]
    fn default_positions_are_evenly_spaced() {
        let table = ColorTable::evenly_spaced([gray(0.), gray(0.5), gray(0.2), gray(1.)], Encoding::Arithmetic)
            .unwrap();
        assert_eq!(table.positions(), &[0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0]);
    }

    #[test]
    fn two_colors_are_required() {
        let err = ColorTable::evenly_spaced([gray(0.)], Encoding::Arithmetic).unwrap_err();
        assert_eq!(err, InvalidSpec::TooFewColors { found: 1 });

        let err = ColorTable::evenly_spaced(Vec::<[f64; 3]>::new(), Encoding::Arithmetic).unwrap_err();
        assert_eq!(err, InvalidSpec::TooFewColors { found: 0 });
    }

    #[test]
    fn length_mismatch() {
        let err = ColorTable::build([gray(0.), gray(0.5), gray(1.)], Some([0.0, 1.0]), Encoding::Arithmetic)
            .unwrap_err();
        assert_eq!(err, InvalidSpec::LengthMismatch { positions: 2, colors: 3 });
    }

    #[test]
    fn endpoints_must_be_zero_and_one() {
        let err = ColorTable::build([gray(0.), gray(1.)], Some([0.1, 1.0]), Encoding::Arithmetic)
            .unwrap_err();
        assert_eq!(err, InvalidSpec::Endpoints { first: 0.1, last: 1.0 });

        let err = ColorTable::build([gray(0.), gray(1.)], Some([0.0, 0.9]), Encoding::Arithmetic)
            .unwrap_err();
        assert!(matches!(err, InvalidSpec::Endpoints { .. }));
    }

    #[test]
    fn decreasing_positions_are_rejected() {
        let err = ColorTable::build(
            [gray(0.), gray(0.5), gray(0.7), gray(1.)],
            Some([0.0, 0.6, 0.4, 1.0]),
            Encoding::Arithmetic
        ).unwrap_err();
        assert_eq!(err, InvalidSpec::NonMonotonic { index: 2, value: 0.4 });
    }

    #[test]
    fn nan_position_is_rejected() {
        let err = ColorTable::build(
            [gray(0.), gray(0.5), gray(1.)],
            Some([0.0, f64::NAN, 1.0]),
            Encoding::Arithmetic
        ).unwrap_err();
        assert!(matches!(err, InvalidSpec::NonMonotonic { index: 1, .. }));
    }

    #[test]
    fn out_of_range_channels_are_rejected() {
        let err = ColorTable::evenly_spaced([[0., 0., 0.], [0., 256., 0.]], Encoding::EightBit)
            .unwrap_err();
        assert_eq!(err, InvalidSpec::ChannelOutOfRange {
            index: 1, value: 256., encoding: Encoding::EightBit
        });

        let err = ColorTable::evenly_spaced([[0., 0., 1.5], [0., 0., 0.]], Encoding::Arithmetic)
            .unwrap_err();
        assert!(matches!(err, InvalidSpec::ChannelOutOfRange { index: 0, .. }));
    }

    #[test]
    fn length_is_checked_before_channels() {
        let err = ColorTable::build([gray(2.), gray(3.)], Some([0.0]), Encoding::Arithmetic)
            .unwrap_err();
        assert!(matches!(err, InvalidSpec::LengthMismatch { .. }));
    }

    #[test]
    fn endpoints_are_exact() {
        let table = ColorTable::from_rgb8(&[[12, 34, 56], [90, 80, 70], [200, 150, 100]], None).unwrap();
        assert_eq!(table.lookup(0.0), Color::from_rgb8(12, 34, 56));
        assert_eq!(table.lookup(1.0), Color::from_rgb8(200, 150, 100));
    }

    #[test]
    fn interior_anchor_is_exact() {
        let table = ColorTable::build([gray(0.), gray(0.3), gray(1.)], Some([0.0, 0.25, 1.0]), Encoding::Arithmetic)
            .unwrap();
        assert_eq!(table.lookup(0.25), Color::rgb(0.3, 0.3, 0.3));
    }

    #[test]
    fn black_to_white_midpoint() {
        let table = ColorTable::from_rgb8(&[[0, 0, 0], [255, 255, 255]], Some(&[0.0, 1.0])).unwrap();
        let mid = table.lookup(0.5);
        assert_abs_diff_eq!(mid.red, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(mid.green, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(mid.blue, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn duplicate_positions_step() {
        let red = [1., 0., 0.];
        let blue = [0., 0., 1.];
        let table = ColorTable::build(
            [gray(0.), red, blue, gray(1.)],
            Some([0.0, 0.5, 0.5, 1.0]),
            Encoding::Arithmetic
        ).unwrap();

        let below = table.lookup(0.5 - 1e-12);
        assert_abs_diff_eq!(below.red, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(below.blue, 0.0, epsilon = 1e-9);

        assert_eq!(table.lookup(0.5), Color::rgb(0., 0., 1.));

        let above = table.lookup(0.5 + 1e-12);
        assert_abs_diff_eq!(above.red, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(above.blue, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn duplicate_at_the_end_steps_to_last() {
        let table = ColorTable::build(
            [gray(0.), gray(0.5), gray(1.)],
            Some([0.0, 1.0, 1.0]),
            Encoding::Arithmetic
        ).unwrap();
        assert_abs_diff_eq!(table.lookup(1.0 - 1e-12).red, 0.5, epsilon = 1e-9);
        assert_eq!(table.lookup(1.0), Color::WHITE);
    }

    #[test]
    fn step_at_zero_keeps_first_anchor() {
        let table = ColorTable::build(
            [[1., 0., 0.], [0., 1., 0.], [0., 0., 1.]],
            Some([0.0, 0.0, 1.0]),
            Encoding::Arithmetic
        ).unwrap();
        assert_eq!(table.lookup(0.0), Color::rgb(1., 0., 0.));
        assert_eq!(table.lookup(-1.0), Color::rgb(1., 0., 0.));
        assert_eq!(table.lookup(f64::NAN), Color::rgb(1., 0., 0.));
        assert_abs_diff_eq!(table.lookup(1e-9).green, 1.0, epsilon = 1e-6);
        assert_eq!(table.lookup(1.0), Color::rgb(0., 0., 1.));
    }

    #[test]
    fn reversed_step_takes_the_lower_side() {
        let (below, above) = ([1., 0., 0.], [0., 1., 0.]);
        let table = ColorTable::build(
            [[0., 0., 0.], below, above, [1., 1., 1.]],
            Some([0.0, 0.5, 0.5, 1.0]),
            Encoding::Arithmetic
        ).unwrap();
        let rev = table.reversed();

        assert_eq!(table.lookup(0.5), Color::rgb(0., 1., 0.));
        assert_eq!(rev.lookup(0.5), Color::rgb(1., 0., 0.));
        assert_abs_diff_eq!(rev.lookup(0.25).red, table.lookup(0.75).red, epsilon = 1e-12);
    }

    #[test]
    fn lookup_clamps_outside_domain() {
        let table = ColorTable::evenly_spaced([gray(0.2), gray(0.8)], Encoding::Arithmetic).unwrap();
        assert_eq!(table.lookup(-3.0), table.lookup(0.0));
        assert_eq!(table.lookup(7.0), table.lookup(1.0));
        assert_eq!(table.lookup(f64::NAN), table.lookup(0.0));
    }

    #[test]
    fn sample_rejects_outside_domain() {
        let table = ColorTable::evenly_spaced([gray(0.2), gray(0.8)], Encoding::Arithmetic).unwrap();
        assert_eq!(table.sample(-0.01), None);
        assert_eq!(table.sample(1.01), None);
        assert_eq!(table.sample(f64::NAN), None);
        assert_eq!(table.sample(1.0), Some(Color::rgb(0.8, 0.8, 0.8)));
    }

    #[test]
    fn lut_covers_both_ends() {
        let table = ColorTable::evenly_spaced([[1., 0., 0.], [0., 0., 1.]], Encoding::Arithmetic).unwrap();
        let lut = table.lut(DEFAULT_LUT_SIZE);
        assert_eq!(lut.len(), 256);
        assert_eq!(lut[0], Color::rgb(1., 0., 0.));
        assert_eq!(lut[255], Color::rgb(0., 0., 1.));
        assert!(table.lut(0).is_empty());
        assert_eq!(table.lut(1), vec![Color::rgb(1., 0., 0.)]);
    }

    #[test]
    fn reversed_mirrors_positions() {
        let table = ColorTable::build(
            [gray(0.), gray(0.25), gray(1.)],
            Some([0.0, 0.2, 1.0]),
            Encoding::Arithmetic
        ).unwrap()
            .with_name("ramp")
            .with_extremes(Extremes { under: Some(Color::BLACK), over: None, bad: None });

        let rev = table.reversed();
        assert_eq!(rev.name(), Some("ramp_r"));
        assert_eq!(rev.positions()[0], 0.0);
        assert_abs_diff_eq!(rev.positions()[1], 0.8, epsilon = 1e-15);
        assert_eq!(rev.positions()[2], 1.0);
        assert_eq!(rev.colors()[0], Color::WHITE);
        assert_eq!(rev.extremes().over, Some(Color::BLACK));
        assert_eq!(rev.extremes().under, None);

        for i in 0..=20 {
            let t = i as f64 / 20.0;
            assert_abs_diff_eq!(rev.lookup(t).red, table.lookup(1.0 - t).red, epsilon = 1e-12);
        }
    }

    #[test]
    fn tables_are_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ColorTable>();
    }
}
