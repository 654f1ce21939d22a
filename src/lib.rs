//! Piecewise-linear color tables for rendering scalar fields such as radar
//! reflectivity or satellite brightness temperature.
//!
//! A [`ColorTable`] is built once from anchor colors pinned at positions in
//! `[0, 1]` and then only read:
//!
//! ```
//! use colortable::*;
//!
//! let table = ColorTable::from_rgb8(&[[0, 0, 0], [255, 255, 255]], Some(&[0.0, 1.0]))?;
//! let gray = table.lookup(0.5);
//! assert!((gray.red - 0.5).abs() < 1e-12);
//! # Ok::<(), InvalidSpec>(())
//! ```

mod color;
pub use color::*;

mod error;
pub use error::*;

mod table;
pub use table::*;

mod source;

mod presets;
pub use presets::*;

mod registry;
pub use registry::*;

mod render;
pub use render::*;
