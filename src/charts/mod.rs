//! Chart descriptors and view functions
//!
//! The two dashboard views are pure functions from the immutable table to a
//! Plotly-figure-shaped JSON descriptor: same inputs, same figure. Empty
//! selections render as empty figures, never as errors.

pub mod figure;
pub mod map;
pub mod trend;

pub use figure::{Axis, ColorBar, Figure, Font, Geo, Layout, LineStyle, Margin, Title, Trace};
pub use map::render_map;
pub use trend::{render_trend, resolve_selection, Trigger};
