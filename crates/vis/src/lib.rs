//! [skychart]'s visualization library.
//!
//! [skychart]: https://github.com/skychart/skychart
//!
//! Renders a daily weather dataset as a set of SVG charts and bundles
//! them into a static HTML report. The chart geometry, the scales and
//! the pointer-interaction logic all live here; the report page only
//! replays precomputed data.

pub(crate) mod id;
pub(crate) mod template;

pub mod bin;
pub mod chart;
pub mod dimensions;
pub mod error;
pub mod layout;
pub mod polar;
pub mod scale;
