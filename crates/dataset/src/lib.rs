//! [dataplot]'s dataset library.
//!
//! [dataplot]: https://github.com/dataplot
//!
//! It deserializes the two remote JSON documents the `dataplot` CLI fetches
//! and projects them into immutable, source-ordered datasets: quarterly
//! GDP observations for the bar chart and cycling race results for the
//! scatterplot. The order of the records is meaningful: it determines the
//! categorical axis order and the draw order of the marks.

pub mod cycling;
pub mod error;
pub mod gdp;
pub mod time;

pub use cycling::RaceResult;
pub use gdp::GdpObservation;
pub use time::RaceTime;
