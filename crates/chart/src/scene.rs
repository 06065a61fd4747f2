//! The retained scene model the renderer serializes to SVG.

use crate::axis::Tick;
use crate::mark::Mark;

/// Screen margins around the chart area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Bottom,
    Left,
}

/// An axis group with an id for external inspection, drawn from ticks
/// derived from the chart's scales.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneAxis {
    pub id: &'static str,
    pub orientation: Orientation,
    pub ticks: Vec<Tick>,
}

/// A rotated axis title along the left edge of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTitle {
    pub text: &'static str,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendItem {
    pub color: &'static str,
    pub text: &'static str,
}

/// A column of color swatches with right-anchored labels, drawn in the
/// gutter right of the chart area.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub x: f64,
    pub y: f64,
    pub items: Vec<LegendItem>,
}

/// The complete retained scene for one chart: marks in dataset order,
/// identified axis groups, titles and the optional legend.
///
/// Mark order affects paint order only; later marks paint over earlier
/// ones at the same coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgScene {
    /// Page title and heading of the rendered document.
    pub title: &'static str,

    /// Full canvas size, margins included.
    pub width: f64,
    pub height: f64,
    pub margin: Margin,

    /// Chart area size, inside the margins.
    pub chart_width: f64,
    pub chart_height: f64,

    pub x_axis: SceneAxis,
    pub y_axis: SceneAxis,
    pub y_title: Option<AxisTitle>,
    pub legend: Option<Legend>,

    pub marks: Vec<Mark>,
}
