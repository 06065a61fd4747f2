//! The cycling race scatterplot, colored by doping allegation.

use dataplot_dataset::RaceResult;

use crate::axis;
use crate::mark::Mark;
use crate::mark::MarkShape;
use crate::mark::Stroke;
use crate::scale::TimeScale;
use crate::scene::AxisTitle;
use crate::scene::Legend;
use crate::scene::LegendItem;
use crate::scene::Margin;
use crate::scene::Orientation;
use crate::scene::SceneAxis;
use crate::scene::SvgScene;
use crate::tooltip::TooltipContent;

const MARGIN: Margin = Margin { top: 40.0, right: 60.0, bottom: 80.0, left: 60.0 };
const CHART_WIDTH: f64 = 1000.0 - MARGIN.left - MARGIN.right;
const CHART_HEIGHT: f64 = 700.0 - MARGIN.top - MARGIN.bottom;

// The canvas keeps a gutter right of the chart area for the legend.
const LEGEND_GUTTER: f64 = 200.0;
const SVG_WIDTH: f64 = CHART_WIDTH + MARGIN.left + MARGIN.right + LEGEND_GUTTER;
const SVG_HEIGHT: f64 = CHART_HEIGHT + MARGIN.top + MARGIN.bottom;

const DOT_RADIUS: f64 = 6.0;
const DOPING_FILL: &str = "blue";
const CLEAN_FILL: &str = "orange";

const TOOLTIP_OFFSET_X: f64 = 15.0;
const TOOLTIP_OFFSET_Y: f64 = -35.0;

const YEAR_TICK_EVERY: i32 = 2;
const TIME_TICK_SECONDS: u32 = 15;

/// Builds the scatterplot scene: one dot per race result in source
/// order, calendar years on x and ascent times on y, slower times lower.
pub fn chart(results: &[RaceResult]) -> SvgScene {
    let x_scale = year_scale(results);
    let y_scale = TimeScale::from_values(
        results.iter().map(|result| result.time.total_seconds() as f64),
        CHART_HEIGHT,
    );

    let marks = results
        .iter()
        .map(|result| dot(result, &x_scale, &y_scale))
        .collect();

    SvgScene {
        title: "35 Fastest times up Alpe d'Huez",
        width: SVG_WIDTH,
        height: SVG_HEIGHT,
        margin: MARGIN,
        chart_width: CHART_WIDTH,
        chart_height: CHART_HEIGHT,
        x_axis: SceneAxis {
            id: "x-axis",
            orientation: Orientation::Bottom,
            ticks: axis::year_ticks(&x_scale, YEAR_TICK_EVERY),
        },
        y_axis: SceneAxis {
            id: "y-axis",
            orientation: Orientation::Left,
            ticks: axis::time_ticks(&y_scale, TIME_TICK_SECONDS),
        },
        y_title: Some(AxisTitle {
            text: "Time in Minutes",
            x: -CHART_HEIGHT / 3.0,
            y: -MARGIN.left + 12.0,
        }),
        legend: Some(Legend {
            x: CHART_WIDTH + 20.0,
            y: CHART_HEIGHT / 2.0 - 10.0,
            items: vec![
                LegendItem { color: CLEAN_FILL, text: "No doping allegations" },
                LegendItem { color: DOPING_FILL, text: "Riders with doping allegations" },
            ],
        }),
        marks,
    }
}

// The year domain pads one year on each side of the observed extent, so
// the outermost dots do not sit on the chart edges.
fn year_scale(results: &[RaceResult]) -> TimeScale {
    let min = results.iter().map(|result| result.year).min();
    let max = results.iter().map(|result| result.year).max();

    match (min, max) {
        (Some(min), Some(max)) => {
            TimeScale::new((min - 1) as f64, (max + 1) as f64, CHART_WIDTH)
        }
        _ => TimeScale::new(0.0, 0.0, CHART_WIDTH),
    }
}

fn dot(result: &RaceResult, x_scale: &TimeScale, y_scale: &TimeScale) -> Mark {
    let cx = x_scale.position(result.year as f64);
    let cy = y_scale.position(result.time.total_seconds() as f64);

    let fill = match result.has_doping_allegation() {
        true => DOPING_FILL,
        false => CLEAN_FILL,
    };

    Mark {
        shape: MarkShape::Circle { cx, cy, r: DOT_RADIUS },
        class: "dot",
        fill,
        // The source chart keeps dot fills unchanged on hover.
        highlight: fill,
        stroke: Some(Stroke { color: "black", width: 1.0 }),
        attributes: vec![
            ("data-xvalue", result.year.to_string()),
            ("data-yvalue", result.time.to_string()),
        ],
        tooltip: TooltipContent {
            html: tooltip_html(result),
            x: MARGIN.left + cx + TOOLTIP_OFFSET_X,
            y: MARGIN.top + cy + TOOLTIP_OFFSET_Y,
        },
        tooltip_anchor: Some(("data-year", result.year.to_string())),
    }
}

fn tooltip_html(result: &RaceResult) -> String {
    let mut html = format!(
        "{name}: {nationality}<br>Year: {year}, Time: {time}",
        name = result.name,
        nationality = result.nationality,
        year = result.year,
        time = result.time,
    );

    if let Some(doping) = &result.doping {
        html.push_str("<br><br>");
        html.push_str(doping);
    }

    html
}
