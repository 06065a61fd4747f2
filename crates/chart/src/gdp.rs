//! The quarterly GDP bar chart.

use chrono::Datelike;
use dataplot_dataset::GdpObservation;

use crate::axis;
use crate::mark::Mark;
use crate::mark::MarkShape;
use crate::render::svg::px;
use crate::scale::BandScale;
use crate::scale::LinearScale;
use crate::scene::AxisTitle;
use crate::scene::Margin;
use crate::scene::Orientation;
use crate::scene::SceneAxis;
use crate::scene::SvgScene;
use crate::tooltip::TooltipContent;

const SVG_WIDTH: f64 = 1000.0;
const SVG_HEIGHT: f64 = 600.0;
const MARGIN: Margin = Margin { top: 60.0, right: 20.0, bottom: 50.0, left: 80.0 };
const CHART_WIDTH: f64 = SVG_WIDTH - MARGIN.left - MARGIN.right;
const CHART_HEIGHT: f64 = SVG_HEIGHT - MARGIN.top - MARGIN.bottom;

const BAND_PADDING: f64 = 0.1;
const TICK_STRIDE: usize = 20;

const BAR_FILL: &str = "dodgerblue";
const BAR_HIGHLIGHT: &str = "white";

// The tooltip sits near the hovered bar's top edge, offset from the
// bar's own coordinates.
const TOOLTIP_OFFSET_X: f64 = 50.0;
const TOOLTIP_OFFSET_Y: f64 = -40.0;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Builds the bar chart scene: one bar per observation in source order,
/// a categorical date axis on x and a linear value axis on y.
pub fn chart(observations: &[GdpObservation]) -> SvgScene {
    let dates: Vec<String> = observations
        .iter()
        .map(|observation| observation.date.format(DATE_FORMAT).to_string())
        .collect();

    let x_scale = BandScale::new(dates.iter().cloned(), CHART_WIDTH, BAND_PADDING);
    let y_scale = LinearScale::from_values(
        observations.iter().map(|observation| observation.value),
        CHART_HEIGHT,
    );

    let marks = observations
        .iter()
        .zip(&dates)
        .map(|(observation, date)| bar(observation, date, &x_scale, &y_scale))
        .collect();

    SvgScene {
        title: "United States GDP",
        width: SVG_WIDTH,
        height: SVG_HEIGHT,
        margin: MARGIN,
        chart_width: CHART_WIDTH,
        chart_height: CHART_HEIGHT,
        x_axis: SceneAxis {
            id: "x-axis",
            orientation: Orientation::Bottom,
            ticks: axis::band_ticks(&x_scale, TICK_STRIDE, |date| {
                date.get(..4).unwrap_or(date).to_owned()
            }),
        },
        y_axis: SceneAxis {
            id: "y-axis",
            orientation: Orientation::Left,
            ticks: axis::linear_ticks(&y_scale, 10),
        },
        y_title: Some(AxisTitle {
            text: "Gross Domestic Product",
            x: -CHART_HEIGHT / 2.0 + 100.0,
            y: -MARGIN.left + 110.0,
        }),
        legend: None,
        marks,
    }
}

fn bar(
    observation: &GdpObservation,
    date: &str,
    x_scale: &BandScale,
    y_scale: &LinearScale,
) -> Mark {
    let x = x_scale.position(date).unwrap_or(0.0);
    let y = y_scale.position(observation.value);

    Mark {
        shape: MarkShape::Rect {
            x,
            y,
            width: x_scale.bandwidth(),
            height: CHART_HEIGHT - y,
        },
        class: "bar",
        fill: BAR_FILL,
        highlight: BAR_HIGHLIGHT,
        stroke: None,
        attributes: vec![
            ("data-date", date.to_owned()),
            ("data-gdp", px(observation.value)),
        ],
        tooltip: TooltipContent {
            html: tooltip_html(observation),
            x: MARGIN.left + x + TOOLTIP_OFFSET_X,
            y: MARGIN.top + y + TOOLTIP_OFFSET_Y,
        },
        tooltip_anchor: Some(("data-date", date.to_owned())),
    }
}

fn tooltip_html(observation: &GdpObservation) -> String {
    format!(
        "{year} {quarter}<br>${value} Billion",
        year = observation.date.year(),
        quarter = observation.quarter(),
        value = axis::thousands(observation.value),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn observation(date: &str, value: f64) -> GdpObservation {
        GdpObservation {
            date: NaiveDate::parse_from_str(date, DATE_FORMAT).unwrap(),
            value,
        }
    }

    #[test]
    fn one_bar_per_observation() {
        let observations = vec![
            observation("2000-01-01", 100.0),
            observation("2000-04-01", 200.0),
        ];

        let scene = chart(&observations);

        assert_eq!(scene.marks.len(), 2);
    }

    #[test]
    fn bar_heights_follow_the_linear_scale() {
        let observations = vec![
            observation("2000-01-01", 100.0),
            observation("2000-04-01", 200.0),
        ];

        let scene = chart(&observations);

        let MarkShape::Rect { height: first, .. } = scene.marks[0].shape else {
            panic!("expected a rect mark");
        };
        let MarkShape::Rect { height: second, y, .. } = scene.marks[1].shape else {
            panic!("expected a rect mark");
        };

        // Domain [0, 200]: the maximum reaches the top of the chart and
        // the 100 bar is half as tall.
        assert_eq!(y, 0.0);
        assert_eq!(second, CHART_HEIGHT);
        assert_eq!(second, first * 2.0);
    }

    #[test]
    fn tooltip_shows_quarter_and_value() {
        let observations = vec![
            observation("2000-01-01", 100.0),
            observation("2000-04-01", 200.0),
        ];

        let scene = chart(&observations);
        let tooltip = &scene.marks[1].tooltip;

        assert!(tooltip.html.contains("Q2"));
        assert!(tooltip.html.contains("200"));
        assert_eq!(tooltip.html, "2000 Q2<br>$200 Billion");
    }

    #[test]
    fn tooltip_position_derives_from_the_mark() {
        let observations = vec![observation("2000-01-01", 100.0)];

        let scene = chart(&observations);
        let MarkShape::Rect { x, y, .. } = scene.marks[0].shape else {
            panic!("expected a rect mark");
        };

        assert_eq!(scene.marks[0].tooltip.x, MARGIN.left + x + TOOLTIP_OFFSET_X);
        assert_eq!(scene.marks[0].tooltip.y, MARGIN.top + y + TOOLTIP_OFFSET_Y);
    }

    #[test]
    fn data_attributes_expose_date_and_value() {
        let observations = vec![observation("1947-01-01", 243.1)];

        let scene = chart(&observations);
        let attributes = &scene.marks[0].attributes;

        assert_eq!(attributes[0], ("data-date", String::from("1947-01-01")));
        assert_eq!(attributes[1], ("data-gdp", String::from("243.1")));
    }

    #[test]
    fn empty_dataset_produces_an_empty_scene() {
        let scene = chart(&[]);

        assert!(scene.marks.is_empty());
        assert!(scene.y_axis.ticks.is_empty());
    }

    #[test]
    fn x_axis_labels_are_years() {
        let observations = vec![observation("1947-01-01", 243.1)];

        let scene = chart(&observations);

        assert_eq!(scene.x_axis.ticks[0].label, "1947");
    }
}
