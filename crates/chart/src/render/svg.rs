use crate::mark::Mark;
use crate::mark::MarkShape;
use crate::render::OutputStream;
use crate::render::Render;
use crate::render::error::RenderError;
use crate::scene::Legend;
use crate::scene::Orientation;
use crate::scene::SceneAxis;
use crate::scene::SvgScene;

impl Render for SvgScene {
    fn render<O>(&self, output: &mut O) -> Result<(), RenderError>
    where
        O: OutputStream,
    {
        output.write(&format!(
            r#"<svg width="{width}" height="{height}">"#,
            width = px(self.width),
            height = px(self.height),
        ))?;
        output.write(&format!(
            r#"<g transform="translate({left},{top})">"#,
            left = px(self.margin.left),
            top = px(self.margin.top),
        ))?;

        write_axis(&self.x_axis, self, output)?;
        write_axis(&self.y_axis, self, output)?;

        if let Some(title) = &self.y_title {
            output.write(&format!(
                r#"<text class="y-axis-title" transform="rotate(-90)" x="{x}" y="{y}">{text}</text>"#,
                x = px(title.x),
                y = px(title.y),
                text = title.text,
            ))?;
        }

        if let Some(legend) = &self.legend {
            write_legend(legend, output)?;
        }

        for (index, mark) in self.marks.iter().enumerate() {
            write_mark(index, mark, output)?;
        }

        output.write("</g>")?;
        output.write("</svg>")
    }
}

fn write_axis<O>(axis: &SceneAxis, scene: &SvgScene, output: &mut O) -> Result<(), RenderError>
where
    O: OutputStream,
{
    match axis.orientation {
        Orientation::Bottom => {
            output.write(&format!(
                r#"<g id="{id}" class="{id}" transform="translate(0,{y})">"#,
                id = axis.id,
                y = px(scene.chart_height),
            ))?;
            output.write(&format!(
                r#"<line class="domain" x1="0" y1="0" x2="{x}" y2="0"></line>"#,
                x = px(scene.chart_width),
            ))?;

            for tick in &axis.ticks {
                output.write(&format!(
                    r#"<g class="tick" transform="translate({x},0)"><line y2="6"></line><text y="9" dy="0.71em">{label}</text></g>"#,
                    x = px(tick.position),
                    label = tick.label,
                ))?;
            }
        }
        Orientation::Left => {
            output.write(&format!(r#"<g id="{id}" class="{id}">"#, id = axis.id))?;
            output.write(&format!(
                r#"<line class="domain" x1="0" y1="0" x2="0" y2="{y}"></line>"#,
                y = px(scene.chart_height),
            ))?;

            for tick in &axis.ticks {
                output.write(&format!(
                    r#"<g class="tick" transform="translate(0,{y})"><line x2="-6"></line><text x="-9" dy="0.32em">{label}</text></g>"#,
                    y = px(tick.position),
                    label = tick.label,
                ))?;
            }
        }
    }

    output.write("</g>")
}

fn write_mark<O>(index: usize, mark: &Mark, output: &mut O) -> Result<(), RenderError>
where
    O: OutputStream,
{
    let mut attributes = format!(r#" data-mark="{index}""#);
    for (name, value) in &mark.attributes {
        attributes.push_str(&format!(r#" {name}="{value}""#));
    }

    let mut style = format!(r#" fill="{fill}""#, fill = mark.fill);
    if let Some(stroke) = mark.stroke {
        style.push_str(&format!(
            r#" stroke="{color}" stroke-width="{width}""#,
            color = stroke.color,
            width = px(stroke.width),
        ));
    }

    match mark.shape {
        MarkShape::Rect { x, y, width, height } => output.write(&format!(
            r#"<rect class="{class}"{attributes} x="{x}" y="{y}" width="{width}" height="{height}"{style}></rect>"#,
            class = mark.class,
            x = px(x),
            y = px(y),
            width = px(width),
            height = px(height),
        )),
        MarkShape::Circle { cx, cy, r } => output.write(&format!(
            r#"<circle class="{class}"{attributes} cx="{cx}" cy="{cy}" r="{r}"{style}></circle>"#,
            class = mark.class,
            cx = px(cx),
            cy = px(cy),
            r = px(r),
        )),
    }
}

fn write_legend<O>(legend: &Legend, output: &mut O) -> Result<(), RenderError>
where
    O: OutputStream,
{
    const SWATCH_SIZE: f64 = 20.0;
    const SPACING: f64 = 10.0;

    output.write(r#"<g id="legend" class="legend">"#)?;

    for (index, item) in legend.items.iter().enumerate() {
        let y = legend.y + index as f64 * (SWATCH_SIZE + SPACING);

        output.write(&format!(
            r#"<rect x="{x}" y="{y}" width="{size}" height="{size}" fill="{color}"></rect>"#,
            x = px(legend.x),
            y = px(y),
            size = px(SWATCH_SIZE),
            color = item.color,
        ))?;
        output.write(&format!(
            r#"<text class="legend-label" x="{x}" y="{y}">{text}</text>"#,
            x = px(legend.x - 5.0),
            y = px(y + 14.0),
            text = item.text,
        ))?;
    }

    output.write("</g>")
}

// SVG attribute number formatting: whole numbers without a decimal
// point, everything else with at most two decimals.
pub(crate) fn px(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        let formatted = format!("{value:.2}");
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::output::OutputBuffer;
    use crate::scene::AxisTitle;
    use crate::scene::Margin;
    use crate::tooltip::TooltipContent;

    fn scene_with_marks(marks: Vec<Mark>) -> SvgScene {
        SvgScene {
            title: "Test",
            width: 1000.0,
            height: 600.0,
            margin: Margin { top: 60.0, right: 20.0, bottom: 50.0, left: 80.0 },
            chart_width: 900.0,
            chart_height: 490.0,
            x_axis: SceneAxis {
                id: "x-axis",
                orientation: Orientation::Bottom,
                ticks: Vec::new(),
            },
            y_axis: SceneAxis {
                id: "y-axis",
                orientation: Orientation::Left,
                ticks: Vec::new(),
            },
            y_title: Some(AxisTitle { text: "Value", x: -145.0, y: 30.0 }),
            legend: None,
            marks,
        }
    }

    #[test]
    fn scene_renders_one_element_per_mark() {
        let mark = Mark {
            shape: MarkShape::Rect { x: 4.5, y: 245.0, width: 8.0, height: 245.0 },
            class: "bar",
            fill: "dodgerblue",
            highlight: "white",
            stroke: None,
            attributes: vec![("data-date", String::from("2000-01-01"))],
            tooltip: TooltipContent { html: String::new(), x: 0.0, y: 0.0 },
            tooltip_anchor: None,
        };
        let scene = scene_with_marks(vec![mark.clone(), mark]);

        let mut output = OutputBuffer::new();
        scene.render(&mut output).unwrap();
        let svg = output.into_string();

        assert_eq!(svg.matches("<rect class=\"bar\"").count(), 2);
        assert!(svg.contains(r#"data-date="2000-01-01""#));
        assert!(svg.contains(r#"data-mark="0""#));
        assert!(svg.contains(r#"data-mark="1""#));
        assert!(svg.contains(r#"<g id="x-axis" class="x-axis" transform="translate(0,490)">"#));
        assert!(svg.contains(r#"<g id="y-axis" class="y-axis">"#));
    }

    #[test]
    fn empty_scene_renders_no_marks() {
        let scene = scene_with_marks(Vec::new());

        let mut output = OutputBuffer::new();
        scene.render(&mut output).unwrap();
        let svg = output.into_string();

        assert!(!svg.contains("<rect class=\"bar\""));
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn px_trims_trailing_zeros() {
        assert_eq!(px(490.0), "490");
        assert_eq!(px(4.5), "4.5");
        assert_eq!(px(428.5714), "428.57");
        assert_eq!(px(0.0), "0");
    }
}
