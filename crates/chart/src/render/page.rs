//! Wraps a scene into a self-contained HTML page.
//!
//! The page shell embeds the serialized SVG, the shared tooltip element
//! and a hover table with one entry per mark. The inline script only
//! applies values precomputed here; it computes nothing itself.

use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::render::OutputStream;
use crate::render::Render;
use crate::render::error::RenderError;
use crate::render::output::OutputBuffer;
use crate::render::svg::px;
use crate::scene::SvgScene;
use crate::tooltip::Hover;
use crate::tooltip::VISIBLE_OPACITY;

const PAGE_TEMPLATE: &str = include_str!("./page.html.tt");

pub struct Page<'a> {
    scene: &'a SvgScene,
}

impl<'a> Page<'a> {
    pub fn new(scene: &'a SvgScene) -> Page<'a> {
        Self { scene }
    }
}

impl Render for Page<'_> {
    fn render<O>(&self, output: &mut O) -> Result<(), RenderError>
    where
        O: OutputStream,
    {
        let mut svg = OutputBuffer::new();
        self.scene.render(&mut svg)?;

        // The hover transitions precompute the tooltip for every mark;
        // the page script replays these values verbatim.
        let mut hover = Hover::new();
        let mut marks = Vec::with_capacity(self.scene.marks.len());
        for (index, mark) in self.scene.marks.iter().enumerate() {
            hover.enter(&self.scene.marks, index);
            let tooltip = hover.tooltip();

            marks.push(HoverEntry {
                fill: mark.fill,
                highlight: hover.fill_of(&self.scene.marks, index),
                html: tooltip.content.clone(),
                x: px(tooltip.x),
                y: px(tooltip.y),
                anchor_name: mark.tooltip_anchor.as_ref().map(|(name, _)| *name),
                anchor_value: mark.tooltip_anchor.as_ref().map(|(_, value)| value.as_str()),
            });
        }

        let context = Context {
            title: self.scene.title,
            svg: svg.into_string(),
            marks: serde_json::to_string(&marks)?,
            visible_opacity: VISIBLE_OPACITY,
        };

        let mut template = TinyTemplate::new();
        template.add_template("page", PAGE_TEMPLATE)?;
        let text = template.render("page", &context)?;

        output.write(&text)
    }
}

#[derive(Serialize)]
struct Context<'a> {
    title: &'a str,
    svg: String,
    marks: String,
    visible_opacity: f64,
}

// One hover table entry per mark, serialized into the page for the
// pointer-enter/leave wiring.
#[derive(Serialize)]
struct HoverEntry<'a> {
    fill: &'a str,
    highlight: &'a str,
    html: String,
    x: String,
    y: String,
    anchor_name: Option<&'a str>,
    anchor_value: Option<&'a str>,
}
