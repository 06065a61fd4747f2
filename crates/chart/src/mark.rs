use crate::tooltip::TooltipContent;

/// The geometry of one rendered visual primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkShape {
    Rect { x: f64, y: f64, width: f64, height: f64 },
    Circle { cx: f64, cy: f64, r: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: &'static str,
    pub width: f64,
}

/// One visual element bound one-to-one to a dataset record.
///
/// Geometry and style are fully determined by the record's fields and the
/// active scales; there is no hidden state. The idle fill is stored on
/// the mark itself so that un-hovering restores it without recomputation.
#[derive(Debug, Clone, PartialEq)]
pub struct Mark {
    pub shape: MarkShape,
    pub class: &'static str,

    /// The fill painted while the mark is idle.
    pub fill: &'static str,
    /// The fill painted while the mark is hovered.
    pub highlight: &'static str,
    pub stroke: Option<Stroke>,

    /// Inspection attributes written onto the rendered element,
    /// e.g. `data-date`/`data-gdp`. Not used by the chart logic.
    pub attributes: Vec<(&'static str, String)>,

    /// The tooltip shown while this mark is hovered.
    pub tooltip: TooltipContent,

    /// An inspection attribute stamped onto the tooltip element while
    /// this mark is hovered, e.g. `("data-date", "1947-01-01")`, and
    /// cleared on un-hover.
    pub tooltip_anchor: Option<(&'static str, String)>,
}
