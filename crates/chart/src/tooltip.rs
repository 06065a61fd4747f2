//! The hover state machine and the single shared tooltip element.

use crate::mark::Mark;

/// The opacity of the tooltip while a mark is hovered.
pub const VISIBLE_OPACITY: f64 = 0.9;

/// Per-mark tooltip content, precomputed from the mark's record. The
/// position derives from the mark's screen coordinates plus a fixed
/// per-chart offset.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub html: String,
    pub x: f64,
    pub y: f64,
}

/// The single shared tooltip element. At most one record's content is
/// displayed at a time; hidden means zero opacity and empty content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tooltip {
    pub content: String,
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    Idle,
    Hovered(usize),
}

/// Drives the tooltip from pointer transitions over the marks.
///
/// Every enter overwrites the tooltip completely, so two records' data
/// can never be mixed, and repeated enters without an intervening leave
/// are idempotent.
#[derive(Debug, Default)]
pub struct Hover {
    state: HoverState,
    tooltip: Tooltip,
}

impl Hover {
    pub fn new() -> Hover {
        Self::default()
    }

    pub fn state(&self) -> HoverState {
        self.state
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    /// Pointer-enter over mark `index`: replaces the tooltip content,
    /// position and opacity from that mark alone. An index outside the
    /// marks leaves the state untouched.
    pub fn enter(&mut self, marks: &[Mark], index: usize) {
        let Some(mark) = marks.get(index) else {
            return;
        };

        self.state = HoverState::Hovered(index);
        self.tooltip = Tooltip {
            content: mark.tooltip.html.clone(),
            x: mark.tooltip.x,
            y: mark.tooltip.y,
            opacity: VISIBLE_OPACITY,
        };
    }

    /// Pointer-leave: clears the tooltip content and fades it out.
    pub fn leave(&mut self) {
        self.state = HoverState::Idle;
        self.tooltip = Tooltip::default();
    }

    /// The fill mark `index` is painted with under the current state:
    /// its highlight fill while hovered, its stored idle fill otherwise.
    pub fn fill_of<'a>(&self, marks: &'a [Mark], index: usize) -> &'a str {
        match self.state {
            HoverState::Hovered(hovered) if hovered == index => marks[index].highlight,
            _ => marks[index].fill,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mark::MarkShape;

    fn mark(html: &str, x: f64, y: f64) -> Mark {
        Mark {
            shape: MarkShape::Rect { x, y, width: 10.0, height: 20.0 },
            class: "bar",
            fill: "dodgerblue",
            highlight: "white",
            stroke: None,
            attributes: Vec::new(),
            tooltip: TooltipContent { html: html.to_owned(), x, y },
            tooltip_anchor: None,
        }
    }

    #[test]
    fn enter_overwrites_the_tooltip() {
        let marks = vec![mark("first", 1.0, 2.0), mark("second", 3.0, 4.0)];
        let mut hover = Hover::new();

        hover.enter(&marks, 0);
        assert_eq!(hover.tooltip().content, "first");

        hover.enter(&marks, 1);
        assert_eq!(hover.state(), HoverState::Hovered(1));
        assert_eq!(hover.tooltip().content, "second");
        assert_eq!(hover.tooltip().x, 3.0);
        assert_eq!(hover.tooltip().opacity, VISIBLE_OPACITY);
    }

    #[test]
    fn repeated_enters_are_idempotent() {
        let marks = vec![mark("first", 1.0, 2.0)];
        let mut hover = Hover::new();

        hover.enter(&marks, 0);
        let first = hover.tooltip().clone();
        hover.enter(&marks, 0);

        assert_eq!(hover.tooltip(), &first);
    }

    #[test]
    fn leave_clears_the_tooltip() {
        let marks = vec![mark("first", 1.0, 2.0)];
        let mut hover = Hover::new();

        hover.enter(&marks, 0);
        hover.leave();

        assert_eq!(hover.state(), HoverState::Idle);
        assert_eq!(hover.tooltip().content, "");
        assert_eq!(hover.tooltip().opacity, 0.0);
    }

    #[test]
    fn fill_follows_the_hover_state() {
        let marks = vec![mark("first", 1.0, 2.0), mark("second", 3.0, 4.0)];
        let mut hover = Hover::new();

        assert_eq!(hover.fill_of(&marks, 0), "dodgerblue");

        hover.enter(&marks, 0);
        assert_eq!(hover.fill_of(&marks, 0), "white");
        assert_eq!(hover.fill_of(&marks, 1), "dodgerblue");

        hover.leave();
        assert_eq!(hover.fill_of(&marks, 0), "dodgerblue");
    }

    #[test]
    fn enter_outside_the_marks_is_ignored() {
        let marks = vec![mark("first", 1.0, 2.0)];
        let mut hover = Hover::new();

        hover.enter(&marks, 7);

        assert_eq!(hover.state(), HoverState::Idle);
    }
}
