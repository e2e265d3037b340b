//! Bundled demo scenes.

use core::fmt;
use core::str::FromStr;

use qd3_core::Selection;
use qd3_web::{DomError, MemoryDocument, NodeId};

const SVG_WIDTH: i64 = 960;
const SVG_HEIGHT: i64 = 500;

/// Plot margins of the multi-line chart frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Margin {
    /// Left margin.
    pub left: i64,
    /// Top margin.
    pub top: i64,
    /// Right margin.
    pub right: i64,
    /// Bottom margin.
    pub bottom: i64,
}

/// Margins used by [`multi_line_frame`].
pub const MARGIN: Margin = Margin {
    left: 50,
    top: 20,
    right: 80,
    bottom: 30,
};

/// Series shown in the multi-line legend: key and stroke colour.
pub const SERIES: [(&str, &str); 3] = [
    ("totalAmount", "#036888"),
    ("totalProfit", "#0D833C"),
    ("totalRevenue", "#D2392A"),
];

/// The single red-stroked square drawn into an existing `<svg>`.
#[must_use]
pub fn rect() -> Selection {
    let mut svg = Selection::select("svg");
    svg.append("rect")
        .attr("width", 10)
        .attr("height", 10)
        .attr("stroke", "red");
    svg
}

/// Static frame of the multi-line chart: the translated plot group, one legend entry per series,
/// both axis groups, and the hidden hover line.
///
/// Expects a host `<svg>` that already contains a `<g>`.
#[must_use]
pub fn multi_line_frame() -> Selection {
    let width = SVG_WIDTH - MARGIN.left - MARGIN.right;
    let height = SVG_HEIGHT - MARGIN.top - MARGIN.bottom;

    let mut svg = Selection::select("svg");
    svg.attr("width", SVG_WIDTH).attr("height", SVG_HEIGHT);

    let plot = svg
        .select_descendant("g")
        .attr("transform", format!("translate({}, {})", MARGIN.left, MARGIN.top));

    for (index, (key, color)) in (1_i64..).zip(SERIES) {
        let y = height / 2 - index * 20;
        let legend = plot.append("g").attr("class", "legend").attr("data-series", key);
        legend
            .append("rect")
            .attr("x", width - 140)
            .attr("y", y)
            .attr("width", 10)
            .attr("height", 10)
            .attr("style", format!("fill: {color}"));
        legend
            .append("text")
            .attr("x", width - 128)
            .attr("y", y + 10)
            .attr("style", "fill: black");
    }

    plot.append("g")
        .attr("class", "axis axis-x")
        .attr("transform", format!("translate(0, {height})"));
    plot.append("g").attr("class", "axis axis-y");

    plot.append("g")
        .attr("class", "x-hover-line hover-line")
        .attr(
            "style",
            "stroke-dasharray: 3,3; stroke-width: 2px; stroke: black; display: none",
        )
        .append("line")
        .attr("class", "x-hover-line hover-line")
        .attr("y1", 0)
        .attr("y2", height);

    svg
}

/// A named demo scene together with the host document it expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scene {
    /// See [`rect`].
    Rect,
    /// See [`multi_line_frame`].
    MultiLine,
}

impl Scene {
    /// Every bundled scene.
    pub const ALL: [Self; 2] = [Self::Rect, Self::MultiLine];

    /// Stable name used on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rect => "rect",
            Self::MultiLine => "multi-line",
        }
    }

    /// Runs the scene's builder.
    #[must_use]
    pub fn build(self) -> Selection {
        match self {
            Self::Rect => rect(),
            Self::MultiLine => multi_line_frame(),
        }
    }

    /// Creates the elements the scene selects into, under the document node.
    ///
    /// Returns the host `<svg>`.
    ///
    /// # Errors
    ///
    /// Propagates document failures.
    pub fn prepare_host(self, document: &mut MemoryDocument) -> Result<NodeId, DomError> {
        let svg = document.create_element(document.root(), "svg")?;
        if self == Self::MultiLine {
            document.create_element(svg, "g")?;
        }
        Ok(svg)
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown scene name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownScene(pub String);

impl fmt::Display for UnknownScene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown scene `{}`", self.0)
    }
}

impl std::error::Error for UnknownScene {}

impl FromStr for Scene {
    type Err = UnknownScene;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scene| scene.name() == s)
            .ok_or_else(|| UnknownScene(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qd3_core::{Action, AttrValue, serialize};

    #[test]
    fn names_round_trip() {
        for scene in Scene::ALL {
            assert_eq!(scene.name().parse::<Scene>(), Ok(scene));
        }
        assert_eq!(
            "pie".parse::<Scene>(),
            Err(UnknownScene("pie".to_owned()))
        );
    }

    #[test]
    fn multi_line_frame_layout() {
        let ir = serialize(&multi_line_frame());
        assert_eq!(ir.attr("width"), Some(&AttrValue::Int(960)));

        let plot = &ir.children()[0];
        assert_eq!(plot.action(), Action::Select);
        assert_eq!(plot.attr("transform"), Some(&AttrValue::from("translate(50, 20)")));

        let classes: Vec<_> = plot
            .children()
            .iter()
            .filter_map(|child| child.attr("class").and_then(AttrValue::as_str))
            .collect();
        assert_eq!(
            classes,
            [
                "legend",
                "legend",
                "legend",
                "axis axis-x",
                "axis axis-y",
                "x-hover-line hover-line"
            ]
        );

        let first_legend_rect = &plot.children()[0].children()[0];
        assert_eq!(first_legend_rect.attr("x"), Some(&AttrValue::Int(690)));
        assert_eq!(first_legend_rect.attr("y"), Some(&AttrValue::Int(205)));

        let x_axis = &plot.children()[3];
        assert_eq!(x_axis.attr("transform"), Some(&AttrValue::from("translate(0, 450)")));
    }
}
