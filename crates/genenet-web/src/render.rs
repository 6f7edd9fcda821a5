//! Static SVG drawing of a laid-out gene network, plus small HTML helpers.

use genenet_kg::{GeneGraph, Layout, Point};
use svg::node::element::{Circle, Group, Line, Text};
use svg::Document;

const WIDTH: f64 = 700.0;
const HEIGHT: f64 = 500.0;
const MARGIN: f64 = 60.0;
const NODE_RADIUS: f64 = 16.0;

const NODE_FILL: &str = "lightblue";
const EDGE_STROKE: &str = "gray";
const FONT: &str = "Helvetica, Arial, sans-serif";

/// Map layout coordinates (within `[-1, 1]`) onto the canvas.
fn to_canvas(p: Point) -> (f64, f64) {
    let half_w = WIDTH / 2.0 - MARGIN;
    let half_h = HEIGHT / 2.0 - MARGIN;
    (WIDTH / 2.0 + p.x * half_w, HEIGHT / 2.0 - p.y * half_h)
}

/// Render the graph with node labels. Returns `None` when there is nothing
/// to draw.
pub fn render_network_svg(graph: &GeneGraph, layout: &Layout) -> Option<String> {
    if layout.is_empty() {
        return None;
    }

    let mut edges = Group::new()
        .set("stroke", EDGE_STROKE)
        .set("stroke-width", 1.2);
    for edge in graph.edges().iter().filter(|e| !e.is_self_loop()) {
        let (Some(a), Some(b)) = (layout.get(&edge.source), layout.get(&edge.target)) else {
            continue;
        };
        let ((x1, y1), (x2, y2)) = (to_canvas(a), to_canvas(b));
        edges = edges.add(
            Line::new()
                .set("x1", x1)
                .set("y1", y1)
                .set("x2", x2)
                .set("y2", y2),
        );
    }

    let mut nodes = Group::new();
    for (name, point) in layout.iter() {
        let (x, y) = to_canvas(point);
        nodes = nodes
            .add(
                Circle::new()
                    .set("cx", x)
                    .set("cy", y)
                    .set("r", NODE_RADIUS)
                    .set("fill", NODE_FILL),
            )
            .add(
                Text::new(name)
                    .set("x", x)
                    .set("y", y)
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "middle")
                    .set("font-family", FONT)
                    .set("font-size", 10)
                    .set("fill", "#202020"),
            );
    }

    let doc = Document::new()
        .set("viewBox", (0.0, 0.0, WIDTH, HEIGHT))
        .set("width", WIDTH)
        .set("height", HEIGHT)
        .set("style", "background:#ffffff")
        .add(edges)
        .add(nodes);

    Some(doc.to_string())
}

/// Escape text for interpolation into HTML bodies and attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
