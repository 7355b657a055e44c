use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::layout::{LabelPosition, LaidNode, TextAlign};
use super::state::{BoundingRing, RadialGraphState};

const NODE_STROKE: &str = "#999";
const NODE_LINE_WIDTH: f64 = 1.0;
const LABEL_FILL: &str = "#000";
const LABEL_FONT: &str = "12px sans-serif";
const LABEL_OFFSET: f64 = 3.0;

const EDGE_ALPHA: f64 = 0.6;
const ARROW_SIZE: f64 = 8.0;

const RING_STROKE: &str = "#ababab";
const RING_LINE_WIDTH: f64 = 3.0;

const TOOLTIP_FONT: &str = "12px sans-serif";
const TOOLTIP_PADDING: f64 = 6.0;
const TOOLTIP_LINE_HEIGHT: f64 = 16.0;

pub fn render(state: &RadialGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	if let Some(ring) = &state.ring {
		draw_ring(ring, ctx);
	}
	draw_tooltip(state, ctx);
}

fn draw_edges(state: &RadialGraphState, ctx: &CanvasRenderingContext2d) {
	for (i, edge) in state.layout.edges.iter().enumerate() {
		let (source, target) = state.edge_endpoints(i);
		let hovered = state.is_hovered(i);
		let (alpha, width) = if hovered {
			(1.0, edge.style.line_width * 1.5)
		} else {
			(EDGE_ALPHA, edge.style.line_width)
		};

		ctx.set_global_alpha(alpha);
		ctx.set_stroke_style_str(&edge.style.stroke);
		ctx.set_line_width(width);
		ctx.begin_path();
		ctx.move_to(source.x, source.y);
		ctx.quadratic_curve_to(edge.control_point.x, edge.control_point.y, target.x, target.y);
		ctx.stroke();

		if edge.style.end_arrow {
			// Arrowhead along the curve's tangent at the target, pulled back
			// to the node boundary.
			let target_radius = state
				.layout
				.node(&edge.target)
				.map(|n| n.size / 2.0)
				.unwrap_or(0.0);
			let (dx, dy) = (target.x - edge.control_point.x, target.y - edge.control_point.y);
			let dist = (dx * dx + dy * dy).sqrt();
			if dist < 0.001 {
				ctx.set_global_alpha(1.0);
				continue;
			}
			let (ux, uy) = (dx / dist, dy / dist);
			let (tip_x, tip_y) = (target.x - ux * target_radius, target.y - uy * target_radius);
			let (back_x, back_y) = (tip_x - ux * ARROW_SIZE, tip_y - uy * ARROW_SIZE);
			let (px, py) = (-uy * ARROW_SIZE * 0.5, ux * ARROW_SIZE * 0.5);
			ctx.set_fill_style_str(&edge.style.stroke);
			ctx.begin_path();
			ctx.move_to(tip_x, tip_y);
			ctx.line_to(back_x + px, back_y + py);
			ctx.line_to(back_x - px, back_y - py);
			ctx.close_path();
			ctx.fill();
		}
		ctx.set_global_alpha(1.0);
	}
}

fn draw_nodes(state: &RadialGraphState, ctx: &CanvasRenderingContext2d) {
	for node in &state.layout.nodes {
		draw_disc(node, ctx);
		draw_label(node, ctx);
	}
}

fn draw_disc(node: &LaidNode, ctx: &CanvasRenderingContext2d) {
	let radius = node.size / 2.0;
	ctx.set_global_alpha(node.style.opacity);
	ctx.begin_path();
	let _ = ctx.arc(node.position.x, node.position.y, radius, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(&node.style.fill);
	ctx.fill();
	ctx.set_stroke_style_str(NODE_STROKE);
	ctx.set_line_width(NODE_LINE_WIDTH);
	ctx.stroke();
	ctx.set_global_alpha(1.0);
}

fn draw_label(node: &LaidNode, ctx: &CanvasRenderingContext2d) {
	let radius = node.size / 2.0;
	let x = match node.label.position {
		LabelPosition::Right => node.position.x + radius + LABEL_OFFSET,
	};
	ctx.set_text_align(match node.label.align {
		TextAlign::Start => "start",
	});
	ctx.set_fill_style_str(LABEL_FILL);
	ctx.set_font(LABEL_FONT);
	let _ = ctx.fill_text(&node.name, x, node.position.y + LABEL_OFFSET);
}

fn draw_ring(ring: &BoundingRing, ctx: &CanvasRenderingContext2d) {
	ctx.begin_path();
	let _ = ctx.arc(ring.center.x, ring.center.y, ring.radius, 0.0, 2.0 * PI);
	ctx.set_stroke_style_str(RING_STROKE);
	ctx.set_line_width(RING_LINE_WIDTH);
	ctx.stroke();
}

fn draw_tooltip(state: &RadialGraphState, ctx: &CanvasRenderingContext2d) {
	let Some(lines) = state.tooltip_lines() else {
		return;
	};
	let cursor = state.hover.cursor;

	ctx.set_font(TOOLTIP_FONT);
	let text_width = lines
		.iter()
		.map(|line| {
			ctx.measure_text(line)
				.map(|metrics| metrics.width())
				.unwrap_or(0.0)
		})
		.fold(0.0, f64::max);

	let (x, y) = (cursor.x + 12.0, cursor.y + 12.0);
	let width = text_width + TOOLTIP_PADDING * 2.0;
	let height = TOOLTIP_LINE_HEIGHT * lines.len() as f64 + TOOLTIP_PADDING * 2.0;

	ctx.set_fill_style_str("#fff");
	ctx.fill_rect(x, y, width, height);
	ctx.set_stroke_style_str(NODE_STROKE);
	ctx.set_line_width(1.0);
	ctx.stroke_rect(x, y, width, height);

	ctx.set_fill_style_str("#333");
	ctx.set_text_align("start");
	for (i, line) in lines.iter().enumerate() {
		let line_y = y + TOOLTIP_PADDING + TOOLTIP_LINE_HEIGHT * (i as f64 + 0.75);
		let _ = ctx.fill_text(line, x + TOOLTIP_PADDING, line_y);
	}
}
