use super::layout::{Point, RadialLayout};

/// Cursor distance (px) within which an edge counts as hovered.
pub const EDGE_HIT_DISTANCE: f64 = 6.0;
/// The decorative ring sits this far outside the layout circle.
pub const RING_OFFSET: f64 = 5.0;

const CURVE_SAMPLES: usize = 32;

/// Point on a quadratic curve from `p0` to `p1` bending toward `ctrl`,
/// at parameter `t` in `[0, 1]`.
pub fn quadratic_point(p0: Point, ctrl: Point, p1: Point, t: f64) -> Point {
	let u = 1.0 - t;
	Point {
		x: u * u * p0.x + 2.0 * u * t * ctrl.x + t * t * p1.x,
		y: u * u * p0.y + 2.0 * u * t * ctrl.y + t * t * p1.y,
	}
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub edge: Option<usize>,
	pub cursor: Point,
}

/// The non-interactive circle drawn around the finished layout. Kept out of
/// the hit-testable node/edge sets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingRing {
	pub center: Point,
	pub radius: f64,
}

pub struct RadialGraphState {
	pub layout: RadialLayout,
	pub hover: HoverState,
	pub ring: Option<BoundingRing>,
	pub width: f64,
	pub height: f64,
	endpoints: Vec<(Point, Point)>,
}

impl RadialGraphState {
	pub fn new(layout: RadialLayout, width: f64, height: f64) -> Self {
		// Layout construction guarantees every edge endpoint resolves.
		let endpoints = layout
			.edges
			.iter()
			.map(|edge| {
				let source = layout.node(&edge.source).map(|n| n.position).unwrap_or_default();
				let target = layout.node(&edge.target).map(|n| n.position).unwrap_or_default();
				(source, target)
			})
			.collect();

		Self {
			layout,
			hover: HoverState::default(),
			ring: None,
			width,
			height,
			endpoints,
		}
	}

	pub fn edge_endpoints(&self, idx: usize) -> (Point, Point) {
		self.endpoints[idx]
	}

	/// Index of the edge whose curve passes within [`EDGE_HIT_DISTANCE`] of
	/// the cursor, if any.
	pub fn edge_at_position(&self, x: f64, y: f64) -> Option<usize> {
		let cursor = Point { x, y };
		for (i, edge) in self.layout.edges.iter().enumerate() {
			let (source, target) = self.endpoints[i];
			for step in 0..=CURVE_SAMPLES {
				let t = step as f64 / CURVE_SAMPLES as f64;
				let p = quadratic_point(source, edge.control_point, target, t);
				if p.distance(cursor) < EDGE_HIT_DISTANCE {
					return Some(i);
				}
			}
		}
		None
	}

	/// Update hover state; returns whether anything visible changed and a
	/// redraw is needed.
	pub fn set_hover(&mut self, edge: Option<usize>, cursor: Point) -> bool {
		if self.hover.edge == edge {
			// The tooltip follows the cursor while an edge stays hovered.
			if edge.is_some() && self.hover.cursor != cursor {
				self.hover.cursor = cursor;
				return true;
			}
			return false;
		}
		self.hover.edge = edge;
		self.hover.cursor = cursor;
		true
	}

	pub fn is_hovered(&self, idx: usize) -> bool {
		self.hover.edge == Some(idx)
	}

	/// Tooltip text for the hovered edge, built from the display names the
	/// layout cached at construction.
	pub fn tooltip_lines(&self) -> Option<[String; 2]> {
		let edge = &self.layout.edges[self.hover.edge?];
		Some([
			format!("source: {}", edge.source_name),
			format!("target: {}", edge.target_name),
		])
	}

	/// Install the decorative ring after the main draw. Idempotent: the scene
	/// gains exactly one ring.
	pub fn add_bounding_ring(&mut self) {
		if self.ring.is_none() {
			self.ring = Some(BoundingRing {
				center: self.layout.origin,
				radius: self.layout.radius + RING_OFFSET,
			});
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::radial_graph::layout;
	use crate::components::radial_graph::types::{GraphData, GraphEdge, GraphNode};

	fn two_node_state() -> RadialGraphState {
		let data = GraphData {
			nodes: vec![GraphNode::new("a", "A"), GraphNode::new("b", "B")],
			edges: vec![GraphEdge::new("a", "b")],
		};
		let layout = layout::compute(&data, 300.0, 300.0).unwrap();
		RadialGraphState::new(layout, 300.0, 300.0)
	}

	#[test]
	fn quadratic_curve_hits_its_endpoints() {
		let p0 = Point { x: 0.0, y: 0.0 };
		let ctrl = Point { x: 10.0, y: 20.0 };
		let p1 = Point { x: 20.0, y: 0.0 };
		assert_eq!(quadratic_point(p0, ctrl, p1, 0.0), p0);
		assert_eq!(quadratic_point(p0, ctrl, p1, 1.0), p1);
	}

	#[test]
	fn quadratic_midpoint_bends_toward_control() {
		let p0 = Point { x: 0.0, y: 0.0 };
		let ctrl = Point { x: 10.0, y: 20.0 };
		let p1 = Point { x: 20.0, y: 0.0 };
		let mid = quadratic_point(p0, ctrl, p1, 0.5);
		assert_eq!(mid, Point { x: 10.0, y: 10.0 });
	}

	#[test]
	fn edge_endpoints_resolve_to_node_positions() {
		let state = two_node_state();
		let (source, target) = state.edge_endpoints(0);
		assert_eq!(source, state.layout.node("a").unwrap().position);
		assert_eq!(target, state.layout.node("b").unwrap().position);
	}

	#[test]
	fn cursor_on_the_curve_hits_the_edge() {
		// Two nodes on opposite sides of a 300x300 surface; the curve through
		// the center degenerates to the horizontal diameter.
		let state = two_node_state();
		assert_eq!(state.edge_at_position(150.0, 150.0), Some(0));
		assert_eq!(state.edge_at_position(200.0, 150.0), Some(0));
	}

	#[test]
	fn distant_cursor_hits_nothing() {
		let state = two_node_state();
		assert_eq!(state.edge_at_position(150.0, 100.0), None);
		assert_eq!(state.edge_at_position(10.0, 10.0), None);
	}

	#[test]
	fn hover_toggles_only_on_change() {
		let mut state = two_node_state();
		let p = Point { x: 150.0, y: 150.0 };
		assert!(state.set_hover(Some(0), p));
		assert!(state.is_hovered(0));
		assert!(!state.set_hover(Some(0), p));
		assert!(state.set_hover(Some(0), Point { x: 151.0, y: 150.0 }));
		assert!(state.set_hover(None, Point::default()));
		assert!(!state.set_hover(None, Point::default()));
		assert!(!state.is_hovered(0));
	}

	#[test]
	fn tooltip_uses_cached_display_names() {
		let mut state = two_node_state();
		assert!(state.tooltip_lines().is_none());
		state.set_hover(Some(0), Point { x: 150.0, y: 150.0 });
		let [source, target] = state.tooltip_lines().unwrap();
		assert_eq!(source, "source: A");
		assert_eq!(target, "target: B");
	}

	#[test]
	fn bounding_ring_is_added_once() {
		let mut state = two_node_state();
		assert!(state.ring.is_none());
		state.add_bounding_ring();
		let ring = state.ring.unwrap();
		assert_eq!(ring.center, state.layout.origin);
		assert_eq!(ring.radius, state.layout.radius + RING_OFFSET);
		state.add_bounding_ring();
		assert_eq!(state.ring, Some(ring));
	}
}
