//! Radial layout: places nodes evenly around a circle and bows every edge
//! through the shared center.

use std::collections::HashMap;
use std::f64::consts::PI;

use super::error::{GraphError, Result};
use super::scale;
use super::types::GraphData;

/// Display size for nodes that carry no numeric value.
pub const DEFAULT_NODE_SIZE: f64 = 40.0;

/// Node fill as shipped: a lookup-expression string, not an evaluated palette
/// color. Left as-is intentionally; the canvas ignores fill styles it cannot
/// parse, so node discs stay invisible and only their labels show. An
/// evaluated form would index a palette by the node's cluster id.
pub const PLACEHOLDER_FILL: &str = "colors[id % colors.length]";

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub fn distance(self, other: Point) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

#[derive(Clone, Debug)]
pub struct NodeStyle {
	pub fill: String,
	pub opacity: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LabelPosition {
	#[default]
	Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
	#[default]
	Start,
}

/// Label placement: anchored to the right of the node, left-aligned.
#[derive(Clone, Copy, Debug, Default)]
pub struct LabelCfg {
	pub position: LabelPosition,
	pub align: TextAlign,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeShape {
	Quadratic,
}

#[derive(Clone, Debug)]
pub struct EdgeStyle {
	pub stroke: String,
	pub line_width: f64,
	pub end_arrow: bool,
}

/// A node decorated by the layout pass. Never mutated afterward.
#[derive(Clone, Debug)]
pub struct LaidNode {
	pub id: String,
	pub name: String,
	pub angle: f64,
	pub position: Point,
	pub size: f64,
	pub cluster: u32,
	pub style: NodeStyle,
	pub label: LabelCfg,
}

/// An edge decorated by the layout pass, with the endpoint display names
/// cached once for tooltip rendering.
#[derive(Clone, Debug)]
pub struct LaidEdge {
	pub source: String,
	pub target: String,
	pub source_name: String,
	pub target_name: String,
	pub shape: EdgeShape,
	pub control_point: Point,
	pub style: EdgeStyle,
}

/// The decorated dataset handed to the renderer. Immutable after layout.
#[derive(Clone, Debug)]
pub struct RadialLayout {
	pub nodes: Vec<LaidNode>,
	pub edges: Vec<LaidEdge>,
	pub origin: Point,
	pub radius: f64,
}

impl RadialLayout {
	pub fn node(&self, id: &str) -> Option<&LaidNode> {
		self.nodes.iter().find(|n| n.id == id)
	}
}

/// Sequential cluster ids, assigned in first-seen order. An explicit
/// accumulator threaded through the layout pass; repeated keys reuse the id
/// they were first given.
#[derive(Debug, Default)]
pub struct ClusterIds {
	next: u32,
	assigned: HashMap<String, u32>,
}

impl ClusterIds {
	pub fn assign(&mut self, key: &str) -> u32 {
		if let Some(&id) = self.assigned.get(key) {
			return id;
		}
		let id = self.next;
		self.next += 1;
		self.assigned.insert(key.to_owned(), id);
		id
	}
}

/// Lay out `data` inside a `width` x `height` surface.
///
/// Node `i` of `N` sits at angle `i * 2π/N` (input order, first node at
/// angle 0) on a circle of radius `min(width, height) / 3` centered on the
/// surface. Fails with [`GraphError::InvalidInput`] on an empty node set and
/// [`GraphError::InvalidReference`] when an edge names an unknown node id.
pub fn compute(data: &GraphData, width: f64, height: f64) -> Result<RadialLayout> {
	if data.nodes.is_empty() {
		return Err(GraphError::InvalidInput("node set is empty".into()));
	}

	let origin = Point {
		x: width / 2.0,
		y: height / 2.0,
	};
	let radius = if width < height {
		width / 3.0
	} else {
		height / 3.0
	};
	let angle_sep = 2.0 * PI / data.nodes.len() as f64;
	let value_range = value_range(data);

	let mut clusters = ClusterIds::default();
	let mut nodes = Vec::with_capacity(data.nodes.len());
	let mut name_by_id: HashMap<&str, &str> = HashMap::new();

	for (i, node) in data.nodes.iter().enumerate() {
		let angle = i as f64 * angle_sep;
		let size = match (node.value, value_range) {
			(Some(v), Some((min, max))) => scale::node_size(v, min, max),
			_ => DEFAULT_NODE_SIZE,
		};
		nodes.push(LaidNode {
			id: node.id.clone(),
			name: node.name.clone(),
			angle,
			position: Point {
				x: origin.x + radius * angle.cos(),
				y: origin.y + radius * angle.sin(),
			},
			size,
			cluster: clusters.assign(&node.id),
			style: NodeStyle {
				fill: PLACEHOLDER_FILL.into(),
				opacity: 0.0,
			},
			label: LabelCfg::default(),
		});
		name_by_id.insert(&node.id, &node.name);
	}

	let mut edges = Vec::with_capacity(data.edges.len());
	for edge in &data.edges {
		let source_name = resolve_name(&name_by_id, &edge.source)?;
		let target_name = resolve_name(&name_by_id, &edge.target)?;
		edges.push(LaidEdge {
			source: edge.source.clone(),
			target: edge.target.clone(),
			source_name,
			target_name,
			shape: EdgeShape::Quadratic,
			// Every chord bows through the shared center; straight chords
			// between co-circular nodes would overlap.
			control_point: origin,
			style: EdgeStyle {
				stroke: "#000000".into(),
				line_width: 2.0,
				end_arrow: true,
			},
		});
	}

	Ok(RadialLayout {
		nodes,
		edges,
		origin,
		radius,
	})
}

fn resolve_name(names: &HashMap<&str, &str>, id: &str) -> Result<String> {
	names
		.get(id)
		.map(|name| (*name).to_owned())
		.ok_or_else(|| GraphError::InvalidReference { id: id.to_owned() })
}

fn value_range(data: &GraphData) -> Option<(f64, f64)> {
	let mut range: Option<(f64, f64)> = None;
	for v in data.nodes.iter().filter_map(|n| n.value) {
		range = Some(match range {
			Some((min, max)) => (min.min(v), max.max(v)),
			None => (v, v),
		});
	}
	range
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::radial_graph::types::{GraphEdge, GraphNode};

	const EPS: f64 = 1e-9;

	fn feedback_loop_data() -> GraphData {
		GraphData {
			nodes: vec![
				GraphNode::new("unhappy_customers", "Unhappy Customers"),
				GraphNode::new("response_time", "Response Time"),
				GraphNode::new("bugs_in_product", "Bugs in product"),
				GraphNode::new("new_features", "New Features"),
				GraphNode::new("support", "Support Tickets"),
			],
			edges: vec![
				GraphEdge::new("support", "response_time"),
				GraphEdge::new("response_time", "unhappy_customers"),
				GraphEdge::new("unhappy_customers", "support"),
				GraphEdge::new("bugs_in_product", "unhappy_customers"),
				GraphEdge::new("new_features", "unhappy_customers"),
				GraphEdge::new("new_features", "bugs_in_product"),
			],
		}
	}

	#[test]
	fn empty_node_set_is_rejected() {
		let err = compute(&GraphData::default(), 800.0, 600.0).unwrap_err();
		assert!(matches!(err, GraphError::InvalidInput(_)));
	}

	#[test]
	fn unknown_edge_endpoint_is_rejected() {
		let data = GraphData {
			nodes: vec![GraphNode::new("a", "A")],
			edges: vec![GraphEdge::new("a", "ghost")],
		};
		let err = compute(&data, 800.0, 600.0).unwrap_err();
		assert_eq!(err, GraphError::InvalidReference { id: "ghost".into() });
	}

	#[test]
	fn angles_are_evenly_spaced_from_zero() {
		let layout = compute(&feedback_loop_data(), 800.0, 600.0).unwrap();
		let sep = 2.0 * PI / 5.0;
		for (i, node) in layout.nodes.iter().enumerate() {
			assert!((node.angle - i as f64 * sep).abs() < EPS);
		}
		assert_eq!(layout.nodes[0].angle, 0.0);
	}

	#[test]
	fn five_nodes_land_on_72_degree_steps() {
		let layout = compute(&feedback_loop_data(), 800.0, 600.0).unwrap();
		let degrees: Vec<f64> = layout.nodes.iter().map(|n| n.angle.to_degrees()).collect();
		for (got, want) in degrees.iter().zip([0.0, 72.0, 144.0, 216.0, 288.0]) {
			assert!((got - want).abs() < 1e-6);
		}
	}

	#[test]
	fn nodes_lie_on_the_layout_circle() {
		let layout = compute(&feedback_loop_data(), 800.0, 600.0).unwrap();
		for node in &layout.nodes {
			assert!((node.position.distance(layout.origin) - layout.radius).abs() < EPS);
		}
	}

	#[test]
	fn radius_uses_the_smaller_dimension() {
		let data = feedback_loop_data();
		let wide = compute(&data, 900.0, 300.0).unwrap();
		assert_eq!(wide.radius, 100.0);
		let tall = compute(&data, 300.0, 900.0).unwrap();
		assert_eq!(tall.radius, 100.0);
		assert_eq!(tall.origin, Point { x: 150.0, y: 450.0 });
	}

	#[test]
	fn single_node_sits_at_angle_zero() {
		let data = GraphData {
			nodes: vec![GraphNode::new("only", "Only")],
			edges: vec![],
		};
		let layout = compute(&data, 600.0, 600.0).unwrap();
		let node = &layout.nodes[0];
		assert_eq!(node.angle, 0.0);
		assert!((node.position.x - (layout.origin.x + layout.radius)).abs() < EPS);
		assert!((node.position.y - layout.origin.y).abs() < EPS);
	}

	#[test]
	fn edges_cache_resolved_display_names() {
		let data = feedback_loop_data();
		let layout = compute(&data, 800.0, 600.0).unwrap();
		assert_eq!(layout.edges.len(), 6);
		for edge in &layout.edges {
			assert!(!edge.source_name.is_empty());
			assert!(!edge.target_name.is_empty());
			assert_eq!(edge.source_name, layout.node(&edge.source).unwrap().name);
			assert_eq!(edge.target_name, layout.node(&edge.target).unwrap().name);
		}
		assert_eq!(layout.edges[0].source_name, "Support Tickets");
		assert_eq!(layout.edges[0].target_name, "Response Time");
	}

	#[test]
	fn edges_bow_through_the_origin() {
		let layout = compute(&feedback_loop_data(), 800.0, 600.0).unwrap();
		for edge in &layout.edges {
			assert_eq!(edge.shape, EdgeShape::Quadratic);
			assert_eq!(edge.control_point, layout.origin);
		}
	}

	#[test]
	fn values_scale_into_the_size_range() {
		let mut data = feedback_loop_data();
		for (node, value) in data.nodes.iter_mut().zip([2.0, 8.0, 14.0, 20.0, 11.0]) {
			node.value = Some(value);
		}
		let layout = compute(&data, 800.0, 600.0).unwrap();
		assert_eq!(layout.nodes[0].size, scale::NODE_SIZE_RANGE.0);
		assert_eq!(layout.nodes[3].size, scale::NODE_SIZE_RANGE.1);
		for node in &layout.nodes {
			assert!(node.size >= scale::NODE_SIZE_RANGE.0);
			assert!(node.size <= scale::NODE_SIZE_RANGE.1);
		}
	}

	#[test]
	fn unvalued_nodes_keep_the_default_size() {
		let layout = compute(&feedback_loop_data(), 800.0, 600.0).unwrap();
		for node in &layout.nodes {
			assert_eq!(node.size, DEFAULT_NODE_SIZE);
		}
	}

	#[test]
	fn nodes_keep_the_placeholder_fill() {
		let layout = compute(&feedback_loop_data(), 800.0, 600.0).unwrap();
		for node in &layout.nodes {
			assert_eq!(node.style.fill, PLACEHOLDER_FILL);
			assert_eq!(node.style.opacity, 0.0);
		}
	}

	#[test]
	fn cluster_ids_follow_input_order() {
		let layout = compute(&feedback_loop_data(), 800.0, 600.0).unwrap();
		for (i, node) in layout.nodes.iter().enumerate() {
			assert_eq!(node.cluster, i as u32);
		}
	}

	#[test]
	fn cluster_accumulator_reuses_ids_for_repeated_keys() {
		let mut clusters = ClusterIds::default();
		assert_eq!(clusters.assign("a"), 0);
		assert_eq!(clusters.assign("b"), 1);
		assert_eq!(clusters.assign("a"), 0);
		assert_eq!(clusters.assign("c"), 2);
	}
}
