use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::error::{GraphError, Result};
use super::layout::{self, Point};
use super::render;
use super::state::RadialGraphState;
use super::types::GraphData;

/// Height used when the container reports zero height.
pub const DEFAULT_HEIGHT: f64 = 500.0;

type SharedState = Rc<RefCell<Option<RadialGraphState>>>;
type SharedContext = Rc<RefCell<Option<CanvasRenderingContext2d>>>;

#[component]
pub fn RadialGraphCanvas(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: SharedState = Rc::new(RefCell::new(None));
	let context: SharedContext = Rc::new(RefCell::new(None));

	let (state_init, context_init) = (state.clone(), context.clone());
	Effect::new(move |_| {
		// The ref is empty until the canvas mounts; the effect re-runs then.
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let result = init_graph(
			canvas.into(),
			&data.get(),
			width,
			height,
			&state_init,
			&context_init,
		);
		if let Err(err) = result {
			log::error!("radial graph initialization failed: {err}");
		}
	});

	let (state_mm, context_mm) = (state.clone(), context.clone());
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		let cursor = Point {
			x: ev.client_x() as f64 - rect.left(),
			y: ev.client_y() as f64 - rect.top(),
		};

		let mut state_ref = state_mm.borrow_mut();
		let context_ref = context_mm.borrow();
		let (Some(s), Some(ctx)) = (state_ref.as_mut(), context_ref.as_ref()) else {
			return;
		};
		let hovered = s.edge_at_position(cursor.x, cursor.y);
		if s.set_hover(hovered, cursor) {
			render::render(s, ctx);
		}
	};

	let (state_ml, context_ml) = (state.clone(), context.clone());
	let on_mouseleave = move |_: MouseEvent| {
		let mut state_ref = state_ml.borrow_mut();
		let context_ref = context_ml.borrow();
		let (Some(s), Some(ctx)) = (state_ref.as_mut(), context_ref.as_ref()) else {
			return;
		};
		if s.set_hover(None, Point::default()) {
			render::render(s, ctx);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="radial-graph-canvas"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			style="display: block;"
		/>
	}
}

/// One-shot initialization: measure the container, lay out the dataset, draw
/// it, then add the decorative ring. Any failure here is fatal and the canvas
/// stays blank.
fn init_graph(
	canvas: HtmlCanvasElement,
	data: &GraphData,
	width: Option<f64>,
	height: Option<f64>,
	state: &SharedState,
	context: &SharedContext,
) -> Result<()> {
	let parent = canvas
		.parent_element()
		.ok_or_else(|| GraphError::MissingContainer("canvas has no parent element".into()))?;

	let w = width.unwrap_or_else(|| parent.client_width() as f64);
	let mut h = height.unwrap_or_else(|| parent.client_height() as f64);
	if h == 0.0 {
		h = DEFAULT_HEIGHT;
	}
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);

	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|ctx| ctx.dyn_into().ok())
		.ok_or_else(|| GraphError::MissingContainer("2d canvas context unavailable".into()))?;

	let layout = layout::compute(data, w, h)?;
	let mut graph_state = RadialGraphState::new(layout, w, h);
	render::render(&graph_state, &ctx);

	// The bounding ring joins the scene after the main draw.
	graph_state.add_bounding_ring();
	render::render(&graph_state, &ctx);

	log::info!(
		"radial graph rendered: {} nodes, {} edges, radius {:.1}",
		graph_state.layout.nodes.len(),
		graph_state.layout.edges.len(),
		graph_state.layout.radius
	);

	*state.borrow_mut() = Some(graph_state);
	*context.borrow_mut() = Some(ctx);
	Ok(())
}
