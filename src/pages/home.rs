use leptos::prelude::*;

use crate::components::radial_graph::{GraphData, GraphEdge, GraphNode, RadialGraphCanvas};
use crate::components::sortable_list::{ListItem, SortableList};

/// The fixed support feedback-loop dataset shown on the homepage.
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

fn demo_items() -> Vec<ListItem> {
	vec![
		ListItem::new("1", "Item 1"),
		ListItem::new("2", "Item 2"),
		ListItem::new("3", "Item 3"),
		ListItem::new("4", "Item 4"),
	]
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let graph_data = Signal::derive(move || feedback_loop_data());

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="graph-container">
				<RadialGraphCanvas data=graph_data />
			</div>
			<SortableList items=demo_items() />
		</ErrorBoundary>
	}
}
