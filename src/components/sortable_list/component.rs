use leptos::prelude::*;
use web_sys::DragEvent;

use super::reorder::reorder;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListItem {
	pub id: String,
	pub text: String,
}

impl ListItem {
	pub fn new(id: &str, text: &str) -> Self {
		Self {
			id: id.into(),
			text: text.into(),
		}
	}
}

/// A vertically drag-reorderable list. Dropping a row onto another applies a
/// stable array move to the item signal.
#[component]
pub fn SortableList(items: Vec<ListItem>) -> impl IntoView {
	let (items, set_items) = signal(items);
	let (drag_from, set_drag_from) = signal(None::<usize>);

	view! {
		<ul class="sortable-list">
			{move || {
				items
					.get()
					.into_iter()
					.enumerate()
					.map(|(i, item)| {
						view! {
							<li
								class="sortable-item"
								draggable="true"
								on:dragstart=move |_| set_drag_from.set(Some(i))
								on:dragover=move |ev: DragEvent| ev.prevent_default()
								on:drop=move |ev: DragEvent| {
									ev.prevent_default();
									if let Some(from) = drag_from.get() {
										set_items.update(|items| {
											*items = reorder(std::mem::take(items), from, i);
										});
									}
									set_drag_from.set(None);
								}
								on:dragend=move |_| set_drag_from.set(None)
							>
								<span class="item-text">{item.text}</span>
								<span class="drag-handle">"::"</span>
							</li>
						}
					})
					.collect_view()
			}}
		</ul>
	}
}
