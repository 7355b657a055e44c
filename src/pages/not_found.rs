use leptos::prelude::*;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<h1>"Page not found"</h1>
		<p>"The page you were looking for doesn't exist."</p>
	}
}
