use leptos::prelude::*;

use crate::components::career_map::{
	CareerMapCanvas, DetailsEvent, DetailsPanel, load_career_data,
};

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let (details, set_details) = signal(DetailsEvent::default());
	let loaded = load_career_data();

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<div class="message-screen">
					<h1>"The career map could not be loaded"</h1>
					<ul>
						{move || {
							errors
								.get()
								.into_iter()
								.map(|(_, e)| view! { <li>{e.to_string()}</li> })
								.collect_view()
						}}
					</ul>
				</div>
			}
		}>
			{loaded
				.map(|store| {
					let data = Signal::derive(move || store.clone());
					view! {
						<div class="fullscreen-graph">
							<CareerMapCanvas data=data details=set_details fullscreen=true />
							<div class="graph-overlay">
								<h1>"Career Paths"</h1>
								<p class="subtitle">"Drag to pan. Click a role to focus its path."</p>
							</div>
							<DetailsPanel event=details />
						</div>
					}
				})}
		</ErrorBoundary>
	}
}
