use leptos::prelude::*;

use super::types::DetailsEvent;

/// Side panel describing the selected role.
#[component]
pub fn DetailsPanel(#[prop(into)] event: Signal<DetailsEvent>) -> impl IntoView {
	move || match event.get() {
		DetailsEvent::Placeholder => view! {
			<aside class="details-panel">
				<h2>"Select a role"</h2>
				<p class="details-hint">
					"Click a role to see where it leads and where it comes from. "
					"Click the background or press Escape to show every role again."
				</p>
			</aside>
		}
		.into_any(),
		DetailsEvent::Selected(role) => view! {
			<aside class="details-panel">
				<h2>{role.title}</h2>
				<p class="details-meta">{role.department}" · "{role.level}</p>
				<p>{role.description}</p>
				{role
					.requirements
					.map(|req| {
						view! {
							<section class="details-requirements">
								<h3>"Requirements"</h3>
								<p>{req}</p>
							</section>
						}
					})}
			</aside>
		}
		.into_any(),
	}
}
