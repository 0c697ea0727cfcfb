use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::starfield::Starfield;

const FEATURES: [(&str, &str, &str); 3] = [
	(
		"⚡",
		"AI-Powered",
		"Generate diagrams and documentation with natural language prompts",
	),
	(
		"👥",
		"Real-time Collaboration",
		"Work together with your team in real-time with comments and mentions",
	),
	(
		"⬇",
		"Export & Integrate",
		"Export to PNG, SVG, PDF and integrate with GitHub, Notion, and more",
	),
];

/// Landing page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<div class="landing">
			<Starfield />

			<nav class="landing-nav">
				<div class="brand">
					<span class="brand-mark">"⚡"</span>
					<span class="brand-name">"InfraSketch"</span>
				</div>
				<div class="nav-links">
					<a href="#features">"Features"</a>
					<a href="#integrations">"Integrations"</a>
					<button class="glass-button">"Sign In"</button>
				</div>
			</nav>

			<main class="hero">
				<h1>
					"Design, Diagram &" <br /> <span class="gradient-text">"Document Smarter"</span>
				</h1>
				<p class="tagline">
					"Collaborative system design and AI-powered diagrams." <br />
					"Create beautiful architecture diagrams, flowcharts, and documentation in one unified workspace."
				</p>
				<A href="/editor" attr:class="cta">
					"Start Designing →"
				</A>

				<section id="features" class="feature-grid">
					{FEATURES
						.into_iter()
						.map(|(icon, title, body)| {
							view! {
								<div class="feature-card glass-panel">
									<div class="feature-icon">{icon}</div>
									<h3>{title}</h3>
									<p>{body}</p>
								</div>
							}
						})
						.collect_view()}
				</section>
			</main>
		</div>
	}
}
