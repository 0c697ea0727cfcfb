use leptos::prelude::*;
use leptos_router::components::A;
use log::info;

use crate::components::canvas::DiagramCanvas;
use crate::components::diagram::EditorState;
use crate::components::docs::DocumentationPanel;
use crate::components::palette::ToolPalette;
use crate::components::starfield::Starfield;

/// Editor shell. Owns the session's [`EditorState`] and shares it with the
/// palette, canvas and documentation panel through context. The state is
/// dropped when the user navigates away.
#[component]
pub fn Editor() -> impl IntoView {
	let state = RwSignal::new(EditorState::default());
	provide_context(state);
	info!("editor session started");
	on_cleanup(|| info!("editor session discarded"));

	let collaborators = move || state.with(|s| s.diagram().cursors.len());

	view! {
		<div class="editor">
			<Starfield />

			<header class="editor-header">
				<div class="header-left">
					<A href="/" attr:class="icon-button" attr:title="Back">
						"←"
					</A>
					<h1>"InfraSketch Editor"</h1>
				</div>
				<div class="header-right">
					<button class="glass-button">
						{move || format!("👥 {} collaborators", collaborators())}
					</button>
					<button class="icon-button" title="Share">
						"🔗"
					</button>
					<button class="icon-button" title="Settings">
						"⚙"
					</button>
				</div>
			</header>

			<div class="editor-body">
				<ToolPalette />
				<DiagramCanvas />
				<DocumentationPanel />
			</div>
		</div>
	}
}
