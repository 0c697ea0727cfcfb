use std::collections::HashSet;

use leptos::prelude::*;
use log::warn;
use web_sys::DragEvent;

use super::catalog::{DEFAULT_EXPANDED, Tool, ToolCategory};
use crate::components::diagram::payload::{TOOL_MIME, encode_tool};
use crate::components::diagram::state::EditorState;

fn start_drag(ev: &DragEvent, tool: &Tool) {
	let Some(dt) = ev.data_transfer() else {
		return;
	};
	match encode_tool(tool) {
		Ok(json) => {
			let _ = dt.set_data(TOOL_MIME, &json);
			dt.set_effect_allowed("copy");
		}
		Err(err) => warn!("cannot drag {}: {err}", tool.id),
	}
}

#[component]
fn ToolButton(tool: &'static Tool) -> impl IntoView {
	let state = expect_context::<RwSignal<EditorState>>();
	let selected = move || state.with(|s| s.selected_tool().is_some_and(|t| t.id == tool.id));

	view! {
		<button
			class="tool-button"
			class:selected=selected
			draggable="true"
			title=tool.name.as_ref()
			on:click=move |_| state.update(|s| s.select_tool(tool.clone()))
			on:dragstart=move |ev: DragEvent| start_drag(&ev, tool)
		>
			<span class="tool-icon" style:color=tool.color.as_ref()>
				{tool.icon.as_ref()}
			</span>
			<span class="tool-name">{tool.name.as_ref()}</span>
		</button>
	}
}

#[component]
pub fn ToolPalette() -> impl IntoView {
	let expanded = RwSignal::new(DEFAULT_EXPANDED.into_iter().collect::<HashSet<ToolCategory>>());

	let toggle = move |category: ToolCategory| {
		expanded.update(|set| {
			if !set.remove(&category) {
				set.insert(category);
			}
		});
	};

	view! {
		<aside class="tool-palette glass-panel">
			<header class="panel-header">
				<h2>"Tools Palette"</h2>
				<p class="muted">"Drag tools to canvas or click to select"</p>
			</header>
			<div class="palette-categories">
				{ToolCategory::ALL
					.into_iter()
					.map(|category| {
						let is_open = move || expanded.with(|set| set.contains(&category));
						view! {
							<section class="palette-category" data-category=category.key()>
								<button class="category-toggle" on:click=move |_| toggle(category)>
									<span>{category.title()}</span>
									<span class="chevron" class:open=is_open>
										"›"
									</span>
								</button>
								<Show when=is_open>
									<div class="tool-grid">
										{category
											.tools()
											.iter()
											.map(|tool| view! { <ToolButton tool=tool /> })
											.collect_view()}
									</div>
								</Show>
							</section>
						}
					})
					.collect_view()}
			</div>
		</aside>
	}
}
