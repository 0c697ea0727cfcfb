use leptos::prelude::*;
use web_sys::SubmitEvent;

use super::chat::{ChatMessage, Role, Transcript};
use super::markdown::{SNIPPETS, insert_snippet, render_markdown};
use crate::components::diagram::state::EditorState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
	Edit,
	Preview,
	Assistant,
}

#[component]
fn EditTab() -> impl IntoView {
	let state = expect_context::<RwSignal<EditorState>>();
	let textarea_ref = NodeRef::<leptos::html::Textarea>::new();

	// Inserts at the caret (replacing any selection) and keeps the caret
	// right after the inserted text.
	let insert = move |snippet: &'static str| {
		let Some(textarea) = textarea_ref.get() else {
			return;
		};
		let start = textarea.selection_start().ok().flatten().unwrap_or(0);
		let end = textarea.selection_end().ok().flatten().unwrap_or(start);
		let (doc, caret) = state.with_untracked(|s| {
			insert_snippet(&s.diagram().documentation, start, end, &format!("{snippet} "))
		});
		textarea.set_value(&doc);
		let _ = textarea.set_selection_range(caret, caret);
		let _ = textarea.focus();
		state.update(|s| s.set_documentation(doc));
	};

	view! {
		<div class="doc-edit">
			<div class="doc-toolbar">
				<div class="doc-toolbar-row">
					<h3>"Documentation"</h3>
					<div class="doc-actions">
						<button class="icon-button" title="Save" disabled=true>
							"💾"
						</button>
						<button class="icon-button" title="Download" disabled=true>
							"⬇"
						</button>
					</div>
				</div>
				<div class="snippets">
					{SNIPPETS
						.into_iter()
						.map(|snippet| {
							view! {
								<button class="snippet" on:click=move |_| insert(snippet)>
									{snippet}
								</button>
							}
						})
						.collect_view()}
				</div>
			</div>
			<textarea
				node_ref=textarea_ref
				class="doc-textarea"
				spellcheck="false"
				placeholder="Write your documentation here using Markdown..."
				prop:value=move || state.with(|s| s.diagram().documentation.clone())
				on:input=move |ev| {
					let text = event_target_value(&ev);
					state.update(|s| s.set_documentation(text));
				}
			/>
		</div>
	}
}

#[component]
fn PreviewTab() -> impl IntoView {
	let state = expect_context::<RwSignal<EditorState>>();
	let has_docs = move || state.with(|s| !s.diagram().documentation.is_empty());

	view! {
		<div class="doc-preview">
			<Show
				when=has_docs
				fallback=|| {
					view! {
						<div class="doc-empty">
							<p>"No documentation yet."</p>
							<p class="muted">"Switch to Edit tab to start writing."</p>
						</div>
					}
				}
			>
				<div
					class="markdown"
					inner_html=move || state.with(|s| render_markdown(&s.diagram().documentation))
				/>
			</Show>
		</div>
	}
}

/// The transcript and draft prompt belong to the panel so they survive tab
/// switches.
#[component]
fn AssistantTab(transcript: RwSignal<Transcript>, prompt: RwSignal<String>) -> impl IntoView {
	let state = expect_context::<RwSignal<EditorState>>();
	let blank = move || prompt.with(|p| p.trim().is_empty());

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let text = prompt.get_untracked();
		let answered = state
			.try_update(|s| transcript.try_update(|t| t.converse(s, &text)))
			.flatten()
			.flatten();
		if answered.is_some() {
			prompt.set(String::new());
		}
	};

	view! {
		<div class="assistant">
			<div class="messages">
				<For
					each=move || transcript.with(|t| t.messages().to_vec())
					key=|m: &ChatMessage| m.id
					children=move |m: ChatMessage| {
						let user = m.role == Role::User;
						view! {
							<div class="message-row" class:from-user=user>
								<div class="message" class:user=user class:assistant={!user}>
									<Show when=move || !user>
										<div class="message-author">"🤖 AI Assistant"</div>
									</Show>
									<p class="message-body">{m.content}</p>
								</div>
							</div>
						}
					}
				/>
			</div>
			<form class="prompt-form" on:submit=on_submit>
				<input
					type="text"
					class="prompt-input"
					placeholder="Ask AI to generate diagrams or documentation..."
					prop:value=move || prompt.get()
					on:input=move |ev| prompt.set(event_target_value(&ev))
				/>
				<button type="submit" class="send-button" disabled=blank>
					"➤"
				</button>
			</form>
		</div>
	}
}

#[component]
pub fn DocumentationPanel() -> impl IntoView {
	let tab = RwSignal::new(Tab::Edit);
	let transcript = RwSignal::new(Transcript::default());
	let prompt = RwSignal::new(String::new());
	let tab_button = move |target: Tab, label: &'static str| {
		view! {
			<button
				class="tab"
				class:active=move || tab.get() == target
				class:assistant-tab={target == Tab::Assistant}
				on:click=move |_| tab.set(target)
			>
				{label}
			</button>
		}
	};

	view! {
		<aside class="doc-panel glass-panel">
			<nav class="doc-tabs">
				{tab_button(Tab::Edit, "📝 Edit")} {tab_button(Tab::Preview, "Preview")}
				{tab_button(Tab::Assistant, "🤖 AI")}
			</nav>
			<div class="doc-content">
				{move || match tab.get() {
					Tab::Edit => view! { <EditTab /> }.into_any(),
					Tab::Preview => view! { <PreviewTab /> }.into_any(),
					Tab::Assistant => {
						view! { <AssistantTab transcript=transcript prompt=prompt /> }.into_any()
					}
				}}
			</div>
		</aside>
	}
}
