use leptos::ev;
use leptos::prelude::*;
use log::warn;
use web_sys::{DragEvent, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::render;
use crate::components::diagram::payload::TOOL_MIME;
use crate::components::diagram::state::{CanvasMode, EditorState, Gesture, PointerButton};
use crate::components::diagram::types::Point;

fn client_point(ev: &MouseEvent) -> Point {
	Point::new(ev.client_x() as f64, ev.client_y() as f64)
}

/// Top-left of the canvas element in viewport coordinates.
fn canvas_origin(canvas_ref: NodeRef<leptos::html::Canvas>) -> Option<Point> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some(Point::new(rect.left(), rect.top()))
}

/// Sizes the canvas backing store to its parent and returns that size.
fn fit_to_parent(canvas: &HtmlCanvasElement) -> (f64, f64) {
	let (w, h) = canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.filter(|&(w, h)| w > 0.0 && h > 0.0)
		.unwrap_or((800.0, 600.0));
	if canvas.width() != w as u32 {
		canvas.set_width(w as u32);
	}
	if canvas.height() != h as u32 {
		canvas.set_height(h as u32);
	}
	(w, h)
}

#[component]
pub fn DiagramCanvas() -> impl IntoView {
	let state = expect_context::<RwSignal<EditorState>>();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let resized = RwSignal::new(0u32);

	let resize = window_event_listener(ev::resize, move |_| {
		resized.update(|n| *n = n.wrapping_add(1));
	});
	on_cleanup(move || resize.remove());

	Effect::new(move |_| {
		resized.track();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (w, h) = fit_to_parent(&canvas);
		let Some(ctx) = render::context_2d(&canvas) else {
			return;
		};
		state.with(|s| render::render(s, &ctx, w, h));
	});

	let on_mousedown = move |ev: MouseEvent| {
		let Some(origin) = canvas_origin(canvas_ref) else {
			return;
		};
		let (client, button, modifier) = (
			client_point(&ev),
			PointerButton::from(ev.button()),
			ev.ctrl_key() || ev.meta_key(),
		);
		let started = state
			.try_update(|s| s.pointer_down(client, origin, button, modifier))
			.unwrap_or(false);
		if started {
			ev.prevent_default();
		}
	};

	let on_mousemove = move |ev: MouseEvent| {
		if state.with_untracked(|s| *s.gesture() == Gesture::Idle) {
			return;
		}
		let client = client_point(&ev);
		state.update(|s| {
			s.pointer_move(client);
		});
	};

	let end_gesture = move |_: MouseEvent| {
		if state.with_untracked(|s| *s.gesture() != Gesture::Idle) {
			state.update(|s| s.pointer_up());
		}
	};

	let on_click = move |ev: MouseEvent| {
		let Some(origin) = canvas_origin(canvas_ref) else {
			return;
		};
		let client = client_point(&ev);
		state.update(|s| {
			s.canvas_click(client, origin);
		});
	};

	let on_wheel = move |ev: WheelEvent| {
		if !(ev.ctrl_key() || ev.meta_key()) {
			return;
		}
		ev.prevent_default();
		let delta_y = ev.delta_y();
		state.update(|s| {
			s.wheel(delta_y, true);
		});
	};

	let on_dragover = move |ev: DragEvent| {
		ev.prevent_default();
		if let Some(dt) = ev.data_transfer() {
			dt.set_drop_effect("copy");
		}
	};

	let on_drop = move |ev: DragEvent| {
		ev.prevent_default();
		let Some(origin) = canvas_origin(canvas_ref) else {
			return;
		};
		let raw = ev.data_transfer().and_then(|dt| dt.get_data(TOOL_MIME).ok());
		let client = Point::new(ev.client_x() as f64, ev.client_y() as f64);
		if let Some(Err(err)) = state.try_update(|s| s.drop_tool(raw.as_deref(), client, origin)) {
			warn!("ignoring drop: {err}");
		}
	};

	let cursor = move || match state.with(|s| s.mode()) {
		CanvasMode::Panning | CanvasMode::DraggingNode => "grabbing",
		CanvasMode::ToolArmed => "crosshair",
		CanvasMode::Idle => "grab",
	};

	view! {
		<div class="canvas-pane">
			<div class="canvas-controls">
				<button class="glass-button" title="Zoom in" on:click=move |_| state.update(|s| s.zoom_in())>
					"+"
				</button>
				<button class="glass-button" title="Zoom out" on:click=move |_| state.update(|s| s.zoom_out())>
					"−"
				</button>
				<button class="glass-button" title="Reset view" on:click=move |_| state.update(|s| s.reset_view())>
					"⟲"
				</button>
				<div class="glass-label">
					{move || format!("{}%", state.with(|s| s.view().zoom_percent()))}
				</div>
			</div>

			<div class="canvas-surface">
				<canvas
					node_ref=canvas_ref
					class="diagram-canvas"
					style:cursor=cursor
					on:mousedown=on_mousedown
					on:mousemove=on_mousemove
					on:mouseup=end_gesture
					on:mouseleave=end_gesture
					on:click=on_click
					on:wheel=on_wheel
					on:dragover=on_dragover
					on:drop=on_drop
				/>
			</div>

			<div class="status-bar">
				<span>{move || format!("Nodes: {}", state.with(|s| s.diagram().nodes.len()))}</span>
				<span>
					{move || format!("Connections: {}", state.with(|s| s.diagram().connections.len()))}
				</span>
				<span>
					{move || {
						let pan = state.with(|s| s.view().pan);
						format!("Position: {}, {}", pan.x.round(), pan.y.round())
					}}
				</span>
			</div>
		</div>
	}
}
