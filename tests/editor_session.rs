//! Integration tests: a full editing session driven through `EditorState`,
//! the way the canvas, palette and documentation panel drive it.

use infrasketch::components::diagram::payload::encode_tool;
use infrasketch::components::diagram::state::{CanvasMode, PointerButton};
use infrasketch::components::diagram::transform::{MAX_ZOOM, MIN_ZOOM};
use infrasketch::components::diagram::{EditorState, Point};
use infrasketch::components::docs::markdown::render_markdown;
use infrasketch::components::palette::catalog;
use pretty_assertions::assert_eq;

const ORIGIN: Point = Point::new(320.0, 64.0);

fn at(x: f64, y: f64) -> Point {
	ORIGIN + Point::new(x, y)
}

#[test]
fn session_starts_from_seed() {
	let state = EditorState::default();
	let diagram = state.diagram();
	assert!(diagram.nodes.is_empty());
	assert!(diagram.connections.is_empty());
	assert!(diagram.comments.is_empty());
	assert_eq!(diagram.cursors.len(), 2);
	assert_eq!(state.mode(), CanvasMode::Idle);
	assert_eq!(state.view().zoom, 1.0);
}

#[test]
fn palette_click_then_canvas_click_places_one_node() {
	let mut state = EditorState::default();
	let tool = catalog::find("aws-s3").unwrap().clone();

	state.select_tool(tool);
	assert_eq!(state.mode(), CanvasMode::ToolArmed);
	state.canvas_click(at(100.0, 40.0), ORIGIN);
	// The tool is not sticky.
	state.canvas_click(at(300.0, 40.0), ORIGIN);

	let nodes = &state.diagram().nodes;
	assert_eq!(nodes.len(), 1);
	assert_eq!(nodes[0].position, Point::new(100.0, 40.0));
	assert_eq!(nodes[0].label, "AWS S3");
	assert_eq!(state.mode(), CanvasMode::Idle);
}

#[test]
fn drop_lands_under_cursor_after_zoom_and_pan() {
	let mut state = EditorState::default();
	for _ in 0..3 {
		state.zoom_in();
	}
	state.pointer_down(at(0.0, 0.0), ORIGIN, PointerButton::Middle, false);
	state.pointer_move(at(64.0, -32.0));
	state.pointer_up();

	let payload = encode_tool(catalog::find("firewall").unwrap()).unwrap();
	let drop_at = at(400.0, 250.0);
	let id = state.drop_tool(Some(&payload), drop_at, ORIGIN).unwrap();

	let node = state.diagram().node(&id).unwrap();
	let back = state.view().to_screen(node.position, ORIGIN);
	assert!((back.x - drop_at.x).abs() < 1e-9);
	assert!((back.y - drop_at.y).abs() < 1e-9);
}

#[test]
fn malformed_drop_is_ignored() {
	let mut state = EditorState::default();
	state.apply_prompt("microservices please");
	let before = state.diagram().nodes.clone();

	for raw in [None, Some(""), Some("[]"), Some(r#"{"id": 3}"#)] {
		assert!(state.drop_tool(raw, at(10.0, 10.0), ORIGIN).is_err());
	}
	assert_eq!(state.diagram().nodes, before);
}

#[test]
fn zoom_stays_within_limits() {
	let mut state = EditorState::default();
	for _ in 0..40 {
		state.wheel(-1.0, true);
	}
	assert_eq!(state.view().zoom, MAX_ZOOM);
	for _ in 0..40 {
		state.zoom_out();
	}
	assert_eq!(state.view().zoom, MIN_ZOOM);
	state.reset_view();
	assert_eq!(state.view().zoom, 1.0);
	assert_eq!(state.view().pan, Point::ORIGIN);
}

#[test]
fn assistant_prompts_append_layouts_and_rewrite_docs() {
	let mut state = EditorState::default();

	let first = state.apply_prompt("Design a scalable e-commerce infrastructure").unwrap();
	assert_eq!((first.rule, first.added), ("e-commerce", 9));

	let second = state.apply_prompt("Create a microservices architecture").unwrap();
	assert_eq!((second.rule, second.added), ("microservices", 7));

	let third = state.apply_prompt("hello").unwrap();
	assert_eq!((third.rule, third.added), ("general", 6));

	assert_eq!(state.diagram().nodes.len(), 22);
	assert!(state.diagram().documentation.starts_with("# System Architecture\n"));

	let html = render_markdown(&state.diagram().documentation);
	assert!(html.starts_with(r#"<h1 class="md-h1">System Architecture</h1><br>"#));
}

#[test]
fn dragging_a_responder_node_moves_only_that_node() {
	let mut state = EditorState::default();
	state.apply_prompt("kubernetes cluster");
	let before = state.diagram().nodes.clone();
	let target = before[3].clone();

	let grab = state.view().to_screen(target.center(), ORIGIN);
	assert!(state.pointer_down(grab, ORIGIN, PointerButton::Primary, false));
	state.pointer_move(grab + Point::new(-15.0, 25.0));
	state.pointer_up();

	let after = &state.diagram().nodes;
	for (old, new) in before.iter().zip(after) {
		if old.id == target.id {
			assert_eq!(new.position, old.position + Point::new(-15.0, 25.0));
		} else {
			assert_eq!(new, old);
		}
	}
}
