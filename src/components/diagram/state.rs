//! Single-writer editor state. Every view reads from and writes to one
//! [`EditorState`] through the named methods below; nothing else mutates the
//! diagram.

use log::debug;

use super::ids::NodeIds;
use super::payload::{self, PayloadError};
use super::transform::{BUTTON_ZOOM_STEP, DEFAULT_ZOOM};
use super::types::{DiagramState, Node, NodeId, Point, Size, ViewTransform};
use crate::components::docs::chat;
use crate::components::docs::responder;
use crate::components::palette::catalog::Tool;

/// Default size of nodes placed by click or drop.
pub const PLACED_NODE_SIZE: Size = Size::new(120.0, 60.0);

/// Mouse button of a press, from `MouseEvent::button`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
	/// Usually the left button.
	Primary,
	/// Wheel button; always pans.
	Middle,
	/// Anything else, ignored.
	Other,
}

impl From<i16> for PointerButton {
	fn from(button: i16) -> Self {
		match button {
			0 => PointerButton::Primary,
			1 => PointerButton::Middle,
			_ => PointerButton::Other,
		}
	}
}

/// A pointer gesture in progress on the canvas.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Gesture {
	/// No button held.
	#[default]
	Idle,
	/// Moves the pan offset by raw screen deltas.
	Panning {
		/// Pointer position at the previous move.
		last: Point,
	},
	/// Moves one node by screen deltas divided by zoom.
	DraggingNode {
		/// Node being dragged.
		id: NodeId,
		/// Pointer position at the previous move.
		last: Point,
	},
}

/// What the canvas is doing, as shown by its cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CanvasMode {
	/// Nothing armed or in progress.
	Idle,
	/// The next click places the selected tool.
	ToolArmed,
	/// A pan is in progress.
	Panning,
	/// A node is being dragged.
	DraggingNode,
}

/// What a submitted prompt did to the diagram.
#[derive(Clone, Debug, PartialEq)]
pub struct PromptOutcome {
	/// Name of the matched layout.
	pub rule: &'static str,
	/// Number of nodes appended.
	pub added: usize,
	/// Assistant message for the transcript.
	pub reply: String,
}

/// Diagram plus interaction state of one editor session.
#[derive(Clone, Debug)]
pub struct EditorState {
	diagram: DiagramState,
	selected_tool: Option<Tool>,
	selected_node: Option<NodeId>,
	gesture: Gesture,
	/// Set when a press started a pan or a node drag, so the click that ends
	/// it neither places a tool nor clears the selection.
	swallow_click: bool,
	ids: NodeIds,
}

impl Default for EditorState {
	fn default() -> Self {
		Self::new(DiagramState::seeded())
	}
}

impl EditorState {
	/// A session over `diagram` with nothing selected.
	pub fn new(diagram: DiagramState) -> Self {
		Self {
			diagram,
			selected_tool: None,
			selected_node: None,
			gesture: Gesture::Idle,
			swallow_click: false,
			ids: NodeIds::default(),
		}
	}

	/// The diagram as last mutated.
	pub fn diagram(&self) -> &DiagramState {
		&self.diagram
	}

	/// Current zoom and pan.
	pub fn view(&self) -> ViewTransform {
		self.diagram.view
	}

	/// The armed tool, if any.
	pub fn selected_tool(&self) -> Option<&Tool> {
		self.selected_tool.as_ref()
	}

	/// The selected node, if any.
	pub fn selected_node(&self) -> Option<&NodeId> {
		self.selected_node.as_ref()
	}

	/// Gesture in progress.
	pub fn gesture(&self) -> &Gesture {
		&self.gesture
	}

	/// Summary of the selection and gesture for the cursor affordance.
	pub fn mode(&self) -> CanvasMode {
		match self.gesture {
			Gesture::Panning { .. } => CanvasMode::Panning,
			Gesture::DraggingNode { .. } => CanvasMode::DraggingNode,
			Gesture::Idle if self.selected_tool.is_some() => CanvasMode::ToolArmed,
			Gesture::Idle => CanvasMode::Idle,
		}
	}

	// Mutation API

	/// Appends a node and disarms the selected tool.
	pub fn add_node(&mut self, node: Node) {
		debug!("adding node {} ({})", node.id, node.kind);
		self.diagram.nodes.push(node);
		self.selected_tool = None;
	}

	/// Replaces the node with the same id. Returns false, changing nothing, if
	/// no such node exists.
	pub fn update_node(&mut self, updated: Node) -> bool {
		let Some(slot) = self.diagram.nodes.iter_mut().find(|n| n.id == updated.id) else {
			return false;
		};
		*slot = updated;
		true
	}

	/// Appends a batch without touching the tool selection.
	pub fn bulk_add_nodes(&mut self, nodes: Vec<Node>) {
		if nodes.is_empty() {
			return;
		}
		self.diagram.nodes.extend(nodes);
	}

	/// Selecting (or clearing) a node disarms the selected tool.
	pub fn select_node(&mut self, id: Option<NodeId>) {
		self.selected_node = id;
		self.selected_tool = None;
	}

	/// Arming a tool clears the node selection.
	pub fn select_tool(&mut self, tool: Tool) {
		debug!("armed tool {}", tool.id);
		self.selected_tool = Some(tool);
		self.selected_node = None;
	}

	/// Callers clamp; see [`EditorState::zoom_by`].
	pub fn set_zoom(&mut self, zoom: f64) {
		self.diagram.view.zoom = zoom;
	}

	/// Sets the pan offset in screen pixels.
	pub fn set_pan(&mut self, pan: Point) {
		self.diagram.view.pan = pan;
	}

	/// Replaces the documentation markdown.
	pub fn set_documentation(&mut self, text: impl Into<String>) {
		self.diagram.documentation = text.into();
	}

	// Viewport

	/// Steps zoom by `delta`, clamped.
	pub fn zoom_by(&mut self, delta: f64) {
		let zoom = self.diagram.view.stepped_zoom(delta);
		self.set_zoom(zoom);
	}

	/// Toolbar zoom in.
	pub fn zoom_in(&mut self) {
		self.zoom_by(BUTTON_ZOOM_STEP);
	}

	/// Toolbar zoom out.
	pub fn zoom_out(&mut self) {
		self.zoom_by(-BUTTON_ZOOM_STEP);
	}

	/// Back to zoom 1 with no pan.
	pub fn reset_view(&mut self) {
		self.set_zoom(DEFAULT_ZOOM);
		self.set_pan(Point::ORIGIN);
	}

	/// Wheel zoom only applies while the modifier is held. Returns whether the
	/// event was consumed.
	pub fn wheel(&mut self, delta_y: f64, modifier: bool) -> bool {
		if !modifier {
			return false;
		}
		let zoom = self.diagram.view.wheel_zoom(delta_y);
		self.set_zoom(zoom);
		true
	}

	// Canvas interaction

	/// Creates a node from `tool` with its top-left at the logical point
	/// under `client`.
	pub fn place_tool(&mut self, tool: &Tool, client: Point, origin: Point) -> NodeId {
		let position = self.diagram.view.to_logical(client, origin);
		let id = self.ids.next_id();
		self.add_node(Node::from_tool(id.clone(), tool, position, PLACED_NODE_SIZE));
		id
	}

	/// Returns whether the press started a gesture.
	pub fn pointer_down(
		&mut self,
		client: Point,
		origin: Point,
		button: PointerButton,
		modifier: bool,
	) -> bool {
		self.swallow_click = false;
		let pan = button == PointerButton::Middle || (button == PointerButton::Primary && modifier);
		if pan {
			self.gesture = Gesture::Panning { last: client };
			self.swallow_click = true;
			return true;
		}
		if button != PointerButton::Primary {
			return false;
		}

		let logical = self.diagram.view.to_logical(client, origin);
		let Some(id) = self.diagram.node_at(logical).map(|n| n.id.clone()) else {
			return false;
		};
		self.select_node(Some(id.clone()));
		self.gesture = Gesture::DraggingNode { id, last: client };
		self.swallow_click = true;
		true
	}

	/// Returns whether anything moved.
	pub fn pointer_move(&mut self, client: Point) -> bool {
		match std::mem::take(&mut self.gesture) {
			Gesture::Idle => false,
			Gesture::Panning { last } => {
				let pan = self.diagram.view.pan + (client - last);
				self.set_pan(pan);
				self.gesture = Gesture::Panning { last: client };
				true
			}
			Gesture::DraggingNode { id, last } => {
				let delta = self.diagram.view.logical_delta(client - last);
				let moved = match self.diagram.node(&id) {
					Some(node) => {
						let mut node = node.clone();
						node.position = node.position + delta;
						self.update_node(node)
					}
					None => false,
				};
				self.gesture = Gesture::DraggingNode { id, last: client };
				moved
			}
		}
	}

	/// Ends any gesture; also used when the pointer leaves the canvas.
	pub fn pointer_up(&mut self) {
		self.gesture = Gesture::Idle;
	}

	/// A completed click on the canvas. Places the armed tool, or clears the
	/// selection when nothing is armed.
	pub fn canvas_click(&mut self, client: Point, origin: Point) -> Option<NodeId> {
		if std::mem::take(&mut self.swallow_click) {
			return None;
		}
		match self.selected_tool.clone() {
			Some(tool) => Some(self.place_tool(&tool, client, origin)),
			None => {
				if self.selected_node.is_some() {
					self.select_node(None);
				}
				None
			}
		}
	}

	/// Places a tool dragged in from the palette. Works whether or not a tool
	/// is armed.
	pub fn drop_tool(
		&mut self,
		raw: Option<&str>,
		client: Point,
		origin: Point,
	) -> Result<NodeId, PayloadError> {
		let tool = payload::decode_tool(raw)?;
		Ok(self.place_tool(&tool, client, origin))
	}

	// Assistant

	/// Runs the mock responder: appends its layout and replaces the
	/// documentation. Blank prompts change nothing and return `None`.
	pub fn apply_prompt(&mut self, prompt: &str) -> Option<PromptOutcome> {
		if prompt.trim().is_empty() {
			return None;
		}
		let blueprint = responder::respond(prompt);
		let nodes = blueprint.instantiate(&mut self.ids);
		let added = nodes.len();
		debug!("prompt matched {} rule, adding {added} nodes", blueprint.rule.name);
		self.bulk_add_nodes(nodes);
		self.set_documentation(blueprint.documentation());
		Some(PromptOutcome {
			rule: blueprint.rule.name,
			added,
			reply: chat::describe(prompt, &blueprint, added),
		})
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::components::diagram::transform::{MAX_ZOOM, MIN_ZOOM};
	use crate::components::palette::catalog;

	const ORIGIN: Point = Point::new(300.0, 64.0);

	fn tool(id: &str) -> Tool {
		catalog::find(id).unwrap().clone()
	}

	fn empty() -> EditorState {
		EditorState::new(DiagramState::default())
	}

	fn with_nodes(n: usize) -> EditorState {
		let mut state = empty();
		for i in 0..n {
			state.select_tool(tool("rectangle"));
			state.canvas_click(ORIGIN + Point::new(200.0 * i as f64, 0.0), ORIGIN);
		}
		state
	}

	#[test]
	fn add_node_appends_and_disarms() {
		let mut state = with_nodes(2);
		let before = state.diagram().nodes.clone();
		state.select_tool(tool("circle"));

		let id = state.place_tool(&tool("circle"), ORIGIN, ORIGIN);

		let nodes = &state.diagram().nodes;
		assert_eq!(nodes.len(), 3);
		assert_eq!(&nodes[..2], &before[..]);
		assert_eq!(nodes[2].id, id);
		assert!(state.selected_tool().is_none());
	}

	#[test]
	fn update_of_unknown_id_changes_nothing() {
		let mut state = with_nodes(2);
		let before = state.diagram().nodes.clone();

		let mut ghost = before[0].clone();
		ghost.id = NodeId::new("ghost");
		ghost.position = Point::new(1.0, 1.0);

		assert!(!state.update_node(ghost));
		assert_eq!(state.diagram().nodes, before);
	}

	#[test]
	fn update_replaces_by_id() {
		let mut state = with_nodes(2);
		let mut moved = state.diagram().nodes[1].clone();
		moved.label = "Renamed".into();
		assert!(state.update_node(moved.clone()));
		assert_eq!(state.diagram().nodes[1], moved);
		assert_eq!(state.diagram().nodes.len(), 2);
	}

	#[test]
	fn tool_and_node_selection_are_exclusive() {
		let mut state = with_nodes(1);
		let id = state.diagram().nodes[0].id.clone();

		state.select_tool(tool("pod"));
		assert!(state.selected_node().is_none());
		assert_eq!(state.mode(), CanvasMode::ToolArmed);

		state.select_node(Some(id.clone()));
		assert!(state.selected_tool().is_none());
		assert_eq!(state.selected_node(), Some(&id));

		state.select_tool(tool("pod"));
		assert!(state.selected_node().is_none());
	}

	#[test]
	fn bulk_add_keeps_tool_armed() {
		let mut state = empty();
		state.select_tool(tool("cdn"));
		state.apply_prompt("hello");
		assert_eq!(state.diagram().nodes.len(), 6);
		assert!(state.selected_tool().is_some());
	}

	#[test]
	fn armed_click_places_under_cursor_at_any_zoom() {
		let mut state = empty();
		state.set_zoom(2.0);
		state.set_pan(Point::new(40.0, -20.0));
		state.select_tool(tool("diamond"));

		let id = state.canvas_click(ORIGIN + Point::new(140.0, 80.0), ORIGIN).unwrap();

		let node = state.diagram().node(&id).unwrap();
		assert_eq!(node.position, Point::new(50.0, 50.0));
		assert_eq!(node.size, PLACED_NODE_SIZE);
		assert_eq!(node.kind, "diamond");
		assert_eq!(node.label, "Diamond");
		assert_eq!(state.mode(), CanvasMode::Idle);
	}

	#[test]
	fn unarmed_click_clears_selection() {
		let mut state = with_nodes(1);
		let id = state.diagram().nodes[0].id.clone();
		state.select_node(Some(id));
		assert_eq!(state.canvas_click(ORIGIN + Point::new(900.0, 900.0), ORIGIN), None);
		assert!(state.selected_node().is_none());
		assert_eq!(state.diagram().nodes.len(), 1);
	}

	#[test]
	fn zoom_buttons_and_wheel_clamp() {
		let mut state = empty();
		for _ in 0..50 {
			state.zoom_in();
		}
		assert_eq!(state.view().zoom, MAX_ZOOM);
		for _ in 0..50 {
			assert!(state.wheel(100.0, true));
		}
		assert_eq!(state.view().zoom, MIN_ZOOM);

		let zoom = state.view().zoom;
		assert!(!state.wheel(-100.0, false));
		assert_eq!(state.view().zoom, zoom);
	}

	#[test]
	fn reset_restores_default_view() {
		let mut state = empty();
		state.zoom_out();
		state.set_pan(Point::new(-300.0, 12.0));
		state.reset_view();
		assert_eq!(state.view(), ViewTransform::default());
	}

	#[test]
	fn panning_moves_at_screen_speed() {
		let mut state = empty();
		state.set_zoom(2.5);
		let start = ORIGIN + Point::new(10.0, 10.0);

		assert!(state.pointer_down(start, ORIGIN, PointerButton::Middle, false));
		assert_eq!(state.mode(), CanvasMode::Panning);
		state.pointer_move(start + Point::new(30.0, -5.0));
		state.pointer_move(start + Point::new(50.0, 5.0));
		state.pointer_up();

		assert_eq!(state.view().pan, Point::new(50.0, 5.0));
		assert_eq!(state.mode(), CanvasMode::Idle);
	}

	#[test]
	fn modifier_primary_pans_and_swallows_click() {
		let mut state = empty();
		state.select_tool(tool("rectangle"));
		let start = ORIGIN + Point::new(10.0, 10.0);

		assert!(state.pointer_down(start, ORIGIN, PointerButton::Primary, true));
		state.pointer_move(start + Point::new(5.0, 5.0));
		state.pointer_up();

		assert_eq!(state.canvas_click(start + Point::new(5.0, 5.0), ORIGIN), None);
		assert!(state.diagram().nodes.is_empty());
		assert_eq!(state.mode(), CanvasMode::ToolArmed);
	}

	#[test]
	fn dragging_divides_delta_by_zoom() {
		let mut state = with_nodes(1);
		state.set_zoom(0.5);
		let node = state.diagram().nodes[0].clone();
		let grab = state.view().to_screen(node.position + Point::new(5.0, 5.0), ORIGIN);

		assert!(state.pointer_down(grab, ORIGIN, PointerButton::Primary, false));
		assert_eq!(state.mode(), CanvasMode::DraggingNode);
		assert_eq!(state.selected_node(), Some(&node.id));

		assert!(state.pointer_move(grab + Point::new(10.0, 20.0)));
		state.pointer_up();
		assert_eq!(state.canvas_click(grab + Point::new(10.0, 20.0), ORIGIN), None);

		let moved = state.diagram().node(&node.id).unwrap();
		assert_eq!(moved.position, node.position + Point::new(20.0, 40.0));
		assert_eq!(state.selected_node(), Some(&node.id));
	}

	#[test]
	fn press_on_empty_canvas_starts_nothing() {
		let mut state = with_nodes(1);
		assert!(!state.pointer_down(ORIGIN + Point::new(900.0, 900.0), ORIGIN, PointerButton::Primary, false));
		assert!(!state.pointer_move(ORIGIN));
		assert!(!state.pointer_down(ORIGIN, ORIGIN, PointerButton::Other, false));
	}

	#[test]
	fn drop_places_without_armed_tool() {
		let mut state = empty();
		state.set_pan(Point::new(100.0, 0.0));
		let raw = payload::encode_tool(&tool("auth")).unwrap();

		let id = state
			.drop_tool(Some(&raw), ORIGIN + Point::new(150.0, 30.0), ORIGIN)
			.unwrap();

		let node = state.diagram().node(&id).unwrap();
		assert_eq!(node.position, Point::new(50.0, 30.0));
		assert_eq!(node.label, "Auth");
	}

	#[test]
	fn malformed_drop_leaves_nodes_unchanged() {
		let mut state = with_nodes(2);
		let before = state.diagram().nodes.clone();
		assert!(state.drop_tool(Some("{oops"), ORIGIN, ORIGIN).is_err());
		assert!(state.drop_tool(None, ORIGIN, ORIGIN).is_err());
		assert_eq!(state.diagram().nodes, before);
	}

	#[test]
	fn prompt_replaces_documentation_and_appends_layout() {
		let mut state = with_nodes(1);
		let outcome = state.apply_prompt("Design a scalable e-commerce infrastructure").unwrap();

		assert_eq!(outcome.rule, "e-commerce");
		assert_eq!(outcome.added, 9);
		assert_eq!(state.diagram().nodes.len(), 10);
		assert!(
			state
				.diagram()
				.documentation
				.starts_with("# E-commerce Infrastructure Architecture")
		);
	}

	#[test]
	fn blank_prompt_changes_nothing() {
		let mut state = with_nodes(1);
		state.select_tool(tool("cdn"));
		let before = state.diagram().clone();

		for prompt in ["", "   ", " \n\t "] {
			assert_eq!(state.apply_prompt(prompt), None);
		}
		assert_eq!(state.diagram(), &before);
		assert!(state.selected_tool().is_some());
	}

	#[test]
	fn ids_never_repeat_across_placements_and_batches() {
		let mut state = with_nodes(3);
		state.apply_prompt("k8s");
		state.place_tool(&tool("pod"), ORIGIN, ORIGIN);

		let mut ids: Vec<&str> = state.diagram().nodes.iter().map(|n| n.id.as_str()).collect();
		let total = ids.len();
		ids.sort_unstable();
		ids.dedup();
		assert_eq!(ids.len(), total);
	}
}
