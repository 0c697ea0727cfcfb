//! Plain data making up a diagram, in logical canvas units.

use std::fmt;
use std::ops::{Add, Sub};

use crate::components::palette::catalog::{Tool, ToolCategory};

/// Alpha suffix appended to a tool's hex color to derive a node's fill tint.
pub const FILL_ALPHA_SUFFIX: &str = "20";
/// Label color of styled nodes.
pub const NODE_TEXT_COLOR: &str = "#ffffff";

/// A 2D position or offset, in screen pixels or logical units depending on
/// context.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal coordinate, growing rightwards.
	pub x: f64,
	/// Vertical coordinate, growing downwards.
	pub y: f64,
}

impl Point {
	/// `(0, 0)`.
	pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

	/// The point `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Both coordinates multiplied by `k`.
	pub fn scaled(self, k: f64) -> Self {
		Self::new(self.x * k, self.y * k)
	}
}

impl Add for Point {
	type Output = Point;

	fn add(self, rhs: Point) -> Point {
		Point::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl Sub for Point {
	type Output = Point;

	fn sub(self, rhs: Point) -> Point {
		Point::new(self.x - rhs.x, self.y - rhs.y)
	}
}

/// Node extent in logical units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
	/// Horizontal extent.
	pub width: f64,
	/// Vertical extent.
	pub height: f64,
}

impl Size {
	/// A `width` by `height` box.
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}
}

/// Identifier of a node, unique within a session.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
	/// Wraps an id string.
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	/// The raw id.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Colors a node is drawn with.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeStyle {
	/// Fill, usually translucent.
	pub background: String,
	/// Outline, the tool color itself.
	pub border: String,
	/// Label color.
	pub text: String,
}

impl NodeStyle {
	/// Border in the tool's color, a translucent tint of it as fill, white text.
	pub fn from_color(color: &str) -> Self {
		Self {
			background: format!("{color}{FILL_ALPHA_SUFFIX}"),
			border: color.to_owned(),
			text: NODE_TEXT_COLOR.to_owned(),
		}
	}
}

/// A placed instance of a tool. Position and size are in logical canvas units.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	/// Unique within the session.
	pub id: NodeId,
	/// Id of the tool this node was created from.
	pub kind: String,
	/// Category of the source tool.
	pub category: ToolCategory,
	/// Top-left corner.
	pub position: Point,
	/// Box extent.
	pub size: Size,
	/// Text drawn under the icon.
	pub label: String,
	/// Unstyled nodes fall back to neutral colors.
	pub style: Option<NodeStyle>,
}

impl Node {
	/// A node labelled with the tool's name.
	pub fn from_tool(id: NodeId, tool: &Tool, position: Point, size: Size) -> Self {
		Self::labelled(id, tool, tool.name.to_string(), position, size)
	}

	/// A node with a custom label, styled from the tool's color.
	pub fn labelled(id: NodeId, tool: &Tool, label: String, position: Point, size: Size) -> Self {
		Self {
			id,
			kind: tool.id.to_string(),
			category: tool.category,
			position,
			size,
			label,
			style: Some(NodeStyle::from_color(&tool.color)),
		}
	}

	/// Center of the node's box.
	pub fn center(&self) -> Point {
		Point::new(
			self.position.x + self.size.width / 2.0,
			self.position.y + self.size.height / 2.0,
		)
	}

	/// Whether `p` lies inside the node's box, edges included.
	pub fn contains(&self, p: Point) -> bool {
		p.x >= self.position.x
			&& p.x <= self.position.x + self.size.width
			&& p.y >= self.position.y
			&& p.y <= self.position.y + self.size.height
	}
}

/// How a connection is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionKind {
	/// Arrow head at the target.
	Arrow,
	/// Plain line.
	Line,
}

/// A directed link between two nodes. Links to missing nodes are not drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
	/// Unique within the session.
	pub id: String,
	/// Node the line starts from.
	pub source: NodeId,
	/// Node the arrow points at.
	pub target: NodeId,
	/// Arrow or plain line.
	pub kind: ConnectionKind,
}

/// Declared for annotations; nothing in the editor creates these yet.
#[derive(Clone, Debug, PartialEq)]
#[allow(missing_docs)]
pub struct Comment {
	pub id: String,
	pub node_id: Option<NodeId>,
	pub position: Point,
	pub author: String,
	pub content: String,
	/// Milliseconds since the Unix epoch.
	pub timestamp: f64,
	pub mentions: Vec<String>,
}

/// A presence marker for another participant.
#[derive(Clone, Debug, PartialEq)]
#[allow(missing_docs)]
pub struct Cursor {
	pub id: String,
	pub user: String,
	pub position: Point,
	pub color: String,
}

/// Zoom scale and pan offset of the canvas viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
	/// Scale factor, within `[MIN_ZOOM, MAX_ZOOM]` when set by the editor.
	pub zoom: f64,
	/// Screen offset in pixels.
	pub pan: Point,
}

/// The diagram owned by one editing session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiagramState {
	/// In draw order; later nodes sit on top.
	pub nodes: Vec<Node>,
	#[allow(missing_docs)]
	pub connections: Vec<Connection>,
	#[allow(missing_docs)]
	pub comments: Vec<Comment>,
	/// Other participants' pointers.
	pub cursors: Vec<Cursor>,
	/// Markdown source of the documentation panel.
	pub documentation: String,
	#[allow(missing_docs)]
	pub view: ViewTransform,
}

impl DiagramState {
	/// The state an editor session starts from.
	pub fn seeded() -> Self {
		Self {
			cursors: vec![
				Cursor {
					id: "1".into(),
					user: "John Doe".into(),
					position: Point::new(400.0, 200.0),
					color: "#3B82F6".into(),
				},
				Cursor {
					id: "2".into(),
					user: "Jane Smith".into(),
					position: Point::new(600.0, 350.0),
					color: "#10B981".into(),
				},
			],
			documentation: SEED_DOCUMENTATION.to_owned(),
			..Self::default()
		}
	}

	/// Looks a node up by id.
	pub fn node(&self, id: &NodeId) -> Option<&Node> {
		self.nodes.iter().find(|n| &n.id == id)
	}

	/// Topmost node under a logical point.
	pub fn node_at(&self, p: Point) -> Option<&Node> {
		self.nodes.iter().rev().find(|n| n.contains(p))
	}

	/// Connections whose endpoints both exist, paired with those endpoints.
	pub fn resolved_connections(&self) -> impl Iterator<Item = (&Connection, &Node, &Node)> {
		self.connections.iter().filter_map(|c| {
			let source = self.node(&c.source)?;
			let target = self.node(&c.target)?;
			Some((c, source, target))
		})
	}
}

const SEED_DOCUMENTATION: &str = "# System Architecture Documentation

## Overview
This document describes the high-level architecture of our system.

## Components

### API Gateway
- Central entry point for all client requests
- Handles authentication and routing
- Rate limiting and monitoring

### Microservices
- User Service: Manages user accounts and profiles
- Product Service: Handles product catalog and inventory
- Order Service: Processes orders and payments

### Database Layer
- PostgreSQL for transactional data
- Redis for caching and sessions
- MongoDB for analytics data

## Security Considerations
- OAuth 2.0 for authentication
- JWT tokens for session management
- API rate limiting
- Input validation and sanitization";
