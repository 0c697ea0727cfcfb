//! The fixed set of placeable tools, grouped by category.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Palette section a tool belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolCategory {
	/// Basic flowchart shapes.
	Flowcharts,
	/// Sequence diagram elements.
	Sequence,
	/// Entity-relationship elements.
	Erd,
	/// Org chart elements.
	Org,
	/// Cloud provider services.
	Cloud,
	/// Kubernetes resources.
	K8s,
	/// Network and infrastructure pieces.
	Infrastructure,
}

/// Categories expanded when the palette first mounts.
pub const DEFAULT_EXPANDED: [ToolCategory; 3] =
	[ToolCategory::Flowcharts, ToolCategory::Cloud, ToolCategory::K8s];

impl ToolCategory {
	/// Palette order.
	pub const ALL: [ToolCategory; 7] = [
		ToolCategory::Flowcharts,
		ToolCategory::Sequence,
		ToolCategory::Erd,
		ToolCategory::Org,
		ToolCategory::Cloud,
		ToolCategory::K8s,
		ToolCategory::Infrastructure,
	];

	/// Wire name, as used in drag payloads.
	pub fn key(self) -> &'static str {
		match self {
			ToolCategory::Flowcharts => "flowcharts",
			ToolCategory::Sequence => "sequence",
			ToolCategory::Erd => "erd",
			ToolCategory::Org => "org",
			ToolCategory::Cloud => "cloud",
			ToolCategory::K8s => "k8s",
			ToolCategory::Infrastructure => "infrastructure",
		}
	}

	/// Heading shown in the palette.
	pub fn title(self) -> &'static str {
		match self {
			ToolCategory::Flowcharts => "Flowcharts",
			ToolCategory::Sequence => "Sequence Diagrams",
			ToolCategory::Erd => "ERD",
			ToolCategory::Org => "Org Charts",
			ToolCategory::Cloud => "Cloud Architecture",
			ToolCategory::K8s => "Kubernetes",
			ToolCategory::Infrastructure => "Infrastructure",
		}
	}

	/// Tools in this category, in palette order.
	pub fn tools(self) -> &'static [Tool] {
		match self {
			ToolCategory::Flowcharts => &FLOWCHARTS,
			ToolCategory::Sequence => &SEQUENCE,
			ToolCategory::Erd => &ERD,
			ToolCategory::Org => &ORG,
			ToolCategory::Cloud => &CLOUD,
			ToolCategory::K8s => &K8S,
			ToolCategory::Infrastructure => &INFRASTRUCTURE,
		}
	}
}

/// A catalog entry. This is also the drag-and-drop payload, so fields are
/// `Cow` to allow both the static catalog and deserialized copies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
	/// Unique across the catalog.
	pub id: Cow<'static, str>,
	/// Display name, also the default node label.
	pub name: Cow<'static, str>,
	/// Section it is listed under.
	pub category: ToolCategory,
	/// Glyph drawn on the button and the node.
	pub icon: Cow<'static, str>,
	/// Hex color the node style derives from.
	pub color: Cow<'static, str>,
}

const fn tool(
	id: &'static str,
	name: &'static str,
	category: ToolCategory,
	icon: &'static str,
	color: &'static str,
) -> Tool {
	Tool {
		id: Cow::Borrowed(id),
		name: Cow::Borrowed(name),
		category,
		icon: Cow::Borrowed(icon),
		color: Cow::Borrowed(color),
	}
}

use ToolCategory::*;

static FLOWCHARTS: [Tool; 4] = [
	tool("rectangle", "Rectangle", Flowcharts, "▭", "#3B82F6"),
	tool("diamond", "Diamond", Flowcharts, "◇", "#10B981"),
	tool("circle", "Circle", Flowcharts, "○", "#F59E0B"),
	tool("arrow", "Arrow", Flowcharts, "→", "#6B7280"),
];

static SEQUENCE: [Tool; 5] = [
	tool("actor", "Actor", Sequence, "👤", "#8B5CF6"),
	tool("object", "Object", Sequence, "📦", "#06B6D4"),
	tool("message", "Message", Sequence, "💬", "#84CC16"),
	tool("loop", "Loop", Sequence, "🔄", "#F97316"),
	tool("condition", "Condition", Sequence, "❓", "#EF4444"),
];

static ERD: [Tool; 3] = [
	tool("entity", "Entity", Erd, "🏢", "#3B82F6"),
	tool("relationship", "Relationship", Erd, "🔗", "#10B981"),
	tool("attribute", "Attribute", Erd, "🏷️", "#F59E0B"),
];

static ORG: [Tool; 3] = [
	tool("employee", "Employee", Org, "👨‍💼", "#8B5CF6"),
	tool("department", "Department", Org, "🏛️", "#06B6D4"),
	tool("connector", "Connector", Org, "━", "#6B7280"),
];

static CLOUD: [Tool; 5] = [
	tool("aws-ec2", "AWS EC2", Cloud, "☁️", "#FF9900"),
	tool("aws-s3", "AWS S3", Cloud, "🪣", "#FF9900"),
	tool("aws-lambda", "AWS Lambda", Cloud, "λ", "#FF9900"),
	tool("azure-vm", "Azure VM", Cloud, "💻", "#0078D4"),
	tool("gcp-storage", "GCP Storage", Cloud, "🗄️", "#4285F4"),
];

static K8S: [Tool; 4] = [
	tool("pod", "Pod", K8s, "🏃", "#326CE5"),
	tool("deployment", "Deployment", K8s, "🚀", "#326CE5"),
	tool("service", "Service", K8s, "🔌", "#326CE5"),
	tool("api-gateway", "API Gateway", K8s, "🚪", "#10B981"),
];

static INFRASTRUCTURE: [Tool; 5] = [
	tool("load-balancer", "Load Balancer", Infrastructure, "⚖️", "#8B5CF6"),
	tool("cdn", "CDN", Infrastructure, "🌐", "#06B6D4"),
	tool("message-queue", "Message Queue", Infrastructure, "📬", "#84CC16"),
	tool("firewall", "Firewall", Infrastructure, "🛡️", "#EF4444"),
	tool("auth", "Auth", Infrastructure, "🔐", "#F59E0B"),
];

/// Every tool, category by category.
pub fn all_tools() -> impl Iterator<Item = &'static Tool> {
	ToolCategory::ALL.into_iter().flat_map(|c| c.tools().iter())
}

/// Looks a tool up by id.
pub fn find(id: &str) -> Option<&'static Tool> {
	all_tools().find(|t| t.id == id)
}
