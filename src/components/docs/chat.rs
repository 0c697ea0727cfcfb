use crate::components::diagram::state::{EditorState, PromptOutcome};
use crate::components::docs::responder::Blueprint;

pub const GREETING: &str = "👋 Hi! I can help you generate diagrams and documentation. Try asking me to \"Generate a scalable e-commerce architecture\" or \"Create documentation for a microservices setup\".";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
	User,
	Assistant,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
	pub id: u64,
	pub role: Role,
	pub content: String,
}

/// Append-only conversation log, rendered in insertion order.
#[derive(Clone, Debug, PartialEq)]
pub struct Transcript {
	messages: Vec<ChatMessage>,
}

impl Default for Transcript {
	fn default() -> Self {
		let mut transcript = Self {
			messages: Vec::new(),
		};
		transcript.push(Role::Assistant, GREETING);
		transcript
	}
}

impl Transcript {
	pub fn push(&mut self, role: Role, content: impl Into<String>) -> u64 {
		let id = self.messages.len() as u64 + 1;
		self.messages.push(ChatMessage {
			id,
			role,
			content: content.into(),
		});
		id
	}

	pub fn messages(&self) -> &[ChatMessage] {
		&self.messages
	}

	/// Logs the prompt, applies it to the editor and logs the reply. A blank
	/// prompt is not logged and leaves the editor alone.
	pub fn converse(&mut self, state: &mut EditorState, prompt: &str) -> Option<PromptOutcome> {
		let outcome = state.apply_prompt(prompt)?;
		self.push(Role::User, prompt);
		self.push(Role::Assistant, outcome.reply.clone());
		Some(outcome)
	}
}

/// Assistant reply describing what a blueprint put on the canvas.
pub fn describe(prompt: &str, blueprint: &Blueprint, added: usize) -> String {
	let components = blueprint
		.placements
		.iter()
		.map(|(_, p)| p.label)
		.collect::<Vec<_>>()
		.join(", ");
	format!(
		"I'll help you with \"{}\". I added {added} components for a {} layout to the canvas ({components}) and replaced the documentation with a matching write-up.\n\nSwitch to the Preview tab to read it, or drag the nodes to refine the layout.",
		prompt.trim(),
		blueprint.rule.name,
	)
}
