use super::types::NodeId;

/// Mints node ids from a per-session counter, so placements made within the
/// same millisecond (or in one responder batch) never collide.
#[derive(Clone, Debug, Default)]
pub struct NodeIds {
	last: u64,
}

impl NodeIds {
	pub fn next_id(&mut self) -> NodeId {
		self.last += 1;
		NodeId::new(format!("node-{}", self.last))
	}
}
