//! Keyword-driven "assistant" that turns a prompt into a canned layout and
//! documentation. Rules are tried in order and the first match wins; the last
//! rule has no keywords and always matches.

use log::warn;

use crate::components::diagram::ids::NodeIds;
use crate::components::diagram::types::{Node, Point, Size};
use crate::components::palette::catalog::{self, Tool};

/// Default size of nodes produced by the responder.
pub const RESPONDER_NODE_SIZE: Size = Size::new(140.0, 70.0);

/// One node of a canned layout, referring to a catalog tool by id.
#[derive(Debug)]
pub struct Placement {
	pub tool_id: &'static str,
	pub label: &'static str,
	pub position: Point,
}

const fn at(tool_id: &'static str, label: &'static str, x: f64, y: f64) -> Placement {
	Placement {
		tool_id,
		label,
		position: Point::new(x, y),
	}
}

#[derive(Debug)]
pub struct Rule {
	pub name: &'static str,
	/// Lower-case substrings, any of which selects this rule.
	pub keywords: &'static [&'static str],
	pub placements: &'static [Placement],
	pub documentation: &'static str,
}

impl Rule {
	fn matches(&self, lowered: &str) -> bool {
		self.keywords.is_empty() || self.keywords.iter().any(|k| lowered.contains(k))
	}
}

/// The layout picked for a prompt, with its tools already resolved.
#[derive(Debug)]
pub struct Blueprint {
	pub rule: &'static Rule,
	pub placements: Vec<(&'static Tool, &'static Placement)>,
}

impl Blueprint {
	pub fn documentation(&self) -> &'static str {
		self.rule.documentation
	}

	pub fn instantiate(&self, ids: &mut NodeIds) -> Vec<Node> {
		self.placements
			.iter()
			.map(|(tool, p)| {
				Node::labelled(
					ids.next_id(),
					tool,
					p.label.to_owned(),
					p.position,
					RESPONDER_NODE_SIZE,
				)
			})
			.collect()
	}
}

pub fn match_rule(prompt: &str) -> &'static Rule {
	let lowered = prompt.to_lowercase();
	RULES
		.iter()
		.find(|r| r.matches(&lowered))
		.unwrap_or(&RULES[RULES.len() - 1])
}

pub fn respond(prompt: &str) -> Blueprint {
	let rule = match_rule(prompt);
	Blueprint {
		rule,
		placements: resolve(rule.placements),
	}
}

/// Looks each placement's tool up in the catalog, dropping unknown ids.
pub fn resolve<'a>(placements: &'a [Placement]) -> Vec<(&'static Tool, &'a Placement)> {
	placements
		.iter()
		.filter_map(|p| match catalog::find(p.tool_id) {
			Some(tool) => Some((tool, p)),
			None => {
				warn!("responder layout names unknown tool {:?}; skipped", p.tool_id);
				None
			}
		})
		.collect()
}

pub static RULES: [Rule; 4] = [
	Rule {
		name: "e-commerce",
		keywords: &["e-commerce", "ecommerce"],
		placements: &ECOMMERCE,
		documentation: ECOMMERCE_DOC,
	},
	Rule {
		name: "microservices",
		keywords: &["microservices"],
		placements: &MICROSERVICES,
		documentation: MICROSERVICES_DOC,
	},
	Rule {
		name: "kubernetes",
		keywords: &["kubernetes", "k8s"],
		placements: &KUBERNETES,
		documentation: KUBERNETES_DOC,
	},
	Rule {
		name: "general",
		keywords: &[],
		placements: &GENERAL,
		documentation: GENERAL_DOC,
	},
];

static ECOMMERCE: [Placement; 9] = [
	at("cdn", "CDN", 100.0, 50.0),
	at("load-balancer", "Load Balancer", 350.0, 50.0),
	at("api-gateway", "API Gateway", 350.0, 170.0),
	at("aws-ec2", "Web Servers", 100.0, 170.0),
	at("service", "Order Service", 200.0, 300.0),
	at("aws-lambda", "Payment Service", 500.0, 300.0),
	at("entity", "User DB", 100.0, 430.0),
	at("entity", "Product DB", 350.0, 430.0),
	at("message-queue", "Message Queue", 600.0, 430.0),
];

static MICROSERVICES: [Placement; 7] = [
	at("api-gateway", "API Gateway", 350.0, 50.0),
	at("auth", "Auth Service", 100.0, 180.0),
	at("service", "User Service", 300.0, 180.0),
	at("service", "Product Service", 500.0, 180.0),
	at("service", "Order Service", 700.0, 180.0),
	at("message-queue", "Event Bus", 400.0, 320.0),
	at("entity", "Database", 400.0, 450.0),
];

static KUBERNETES: [Placement; 7] = [
	at("load-balancer", "Ingress", 350.0, 50.0),
	at("service", "Service", 350.0, 170.0),
	at("deployment", "Deployment", 350.0, 290.0),
	at("pod", "Pod 1", 150.0, 410.0),
	at("pod", "Pod 2", 350.0, 410.0),
	at("pod", "Pod 3", 550.0, 410.0),
	at("gcp-storage", "Persistent Volume", 350.0, 530.0),
];

static GENERAL: [Placement; 6] = [
	at("actor", "Client", 100.0, 200.0),
	at("firewall", "Firewall", 300.0, 200.0),
	at("load-balancer", "Load Balancer", 500.0, 200.0),
	at("aws-ec2", "App Server", 700.0, 120.0),
	at("entity", "Database", 700.0, 300.0),
	at("aws-s3", "Object Storage", 900.0, 200.0),
];

const ECOMMERCE_DOC: &str = "# E-commerce Infrastructure Architecture

## Overview
A horizontally scalable storefront. Static assets are served from the edge and dynamic traffic is balanced across stateless web servers.

## Request Path
- **CDN** caches images, scripts and product pages close to shoppers
- **Load Balancer** spreads traffic across the web server pool
- **API Gateway** authenticates requests and routes them to backend services

## Services
- **Order Service**: cart checkout and order lifecycle
- **Payment Service**: payment authorization, isolated for compliance

## Data
- `User DB` stores accounts and addresses
- `Product DB` stores the catalog and inventory
- **Message Queue** decouples order placement from fulfilment and email

## Scaling Notes
- Web servers and services scale out behind the load balancer
- Read replicas absorb catalog browsing load
- Queue consumers scale independently during sales peaks";

const MICROSERVICES_DOC: &str = "# Microservices Architecture

## Overview
Independently deployable services behind a single gateway, communicating through an event bus.

## Components
- **API Gateway**: single entry point, routing and rate limiting
- **Auth Service**: issues and validates *JWT* tokens
- **User Service**, **Product Service**, **Order Service**: one bounded context each

## Communication
- Synchronous calls go through the gateway
- Domain events are published to the `Event Bus`

## Data
- Each service owns its schema; shared reads go through service APIs

## Operations
- Health checks per service
- Distributed tracing across service calls";

const KUBERNETES_DOC: &str = "# Kubernetes Deployment Architecture

## Overview
A containerized workload exposed through an ingress and kept at its desired replica count by a deployment.

## Resources
- **Ingress**: terminates TLS and routes external traffic
- **Service**: stable virtual IP load balancing across pods
- **Deployment**: declares the replica count and rollout strategy
- **Pods**: three replicas of the application container
- **Persistent Volume**: durable storage mounted by the pods

## Operations
- Rolling updates with `maxUnavailable: 1`
- Horizontal Pod Autoscaler on CPU utilization
- Liveness and readiness probes on every container";

const GENERAL_DOC: &str = "# System Architecture

## Overview
A classic three-tier layout: clients reach application servers through a firewall and load balancer, and state lives in a database and object storage.

## Components
- **Client**: browser or mobile application
- **Firewall**: filters inbound traffic
- **Load Balancer**: distributes requests across app servers
- **App Server**: business logic
- **Database**: transactional data
- **Object Storage**: files and backups

## Next Steps
- Name the concrete services behind the app server
- Describe the data flow between components
- Add *security* and *scaling* considerations";

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn labels(blueprint: &Blueprint) -> Vec<&'static str> {
		blueprint.placements.iter().map(|(_, p)| p.label).collect()
	}

	#[test]
	fn ecommerce_prompt_yields_nine_nodes() {
		let blueprint = respond("Design a scalable e-commerce infrastructure");
		assert_eq!(blueprint.rule.name, "e-commerce");
		assert_eq!(
			labels(&blueprint),
			vec![
				"CDN",
				"Load Balancer",
				"API Gateway",
				"Web Servers",
				"Order Service",
				"Payment Service",
				"User DB",
				"Product DB",
				"Message Queue",
			]
		);
		assert!(
			blueprint
				.documentation()
				.starts_with("# E-commerce Infrastructure Architecture\n")
		);
	}

	#[test]
	fn microservices_prompt_yields_seven_nodes() {
		let blueprint = respond("Create a microservices architecture");
		assert_eq!(blueprint.rule.name, "microservices");
		assert_eq!(blueprint.placements.len(), 7);
	}

	#[test]
	fn unknown_prompt_falls_back_to_general() {
		let blueprint = respond("hello");
		assert_eq!(blueprint.rule.name, "general");
		assert_eq!(blueprint.placements.len(), 6);
	}

	#[test]
	fn matching_is_case_insensitive_and_ordered() {
		assert_eq!(match_rule("ECOMMERCE on K8S").name, "e-commerce");
		assert_eq!(match_rule("Kubernetes microservices").name, "microservices");
		assert_eq!(match_rule("deploy to k8s").name, "kubernetes");
		assert_eq!(match_rule("").name, "general");
	}

	#[test]
	fn every_rule_resolves_fully() {
		for rule in &RULES {
			assert_eq!(resolve(rule.placements).len(), rule.placements.len(), "{}", rule.name);
		}
	}

	#[test]
	fn unknown_tools_are_dropped() {
		let placements = [
			at("cdn", "CDN", 0.0, 0.0),
			at("warp-drive", "Warp Drive", 10.0, 10.0),
			at("pod", "Pod", 20.0, 20.0),
		];
		let resolved = resolve(&placements);
		let ids: Vec<&str> = resolved.iter().map(|(t, _)| t.id.as_ref()).collect();
		assert_eq!(ids, vec!["cdn", "pod"]);
	}

	#[test]
	fn instantiated_nodes_use_responder_size_and_fresh_ids() {
		let mut ids = NodeIds::default();
		let nodes = respond("k8s").instantiate(&mut ids);
		assert_eq!(nodes.len(), 7);
		assert!(nodes.iter().all(|n| n.size == RESPONDER_NODE_SIZE));
		assert_eq!(nodes[0].label, "Ingress");
		assert_eq!(nodes[0].kind, "load-balancer");
		assert_eq!(nodes[0].position, Point::new(350.0, 50.0));
		assert_eq!(nodes[6].id.as_str(), "node-7");

		let again = respond("k8s").instantiate(&mut ids);
		assert_eq!(again[0].id.as_str(), "node-8");
	}
}
