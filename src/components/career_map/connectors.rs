use super::layout::{Geometry, NodeSet, Point};
use super::store::GraphStore;

/// A cubic curve drawn for one edge between two visible cards.
#[derive(Clone, Debug, PartialEq)]
pub struct Connector {
	pub from: String,
	pub to: String,
	pub start: Point,
	pub control1: Point,
	pub control2: Point,
	pub end: Point,
	pub emphasized: bool,
}

/// Rebuild the full connector list from current visibility and geometry.
///
/// Curves leave the source's right edge and enter the target's left edge
/// horizontally; control points sit a fixed `tension` away from each end.
pub fn route(
	store: &GraphStore,
	nodes: &NodeSet,
	geometry: &Geometry,
	tension: f64,
	emphasize: bool,
) -> Vec<Connector> {
	store
		.edges()
		.filter(|(from, to)| nodes.is_visible(from) && nodes.is_visible(to))
		.filter_map(|(from, to)| {
			let start = geometry.card(from)?.trailing_mid();
			let end = geometry.card(to)?.leading_mid();
			Some(Connector {
				from: from.to_string(),
				to: to.to_string(),
				start,
				control1: Point {
					x: start.x + tension,
					y: start.y,
				},
				control2: Point {
					x: end.x - tension,
					y: end.y,
				},
				end,
				emphasized: emphasize,
			})
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::career_map::layout::{LayoutConfig, build, measure};
	use crate::components::career_map::store::tests::sample_store;

	#[test]
	fn curves_attach_to_card_edges() {
		let store = sample_store();
		let nodes = build(&store);
		let geometry = measure(&store, &nodes, &LayoutConfig::default(), false);
		let connectors = route(&store, &nodes, &geometry, 60.0, false);

		let c = connectors.iter().find(|c| c.from == "csr_i" && c.to == "csr_ii").unwrap();
		let source = geometry.card("csr_i").unwrap();
		let target = geometry.card("csr_ii").unwrap();
		assert_eq!(c.start, source.trailing_mid());
		assert_eq!(c.end, target.leading_mid());
		assert_eq!(c.control1.y, c.start.y);
		assert_eq!(c.control2.y, c.end.y);
		assert_eq!(c.control1.x - c.start.x, 60.0);
		assert_eq!(c.end.x - c.control2.x, 60.0);
		assert!(!c.emphasized);
	}

	#[test]
	fn idle_draws_every_resolvable_edge_in_order() {
		let store = sample_store();
		let nodes = build(&store);
		let geometry = measure(&store, &nodes, &LayoutConfig::default(), false);
		let drawn: Vec<(String, String)> = route(&store, &nodes, &geometry, 60.0, false)
			.into_iter()
			.map(|c| (c.from, c.to))
			.collect();
		let expected: Vec<(String, String)> = store
			.edges()
			.map(|(a, b)| (a.to_string(), b.to_string()))
			.collect();
		assert_eq!(drawn, expected);
		assert!(drawn.iter().all(|(_, to)| to != "ghost"));
	}

	#[test]
	fn hidden_endpoint_drops_connector() {
		let store = sample_store();
		let mut nodes = build(&store);
		for node in nodes.iter_mut() {
			node.visible = node.role_id != "csr_ii";
		}
		let geometry = measure(&store, &nodes, &LayoutConfig::default(), false);
		let connectors = route(&store, &nodes, &geometry, 60.0, true);
		assert!(connectors.iter().all(|c| c.from != "csr_ii" && c.to != "csr_ii"));
		assert!(connectors.iter().all(|c| c.emphasized));
		assert!(connectors.iter().any(|c| c.from == "csr_iii"));
	}
}
