use std::collections::HashMap;

use super::store::GraphStore;

/// Sizes used to place columns and cards, in CSS pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
	pub column_width: f64,
	pub column_gap: f64,
	pub header_height: f64,
	pub card_height: f64,
	pub card_gap: f64,
	pub padding: f64,
	/// Horizontal distance of each connector control point from its endpoint.
	pub connector_tension: f64,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			column_width: 220.0,
			column_gap: 90.0,
			header_height: 44.0,
			card_height: 68.0,
			card_gap: 14.0,
			padding: 32.0,
			connector_tension: 60.0,
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmphasisState {
	#[default]
	None,
	Selected,
	OnPath,
}

/// The on-screen counterpart of one role.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualNode {
	pub role_id: String,
	pub visible: bool,
	pub emphasis: EmphasisState,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

impl Rect {
	pub fn right(&self) -> f64 {
		self.x + self.width
	}

	pub fn bottom(&self) -> f64 {
		self.y + self.height
	}

	/// Midpoint of the left edge, where incoming connectors end.
	pub fn leading_mid(&self) -> Point {
		Point {
			x: self.x,
			y: self.y + self.height / 2.0,
		}
	}

	/// Midpoint of the right edge, where outgoing connectors start.
	pub fn trailing_mid(&self) -> Point {
		Point {
			x: self.right(),
			y: self.y + self.height / 2.0,
		}
	}

	pub fn contains(&self, x: f64, y: f64) -> bool {
		x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
	}
}

/// One visual node per role, keyed by role id, in declaration order.
#[derive(Clone, Debug, Default)]
pub struct NodeSet {
	nodes: Vec<VisualNode>,
	index: HashMap<String, usize>,
}

impl NodeSet {
	pub fn get(&self, id: &str) -> Option<&VisualNode> {
		self.index.get(id).and_then(|&i| self.nodes.get(i))
	}

	pub fn iter(&self) -> impl Iterator<Item = &VisualNode> {
		self.nodes.iter()
	}

	pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut VisualNode> {
		self.nodes.iter_mut()
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_visible(&self, id: &str) -> bool {
		self.get(id).is_some_and(|n| n.visible)
	}
}

/// A level column as placed on the content area.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
	pub name: String,
	pub header: Rect,
}

/// Placement of every visible column and card in content coordinates
/// (origin at the top-left of the scrollable content, before scrolling).
#[derive(Clone, Debug, Default)]
pub struct Geometry {
	pub columns: Vec<Column>,
	pub cards: HashMap<String, Rect>,
	pub width: f64,
	pub height: f64,
}

impl Geometry {
	pub fn card(&self, id: &str) -> Option<&Rect> {
		self.cards.get(id)
	}

	/// Role whose card contains the content-space point.
	pub fn card_at(&self, x: f64, y: f64) -> Option<&str> {
		self.cards
			.iter()
			.find(|(_, rect)| rect.contains(x, y))
			.map(|(id, _)| id.as_str())
	}
}

/// Create a fresh, fully visible node for every role in the store.
pub fn build(store: &GraphStore) -> NodeSet {
	let mut set = NodeSet::default();
	for role in store.all_roles() {
		set.index.insert(role.id.clone(), set.nodes.len());
		set.nodes.push(VisualNode {
			role_id: role.id.clone(),
			visible: true,
			emphasis: EmphasisState::None,
		});
	}
	set
}

/// Stack visible cards top-to-bottom inside one column per level.
///
/// Hidden cards take no space. With `collapse_empty`, a level with no
/// visible card is dropped from the horizontal flow entirely.
pub fn measure(
	store: &GraphStore,
	nodes: &NodeSet,
	config: &LayoutConfig,
	collapse_empty: bool,
) -> Geometry {
	let mut geometry = Geometry::default();
	let mut x = config.padding;
	let mut bottom = config.padding + config.header_height;

	for level in store.levels() {
		let visible: Vec<&str> = level
			.roles
			.iter()
			.map(|r| r.id.as_str())
			.filter(|id| nodes.is_visible(id))
			.collect();
		if collapse_empty && visible.is_empty() {
			continue;
		}

		let header = Rect {
			x,
			y: config.padding,
			width: config.column_width,
			height: config.header_height,
		};
		let mut y = header.bottom() + config.card_gap;
		for id in visible {
			let card = Rect {
				x,
				y,
				width: config.column_width,
				height: config.card_height,
			};
			y = card.bottom() + config.card_gap;
			bottom = bottom.max(card.bottom());
			geometry.cards.insert(id.to_string(), card);
		}

		geometry.columns.push(Column {
			name: level.name.clone(),
			header,
		});
		x += config.column_width + config.column_gap;
	}

	geometry.width = if geometry.columns.is_empty() {
		config.padding * 2.0
	} else {
		x - config.column_gap + config.padding
	};
	geometry.height = bottom + config.padding;
	geometry
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::career_map::store::tests::sample_store;

	#[test]
	fn builds_one_visible_node_per_role() {
		let store = sample_store();
		let nodes = build(&store);
		assert_eq!(nodes.len(), store.role_count());
		assert!(nodes.iter().all(|n| n.visible && n.emphasis == EmphasisState::None));
		assert!(nodes.get("csr_ii").is_some());
		assert!(nodes.get("ghost").is_none());
	}

	#[test]
	fn build_is_deterministic() {
		let store = sample_store();
		let ids = |set: &NodeSet| set.iter().map(|n| n.role_id.clone()).collect::<Vec<_>>();
		assert_eq!(ids(&build(&store)), ids(&build(&store)));
	}

	#[test]
	fn cards_stack_in_declaration_order() {
		let store = sample_store();
		let config = LayoutConfig::default();
		let geometry = measure(&store, &build(&store), &config, false);

		assert_eq!(geometry.columns.len(), 5);
		let office = geometry.card("office_asst").unwrap();
		let csr = geometry.card("csr_i").unwrap();
		let cro = geometry.card("cust_relations_officer_i").unwrap();
		assert_eq!(office.x, csr.x);
		assert!(office.y < csr.y && csr.y < cro.y);
		assert_eq!(csr.y - office.y, config.card_height + config.card_gap);

		let entry = geometry.card("telephone_op").unwrap();
		assert_eq!(office.x - entry.x, config.column_width + config.column_gap);
	}

	#[test]
	fn hidden_cards_take_no_space() {
		let store = sample_store();
		let config = LayoutConfig::default();
		let mut nodes = build(&store);
		for node in nodes.iter_mut() {
			node.visible = node.role_id == "csr_i" || node.role_id == "csr_ii";
		}

		let geometry = measure(&store, &nodes, &config, true);
		assert_eq!(geometry.cards.len(), 2);
		assert_eq!(
			geometry.columns.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
			vec!["Level 1", "Level 2"]
		);
		let csr = geometry.card("csr_i").unwrap();
		assert_eq!(csr.x, config.padding);
		assert_eq!(csr.y, config.padding + config.header_height + config.card_gap);

		let kept = measure(&store, &nodes, &config, false);
		assert_eq!(kept.columns.len(), 5);
	}

	#[test]
	fn card_hit_testing() {
		let store = sample_store();
		let geometry = measure(&store, &build(&store), &LayoutConfig::default(), false);
		let rect = *geometry.card("csr_ii").unwrap();
		assert_eq!(geometry.card_at(rect.x + 1.0, rect.y + 1.0), Some("csr_ii"));
		assert_eq!(geometry.card_at(0.0, 0.0), None);
	}

	#[test]
	fn empty_store_has_padded_extent() {
		let store = GraphStore::default();
		let config = LayoutConfig::default();
		let geometry = measure(&store, &build(&store), &config, true);
		assert!(geometry.columns.is_empty());
		assert_eq!(geometry.width, config.padding * 2.0);
	}
}
