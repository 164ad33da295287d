use log::{debug, warn};

use super::connectors::{self, Connector};
use super::error::CareerMapError;
use super::layout::{self, EmphasisState, Geometry, LayoutConfig, NodeSet};
use super::reach::{self, FocusSet};
use super::store::GraphStore;
use super::types::{DetailsEvent, RoleDetails};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FocusState {
	#[default]
	Idle,
	Focused(String),
}

/// Everything drawn for one loaded data set.
///
/// Visibility changes only mark the session dirty; [`RenderSession::settle`]
/// then re-measures the layout and rebuilds the connectors from whatever the
/// node state is at that moment.
pub struct RenderSession {
	store: GraphStore,
	config: LayoutConfig,
	nodes: NodeSet,
	focus: FocusState,
	geometry: Geometry,
	connectors: Vec<Connector>,
	dirty: bool,
}

impl RenderSession {
	pub fn new(store: GraphStore, config: LayoutConfig) -> Self {
		let nodes = layout::build(&store);
		let mut session = Self {
			store,
			config,
			nodes,
			focus: FocusState::Idle,
			geometry: Geometry::default(),
			connectors: Vec::new(),
			dirty: false,
		};
		session.redraw();
		session
	}

	/// Replace the data set. All nodes and any focus from the old one are gone.
	pub fn load(&mut self, store: GraphStore) -> DetailsEvent {
		debug!("loading {} roles in {} levels", store.role_count(), store.levels().len());
		self.nodes = layout::build(&store);
		self.store = store;
		self.focus = FocusState::Idle;
		self.connectors.clear();
		self.dirty = true;
		DetailsEvent::Placeholder
	}

	/// Focus on `id`. An unknown id leaves the current state untouched.
	pub fn select_role(&mut self, id: &str) -> Option<DetailsEvent> {
		let Some(focus) = reach::compute_focus(&self.store, id) else {
			warn!("{}", CareerMapError::UnknownSelection(id.to_string()));
			return None;
		};
		debug!("focus on `{id}`: {} roles on path", focus.members.len());
		self.apply(Some(&focus));
		self.focus = FocusState::Focused(focus.selected);
		self.dirty = true;
		self.details(id).map(DetailsEvent::Selected)
	}

	pub fn clear_focus(&mut self) -> DetailsEvent {
		if self.focus != FocusState::Idle {
			debug!("focus cleared");
		}
		self.apply(None);
		self.focus = FocusState::Idle;
		self.dirty = true;
		DetailsEvent::Placeholder
	}

	/// Viewport changed size; connectors need re-measuring.
	pub fn resize(&mut self) {
		self.dirty = true;
	}

	/// Run a pending redraw. Returns whether one ran.
	pub fn settle(&mut self) -> bool {
		if !self.dirty {
			return false;
		}
		self.redraw();
		true
	}

	/// Measure the layout and rebuild every connector from scratch.
	pub fn redraw(&mut self) {
		let focused = self.is_focused();
		self.geometry = layout::measure(&self.store, &self.nodes, &self.config, focused);
		self.connectors = connectors::route(
			&self.store,
			&self.nodes,
			&self.geometry,
			self.config.connector_tension,
			focused,
		);
		self.dirty = false;
		debug!(
			"redraw: {}/{} cards, {} connectors",
			self.geometry.cards.len(),
			self.nodes.len(),
			self.connectors.len()
		);
	}

	fn apply(&mut self, focus: Option<&FocusSet>) {
		for node in self.nodes.iter_mut() {
			(node.visible, node.emphasis) = match focus {
				None => (true, EmphasisState::None),
				Some(f) if f.selected == node.role_id => (true, EmphasisState::Selected),
				Some(f) if f.contains(&node.role_id) => (true, EmphasisState::OnPath),
				Some(_) => (false, EmphasisState::None),
			};
		}
	}

	fn details(&self, id: &str) -> Option<RoleDetails> {
		let role = self.store.lookup(id)?;
		let level = self
			.store
			.level_of(id)
			.and_then(|li| self.store.levels().get(li))
			.map(|l| l.name.clone())
			.unwrap_or_default();
		Some(RoleDetails {
			title: role.title.clone(),
			department: role.department.clone(),
			level,
			description: role.description.clone(),
			requirements: role.requirements.clone().filter(|r| !r.trim().is_empty()),
		})
	}

	pub fn is_focused(&self) -> bool {
		matches!(self.focus, FocusState::Focused(_))
	}

	pub fn store(&self) -> &GraphStore {
		&self.store
	}

	pub fn nodes(&self) -> &NodeSet {
		&self.nodes
	}

	pub fn geometry(&self) -> &Geometry {
		&self.geometry
	}

	pub fn connectors(&self) -> &[Connector] {
		&self.connectors
	}
}
