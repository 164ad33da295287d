use std::collections::HashSet;

use super::store::GraphStore;

/// A selected role together with everything before and after it on a path.
#[derive(Clone, Debug, PartialEq)]
pub struct FocusSet {
	pub selected: String,
	pub members: HashSet<String>,
}

impl FocusSet {
	pub fn contains(&self, id: &str) -> bool {
		self.members.contains(id)
	}
}

/// Collect `root`, its descendants along next steps and its ancestors.
///
/// Both walks use an explicit work-list and never re-expand a visited id, so
/// cycles in the data terminate. Returns `None` for an unknown root.
pub fn compute_focus(store: &GraphStore, root: &str) -> Option<FocusSet> {
	if !store.contains(root) {
		return None;
	}

	let mut members = HashSet::new();
	members.insert(root.to_string());
	members.extend(walk(root, |id| {
		store.children(id).map(str::to_string).collect()
	}));
	members.extend(walk(root, |id| store.parents(id).to_vec()));

	Some(FocusSet {
		selected: root.to_string(),
		members,
	})
}

fn walk(root: &str, next: impl Fn(&str) -> Vec<String>) -> HashSet<String> {
	let mut seen = HashSet::new();
	let mut stack = vec![root.to_string()];
	while let Some(id) = stack.pop() {
		for n in next(&id) {
			if n != root && seen.insert(n.clone()) {
				stack.push(n);
			}
		}
	}
	seen
}
