use std::collections::HashMap;

use log::{debug, warn};
use serde_json::Value;

use super::error::CareerMapError;
use super::types::{Level, Role};

/// Read-only view over the loaded levels and roles.
#[derive(Clone, Debug, Default)]
pub struct GraphStore {
	levels: Vec<Level>,
	/// Role id -> (level index, position within level).
	index: HashMap<String, (usize, usize)>,
	/// Role id -> ids of roles whose next steps point at it.
	parents: HashMap<String, Vec<String>>,
}

impl GraphStore {
	/// Parse a JSON data set: an array of `{ name, roles: [...] }` records.
	///
	/// A level without a usable `roles` array is kept with zero roles, and a
	/// role record that fails to parse is skipped. Only a missing, empty or
	/// non-array document is reported, as `DataUnavailable`.
	pub fn from_json(raw: &str) -> Result<Self, CareerMapError> {
		if raw.trim().is_empty() {
			return Err(CareerMapError::DataUnavailable("no data supplied".into()));
		}
		let doc: Value = serde_json::from_str(raw)
			.map_err(|e| CareerMapError::DataUnavailable(e.to_string()))?;
		let Value::Array(records) = doc else {
			return Err(CareerMapError::DataUnavailable(
				"expected an array of levels".into(),
			));
		};
		if records.is_empty() {
			return Err(CareerMapError::DataUnavailable("data set has no levels".into()));
		}

		let levels = records
			.iter()
			.enumerate()
			.map(|(i, record)| parse_level(i, record))
			.collect();
		Ok(Self::from_levels(levels))
	}

	/// Build the store from already-parsed levels. Later roles that reuse an
	/// existing id are dropped so every id maps to exactly one role.
	pub fn from_levels(levels: Vec<Level>) -> Self {
		let mut index = HashMap::new();
		let mut kept = Vec::with_capacity(levels.len());
		for (li, level) in levels.into_iter().enumerate() {
			let mut roles = Vec::with_capacity(level.roles.len());
			for role in level.roles {
				if index.contains_key(&role.id) {
					warn!("duplicate role id `{}` in level `{}`, skipping", role.id, level.name);
					continue;
				}
				index.insert(role.id.clone(), (li, roles.len()));
				roles.push(role);
			}
			kept.push(Level {
				name: level.name,
				roles,
			});
		}

		let mut parents: HashMap<String, Vec<String>> = HashMap::new();
		for role in kept.iter().flat_map(|l| l.roles.iter()) {
			for next in &role.next_steps {
				if index.contains_key(next) {
					parents.entry(next.clone()).or_default().push(role.id.clone());
				} else {
					debug!(
						"{}",
						CareerMapError::DanglingEdge {
							from: role.id.clone(),
							to: next.clone(),
						}
					);
				}
			}
		}

		Self {
			levels: kept,
			index,
			parents,
		}
	}

	pub fn lookup(&self, id: &str) -> Option<&Role> {
		let &(li, ri) = self.index.get(id)?;
		self.levels.get(li)?.roles.get(ri)
	}

	pub fn contains(&self, id: &str) -> bool {
		self.index.contains_key(id)
	}

	/// Index of the level the role belongs to.
	pub fn level_of(&self, id: &str) -> Option<usize> {
		self.index.get(id).map(|&(li, _)| li)
	}

	pub fn levels(&self) -> &[Level] {
		&self.levels
	}

	/// All roles, flattened across levels in declaration order.
	pub fn all_roles(&self) -> impl Iterator<Item = &Role> {
		self.levels.iter().flat_map(|l| l.roles.iter())
	}

	pub fn role_count(&self) -> usize {
		self.index.len()
	}

	/// Next steps of `id` that resolve to a known role.
	pub fn children<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a str> + use<'a> {
		self.lookup(id)
			.into_iter()
			.flat_map(|r| r.next_steps.iter())
			.filter(|next| self.index.contains_key(next.as_str()))
			.map(String::as_str)
	}

	/// Roles that list `id` as a next step.
	pub fn parents(&self, id: &str) -> &[String] {
		self.parents.get(id).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Every resolvable `(from, to)` pair, in declaration then next-step order.
	pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
		self.all_roles()
			.flat_map(move |role| self.children(&role.id).map(move |to| (role.id.as_str(), to)))
	}
}

fn parse_level(index: usize, record: &Value) -> Level {
	let name = record
		.get("name")
		.or_else(|| record.get("levelName"))
		.and_then(Value::as_str)
		.unwrap_or_default()
		.to_string();

	let Some(entries) = record.get("roles").and_then(Value::as_array) else {
		warn!(
			"{}",
			CareerMapError::MalformedLevel {
				index,
				reason: "missing `roles` array".into(),
			}
		);
		return Level {
			name,
			roles: Vec::new(),
		};
	};

	let roles = entries
		.iter()
		.filter_map(|entry| match serde_json::from_value::<Role>(entry.clone()) {
			Ok(role) => Some(role),
			Err(e) => {
				warn!("skipping role record in level `{name}`: {e}");
				None
			}
		})
		.collect();
	Level { name, roles }
}

#[cfg(test)]
pub(crate) mod tests {
	use super::*;

	pub(crate) fn role(id: &str, next: &[&str]) -> Role {
		Role {
			id: id.into(),
			title: id.to_uppercase(),
			department: "Ops".into(),
			description: format!("{id} description"),
			requirements: None,
			next_steps: next.iter().map(|s| s.to_string()).collect(),
		}
	}

	pub(crate) fn level(name: &str, roles: Vec<Role>) -> Level {
		Level {
			name: name.into(),
			roles,
		}
	}

	/// A slice of the customer service and IT ladders.
	pub(crate) fn sample_store() -> GraphStore {
		GraphStore::from_levels(vec![
			level(
				"Entry",
				vec![role("telephone_op", &["csr_i"]), role("courier", &["office_asst"])],
			),
			level(
				"Level 1",
				vec![
					role("office_asst", &[]),
					role("csr_i", &["csr_ii"]),
					role("cust_relations_officer_i", &["cust_relations_officer_ii"]),
				],
			),
			level("Level 2", vec![role("csr_ii", &["csr_iii"])]),
			level(
				"Level 3",
				vec![
					role("csr_iii", &["cust_relations_officer_ii"]),
					role("systems_admin_i", &["systems_admin_ii"]),
					role("cust_relations_officer_ii", &[]),
				],
			),
			level("Level 4", vec![role("systems_admin_ii", &["ghost"])]),
		])
	}

	#[test]
	fn lookup_and_level_membership() {
		let store = sample_store();
		assert_eq!(store.role_count(), 10);
		assert_eq!(store.lookup("csr_ii").map(|r| r.id.as_str()), Some("csr_ii"));
		assert_eq!(store.level_of("csr_iii"), Some(3));
		assert!(store.lookup("ghost").is_none());
		assert_eq!(store.all_roles().next().map(|r| r.id.as_str()), Some("telephone_op"));
	}

	#[test]
	fn dangling_next_steps_are_not_edges() {
		let store = sample_store();
		assert_eq!(store.children("systems_admin_ii").count(), 0);
		assert!(store.edges().all(|(_, to)| to != "ghost"));
		assert!(store.parents("ghost").is_empty());
	}

	#[test]
	fn parents_are_indexed() {
		let store = sample_store();
		let mut parents = store.parents("cust_relations_officer_ii").to_vec();
		parents.sort();
		assert_eq!(parents, vec!["csr_iii", "cust_relations_officer_i"]);
	}

	#[test]
	fn parses_both_field_spellings() {
		let store = GraphStore::from_json(
			r#"[
				{"levelName": "Entry", "roles": [{"id": "a", "title": "A", "dept": "Ops", "desc": "x", "nextSteps": ["b"]}]},
				{"name": "Level 1", "roles": [{"id": "b", "title": "B", "department": "Ops", "description": "y", "requirements": "Degree"}]}
			]"#,
		)
		.unwrap();
		assert_eq!(store.levels()[0].name, "Entry");
		assert_eq!(store.levels()[1].name, "Level 1");
		assert_eq!(store.edges().collect::<Vec<_>>(), vec![("a", "b")]);
		assert_eq!(store.lookup("b").and_then(|r| r.requirements.as_deref()), Some("Degree"));
	}

	#[test]
	fn malformed_level_is_empty() {
		let store = GraphStore::from_json(
			r#"[{"name": "Broken"}, {"name": "Odd", "roles": 3}, {"name": "Ok", "roles": [{"id": "a"}, {"title": "no id"}]}]"#,
		)
		.unwrap();
		assert_eq!(store.levels().len(), 3);
		assert!(store.levels()[0].roles.is_empty());
		assert!(store.levels()[1].roles.is_empty());
		assert_eq!(store.role_count(), 1);
	}

	#[test]
	fn null_or_mixed_next_steps_keep_the_role() {
		let store = GraphStore::from_json(
			r#"[{"name": "L1", "roles": [{"id": "a", "nextSteps": ["b", 7]}]},
			    {"name": "L2", "roles": [{"id": "b", "nextSteps": null}]}]"#,
		)
		.unwrap();
		assert_eq!(store.role_count(), 2);
		assert_eq!(store.edges().collect::<Vec<_>>(), vec![("a", "b")]);
		assert_eq!(store.children("b").count(), 0);
	}

	#[test]
	fn missing_data_is_unavailable() {
		for raw in ["", "   ", "{}", "[]", "not json"] {
			assert!(
				matches!(GraphStore::from_json(raw), Err(CareerMapError::DataUnavailable(_))),
				"{raw:?} should be unavailable"
			);
		}
	}

	#[test]
	fn duplicate_ids_keep_first() {
		let store = GraphStore::from_levels(vec![
			level("One", vec![role("a", &["b"])]),
			level("Two", vec![role("b", &[]), role("a", &[])]),
		]);
		assert_eq!(store.role_count(), 2);
		assert_eq!(store.level_of("a"), Some(0));
		assert_eq!(store.levels()[1].roles.len(), 1);
	}
}
