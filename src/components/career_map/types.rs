use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A job role: one vertex of the progression graph.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Role {
	pub id: String,
	#[serde(default)]
	pub title: String,
	#[serde(default, alias = "dept")]
	pub department: String,
	#[serde(default, alias = "desc")]
	pub description: String,
	#[serde(default, alias = "req")]
	pub requirements: Option<String>,
	/// Outgoing edges, in connector draw order.
	#[serde(default, deserialize_with = "lenient_steps")]
	pub next_steps: Vec<String>,
}

/// Accept `null` or a non-array as "no next steps" and skip non-string entries,
/// so a sloppy edge list never costs the role itself.
fn lenient_steps<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(match Value::deserialize(deserializer)? {
		Value::Array(entries) => entries
			.into_iter()
			.filter_map(|entry| match entry {
				Value::String(id) => Some(id),
				_ => None,
			})
			.collect(),
		_ => Vec::new(),
	})
}

/// An ordered progression tier, rendered as one column.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Level {
	pub name: String,
	pub roles: Vec<Role>,
}

/// Display fields handed to the details panel for a selected role.
#[derive(Clone, Debug, PartialEq)]
pub struct RoleDetails {
	pub title: String,
	pub department: String,
	pub level: String,
	pub description: String,
	pub requirements: Option<String>,
}

/// Outbound notification emitted by the session for presentation collaborators.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DetailsEvent {
	/// Nothing is selected.
	#[default]
	Placeholder,
	Selected(RoleDetails),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn role_accepts_short_field_names() {
		let role: Role = serde_json::from_str(
			r#"{"id":"courier","title":"Courier","dept":"Operations","desc":"Delivers.","req":"Permit","nextSteps":["office_asst"]}"#,
		)
		.unwrap();
		assert_eq!(role.department, "Operations");
		assert_eq!(role.description, "Delivers.");
		assert_eq!(role.requirements.as_deref(), Some("Permit"));
		assert_eq!(role.next_steps, vec!["office_asst".to_string()]);
	}

	#[test]
	fn role_defaults_missing_optional_fields() {
		let role: Role = serde_json::from_str(r#"{"id":"x"}"#).unwrap();
		assert!(role.title.is_empty());
		assert!(role.requirements.is_none());
		assert!(role.next_steps.is_empty());
	}

	#[test]
	fn role_survives_sloppy_next_steps() {
		let role: Role = serde_json::from_str(r#"{"id":"x","nextSteps":null}"#).unwrap();
		assert!(role.next_steps.is_empty());

		let role: Role = serde_json::from_str(r#"{"id":"x","nextSteps":"y"}"#).unwrap();
		assert!(role.next_steps.is_empty());

		let role: Role =
			serde_json::from_str(r#"{"id":"x","nextSteps":["y",7,null,"z"]}"#).unwrap();
		assert_eq!(role.next_steps, vec!["y".to_string(), "z".to_string()]);
	}
}
