use log::debug;

use super::error::CareerMapError;
use super::store::GraphStore;

/// Id of an optional `<script type="application/json">` element whose text
/// replaces the bundled data set.
pub const DATA_ELEMENT_ID: &str = "career-data";

const BUNDLED: &str = include_str!("../../../assets/career_data.json");

/// Load the career data set for this page.
pub fn load_career_data() -> Result<GraphStore, CareerMapError> {
	match inline_data() {
		Some(raw) => {
			debug!("using inline career data from #{DATA_ELEMENT_ID}");
			GraphStore::from_json(&raw)
		}
		None => GraphStore::from_json(BUNDLED),
	}
}

fn inline_data() -> Option<String> {
	web_sys::window()?
		.document()?
		.get_element_by_id(DATA_ELEMENT_ID)?
		.text_content()
}
