use thiserror::Error;

/// Faults the career map can run into.
///
/// Only [`CareerMapError::DataUnavailable`] ever reaches the UI; the others are
/// recovered inside the engine and only show up in the log.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CareerMapError {
	#[error("career data unavailable: {0}")]
	DataUnavailable(String),
	#[error("role `{from}` lists unknown next step `{to}`")]
	DanglingEdge { from: String, to: String },
	#[error("no role with id `{0}`")]
	UnknownSelection(String),
	#[error("level #{index} is malformed: {reason}")]
	MalformedLevel { index: usize, reason: String },
}
