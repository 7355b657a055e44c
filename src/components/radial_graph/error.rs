use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

/// Fatal initialization errors. None of these are retried: a graph that
/// fails to construct or mount is never drawn.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
	/// The input dataset cannot be laid out (e.g. an empty node set, which
	/// would make the angular separation divide by zero).
	#[error("invalid input: {0}")]
	InvalidInput(String),

	/// An edge references a node id absent from the node set.
	#[error("edge references unknown node id `{id}`")]
	InvalidReference { id: String },

	/// The host element needed to size and mount the canvas is absent.
	#[error("missing container: {0}")]
	MissingContainer(String),
}
