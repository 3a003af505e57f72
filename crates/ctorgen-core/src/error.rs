use serde_json::Error as SerdeError;
use thiserror::Error;

/// Aggregate errors produced by the ctorgen-core API.
#[derive(Debug, Error)]
pub enum CtorgenError {
	/// A parameter could not be rendered.
	#[error("parameter '{parameter}': {source}")]
	Parameter {
		/// Declared name of the failing parameter.
		parameter: String,
		/// Underlying rendering failure.
		#[source]
		source: ctorgen_render::RenderError,
	},
	/// A `params` parameter is not the last by-value parameter of the list.
	#[error("params parameter '{parameter}' {reason}")]
	InvalidVariadic {
		/// Declared name of the offending parameter.
		parameter: String,
		/// Which rule was violated.
		reason: &'static str,
	},
	/// Failed to decode a JSON callable descriptor.
	#[error(transparent)]
	Serialization(#[from] SerdeError),
}

/// Result type returned by the ctorgen-core library.
pub type Result<T> = std::result::Result<T, CtorgenError>;
