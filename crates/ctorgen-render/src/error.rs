use thiserror::Error;

use crate::constant::IntegerKind;
use crate::descriptor::PassMode;

/// Errors emitted while rendering declarations, arguments and literals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
	/// An attribute descriptor carries no resolvable attribute type.
	#[error("attribute type could not be resolved")]
	UnresolvedAttributeType,
	/// A constant value has no canonical literal form in the position it was used.
	#[error("unsupported {kind} constant: {reason}")]
	UnsupportedConstantKind {
		/// Short name of the offending constant shape.
		kind: &'static str,
		/// Why no literal could be produced.
		reason: String,
	},
	/// A parameter passed by `out` or `in` carries a default value.
	#[error("parameter '{parameter}' is passed as {pass_mode} and cannot have a default value")]
	InvalidDefaultForPassMode {
		/// Declared parameter name.
		parameter: String,
		/// Pass mode that forbids the default.
		pass_mode: PassMode,
	},
	/// An integral value does not fit the declared integer kind.
	#[error("value {value} does not fit in {kind}")]
	IntegerOutOfRange {
		/// Declared integer kind.
		kind: IntegerKind,
		/// Offending value.
		value: i128,
	},
}

impl RenderError {
	pub(crate) fn unsupported(kind: &'static str, reason: impl Into<String>) -> Self {
		Self::UnsupportedConstantKind {
			kind,
			reason: reason.into(),
		}
	}
}

/// Result type returned by renderer helpers.
pub type Result<T> = std::result::Result<T, RenderError>;
