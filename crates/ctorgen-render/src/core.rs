use tracing::warn;

use crate::constant::ConstantValue;
use crate::descriptor::ParameterDescriptor;
use crate::error::{RenderError, Result};
use crate::syntax::{render_argument, render_binding_name, render_parameter, resolve_literal};

/// What to do when a constant has no canonical literal form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackMode {
	/// Surface [`RenderError::UnsupportedConstantKind`] (default).
	#[default]
	Strict,
	/// Emit the constant's loose [`Display`](std::fmt::Display) text instead.
	///
	/// The fallback text is not guaranteed to be valid C#; invalid output only surfaces when
	/// the generated source is compiled.
	BestEffort,
}

/// Renderer configuration shared by every rendering call.
///
/// The renderer holds no state beyond its configuration, so one value can be reused across
/// threads and callables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
	/// Handling of constants without a canonical literal.
	pub fallback: FallbackMode,
	/// Whether binding names that collide with reserved keywords get an `@` prefix.
	pub escape_keywords: bool,
}

impl Default for Renderer {
	fn default() -> Self {
		Self::new()
	}
}

impl Renderer {
	/// Create a strict renderer that escapes keyword names.
	pub fn new() -> Self {
		Self {
			fallback: FallbackMode::Strict,
			escape_keywords: true,
		}
	}

	/// Select how unsupported constants are handled.
	pub fn with_fallback(mut self, fallback: FallbackMode) -> Self {
		self.fallback = fallback;
		self
	}

	/// Enable or disable `@` escaping of keyword binding names.
	pub fn with_keyword_escaping(mut self, escape_keywords: bool) -> Self {
		self.escape_keywords = escape_keywords;
		self
	}

	/// Resolve a constant to literal text, honouring the fallback mode.
	pub fn literal(&self, value: &ConstantValue) -> Result<String> {
		self.degrade(value, resolve_literal(value))
	}

	/// Apply the fallback mode to the outcome of rendering `value`.
	pub(crate) fn degrade(
		&self,
		value: &ConstantValue,
		rendered: Result<String>,
	) -> Result<String> {
		match (rendered, self.fallback) {
			(
				Err(RenderError::UnsupportedConstantKind { kind, reason }),
				FallbackMode::BestEffort,
			) => {
				warn!(kind, %reason, "falling back to raw constant text");
				Ok(value.to_string())
			}
			(rendered, _) => rendered,
		}
	}

	/// Render one parameter declaration.
	pub fn parameter(&self, parameter: &ParameterDescriptor) -> Result<String> {
		render_parameter(self, parameter)
	}

	/// Render the call-site argument forwarding one parameter.
	pub fn argument(&self, parameter: &ParameterDescriptor) -> String {
		render_argument(self, parameter)
	}

	/// Render the binding name used for a parameter.
	pub fn binding_name(&self, name: &str) -> String {
		render_binding_name(name, self.escape_keywords)
	}

	/// Render a comma-separated declaration list.
	pub fn parameters(&self, parameters: &[ParameterDescriptor]) -> Result<String> {
		Ok(parameters
			.iter()
			.map(|parameter| self.parameter(parameter))
			.collect::<Result<Vec<_>>>()?
			.join(", "))
	}

	/// Render a comma-separated argument list.
	pub fn arguments(&self, parameters: &[ParameterDescriptor]) -> String {
		parameters
			.iter()
			.map(|parameter| self.argument(parameter))
			.collect::<Vec<_>>()
			.join(", ")
	}
}
