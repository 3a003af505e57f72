//! Core library for ctorgen, the boundary between a source-generator pipeline and the renderer.
//!
//! The pipeline hands over the flattened parameter descriptors of one callable. This crate
//! validates the list, renders every parameter through [`ctorgen_render::Renderer`], applies
//! the configured error policy and joins the results into a declaration list and an argument
//! list for the generated construction method.

/// Error helpers for the core API.
pub mod error;
/// Generate-marker helpers.
pub mod marker;

pub use ctorgen_render::{
	AttributeDescriptor, ConstantValue, EnumType, FallbackMode, IntegerKind, IntegerValue,
	ParameterDescriptor, PassMode, RenderError, Renderer, TypeKind, TypeReference,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub use crate::error::{CtorgenError, Result};
pub use crate::marker::{DEFAULT_METHOD_NAME, resolve_method_name};

/// What to do with a parameter that fails to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParameterErrorPolicy {
	/// Fail the whole callable (default).
	#[default]
	Abort,
	/// Leave the parameter out of both the declaration and the argument list.
	Skip,
}

/// The parameters of one callable, as supplied by the pipeline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CallableDescriptor {
	/// Raw argument of the generate marker, if it carried one.
	#[serde(default)]
	pub method_name: Option<String>,
	/// Parameters in declaration order.
	#[serde(default)]
	pub parameters: Vec<ParameterDescriptor>,
}

/// Text fragments for one generated construction method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedCallable {
	/// Name of the generated method.
	pub method_name: String,
	/// Comma-separated parameter declarations.
	pub parameters: String,
	/// Comma-separated call-site arguments, in the same order.
	pub arguments: String,
	/// Declared names of parameters left out under [`ParameterErrorPolicy::Skip`].
	pub skipped: Vec<String>,
}

/// Ctorgen renders whole callables for a source-generator pipeline.
#[derive(Debug, Clone)]
pub struct Ctorgen {
	/// Renderer used for every parameter.
	renderer: Renderer,

	/// Method name used when the generate marker names none.
	default_method_name: String,

	/// Handling of parameters that fail to render.
	error_policy: ParameterErrorPolicy,
}

impl Default for Ctorgen {
	fn default() -> Self {
		Self::new()
	}
}

impl Ctorgen {
	/// Creates a new Ctorgen instance with a strict renderer, the `Of` fallback method name and
	/// the [`ParameterErrorPolicy::Abort`] policy.
	pub fn new() -> Self {
		Self {
			renderer: Renderer::new(),
			default_method_name: DEFAULT_METHOD_NAME.to_string(),
			error_policy: ParameterErrorPolicy::Abort,
		}
	}

	/// Replace the renderer configuration.
	pub fn with_renderer(mut self, renderer: Renderer) -> Self {
		self.renderer = renderer;
		self
	}

	/// Set the method name used when the generate marker names none.
	pub fn with_default_method_name(mut self, name: impl Into<String>) -> Self {
		self.default_method_name = name.into();
		self
	}

	/// Set the handling of parameters that fail to render.
	pub fn with_error_policy(mut self, error_policy: ParameterErrorPolicy) -> Self {
		self.error_policy = error_policy;
		self
	}

	/// Render the declaration list, argument list and method name of a callable.
	pub fn render_callable(&self, callable: &CallableDescriptor) -> Result<RenderedCallable> {
		validate_variadic(&callable.parameters)?;

		let mut declarations = Vec::with_capacity(callable.parameters.len());
		let mut arguments = Vec::with_capacity(callable.parameters.len());
		let mut skipped = Vec::new();

		for parameter in &callable.parameters {
			match self.renderer.parameter(parameter) {
				Ok(declaration) => {
					declarations.push(declaration);
					arguments.push(self.renderer.argument(parameter));
				}
				Err(source) => match self.error_policy {
					ParameterErrorPolicy::Abort => {
						return Err(CtorgenError::Parameter {
							parameter: parameter.name.clone(),
							source,
						});
					}
					ParameterErrorPolicy::Skip => {
						warn!(parameter = %parameter.name, error = %source, "skipping parameter");
						skipped.push(parameter.name.clone());
					}
				},
			}
		}

		let method_name =
			resolve_method_name(callable.method_name.as_deref(), &self.default_method_name)
				.to_string();
		debug!(
			%method_name,
			rendered = declarations.len(),
			skipped = skipped.len(),
			"rendered callable"
		);

		Ok(RenderedCallable {
			method_name,
			parameters: declarations.join(", "),
			arguments: arguments.join(", "),
			skipped,
		})
	}

	/// Decode a JSON [`CallableDescriptor`] and render it.
	pub fn render_json(&self, json: &str) -> Result<RenderedCallable> {
		let callable: CallableDescriptor = serde_json::from_str(json)?;
		self.render_callable(&callable)
	}
}

/// Check that a `params` parameter is by-value, unique and last.
fn validate_variadic(parameters: &[ParameterDescriptor]) -> Result<()> {
	let last = parameters.len().saturating_sub(1);
	for (index, parameter) in parameters.iter().enumerate() {
		if !parameter.is_variadic {
			continue;
		}
		let reason = if parameter.pass_mode != PassMode::ByValue {
			"must be passed by value"
		} else if index != last {
			"must be the last parameter"
		} else {
			continue;
		};
		return Err(CtorgenError::InvalidVariadic {
			parameter: parameter.name.clone(),
			reason,
		});
	}
	Ok(())
}
