use crate::core::Renderer;
use crate::descriptor::ParameterDescriptor;

/// Render the call-site text that forwards `parameter` to an inner call.
///
/// Only the pass-mode keyword and the binding name appear: `ref value`, `out count`, `items`.
pub fn render_argument(renderer: &Renderer, parameter: &ParameterDescriptor) -> String {
	format!(
		"{}{}",
		parameter.pass_mode.prefix(),
		renderer.binding_name(&parameter.name)
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::descriptor::{PassMode, TypeReference};

	#[test]
	fn prefixes_follow_pass_mode() {
		let renderer = Renderer::new();
		let base = ParameterDescriptor::new("Value", TypeReference::value("int"));
		let cases = [
			(PassMode::ByValue, "value"),
			(PassMode::ByReference, "ref value"),
			(PassMode::ByOutput, "out value"),
			(PassMode::ByReadOnlyReference, "in value"),
		];
		for (mode, expected) in cases {
			assert_eq!(
				render_argument(&renderer, &base.clone().with_pass_mode(mode)),
				expected
			);
		}
	}

	#[test]
	fn variadic_arguments_have_no_prefix() {
		let parameter = ParameterDescriptor::new("Items", TypeReference::reference("object[]"))
			.with_variadic(true);
		assert_eq!(render_argument(&Renderer::new(), &parameter), "items");
	}

	#[test]
	fn keyword_names_are_escaped() {
		let parameter = ParameterDescriptor::new("Event", TypeReference::reference("string"));
		assert_eq!(render_argument(&Renderer::new(), &parameter), "@event");
		assert_eq!(
			render_argument(&Renderer::new().with_keyword_escaping(false), &parameter),
			"event"
		);
	}
}
