//! Helpers shared by the ctorgen-render integration tests.
#![allow(dead_code, unused_imports)]

pub use ctorgen_render::{
	AttributeDescriptor, ConstantValue, EnumType, IntegerKind, ParameterDescriptor, PassMode,
	Renderer, TypeReference,
};
use pretty_assertions::assert_eq;

/// Assert the declaration and argument text rendered for `parameter`.
pub fn assert_renders(parameter: &ParameterDescriptor, declaration: &str, argument: &str) {
	let renderer = Renderer::new();
	let rendered = renderer
		.parameter(parameter)
		.unwrap_or_else(|err| panic!("failed to render {}: {err}", parameter.name));
	assert_eq!(rendered, declaration);
	assert_eq!(renderer.argument(parameter), argument);
}

/// `Color { Red = 0, Green = 1 }` backed by `int`.
pub fn color() -> EnumType {
	EnumType::new("Color", IntegerKind::I32)
		.with_member("Red", 0)
		.and_then(|ty| ty.with_member("Green", 1))
		.expect("members fit int")
}

/// Generate a module of declaration tests.
///
/// Each case names a parameter expression and the expected declaration and argument text.
#[macro_export]
macro_rules! gen_tests {
	(
		$group:ident,
		{ $( $name:ident: $parameter:expr => $declaration:expr, $argument:expr; )* }
	) => {
		mod $group {
			use super::*;
			$(
				#[test]
				fn $name() {
					let parameter = $parameter;
					assert_renders(&parameter, $declaration, $argument);
				}
			)*
		}
	};
}
