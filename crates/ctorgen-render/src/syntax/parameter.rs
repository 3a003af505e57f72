use tracing::trace;

use super::attribute::render_attributes;
use super::literal::render_enum_value;
use crate::constant::ConstantValue;
use crate::core::Renderer;
use crate::descriptor::{NULLABLE_MARKER, ParameterDescriptor, PassMode};
use crate::error::{RenderError, Result};

/// Render a full parameter declaration.
///
/// Parts are emitted in a fixed order: attributes, modifier, type, nullability marker, name
/// and default value, e.g. `[NotNull] ref string? name = null`.
pub fn render_parameter(renderer: &Renderer, parameter: &ParameterDescriptor) -> Result<String> {
	let mut declaration = render_attributes(renderer, &parameter.attributes)?;
	declaration.push_str(render_modifier(parameter));
	declaration.push_str(&parameter.type_ref.name);
	if parameter.is_nullable && !parameter.type_ref.has_nullable_marker() {
		declaration.push(NULLABLE_MARKER);
	}
	declaration.push(' ');
	declaration.push_str(&renderer.binding_name(&parameter.name));
	declaration.push_str(&render_default(renderer, parameter)?);
	trace!(parameter = %parameter.name, %declaration, "rendered parameter");
	Ok(declaration)
}

/// Modifier keyword text, including its trailing space.
pub fn render_modifier(parameter: &ParameterDescriptor) -> &'static str {
	match parameter.pass_mode {
		PassMode::ByValue if parameter.is_variadic => "params ",
		mode => mode.prefix(),
	}
}

/// Render the ` = value` suffix for an optional parameter, or an empty string.
pub fn render_default(renderer: &Renderer, parameter: &ParameterDescriptor) -> Result<String> {
	let Some(value) = &parameter.default_value else {
		return Ok(String::new());
	};

	if !parameter.pass_mode.allows_default() {
		return Err(RenderError::InvalidDefaultForPassMode {
			parameter: parameter.name.clone(),
			pass_mode: parameter.pass_mode,
		});
	}

	let rendered = match (value, parameter.type_ref.as_enum()) {
		(ConstantValue::Null, _) if parameter.accepts_null() => "null".to_string(),
		(ConstantValue::Null, _) => "default".to_string(),
		(
			ConstantValue::Integer(raw) | ConstantValue::EnumMember { value: raw, .. },
			Some(enum_type),
		) => renderer.degrade(value, render_enum_value(enum_type, *raw))?,
		(_, Some(enum_type)) => renderer.degrade(
			value,
			Err(RenderError::unsupported(
				value.kind_name(),
				format!("not an integral default for enum {}", enum_type.name),
			)),
		)?,
		(_, None) => renderer.literal(value)?,
	};
	Ok(format!(" = {rendered}"))
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::constant::{EnumType, IntegerKind};
	use crate::descriptor::TypeReference;

	#[test]
	fn modifiers() {
		let base = ParameterDescriptor::new("Items", TypeReference::reference("int[]"));
		assert_eq!(render_modifier(&base), "");
		assert_eq!(render_modifier(&base.clone().with_variadic(true)), "params ");
		assert_eq!(
			render_modifier(&base.clone().with_pass_mode(PassMode::ByReference)),
			"ref "
		);
		assert_eq!(
			render_modifier(&base.clone().with_pass_mode(PassMode::ByOutput)),
			"out "
		);
		assert_eq!(
			render_modifier(&base.with_pass_mode(PassMode::ByReadOnlyReference)),
			"in "
		);
	}

	#[test]
	fn null_default_for_value_type_is_default() {
		let parameter = ParameterDescriptor::new("Size", TypeReference::value("int"))
			.with_default(ConstantValue::Null);
		assert_eq!(render_default(&Renderer::new(), &parameter).unwrap(), " = default");
	}

	#[test]
	fn null_default_for_nullable_value_type_is_null() {
		let parameter = ParameterDescriptor::new("Size", TypeReference::value("int"))
			.with_nullable(true)
			.with_default(ConstantValue::Null);
		assert_eq!(render_default(&Renderer::new(), &parameter).unwrap(), " = null");

		let marked = ParameterDescriptor::new("Size", TypeReference::value("int?"))
			.with_default(ConstantValue::Null);
		assert_eq!(render_default(&Renderer::new(), &marked).unwrap(), " = null");
	}

	#[test]
	fn enum_default_rejects_non_integral_value() {
		let color = EnumType::new("Color", IntegerKind::I32)
			.with_member("Red", 0)
			.unwrap();
		let parameter = ParameterDescriptor::new("Tint", TypeReference::enumeration(color))
			.with_default(ConstantValue::from("red"));
		assert!(matches!(
			render_default(&Renderer::new(), &parameter),
			Err(RenderError::UnsupportedConstantKind { kind: "string", .. })
		));
	}

	#[test]
	fn default_rejected_for_out_and_in() {
		for mode in [PassMode::ByOutput, PassMode::ByReadOnlyReference] {
			let parameter = ParameterDescriptor::new("Count", TypeReference::value("int"))
				.with_pass_mode(mode)
				.with_default(0);
			assert_eq!(
				render_parameter(&Renderer::new(), &parameter),
				Err(RenderError::InvalidDefaultForPassMode {
					parameter: "Count".to_string(),
					pass_mode: mode,
				})
			);
		}
	}
}
