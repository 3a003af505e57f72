use tracing::debug;

use crate::core::Renderer;
use crate::descriptor::AttributeDescriptor;
use crate::error::{RenderError, Result};

/// Render the attribute prefix for a parameter.
///
/// Each attribute renders as `[Type]` or `[Type(args)]` followed by a single space, so the
/// result can be placed directly in front of the modifier and type text. Attributes whose
/// type could not be resolved are dropped; an empty slice renders as an empty string.
pub fn render_attributes(
	renderer: &Renderer,
	attributes: &[AttributeDescriptor],
) -> Result<String> {
	let mut output = String::new();
	for (index, attribute) in attributes.iter().enumerate() {
		match render_attribute(renderer, attribute) {
			Ok(rendered) => {
				output.push_str(&rendered);
				output.push(' ');
			}
			Err(RenderError::UnresolvedAttributeType) => {
				debug!(index, "skipping attribute with unresolved type");
			}
			Err(err) => return Err(err),
		}
	}
	Ok(output)
}

/// Render a single attribute without the trailing space.
///
/// Positional arguments come first, then named arguments as `name = value`.
pub fn render_attribute(renderer: &Renderer, attribute: &AttributeDescriptor) -> Result<String> {
	let ty = attribute
		.attribute_type
		.as_ref()
		.ok_or(RenderError::UnresolvedAttributeType)?;

	if !attribute.has_arguments() {
		return Ok(format!("[{}]", ty.name));
	}

	let mut args = Vec::with_capacity(attribute.positional.len() + attribute.named.len());
	for value in &attribute.positional {
		args.push(renderer.literal(value)?);
	}
	for (name, value) in &attribute.named {
		args.push(format!("{name} = {}", renderer.literal(value)?));
	}
	Ok(format!("[{}({})]", ty.name, args.join(", ")))
}
