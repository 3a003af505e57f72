//! Rendering logic that turns parameter and attribute descriptors into C# source fragments.
//!
//! The crate is a small codec: semantic constants become canonical literal text, and
//! parameter descriptors become declaration and argument text. Every operation is a pure
//! function of its inputs.

/// Syntax utilities for names, literals, attributes, parameters and arguments.
pub mod syntax;

/// Semantic constant values.
pub mod constant;
/// Main renderer configuration and public API.
pub mod core;
/// Descriptors supplied by the generator pipeline.
pub mod descriptor;
/// Domain-specific errors for the renderer.
pub mod error;

// Re-export public API
pub use crate::core::{FallbackMode, Renderer};

pub use constant::{ConstantValue, EnumMember, EnumType, IntegerKind, IntegerValue};
pub use descriptor::{
	AttributeDescriptor, NULLABLE_MARKER, ParameterDescriptor, PassMode, TypeKind, TypeReference,
};
pub use error::{RenderError, Result};
pub use syntax::{
	is_reserved_word, normalize_binding_name, render_argument, render_attribute,
	render_attributes, render_parameter, resolve_literal,
};
