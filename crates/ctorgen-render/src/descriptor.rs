//! Immutable descriptors handed over by the generator pipeline.
//!
//! The pipeline flattens everything it knows from the semantic model (type classification,
//! enum members, attribute arguments) into these values before rendering. Nothing in this
//! crate performs symbol resolution of its own.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constant::{ConstantValue, EnumType};

/// Nullability marker appended to type text.
pub const NULLABLE_MARKER: char = '?';

/// Classification of a referenced type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
	/// Class, interface, delegate, array or string.
	#[default]
	Reference,
	/// Struct or primitive value type.
	Value,
	/// Enum type with its declared members.
	Enum(EnumType),
}

/// Canonical type text plus the facts rendering needs about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeReference {
	/// Fully qualified, escaped type text. May already end with `?`.
	pub name: String,
	/// Type classification.
	#[serde(default)]
	pub kind: TypeKind,
}

impl TypeReference {
	/// A reference type.
	pub fn reference(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			kind: TypeKind::Reference,
		}
	}

	/// A non-enum value type.
	pub fn value(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			kind: TypeKind::Value,
		}
	}

	/// An enum type. The type text is taken from the enum.
	pub fn enumeration(enum_type: EnumType) -> Self {
		Self {
			name: enum_type.name.clone(),
			kind: TypeKind::Enum(enum_type),
		}
	}

	/// Whether the type is a value type (enums included).
	pub fn is_value_type(&self) -> bool {
		matches!(self.kind, TypeKind::Value | TypeKind::Enum(_))
	}

	/// Whether the type text already carries the nullability marker.
	pub fn has_nullable_marker(&self) -> bool {
		self.name.ends_with(NULLABLE_MARKER)
	}

	/// The enum shape, if this is an enum type.
	pub fn as_enum(&self) -> Option<&EnumType> {
		match &self.kind {
			TypeKind::Enum(enum_type) => Some(enum_type),
			_ => None,
		}
	}
}

/// How a parameter is passed at the call boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassMode {
	/// Passed by value.
	#[default]
	ByValue,
	/// `ref`
	ByReference,
	/// `out`
	ByOutput,
	/// `in`
	ByReadOnlyReference,
}

impl PassMode {
	/// Keyword text preceding the parameter type or argument, including the trailing space.
	pub fn prefix(self) -> &'static str {
		match self {
			Self::ByValue => "",
			Self::ByReference => "ref ",
			Self::ByOutput => "out ",
			Self::ByReadOnlyReference => "in ",
		}
	}

	/// Whether a parameter with this pass mode may declare a default value.
	pub fn allows_default(self) -> bool {
		matches!(self, Self::ByValue | Self::ByReference)
	}
}

impl fmt::Display for PassMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::ByValue => f.write_str("value"),
			Self::ByReference => f.write_str("ref"),
			Self::ByOutput => f.write_str("out"),
			Self::ByReadOnlyReference => f.write_str("in"),
		}
	}
}

/// An attribute applied to a parameter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AttributeDescriptor {
	/// Attribute class, or `None` when the pipeline could not resolve it.
	pub attribute_type: Option<TypeReference>,
	/// Constructor arguments in order.
	#[serde(default)]
	pub positional: Vec<ConstantValue>,
	/// Named property/field arguments in order.
	#[serde(default)]
	pub named: Vec<(String, ConstantValue)>,
}

impl AttributeDescriptor {
	/// An attribute of a resolved type with no arguments.
	pub fn new(attribute_type: TypeReference) -> Self {
		Self {
			attribute_type: Some(attribute_type),
			..Self::default()
		}
	}

	/// An attribute whose type could not be resolved.
	pub fn unresolved() -> Self {
		Self::default()
	}

	/// Append a positional argument.
	pub fn with_positional(mut self, value: impl Into<ConstantValue>) -> Self {
		self.positional.push(value.into());
		self
	}

	/// Append a named argument.
	pub fn with_named(mut self, name: impl Into<String>, value: impl Into<ConstantValue>) -> Self {
		self.named.push((name.into(), value.into()));
		self
	}

	/// Whether the attribute has any arguments.
	pub fn has_arguments(&self) -> bool {
		!self.positional.is_empty() || !self.named.is_empty()
	}
}

/// A parameter of the callable being forwarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
	/// Declared parameter name, before binding-name normalization.
	pub name: String,
	/// Parameter type.
	#[serde(rename = "type")]
	pub type_ref: TypeReference,
	/// Whether the parameter is annotated nullable.
	#[serde(default)]
	pub is_nullable: bool,
	/// How the parameter is passed.
	#[serde(default)]
	pub pass_mode: PassMode,
	/// Whether the parameter is a `params` array.
	#[serde(default)]
	pub is_variadic: bool,
	/// Attributes in declaration order.
	#[serde(default)]
	pub attributes: Vec<AttributeDescriptor>,
	/// Explicit default value, if the parameter is optional.
	#[serde(default)]
	pub default_value: Option<ConstantValue>,
}

impl ParameterDescriptor {
	/// A by-value, non-nullable parameter with no attributes or default.
	pub fn new(name: impl Into<String>, type_ref: TypeReference) -> Self {
		Self {
			name: name.into(),
			type_ref,
			is_nullable: false,
			pass_mode: PassMode::ByValue,
			is_variadic: false,
			attributes: Vec::new(),
			default_value: None,
		}
	}

	/// Mark the parameter nullable.
	pub fn with_nullable(mut self, is_nullable: bool) -> Self {
		self.is_nullable = is_nullable;
		self
	}

	/// Set the pass mode.
	pub fn with_pass_mode(mut self, pass_mode: PassMode) -> Self {
		self.pass_mode = pass_mode;
		self
	}

	/// Mark the parameter as a `params` array.
	pub fn with_variadic(mut self, is_variadic: bool) -> Self {
		self.is_variadic = is_variadic;
		self
	}

	/// Append an attribute.
	pub fn with_attribute(mut self, attribute: AttributeDescriptor) -> Self {
		self.attributes.push(attribute);
		self
	}

	/// Set the default value.
	pub fn with_default(mut self, value: impl Into<ConstantValue>) -> Self {
		self.default_value = Some(value.into());
		self
	}

	/// Whether the declared type admits `null` as a default.
	pub fn accepts_null(&self) -> bool {
		!self.type_ref.is_value_type() || self.is_nullable || self.type_ref.has_nullable_marker()
	}
}
