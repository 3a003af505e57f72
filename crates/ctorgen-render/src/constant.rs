//! Semantic constant values attached to attribute arguments and parameter defaults.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::descriptor::TypeReference;
use crate::error::{RenderError, Result};

/// Width and signedness of an integral constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegerKind {
	/// `sbyte`
	I8,
	/// `byte`
	U8,
	/// `short`
	I16,
	/// `ushort`
	U16,
	/// `int`
	I32,
	/// `uint`
	U32,
	/// `long`
	I64,
	/// `ulong`
	U64,
}

impl IntegerKind {
	/// Bit width of the kind.
	pub fn width(self) -> u8 {
		match self {
			Self::I8 | Self::U8 => 8,
			Self::I16 | Self::U16 => 16,
			Self::I32 | Self::U32 => 32,
			Self::I64 | Self::U64 => 64,
		}
	}

	/// Whether the kind is signed.
	pub fn is_signed(self) -> bool {
		matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64)
	}

	/// Look up the kind for a width and signedness pair.
	pub fn from_width(width: u8, signed: bool) -> Option<Self> {
		let kind = match (width, signed) {
			(8, true) => Self::I8,
			(8, false) => Self::U8,
			(16, true) => Self::I16,
			(16, false) => Self::U16,
			(32, true) => Self::I32,
			(32, false) => Self::U32,
			(64, true) => Self::I64,
			(64, false) => Self::U64,
			_ => return None,
		};
		Some(kind)
	}

	/// Inclusive range of values representable by the kind.
	pub fn bounds(self) -> (i128, i128) {
		let width = u32::from(self.width());
		if self.is_signed() {
			let half = 1i128 << (width - 1);
			(-half, half - 1)
		} else {
			(0, (1i128 << width) - 1)
		}
	}

	/// C# keyword naming the kind.
	pub fn keyword(self) -> &'static str {
		match self {
			Self::I8 => "sbyte",
			Self::U8 => "byte",
			Self::I16 => "short",
			Self::U16 => "ushort",
			Self::I32 => "int",
			Self::U32 => "uint",
			Self::I64 => "long",
			Self::U64 => "ulong",
		}
	}
}

impl fmt::Display for IntegerKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.keyword())
	}
}

/// An integral constant together with its declared kind.
///
/// The value always fits the kind; construction goes through [`IntegerValue::new`]
/// or one of the lossless `From` conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawIntegerValue", into = "RawIntegerValue")]
pub struct IntegerValue {
	kind: IntegerKind,
	value: i128,
}

impl IntegerValue {
	/// Create a value of `kind`, rejecting values outside its range.
	pub fn new(kind: IntegerKind, value: i128) -> Result<Self> {
		let (min, max) = kind.bounds();
		if value < min || value > max {
			return Err(RenderError::IntegerOutOfRange { kind, value });
		}
		Ok(Self { kind, value })
	}

	/// Declared kind.
	pub fn kind(&self) -> IntegerKind {
		self.kind
	}

	/// Numeric value.
	pub fn value(&self) -> i128 {
		self.value
	}

	/// Reinterpret the value under another kind, if it fits.
	pub fn convert(self, kind: IntegerKind) -> Result<Self> {
		Self::new(kind, self.value)
	}
}

macro_rules! integer_from {
	($($ty:ty => $kind:ident),+ $(,)?) => {
		$(
			impl From<$ty> for IntegerValue {
				fn from(value: $ty) -> Self {
					Self {
						kind: IntegerKind::$kind,
						value: value.into(),
					}
				}
			}

			impl From<$ty> for ConstantValue {
				fn from(value: $ty) -> Self {
					Self::Integer(value.into())
				}
			}
		)+
	};
}

integer_from! {
	i8 => I8,
	u8 => U8,
	i16 => I16,
	u16 => U16,
	i32 => I32,
	u32 => U32,
	i64 => I64,
	u64 => U64,
}

/// Wire form of an [`IntegerValue`].
///
/// The kind is given either by name (`"kind": "u16"`) or as a `width`/`signed` pair.
#[derive(Serialize, Deserialize)]
struct RawIntegerValue {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	kind: Option<IntegerKind>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	width: Option<u8>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	signed: Option<bool>,
	value: i128,
}

impl RawIntegerValue {
	fn resolve_kind(&self) -> Result<IntegerKind> {
		let from_width = match (self.width, self.signed) {
			(Some(width), Some(signed)) => Some(
				IntegerKind::from_width(width, signed).ok_or_else(|| {
					RenderError::unsupported("integer", format!("no {width}-bit integer kind"))
				})?,
			),
			(None, None) => None,
			_ => {
				return Err(RenderError::unsupported(
					"integer",
					"width and signed must be given together",
				));
			}
		};
		match (self.kind, from_width) {
			(Some(kind), Some(other)) if kind != other => Err(RenderError::unsupported(
				"integer",
				format!("kind {kind} contradicts width {}", other.width()),
			)),
			(Some(kind), _) | (None, Some(kind)) => Ok(kind),
			(None, None) => Err(RenderError::unsupported("integer", "missing integer kind")),
		}
	}
}

impl TryFrom<RawIntegerValue> for IntegerValue {
	type Error = RenderError;

	fn try_from(raw: RawIntegerValue) -> Result<Self> {
		Self::new(raw.resolve_kind()?, raw.value)
	}
}

impl From<IntegerValue> for RawIntegerValue {
	fn from(value: IntegerValue) -> Self {
		Self {
			kind: Some(value.kind),
			width: None,
			signed: None,
			value: value.value,
		}
	}
}

/// An enum type with its declared members in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumType {
	/// Canonical type text used for member access and casts.
	pub name: String,
	/// Underlying integral kind.
	pub underlying: IntegerKind,
	/// Declared members and their constant values.
	#[serde(default)]
	pub members: Vec<EnumMember>,
}

/// A named member of an [`EnumType`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumMember {
	/// Member identifier.
	pub name: String,
	/// Member constant.
	pub value: IntegerValue,
}

impl EnumType {
	/// Create an enum type with no members.
	pub fn new(name: impl Into<String>, underlying: IntegerKind) -> Self {
		Self {
			name: name.into(),
			underlying,
			members: Vec::new(),
		}
	}

	/// Append a member. Values outside the underlying kind are rejected.
	pub fn with_member(mut self, name: impl Into<String>, value: i128) -> Result<Self> {
		let value = IntegerValue::new(self.underlying, value)?;
		self.members.push(EnumMember {
			name: name.into(),
			value,
		});
		Ok(self)
	}

	/// First member, in declaration order, whose value equals `value`.
	pub fn member_for(&self, value: i128) -> Option<&EnumMember> {
		self.members.iter().find(|member| member.value.value() == value)
	}
}

/// A semantic constant as supplied by attribute arguments and default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstantValue {
	/// The absence of a value.
	Null,
	/// `true` or `false`.
	Bool(bool),
	/// A character. Only Basic Multilingual Plane characters have a `char` literal.
	Char(char),
	/// A string.
	String(String),
	/// An integral value of a specific width.
	Integer(IntegerValue),
	/// A 32-bit float.
	Float32(f32),
	/// A 64-bit float.
	Float64(f64),
	/// A 128-bit decimal with its scale.
	///
	/// Encoded as a string (`"19.90"`); JSON numbers are rejected because they cannot carry
	/// the scale.
	Decimal(#[serde(with = "rust_decimal::serde::str")] Decimal),
	/// A value of an enum type.
	EnumMember {
		/// The enum type, including its members.
		enum_type: EnumType,
		/// Underlying value.
		value: IntegerValue,
	},
	/// A `typeof` reference.
	TypeLiteral(TypeReference),
	/// An array of constants.
	Array {
		/// Element type of the created array.
		element_type: TypeReference,
		/// Elements in order.
		elements: Vec<ConstantValue>,
	},
}

impl ConstantValue {
	/// Short name of the constant shape, used in diagnostics.
	pub fn kind_name(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "bool",
			Self::Char(_) => "char",
			Self::String(_) => "string",
			Self::Integer(_) => "integer",
			Self::Float32(_) => "float",
			Self::Float64(_) => "double",
			Self::Decimal(_) => "decimal",
			Self::EnumMember { .. } => "enum",
			Self::TypeLiteral(_) => "typeof",
			Self::Array { .. } => "array",
		}
	}

	/// Build an enum constant.
	pub fn enum_member(enum_type: EnumType, value: IntegerValue) -> Self {
		Self::EnumMember { enum_type, value }
	}

	/// Build an array constant.
	pub fn array(element_type: TypeReference, elements: Vec<ConstantValue>) -> Self {
		Self::Array {
			element_type,
			elements,
		}
	}
}

impl From<bool> for ConstantValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<char> for ConstantValue {
	fn from(value: char) -> Self {
		Self::Char(value)
	}
}

impl From<&str> for ConstantValue {
	fn from(value: &str) -> Self {
		Self::String(value.to_string())
	}
}

impl From<String> for ConstantValue {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl From<f32> for ConstantValue {
	fn from(value: f32) -> Self {
		Self::Float32(value)
	}
}

impl From<f64> for ConstantValue {
	fn from(value: f64) -> Self {
		Self::Float64(value)
	}
}

impl From<Decimal> for ConstantValue {
	fn from(value: Decimal) -> Self {
		Self::Decimal(value)
	}
}

impl From<IntegerValue> for ConstantValue {
	fn from(value: IntegerValue) -> Self {
		Self::Integer(value)
	}
}

/// Loose, unescaped text for a constant.
///
/// This is the best-effort fallback form. It is not guaranteed to be a valid C# expression.
impl fmt::Display for ConstantValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Null => f.write_str("null"),
			Self::Bool(value) => write!(f, "{value}"),
			Self::Char(value) => write!(f, "'{value}'"),
			Self::String(value) => write!(f, "\"{value}\""),
			Self::Integer(value) => write!(f, "{}", value.value()),
			Self::Float32(value) => write!(f, "{value}"),
			Self::Float64(value) => write!(f, "{value}"),
			Self::Decimal(value) => write!(f, "{value}"),
			Self::EnumMember { enum_type, value } => {
				write!(f, "({})({})", enum_type.name, value.value())
			}
			Self::TypeLiteral(ty) => write!(f, "typeof({})", ty.name),
			Self::Array { elements, .. } => {
				let elements = elements
					.iter()
					.map(ToString::to_string)
					.collect::<Vec<_>>()
					.join(", ");
				write!(f, "{{ {elements} }}")
			}
		}
	}
}
