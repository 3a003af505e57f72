use std::fmt::{self, Write as _};

use rust_decimal::Decimal;

use crate::constant::{ConstantValue, EnumType, IntegerKind, IntegerValue};
use crate::descriptor::{NULLABLE_MARKER, TypeKind, TypeReference};
use crate::error::{RenderError, Result};

/// Smallest decimal exponent printed in positional notation.
const MIN_PLAIN_EXPONENT: i32 = -5;
/// Largest decimal exponent printed in positional notation.
const MAX_PLAIN_EXPONENT: i32 = 15;

/// Resolve a constant into its canonical C# literal text.
///
/// Every literal re-parses to exactly the value it was produced from: integers carry the
/// suffix of their kind, floats print the shortest round-trip digits, decimals keep their
/// scale and enum values resolve to a declared member or an explicit cast.
pub fn resolve_literal(value: &ConstantValue) -> Result<String> {
	match value {
		ConstantValue::Null => Ok("null".to_string()),
		ConstantValue::Bool(value) => Ok(value.to_string()),
		ConstantValue::Char(value) => render_char(*value),
		ConstantValue::String(value) => Ok(render_string(value)),
		ConstantValue::Integer(value) => Ok(render_integer(*value)),
		ConstantValue::Float32(value) => Ok(render_float32(*value)),
		ConstantValue::Float64(value) => Ok(render_float64(*value)),
		ConstantValue::Decimal(value) => Ok(render_decimal(value)),
		ConstantValue::EnumMember { enum_type, value } => render_enum_value(enum_type, *value),
		ConstantValue::TypeLiteral(ty) => Ok(render_type_literal(ty)),
		ConstantValue::Array {
			element_type,
			elements,
		} => {
			let elements = elements
				.iter()
				.map(resolve_literal)
				.collect::<Result<Vec<_>>>()?;
			if elements.is_empty() {
				Ok(format!("new {}[] {{ }}", element_type.name))
			} else {
				Ok(format!(
					"new {}[] {{ {} }}",
					element_type.name,
					elements.join(", ")
				))
			}
		}
	}
}

/// Render a `char` literal. Characters outside the Basic Multilingual Plane are rejected.
pub fn render_char(value: char) -> Result<String> {
	if u32::from(value) > 0xFFFF {
		return Err(RenderError::unsupported(
			"char",
			format!(
				"U+{:04X} is outside the Basic Multilingual Plane",
				u32::from(value)
			),
		));
	}
	let mut out = String::with_capacity(3);
	out.push('\'');
	push_escaped(&mut out, value, '\'');
	out.push('\'');
	Ok(out)
}

/// Render a regular (non-verbatim) string literal.
pub fn render_string(value: &str) -> String {
	let mut out = String::with_capacity(value.len() + 2);
	out.push('"');
	for ch in value.chars() {
		push_escaped(&mut out, ch, '"');
	}
	out.push('"');
	out
}

/// Push `ch`, escaping the delimiter, backslash and the characters a regular literal
/// cannot hold raw.
fn push_escaped(out: &mut String, ch: char, quote: char) {
	match ch {
		'\\' => out.push_str("\\\\"),
		'\0' => out.push_str("\\0"),
		'\r' => out.push_str("\\r"),
		'\n' => out.push_str("\\n"),
		'\u{0085}' | '\u{2028}' | '\u{2029}' => {
			let _ = write!(out, "\\u{:04X}", u32::from(ch));
		}
		_ if ch == quote => {
			out.push('\\');
			out.push(ch);
		}
		_ => out.push(ch),
	}
}

/// Render an integer so that it keeps its kind in any position, `object` included.
///
/// `int` is plain digits; `uint`, `long` and `ulong` carry `U`, `L` and `UL`. C# has no
/// suffix for `sbyte`, `byte`, `short` or `ushort`, so those are cast: `(byte)255`,
/// `(sbyte)(-128)`.
pub fn render_integer(value: IntegerValue) -> String {
	let digits = integer_digits(value);
	match value.kind() {
		IntegerKind::I8 | IntegerKind::U8 | IntegerKind::I16 | IntegerKind::U16 => {
			if value.value() < 0 {
				format!("({})({digits})", value.kind().keyword())
			} else {
				format!("({}){digits}", value.kind().keyword())
			}
		}
		IntegerKind::I32 | IntegerKind::U32 | IntegerKind::I64 | IntegerKind::U64 => digits,
	}
}

/// Digits plus the suffix of the wide kinds, without any cast.
fn integer_digits(value: IntegerValue) -> String {
	let suffix = match value.kind() {
		IntegerKind::U32 => "U",
		IntegerKind::I64 => "L",
		IntegerKind::U64 => "UL",
		IntegerKind::I8
		| IntegerKind::U8
		| IntegerKind::I16
		| IntegerKind::U16
		| IntegerKind::I32 => "",
	};
	format!("{}{suffix}", value.value())
}

/// Render `typeof(T)`.
///
/// A trailing `?` on a reference type is an annotation `typeof` rejects, so it is dropped;
/// on a value type it names `Nullable<T>` and is kept.
pub fn render_type_literal(ty: &TypeReference) -> String {
	let name = match ty.kind {
		TypeKind::Reference => ty.name.strip_suffix(NULLABLE_MARKER).unwrap_or(&ty.name),
		TypeKind::Value | TypeKind::Enum(_) => ty.name.as_str(),
	};
	format!("typeof({name})")
}

/// Render a 32-bit float.
pub fn render_float32(value: f32) -> String {
	if value.is_nan() {
		"float.NaN".to_string()
	} else if value.is_infinite() {
		if value.is_sign_positive() {
			"float.PositiveInfinity".to_string()
		} else {
			"float.NegativeInfinity".to_string()
		}
	} else {
		format!("{}F", real_digits(value))
	}
}

/// Render a 64-bit float.
pub fn render_float64(value: f64) -> String {
	if value.is_nan() {
		"double.NaN".to_string()
	} else if value.is_infinite() {
		if value.is_sign_positive() {
			"double.PositiveInfinity".to_string()
		} else {
			"double.NegativeInfinity".to_string()
		}
	} else {
		format!("{}D", real_digits(value))
	}
}

/// Shortest round-trip digits of a finite float, switching to exponent form for very large
/// or very small magnitudes.
fn real_digits<T: fmt::Display + fmt::LowerExp>(value: T) -> String {
	let scientific = format!("{value:e}");
	let exponent = scientific
		.rsplit_once('e')
		.and_then(|(_, exponent)| exponent.parse::<i32>().ok())
		.unwrap_or(0);
	if (MIN_PLAIN_EXPONENT..=MAX_PLAIN_EXPONENT).contains(&exponent) {
		value.to_string()
	} else {
		scientific.replace('e', "E")
	}
}

/// Render a decimal, keeping its scale and the sign of negative zero.
pub fn render_decimal(value: &Decimal) -> String {
	let sign = if value.is_sign_negative() { "-" } else { "" };
	format!("{sign}{}M", value.abs())
}

/// Render an enum value as `Type.Member`, or as `(Type)(value)` when no member matches.
pub fn render_enum_value(enum_type: &EnumType, value: IntegerValue) -> Result<String> {
	let value = value.convert(enum_type.underlying).map_err(|_| {
		RenderError::unsupported(
			"enum",
			format!(
				"{} does not fit the underlying {} of {}",
				value.value(),
				enum_type.underlying,
				enum_type.name
			),
		)
	})?;
	match enum_type.member_for(value.value()) {
		Some(member) => Ok(format!("{}.{}", enum_type.name, member.name)),
		None => Ok(format!("({})({})", enum_type.name, integer_digits(value))),
	}
}
