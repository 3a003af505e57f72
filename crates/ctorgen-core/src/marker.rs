/// Method name used when the generate marker does not name one.
pub const DEFAULT_METHOD_NAME: &str = "Of";

/// Resolve the generated method name from the generate marker's argument.
///
/// Absent or blank arguments fall back to `default`; anything else is used trimmed.
pub fn resolve_method_name<'a>(argument: Option<&'a str>, default: &'a str) -> &'a str {
	match argument.map(str::trim) {
		Some(name) if !name.is_empty() => name,
		_ => default,
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn falls_back_for_missing_or_blank() {
		assert_eq!(resolve_method_name(None, DEFAULT_METHOD_NAME), "Of");
		assert_eq!(resolve_method_name(Some(""), DEFAULT_METHOD_NAME), "Of");
		assert_eq!(resolve_method_name(Some(" \t"), DEFAULT_METHOD_NAME), "Of");
	}

	#[test]
	fn uses_trimmed_argument() {
		assert_eq!(resolve_method_name(Some(" Create "), DEFAULT_METHOD_NAME), "Create");
	}

	proptest! {
		#[test]
		fn never_blank(argument in proptest::option::of("\\PC*")) {
			let name = resolve_method_name(argument.as_deref(), DEFAULT_METHOD_NAME);
			prop_assert!(!name.trim().is_empty());
		}
	}
}
