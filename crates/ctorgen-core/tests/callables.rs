//! Integration tests rendering whole callables from JSON descriptors.
use std::path::PathBuf;

use ctorgen_core::{Ctorgen, CtorgenError, FallbackMode, ParameterErrorPolicy, Renderer};
use pretty_assertions::assert_eq;

/// Load a JSON callable fixture from the tests/fixtures directory.
fn load_fixture(name: &str) -> String {
	let fixture_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
		.join("tests")
		.join("fixtures")
		.join(format!("{name}.json"));
	std::fs::read_to_string(&fixture_path)
		.unwrap_or_else(|_| panic!("Failed to read fixture at {}", fixture_path.display()))
}

#[test]
fn widget_fixture() {
	let rendered = Ctorgen::new().render_json(&load_fixture("widget")).unwrap();
	assert_eq!(rendered.method_name, "Create");
	let expected = [
		r#"[global::System.Diagnostics.CodeAnalysis.NotNullAttribute] string name = "Bob""#,
		"global::Demo.Color tint = global::Demo.Color.Green",
		"long? limit = null",
		"global::System.DateTime origin = default",
		concat!(
			"[global::Demo.RangeAttribute(0.5D, typeof(decimal), Inclusive = true)] ",
			"decimal price = 19.90M",
		),
		"ref global::System.IntPtr handle",
		"params string[] tags",
	];
	assert_eq!(rendered.parameters, expected.join(", "));
	assert_eq!(
		rendered.arguments,
		"name, tint, limit, origin, price, ref handle, tags"
	);
}

#[test]
fn out_parameter_with_default_aborts() {
	let err = Ctorgen::new()
		.render_json(&load_fixture("out_with_default"))
		.unwrap_err();
	assert!(matches!(err, CtorgenError::Parameter { ref parameter, .. } if parameter == "Result"));
	assert_eq!(
		err.to_string(),
		"parameter 'Result': parameter 'Result' is passed as out and cannot have a default value"
	);
}

#[test]
fn out_parameter_with_default_can_be_skipped() {
	let rendered = Ctorgen::new()
		.with_error_policy(ParameterErrorPolicy::Skip)
		.render_json(&load_fixture("out_with_default"))
		.unwrap();
	assert_eq!(rendered.parameters, "");
	assert_eq!(rendered.skipped, vec!["Result".to_string()]);
}

#[test]
fn decimal_string_keeps_scale() {
	let rendered = Ctorgen::new()
		.render_json(&load_fixture("decimal_string"))
		.unwrap();
	assert_eq!(rendered.parameters, "decimal price = 19.90M, decimal rate = 0.000M");
}

#[test]
fn decimal_number_is_rejected() {
	let err = Ctorgen::new()
		.render_json(&load_fixture("decimal_number"))
		.unwrap_err();
	assert!(matches!(err, CtorgenError::Serialization(_)));
}

#[test]
fn malformed_json_is_a_serialization_error() {
	let err = Ctorgen::new().render_json("{ \"parameters\": 3 }").unwrap_err();
	assert!(matches!(err, CtorgenError::Serialization(_)));
}

#[test]
fn out_of_range_integer_is_rejected_while_decoding() {
	let json = r#"{ "parameters": [ {
		"name": "Small",
		"type": { "name": "byte", "kind": "value" },
		"default_value": { "integer": { "kind": "u8", "value": 256 } }
	} ] }"#;
	let err = Ctorgen::new().render_json(json).unwrap_err();
	assert!(matches!(err, CtorgenError::Serialization(_)));
}

#[test]
fn integer_kind_from_width_and_signedness() {
	let json = r#"{ "parameters": [ {
		"name": "Port",
		"type": { "name": "ushort", "kind": "value" },
		"default_value": { "integer": { "width": 16, "signed": false, "value": 8080 } }
	} ] }"#;
	let rendered = Ctorgen::new().render_json(json).unwrap();
	assert_eq!(rendered.parameters, "ushort port = (ushort)8080");
}

#[test]
fn best_effort_renderer_is_threaded_through() {
	let json = r#"{ "parameters": [ {
		"name": "Glyph",
		"type": { "name": "char", "kind": "value" },
		"default_value": { "char": "😀" }
	} ] }"#;
	assert!(Ctorgen::new().render_json(json).is_err());

	let rendered = Ctorgen::new()
		.with_renderer(Renderer::new().with_fallback(FallbackMode::BestEffort))
		.render_json(json)
		.unwrap();
	assert_eq!(rendered.parameters, "char glyph = '😀'");
}

#[test]
fn callables_render_concurrently() {
	let ctorgen = Ctorgen::new();
	let json = load_fixture("widget");
	let expected = ctorgen.render_json(&json).unwrap();
	std::thread::scope(|scope| {
		let handles: Vec<_> = (0..4)
			.map(|_| scope.spawn(|| ctorgen.render_json(&json).unwrap()))
			.collect();
		for handle in handles {
			assert_eq!(handle.join().unwrap(), expected);
		}
	});
}
