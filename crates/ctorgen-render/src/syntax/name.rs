/// Convert a declared name into the local binding-name convention.
///
/// A leading alphabetic code point is lower-cased; anything else (`_id`, `@class`, `1st`)
/// is returned unchanged.
pub fn normalize_binding_name(name: &str) -> String {
	let mut chars = name.chars();
	match chars.next() {
		Some(first) if first.is_alphabetic() => {
			let mut normalized = String::with_capacity(name.len());
			normalized.extend(first.to_lowercase());
			normalized.push_str(chars.as_str());
			normalized
		}
		_ => name.to_string(),
	}
}

/// Render a binding name, escaping reserved keywords with `@` when `escape` is set.
pub fn render_binding_name(name: &str, escape: bool) -> String {
	let normalized = normalize_binding_name(name);
	if escape && is_reserved_word(&normalized) {
		format!("@{normalized}")
	} else {
		normalized
	}
}

/// Whether `word` is a reserved C# keyword that cannot be used as a bare identifier.
///
/// Contextual keywords (`var`, `value`, `record`, ...) are valid identifiers and are not listed.
pub fn is_reserved_word(word: &str) -> bool {
	matches!(
		word,
		"abstract"
			| "as" | "base"
			| "bool" | "break"
			| "byte" | "case"
			| "catch" | "char"
			| "checked" | "class"
			| "const" | "continue"
			| "decimal" | "default"
			| "delegate" | "do"
			| "double" | "else"
			| "enum" | "event"
			| "explicit" | "extern"
			| "false" | "finally"
			| "fixed" | "float"
			| "for" | "foreach"
			| "goto" | "if"
			| "implicit" | "in"
			| "int" | "interface"
			| "internal" | "is"
			| "lock" | "long"
			| "namespace" | "new"
			| "null" | "object"
			| "operator" | "out"
			| "override" | "params"
			| "private" | "protected"
			| "public" | "readonly"
			| "ref" | "return"
			| "sbyte" | "sealed"
			| "short" | "sizeof"
			| "stackalloc" | "static"
			| "string" | "struct"
			| "switch" | "this"
			| "throw" | "true"
			| "try" | "typeof"
			| "uint" | "ulong"
			| "unchecked" | "unsafe"
			| "ushort" | "using"
			| "virtual" | "void"
			| "volatile" | "while"
	)
}
