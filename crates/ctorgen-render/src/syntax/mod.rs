mod argument;
mod attribute;
mod literal;
mod name;
mod parameter;

pub use argument::render_argument;
pub use attribute::{render_attribute, render_attributes};
pub use literal::{
	render_char, render_decimal, render_enum_value, render_float32, render_float64,
	render_integer, render_string, render_type_literal, resolve_literal,
};
pub use name::{is_reserved_word, normalize_binding_name, render_binding_name};
pub use parameter::{render_default, render_modifier, render_parameter};
