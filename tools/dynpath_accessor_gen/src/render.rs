use dynpath::map::Kind;

use crate::DynError;

/// One accessor template and the file it renders into.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Template {
	/// Template file name under `templates/`.
	pub name: &'static str,
	/// Per-kind item body with `{kind}` and `{rust}` placeholders.
	pub body: &'static str,
	/// Output file name under `src/map/accessors/`.
	pub output: &'static str,
}

pub(crate) const SCALAR: Template = Template {
	name: "scalar.rs.in",
	body: include_str!("../templates/scalar.rs.in"),
	output: "scalar.rs",
};

pub(crate) const SLICE: Template = Template {
	name: "slice.rs.in",
	body: include_str!("../templates/slice.rs.in"),
	output: "slice.rs",
};

pub(crate) const TEMPLATES: [Template; 2] = [SCALAR, SLICE];

/// Render `template` once per kind into a complete source file.
pub(crate) fn render(template: &Template, kinds: &[Kind]) -> Result<String, DynError> {
	let mut out = format!(
		"// @generated by dynpath_accessor_gen from templates/{}; do not edit.\n\nuse crate::map::{{Element, Result}};\n\nimpl Element<'_> {{\n",
		template.name
	);

	for (idx, kind) in kinds.iter().enumerate() {
		tracing::debug!(template = template.name, kind = kind.name(), "generate");
		let item = template.body.replace("{kind}", kind.name()).replace("{rust}", kind.rust_type());
		if let Some(placeholder) = find_placeholder(&item) {
			return Err(format!("template {} has unknown placeholder {placeholder}", template.name).into());
		}

		if idx > 0 {
			out.push('\n');
		}
		out.push_str(&item);
	}

	out.push_str("}\n");
	Ok(out)
}

/// Find a leftover `{ident}` placeholder.
fn find_placeholder(text: &str) -> Option<&str> {
	let bytes = text.as_bytes();
	let mut idx = 0_usize;

	while idx < bytes.len() {
		if bytes[idx] != b'{' {
			idx += 1;
			continue;
		}

		let start = idx;
		idx += 1;
		while idx < bytes.len() && (bytes[idx].is_ascii_alphanumeric() || bytes[idx] == b'_') {
			idx += 1;
		}
		if idx > start + 1 && idx < bytes.len() && bytes[idx] == b'}' {
			return Some(&text[start..=idx]);
		}
	}

	None
}
