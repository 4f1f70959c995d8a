use super::*;
use crate::render::{SCALAR, SLICE};

#[test]
fn renders_one_item_per_kind() {
	let scalar = render(&SCALAR, &Kind::ALL).expect("scalar template renders");
	let slice = render(&SLICE, &Kind::ALL).expect("slice template renders");

	for kind in Kind::ALL {
		assert!(scalar.contains(&format!("pub fn as_{}(&self, default: Option<{}>)", kind.name(), kind.rust_type())));
		assert!(slice.contains(&format!("pub fn as_{}_slice(&self, default: Option<Vec<{}>>)", kind.name(), kind.rust_type())));
	}
	assert_eq!(scalar.matches("pub fn ").count(), 13);
	assert_eq!(slice.matches("pub fn ").count(), 13);
}

#[test]
fn int_kind_maps_to_isize() {
	let scalar = render(&SCALAR, &[Kind::Int]).expect("scalar template renders");
	assert!(scalar.contains("self.extract::<isize>(default)"));
	assert!(scalar.starts_with("// @generated by dynpath_accessor_gen from templates/scalar.rs.in"));
	assert!(scalar.ends_with("}\n}\n"));
}

#[test]
fn unknown_placeholder_is_rejected() {
	let broken = Template {
		name: "broken.rs.in",
		body: "\tpub fn as_{kind}(&self) -> {kinds} {\n\t}\n",
		output: "broken.rs",
	};

	let err = render(&broken, &Kind::ALL).expect_err("unknown placeholder should fail");
	let msg = err.to_string();
	assert!(msg.contains("{kinds}"), "unexpected error message: {msg}");
}

#[test]
fn checked_in_accessors_are_current() {
	let out_dir = dynpath_testkit::workspace_root().join(ACCESSOR_DIR);
	for template in &TEMPLATES {
		let path = out_dir.join(template.output);
		let outcome = sync_file(template, &path, true).expect("generated file is readable");
		assert_eq!(outcome, FileOutcome::Unchanged, "{} is stale; rerun dynpath_accessor_gen", path.display());
	}
}
