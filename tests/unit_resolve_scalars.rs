#![allow(missing_docs)]

use dynpath::map::{MapError, Value};

fn basic() -> Value {
	[
		("v1", Value::Int(1)),
		("elt", [("v2", Value::Int(2))].into_iter().collect()),
		("vs", Value::from("test")),
		("vb", Value::Bool(true)),
	]
	.into_iter()
	.collect()
}

#[test]
fn exists_follows_nested_keys() {
	let m = basic();
	assert!(m.exists(&["v1"]));
	assert!(!m.exists(&["v2"]));
	assert!(m.exists(&["elt", "v2"]));
	assert!(!m.exists(&["elt", "v3"]));
	assert!(!m.exists(&[]));
}

#[test]
fn int_accessor_with_and_without_default() {
	let m = basic();

	assert_eq!(m.resolve(&["v1"]).as_int(Some(42)).expect("v1 is int"), 1);
	assert_eq!(m.resolve(&["elt", "v2"]).as_int(Some(42)).expect("elt/v2 is int"), 2);
	assert_eq!(m.resolve(&["a", "b", "v"]).as_int(Some(42)).expect("default applies"), 42);

	let err = m.resolve(&["a", "b", "v"]).as_int(None).expect_err("missing path fails");
	assert_eq!(err.to_string(), "Wrong path a/b/v");
	let MapError::PathNotFound { path } = err else {
		panic!("expected path-not-found error");
	};
	assert_eq!(path, vec!["a", "b", "v"]);
}

#[test]
fn string_accessor_prefers_stored_value() {
	let m = basic();

	assert_eq!(m.resolve(&["vs"]).as_string(Some("42".to_owned())).expect("vs is string"), "test");
	assert_eq!(m.resolve(&["vs2"]).as_string(Some("42".to_owned())).expect("default applies"), "42");

	let err = m.resolve(&["vs2"]).as_string(None).expect_err("missing path fails");
	assert_eq!(err.to_string(), "Wrong path vs2");
}

#[test]
fn bool_accessor_reads_flag() {
	let m = basic();
	assert!(m.resolve(&["vb"]).as_bool(None).expect("vb is bool"));
}

#[test]
fn wrong_type_without_default_names_both_types() {
	let m = basic();

	let err = m.resolve(&["vs"]).as_bool(None).expect_err("string is not bool");
	assert_eq!(err.to_string(), "Wrong type: expected bool actual string");

	let err = m.resolve(&["elt"]).as_int64(None).expect_err("map is not int64");
	assert_eq!(err.to_string(), "Wrong type: expected int64 actual map");

	let err = m.resolve(&["v1"]).as_int64(None).expect_err("int is not int64");
	assert!(matches!(err, MapError::TypeMismatch { .. }));
}

#[test]
fn wrong_type_with_default_falls_back() {
	let m = basic();
	assert_eq!(m.resolve(&["vs"]).as_int(Some(42)).expect("default applies"), 42);
	assert_eq!(m.resolve(&["v1"]).as_int32(Some(7)).expect("default applies"), 7);
}

#[test]
fn continued_resolution_matches_direct_lookup() {
	let m = basic();
	let elt = m.resolve(&["elt"]);
	assert_eq!(elt.resolve(&["v2"]).as_int(None).expect("elt/v2 is int"), 2);

	let err = elt.resolve(&["v3"]).as_int(None).expect_err("missing leaf fails");
	assert_eq!(err.to_string(), "Wrong path elt/v3");
}
