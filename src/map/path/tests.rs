use crate::map::{KeyPath, MapError};

#[test]
fn parses_nested_keys() {
	let path = KeyPath::parse("elt/v2").expect("path parses");
	assert_eq!(path.keys, vec!["elt".to_owned(), "v2".to_owned()]);
	assert_eq!(path.as_keys(), vec!["elt", "v2"]);
	assert_eq!(path.to_string(), "elt/v2");
}

#[test]
fn keeps_keys_verbatim() {
	let path = KeyPath::parse("with space/dotted.key").expect("path parses");
	assert_eq!(path.as_keys(), vec!["with space", "dotted.key"]);
}

#[test]
fn rejects_empty_segments() {
	for input in ["", "/a", "a/", "a//b"] {
		let err = KeyPath::parse(input).expect_err("empty segment should fail");
		assert!(matches!(err, MapError::InvalidKeyPath { ref path } if path == input), "unexpected error for {input:?}: {err}");
	}
}
