use crate::map::{Element, Kind, Map, MapError, Result, Value};

fn samples() -> Vec<(Kind, Value)> {
	vec![
		(Kind::Bool, Value::Bool(true)),
		(Kind::Int, Value::Int(-1)),
		(Kind::Int8, Value::Int8(-8)),
		(Kind::Int16, Value::Int16(-16)),
		(Kind::Int32, Value::Int32(-32)),
		(Kind::Int64, Value::Int64(-64)),
		(Kind::Uint8, Value::Uint8(8)),
		(Kind::Uint16, Value::Uint16(16)),
		(Kind::Uint32, Value::Uint32(32)),
		(Kind::Uint64, Value::Uint64(64)),
		(Kind::Float32, Value::Float32(1.5)),
		(Kind::Float64, Value::Float64(2.5)),
		(Kind::String, Value::from("s")),
	]
}

fn scalar_results(element: &Element<'_>) -> Vec<(Kind, Result<Value>)> {
	vec![
		(Kind::Bool, element.as_bool(None).map(Value::from)),
		(Kind::Int, element.as_int(None).map(Value::from)),
		(Kind::Int8, element.as_int8(None).map(Value::from)),
		(Kind::Int16, element.as_int16(None).map(Value::from)),
		(Kind::Int32, element.as_int32(None).map(Value::from)),
		(Kind::Int64, element.as_int64(None).map(Value::from)),
		(Kind::Uint8, element.as_uint8(None).map(Value::from)),
		(Kind::Uint16, element.as_uint16(None).map(Value::from)),
		(Kind::Uint32, element.as_uint32(None).map(Value::from)),
		(Kind::Uint64, element.as_uint64(None).map(Value::from)),
		(Kind::Float32, element.as_float32(None).map(Value::from)),
		(Kind::Float64, element.as_float64(None).map(Value::from)),
		(Kind::String, element.as_string(None).map(Value::from)),
	]
}

fn slice_results(element: &Element<'_>) -> Vec<(Kind, Result<Value>)> {
	vec![
		(Kind::Bool, element.as_bool_slice(None).map(Value::from)),
		(Kind::Int, element.as_int_slice(None).map(Value::from)),
		(Kind::Int8, element.as_int8_slice(None).map(Value::from)),
		(Kind::Int16, element.as_int16_slice(None).map(Value::from)),
		(Kind::Int32, element.as_int32_slice(None).map(Value::from)),
		(Kind::Int64, element.as_int64_slice(None).map(Value::from)),
		(Kind::Uint8, element.as_uint8_slice(None).map(Value::from)),
		(Kind::Uint16, element.as_uint16_slice(None).map(Value::from)),
		(Kind::Uint32, element.as_uint32_slice(None).map(Value::from)),
		(Kind::Uint64, element.as_uint64_slice(None).map(Value::from)),
		(Kind::Float32, element.as_float32_slice(None).map(Value::from)),
		(Kind::Float64, element.as_float64_slice(None).map(Value::from)),
		(Kind::String, element.as_string_slice(None).map(Value::from)),
	]
}

fn assert_mismatch(result: &Result<Value>, expected: Kind, actual: Kind) {
	match result {
		Err(MapError::TypeMismatch { expected: got_expected, actual: got_actual }) => {
			assert_eq!(got_expected, expected.name());
			assert_eq!(got_actual, actual.name());
		}
		other => panic!("expected type mismatch for {} on {}, got {other:?}", expected.name(), actual.name()),
	}
}

#[test]
fn each_scalar_accessor_matches_only_its_kind() {
	for (stored, sample) in samples() {
		let root: Value = [("v", sample.clone())].into_iter().collect();
		let element = root.resolve(&["v"]);

		for (requested, result) in scalar_results(&element) {
			if requested == stored {
				assert_eq!(result.as_ref().ok(), Some(&sample), "{} accessor", requested.name());
			} else {
				assert_mismatch(&result, requested, stored);
			}
		}
	}
}

#[test]
fn each_slice_accessor_coerces_generic_lists_of_its_kind() {
	for (stored, sample) in samples() {
		let root: Value = [("v", Value::List(vec![sample.clone(), sample.clone()]))].into_iter().collect();
		let element = root.resolve(&["v"]);

		for (requested, result) in slice_results(&element) {
			if requested == stored {
				let Ok(Value::Native(seq)) = &result else {
					panic!("{} slice accessor should succeed, got {result:?}", requested.name());
				};
				assert_eq!(seq.len(), 2);
				assert_eq!(seq.type_name(), format!("list<{}>", stored.name()));
			} else {
				assert_mismatch(&result, requested, stored);
			}
		}
	}
}

#[test]
fn every_accessor_reports_missing_path() {
	let root: Value = Map::new().into();
	let element = root.resolve(&["a", "b", "v"]);

	for (kind, result) in scalar_results(&element).into_iter().chain(slice_results(&element)) {
		let err = result.expect_err("missing path without default fails");
		assert_eq!(err.to_string(), "Wrong path a/b/v", "{} accessor", kind.name());
	}
}

#[test]
fn defaults_apply_uniformly() {
	let root: Value = [("s", Value::from("text"))].into_iter().collect();
	let wrong = root.resolve(&["s"]);
	let missing = root.resolve(&["nope"]);

	for element in [&wrong, &missing] {
		assert_eq!(element.as_bool(Some(true)).expect("default"), true);
		assert_eq!(element.as_int(Some(42)).expect("default"), 42);
		assert_eq!(element.as_int64(Some(-1)).expect("default"), -1);
		assert_eq!(element.as_uint16(Some(7)).expect("default"), 7);
		assert_eq!(element.as_float32(Some(0.5)).expect("default"), 0.5);
		assert_eq!(element.as_int_slice(Some(vec![42])).expect("default"), vec![42]);
		assert_eq!(element.as_uint8_slice(Some(vec![1, 2])).expect("default"), vec![1, 2]);
		assert_eq!(element.as_map(Some(Map::new())).expect("default"), Map::new());
	}

	assert_eq!(missing.as_string(Some("42".to_owned())).expect("default"), "42");
	assert_eq!(wrong.as_string(Some("42".to_owned())).expect("stored value wins"), "text");
}

#[test]
fn map_accessors_accept_native_and_generic_sequences() {
	let inner: Map = [("key1".to_owned(), Value::Int(1)), ("key2".to_owned(), Value::from("2"))].into_iter().collect();
	let root: Value = [
		("native", Value::from(vec![inner.clone()])),
		("generic", Value::List(vec![Value::Map(inner.clone())])),
		("bad", Value::List(vec![Value::Map(inner.clone()), Value::Int(3)])),
	]
	.into_iter()
	.collect();

	assert_eq!(root.resolve(&["native"]).as_map_slice(None).expect("native maps"), vec![inner.clone()]);
	assert_eq!(root.resolve(&["generic"]).as_map_slice(None).expect("generic maps"), vec![inner]);

	let err = root.resolve(&["bad"]).as_map_slice(None).expect_err("int element is not a map");
	assert_eq!(err.to_string(), "Wrong type: expected map actual int");
}
