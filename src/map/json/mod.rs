//! JSON boundary: serde impls for [`Value`] plus whole-map export and import.

use std::fmt;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::map::{Map, NativeSeq, Result, Value};

impl Serialize for Value {
	fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match self {
			Value::Null => serializer.serialize_unit(),
			Value::Bool(v) => serializer.serialize_bool(*v),
			Value::Int(v) => v.serialize(serializer),
			Value::Int8(v) => serializer.serialize_i8(*v),
			Value::Int16(v) => serializer.serialize_i16(*v),
			Value::Int32(v) => serializer.serialize_i32(*v),
			Value::Int64(v) => serializer.serialize_i64(*v),
			Value::Uint8(v) => serializer.serialize_u8(*v),
			Value::Uint16(v) => serializer.serialize_u16(*v),
			Value::Uint32(v) => serializer.serialize_u32(*v),
			Value::Uint64(v) => serializer.serialize_u64(*v),
			Value::Float32(v) => JsonFloat32(*v).serialize(serializer),
			Value::Float64(v) => JsonFloat64(*v).serialize(serializer),
			Value::String(v) => serializer.serialize_str(v),
			Value::Map(map) => serializer.collect_map(map),
			Value::List(items) => serializer.collect_seq(items),
			Value::Native(seq) => seq.serialize(serializer),
			Value::Bytes(bytes) => serializer.collect_seq(bytes),
		}
	}
}

impl Serialize for NativeSeq {
	fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match self {
			NativeSeq::Bool(items) => items.serialize(serializer),
			NativeSeq::Int(items) => items.serialize(serializer),
			NativeSeq::Int8(items) => items.serialize(serializer),
			NativeSeq::Int16(items) => items.serialize(serializer),
			NativeSeq::Int32(items) => items.serialize(serializer),
			NativeSeq::Int64(items) => items.serialize(serializer),
			NativeSeq::Uint8(items) => items.serialize(serializer),
			NativeSeq::Uint16(items) => items.serialize(serializer),
			NativeSeq::Uint32(items) => items.serialize(serializer),
			NativeSeq::Uint64(items) => items.serialize(serializer),
			NativeSeq::Float32(items) => serializer.collect_seq(items.iter().copied().map(JsonFloat32)),
			NativeSeq::Float64(items) => serializer.collect_seq(items.iter().copied().map(JsonFloat64)),
			NativeSeq::String(items) => items.serialize(serializer),
			NativeSeq::Map(items) => items.serialize(serializer),
		}
	}
}

/// `2^53 - 1`; every integer up to it is exact as `f64`.
const MAX_EXACT_FLOAT_INT: f64 = 9_007_199_254_740_991.0;

/// Whole floats encode as integers (`2`, not `2.0`) so decoded maps still materialize into
/// integer fields. Non-finite floats are written as `null` by serde_json.
struct JsonFloat64(f64);

struct JsonFloat32(f32);

fn is_exact_int(v: f64) -> bool {
	v.is_finite() && v.fract() == 0.0 && v.abs() <= MAX_EXACT_FLOAT_INT
}

impl Serialize for JsonFloat64 {
	fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		if is_exact_int(self.0) {
			return serializer.serialize_i64(self.0 as i64);
		}
		serializer.serialize_f64(self.0)
	}
}

impl Serialize for JsonFloat32 {
	fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		if is_exact_int(f64::from(self.0)) {
			return serializer.serialize_i64(self.0 as i64);
		}
		serializer.serialize_f32(self.0)
	}
}

impl<'de> Deserialize<'de> for Value {
	fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_any(ValueVisitor)
	}
}

/// Decodes arbitrary JSON into its natural dynamic shape: every number becomes
/// [`Value::Float64`], objects become maps and arrays generic lists.
struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
	type Value = Value;

	fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
		formatter.write_str("any valid JSON value")
	}

	fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<Value, E> {
		Ok(Value::Bool(v))
	}

	fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Value, E> {
		Ok(Value::Float64(v as f64))
	}

	fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Value, E> {
		Ok(Value::Float64(v as f64))
	}

	fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Value, E> {
		Ok(Value::Float64(v))
	}

	fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Value, E> {
		Ok(Value::String(v.to_owned()))
	}

	fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<Value, E> {
		Ok(Value::String(v))
	}

	fn visit_none<E: de::Error>(self) -> std::result::Result<Value, E> {
		Ok(Value::Null)
	}

	fn visit_unit<E: de::Error>(self) -> std::result::Result<Value, E> {
		Ok(Value::Null)
	}

	fn visit_some<D>(self, deserializer: D) -> std::result::Result<Value, D::Error>
	where
		D: Deserializer<'de>,
	{
		Value::deserialize(deserializer)
	}

	fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Value, A::Error>
	where
		A: SeqAccess<'de>,
	{
		let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
		while let Some(item) = seq.next_element::<Value>()? {
			items.push(item);
		}
		Ok(Value::List(items))
	}

	fn visit_map<A>(self, mut access: A) -> std::result::Result<Value, A::Error>
	where
		A: MapAccess<'de>,
	{
		let mut map = Map::new();
		while let Some((key, value)) = access.next_entry::<String, Value>()? {
			map.insert(key, value);
		}
		Ok(Value::Map(map))
	}
}

impl Value {
	/// Encode the whole structure as JSON bytes.
	pub fn to_json(&self) -> Result<Vec<u8>> {
		Ok(serde_json::to_vec(self)?)
	}

	/// Decode JSON bytes into a fresh value.
	pub fn from_json(content: &[u8]) -> Result<Self> {
		Ok(serde_json::from_slice(content)?)
	}

	/// Decode a JSON object into this map in place, inserting or overwriting top-level keys.
	///
	/// A non-map receiver is replaced by the decoded map. Input that is not a JSON object fails
	/// and leaves the receiver untouched.
	pub fn load_json(&mut self, content: &[u8]) -> Result<()> {
		let decoded: Map = serde_json::from_slice(content)?;
		match self {
			Value::Map(map) => map.extend(decoded),
			other => *other = Value::Map(decoded),
		}
		Ok(())
	}
}
