use std::collections::BTreeMap;

use crate::map::Kind;

/// String-keyed collection of dynamic values.
pub type Map = BTreeMap<String, Value>;

/// Dynamically typed value stored in a [`Map`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Explicit null marker.
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// Pointer-sized signed integer, distinct from [`Value::Int64`].
	Int(isize),
	/// 8-bit signed integer.
	Int8(i8),
	/// 16-bit signed integer.
	Int16(i16),
	/// 32-bit signed integer.
	Int32(i32),
	/// 64-bit signed integer.
	Int64(i64),
	/// 8-bit unsigned integer.
	Uint8(u8),
	/// 16-bit unsigned integer.
	Uint16(u16),
	/// 32-bit unsigned integer.
	Uint32(u32),
	/// 64-bit unsigned integer.
	Uint64(u64),
	/// 32-bit float.
	Float32(f32),
	/// 64-bit float. JSON decoding yields this for every number.
	Float64(f64),
	/// UTF-8 string.
	String(String),
	/// Nested string-keyed map.
	Map(Map),
	/// Generic sequence; every element carries its own type.
	List(Vec<Value>),
	/// Sequence already homogeneously typed.
	Native(NativeSeq),
	/// Opaque byte blob.
	Bytes(Vec<u8>),
}

/// Homogeneously typed sequence, one variant per element type.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeSeq {
	/// `bool` elements.
	Bool(Vec<bool>),
	/// `isize` elements.
	Int(Vec<isize>),
	/// `i8` elements.
	Int8(Vec<i8>),
	/// `i16` elements.
	Int16(Vec<i16>),
	/// `i32` elements.
	Int32(Vec<i32>),
	/// `i64` elements.
	Int64(Vec<i64>),
	/// `u8` elements.
	Uint8(Vec<u8>),
	/// `u16` elements.
	Uint16(Vec<u16>),
	/// `u32` elements.
	Uint32(Vec<u32>),
	/// `u64` elements.
	Uint64(Vec<u64>),
	/// `f32` elements.
	Float32(Vec<f32>),
	/// `f64` elements.
	Float64(Vec<f64>),
	/// `String` elements.
	String(Vec<String>),
	/// Nested map elements.
	Map(Vec<Map>),
}

impl Value {
	/// Wrap raw bytes as a byte blob rather than a native `uint8` sequence.
	pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
		Self::Bytes(bytes.into())
	}

	/// Type label reported in mismatch errors.
	pub fn type_name(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Map(_) => "map",
			Self::List(_) => "list",
			Self::Native(seq) => seq.type_name(),
			Self::Bytes(_) => "bytes",
			_ => self.kind().map_or("unknown", Kind::name),
		}
	}

	/// Primitive kind for scalar values, `None` for null and containers.
	pub fn kind(&self) -> Option<Kind> {
		let kind = match self {
			Self::Bool(_) => Kind::Bool,
			Self::Int(_) => Kind::Int,
			Self::Int8(_) => Kind::Int8,
			Self::Int16(_) => Kind::Int16,
			Self::Int32(_) => Kind::Int32,
			Self::Int64(_) => Kind::Int64,
			Self::Uint8(_) => Kind::Uint8,
			Self::Uint16(_) => Kind::Uint16,
			Self::Uint32(_) => Kind::Uint32,
			Self::Uint64(_) => Kind::Uint64,
			Self::Float32(_) => Kind::Float32,
			Self::Float64(_) => Kind::Float64,
			Self::String(_) => Kind::String,
			Self::Null | Self::Map(_) | Self::List(_) | Self::Native(_) | Self::Bytes(_) => return None,
		};
		Some(kind)
	}

	/// Borrow the nested map when this value is map-like.
	pub fn as_map_ref(&self) -> Option<&Map> {
		match self {
			Self::Map(map) => Some(map),
			_ => None,
		}
	}
}

impl NativeSeq {
	/// Type label reported in mismatch errors.
	pub fn type_name(&self) -> &'static str {
		match self {
			Self::Bool(_) => "list<bool>",
			Self::Int(_) => "list<int>",
			Self::Int8(_) => "list<int8>",
			Self::Int16(_) => "list<int16>",
			Self::Int32(_) => "list<int32>",
			Self::Int64(_) => "list<int64>",
			Self::Uint8(_) => "list<uint8>",
			Self::Uint16(_) => "list<uint16>",
			Self::Uint32(_) => "list<uint32>",
			Self::Uint64(_) => "list<uint64>",
			Self::Float32(_) => "list<float32>",
			Self::Float64(_) => "list<float64>",
			Self::String(_) => "list<string>",
			Self::Map(_) => "list<map>",
		}
	}

	/// Number of elements.
	pub fn len(&self) -> usize {
		match self {
			Self::Bool(items) => items.len(),
			Self::Int(items) => items.len(),
			Self::Int8(items) => items.len(),
			Self::Int16(items) => items.len(),
			Self::Int32(items) => items.len(),
			Self::Int64(items) => items.len(),
			Self::Uint8(items) => items.len(),
			Self::Uint16(items) => items.len(),
			Self::Uint32(items) => items.len(),
			Self::Uint64(items) => items.len(),
			Self::Float32(items) => items.len(),
			Self::Float64(items) => items.len(),
			Self::String(items) => items.len(),
			Self::Map(items) => items.len(),
		}
	}

	/// Return `true` when the sequence holds no elements.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

macro_rules! impl_from_primitive {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl From<$ty> for Value {
				fn from(value: $ty) -> Self {
					Self::$variant(value)
				}
			}

			impl From<Vec<$ty>> for Value {
				fn from(items: Vec<$ty>) -> Self {
					Self::Native(NativeSeq::$variant(items))
				}
			}
		)*
	};
}

impl_from_primitive!(
	bool => Bool,
	isize => Int,
	i8 => Int8,
	i16 => Int16,
	i32 => Int32,
	i64 => Int64,
	u8 => Uint8,
	u16 => Uint16,
	u32 => Uint32,
	u64 => Uint64,
	f32 => Float32,
	f64 => Float64,
	String => String,
	Map => Map,
);

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.to_owned())
	}
}

impl From<Vec<Value>> for Value {
	fn from(items: Vec<Value>) -> Self {
		Self::List(items)
	}
}

impl From<NativeSeq> for Value {
	fn from(seq: NativeSeq) -> Self {
		Self::Native(seq)
	}
}

/// Collect `(key, value)` pairs into a [`Value::Map`].
impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self::Map(iter.into_iter().map(|(key, value)| (key.into(), value.into())).collect())
	}
}
