//! Generic coercion routines behind every typed accessor.

use crate::map::{Element, Kind, Map, MapError, NativeSeq, Result, Value};

mod sealed {
	pub trait Sealed {}
}

/// Per-type conversion table consulted by [`Element::extract`] and
/// [`Element::extract_slice`].
///
/// Matching is exact: a stored `int64` never satisfies a request for `int32`.
pub trait Extract: sealed::Sealed + Sized + Clone {
	/// Type label used in mismatch errors.
	const TYPE_NAME: &'static str;

	/// Take a scalar value of exactly this type.
	fn extract(value: &Value) -> Option<Self>;

	/// Take a native sequence already holding this type.
	fn extract_native(seq: &NativeSeq) -> Option<Vec<Self>>;

	/// Take a raw byte blob. Only `u8` accepts one.
	fn extract_bytes(bytes: &[u8]) -> Option<Vec<Self>>;
}

macro_rules! impl_extract {
	($ty:ty, $variant:ident) => {
		impl_extract!($ty, $variant, |_bytes| None);
	};
	($ty:ty, $variant:ident, |$bytes:ident| $from_bytes:expr) => {
		impl sealed::Sealed for $ty {}

		impl Extract for $ty {
			const TYPE_NAME: &'static str = Kind::$variant.name();

			fn extract(value: &Value) -> Option<Self> {
				match value {
					Value::$variant(inner) => Some(inner.clone()),
					_ => None,
				}
			}

			fn extract_native(seq: &NativeSeq) -> Option<Vec<Self>> {
				match seq {
					NativeSeq::$variant(items) => Some(items.clone()),
					_ => None,
				}
			}

			fn extract_bytes($bytes: &[u8]) -> Option<Vec<Self>> {
				$from_bytes
			}
		}
	};
}

impl_extract!(bool, Bool);
impl_extract!(isize, Int);
impl_extract!(i8, Int8);
impl_extract!(i16, Int16);
impl_extract!(i32, Int32);
impl_extract!(i64, Int64);
impl_extract!(u8, Uint8, |bytes| Some(bytes.to_vec()));
impl_extract!(u16, Uint16);
impl_extract!(u32, Uint32);
impl_extract!(u64, Uint64);
impl_extract!(f32, Float32);
impl_extract!(f64, Float64);
impl_extract!(String, String);

impl sealed::Sealed for Map {}

impl Extract for Map {
	const TYPE_NAME: &'static str = "map";

	fn extract(value: &Value) -> Option<Self> {
		value.as_map_ref().cloned()
	}

	fn extract_native(seq: &NativeSeq) -> Option<Vec<Self>> {
		match seq {
			NativeSeq::Map(items) => Some(items.clone()),
			_ => None,
		}
	}

	fn extract_bytes(_bytes: &[u8]) -> Option<Vec<Self>> {
		None
	}
}

impl Element<'_> {
	/// Extract the value as `T`.
	///
	/// `default` is returned when the path is missing or the value has another type;
	/// without one those cases fail with [`MapError::PathNotFound`] and
	/// [`MapError::TypeMismatch`].
	pub fn extract<T: Extract>(&self, default: Option<T>) -> Result<T> {
		let Some(value) = self.value() else {
			return default.ok_or_else(|| MapError::path_not_found(self.path()));
		};

		match T::extract(value) {
			Some(found) => Ok(found),
			None => default.ok_or_else(|| MapError::type_mismatch(T::TYPE_NAME, value.type_name())),
		}
	}

	/// Extract the value as a sequence of `T`, with the same default policy as
	/// [`Element::extract`].
	///
	/// A native sequence of `T` (or a byte blob for `u8`) is returned as is. A generic list is
	/// coerced element by element and the first mismatching element fails the whole call.
	pub fn extract_slice<T: Extract>(&self, default: Option<Vec<T>>) -> Result<Vec<T>> {
		let Some(value) = self.value() else {
			return default.ok_or_else(|| MapError::path_not_found(self.path()));
		};

		match coerce_slice::<T>(value) {
			Ok(items) => Ok(items),
			Err(err) => default.ok_or(err),
		}
	}
}

fn coerce_slice<T: Extract>(value: &Value) -> Result<Vec<T>> {
	let fast = match value {
		Value::Native(seq) => T::extract_native(seq),
		Value::Bytes(bytes) => T::extract_bytes(bytes),
		Value::List(items) => return items.iter().map(coerce_element::<T>).collect(),
		_ => None,
	};

	fast.ok_or_else(|| MapError::type_mismatch(format!("list<{}>", T::TYPE_NAME), value.type_name()))
}

fn coerce_element<T: Extract>(item: &Value) -> Result<T> {
	T::extract(item).ok_or_else(|| MapError::type_mismatch(T::TYPE_NAME, item.type_name()))
}
