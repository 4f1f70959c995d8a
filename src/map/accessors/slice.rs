// @generated by dynpath_accessor_gen from templates/slice.rs.in; do not edit.

use crate::map::{Element, Result};

impl Element<'_> {
	/// Extract the value as a sequence of `bool`; see [`Element::extract_slice`].
	pub fn as_bool_slice(&self, default: Option<Vec<bool>>) -> Result<Vec<bool>> {
		self.extract_slice::<bool>(default)
	}

	/// Extract the value as a sequence of `int`; see [`Element::extract_slice`].
	pub fn as_int_slice(&self, default: Option<Vec<isize>>) -> Result<Vec<isize>> {
		self.extract_slice::<isize>(default)
	}

	/// Extract the value as a sequence of `int8`; see [`Element::extract_slice`].
	pub fn as_int8_slice(&self, default: Option<Vec<i8>>) -> Result<Vec<i8>> {
		self.extract_slice::<i8>(default)
	}

	/// Extract the value as a sequence of `int16`; see [`Element::extract_slice`].
	pub fn as_int16_slice(&self, default: Option<Vec<i16>>) -> Result<Vec<i16>> {
		self.extract_slice::<i16>(default)
	}

	/// Extract the value as a sequence of `int32`; see [`Element::extract_slice`].
	pub fn as_int32_slice(&self, default: Option<Vec<i32>>) -> Result<Vec<i32>> {
		self.extract_slice::<i32>(default)
	}

	/// Extract the value as a sequence of `int64`; see [`Element::extract_slice`].
	pub fn as_int64_slice(&self, default: Option<Vec<i64>>) -> Result<Vec<i64>> {
		self.extract_slice::<i64>(default)
	}

	/// Extract the value as a sequence of `uint8`; see [`Element::extract_slice`].
	pub fn as_uint8_slice(&self, default: Option<Vec<u8>>) -> Result<Vec<u8>> {
		self.extract_slice::<u8>(default)
	}

	/// Extract the value as a sequence of `uint16`; see [`Element::extract_slice`].
	pub fn as_uint16_slice(&self, default: Option<Vec<u16>>) -> Result<Vec<u16>> {
		self.extract_slice::<u16>(default)
	}

	/// Extract the value as a sequence of `uint32`; see [`Element::extract_slice`].
	pub fn as_uint32_slice(&self, default: Option<Vec<u32>>) -> Result<Vec<u32>> {
		self.extract_slice::<u32>(default)
	}

	/// Extract the value as a sequence of `uint64`; see [`Element::extract_slice`].
	pub fn as_uint64_slice(&self, default: Option<Vec<u64>>) -> Result<Vec<u64>> {
		self.extract_slice::<u64>(default)
	}

	/// Extract the value as a sequence of `float32`; see [`Element::extract_slice`].
	pub fn as_float32_slice(&self, default: Option<Vec<f32>>) -> Result<Vec<f32>> {
		self.extract_slice::<f32>(default)
	}

	/// Extract the value as a sequence of `float64`; see [`Element::extract_slice`].
	pub fn as_float64_slice(&self, default: Option<Vec<f64>>) -> Result<Vec<f64>> {
		self.extract_slice::<f64>(default)
	}

	/// Extract the value as a sequence of `string`; see [`Element::extract_slice`].
	pub fn as_string_slice(&self, default: Option<Vec<String>>) -> Result<Vec<String>> {
		self.extract_slice::<String>(default)
	}
}
