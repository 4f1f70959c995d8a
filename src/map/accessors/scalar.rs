// @generated by dynpath_accessor_gen from templates/scalar.rs.in; do not edit.

use crate::map::{Element, Result};

impl Element<'_> {
	/// Extract the value as `bool`; see [`Element::extract`].
	pub fn as_bool(&self, default: Option<bool>) -> Result<bool> {
		self.extract::<bool>(default)
	}

	/// Extract the value as `int`; see [`Element::extract`].
	pub fn as_int(&self, default: Option<isize>) -> Result<isize> {
		self.extract::<isize>(default)
	}

	/// Extract the value as `int8`; see [`Element::extract`].
	pub fn as_int8(&self, default: Option<i8>) -> Result<i8> {
		self.extract::<i8>(default)
	}

	/// Extract the value as `int16`; see [`Element::extract`].
	pub fn as_int16(&self, default: Option<i16>) -> Result<i16> {
		self.extract::<i16>(default)
	}

	/// Extract the value as `int32`; see [`Element::extract`].
	pub fn as_int32(&self, default: Option<i32>) -> Result<i32> {
		self.extract::<i32>(default)
	}

	/// Extract the value as `int64`; see [`Element::extract`].
	pub fn as_int64(&self, default: Option<i64>) -> Result<i64> {
		self.extract::<i64>(default)
	}

	/// Extract the value as `uint8`; see [`Element::extract`].
	pub fn as_uint8(&self, default: Option<u8>) -> Result<u8> {
		self.extract::<u8>(default)
	}

	/// Extract the value as `uint16`; see [`Element::extract`].
	pub fn as_uint16(&self, default: Option<u16>) -> Result<u16> {
		self.extract::<u16>(default)
	}

	/// Extract the value as `uint32`; see [`Element::extract`].
	pub fn as_uint32(&self, default: Option<u32>) -> Result<u32> {
		self.extract::<u32>(default)
	}

	/// Extract the value as `uint64`; see [`Element::extract`].
	pub fn as_uint64(&self, default: Option<u64>) -> Result<u64> {
		self.extract::<u64>(default)
	}

	/// Extract the value as `float32`; see [`Element::extract`].
	pub fn as_float32(&self, default: Option<f32>) -> Result<f32> {
		self.extract::<f32>(default)
	}

	/// Extract the value as `float64`; see [`Element::extract`].
	pub fn as_float64(&self, default: Option<f64>) -> Result<f64> {
		self.extract::<f64>(default)
	}

	/// Extract the value as `string`; see [`Element::extract`].
	pub fn as_string(&self, default: Option<String>) -> Result<String> {
		self.extract::<String>(default)
	}
}
