/// Closed set of primitive kinds supported by the typed accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
	/// `bool`.
	Bool,
	/// Pointer-sized signed integer (`isize`).
	Int,
	/// `i8`.
	Int8,
	/// `i16`.
	Int16,
	/// `i32`.
	Int32,
	/// `i64`.
	Int64,
	/// `u8`.
	Uint8,
	/// `u16`.
	Uint16,
	/// `u32`.
	Uint32,
	/// `u64`.
	Uint64,
	/// `f32`.
	Float32,
	/// `f64`.
	Float64,
	/// Owned UTF-8 `String`.
	String,
}

impl Kind {
	/// Every kind, in accessor declaration order.
	pub const ALL: [Kind; 13] = [
		Kind::Bool,
		Kind::Int,
		Kind::Int8,
		Kind::Int16,
		Kind::Int32,
		Kind::Int64,
		Kind::Uint8,
		Kind::Uint16,
		Kind::Uint32,
		Kind::Uint64,
		Kind::Float32,
		Kind::Float64,
		Kind::String,
	];

	/// Stable lowercase label used in accessor names and error messages.
	pub const fn name(self) -> &'static str {
		match self {
			Self::Bool => "bool",
			Self::Int => "int",
			Self::Int8 => "int8",
			Self::Int16 => "int16",
			Self::Int32 => "int32",
			Self::Int64 => "int64",
			Self::Uint8 => "uint8",
			Self::Uint16 => "uint16",
			Self::Uint32 => "uint32",
			Self::Uint64 => "uint64",
			Self::Float32 => "float32",
			Self::Float64 => "float64",
			Self::String => "string",
		}
	}

	/// Rust type the kind extracts to.
	pub const fn rust_type(self) -> &'static str {
		match self {
			Self::Bool => "bool",
			Self::Int => "isize",
			Self::Int8 => "i8",
			Self::Int16 => "i16",
			Self::Int32 => "i32",
			Self::Int64 => "i64",
			Self::Uint8 => "u8",
			Self::Uint16 => "u16",
			Self::Uint32 => "u32",
			Self::Uint64 => "u64",
			Self::Float32 => "f32",
			Self::Float64 => "f64",
			Self::String => "String",
		}
	}
}
