//! Named accessors for every primitive kind, plus nested maps.
//!
//! `scalar.rs` and `slice.rs` are rendered by `tools/dynpath_accessor_gen` from its templates
//! and [`Kind::ALL`](crate::map::Kind::ALL). Run `cargo run -p dynpath_accessor_gen` after
//! changing either.

mod scalar;
mod slice;

use crate::map::{Element, Map, Result};

impl Element<'_> {
	/// Extract the value as a nested map; see [`Element::extract`].
	pub fn as_map(&self, default: Option<Map>) -> Result<Map> {
		self.extract::<Map>(default)
	}

	/// Extract the value as a sequence of maps; see [`Element::extract_slice`].
	pub fn as_map_slice(&self, default: Option<Vec<Map>>) -> Result<Vec<Map>> {
		self.extract_slice::<Map>(default)
	}
}

#[cfg(test)]
mod tests;
