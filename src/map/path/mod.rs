use std::fmt;

use crate::map::{MapError, Result};

/// Separator between keys in a textual key path.
pub const KEY_SEPARATOR: char = '/';

/// Parsed `/`-separated key path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
	/// Ordered map keys.
	pub keys: Vec<String>,
}

impl KeyPath {
	/// Parse `a/b/c` into its keys.
	///
	/// Empty input and empty segments (`a//b`, `/a`, `a/`) are rejected.
	pub fn parse(input: &str) -> Result<Self> {
		if input.is_empty() {
			return Err(MapError::InvalidKeyPath { path: input.to_owned() });
		}

		let mut keys = Vec::new();
		for segment in input.split(KEY_SEPARATOR) {
			if segment.is_empty() {
				return Err(MapError::InvalidKeyPath { path: input.to_owned() });
			}
			keys.push(segment.to_owned());
		}

		Ok(Self { keys })
	}

	/// Borrow keys in the shape the resolver takes.
	pub fn as_keys(&self) -> Vec<&str> {
		self.keys.iter().map(String::as_str).collect()
	}
}

impl fmt::Display for KeyPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (idx, key) in self.keys.iter().enumerate() {
			if idx > 0 {
				write!(f, "{KEY_SEPARATOR}")?;
			}
			f.write_str(key)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests;
