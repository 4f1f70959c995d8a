use crate::map::{KeyPath, Value};

/// Snapshot of one key-path lookup.
///
/// `value` is `None` exactly when the path could not be fully resolved: a key was missing, an
/// intermediate value was not a map, or the value found was [`Value::Null`]. `path` always holds
/// the full requested key sequence so errors can report it.
#[derive(Debug, Clone, PartialEq)]
pub struct Element<'a> {
	path: Vec<String>,
	value: Option<&'a Value>,
}

impl Value {
	/// Resolve `keys` from this value. An empty key list yields the value itself.
	pub fn resolve(&self, keys: &[&str]) -> Element<'_> {
		Element {
			path: owned_keys(keys),
			value: descend(self, keys),
		}
	}

	/// Resolve a parsed [`KeyPath`].
	pub fn resolve_path(&self, path: &KeyPath) -> Element<'_> {
		self.resolve(&path.as_keys())
	}

	/// Return `true` when `keys` resolves to a value.
	///
	/// An empty key list is never reported as existing, even though [`Value::resolve`]
	/// yields the root for it.
	pub fn exists(&self, keys: &[&str]) -> bool {
		!keys.is_empty() && self.resolve(keys).is_present()
	}

	/// [`Value::exists`] for a parsed [`KeyPath`].
	pub fn exists_path(&self, path: &KeyPath) -> bool {
		self.exists(&path.as_keys())
	}
}

impl<'a> Element<'a> {
	/// Continue resolution below this element, extending its path.
	pub fn resolve(&self, keys: &[&str]) -> Element<'a> {
		if keys.is_empty() {
			return self.clone();
		}

		let mut path = self.path.clone();
		path.extend(owned_keys(keys));
		Element {
			path,
			value: self.value.and_then(|value| descend(value, keys)),
		}
	}

	/// Full requested key path.
	pub fn path(&self) -> &[String] {
		&self.path
	}

	/// Resolved value, `None` when the path is missing.
	pub fn value(&self) -> Option<&'a Value> {
		self.value
	}

	/// Return `true` when the path resolved to a value.
	pub fn is_present(&self) -> bool {
		self.value.is_some()
	}
}

fn descend<'a>(root: &'a Value, keys: &[&str]) -> Option<&'a Value> {
	keys.iter()
		.try_fold(root, |current, key| current.as_map_ref()?.get(*key))
		.filter(|value| !matches!(value, Value::Null))
}

fn owned_keys(keys: &[&str]) -> Vec<String> {
	keys.iter().map(|key| (*key).to_owned()).collect()
}
