use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, MapError>;

/// Errors produced while resolving and extracting values from dynamic maps.
#[derive(Debug, Error)]
pub enum MapError {
	/// Requested key path could not be fully resolved.
	#[error("Wrong path {}", .path.join("/"))]
	PathNotFound {
		/// Full key path as originally requested.
		path: Vec<String>,
	},
	/// Resolved value (or the first offending list element) has another type.
	#[error("Wrong type: expected {expected} actual {actual}")]
	TypeMismatch {
		/// Requested type name.
		expected: String,
		/// Type name of the value actually found.
		actual: String,
	},
	/// JSON encode or decode failure, passed through unchanged.
	#[error(transparent)]
	Serialization(#[from] serde_json::Error),
	/// Key path expression syntax is invalid.
	#[error("invalid key path: {path:?}")]
	InvalidKeyPath {
		/// Original user-provided path string.
		path: String,
	},
}

impl MapError {
	pub(crate) fn path_not_found(path: &[String]) -> Self {
		Self::PathNotFound { path: path.to_vec() }
	}

	pub(crate) fn type_mismatch(expected: impl Into<String>, actual: &str) -> Self {
		Self::TypeMismatch {
			expected: expected.into(),
			actual: actual.to_owned(),
		}
	}
}
