//! Typed, path-addressed access into dynamically shaped maps.
//!
//! ```
//! use dynpath::map::Value;
//!
//! let root = Value::from_json(br#"{"elt": {"v2": 2}, "vs": "test"}"#)?;
//! assert_eq!(root.resolve(&["elt", "v2"]).as_float64(None)?, 2.0);
//! assert_eq!(root.resolve(&["a", "b"]).as_int(Some(42))?, 42);
//! assert_eq!(root.resolve(&["vs"]).as_int(None).unwrap_err().to_string(), "Wrong type: expected int actual string");
//! # Ok::<(), dynpath::map::MapError>(())
//! ```

/// Dynamic values, key-path resolution, typed extraction, and the JSON boundary.
pub mod map;
