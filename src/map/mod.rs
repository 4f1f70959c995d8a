mod accessors;
mod coerce;
mod element;
mod error;
mod json;
mod kind;
mod object;
mod path;
mod value;

/// Per-type conversion table behind the typed accessors.
pub use coerce::Extract;
/// Resolved key-path snapshot.
pub use element::Element;
/// Error and result aliases.
pub use error::{MapError, Result};
/// Primitive kind table.
pub use kind::Kind;
/// Textual key path parser.
pub use path::{KEY_SEPARATOR, KeyPath};
/// Dynamic value types.
pub use value::{Map, NativeSeq, Value};
