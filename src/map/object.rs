use serde::de::DeserializeOwned;

use crate::map::{Element, Result};

impl Element<'_> {
	/// Materialize the element into any deserializable type through a JSON round trip.
	///
	/// A missing path encodes as `null`. Encode and decode failures surface as
	/// [`MapError::Serialization`](crate::map::MapError::Serialization); fields absent from the
	/// source are left to the target's serde attributes.
	pub fn object<T: DeserializeOwned>(&self) -> Result<T> {
		let encoded = serde_json::to_vec(&self.value())?;
		Ok(serde_json::from_slice(&encoded)?)
	}

	/// [`Element::object`] into an existing target, which is only replaced on success.
	///
	/// A missing path is a no-op: the target is left untouched and `Ok(())` is returned.
	pub fn object_into<T: DeserializeOwned>(&self, target: &mut T) -> Result<()> {
		if !self.is_present() {
			return Ok(());
		}
		*target = self.object()?;
		Ok(())
	}
}
