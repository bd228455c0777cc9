use crate::field::Identifier;

/// The mutations [`reconcile`](`crate::reconcile::reconcile`) needs from a document head.
///
/// [`DomHead`](`crate::dom::DomHead`) implements this over the browser's
/// [***document.head***](https://developer.mozilla.org/en-US/docs/Web/API/Document/head),
/// [`MemoryHead`](`crate::memory::MemoryHead`) over a plain in-memory list.
///
/// None of these operations can fail observably. Implementations log unexpected environment errors instead.
pub trait HeadPort {
	/// Assigns the document title.
	fn set_title(&mut self, title: &str);

	/// Removes **all** `<meta>` elements matching `identifier` and returns how many there were.
	///
	/// A lookup miss is not an error, it just returns `0`.
	fn remove_meta(&mut self, identifier: &Identifier) -> usize;

	/// Creates a `<meta>` element with `identifier` and `content="{content}"` and appends it to the end of the head.
	fn append_meta(&mut self, identifier: &Identifier, content: &str);
}

impl<P: HeadPort + ?Sized> HeadPort for &mut P {
	fn set_title(&mut self, title: &str) {
		(**self).set_title(title)
	}

	fn remove_meta(&mut self, identifier: &Identifier) -> usize {
		(**self).remove_meta(identifier)
	}

	fn append_meta(&mut self, identifier: &Identifier, content: &str) {
		(**self).append_meta(identifier, content)
	}
}
