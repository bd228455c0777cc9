use crate::{field::Identifier, port::HeadPort};
use core::fmt::{self, Display, Formatter};
use tracing::{error, instrument, trace};
use wasm_bindgen::throw_str;

/// Why [`DomHead::try_current`] couldn't find a document head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadUnavailable {
	NoWindow,
	NoDocument,
	NoHead,
}
impl Display for HeadUnavailable {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			HeadUnavailable::NoWindow => "lignin-head: No `window` found. Document head metadata can only be managed in a browser environment.",
			HeadUnavailable::NoDocument => "lignin-head: No `window.document` found.",
			HeadUnavailable::NoHead => "lignin-head: The document has no `<head>` element.",
		})
	}
}
impl std::error::Error for HeadUnavailable {}

/// A [`HeadPort`] over a live [`web_sys::Document`].
///
/// This is a pair of cheap JavaScript handles, so clone it freely to share the same document head between bindings.
#[derive(Debug, Clone)]
pub struct DomHead {
	document: web_sys::Document,
	head: web_sys::HtmlHeadElement,
}
impl DomHead {
	/// Attaches to `window.document`.
	///
	/// # Errors
	///
	/// Iff there is no window, document or `<head>` element, i.e. outside of a browser.
	pub fn try_current() -> Result<Self, HeadUnavailable> {
		let document = web_sys::window().ok_or(HeadUnavailable::NoWindow)?.document().ok_or(HeadUnavailable::NoDocument)?;
		Self::new(document)
	}

	/// Attaches to `window.document`, throwing into JavaScript with a diagnostic if that's not possible.
	///
	/// Managing the document head without a document is a precondition violation, not a recoverable state.
	#[must_use]
	pub fn current() -> Self {
		Self::try_current().unwrap_or_else(|error| throw_str(&error.to_string()))
	}

	/// Attaches to `document`'s `<head>` element.
	///
	/// # Errors
	///
	/// Iff `document` has no `<head>` element.
	pub fn new(document: web_sys::Document) -> Result<Self, HeadUnavailable> {
		let head = document.head().ok_or(HeadUnavailable::NoHead)?;
		Ok(Self { document, head })
	}

	#[must_use]
	pub fn document(&self) -> &web_sys::Document {
		&self.document
	}

	#[must_use]
	pub fn head(&self) -> &web_sys::HtmlHeadElement {
		&self.head
	}
}

impl HeadPort for DomHead {
	#[instrument(skip(self, title))]
	fn set_title(&mut self, title: &str) {
		self.document.set_title(title)
	}

	#[instrument(skip(self))]
	fn remove_meta(&mut self, identifier: &Identifier) -> usize {
		let matches = match self.head.query_selector_all(&identifier.selector()) {
			Ok(matches) => matches,
			Err(error) => {
				error!("Querying {} failed: {:?}; Skipping removal.", identifier, error);
				return 0;
			}
		};

		// `querySelectorAll` returns a static `NodeList`, so removing while iterating is fine.
		let mut removed = 0;
		for i in 0..matches.length() {
			let node = match matches.get(i) {
				Some(node) => node,
				None => continue,
			};
			let parent = match node.parent_node() {
				Some(parent) => parent,
				None => continue,
			};
			match parent.remove_child(&node) {
				Ok(_) => removed += 1,
				Err(error) => error!("Removing {:?} failed: {:?}", node, error),
			}
		}
		trace!("Removed {} element(s).", removed);
		removed
	}

	#[instrument(skip(self, content))]
	fn append_meta(&mut self, identifier: &Identifier, content: &str) {
		let meta = match self.document.create_element("meta") {
			Ok(meta) => meta,
			Err(error) => return error!("Creating <meta> failed: {:?}", error),
		};

		for (name, value) in [(identifier.attribute.as_str(), identifier.value), ("content", content)].iter().copied() {
			if let Err(error) = meta.set_attribute(name, value) {
				return error!("Setting attribute {:?} on <meta> failed: {:?}", name, error);
			}
		}

		if let Err(error) = self.head.append_child(&meta) {
			error!("Appending <meta> to the document head failed: {:?}", error)
		}
	}
}
