//! An in-memory stand-in for the document head, to test reconciliation without a browser.

use crate::{field::Identifier, port::HeadPort};
use hashbrown::HashMap;

/// One `<meta>` element, as an ordered attribute list.
///
/// Attribute lists aren't validated, so [`MemoryHead::inject`] can reproduce malformed or duplicated tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryMeta {
	pub attributes: Vec<(String, String)>,
}
impl MemoryMeta {
	/// The value of the first attribute called `name`, like `getAttribute`.
	#[must_use]
	pub fn attribute(&self, name: &str) -> Option<&str> {
		self.attributes.iter().find(|(n, _)| n == name).map(|(_, value)| value.as_str())
	}

	#[must_use]
	pub fn content(&self) -> Option<&str> {
		self.attribute("content")
	}

	#[must_use]
	pub fn matches(&self, identifier: &Identifier) -> bool {
		identifier.matches(self.attributes.iter().map(|(name, value)| (name.as_str(), value.as_str())))
	}
}

/// A [`HeadPort`] over a title string and an ordered list of `<meta>` elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHead {
	title: String,
	elements: Vec<MemoryMeta>,
}
impl MemoryHead {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a raw `<meta>` element, bypassing reconciliation (like a third-party script would).
	pub fn inject<'a>(&mut self, attributes: impl IntoIterator<Item = (&'a str, &'a str)>) {
		self.elements.push(MemoryMeta {
			attributes: attributes.into_iter().map(|(name, value)| (name.to_owned(), value.to_owned())).collect(),
		})
	}

	#[must_use]
	pub fn title(&self) -> &str {
		&self.title
	}

	/// All elements, in head order.
	#[must_use]
	pub fn elements(&self) -> &[MemoryMeta] {
		&self.elements
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.elements.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.elements.is_empty()
	}

	/// How many elements match `identifier`.
	#[must_use]
	pub fn count(&self, identifier: &Identifier) -> usize {
		self.elements.iter().filter(|element| element.matches(identifier)).count()
	}

	/// The `content` of the first element matching `identifier`, like `querySelector(…)?.getAttribute("content")`.
	#[must_use]
	pub fn content(&self, identifier: &Identifier) -> Option<&str> {
		self.elements.iter().find(|element| element.matches(identifier)).and_then(MemoryMeta::content)
	}

	/// The `content` of each element matching `identifier`, in head order.
	pub fn contents<'a>(&'a self, identifier: &'a Identifier) -> impl 'a + Iterator<Item = Option<&'a str>> {
		self.elements.iter().filter(move |element| element.matches(identifier)).map(MemoryMeta::content)
	}

	/// The observable identifier → content state, ignoring element order.
	///
	/// Each element is keyed by its first `name` or `property` attribute. Later duplicates overwrite earlier ones.
	/// Elements without either attribute or without `content` are left out.
	#[must_use]
	pub fn snapshot(&self) -> HashMap<(String, String), String> {
		let mut snapshot = HashMap::new();
		for element in &self.elements {
			let key = element
				.attributes
				.iter()
				.find(|(name, _)| name == "name" || name == "property")
				.map(|(name, value)| (name.clone(), value.clone()));
			if let (Some(key), Some(content)) = (key, element.content()) {
				snapshot.insert(key, content.to_owned());
			}
		}
		snapshot
	}
}

impl HeadPort for MemoryHead {
	fn set_title(&mut self, title: &str) {
		self.title = title.to_owned();
	}

	fn remove_meta(&mut self, identifier: &Identifier) -> usize {
		let before = self.elements.len();
		self.elements.retain(|element| !element.matches(identifier));
		before - self.elements.len()
	}

	fn append_meta(&mut self, identifier: &Identifier, content: &str) {
		self.inject([(identifier.attribute.as_str(), identifier.value), ("content", content)].iter().copied())
	}
}
