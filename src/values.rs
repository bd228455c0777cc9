use crate::field::{Field, HEAD_FIELDS};

/// The metadata one view declares for the document head.
///
/// Fields left at [`None`] are *absent*: They are neither read nor written during reconciliation,
/// so a value another view wrote earlier survives.
/// An empty string is a real value and is written as such.
///
/// Equality is the shallow per-field comparison [`HeadBinding`](`crate::binding::HeadBinding`) uses to decide whether to reconcile again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MetadataValueSet {
	pub title: Option<String>,
	pub description: Option<String>,
	pub keywords: Option<String>,
	pub og_title: Option<String>,
	pub og_description: Option<String>,
	pub og_image: Option<String>,
	pub og_url: Option<String>,
	pub og_type: Option<String>,
}

macro_rules! setters {
	($($(#[$attr:meta])* $name:ident),*$(,)?) => {$(
		$(#[$attr])*
		#[must_use]
		pub fn $name(mut self, value: impl Into<String>) -> Self {
			self.$name = Some(value.into());
			self
		}
	)*};
}

impl MetadataValueSet {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	setters! {
		/// Sets [***document.title***](https://developer.mozilla.org/en-US/docs/Web/API/Document/title).
		title,
		/// Sets `<meta name="description">`.
		description,
		/// Sets `<meta name="keywords">`.
		keywords,
		/// Sets `<meta property="og:title">`.
		og_title,
		/// Sets `<meta property="og:description">`.
		og_description,
		/// Sets `<meta property="og:image">`.
		og_image,
		/// Sets `<meta property="og:url">`.
		og_url,
		/// Sets `<meta property="og:type">`.
		og_type,
	}

	/// The supplied value for `field`, if any.
	#[must_use]
	pub fn get(&self, field: Field) -> Option<&str> {
		match field {
			Field::Title => &self.title,
			Field::Description => &self.description,
			Field::Keywords => &self.keywords,
			Field::OgTitle => &self.og_title,
			Field::OgDescription => &self.og_description,
			Field::OgImage => &self.og_image,
			Field::OgUrl => &self.og_url,
			Field::OgType => &self.og_type,
		}
		.as_deref()
	}

	/// Iterates over the supplied fields and their values, in [`HEAD_FIELDS`] order.
	pub fn supplied(&self) -> impl '_ + Iterator<Item = (Field, &str)> {
		HEAD_FIELDS.iter().filter_map(move |descriptor| self.get(descriptor.field).map(|value| (descriptor.field, value)))
	}

	/// Whether no field is supplied at all.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.supplied().next().is_none()
	}
}
