//! The static mapping from metadata fields to their targets in the document head.
//!
//! [`HEAD_FIELDS`] is the only place where attribute names and values are spelled out.
//! Both the lookup of existing elements and the creation of new ones read their [`Identifier`] from it.

use core::fmt::{self, Display, Formatter};

/// The attribute that identifies a `<meta>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifyingAttribute {
	/// `name="…"`, used by plain HTML metadata like `description`.
	Name,
	/// `property="…"`, used by [Open Graph](https://ogp.me/) tags.
	Property,
}
impl IdentifyingAttribute {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			IdentifyingAttribute::Name => "name",
			IdentifyingAttribute::Property => "property",
		}
	}
}

/// The attribute/value pair that locates one specific `<meta>` element, like `name="description"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identifier {
	pub attribute: IdentifyingAttribute,
	pub value: &'static str,
}
impl Identifier {
	#[must_use]
	pub const fn name(value: &'static str) -> Self {
		Self {
			attribute: IdentifyingAttribute::Name,
			value,
		}
	}

	#[must_use]
	pub const fn property(value: &'static str) -> Self {
		Self {
			attribute: IdentifyingAttribute::Property,
			value,
		}
	}

	/// A CSS selector matching exactly the `<meta>` elements with this identifier.
	///
	/// Identifier values come from [`HEAD_FIELDS`] and never contain quotes, so no escaping is done.
	#[must_use]
	pub fn selector(&self) -> String {
		format!(r#"meta[{}="{}"]"#, self.attribute.as_str(), self.value)
	}

	/// Whether an attribute list contains this identifier.
	pub fn matches<'a>(&self, attributes: impl IntoIterator<Item = (&'a str, &'a str)>) -> bool {
		attributes.into_iter().any(|(name, value)| name == self.attribute.as_str() && value == self.value)
	}
}
impl Display for Identifier {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(&self.selector())
	}
}

/// Where a field's value ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
	/// [***document.title***](https://developer.mozilla.org/en-US/docs/Web/API/Document/title), a singleton browser property.
	DocumentTitle,
	/// A `<meta>` element in [***document.head***](https://developer.mozilla.org/en-US/docs/Web/API/Document/head).
	Meta(Identifier),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
	Title,
	Description,
	Keywords,
	OgTitle,
	OgDescription,
	OgImage,
	OgUrl,
	OgType,
}
impl Field {
	/// All fields, in [`HEAD_FIELDS`] order.
	pub const ALL: [Field; 8] = [
		Field::Title,
		Field::Description,
		Field::Keywords,
		Field::OgTitle,
		Field::OgDescription,
		Field::OgImage,
		Field::OgUrl,
		Field::OgType,
	];

	#[must_use]
	pub fn descriptor(self) -> &'static HeadFieldDescriptor {
		// The table is laid out in declaration order.
		&HEAD_FIELDS[self as usize]
	}

	#[must_use]
	pub fn target(self) -> Target {
		self.descriptor().target
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeadFieldDescriptor {
	pub field: Field,
	pub target: Target,
}

pub static HEAD_FIELDS: [HeadFieldDescriptor; 8] = [
	HeadFieldDescriptor {
		field: Field::Title,
		target: Target::DocumentTitle,
	},
	HeadFieldDescriptor {
		field: Field::Description,
		target: Target::Meta(Identifier::name("description")),
	},
	HeadFieldDescriptor {
		field: Field::Keywords,
		target: Target::Meta(Identifier::name("keywords")),
	},
	HeadFieldDescriptor {
		field: Field::OgTitle,
		target: Target::Meta(Identifier::property("og:title")),
	},
	HeadFieldDescriptor {
		field: Field::OgDescription,
		target: Target::Meta(Identifier::property("og:description")),
	},
	HeadFieldDescriptor {
		field: Field::OgImage,
		target: Target::Meta(Identifier::property("og:image")),
	},
	HeadFieldDescriptor {
		field: Field::OgUrl,
		target: Target::Meta(Identifier::property("og:url")),
	},
	HeadFieldDescriptor {
		field: Field::OgType,
		target: Target::Meta(Identifier::property("og:type")),
	},
];

/// The [`Identifier`] of a `<meta>`-backed field, or [`None`] for [`Field::Title`].
#[must_use]
pub fn identifier(field: Field) -> Option<Identifier> {
	match field.target() {
		Target::DocumentTitle => None,
		Target::Meta(identifier) => Some(identifier),
	}
}
