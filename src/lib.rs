//! Duplicate-free document head metadata for client-side rendered apps.
//!
//! [`reconcile`](`reconcile::reconcile`) writes a [`MetadataValueSet`](`values::MetadataValueSet`) into a [`HeadPort`](`port::HeadPort`),
//! and [`HeadBinding`](`binding::HeadBinding`) runs it at the right points of a component's lifecycle.

#![doc(html_root_url = "https://docs.rs/lignin-head/0.0.1")]
#![warn(clippy::pedantic)]

pub use lignin;

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

pub mod binding;
pub mod dom;
pub mod field;
pub mod memory;
pub mod port;
pub mod reconcile;
pub mod values;
