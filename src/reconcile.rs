use crate::{
	field::{Target, HEAD_FIELDS},
	port::HeadPort,
	values::MetadataValueSet,
};
use tracing::{instrument, level_filters::STATIC_MAX_LEVEL, trace, trace_span, warn, Level};

/// Makes `head` reflect each field supplied in `values`.
///
/// - A supplied title is assigned to the document title as-is.
/// - For each supplied `<meta>` field, **every** element with that field's identifier is removed,
///   then a fresh one carrying the value as `content` is appended to the end of the head.
/// - Absent fields are skipped entirely, so values written earlier (by another view) stay in place.
///
/// Afterwards, there is exactly one element per supplied identifier, regardless of how many there were before.
/// Element order in the head is not stable across calls.
///
/// This is stateless: Calling it twice with the same `values` leaves the same identifier → content pairs as calling it once.
#[instrument(skip(head, values), fields(supplied = values.supplied().count()))]
pub fn reconcile<P: HeadPort + ?Sized>(head: &mut P, values: &MetadataValueSet) {
	for descriptor in HEAD_FIELDS.iter() {
		let value = match values.get(descriptor.field) {
			Some(value) => value,
			None => continue,
		};

		match descriptor.target {
			Target::DocumentTitle => {
				if cfg!(feature = "dangerous-logging") {
					trace!("Setting document title to {:?}.", value);
				} else {
					trace!("Setting document title.");
				}
				head.set_title(value)
			}
			Target::Meta(identifier) => {
				let span = trace_span!("Writing meta", %identifier);
				let _enter = span.enter();

				let removed = head.remove_meta(&identifier);
				if STATIC_MAX_LEVEL >= Level::WARN && removed > 1 {
					warn!("Found {} elements matching {}; All of them were removed.", removed, identifier);
				}

				if cfg!(feature = "dangerous-logging") {
					trace!("Appending with content {:?} (replacing {}).", value, removed);
				} else {
					trace!("Appending (replacing {}).", removed);
				}
				head.append_meta(&identifier, value);
			}
		}
	}
}
