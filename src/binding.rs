use crate::{dom::DomHead, port::HeadPort, reconcile::reconcile, values::MetadataValueSet};
use lignin::{Node, ThreadBound};
use tracing::{debug, instrument};

/// Ties [`reconcile`] to the lifecycle of one metadata-declaring component.
///
/// # Correct Use
///
/// Create one instance per component and call [`HeadBinding::commit`] from the host's **synchronous** post-commit hook,
/// before the browser paints, on mount and after each later commit.
/// Reconciliation then runs once on mount and again whenever any field changed, which avoids flashing stale metadata.
///
/// The component itself renders [`HeadBinding::render`], which is empty.
/// Rendering never touches the head, so server-side render passes without a DOM are unaffected.
///
/// # Unmounting
///
/// [`HeadBinding::unmount`] deliberately leaves this binding's tags in the head.
/// They stay until the next view's binding overwrites them, so views should always declare their full metadata set.
///
/// When several bindings declare the same field concurrently, the one that commits last wins.
#[derive(Debug)]
pub struct HeadBinding<P: HeadPort> {
	head: P,
	committed: Option<MetadataValueSet>,
}

impl HeadBinding<DomHead> {
	/// Binds to `window.document`.
	///
	/// This throws into JavaScript if there is no document head, see [`DomHead::current`].
	#[must_use]
	pub fn for_document() -> Self {
		Self::new(DomHead::current())
	}
}

impl<P: HeadPort> HeadBinding<P> {
	/// Creates an unmounted binding. Nothing is written before the first [`HeadBinding::commit`].
	#[must_use]
	pub fn new(head: P) -> Self {
		Self { head, committed: None }
	}

	/// Reconciles `values` into the head if this is the first commit or if any field differs from the previous commit.
	///
	/// A change in any field re-runs the whole reconciliation, not only the changed field.
	///
	/// Returns whether reconciliation ran.
	#[instrument(skip(self, values), fields(mounted = self.committed.is_some()))]
	pub fn commit(&mut self, values: MetadataValueSet) -> bool {
		if self.committed.as_ref() == Some(&values) {
			debug!("Metadata unchanged; Skipping reconciliation.");
			return false;
		}

		reconcile(&mut self.head, &values);
		self.committed = Some(values);
		true
	}

	#[must_use]
	pub fn is_mounted(&self) -> bool {
		self.committed.is_some()
	}

	/// The values of the last commit, if any.
	#[must_use]
	pub fn values(&self) -> Option<&MetadataValueSet> {
		self.committed.as_ref()
	}

	#[must_use]
	pub fn head(&self) -> &P {
		&self.head
	}

	pub fn head_mut(&mut self) -> &mut P {
		&mut self.head
	}

	/// The component's VDOM output, which is always empty.
	#[allow(clippy::unused_self)]
	#[must_use]
	pub fn render(&self) -> Node<'static, ThreadBound> {
		Node::Multi(&[])
	}

	/// Ends this binding's lifecycle **without** touching the head and hands the port back.
	#[instrument(skip(self))]
	pub fn unmount(self) -> P {
		debug!("Unmounting; Leaving metadata in place for the next view to overwrite.");
		self.head
	}
}
