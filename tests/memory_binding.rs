use lignin_head::{
	binding::HeadBinding,
	field::{identifier, Field, Identifier},
	lignin::Node,
	memory::MemoryHead,
	port::HeadPort,
	values::MetadataValueSet,
};

fn id(field: Field) -> Identifier {
	identifier(field).unwrap()
}

/// Counts port calls on top of a [`MemoryHead`].
#[derive(Debug, Default)]
struct CountingHead {
	inner: MemoryHead,
	titles: usize,
	removals: usize,
	appends: usize,
}
impl HeadPort for CountingHead {
	fn set_title(&mut self, title: &str) {
		self.titles += 1;
		self.inner.set_title(title)
	}

	fn remove_meta(&mut self, identifier: &Identifier) -> usize {
		self.removals += 1;
		self.inner.remove_meta(identifier)
	}

	fn append_meta(&mut self, identifier: &Identifier, content: &str) {
		self.appends += 1;
		self.inner.append_meta(identifier, content)
	}
}

#[test]
fn nothing_is_written_before_mount() {
	let binding = HeadBinding::new(MemoryHead::new());
	assert!(!binding.is_mounted());
	assert_eq!(binding.values(), None);
	assert!(binding.head().is_empty());
	assert_eq!(binding.head().title(), "");
}

#[test]
fn mount_reconciles_even_when_empty() {
	let mut binding = HeadBinding::new(CountingHead::default());
	assert!(binding.commit(MetadataValueSet::new()));
	assert!(binding.is_mounted());
	assert_eq!(binding.head().titles + binding.head().appends, 0);
}

#[test]
fn unchanged_commit_is_skipped() {
	let mut binding = HeadBinding::new(CountingHead::default());
	let values = MetadataValueSet::new().title("Home").description("Welcome");

	assert!(binding.commit(values.clone()));
	assert!(!binding.commit(values.clone()));
	assert!(!binding.commit(values));

	assert_eq!(binding.head().titles, 1);
	assert_eq!(binding.head().removals, 1);
	assert_eq!(binding.head().appends, 1);
}

#[test]
fn one_changed_field_reruns_everything() {
	let mut binding = HeadBinding::new(CountingHead::default());
	binding.commit(MetadataValueSet::new().title("Initial Title").description("Initial Description"));
	assert!(binding.commit(MetadataValueSet::new().title("Updated Title").description("Initial Description")));

	let head = binding.head();
	assert_eq!(head.titles, 2);
	assert_eq!(head.appends, 2);
	assert_eq!(head.inner.title(), "Updated Title");
	assert_eq!(head.inner.count(&id(Field::Description)), 1);
	assert_eq!(head.inner.content(&id(Field::Description)), Some("Initial Description"));
}

#[test]
fn absent_to_empty_is_a_change() {
	let mut binding = HeadBinding::new(MemoryHead::new());
	binding.commit(MetadataValueSet::new().title("T"));
	assert!(binding.commit(MetadataValueSet::new().title("T").keywords("")));
	assert_eq!(binding.head().content(&id(Field::Keywords)), Some(""));
}

#[test]
fn renders_nothing() {
	let mut binding = HeadBinding::new(MemoryHead::new());
	assert!(matches!(binding.render(), Node::Multi(nodes) if nodes.is_empty()));
	binding.commit(MetadataValueSet::new().title("Test"));
	assert!(matches!(binding.render(), Node::Multi(nodes) if nodes.is_empty()));
}

#[test]
fn unmount_leaves_tags_in_place() {
	let mut binding = HeadBinding::new(MemoryHead::new());
	binding.commit(MetadataValueSet::new().title("Home").description("Welcome"));
	let before = binding.head().clone();

	let head = binding.unmount();
	assert_eq!(head, before);
}

#[test]
fn view_switch_scenario() {
	let mut head = MemoryHead::new();
	let description = id(Field::Description);
	let og_title = id(Field::OgTitle);

	let mut view_a = HeadBinding::new(&mut head);
	view_a.commit(MetadataValueSet::new().title("Home").description("Welcome"));
	assert_eq!(view_a.head().title(), "Home");
	assert_eq!(view_a.head().count(&description), 1);
	assert_eq!(view_a.head().content(&description), Some("Welcome"));

	view_a.commit(MetadataValueSet::new().title("Home").description("Updated"));
	assert_eq!(view_a.head().count(&description), 1);
	assert_eq!(view_a.head().content(&description), Some("Updated"));
	view_a.unmount();

	let mut view_b = HeadBinding::new(&mut head);
	view_b.commit(MetadataValueSet::new().og_title("B Title"));
	view_b.unmount();

	assert_eq!(head.title(), "Home");
	assert_eq!(head.content(&description), Some("Updated"));
	assert_eq!(head.count(&og_title), 1);
	assert_eq!(head.content(&og_title), Some("B Title"));
	assert_eq!(head.len(), 2);
}

#[test]
fn last_commit_wins_between_bindings() {
	let mut head = MemoryHead::new();
	let description = id(Field::Description);

	{
		let mut first = HeadBinding::new(&mut head);
		first.commit(MetadataValueSet::new().description("first"));
	}
	{
		let mut second = HeadBinding::new(&mut head);
		second.commit(MetadataValueSet::new().description("second"));
	}

	assert_eq!(head.count(&description), 1);
	assert_eq!(head.content(&description), Some("second"));
}
