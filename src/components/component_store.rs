use crate::components::{
	Component, ComponentId, ComponentRegistry, ComponentSet, Signature, MAX_COMPONENT_TYPES,
};
use crate::entities::Entity;
use log::trace;
use nohash_hasher::NoHashHasher;
use std::any::{type_name, Any};
use std::collections::HashSet;
use std::hash::BuildHasherDefault;

type EntityHasher = BuildHasherDefault<NoHashHasher<Entity>>;

/// A deduplicated, unordered set of [entities](Entity), hashed by their index.
pub type EntitySet = HashSet<Entity, EntityHasher>;

/// One entity's component slots, indexed by [ComponentId].
type SlotRow = [Option<Box<dyn Any>>; MAX_COMPONENT_TYPES];

fn empty_row() -> SlotRow {
	std::array::from_fn(|_| None)
}

/// A container for all [components](Component) attached to
/// [entities](Entity), and the bookkeeping around them.
///
/// Storage is a dense two-dimensional table: one [SlotRow] per entity, one
/// slot per registered component type, plus a parallel [Signature] per row.
/// Every slot access is O(1) at the cost of [MAX_COMPONENT_TYPES] slots per
/// row whether or not the entity uses them.
///
/// The store also records which entities were touched by an add or remove
/// since the last frame; the [World](crate::prelude::World) drains that set
/// once per completed tick.
pub struct ComponentStore {
	registry: ComponentRegistry,
	rows: Vec<SlotRow>,
	signatures: Vec<Signature>,
	updated: EntitySet,
}

impl ComponentStore {
	pub fn new() -> Self {
		Self {
			registry: ComponentRegistry::new(),
			rows: Vec::new(),
			signatures: Vec::new(),
			updated: EntitySet::default(),
		}
	}

	/// Attach `component` to `entity`, taking ownership of it.
	///
	/// Sets the entity's signature bit for `T` and marks the entity as
	/// updated. Storage grows to fit entity indexes it has never seen.
	///
	/// If the entity already has a `T`, the previous instance is dropped and
	/// replaced; the entity is marked as updated either way.
	pub fn add<T: Component>(&mut self, entity: Entity, component: T) {
		let id = self.registry.id_of::<T>();
		self.ensure_row(entity);

		let slot = &mut self.rows[entity.index()][id.value()];
		if slot.is_some() {
			trace!("replacing component {} on entity {}", type_name::<T>(), entity.id());
		}

		*slot = Some(Box::new(component));
		self.signatures[entity.index()].set(id.value(), true);
		self.updated.insert(entity);
	}

	/// Detach and drop the entity's `T` component.
	///
	/// Clears the signature bit and marks the entity as updated. Removing a
	/// type the entity does not have is a no-op, not an error.
	pub fn remove<T: Component>(&mut self, entity: Entity) {
		let id = match self.registry.get::<T>() {
			Some(id) => id,
			None => return,
		};

		self.remove_id(entity, id);
	}

	/// Detach and drop every component the entity has.
	///
	/// Used when an entity is torn down; each occupied slot is removed
	/// individually, with the same bookkeeping as [remove](Self::remove).
	pub fn remove_all(&mut self, entity: Entity) {
		let signature = self.signature(entity);
		for index in signature.ones() {
			self.remove_id(entity, ComponentId::new(index));
		}
	}

	/// Check whether the entity currently has a `T` component.
	///
	/// Never fails: unknown types and entity indexes beyond the store's
	/// current capacity read as *false*.
	pub fn contains<T: Component>(&self, entity: Entity) -> bool {
		match self.registry.get::<T>() {
			Some(id) => self.signature(entity).get(id.value()),
			None => false,
		}
	}

	/// Get a reference to the entity's `T` component.
	///
	/// The stored instance's type tag is checked before the reference is
	/// handed out; an empty or mismatched slot yields `None`.
	pub fn get<T: Component>(&self, entity: Entity) -> Option<&T> {
		let id = self.registry.get::<T>()?;
		let row = self.rows.get(entity.index())?;
		row[id.value()].as_ref()?.downcast_ref::<T>()
	}

	/// Get a mutable reference to the entity's `T` component.
	pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
		let id = self.registry.get::<T>()?;
		let row = self.rows.get_mut(entity.index())?;
		row[id.value()].as_mut()?.downcast_mut::<T>()
	}

	/// The entity's current [Signature].
	///
	/// Signatures are plain `Copy` data; indexes the store has never grown to
	/// read as the empty signature.
	pub fn signature(&self, entity: Entity) -> Signature {
		self.signatures.get(entity.index()).copied().unwrap_or_default()
	}

	/// Build the [Signature] covering a tuple of component types.
	///
	/// Registers any type in the tuple that was never seen before, so the
	/// mask can be built ahead of the first [add](Self::add).
	pub fn signature_of<S: ComponentSet>(&mut self) -> Signature {
		S::signature(&mut self.registry)
	}

	/// The set of entities touched by an add or remove since the last drain.
	pub fn updated(&self) -> &EntitySet {
		&self.updated
	}

	pub(crate) fn updated_mut(&mut self) -> &mut EntitySet {
		&mut self.updated
	}

	/// The number of distinct component types registered so far.
	pub fn type_count(&self) -> usize {
		self.registry.len()
	}

	fn remove_id(&mut self, entity: Entity, id: ComponentId) {
		let row = match self.rows.get_mut(entity.index()) {
			Some(row) => row,
			None => return,
		};

		if row[id.value()].take().is_some() {
			self.signatures[entity.index()].set(id.value(), false);
			self.updated.insert(entity);
		}
	}

	fn ensure_row(&mut self, entity: Entity) {
		if entity.index() >= self.rows.len() {
			self.rows.resize_with(entity.index() + 1, empty_row);
			self.signatures.resize(entity.index() + 1, Signature::new());
		}
	}
}

impl Default for ComponentStore {
	fn default() -> Self {
		Self::new()
	}
}
