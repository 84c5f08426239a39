use crate::components::ComponentStore;
use crate::entities::{Entity, EntityAllocator};
use crate::systems::{System, SystemStore};
use log::debug;
use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

type UpdateHook = Box<dyn FnMut(&mut ComponentStore)>;

/// The frame coordinator: owns the [ComponentStore], the
/// [EntityAllocator] and the registered [systems](System), and drives one
/// tick at a time through [update](Self::update).
///
/// A world starts out stopped; [start](Self::start) must be called before
/// [update](Self::update) does any work. The world dereferences to its
/// [ComponentStore], so component operations are available directly on it.
pub struct World {
	components: ComponentStore,
	entities: EntityAllocator,
	systems: SystemStore,
	tags: HashMap<String, Entity>,
	processing: bool,
	pre_update: Option<UpdateHook>,
	post_update: Option<UpdateHook>,
}

impl World {
	pub fn new() -> Self {
		Self {
			components: ComponentStore::new(),
			entities: EntityAllocator::new(),
			systems: SystemStore::new(),
			tags: HashMap::default(),
			processing: false,
			pre_update: None,
			post_update: None,
		}
	}

	/// Let subsequent [update](Self::update) calls perform work.
	pub fn start(&mut self) {
		debug!("world started");
		self.processing = true;
	}

	/// Make subsequent [update](Self::update) calls no-ops.
	///
	/// Does not interrupt an update already in progress.
	pub fn stop(&mut self) {
		debug!("world stopped");
		self.processing = false;
	}

	/// Whether [update](Self::update) currently performs work.
	pub fn processing(&self) -> bool {
		self.processing
	}

	/// Run one tick. A no-op while the world is stopped.
	///
	/// The tick runs the pre-update hook, then every system in registration
	/// order (change notifications for this tick's frozen set of updated
	/// entities, then the system's own update), then the post-update hook,
	/// and finally drains the frozen entities from the updated set.
	///
	/// Membership is frozen on entry: entities touched *during* the tick are
	/// not notified until the next tick, and survive the end-of-tick drain.
	/// A panic escaping a system callback leaves the whole set intact, so the
	/// same changes are redelivered on the next successful tick.
	pub fn update(&mut self) {
		if !self.processing {
			return;
		}

		if let Some(hook) = self.pre_update.as_mut() {
			hook(&mut self.components);
		}

		let changed: Vec<Entity> = self.components.updated().iter().copied().collect();
		self.systems.dispatch(&mut self.components, &changed);

		if let Some(hook) = self.post_update.as_mut() {
			hook(&mut self.components);
		}

		for entity in &changed {
			self.components.updated_mut().remove(entity);
		}
	}

	/// Allocate a fresh [Entity].
	pub fn create_entity(&mut self) -> Entity {
		self.entities.create()
	}

	/// Tear down an entity: drop all its components (feeding the change
	/// tracker) and recycle its handle.
	pub fn destroy_entity(&mut self, entity: Entity) {
		self.components.remove_all(entity);
		self.entities.destroy(entity);
	}

	/// Add a new [system](System) to the [World].
	///
	/// Systems run in registration order. Registering the same system type
	/// twice panics.
	pub fn register_system<T: 'static + System>(&mut self, system: T) {
		self.systems.add_system(system);
	}

	/// Look up an entity by tag. Unknown tags yield `None`.
	pub fn tag(&self, name: &str) -> Option<Entity> {
		self.tags.get(name).copied()
	}

	/// Bind a tag to an entity. Last write wins.
	pub fn set_tag(&mut self, name: impl Into<String>, entity: Entity) {
		self.tags.insert(name.into(), entity);
	}

	/// Install a hook that runs at the start of every tick, before any
	/// system. Useful for feeding external state (input, events) into the
	/// store outside the system loop.
	pub fn on_pre_update(&mut self, hook: impl FnMut(&mut ComponentStore) + 'static) {
		self.pre_update = Some(Box::new(hook));
	}

	/// Install a hook that runs at the end of every tick, after all systems
	/// but before the updated set is drained.
	pub fn on_post_update(&mut self, hook: impl FnMut(&mut ComponentStore) + 'static) {
		self.post_update = Some(Box::new(hook));
	}
}

impl Default for World {
	fn default() -> Self {
		Self::new()
	}
}

impl Deref for World {
	type Target = ComponentStore;

	#[inline(always)]
	fn deref(&self) -> &Self::Target {
		&self.components
	}
}

impl DerefMut for World {
	#[inline(always)]
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.components
	}
}
