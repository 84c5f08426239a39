use crate::components::ComponentStore;
use crate::entities::Entity;
use crate::systems::System;
use log::debug;
use std::any::{type_name, TypeId};
use std::collections::HashSet;

pub(crate) struct SystemStore {
	set: HashSet<TypeId>,
	systems: Vec<Box<dyn System>>,
}

impl SystemStore {
	pub fn new() -> Self {
		Self {
			set: HashSet::default(),
			systems: Vec::default(),
		}
	}

	pub fn add_system<T: 'static + System>(&mut self, system: T) {
		let inserted = self.set.insert(TypeId::of::<T>());
		assert!(inserted, "System was already added to the current world");

		debug!("registered system {}", type_name::<T>());
		self.systems.push(Box::new(system));
	}

	/// Run one tick over every system, in registration order.
	///
	/// `changed` is the frozen membership of the updated set for this tick;
	/// each system sees the complete slice before its own update runs, with
	/// signatures read at call time rather than at the start of the tick.
	pub fn dispatch(&mut self, components: &mut ComponentStore, changed: &[Entity]) {
		for system in self.systems.iter_mut() {
			for &entity in changed {
				let signature = components.signature(entity);
				system.entity_changed(components, entity, signature);
			}

			system.update(components);
		}
	}
}
