use crate::components::{Component, ComponentId, MAX_COMPONENT_TYPES};
use crate::error::EcsError;
use log::trace;
use std::any::{type_name, TypeId};
use std::collections::HashMap;

/// Assigns each distinct [Component] type a dense [ComponentId].
///
/// Ids are assigned lazily, the first time a type is seen, and are memoized
/// for the registry's lifetime; a type is never assigned twice and ids are
/// never reused. Each [ComponentStore](crate::components::ComponentStore)
/// owns its own registry, so independent stores never share id state.
pub struct ComponentRegistry {
	ids: HashMap<TypeId, ComponentId>,
}

impl ComponentRegistry {
	pub fn new() -> Self {
		Self {
			ids: HashMap::default(),
		}
	}

	/// Get the id of `T`, registering it if it was never seen before.
	///
	/// Fails with [EcsError::TypeCapacityExhausted] once
	/// [MAX_COMPONENT_TYPES] distinct types have been registered.
	pub fn try_id_of<T: Component>(&mut self) -> Result<ComponentId, EcsError> {
		if let Some(id) = self.ids.get(&TypeId::of::<T>()) {
			return Ok(*id);
		}

		if self.ids.len() >= MAX_COMPONENT_TYPES {
			return Err(EcsError::TypeCapacityExhausted {
				limit: MAX_COMPONENT_TYPES,
			});
		}

		let id = ComponentId::new(self.ids.len());
		self.ids.insert(TypeId::of::<T>(), id);
		trace!("registered component type {} as id {}", type_name::<T>(), id.value());
		Ok(id)
	}

	/// Get the id of `T`, registering it if it was never seen before.
	///
	/// The type ceiling is a build-time constant, so running out of ids is a
	/// configuration error; this panics where [try_id_of](Self::try_id_of)
	/// would fail.
	pub fn id_of<T: Component>(&mut self) -> ComponentId {
		match self.try_id_of::<T>() {
			Ok(id) => id,
			Err(error) => panic!("{} while registering {}", error, type_name::<T>()),
		}
	}

	/// Look up the id of `T` without registering it.
	pub fn get<T: Component>(&self) -> Option<ComponentId> {
		self.ids.get(&TypeId::of::<T>()).copied()
	}

	/// The number of distinct component types registered so far.
	pub fn len(&self) -> usize {
		self.ids.len()
	}

	pub fn is_empty(&self) -> bool {
		self.ids.is_empty()
	}
}

impl Default for ComponentRegistry {
	fn default() -> Self {
		Self::new()
	}
}
