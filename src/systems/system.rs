use crate::components::{ComponentStore, Signature};
use crate::entities::Entity;

/// A unit of per-tick logic driven by the [World](crate::prelude::World).
///
/// Each tick, a system first receives one [entity_changed](Self::entity_changed)
/// call per entity whose component set changed since the previous tick, then
/// a single [update](Self::update) call. Systems decide their own interest:
/// typically a mask built with
/// [signature_of](crate::components::ComponentStore::signature_of) tested
/// against the notified signature.
pub trait System {
	/// Called once per changed entity, before this system's
	/// [update](Self::update) in the same tick.
	///
	/// `signature` is the entity's component set at the time of the call, so
	/// mutations made by systems running earlier in the tick are already
	/// reflected. A cleared signature means the entity lost all components.
	fn entity_changed(&mut self, _components: &mut ComponentStore, _entity: Entity, _signature: Signature) {}

	/// Executes the system.
	fn update(&mut self, components: &mut ComponentStore);
}
