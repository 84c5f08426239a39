//! [Components](Component) are the pieces of data attached to
//! [entities](crate::entities::Entity).
//!
//! A component is any `'static` data record. An entity's current set of
//! component types is summarised by its [Signature], one bit per registered
//! type, and all component instances live in a [ComponentStore].

mod component_id;
mod component_registry;
mod component_set;
mod component_store;

pub use component_id::*;
pub use component_registry::*;
pub use component_set::*;
pub use component_store::*;

use crate::data_structures::BitField;

/// The fixed ceiling on distinct component types a [ComponentRegistry] can
/// hand out ids for. Registering more is a fatal configuration error.
pub const MAX_COMPONENT_TYPES: usize = 64;

/// A bit per component type id, marking which types an entity currently has.
pub type Signature = BitField<{ (MAX_COMPONENT_TYPES + 31) / 32 }>;

/// Marker for types that can be attached to an entity as a component.
///
/// Blanket-implemented for every `'static` type; components need no manual
/// opt-in beyond owning their data.
pub trait Component: 'static {}

impl<T: 'static> Component for T {}
